//! Domain Layer
//!
//! Pure types and rules without I/O.
//!
//! ## Structure
//!
//! - `entities/` - History log, print settings, recently-seen filter
//! - `value_objects/` - Extensions, paper sizes, document kinds
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod value_objects;
