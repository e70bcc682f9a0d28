//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Choosing the event output format (text/JSON)
//!
//! ## Usage
//!
//! ```ignore
//! use printwatch::presentation::factory;
//!
//! let system = factory::create_print_system(&config, false, &[]);
//! let dispatcher = factory::create_dispatcher(&config, system, factory::create_event_sink(json));
//! ```

pub mod factory;

pub use factory::{create_dispatcher, create_event_sink, create_print_system, ConcreteDispatcher};
