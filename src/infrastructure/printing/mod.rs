//! Print system implementations
//!
//! - `CupsPrintSystem` - production backend (CUPS client tools)
//! - `MemoryPrintSystem` - records instead of printing

mod cups;
mod memory;

pub use cups::CupsPrintSystem;
pub use memory::{MemoryPrintSystem, RawJobRecord, VerbCall};
