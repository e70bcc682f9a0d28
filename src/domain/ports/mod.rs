//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod history_repository;
pub mod print_events;
pub mod print_system;

pub use history_repository::{HistoryError, HistoryRepository};
pub use print_events::{NoopEventSink, PrintEvent, PrintEventSink};
pub use print_system::{
    JobOptions, PrintResult, PrintSystem, PrintSystemError, PrintTarget, PrinterHandle,
    PrinterInfo,
};
