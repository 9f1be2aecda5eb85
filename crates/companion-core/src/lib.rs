pub mod annotate;
pub mod event_bus;
pub mod format;
pub mod ports;
pub mod store;
pub mod workflow;
