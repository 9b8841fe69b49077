/// Outbound adapters - concrete implementations of outbound ports
pub mod console;
pub mod filesystem;
pub mod formatters;
