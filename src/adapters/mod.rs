/// Adapters module - infrastructure implementations of the ports
///
/// Only outbound (driven) adapters exist; the CLI in `main.rs` drives the
/// application directly.
pub mod outbound;
