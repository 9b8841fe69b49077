/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only reaches infrastructure through these traits.
pub mod outbound;
