/// Ports module defining interfaces for hexagonal architecture
///
/// The analysis core only depends on the outbound (driven) ports declared
/// here; concrete implementations live in `crate::adapters`.
pub mod outbound;
