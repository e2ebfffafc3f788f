/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the interfaces the application core uses to reach
/// make, the file system and the console.
pub mod outbound;
