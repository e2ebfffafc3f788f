/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (make, file system, console).
pub mod content_hasher;
pub mod database_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod result_formatter;

pub use content_hasher::{ContentHasher, HashOutcome};
pub use database_reader::DatabaseReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use result_formatter::ResultFormatter;
