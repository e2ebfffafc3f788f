/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod prerequisite_request;
mod prerequisite_response;

pub use output_format::OutputFormat;
pub use prerequisite_request::{PrerequisiteRequest, PrerequisiteRequestBuilder};
pub use prerequisite_response::PrerequisiteResponse;
