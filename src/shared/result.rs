/// Type alias for Result with anyhow::Error as the error type.
/// Domain errors are `PrereqError` values carried inside the anyhow::Error.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
