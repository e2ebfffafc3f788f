mod missing_file_policy;

pub use missing_file_policy::MissingFilePolicy;
