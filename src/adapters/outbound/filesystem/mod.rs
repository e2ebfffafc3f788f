/// Filesystem adapters for file I/O operations
mod dump_file_reader;
mod file_hasher;
mod stdout_presenter;

pub use dump_file_reader::DumpFileReader;
pub use file_hasher::Sha256FileHasher;
pub use stdout_presenter::StdoutPresenter;
