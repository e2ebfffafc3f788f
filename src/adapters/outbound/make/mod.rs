/// make adapters - obtaining the rule database from a live make
mod make_database_reader;

pub use make_database_reader::{MakeDatabaseReader, MakeInvocation};
