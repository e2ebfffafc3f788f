mod database_parser;
mod leaf_extractor;
mod tree_builder;

pub use database_parser::DatabaseParser;
pub use leaf_extractor::LeafExtractor;
pub use tree_builder::TreeBuilder;
