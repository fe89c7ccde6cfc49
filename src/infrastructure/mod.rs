// Infrastructure implementations for lambda-counter.

pub mod counter;
pub mod logging;
pub mod tree_sitter_parser;
pub mod tree_walker;

pub use counter::CursorLambdaCounter;
pub use tree_sitter_parser::TreeSitterParser;
