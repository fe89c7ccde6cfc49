use std::path::Path;

use crate::domain::ast::{LambdaSite, SyntaxTree};
use crate::domain::error::ParseError;
use crate::domain::language::Language;

/// Turns source text into a syntax tree.
pub trait SourceParser {
    fn parse_file(&self, path: &Path, language: Language) -> Result<SyntaxTree, ParseError>;

    /// `origin` is only used to label errors.
    fn parse_source(
        &self,
        src: &[u8],
        language: Language,
        origin: &Path,
    ) -> Result<SyntaxTree, ParseError>;
}

pub trait LambdaCounter {
    fn count(&self, tree: &SyntaxTree) -> usize;

    /// Every lambda in document order.
    fn locate(&self, tree: &SyntaxTree) -> Vec<LambdaSite>;
}
