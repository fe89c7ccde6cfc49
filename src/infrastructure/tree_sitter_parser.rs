use std::fs;
use std::path::Path;

use tracing::debug;
use tree_sitter::Parser;

use crate::domain::ast::{ParseOptions, SyntaxTree};
use crate::domain::error::ParseError;
use crate::domain::language::Language;
use crate::infrastructure::tree_walker::first_error;
use crate::ports::SourceParser;

/// Parses source files with the tree-sitter grammar of their language.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeSitterParser {
    pub options: ParseOptions,
}

impl TreeSitterParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }
}

impl SourceParser for TreeSitterParser {
    fn parse_file(&self, path: &Path, language: Language) -> Result<SyntaxTree, ParseError> {
        // The file handle lives only for this read.
        let src = fs::read(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_source(&src, language, path)
    }

    fn parse_source(
        &self,
        src: &[u8],
        language: Language,
        origin: &Path,
    ) -> Result<SyntaxTree, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(language.grammar())
            .map_err(|_| ParseError::Grammar(language.name()))?;

        debug!(path = %origin.display(), %language, bytes = src.len(), "parsing");

        let tree = parser
            .parse(src, None)
            .ok_or_else(|| ParseError::Aborted(origin.to_path_buf()))?;

        if let Some((line, column)) = first_error(tree.root_node()) {
            return Err(ParseError::Syntax {
                path: origin.to_path_buf(),
                line,
                column,
            });
        }

        Ok(SyntaxTree::new(tree, language, self.options))
    }
}
