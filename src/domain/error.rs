use std::path::PathBuf;

/// Failures while turning a source file into a syntax tree.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("syntax error in {} at line {line}, column {column}", .path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
    },
    #[error("the {0} grammar could not be loaded")]
    Grammar(&'static str),
    #[error("parser produced no tree for {}", .0.display())]
    Aborted(PathBuf),
}

#[derive(thiserror::Error, Debug)]
pub enum CountError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

impl CountError {
    pub fn is_syntax(&self) -> bool {
        matches!(self, CountError::Parse(ParseError::Syntax { .. }))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, CountError::Parse(ParseError::Io { .. }))
    }
}
