use std::path::Path;

use tracing::debug;

use crate::domain::error::CountError;
use crate::domain::language::Language;
use crate::ports::{LambdaCounter, SourceParser};

pub struct CountUsecase<'a> {
    pub parser: &'a dyn SourceParser,
    pub counter: &'a dyn LambdaCounter,
}

impl<'a> CountUsecase<'a> {
    /// Parse `path` and count its lambdas. Nothing is counted if parsing fails.
    /// The tree is walked once either way.
    pub fn run(&self, path: &Path, language: Language) -> Result<usize, CountError> {
        let tree = self.parser.parse_file(path, language)?;

        let count = if tracing::enabled!(tracing::Level::DEBUG) {
            let sites = self.counter.locate(&tree);
            for site in &sites {
                debug!(line = site.line, column = site.column, "lambda");
            }
            sites.len()
        } else {
            self.counter.count(&tree)
        };

        debug!(path = %path.display(), %language, count, "counted lambdas");
        Ok(count)
    }
}
