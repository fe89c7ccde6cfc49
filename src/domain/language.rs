/// Language Domain Module
///
/// Defines the source languages whose lambdas can be counted.

use std::path::Path;

use crate::domain::ast::AstNodeKind;
use crate::domain::error::CountError;

/// Supported source languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Java,
    JavaScript,
    Cpp,
}

impl Language {
    /// Parse language from string (CLI input).
    pub fn from_str(s: &str) -> Option<Language> {
        match s.to_lowercase().as_str() {
            "java" => Some(Language::Java),
            "javascript" | "js" => Some(Language::JavaScript),
            "cpp" | "c++" | "cxx" => Some(Language::Cpp),
            _ => None,
        }
    }

    /// Infer language from file extension.
    pub fn from_extension(ext: &str) -> Option<Language> {
        let ext = ext.to_lowercase();
        [Language::Java, Language::JavaScript, Language::Cpp]
            .into_iter()
            .find(|lang| lang.extensions().contains(&ext.as_str()))
    }

    /// Infer language from a file path.
    pub fn from_path(path: &Path) -> Option<Language> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Pick the language for a run: an explicit name wins, then the
    /// extension, then Java.
    pub fn resolve(explicit: Option<&str>, path: &Path) -> Result<Language, CountError> {
        match explicit {
            Some(name) => {
                Self::from_str(name).ok_or_else(|| CountError::UnsupportedLanguage(name.to_string()))
            }
            None => Ok(Self::from_path(path).unwrap_or_default()),
        }
    }

    /// Get the display name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::Cpp => "C++",
        }
    }

    /// Get the file extensions for this language.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::Java => &["java"],
            Language::JavaScript => &["js", "mjs", "cjs", "jsx"],
            Language::Cpp => &["cc", "cpp", "cxx", "c++", "hpp", "hh", "hxx"],
        }
    }

    pub fn grammar(&self) -> tree_sitter::Language {
        match self {
            Language::Java => tree_sitter_java::language(),
            Language::JavaScript => tree_sitter_javascript::language(),
            Language::Cpp => tree_sitter_cpp::language(),
        }
    }

    /// Grammar node kinds that denote an anonymous function literal.
    pub fn lambda_kinds(&self) -> &'static [&'static str] {
        match self {
            Language::Java => &["lambda_expression"],
            // Only arrow functions; `function` expressions are not counted.
            Language::JavaScript => &["arrow_function"],
            Language::Cpp => &["lambda_expression"],
        }
    }

    pub fn comment_kinds(&self) -> &'static [&'static str] {
        match self {
            Language::Java => &["comment", "line_comment", "block_comment"],
            Language::JavaScript | Language::Cpp => &["comment"],
        }
    }

    /// Map a grammar node kind onto the kinds the counter distinguishes.
    pub fn classify(&self, kind: &str) -> AstNodeKind {
        if self.lambda_kinds().contains(&kind) {
            AstNodeKind::Lambda
        } else if self.comment_kinds().contains(&kind) {
            AstNodeKind::Comment
        } else {
            AstNodeKind::Other
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Java
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
