// Syntax tree types for lambda-counter.
// The tree itself is built by tree-sitter; these types only describe how we look at it.

use crate::domain::language::Language;
use tree_sitter::{Node, Tree};

/// The node kinds the counter cares about. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstNodeKind {
    Lambda,
    Comment,
    Other,
}

/// Options applied while parsing and walking a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// When false, comment subtrees are pruned from traversal.
    pub attribute_comments: bool,
}

/// A parsed source file. Immutable once built.
pub struct SyntaxTree {
    tree: Tree,
    language: Language,
    options: ParseOptions,
}

impl SyntaxTree {
    pub fn new(tree: Tree, language: Language, options: ParseOptions) -> Self {
        Self { tree, language, options }
    }

    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Classify a node of this tree.
    pub fn classify(&self, node: &Node<'_>) -> AstNodeKind {
        if !node.is_named() {
            return AstNodeKind::Other;
        }
        self.language.classify(node.kind())
    }
}

impl std::fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("language", &self.language)
            .field("root", &self.tree.root_node().kind())
            .finish()
    }
}

/// Location of one lambda in the source, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LambdaSite {
    pub line: usize,
    pub column: usize,
}

impl LambdaSite {
    pub fn of(node: &Node<'_>) -> Self {
        let pos = node.start_position();
        Self {
            line: pos.row + 1,
            column: pos.column + 1,
        }
    }
}
