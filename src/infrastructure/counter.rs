use crate::domain::ast::{AstNodeKind, LambdaSite, SyntaxTree};
use crate::infrastructure::tree_walker::{walk, Walk};
use crate::ports::LambdaCounter;

/// Counts lambdas with a single cursor walk over the whole tree.
///
/// Every lambda node counts, wherever it sits: nested lambdas, field
/// initializers and annotation arguments included.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorLambdaCounter;

impl CursorLambdaCounter {
    fn visit<'t, F>(tree: &'t SyntaxTree, mut on_lambda: F)
    where
        F: FnMut(tree_sitter::Node<'t>),
    {
        let skip_comments = !tree.options().attribute_comments;
        walk(tree.root_node(), |node| match tree.classify(&node) {
            AstNodeKind::Lambda => {
                on_lambda(node);
                Walk::Descend
            }
            AstNodeKind::Comment if skip_comments => Walk::Skip,
            _ => Walk::Descend,
        });
    }
}

impl LambdaCounter for CursorLambdaCounter {
    fn count(&self, tree: &SyntaxTree) -> usize {
        let mut count = 0;
        Self::visit(tree, |_| count += 1);
        count
    }

    fn locate(&self, tree: &SyntaxTree) -> Vec<LambdaSite> {
        let mut sites = Vec::new();
        Self::visit(tree, |node| sites.push(LambdaSite::of(&node)));
        sites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ast::ParseOptions;
    use crate::domain::language::Language;
    use crate::infrastructure::TreeSitterParser;
    use crate::ports::SourceParser;
    use std::path::Path;

    fn tree(src: &str, language: Language) -> SyntaxTree {
        TreeSitterParser::default()
            .parse_source(src.as_bytes(), language, Path::new("test"))
            .unwrap()
    }

    fn count(src: &str, language: Language) -> usize {
        CursorLambdaCounter.count(&tree(src, language))
    }

    #[test]
    fn test_no_lambdas() {
        assert_eq!(count("class A { int f(int x) { return x + 1; } }", Language::Java), 0);
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(count("", Language::Java), 0);
    }

    #[test]
    fn test_single_lambda_assigned_to_variable() {
        let src = r#"
            class A {
                void f() {
                    java.util.function.Function<Integer, Integer> inc = x -> x + 1;
                }
            }
        "#;
        assert_eq!(count(src, Language::Java), 1);
    }

    #[test]
    fn test_nested_lambdas_count_separately() {
        let src = r#"
            import java.util.function.*;
            class A {
                Supplier<Runnable> field = () -> () -> System.out.println("hi");
                void f(java.util.List<Integer> xs) {
                    xs.forEach(x -> { Runnable r = () -> {}; });
                }
            }
        "#;
        assert_eq!(count(src, Language::Java), 4);
    }

    #[test]
    fn test_method_reference_is_not_a_lambda() {
        let src = "class A { void f(java.util.List<String> xs) { xs.forEach(System.out::println); } }";
        assert_eq!(count(src, Language::Java), 0);
    }

    #[test]
    fn test_lambda_text_in_comments_is_ignored() {
        let src = r#"
            class A {
                // Runnable r = () -> {};
                /* x -> x */
                String s = "() -> 1";
            }
        "#;
        assert_eq!(count(src, Language::Java), 0);
    }

    #[test]
    fn test_comment_option_does_not_change_count() {
        let src = "class A { /* c */ Runnable r = () -> {}; }";
        let parser = TreeSitterParser::new(ParseOptions { attribute_comments: true });
        let tree = parser
            .parse_source(src.as_bytes(), Language::Java, Path::new("A.java"))
            .unwrap();
        assert_eq!(CursorLambdaCounter.count(&tree), 1);
    }

    #[test]
    fn test_javascript_counts_arrow_functions_only() {
        let src = r#"
            const a = (x) => x * 2;
            const b = function (y) { return y; };
            [1, 2].map(n => [n].map(m => m + 1));
        "#;
        assert_eq!(count(src, Language::JavaScript), 3);
    }

    #[test]
    fn test_cpp_lambdas() {
        let src = r#"
            int main() {
                auto f = [](int x) { return x + 1; };
                auto g = [&]() { return f(1); };
                return g();
            }
        "#;
        assert_eq!(count(src, Language::Cpp), 2);
    }

    #[test]
    fn test_locate_reports_sites_in_order() {
        let src = "class A {\n  Runnable a = () -> {};\n  Runnable b = () -> {};\n}\n";
        let sites = CursorLambdaCounter.locate(&tree(src, Language::Java));
        assert_eq!(
            sites,
            vec![
                LambdaSite { line: 2, column: 16 },
                LambdaSite { line: 3, column: 16 },
            ]
        );
    }

    #[test]
    fn test_count_matches_locate() {
        let src = "class A { Runnable r = () -> { Runnable s = () -> {}; }; }";
        let t = tree(src, Language::Java);
        assert_eq!(CursorLambdaCounter.count(&t), CursorLambdaCounter.locate(&t).len());
    }
}
