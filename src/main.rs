// Command-line entry point for lambda-counter.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lambda_counter::application::CountUsecase;
use lambda_counter::domain::ast::ParseOptions;
use lambda_counter::domain::language::Language;
use lambda_counter::infrastructure::logging::init_logging;
use lambda_counter::infrastructure::{CursorLambdaCounter, TreeSitterParser};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to analyze
    #[arg(allow_hyphen_values = true)]
    path: PathBuf,

    /// Source language (java, javascript, cpp). Inferred from the extension if omitted.
    #[arg(short, long)]
    language: Option<String>,

    /// Anything after the path is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    if !cli.ignored.is_empty() {
        debug!(ignored = ?cli.ignored, "ignoring extra arguments");
    }

    let language = Language::resolve(cli.language.as_deref(), &cli.path)?;

    let parser = TreeSitterParser::new(ParseOptions {
        attribute_comments: false,
    });
    let usecase = CountUsecase {
        parser: &parser,
        counter: &CursorLambdaCounter,
    };

    let count = usecase
        .run(&cli.path, language)
        .with_context(|| format!("failed to count lambdas in {}", cli.path.display()))?;

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", count)?;
    stdout.flush()?;

    Ok(())
}
