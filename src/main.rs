//! Declan CLI
//!
//! Main entry point for the `declan` command. With a file argument the
//! pipeline runs once over its contents; without one, the interactive loop
//! starts.

use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use declan::common::{LogLevel, RunConfig};
use declan::diagnostics::SourceFile;

#[derive(Parser)]
#[command(name = "declan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "The Declan declaration-language interpreter", long_about = None)]
struct Cli {
    /// Source file to execute; starts the REPL when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Log level: 0 none, 1 error, 2 warning, 3 info, 4 debug
    #[arg(
        short = 'l',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(0..=4)
    )]
    log_level: u8,

    /// Emit an intermediate representation instead of executing
    #[arg(long, value_enum, requires = "file")]
    emit: Option<EmitType>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EmitType {
    /// Token stream
    Tokens,
    /// Abstract Syntax Tree (JSON)
    Ast,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = LogLevel::from_cli(cli.log_level);

    // Initialize tracing at the requested verbosity
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(log_level.filter_directive()))
        .init();

    match cli.file {
        Some(path) => run_file(&path, log_level, cli.emit),
        None => declan::repl::run(log_level).into_diagnostic(),
    }
}

fn run_file(path: &Path, log_level: LogLevel, emit: Option<EmitType>) -> Result<()> {
    tracing::info!("running {:?}", path);

    let content = std::fs::read_to_string(path)
        .map_err(|e| miette::miette!("Could not read file: {}: {}", path.display(), e))?;
    let source = SourceFile::new(path.to_string_lossy(), content);

    if let Some(emit) = emit {
        return emit_ir(&source, emit);
    }

    let config = RunConfig {
        echo: false,
        log_level,
    };
    match declan::run(&source, &config) {
        Ok(result) => {
            tracing::debug!(%result, "execution finished");
            Ok(())
        }
        Err(diagnostic) => Err(diagnostic.into()),
    }
}

fn emit_ir(source: &SourceFile, emit: EmitType) -> Result<()> {
    match emit {
        EmitType::Tokens => {
            let tokens = declan::lexer::lex(source).map_err(miette::Report::new)?;
            for token in &tokens {
                println!(
                    "Token: {}, Line: {}, Column: {}, Lexeme: '{}'",
                    token.kind, token.line, token.column, token.text
                );
            }
        }
        EmitType::Ast => {
            let ast = declan::parser::parse(source).map_err(miette::Report::new)?;
            let json = serde_json::to_string_pretty(&ast).into_diagnostic()?;
            println!("{}", json);
        }
    }
    Ok(())
}
