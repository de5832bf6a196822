mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{css, edit, validate, CssArgs, EditArgs, ValidateArgs};

/// Brandkit CLI - brand token document tooling
#[derive(Parser, Debug)]
#[command(name = "brandkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a brand document and report dangling token references
    Validate(ValidateArgs),

    /// Compile a brand document to CSS
    Css(CssArgs),

    /// Apply a scoped JSON edit to a brand document
    Edit(EditArgs),
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Validate(args) => validate(args),
        Command::Css(args) => css(args),
        Command::Edit(args) => edit(args),
    };

    if let Err(err) = result {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
