mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{compile, init, CompileArgs, InitArgs};

/// Tokengen CLI - compile design variable snapshots to CSS and Restyle
#[derive(Parser, Debug)]
#[command(name = "tokengen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new tokengen project
    Init(InitArgs),

    /// Compile snapshot files to target formats
    Compile(CompileArgs),
}

fn main() {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Compile(args) => compile(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
