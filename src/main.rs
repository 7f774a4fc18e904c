use std::fs;
use std::process;

use clap::{Parser as ClapParser, Subcommand};
use colored::Colorize;

use skibidi::interpreter::Interpreter;
use skibidi::repl::Repl;
use skibidi::source::parse_source;

#[derive(ClapParser)]
#[command(
    name = "skibidi",
    about = "🚽 Skibidi Programming Language v1.0",
    after_help = KEYWORDS_HELP
)]
struct Cli {
    /// Start interactive mode
    #[arg(short = 'i')]
    interactive: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Skibidi program
    Run { file: String },
    /// Start interactive mode
    Interactive,
}

const KEYWORDS_HELP: &str = "\
📚 Skibidi Keywords:
  skibidi x rizz 5 ohio     - declare variable
  x rizz 10 ohio            - assign variable
  gyatt x ohio              - print variable
  cap (x > 5) { ... }       - if statement
  nocap { ... }             - else statement
  bussin (x < 10) { ... }   - while loop
  bruh this is a comment    - comment
  ohio                      - end statement";

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // clap renders its own help text and unknown-command suggestions;
        // every CLI outcome exits 0.
        Err(e) => {
            let _ = e.print();
            process::exit(0);
        }
    };

    match cli.command {
        Some(Commands::Run { file }) => cmd_run(&file),
        Some(Commands::Interactive) => cmd_repl(),
        None if cli.interactive => cmd_repl(),
        None => print_banner(),
    }
}

fn print_banner() {
    println!("🚽 Skibidi Programming Language v1.0");
    println!("Usage:");
    println!("  skibidi run <filename.skibidi>  - Run a Skibidi program");
    println!("  skibidi -i                      - Interactive mode");
    println!("  skibidi help                    - Show this help");
    println!();
    println!("{}", KEYWORDS_HELP);
}

fn cmd_run(file: &str) {
    if !file.ends_with(".skibidi") {
        println!(
            "{}",
            format!("⚠️  Warning: File '{}' doesn't have .skibidi extension", file).yellow()
        );
    }

    let source = match fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            println!(
                "{}",
                format!("❌ Error reading file '{}': {}", file, e).red()
            );
            return;
        }
    };

    println!("🚀 Running Skibidi program: {}", file);
    println!("{}", "=".repeat(40));
    run_source(&source);
    println!("{}", "=".repeat(40));
    println!("✅ Program execution completed!");
}

/// A failed run still exits 0; the error line is the report.
fn run_source(source: &str) {
    let program = match parse_source(source) {
        Ok(p) => p,
        Err(e) => {
            println!("{}", format!("Skibidi Error: {}", e).red());
            return;
        }
    };

    let mut interp = Interpreter::new();
    if let Err(e) = interp.execute(&program) {
        println!("{}", format!("Skibidi Error: {}", e).red());
    }
}

fn cmd_repl() {
    let mut repl = Repl::new(Interpreter::new());
    repl.run();
}
