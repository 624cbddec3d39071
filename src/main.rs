use std::io::{self, BufRead};
use std::process;

use clap::{Parser, Subcommand};
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use twasum::error::{format_error_context, get_error_suggestion, random_scots_exclamation};
use twasum::gcd;
use twasum::lexer;
use twasum::parser::parse;
use twasum::{find_pair, IndexPair, Puzzle};

/// twasum - A wee two-sum solver
/// Twa numbers, ane target!
#[derive(Parser)]
#[command(name = "twasum")]
#[command(author = "Arthur")]
#[command(version = "0.1.0")]
#[command(about = "A wee two-sum solver - twa numbers, ane target!", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solve a puzzle line directly, e.g. '[2,7,11,15], 9'
    #[arg(value_name = "LINE")]
    line: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle line (reads ane line fae stdin when LINE is absent)
    Solve {
        /// The puzzle line, e.g. '[2,7,11,15], 9'
        line: Option<String>,

        /// Emit the result as JSON instead o' prose
        #[arg(long)]
        json: bool,
    },

    /// Check a puzzle line fer errors without solvin' it
    Check {
        /// The puzzle line to check
        line: String,
    },

    /// Show tokens from the lexer (for debugging)
    Tokens {
        /// The puzzle line to tokenize
        line: String,
    },

    /// Greatest common divisor o' twa numbers
    Gcd {
        a: i64,
        b: i64,
    },

    /// Start the interactive REPL
    Repl,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Solve { line, json }) => solve_command(line, json),
        Some(Commands::Check { line }) => check_line(&line),
        Some(Commands::Tokens { line }) => show_tokens(&line),
        Some(Commands::Gcd { a, b }) => show_gcd(a, b),
        Some(Commands::Repl) => run_repl(),
        None => {
            // If a line is provided directly, solve it
            if let Some(line) = cli.line {
                solve_line(&line, false)
            } else {
                // Otherwise, start REPL
                run_repl()
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", random_scots_exclamation().red().bold(), e);
        process::exit(1);
    }
}

fn solve_command(line: Option<String>, json: bool) -> Result<(), String> {
    let line = match line {
        Some(line) => line,
        None => read_stdin_line()?,
    };
    solve_line(&line, json)
}

fn solve_line(line: &str, json: bool) -> Result<(), String> {
    let puzzle = match parse(line) {
        Ok(p) => p,
        Err(e) => return Err(format_parse_error(line, e)),
    };

    let pair = find_pair(&puzzle.nums, puzzle.target);

    if json {
        print_json(&puzzle, pair);
        return Ok(());
    }

    match pair {
        Some(pair) => {
            println!(
                "{} {} - {} + {} = {}",
                "Bonnie!".green().bold(),
                pair,
                puzzle.nums[pair.first],
                puzzle.nums[pair.second],
                puzzle.target
            );
        }
        None => {
            println!(
                "{} nae twa numbers in {} sum tae {}",
                "Nae pair:".yellow().bold(),
                puzzle,
                puzzle.target
            );
        }
    }

    Ok(())
}

fn print_json(puzzle: &Puzzle, pair: Option<IndexPair>) {
    let report = serde_json::json!({
        "nums": puzzle.nums,
        "target": puzzle.target,
        "found": pair.is_some(),
        "indices": pair.map(|p| [p.first, p.second]),
    });
    println!("{}", report);
}

fn check_line(line: &str) -> Result<(), String> {
    // Lex
    let tokens = match lexer::lex(line) {
        Ok(t) => t,
        Err(e) => return Err(format_parse_error(line, e)),
    };
    println!("{} Lexing passed ({} tokens)", "✓".green(), tokens.len());

    // Parse
    let puzzle = match parse(line) {
        Ok(p) => p,
        Err(e) => return Err(format_parse_error(line, e)),
    };
    println!("{} Parsing passed", "✓".green());

    println!(
        "\n{} {} numbers an' a target o' {} - looks braw!",
        "Bonnie!".green().bold(),
        puzzle.nums.len(),
        puzzle.target
    );

    Ok(())
}

fn show_tokens(line: &str) -> Result<(), String> {
    let tokens = match lexer::lex(line) {
        Ok(t) => t,
        Err(e) => return Err(format_parse_error(line, e)),
    };

    println!("{}", "Tokens:".cyan().bold());
    println!("{}", "─".repeat(40));

    for token in &tokens {
        println!(
            "{:3}  {:15} {:?}",
            token.column,
            format!("{}", token.kind).green(),
            token.lexeme.dimmed()
        );
    }

    println!("{}", "─".repeat(40));
    println!("Total: {} tokens", tokens.len());

    Ok(())
}

fn show_gcd(a: i64, b: i64) -> Result<(), String> {
    println!(
        "{} gcd({}, {}) = {}",
        "Bonnie!".green().bold(),
        a,
        b,
        gcd::gcd(a, b)
    );

    match gcd::lcm(a, b) {
        Some(m) => println!("  {} lcm({}, {}) = {}", "an'".dimmed(), a, b, m),
        None => println!(
            "  {} lcm({}, {}) is ower muckle fer 64 bits",
            "but".dimmed(),
            a,
            b
        ),
    }

    Ok(())
}

fn read_stdin_line() -> Result<String, String> {
    let mut line = String::new();
    let bytes = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| format!("Cannae read fae stdin: {}", e))?;

    if bytes == 0 {
        return Err("There's naething on stdin tae solve!".to_string());
    }

    Ok(line)
}

fn run_repl() -> Result<(), String> {
    println!("{}", "═".repeat(50).cyan());
    println!("{}", "  twasum REPL - A Wee Two-Sum Solver".cyan().bold());
    println!("{}", "  Twa numbers, ane target!".cyan());
    println!("{}", "═".repeat(50).cyan());
    println!();
    println!(
        "{}",
        "Gie me a line like '[2,7,11,15], 9'. Type 'help' fer help, 'quit' tae exit.".dimmed()
    );
    println!();

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => return Err(e.to_string()),
    };

    // Try to load history from file
    let history_path = dirs::home_dir()
        .map(|h| h.join(".twasum_history"))
        .unwrap_or(std::path::PathBuf::from(".twasum_history"));

    if history_path.exists() {
        let _ = rl.load_history(&history_path);
    }

    loop {
        let prompt = format!("{} ", "twasum>".green().bold());
        let readline = rl.readline(&prompt);

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line.as_str());

                match trimmed.to_lowercase().as_str() {
                    "quit" | "exit" | "haud yer wheesht" | "bye" | "cheers" => {
                        println!("{}", "Haste ye back! Slàinte!".cyan());
                        break;
                    }
                    "help" | "halp" => {
                        print_repl_help();
                        continue;
                    }
                    "clear" | "cls" => {
                        print!("\x1B[2J\x1B[1;1H");
                        continue;
                    }
                    "examples" => {
                        print_repl_examples();
                        continue;
                    }
                    _ => {}
                }

                if let Err(e) = solve_line(&line, false) {
                    eprintln!("{}: {}", "Och!".red().bold(), e);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "Interrupted! Use 'quit' tae leave.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Haste ye back! Slàinte!".cyan());
                break;
            }
            Err(err) => {
                eprintln!("{}: {:?}", "Error".red(), err);
                break;
            }
        }
    }

    // Save history on exit
    if let Err(e) = rl.save_history(&history_path) {
        eprintln!("{}: Couldnae save history: {}", "Warning".yellow(), e);
    }

    Ok(())
}

fn print_repl_help() {
    println!();
    println!("{}", "═".repeat(50).cyan());
    println!("{}", "  twasum Help".cyan().bold());
    println!("{}", "═".repeat(50).cyan());
    println!();

    println!("{}", "Puzzle lines:".yellow().bold());
    println!("  A list o' integers in brackets, a comma, then the target.");
    println!("  The answer is the twa indices whose values sum tae the target.");
    println!();

    println!("{}", "REPL Commands:".yellow().bold());
    println!("  {}      - show this help", "help".green());
    println!("  {}      - exit the REPL", "quit".green());
    println!("  {}     - clear the screen", "clear".green());
    println!("  {}  - see example lines", "examples".green());
    println!();
}

fn print_repl_examples() {
    println!();
    println!("{}", "Examples:".yellow().bold());
    println!("  {}  {}", "[2,7,11,15], 9".green(), "-> (0, 1)".dimmed());
    println!("  {}      {}", "[3,2,4], 6".green(), "-> (1, 2)".dimmed());
    println!("  {}        {}", "[3,3], 6".green(), "-> (0, 1)".dimmed());
    println!(
        "  {}    {}",
        "[1,2,3], 100".green(),
        "-> nae pair".dimmed()
    );
    println!();
}

fn format_parse_error(source: &str, error: twasum::TwasumError) -> String {
    let mut msg = format!("{}", error);

    if let Some(column) = error.column() {
        msg.push_str("\n\n");
        msg.push_str(&format_error_context(source, column));
    }

    // Add helpful suggestion if available
    if let Some(suggestion) = get_error_suggestion(&error) {
        msg.push('\n');
        msg.push_str(suggestion);
    }

    msg
}
