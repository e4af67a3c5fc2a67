//! Absurdle Dict CLI
//!
//! Decodes the compressed Absurdle dictionary and inspects the result.

use std::path::PathBuf;

use absurdle_dict::{decode_file, read_flat, Category, Result, Vocabulary};
use clap::{Parser, Subcommand};

/// Tools for preparing the Absurdle dictionary for a solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expand a compressed dictionary into flat word lists
    Decode {
        /// Compressed dictionary ({"N": {...}, "I": {...}})
        #[arg(short, long, default_value = "res/absurdle_raw.json")]
        input: PathBuf,

        /// Where to write the flat dictionary
        #[arg(short, long, default_value = "res/absurdle.json")]
        output: PathBuf,

        /// Indent the written JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print word counts of a flat dictionary
    Inspect {
        /// Flat dictionary ({"guesses": [...], "solutions": [...]})
        #[arg(short, long, default_value = "res/absurdle.json")]
        input: PathBuf,
    },
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Decode {
            input,
            output,
            pretty,
        } => {
            let flat = decode_file(&input, &output, pretty)?;
            println!(
                "Decoded {} solutions and {} guesses into {}",
                flat.solutions.len(),
                flat.guesses.len(),
                output.display()
            );
        }
        Command::Inspect { input } => {
            let flat = read_flat(&input)?;
            let vocabulary = Vocabulary::from_flat(&flat);

            println!("{}", input.display());
            for category in Category::ALL {
                println!(
                    "  {:<10} {:>6} words",
                    category.output_key(),
                    flat.words(category).len()
                );
            }
            println!("Solver vocabulary:");
            println!("  {:<10} {:>6} distinct", "solutions", vocabulary.solutions().len());
            println!("  {:<10} {:>6} distinct", "guesses", vocabulary.guesses().len());
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
