//! Command-line driver for the traversal primitives.
//!
//! Every collection and pattern argument is a literal (`'[1, 2i, 3.14]'`,
//! `'(5..10)'`, `/t/`, `Numeric`), so the library's operations can be tried
//! from a shell.

mod check;
mod logging;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use enumerable::{Combinator, Counter, Pattern, Value, read};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "enumerable",
    version,
    about = "Traverse, test and fold literal collections"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the built-in scenarios and report how many passed.
    Check,
    /// True if every element matches PATTERN (truthiness without one).
    All { seq: String, pattern: Option<String> },
    /// True if some element matches PATTERN (truthiness without one).
    Any { seq: String, pattern: Option<String> },
    /// True if no element matches PATTERN (truthiness without one).
    None { seq: String, pattern: Option<String> },
    /// Number of elements, or of elements equal to VALUE.
    Count { seq: String, value: Option<String> },
    /// Fold the elements with a named operator (+ - * / % **).
    Reduce {
        seq: String,
        op: String,
        /// Seed for the accumulator.
        #[arg(short, long)]
        initial: Option<String>,
    },
    /// Print each element on its own line.
    Each { seq: String },
    /// Print `index: element` for each element.
    EachWithIndex { seq: String },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Check => cmd_check(),
        Command::All { seq, pattern } => {
            let (seq, pattern) = quantifier_args(&seq, pattern.as_deref())?;
            println!("{}", enumerable::all(&seq, &pattern)?);
            Ok(())
        }
        Command::Any { seq, pattern } => {
            let (seq, pattern) = quantifier_args(&seq, pattern.as_deref())?;
            println!("{}", enumerable::any(&seq, &pattern)?);
            Ok(())
        }
        Command::None { seq, pattern } => {
            let (seq, pattern) = quantifier_args(&seq, pattern.as_deref())?;
            println!("{}", enumerable::none(&seq, &pattern)?);
            Ok(())
        }
        Command::Count { seq, value } => {
            let seq = literal(&seq)?;
            let value = value.as_deref().map(literal).transpose()?;
            println!("{}", enumerable::count(&seq, &Counter::resolve(value, None))?);
            Ok(())
        }
        Command::Reduce { seq, op, initial } => cmd_reduce(&seq, &op, initial.as_deref()),
        Command::Each { seq } => {
            enumerable::each(&literal(&seq)?, |element| println!("{element}"))?;
            Ok(())
        }
        Command::EachWithIndex { seq } => {
            enumerable::each_with_index(&literal(&seq)?, |element, index| {
                println!("{index}: {element}")
            })?;
            Ok(())
        }
    }
}

fn literal(src: &str) -> Result<Value> {
    read(src).with_context(|| format!("cannot read literal {src:?}"))
}

fn quantifier_args(seq: &str, pattern: Option<&str>) -> Result<(Value, Pattern<'static>)> {
    let seq = literal(seq)?;
    let arg = pattern.map(literal).transpose()?;
    Ok((seq, Pattern::resolve(arg, None)))
}

fn cmd_reduce(seq: &str, op: &str, initial: Option<&str>) -> Result<()> {
    let seq = literal(seq)?;
    let combinator =
        Combinator::operator(op).with_context(|| format!("cannot reduce with {op:?}"))?;
    let initial = initial.map(literal).transpose()?;
    debug!(%seq, ?combinator, "reduce requested");
    println!("{}", enumerable::reduce(&seq, initial, &combinator)?);
    Ok(())
}

fn cmd_check() -> Result<()> {
    let summary = check::run_all();
    println!(
        "{} passed, {} failed",
        summary.passed,
        summary.failed.len()
    );
    if !summary.failed.is_empty() {
        let names: Vec<_> = summary.failed.iter().map(|f| f.name).collect();
        bail!("failing scenarios: {}", names.join(", "));
    }
    Ok(())
}
