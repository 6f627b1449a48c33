use clap::Parser;
use intcalc::printing::render_tree;
use intcalc::{evaluate_tree, parse_line};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Evaluates integer arithmetic with + - * / and parentheses, one line at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prompt shown before each line.
    #[arg(short, long, default_value = "calc> ")]
    prompt: String,

    /// Print the parsed tree before each result.
    #[arg(short, long)]
    tree: bool,

    /// Evaluate this expression and exit instead of starting the prompt.
    expression: Option<String>,
}

/// Prints the result of one line, or a caret under the problem and the
/// error. `indent` is the width of the prompt the line was typed after; with
/// no prompt the line is echoed first so the caret has something to point at.
fn report(line: &str, indent: Option<usize>, show_tree: bool) -> bool {
    let outcome = parse_line(line).and_then(|tree| {
        if show_tree {
            print!("{}", render_tree(&tree));
        }
        evaluate_tree(&tree)
    });

    match outcome {
        Ok(output) => {
            println!("{output}");
            true
        },
        Err(e) => {
            debug!(error = ?e, "rejected line");
            if let Some(column) = e.column(line.chars().count()) {
                let indent = indent.unwrap_or_else(|| {
                    println!("{line}");
                    0
                });
                println!("{:width$}^", "", width = indent + column);
            }
            println!("Error, {e}");
            false
        },
    }
}

fn repl(args: &Args) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let indent = args.prompt.chars().count();

    loop {
        match editor.readline(&args.prompt) {
            Ok(line) => {
                let command = line.trim();
                if command.is_empty() {
                    continue;
                }
                if command == "exit" {
                    println!("Bye !");
                    return Ok(());
                }
                editor.add_history_entry(command)?;
                report(&line, Some(indent), args.tree);
            },
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if let Some(expression) = &args.expression {
        return if report(expression, None, args.tree) { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    match repl(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "line editor failed");
            println!("Error, {e}");
            ExitCode::FAILURE
        },
    }
}
