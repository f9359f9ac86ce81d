//! CLI entry point for the cube fault verifier.
//!
//! Usage:
//!   cube-verifier analyze <input.txt> [options]
//!   cube-verifier analyze --stdin [options]
//!
//! Options:
//!   --strict    Reject unrecognized instruction lines at parse time
//!               (default: replay them as no-ops, the reference behavior)
//!   --json      Emit a JSON report instead of the plain protocol output

mod cube;
mod executor;
mod input;
mod puzzle;
mod solver;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use puzzle::{Instruction, ParsePolicy};
use solver::{analyze, AnalysisReport, AnalysisResult};

#[derive(Parser)]
#[command(name = "cube-verifier")]
#[command(about = "Fault diagnosis for a rotating NxNxN cube puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Diagnose one spurious instruction and/or one mis-colored facelet
    Analyze {
        /// Path to puzzle input (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Reject unrecognized instruction lines instead of replaying
        /// them as no-ops
        #[arg(long)]
        strict: bool,

        /// Emit a JSON report instead of the plain protocol output
        #[arg(long)]
        json: bool,
    },
}

/// Machine-readable report format behind --json
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisOutput {
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    discarded_instruction: Option<String>,
    hypotheses_tested: usize,
    time_elapsed_ms: u64,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            stdin,
            strict,
            json,
        } => {
            let content = if stdin {
                let mut buffer = String::new();
                if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                    eprintln!("Error reading stdin: {}", e);
                    std::process::exit(1);
                }
                buffer
            } else if let Some(path) = file {
                match fs::read_to_string(&path) {
                    Ok(content) => content,
                    Err(e) => {
                        eprintln!("Error reading file {:?}: {}", path, e);
                        std::process::exit(1);
                    }
                }
            } else {
                eprintln!("Error: Must provide either a file path or --stdin");
                std::process::exit(1);
            };

            let policy = if strict {
                ParsePolicy::Strict
            } else {
                ParsePolicy::Permissive
            };

            let puzzle = match input::parse(&content, policy) {
                Ok(puzzle) => puzzle,
                Err(e) => {
                    eprintln!("Error parsing puzzle input: {:#}", e);
                    std::process::exit(1);
                }
            };

            let report = analyze(&puzzle.faces, &puzzle.instructions);

            if json {
                let output = format_report(&report, &puzzle.instructions);
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            } else {
                print_plain(&report, &puzzle.instructions);
            }
        }
    }
}

/// The plain output protocol: the discarded instruction text, `Faulty`
/// plus the text, or `Not Possible`.
fn print_plain(report: &AnalysisReport, instructions: &[Instruction]) {
    match report.result {
        AnalysisResult::Solved { discarded } => println!("{}", instructions[discarded]),
        AnalysisResult::FaultyColorAndInstruction { discarded } => {
            println!("Faulty");
            println!("{}", instructions[discarded]);
        }
        AnalysisResult::NotPossible => println!("Not Possible"),
    }
}

fn format_report(report: &AnalysisReport, instructions: &[Instruction]) -> AnalysisOutput {
    let (outcome, discarded) = match report.result {
        AnalysisResult::Solved { discarded } => ("solved", Some(discarded)),
        AnalysisResult::FaultyColorAndInstruction { discarded } => ("faulty", Some(discarded)),
        AnalysisResult::NotPossible => ("not_possible", None),
    };
    AnalysisOutput {
        outcome,
        discarded_instruction: discarded.map(|i| instructions[i].text.clone()),
        hypotheses_tested: report.hypotheses_tested,
        time_elapsed_ms: report.time_elapsed_ms,
    }
}
