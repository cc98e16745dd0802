use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use lex_engine::engine::{explain, transliterate, ClusterTrace};
use lex_engine::table::RuleTable;

#[derive(Parser)]
#[command(name = "liptool", about = "Transliteration diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate a text argument
    Convert {
        /// Text to transliterate
        text: String,
        /// Rule table (.toml source or compiled .lpt); built-in when omitted
        #[arg(long)]
        table: Option<PathBuf>,
    },

    /// Show the per-cluster conversion trace for a text
    Explain {
        /// Text to trace
        text: String,
        /// Rule table (.toml source or compiled .lpt); built-in when omitted
        #[arg(long)]
        table: Option<PathBuf>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate a rule table and print its stats
    Check {
        /// Rule table (.toml source or compiled .lpt)
        table_file: PathBuf,
    },

    /// Compile a TOML rule table into a binary .lpt file
    Compile {
        /// Path to the TOML source table
        source: PathBuf,
        /// Path to the output .lpt file
        output: PathBuf,
    },

    /// Run texts from a file and record outputs to JSONL
    Snapshot {
        /// Path to the input file (one text per line)
        input_file: PathBuf,
        /// Path to the output JSONL file
        output_file: PathBuf,
        /// Rule table (.toml source or compiled .lpt); built-in when omitted
        #[arg(long)]
        table: Option<PathBuf>,
    },

    /// Compare current output against a saved snapshot
    DiffSnapshot {
        /// Path to the baseline JSONL snapshot file
        baseline_file: PathBuf,
        /// Rule table (.toml source or compiled .lpt); built-in when omitted
        #[arg(long)]
        table: Option<PathBuf>,
    },
}

/// One snapshot record (one per input line).
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotEntry {
    input: String,
    output: String,
}

/// Load a table from a path, or fall back to the built-in set.
fn load_table(path: Option<&Path>) -> &'static RuleTable {
    let Some(path) = path else {
        return RuleTable::builtin();
    };
    let result = if path.extension().is_some_and(|ext| ext == "lpt") {
        RuleTable::open(path)
    } else {
        RuleTable::from_toml_file(path)
    };
    let table = result.unwrap_or_else(|e| {
        eprintln!("failed to load table {}: {e}", path.display());
        process::exit(1);
    });
    // tool process, table lives until exit
    Box::leak(Box::new(table))
}

fn format_traces(traces: &[ClusterTrace]) -> String {
    let mut out = String::new();
    for trace in traces {
        let kind = if trace.passthrough { "passthrough" } else { "mapped" };
        out.push_str(&format!(
            "{:>4} {:<8} -> {:<10} {kind:<12} {:?}\n",
            trace.start, trace.source, trace.output, trace.script
        ));
    }
    out
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { text, table } => {
            let table = load_table(table.as_deref());
            println!("{}", transliterate(&text, table));
        }

        Command::Explain { text, table, json } => {
            let table = load_table(table.as_deref());
            let traces = explain(&text, table);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&traces).expect("JSON serialization failed")
                );
            } else {
                print!("{}", format_traces(&traces));
            }
        }

        Command::Check { table_file } => {
            let table = load_table(Some(&table_file));
            println!("rules:        {}", table.len());
            println!("max pattern:  {} units", table.max_pattern_len());
            println!("max fragment: {} bytes", table.max_fragment_len());
        }

        Command::Compile { source, output } => {
            let table = RuleTable::from_toml_file(&source).unwrap_or_else(|e| {
                eprintln!("failed to load table {}: {e}", source.display());
                process::exit(1);
            });
            table.save(&output).unwrap_or_else(|e| {
                eprintln!("failed to write {}: {e}", output.display());
                process::exit(1);
            });
            println!("compiled {} rules to {}", table.len(), output.display());
        }

        Command::Snapshot {
            input_file,
            output_file,
            table,
        } => {
            let table = load_table(table.as_deref());
            let input = fs::File::open(&input_file).unwrap_or_else(|e| {
                eprintln!("failed to open {}: {e}", input_file.display());
                process::exit(1);
            });
            let output = fs::File::create(&output_file).unwrap_or_else(|e| {
                eprintln!("failed to create {}: {e}", output_file.display());
                process::exit(1);
            });
            let mut writer = BufWriter::new(output);
            let mut count = 0usize;
            for line in BufReader::new(input).lines() {
                let line = line.expect("read input line");
                if line.is_empty() {
                    continue;
                }
                let entry = SnapshotEntry {
                    output: transliterate(&line, table),
                    input: line,
                };
                let json = serde_json::to_string(&entry).expect("JSON serialization failed");
                writeln!(writer, "{json}").expect("write snapshot line");
                count += 1;
            }
            println!("recorded {count} entries to {}", output_file.display());
        }

        Command::DiffSnapshot {
            baseline_file,
            table,
        } => {
            let table = load_table(table.as_deref());
            let baseline = fs::File::open(&baseline_file).unwrap_or_else(|e| {
                eprintln!("failed to open {}: {e}", baseline_file.display());
                process::exit(1);
            });
            let mut diffs = 0usize;
            let mut total = 0usize;
            for line in BufReader::new(baseline).lines() {
                let line = line.expect("read baseline line");
                if line.is_empty() {
                    continue;
                }
                let entry: SnapshotEntry =
                    serde_json::from_str(&line).expect("parse baseline entry");
                total += 1;
                let current = transliterate(&entry.input, table);
                if current != entry.output {
                    diffs += 1;
                    println!("  {}", entry.input);
                    println!("    baseline: {}", entry.output);
                    println!("    current:  {current}");
                }
            }
            println!("{diffs} of {total} entries differ");
            if diffs > 0 {
                process::exit(1);
            }
        }
    }
}
