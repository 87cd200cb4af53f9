use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use notekit_lib::args::ordering_symbol;
use notekit_lib::{note_table, parse_note_arg, parse_operand_arg, BinaryOp, NoteReport};

#[derive(Parser)]
#[command(name = "notekit")]
#[command(about = "Inspect musical notes by index or scientific name", long_about = None)]
struct Cli {
    /// Log parsing and arithmetic steps (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every derived property of one or more notes
    Info {
        /// Note indices (60) or scientific names (C4, CD-1)
        #[arg(required = true, allow_hyphen_values = true)]
        notes: Vec<String>,

        /// Read each note as a JSON value, e.g. '["CD", 1]'
        #[arg(long)]
        json: bool,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Apply + - * / to a note
    Calc {
        #[arg(allow_hyphen_values = true)]
        note: String,

        /// One of + - * /
        #[arg(allow_hyphen_values = true)]
        op: BinaryOp,

        /// Integer or note
        #[arg(allow_hyphen_values = true)]
        operand: String,
    },
    /// Compare two notes
    Compare {
        #[arg(allow_hyphen_values = true)]
        a: String,

        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// List a range of notes
    Table {
        /// First note, within 0..=127 (default: C-1)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        from: String,

        /// Last note, within 0..=127 (default: G9)
        #[arg(long, default_value = "127", allow_hyphen_values = true)]
        to: String,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Info { notes, json, format } => {
            let reports = notes
                .iter()
                .map(|arg| {
                    parse_note_arg(arg, json)
                        .map(NoteReport::new)
                        .with_context(|| format!("Failed to read note '{}'", arg))
                })
                .collect::<Result<Vec<_>>>()?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&reports)?);
                }
                OutputFormat::Text => {
                    for report in reports {
                        print!("{}", report);
                    }
                }
            }
        }
        Commands::Calc { note, op, operand } => {
            let lhs = parse_note_arg(&note, false)?;
            let rhs = parse_operand_arg(&operand)?;
            let result = op.apply(lhs, rhs)?;
            println!("{}", result.describe());
        }
        Commands::Compare { a, b } => {
            let a = parse_note_arg(&a, false)?;
            let b = parse_note_arg(&b, false)?;
            println!("{} {} {}", a.base_name(), ordering_symbol(a.compare(b)), b.base_name());
        }
        Commands::Table { from, to, format } => {
            let from = parse_note_arg(&from, false)?;
            let to = parse_note_arg(&to, false)?;
            log::debug!("listing notes {} to {}", from.index(), to.index());
            let reports = note_table(from, to)?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&reports)?);
                }
                OutputFormat::Text => {
                    for report in &reports {
                        println!("{}", report.summary());
                    }
                }
            }
        }
    }
    Ok(())
}
