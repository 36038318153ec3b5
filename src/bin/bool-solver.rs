//! Boolean expression solver - Command Line Interface
//!
//! Evaluates an expression in the keypad notation and prints its truth table
//! and minimal SOP/POS forms, or exports either as PLA.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::info;

use bool_solver::{
    CoverStrategy, Minimized, PLAType, PLAWriter, Session, SolverConfig, SolverError,
    TruthTable, DEFAULT_MAX_VARIABLES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Command {
    /// Print the truth table only
    Table,
    /// Print the minimized forms only
    Simplify,
    /// Print both (default)
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputType {
    /// Human-readable text
    Text,
    /// PLA with the ON-set only
    PlaF,
    /// PLA with the ON-set and OFF-set
    PlaFr,
}

impl OutputType {
    fn pla_type(self) -> Option<PLAType> {
        match self {
            OutputType::Text => None,
            OutputType::PlaF => Some(PLAType::F),
            OutputType::PlaFr => Some(PLAType::FR),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bool-solver")]
#[command(about = "Truth tables and minimal SOP/POS forms for boolean expressions", long_about = None)]
#[command(version)]
struct Args {
    /// Expression, e.g. "A.B' + A'.B"
    #[arg(value_name = "EXPRESSION")]
    expression: String,

    /// What to compute
    #[arg(short = 'D', long = "do", value_enum, default_value = "all")]
    command: Command,

    /// Maximum number of distinct variables
    #[arg(long = "max-vars", default_value_t = DEFAULT_MAX_VARIABLES)]
    max_vars: usize,

    /// Use the exact cover search instead of the greedy one
    #[arg(long = "exact")]
    exact: bool,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value = "text")]
    output_format: OutputType,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    if let Err(e) = simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Warning: could not initialise logging: {}", e);
    }
}

fn write_text<W: Write>(
    out: &mut W,
    command: Command,
    table: &TruthTable,
    minimized: Option<&Minimized>,
) -> io::Result<()> {
    writeln!(out, "Variables: {}", table.variables())?;
    if command != Command::Simplify {
        writeln!(out)?;
        write!(out, "{}", table)?;
    }
    if let Some(min) = minimized {
        writeln!(out)?;
        writeln!(out, "SOP: {}", min.sop())?;
        writeln!(out, "POS: {}", min.pos())?;
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), SolverError> {
    let strategy = if args.exact {
        CoverStrategy::Exact
    } else {
        CoverStrategy::Greedy
    };
    let config = SolverConfig::new()
        .with_max_variables(args.max_vars)
        .with_strategy(strategy);
    let mut session = Session::new(config);

    let minimized = match args.command {
        Command::Table => None,
        Command::Simplify | Command::All => Some(session.simplify(&args.expression)?),
    };
    let table = session.truth_table(&args.expression)?;
    info!(
        "{} variables, {} minterms",
        table.num_variables(),
        table.minterms().len()
    );

    let mut out: Box<dyn Write> = match &args.output_file {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    match args.output_format.pla_type() {
        None => write_text(&mut out, args.command, table, minimized.as_ref())?,
        Some(pla_type) => match &minimized {
            Some(min) => min.write_pla(&mut out, pla_type)?,
            None => table.write_pla(&mut out, pla_type)?,
        },
    }
    out.flush()?;

    if let Some(path) = &args.output_file {
        info!("wrote output to {}", path.display());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
