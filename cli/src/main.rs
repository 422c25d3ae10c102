mod formatter;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use formatter::Formatter;
use fuzzrel::serializers::{matrix_from_json, solution_to_json, system_from_json, SystemDocument};
use fuzzrel::{Composition, Family, Mode, ResourceLimits, SolveOutput, Solver};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "fuzzrel")]
#[command(about = "Compose and solve fuzzy relational equations.")]
#[command(
    long_about = "fuzzrel composes fuzzy relations over [0, 1] and solves A ∘ x = b (or <=, >=) for the\nGödel (min-alpha) and max-Lukasiewicz families, reporting the extremal solution and the\nfull boundary of incomparable solutions."
)]
#[command(version)]
struct Cli {
    /// Log solver phases to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an equation system stored as JSON
    ///
    /// The file holds {"family": "godel" | "max-lukasiewicz", "mode": "eq" | "le" | "ge",
    /// "a": [[...]], "b": [...]}. Mode defaults to eq.
    Solve {
        /// System file
        file: PathBuf,
        /// Override the family stored in the file
        #[arg(short, long)]
        family: Option<Family>,
        /// Override the mode stored in the file (=, <=, >=, eq, le, ge)
        #[arg(short, long)]
        mode: Option<Mode>,
        /// Stop after the extremal vector; skip boundary enumeration
        #[arg(short, long)]
        extremal_only: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Comparison tolerance
        #[arg(long)]
        epsilon: Option<f64>,
        /// Maximum search frames during boundary enumeration
        #[arg(long)]
        max_nodes: Option<usize>,
        /// Maximum solve time in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Compose two matrices stored as JSON nested rows
    Compose {
        /// Left operand
        left: PathBuf,
        /// Right operand
        right: PathBuf,
        /// Named composition (max-min, min-alpha, max-lukasiewicz, ...)
        #[arg(short, long = "with", default_value = "max-min")]
        composition: Composition,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the operator catalog and the named compositions
    Operators,
    /// List all equation systems under a directory
    ///
    /// Scans for .json files and summarizes every file that parses as a system.
    List {
        /// Directory containing system files
        #[arg(default_value = ".")]
        root: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Solve {
            file,
            family,
            mode,
            extremal_only,
            json,
            epsilon,
            max_nodes,
            timeout_ms,
        } => solve_command(
            file,
            SolveOptions {
                family: *family,
                mode: *mode,
                extremal_only: *extremal_only,
                json: *json,
                epsilon: *epsilon,
                max_nodes: *max_nodes,
                timeout_ms: *timeout_ms,
            },
        ),
        Commands::Compose {
            left,
            right,
            composition,
            json,
        } => compose_command(left, right, *composition, *json),
        Commands::Operators => operators_command(),
        Commands::List { root } => list_command(root),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "fuzzrel=debug" } else { "fuzzrel=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

struct SolveOptions {
    family: Option<Family>,
    mode: Option<Mode>,
    extremal_only: bool,
    json: bool,
    epsilon: Option<f64>,
    max_nodes: Option<usize>,
    timeout_ms: Option<u64>,
}

fn solve_command(file: &Path, options: SolveOptions) -> Result<()> {
    let doc = load_system(file)?;
    let family = options.family.unwrap_or(doc.family);
    let mode = options.mode.unwrap_or(doc.mode);

    let mut limits = ResourceLimits::default();
    if let Some(max_nodes) = options.max_nodes {
        limits.max_search_nodes = max_nodes;
    }
    if let Some(timeout_ms) = options.timeout_ms {
        limits.max_solve_time_ms = timeout_ms;
    }
    let mut solver = Solver::new(family).with_limits(limits);
    if let Some(epsilon) = options.epsilon {
        solver = solver.with_tolerance(epsilon);
    }
    debug!(file = %file.display(), %family, %mode, "solving system");

    let output = solver.solve(&doc.a, &doc.b, mode, !options.extremal_only)?;
    let formatter = Formatter::default();
    match output {
        SolveOutput::Extremal(extremal) if options.json => {
            println!("{}", serde_json::to_string_pretty(&extremal)?)
        }
        SolveOutput::Extremal(extremal) => print!("{}", formatter.format_extremal(&extremal)),
        SolveOutput::Full(solution) if options.json => {
            println!("{}", solution_to_json(&solution)?)
        }
        SolveOutput::Full(solution) => print!("{}", formatter.format_solution(&solution)),
    }
    Ok(())
}

fn compose_command(left: &Path, right: &Path, composition: Composition, json: bool) -> Result<()> {
    let a = matrix_from_json(&read(left)?).with_context(|| format!("in {}", left.display()))?;
    let b = matrix_from_json(&read(right)?).with_context(|| format!("in {}", right.display()))?;
    let result = composition.apply(&a, &b)?;

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        let formatter = Formatter::default();
        print!("{}", formatter.format_matrix(composition.name(), &result));
    }
    Ok(())
}

fn operators_command() -> Result<()> {
    let formatter = Formatter::default();
    print!("{}", formatter.format_catalog());
    Ok(())
}

fn list_command(root: &Path) -> Result<()> {
    println!("Scanning {}...", root.display());

    let mut file_count = 0;
    let mut systems = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.path().extension().and_then(|s| s.to_str()) == Some("json") {
            file_count += 1;
            let path = entry.path();
            match load_system(path) {
                Ok(doc) => systems.push((path.display().to_string(), doc)),
                Err(e) => debug!(file = %path.display(), error = %e, "skipping file"),
            }
        }
    }

    println!();
    let formatter = Formatter::default();
    print!("{}", formatter.format_workspace_summary(file_count, &systems));
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

fn load_system(path: &Path) -> Result<SystemDocument> {
    system_from_json(&read(path)?).with_context(|| format!("in {}", path.display()))
}
