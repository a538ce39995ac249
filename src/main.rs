//! `maxclique`: CLI entry point. Parses flags, reads a DIMACS graph, arms a
//! timeout watchdog, runs the solver, and prints the result.
//!
//! Ordinary I/O and glue: the solver itself lives in the library and knows
//! nothing about `clap`, `env_logger`, or the process exit code.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use maxclique::coloring::ColoringVariant;
use maxclique::dimacs::Graph;
use maxclique::params::{SearchMode, SearchParams};
use maxclique::{solve, SolveReport};
use log::info;

/// Exact maximum-clique solver (bit-parallel colouring-bounded branch and bound).
#[derive(Parser, Debug)]
#[command(name = "maxclique", version, about)]
struct Cli {
    /// DIMACS graph file (`p edge`/`p col` + `e` lines).
    file: PathBuf,

    /// Abort the search after this many seconds, returning the best clique found so far.
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<f64>,

    /// Colour-class ordering variant used to bound each branch.
    #[arg(long, value_enum, default_value_t = ColoringVariant::NoSorting)]
    coloring: ColoringVariant,

    /// Search scheduling flavour.
    #[arg(long, value_enum, default_value_t = SearchMode::Sequential)]
    mode: SearchMode,

    /// Initial incumbent size; the search will not publish a clique of size <= this.
    #[arg(long, default_value_t = 0)]
    prime: u32,

    /// If > 0, stop as soon as a clique of at least this size is found.
    #[arg(long, default_value_t = 0)]
    decide: u32,

    /// Size of the rayon thread pool used in parallel modes (0 = rayon's default).
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Increase log verbosity (`-v` info, `-vv` debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> Result<()> {
    let graph = Graph::from_file(&cli.file).with_context(|| format!("reading {}", cli.file.display()))?;
    info!("read graph: {} vertices, {} edges", graph.size(), graph.edge_count());

    let abort = Arc::new(AtomicBool::new(false));
    let params = SearchParams {
        how_much_sorting: cli.coloring,
        mode: cli.mode,
        prime: cli.prime,
        decide: cli.decide,
        threads: cli.threads,
        abort: Arc::clone(&abort),
        start_time: Instant::now(),
    };

    if let Some(seconds) = cli.timeout {
        let abort = Arc::clone(&abort);
        let deadline = Duration::from_secs_f64(seconds.max(0.0));
        // Detached: its only effect is the flag write, so there is nothing
        // to join. Joining would block the CLI for the full timeout even
        // when the search finishes early.
        std::thread::spawn(move || {
            std::thread::sleep(deadline);
            abort.store(true, Ordering::Relaxed);
        });
    }

    let pool;
    let report = if params.threads > 0 {
        pool = rayon::ThreadPoolBuilder::new()
            .num_threads(params.threads)
            .build()
            .context("building rayon thread pool")?;
        pool.install(|| solve(&graph, &params))?
    } else {
        solve(&graph, &params)?
    };

    print_report(&report);
    Ok(())
}

fn print_report(report: &SolveReport) {
    let aborted = if report.aborted { " aborted" } else { "" };
    println!("clique size: {} nodes: {}{}", report.clique.len(), report.nodes, aborted);
    let vertices: Vec<String> = report.clique.iter().map(usize::to_string).collect();
    println!("{}", vertices.join(" "));
    println!("elapsed: {} ms", report.elapsed.as_millis());
}
