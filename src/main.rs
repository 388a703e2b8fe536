// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use deck_search::constraints::{AdjacencyRule, Prune};
use deck_search::context::{Diagnostics, RateLimiter};
use deck_search::geometry::Direction;
use deck_search::state::Counters;
use deck_search::{Assembler, SearchConfig, SearchError, SearchRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// 12-track layout, position-weighted switch costs
    Weighted,
    /// 13-track layout, direction reversals capped at 9
    Legacy,
}

/// Assemble a punched-card column ordering whose track walk stays continuous.
///
/// Without --pool the search covers the whole alphabet and can run for a long
/// time; use --trace-interval-ms to watch its progress.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Symbols placed before the search starts
    #[arg(long, default_value = "A2345D")]
    seed: String,
    /// Track under the reading head after the seed
    #[arg(long, default_value_t = 4)]
    cursor: usize,
    /// Direction of the walk before the first placement (ascending|descending)
    #[arg(long, default_value = "ascending")]
    direction: Direction,
    /// Switch budget already spent
    #[arg(long, default_value_t = 1)]
    budget: u32,
    /// Symbols to place after the seed (default: all the others)
    #[arg(long)]
    pool: Option<String>,
    #[arg(long, value_enum, default_value_t = Preset::Weighted)]
    preset: Preset,
    /// Override the adjacency rule (shared-track|subset)
    #[arg(long)]
    adjacency: Option<AdjacencyRule>,
    /// Override the switch budget cap
    #[arg(long)]
    cap: Option<u32>,
    /// Print the partial sequence to stderr at most this often
    #[arg(long)]
    trace_interval_ms: Option<u64>,
    /// Include per-symbol bit diagrams in progress output
    #[arg(long)]
    diagram: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), SearchError> {
    let mut config = match args.preset {
        Preset::Weighted => SearchConfig::weighted(),
        Preset::Legacy => SearchConfig::legacy(),
    };
    if let Some(rule) = args.adjacency {
        config = config.with_adjacency(rule);
    }
    if let Some(cap) = args.cap {
        config = config.with_cap(cap);
    }

    let mut assembler = Assembler::new(config)?;
    if let Some(ms) = args.trace_interval_ms {
        let diagnostics = Diagnostics::new(
            RateLimiter::new(Duration::from_millis(ms)),
            Box::new(io::stderr()),
        )
        .with_diagram(args.diagram);
        assembler = assembler.with_diagnostics(diagnostics);
    }

    let mut request = SearchRequest::new(args.seed.as_str())
        .with_cursor(args.cursor)
        .with_direction(args.direction)
        .with_budget(args.budget);
    if let Some(pool) = &args.pool {
        request = request.with_pool(pool.as_str());
    }

    let result = assembler.assemble(&request);
    log_statistics(&assembler);
    let deck = result?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    deck.write_diagram(&mut out)?;
    out.flush()?;
    Ok(())
}

fn log_statistics(assembler: &Assembler) {
    let stats = assembler.statistics();
    log::info!(
        "{} calls, {} placements, {} solutions",
        stats.get(Counters::Calls),
        stats.get(Counters::Placements),
        stats.get(Counters::Solutions)
    );
    for reason in Prune::ALL {
        log::info!("pruned {:>8}: {}", stats.prunes(reason), reason);
    }
}
