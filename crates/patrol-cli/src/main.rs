//! patrol: trace a grid guard and count loop-inducing obstructions.
//!
//! Reads a map (a file, or stdin with `-`), then prints `part1:` (cells the
//! guard visits before leaving) and `part2:` (single obstructions that trap
//! it in a loop).

mod config;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use patrol::engine::{trace_path, CandidateScope, ObstructionSearch, SearchConfig};
use patrol::grid::Grid;
use patrol::types::CellReader;
use tracing_subscriber::EnvFilter;

use crate::config::{resolve_search_config, FileConfig, SearchOverrides};

/// Which answers to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Part {
    /// Distinct cells visited
    #[value(name = "1")]
    One,
    /// Loop-inducing obstructions
    #[value(name = "2")]
    Two,
    /// Both
    All,
}

#[derive(Debug, Parser)]
#[command(name = "patrol")]
#[command(about = "Trace a grid guard and find obstructions that trap it", version)]
struct Cli {
    /// Map file, or `-` to read stdin
    input: PathBuf,

    /// Which part to run
    #[arg(long, value_enum, default_value_t = Part::All)]
    part: Part,

    /// Worker threads for the obstruction search (default: all cores)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Candidates per worker task
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Candidate cells to try: all-open or traced-path
    #[arg(long)]
    scope: Option<CandidateScope>,

    /// TOML file with a [search] table
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the map with the guard's path drawn as X
    #[arg(long)]
    render: bool,

    /// Print every loop-inducing cell as (col, row)
    #[arg(long)]
    list_loops: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> SearchOverrides {
        SearchOverrides {
            workers: self.workers,
            chunk_size: self.chunk_size,
            scope: self.scope,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let search = resolve_search_config(&file, &cli.overrides())?;

    let text = read_input(&cli.input)?;
    let grid = Grid::parse(&text)
        .with_context(|| format!("invalid map in {}", cli.input.display()))?;

    let stdout = io::stdout();
    run(&cli, &grid, &search, &mut stdout.lock())
}

/// Read the whole map from `path`, or from stdin when `path` is `-`.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read map from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn run(cli: &Cli, grid: &Grid, search: &SearchConfig, out: &mut impl Write) -> Result<()> {
    tracing::debug!(
        width = grid.width(),
        height = grid.height(),
        start = %grid.start(),
        "map loaded"
    );

    if cli.part != Part::Two {
        let trace = trace_path(grid, grid.start_state()).context("part one")?;
        writeln!(out, "part1: {}", trace.distinct_cells())?;
        if cli.render {
            writeln!(out, "{}", trace.render(grid))?;
        }
    }

    if cli.part != Part::One {
        let report = ObstructionSearch::new(grid, search.clone())?
            .run()
            .context("part two")?;
        let m = &report.metrics;
        tracing::info!(
            candidates = m.candidates,
            loops = m.loops,
            total_steps = m.total_steps,
            longest_run = m.longest_run,
            workers = m.workers,
            elapsed_us = m.elapsed_us,
            "search metrics"
        );
        writeln!(out, "part2: {}", report.loop_count())?;
        if cli.list_loops {
            for cell in &report.loop_cells {
                writeln!(out, "  {cell}")?;
            }
        }
    }

    Ok(())
}
