mod cli;
mod logging;

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use eyre::{Result, WrapErr};
use log::{debug, error, info};

use cli::{Args, Command};
use logging::Logger;
use maze_solver::{Grid, LogObserver, SearchOutcome, Strategy, render, solve};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    let grid = load_grid(&args.maze)?;
    info!(
        "loaded {}x{} maze from {} ({} open cells)",
        grid.height(),
        grid.width(),
        args.maze.display(),
        grid.open_cells()
    );
    debug!("start {} → goal {}", grid.start(), grid.goal());

    match args.command {
        Command::Solve { strategy, render: show } => run_solve(&grid, strategy, show),
        Command::Animate { strategy } => run_animation(&grid, strategy, args.delay).await,
        Command::Benchmark => run_benchmark(Arc::new(grid)).await,
    }
}

#[macros::timed]
fn load_grid(path: &Path) -> Result<Grid> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read maze file {}", path.display()))?;
    let grid = Grid::parse(&text).wrap_err_with(|| format!("malformed maze {}", path.display()))?;
    Ok(grid)
}

struct Timed {
    outcome: SearchOutcome,
    elapsed: Duration,
}

fn solve_timed(grid: &Grid, strategy: Strategy) -> Timed {
    let mut observer = LogObserver::new(strategy);
    let start = Instant::now();
    let outcome = solve(grid, strategy, &mut observer);
    Timed {
        outcome,
        elapsed: start.elapsed(),
    }
}

fn run_solve(grid: &Grid, strategy: Strategy, show: bool) -> Result<()> {
    info!("solving with {}", strategy.name());

    let result = solve_timed(grid, strategy);
    print_result(&result);

    if show {
        println!("{}", render::render_outcome(grid, &result.outcome));
    }
    Ok(())
}

async fn run_animation(grid: &Grid, strategy: Strategy, delay: u64) -> Result<()> {
    info!("replaying {}", strategy.name());
    if delay > 0 {
        debug!("delay: {}ms", delay);
    }

    let result = solve_timed(grid, strategy);
    let total = result.outcome.trace.len();

    for (step, frame) in render::frames(grid, &result.outcome).enumerate() {
        // clear screen, cursor home
        print!("\x1B[2J\x1B[H");
        if step < total {
            println!("{} step {}/{}", strategy.name(), step + 1, total);
        } else {
            println!("{} final", strategy.name());
        }
        println!("{frame}");

        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
    }

    print_result(&result);
    Ok(())
}

#[macros::timed]
async fn run_benchmark(grid: Arc<Grid>) -> Result<()> {
    info!("benchmarking all strategies");

    let tasks = Strategy::all().map(|strategy| {
        let grid = grid.clone();
        tokio::task::spawn_blocking(move || (strategy, solve_timed(&grid, strategy)))
    });

    let mut completed = Vec::new();
    for joined in futures::future::join_all(tasks).await {
        match joined {
            Ok((strategy, result)) => {
                info!("{} done", strategy.name());
                print_result(&result);
                completed.push(result);
            }
            Err(e) => error!("solver task failed: {}", e),
        }
    }

    print_benchmark_summary(&completed);
    Ok(())
}

fn print_result(result: &Timed) {
    let outcome = &result.outcome;
    let name = outcome.strategy.name();

    if outcome.is_solved() {
        info!(
            "[{}] finished in {:?}: {} steps, cost {}",
            name,
            result.elapsed,
            outcome.solution.len(),
            outcome.solution.cost
        );
    } else {
        info!("[{}] finished in {:?}: no solution", name, result.elapsed);
    }
    info!(
        "[{}] explored {} cells, coverage {:.2}%",
        name,
        outcome.explored.len(),
        outcome.coverage() * 100.0
    );
    debug!("[{}] trace: {} frames, {} nodes", name, outcome.trace.len(), outcome.nodes_created);

    if outcome.is_solved() {
        println!("{}: {}", name, outcome.solution);
    } else {
        println!("{name}: No solution: goal unreachable.");
    }
}

fn print_benchmark_summary(results: &[Timed]) {
    info!("\nbenchmark results:");
    info!(
        "{:<10} {:>6} {:>6} {:>9} {:>9}  {:>12}",
        "strategy", "steps", "cost", "explored", "coverage", "time"
    );
    info!("{:-<60}", "");

    for result in results {
        let outcome = &result.outcome;
        info!(
            "{:<10} {:>6} {:>6} {:>9} {:>8.2}%  {:>12?}",
            outcome.strategy.name(),
            outcome.solution.len(),
            outcome.solution.cost,
            outcome.explored.len(),
            outcome.coverage() * 100.0,
            result.elapsed,
        );
    }

    let solved = || results.iter().filter(|r| r.outcome.is_solved());

    if let Some(best) = solved().min_by_key(|r| r.outcome.solution.cost) {
        info!(
            "\ncheapest: {} (cost {})",
            best.outcome.strategy.name(),
            best.outcome.solution.cost
        );
    }

    if let Some(fastest) = solved().min_by_key(|r| r.elapsed) {
        info!(
            "fastest: {} ({:?})",
            fastest.outcome.strategy.name(),
            fastest.elapsed
        );
    }

    if let Some(leanest) = solved().min_by_key(|r| r.outcome.explored.len()) {
        info!(
            "fewest cells explored: {} ({})",
            leanest.outcome.strategy.name(),
            leanest.outcome.explored.len()
        );
    }
}
