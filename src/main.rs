//! Demo entry point: generate a random instance and solve it.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use section_assign::instance;
use section_assign::solver::{BacktrackRunner, SearchConfig, SectionProblem};

/// Assign leaders and students to sections with a time-bounded
/// backtracking search over a randomly generated instance.
#[derive(Parser)]
#[command(name = "assign", version)]
struct Args {
    /// Total number of people, leaders included.
    total: usize,

    /// Number of section leaders.
    leaders: usize,

    /// Number of possible section times.
    times: usize,

    /// Wall-clock search budget in seconds.
    max_seconds: f64,

    /// Seed for instance generation (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Print the generated domains and exclusions before solving.
    #[arg(long)]
    show_input: bool,
}

fn print_tables(problem: &SectionProblem) {
    println!("Domains:");
    for (var, domain) in problem.domains.iter().enumerate() {
        println!("  var {var}: {domain:?}");
    }
    println!("Exclusions:");
    for (var, forbidden) in problem.exclusions.iter().enumerate() {
        if !forbidden.is_empty() {
            println!("  var {var}: {forbidden:?}");
        }
    }
}

fn print_rosters(problem: &SectionProblem, values: &[usize]) {
    for leader in 0..problem.leaders {
        let section = values[leader];
        let gender = if problem.genders[leader] { "F" } else { "M" };
        println!("Leader {leader} ({gender}) — time {section}");
        for student in problem.leaders..problem.total {
            if values[student] == section {
                let gender = if problem.genders[student] { "F" } else { "M" };
                println!("    {student} ({gender})");
            }
        }
        println!();
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    info!(seed, "generating random instance");

    let problem = instance::random_problem(args.total, args.leaders, args.times, &mut rng);
    if args.show_input {
        print_tables(&problem);
    }

    let config =
        SearchConfig::default().with_time_limit(Duration::from_secs_f64(args.max_seconds));
    let result = BacktrackRunner::run(&problem, &config).context("solver rejected the input")?;

    info!(
        steps = result.steps,
        solutions = result.solutions,
        exhausted = result.exhausted,
        timed_out = result.timed_out,
        "search finished"
    );

    match result.best {
        Some(values) => {
            println!("Best assignment (cost {}):", result.best_cost);
            println!("  {values:?}");
            println!();
            print_rosters(&problem, &values);
        }
        None if result.exhausted => println!("No feasible assignment exists."),
        None => println!("No feasible assignment found within the time budget."),
    }

    Ok(())
}
