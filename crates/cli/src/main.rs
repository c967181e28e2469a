use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::fmt::SubscriberBuilder;

use polysep::prelude::*;

mod report;

#[derive(Parser)]
#[command(name = "polysep")]
#[command(about = "Separator-polygon heuristic and exact validators")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ObjectiveArg {
    Perimeter,
    Area,
}

impl ObjectiveArg {
    fn to_objective(self) -> Objective {
        match self {
            ObjectiveArg::Perimeter => Objective::Perimeter,
            ObjectiveArg::Area => Objective::Area,
        }
    }
    fn name(self) -> &'static str {
        match self {
            ObjectiveArg::Perimeter => "perimeter",
            ObjectiveArg::Area => "area",
        }
    }
}

/// Where the points come from: a dataset file, or a seeded random scatter.
#[derive(Args)]
struct SourceArgs {
    /// Dataset file (`<B|R> <x> <y>` per line); omit to use a seeded scatter
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Included points in the scatter
    #[arg(long, default_value_t = 5)]
    blue: usize,
    /// Excluded points in the scatter
    #[arg(long, default_value_t = 5)]
    red: usize,
}

impl SourceArgs {
    fn points(&self) -> Result<(PointSet, String)> {
        match &self.input {
            Some(path) => {
                let pts = load_points(path)
                    .with_context(|| format!("loading {}", path.display()))?;
                Ok((pts, format!("dataset '{}'", path.display())))
            }
            None => {
                let cfg = ScatterCfg {
                    included: self.blue,
                    excluded: self.red,
                    ..ScatterCfg::default()
                };
                Ok((scatter_points(cfg, self.seed), format!("seed {}", self.seed)))
            }
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Run the greedy hull-refinement heuristic and print the result
    Solve {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long, value_enum, default_value_t = ObjectiveArg::Perimeter)]
        objective: ObjectiveArg,
        /// Print a JSON run summary instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Certify or refute the heuristic's result against the exact searches
    Validate {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long, value_enum, default_value_t = ObjectiveArg::Perimeter)]
        objective: ObjectiveArg,
        /// Also run the full combinatorial enumeration (factorial cost)
        #[arg(long)]
        exhaustive: bool,
        /// Round budget for the tree search
        #[arg(long, default_value_t = 100_000)]
        max_rounds: usize,
        #[arg(long)]
        json: bool,
    },
    /// Write a seeded random dataset file
    Gen {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(long, default_value_t = 5)]
        blue: usize,
        #[arg(long, default_value_t = 5)]
        red: usize,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            source,
            objective,
            json,
        } => solve(&source, objective, json),
        Action::Validate {
            source,
            objective,
            exhaustive,
            max_rounds,
            json,
        } => validate(&source, objective, exhaustive, max_rounds, json),
        Action::Gen {
            out,
            seed,
            blue,
            red,
        } => gen_dataset(&out, seed, blue, red),
    }
}

fn run_heuristic(pts: &PointSet, objective: Objective) -> Result<(Polygon, usize)> {
    let mut polygon = convex_hull(pts);
    let steps = refine_until_stable(&mut polygon, pts, objective)
        .context("refinement could not separate the points")?;
    Ok((polygon, steps))
}

fn cost_of(polygon: &Polygon, pts: &PointSet, objective: Objective) -> f64 {
    match objective {
        Objective::Perimeter => polygon.perimeter(pts),
        Objective::Area => polygon.area(pts),
    }
}

fn solve(source: &SourceArgs, objective: ObjectiveArg, json: bool) -> Result<()> {
    let (pts, label) = source.points()?;
    let (polygon, steps) = run_heuristic(&pts, objective.to_objective())?;
    tracing::info!(
        source = label,
        vertices = polygon.len(),
        insertions = steps,
        "heuristic finished"
    );
    if json {
        let summary = report::solve_summary(&label, objective.name(), steps, &polygon, &pts);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{label}: {} vertices | P: {:.3} u | A: {:.3} u^2",
            polygon.len(),
            polygon.perimeter(&pts),
            polygon.area(&pts)
        );
    }
    Ok(())
}

fn validate(
    source: &SourceArgs,
    objective: ObjectiveArg,
    exhaustive: bool,
    max_rounds: usize,
    json: bool,
) -> Result<()> {
    let (pts, label) = source.points()?;
    let obj = objective.to_objective();
    let (polygon, _) = run_heuristic(&pts, obj)?;
    let heuristic_cost = cost_of(&polygon, &pts, obj);
    println!("Heuristic answer: {heuristic_cost:.4} u");

    let (reference_cost, reference_kind) = if exhaustive {
        let best = exhaustive_search(&pts, obj, ExhaustiveCfg::default(), |p| {
            print!("\r{}", report::progress_line(p));
            let _ = std::io::stdout().flush();
        });
        println!();
        (best.map(|(c, _)| c), "exhaustive")
    } else {
        let cfg = TreeCfg {
            max_rounds,
            upper_bound: Some(heuristic_cost),
        };
        match tree_search(&pts, obj, cfg) {
            SearchOutcome::Optimal { cost, .. } => (Some(cost), "tree"),
            SearchOutcome::Infeasible => (None, "tree (infeasible)"),
            SearchOutcome::Exhausted { best } => {
                println!("Tree search exhausted its round budget; result is a lower-coverage bound.");
                (best.map(|(c, _)| c), "tree (exhausted)")
            }
        }
    };

    let optimal = reference_cost.map(|c| report::agree_to_9_decimals(c, heuristic_cost));
    match (reference_cost, optimal) {
        (Some(c), Some(true)) => println!("Actual answer: {c:.4} u, heuristic is OPTIMAL"),
        (Some(c), _) => println!("Actual answer: {c:.4} u, heuristic is SUBOPTIMAL"),
        (None, _) => println!("No reference optimum found"),
    }

    if json {
        let summary = report::validate_summary(
            &label,
            objective.name(),
            heuristic_cost,
            reference_cost,
            reference_kind,
            optimal,
        );
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

fn gen_dataset(out: &PathBuf, seed: u64, blue: usize, red: usize) -> Result<()> {
    let cfg = ScatterCfg {
        included: blue,
        excluded: red,
        ..ScatterCfg::default()
    };
    let pts = scatter_points(cfg, seed);
    save_points(&pts, out).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(out = %out.display(), seed, blue, red, "dataset written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gen_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.txt");
        gen_dataset(&path, 5, 4, 3).unwrap();
        let pts = load_points(&path).unwrap();
        assert_eq!(pts.len(), 7);
        let regenerated = scatter_points(
            ScatterCfg {
                included: 4,
                excluded: 3,
                ..ScatterCfg::default()
            },
            5,
        );
        for ((_, a), (_, b)) in pts.iter().zip(regenerated.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn source_args_scatter_label() {
        let source = SourceArgs {
            input: None,
            seed: 11,
            blue: 2,
            red: 2,
        };
        let (pts, label) = source.points().unwrap();
        assert_eq!(pts.len(), 4);
        assert_eq!(label, "seed 11");
    }
}
