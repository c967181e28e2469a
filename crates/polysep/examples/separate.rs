//! Walk through the full pipeline on a small labeled set.
//!
//! Usage:
//!   cargo run -p polysep --example separate -- perimeter
//!   cargo run -p polysep --example separate -- area
//!
//! Builds a square of Included points around one Excluded point, refines the
//! hull until it separates them, then certifies the result with both exact
//! searches.

use polysep::prelude::*;

fn main() {
    let objective = match std::env::args().nth(1).as_deref() {
        Some("area") => Objective::Area,
        _ => Objective::Perimeter,
    };

    let mut pts = PointSet::new();
    pts.push(Vec2::new(0.0, 0.0), Label::Included);
    pts.push(Vec2::new(4.0, 0.0), Label::Included);
    pts.push(Vec2::new(4.0, 4.0), Label::Included);
    pts.push(Vec2::new(0.0, 4.0), Label::Included);
    pts.push(Vec2::new(2.0, 2.0), Label::Excluded);

    let mut polygon = convex_hull(&pts);
    println!(
        "hull: {} vertices, perimeter {:.4}, area {:.4}",
        polygon.len(),
        polygon.perimeter(&pts),
        polygon.area(&pts)
    );

    match refine_until_stable(&mut polygon, &pts, objective) {
        Ok(steps) => println!(
            "refined in {steps} insertions: perimeter {:.4}, area {:.4}",
            polygon.perimeter(&pts),
            polygon.area(&pts)
        ),
        Err(err) => {
            eprintln!("refinement failed: {err}");
            return;
        }
    }

    let heuristic_cost = match objective {
        Objective::Perimeter => polygon.perimeter(&pts),
        Objective::Area => polygon.area(&pts),
    };

    let cfg = TreeCfg {
        upper_bound: Some(heuristic_cost),
        ..TreeCfg::default()
    };
    match tree_search(&pts, objective, cfg) {
        SearchOutcome::Optimal { cost, .. } => {
            println!("tree search optimum: {cost:.9} (heuristic {heuristic_cost:.9})")
        }
        SearchOutcome::Infeasible => println!("tree search: no separator exists"),
        SearchOutcome::Exhausted { .. } => println!("tree search: budget exhausted"),
    }

    if let Some((cost, _)) =
        exhaustive_search(&pts, objective, ExhaustiveCfg::default(), |p| {
            println!("  enumerated {}/{} candidates", p.evaluated, p.total)
        })
    {
        println!("exhaustive optimum: {cost:.9}");
    }
}
