//! Binary that solves every world under every strategy and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `solve_fixture`
//!
//! Output: `key=value` lines on stdout. Diagnostics go to stderr through
//! `tracing` (filter with `RUST_LOG`).

use statecraft_harness::worlds::jugs::JugCapacities;
use statecraft_harness::worlds::road_map::{reference_map, MapWorld};
use statecraft_harness::{enumerate_routes, greedy_route, solve_crossing, solve_jugs, SolveError};
use statecraft_search::{SearchPolicy, Strategy};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), SolveError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let policy = SearchPolicy::default();
    let jugs = JugCapacities {
        jug_a: 3,
        jug_b: 5,
        tub: 10,
    };

    for strategy in Strategy::ALL {
        let crossing = solve_crossing(strategy, &policy)?;
        println!("crossing.{strategy}.moves={}", crossing.moves());
        println!("crossing.{strategy}.digest={}", crossing.digest);

        let measured = solve_jugs(jugs, 4, strategy, &policy)?;
        println!("jugs.{strategy}.moves={}", measured.moves());
        println!("jugs.{strategy}.digest={}", measured.digest);

        match solve_jugs(
            JugCapacities {
                jug_a: 2,
                jug_b: 2,
                tub: 10,
            },
            3,
            strategy,
            &policy,
        ) {
            Err(SolveError::NoSolution { .. }) => {
                println!("jugs_unreachable.{strategy}=no_solution");
            }
            Err(e) => return Err(e),
            Ok(solution) => println!("jugs_unreachable.{strategy}={}", solution.digest),
        }
    }

    let world = MapWorld::new(reference_map(), "N", "S")?;
    for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
        let set = enumerate_routes(&world, strategy, &policy)?;
        println!("routes.{strategy}.count={}", set.routes.len());
        println!("routes.{strategy}.cheapest={}", set.cheapest_route());
        println!("routes.{strategy}.cost={:.6}", set.cheapest_cost);
        println!("routes.{strategy}.digest={}", set.digest);
    }
    let route = greedy_route(&world, &policy)?;
    println!("routes.greedy.route={}", route.path);
    println!("routes.greedy.cost={:.6}", route.cost);
    println!("routes.greedy.digest={}", route.digest);

    tracing::info!("solve_fixture finished");
    Ok(())
}
