//! A command line travel planner.
//!
//! Loads a travel network from a flat file of
//! `<from> <to> <distance> <cost> <time>` records and answers route
//! queries against it. All formatting of distances, costs and times
//! lives here; the routekit library only ever sees and returns
//! in-memory values.

mod load;

use anyhow::Error;
use clap::{Parser, Subcommand};
use log::debug;

use routekit::search;

#[derive(Parser)]
#[clap(name = "planner", about = "Travel route planning over flat-file networks")]
struct Opts {
    /// The network data file to load.
    #[clap(short, long, default_value = "flights.txt")]
    file: String,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the locations of the network.
    Locations,
    /// Find the shortest route that stays within a budget.
    Route {
        from: String,
        to: String,
        /// The maximum total cost of the route.
        #[clap(short, long)]
        budget: u32,
    },
    /// Enumerate every route that stays within a budget.
    Paths {
        from: String,
        to: String,
        /// The maximum total cost of a route.
        #[clap(short, long)]
        budget: u32,
    },
    /// List the locations reachable without an overlong leg.
    Reachable {
        from: String,
        /// The longest acceptable single leg, in km.
        #[clap(short, long)]
        max_leg: u32,
    },
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Opts::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(opts: Opts) -> Result<(), Error> {
    let net = load::read_network(&opts.file)?;
    debug!("loaded {} locations from {}", net.len(), opts.file);
    match opts.command {
        Command::Locations => {
            for (n, (_, name)) in net.locations().enumerate() {
                println!("{}. {}", n + 1, name);
            }
        }
        Command::Route { from, to, budget } => match search::route(&net, &from, &to, budget)? {
            Some(route) => {
                println!("Shortest route from {} to {} within budget ${}:", from, to, budget);
                println!("Total Distance: {} km", route.totals.distance);
                println!("Total Cost: ${}", route.totals.cost);
                println!("Total Time: {} mins", route.totals.time);
                println!("Route: {}", route.stop_names(&net).collect::<Vec<_>>().join(" -> "));
            }
            None => {
                println!("No route from {} to {} within budget ${}", from, to, budget);
            }
        },
        Command::Paths { from, to, budget } => {
            println!("All routes from {} to {} within budget ${}:", from, to, budget);
            for route in search::all_routes(&net, &from, &to, budget)? {
                println!(
                    "{} (Distance: {} km, Cost: ${}, Time: {} mins)",
                    route.stop_names(&net).collect::<Vec<_>>().join(" -> "),
                    route.totals.distance,
                    route.totals.cost,
                    route.totals.time,
                );
            }
        }
        Command::Reachable { from, max_leg } => {
            println!("Locations reachable from {} without a leg over {} km:", from, max_leg);
            let found = search::reachable(&net, &from, max_leg)?;
            let names = found.iter().filter_map(|&id| net.name(id)).collect::<Vec<_>>();
            println!("{}", names.join(" "));
        }
    }
    Ok(())
}
