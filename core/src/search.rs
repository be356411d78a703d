//! Route search over travel networks.
//!
//! The searches are independent of each other and share the
//! [`Network`] read-only: [`dijkstra`] finds the budget-constrained
//! shortest route, [`paths`] enumerates all budget-feasible routes
//! and [`reach`] scans reachability under a per-leg distance cap.
//!
//! The functions at the module root resolve location names first and
//! fail the whole request on an unknown name; the submodules work on
//! [`LocationId`]s directly.

pub mod dijkstra;
pub mod paths;
pub mod reach;

pub use self::paths::Paths;

use num_traits::Zero;

use crate::network::{ Leg, LocationId, Network, Result };

use std::ops::Add;

/// The aggregate sums of all legs travelled along a route.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Totals {
    pub distance: u32,
    pub cost: u32,
    pub time: u32,
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, other: Totals) -> Totals {
        Totals {
            distance: self.distance + other.distance,
            cost: self.cost + other.cost,
            time: self.time + other.time,
        }
    }
}

impl Add<Leg> for Totals {
    type Output = Totals;

    fn add(self, leg: Leg) -> Totals {
        Totals {
            distance: self.distance + leg.distance,
            cost: self.cost + leg.cost,
            time: self.time + leg.time,
        }
    }
}

impl Zero for Totals {
    fn zero() -> Totals {
        Totals::default()
    }

    fn is_zero(&self) -> bool {
        *self == Totals::zero()
    }
}

/// A simple route through a network: the visited locations in travel
/// order, together with the totals of all legs taken.
///
/// Routes are transient query results; they do not stay valid across
/// mutations of the network they were computed on.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Route {
    pub stops: Vec<LocationId>,
    pub totals: Totals,
}

impl Route {
    /// The names of the stops, in travel order.
    pub fn stop_names<'a>(&'a self, net: &'a Network) -> impl Iterator<Item=&'a str> + 'a {
        self.stops.iter().filter_map(move |&id| net.name(id))
    }
}

/// Searches for the route from `from` to `to` with the least total
/// distance among those whose total cost stays within `max_budget`.
///
/// `Ok(None)` means no such route exists; an unknown name fails the
/// request. See [`dijkstra::route`] for the limits of the search.
pub fn route(net: &Network, from: &str, to: &str, max_budget: u32) -> Result<Option<Route>> {
    let from = net.resolve(from)?;
    let to = net.resolve(to)?;
    Ok(dijkstra::route(net, from, to, max_budget))
}

/// Enumerates every simple route from `from` to `to` whose total cost
/// stays within `max_budget`.
pub fn all_routes<'a>(net: &'a Network, from: &str, to: &str, max_budget: u32) -> Result<Paths<'a>> {
    let from = net.resolve(from)?;
    let to = net.resolve(to)?;
    Ok(paths::all(net, from, to, max_budget))
}

/// Collects the locations reachable from `from` without travelling any
/// single leg longer than `max_leg_distance`, in discovery order.
pub fn reachable(net: &Network, from: &str, max_leg_distance: u32) -> Result<Vec<LocationId>> {
    let from = net.resolve(from)?;
    Ok(reach::within(net, from, max_leg_distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkError;

    #[test]
    fn queries_fail_on_unknown_names() {
        let mut net = Network::new();
        net.add_location("A").unwrap();
        let unknown = NetworkError::UnknownLocation("B".to_string());
        assert_eq!(route(&net, "A", "B", 10), Err(unknown.clone()));
        assert_eq!(all_routes(&net, "B", "A", 10).err(), Some(unknown.clone()));
        assert_eq!(reachable(&net, "B", 10), Err(unknown));
    }

    #[test]
    fn totals_accumulate_legs() {
        let totals = Totals::zero() + Leg::new(100, 50, 30) + Leg::new(200, 80, 60);
        assert_eq!(totals, Totals { distance: 300, cost: 130, time: 90 });
    }
}
