//! Exhaustive enumeration of budget-feasible routes.

use num_traits::Zero;

use crate::network::{ LocationId, Network };

use super::{ Route, Totals };

/// One level of the depth-first descent: a location on the current
/// path, with the totals accumulated on arrival and a cursor over the
/// destination ids not yet tried from here.
struct Frame {
    location: LocationId,
    totals: Totals,
    cursor: usize,
}

enum Step {
    Emit(Totals),
    Descend(LocationId, Totals),
    Backtrack,
}

/// A lazy enumeration of every simple route from a source to a
/// destination whose accumulated cost stays within budget at every
/// step of the way.
///
/// Routes are produced in depth-first order, branching to destinations
/// in increasing id order at every location, so enumerating twice over
/// the same network yields the same sequence. The number of routes can
/// be exponential in the number of locations; callers keep the
/// enumeration tractable by bounding the budget or the network.
pub struct Paths<'a> {
    net: &'a Network,
    to: LocationId,
    max_budget: u32,
    stack: Vec<Frame>,
    path: Vec<LocationId>,
    visited: Vec<bool>,
}

/// Enumerates the simple routes from `from` to `to` whose total cost
/// stays within `max_budget`.
///
/// When `from` and `to` coincide the single route that never leaves
/// the start is produced.
pub fn all(net: &Network, from: LocationId, to: LocationId, max_budget: u32) -> Paths<'_> {
    let mut visited = vec![false; net.len()];
    visited[from.index()] = true;
    Paths {
        net,
        to,
        max_budget,
        stack: vec![Frame { location: from, totals: Totals::zero(), cursor: 0 }],
        path: vec![from],
        visited,
    }
}

impl<'a> Paths<'a> {
    /// Advances the descent by one decision: reaching the destination
    /// emits, an untried affordable leg descends, anything else
    /// backtracks.
    fn step(&mut self) -> Option<Step> {
        let frame = self.stack.last_mut()?;
        if frame.location == self.to && frame.cursor == 0 {
            // Arrived. The destination is terminal for a simple route:
            // the cursor is exhausted and the budget checked once more
            // at emission, independently of the per-leg checks made
            // during the descent.
            frame.cursor = self.net.len();
            if frame.totals.cost <= self.max_budget {
                return Some(Step::Emit(frame.totals));
            }
            return Some(Step::Backtrack);
        }
        while frame.cursor < self.net.len() {
            let v = LocationId(frame.cursor);
            frame.cursor += 1;
            if self.visited[v.index()] {
                continue;
            }
            if let Some(leg) = self.net.leg(frame.location, v) {
                if frame.totals.cost + leg.cost <= self.max_budget {
                    return Some(Step::Descend(v, frame.totals + *leg));
                }
            }
        }
        Some(Step::Backtrack)
    }
}

impl<'a> Iterator for Paths<'a> {
    type Item = Route;

    fn next(&mut self) -> Option<Route> {
        loop {
            match self.step()? {
                Step::Emit(totals) => {
                    return Some(Route { stops: self.path.clone(), totals });
                }
                Step::Descend(v, totals) => {
                    self.visited[v.index()] = true;
                    self.path.push(v);
                    self.stack.push(Frame { location: v, totals, cursor: 0 });
                }
                Step::Backtrack => {
                    if let Some(frame) = self.stack.pop() {
                        self.visited[frame.location.index()] = false;
                        self.path.pop();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Leg;
    use quickcheck::*;

    fn sample() -> Network {
        let mut net = Network::new();
        for name in &["A", "B", "C"] {
            net.add_location(name).unwrap();
        }
        net.add_leg("A", "B", Leg::new(100, 50, 30));
        net.add_leg("B", "C", Leg::new(200, 80, 60));
        net.add_leg("A", "C", Leg::new(400, 60, 90));
        net
    }

    fn id(net: &Network, name: &str) -> LocationId {
        net.index_of(name).unwrap()
    }

    fn stops(net: &Network, from: &str, to: &str, budget: u32) -> Vec<Vec<LocationId>> {
        all(net, id(net, from), id(net, to), budget)
            .map(|r| r.stops)
            .collect()
    }

    #[test]
    fn only_the_affordable_route_is_emitted() {
        let net = sample();
        let routes = all(&net, id(&net, "A"), id(&net, "C"), 100).collect::<Vec<_>>();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].stops, vec![id(&net, "A"), id(&net, "C")]);
        assert_eq!(routes[0].totals, Totals { distance: 400, cost: 60, time: 90 });
    }

    #[test]
    fn branches_follow_increasing_destination_ids() {
        let net = sample();
        assert_eq!(
            stops(&net, "A", "C", 200),
            vec![
                vec![id(&net, "A"), id(&net, "B"), id(&net, "C")],
                vec![id(&net, "A"), id(&net, "C")],
            ]
        );
    }

    #[test]
    fn nothing_is_emitted_for_an_unreachable_destination() {
        let mut net = sample();
        net.add_location("D").unwrap();
        assert_eq!(stops(&net, "A", "D", 1000), Vec::<Vec<LocationId>>::new());
    }

    #[test]
    fn the_trivial_route_when_start_is_destination() {
        let net = sample();
        let a = id(&net, "A");
        let routes = all(&net, a, a, 0).collect::<Vec<_>>();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].stops, vec![a]);
        assert_eq!(routes[0].totals, Totals::zero());
    }

    #[test]
    fn prop_emitted_routes_are_simple_and_within_budget() {
        fn prop(net: Network, budget: u8) -> bool {
            let budget = budget as u32;
            let from = LocationId(0);
            let to = LocationId(net.len() - 1);
            all(&net, from, to, budget).all(|r| {
                let mut seen = vec![false; net.len()];
                r.totals.cost <= budget
                    && r.stops.iter().all(|s| {
                        !std::mem::replace(&mut seen[s.index()], true)
                    })
            })
        }
        quickcheck(prop as fn(_, _) -> _);
    }

    #[test]
    fn prop_routes_grow_with_the_budget() {
        fn prop(net: Network, budget: u8) -> bool {
            let small = (budget / 2) as u32;
            let large = budget as u32;
            let from = LocationId(0);
            let to = LocationId(net.len() - 1);
            let within_large = stops_of(&net, from, to, large);
            stops_of(&net, from, to, small)
                .iter()
                .all(|r| within_large.contains(r))
        }
        fn stops_of(net: &Network, from: LocationId, to: LocationId, budget: u32) -> Vec<Vec<LocationId>> {
            all(net, from, to, budget).map(|r| r.stops).collect()
        }
        quickcheck(prop as fn(_, _) -> _);
    }

    #[test]
    fn prop_enumeration_is_restartable() {
        fn prop(net: Network, budget: u8) -> bool {
            let budget = budget as u32;
            let from = LocationId(0);
            let to = LocationId(net.len() - 1);
            let first = all(&net, from, to, budget).collect::<Vec<_>>();
            let second = all(&net, from, to, budget).collect::<Vec<_>>();
            first == second
        }
        quickcheck(prop as fn(_, _) -> _);
    }
}
