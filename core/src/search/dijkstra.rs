//! Budget-constrained shortest route search.

use log::debug;
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::HashMap;
use std::collections::HashSet;

use crate::network::{ LocationId, Network };

use super::{ Route, Totals };

/// A node in the "open" list of the search to prioritise the
/// locations with the least tentative distance.
struct Open {
    location: LocationId,
    distance: u32,
}

impl PartialEq for Open {
    fn eq(&self, other: &Open) -> bool {
        self.distance == other.distance
    }
}

impl Eq for Open {}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Open) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Open {
    fn cmp(&self, other: &Open) -> Ordering {
        // Smaller tentative distances are considered "greater"
        // for the binary heap.
        other.distance.cmp(&self.distance)
    }
}

/// A tree is constructed as the result of a search on a network.
/// The root of the tree is the start location of the search and every
/// location reached within budget carries the totals accumulated along
/// the best route found to it, plus a pointer to the location it was
/// reached from.
pub struct Tree {
    root: LocationId,
    parents: HashMap<LocationId, LocationId>,
    labels: HashMap<LocationId, Totals>,
}

impl Tree {
    /// Trace a route from the given goal back to the root of the tree.
    /// The route is returned in the natural (i.e. reverse) order from
    /// root to goal, or `None` if the goal was never reached.
    pub fn route(&self, goal: LocationId) -> Option<Route> {
        let totals = *self.labels.get(&goal)?;
        let mut stops = vec![goal];
        let mut current = goal;
        while current != self.root {
            let parent = *self.parents.get(&current)?;
            stops.push(parent);
            current = parent;
        }
        stops.reverse();
        Some(Route { stops, totals })
    }
}

/// Beginning at `from`, performs a least-distance search across the
/// network, refusing to take any leg that would push the accumulated
/// cost over `max_budget`, and returns the resulting search tree.
///
/// The search stops when any of the following conditions is met:
///
///   * A goal location is given and selected.
///   * No location with a finite tentative distance is left.
///
/// Selection among locations with equal tentative distance is
/// unspecified. The cost and time recorded for a location are those
/// accumulated along its best-distance route, not independently
/// minimised.
///
/// The budget is a pruning rule applied per relaxation, not a second
/// optimisation dimension: once a location's label is fixed, a longer
/// but cheaper route to it is never reconsidered, even where only that
/// route would keep a continuation within budget. Callers that need
/// such trade-offs resolved exactly need a resource-constrained
/// shortest-path search, which this is not.
pub fn tree(net: &Network, from: LocationId, goal: Option<LocationId>, max_budget: u32) -> Tree {
    let mut parents = HashMap::new();
    let mut labels = HashMap::new();
    let mut selected = HashSet::new();
    let mut open = BinaryHeap::new();
    labels.insert(from, Totals::zero());
    open.push(Open { location: from, distance: 0 });
    while let Some(Open { location: u, .. }) = open.pop() {
        if !selected.insert(u) {
            // A stale entry; the location was already selected with a
            // smaller tentative distance.
            continue;
        }
        if goal == Some(u) {
            break;
        }
        let at = labels[&u];
        for (v, leg) in net.legs_from(u) {
            if selected.contains(&v) {
                continue;
            }
            if at.cost + leg.cost > max_budget {
                continue;
            }
            let next = at + *leg;
            if labels.get(&v).map_or(true, |l| next.distance < l.distance) {
                labels.insert(v, next);
                parents.insert(v, u);
                open.push(Open { location: v, distance: next.distance });
            }
        }
    }
    Tree { root: from, parents, labels }
}

/// Beginning at `from`, searches for the route to `to` with the least
/// total distance among those whose total cost stays within
/// `max_budget`, returning `None` when no such route was found.
///
/// This is equivalent to:
/// ```raw
/// tree(net, from, Some(to), max_budget).route(to)
/// ```
pub fn route(net: &Network, from: LocationId, to: LocationId, max_budget: u32) -> Option<Route> {
    let found = tree(net, from, Some(to), max_budget).route(to);
    match &found {
        Some(r) => debug!(
            "route {} -> {}: {} stops, {} km",
            from.index(), to.index(), r.stops.len(), r.totals.distance
        ),
        None => debug!(
            "route {} -> {}: unreachable within budget {}",
            from.index(), to.index(), max_budget
        ),
    }
    found
}
