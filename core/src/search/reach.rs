//! Reachability under a per-leg distance cap.

use log::debug;

use std::collections::VecDeque;

use crate::network::{ LocationId, Network };

/// Beginning at `from`, performs a breadth-first traversal across the
/// network and collects every location reachable through legs that are
/// each individually no longer than `max_leg_distance`.
///
/// The cap applies to every single leg, not to the accumulated length
/// of the route taken. Locations are reported in discovery order,
/// beginning with `from` itself; each is reported at most once.
pub fn within(net: &Network, from: LocationId, max_leg_distance: u32) -> Vec<LocationId> {
    let mut visited = vec![false; net.len()];
    let mut frontier = VecDeque::new();
    let mut found = Vec::new();
    visited[from.index()] = true;
    frontier.push_back(from);
    while let Some(u) = frontier.pop_front() {
        found.push(u);
        for (v, leg) in net.legs_from(u) {
            if !visited[v.index()] && leg.distance <= max_leg_distance {
                visited[v.index()] = true;
                frontier.push_back(v);
            }
        }
    }
    debug!(
        "reach from {}: {} of {} locations",
        from.index(), found.len(), net.len()
    );
    found
}
