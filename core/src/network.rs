//! Travel networks of named locations.

use either::Either;
use thiserror::Error;

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::iter;

/// Result type alias.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Error type.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Unknown location: {0}")]
    UnknownLocation(String),
    #[error("Location capacity exceeded")]
    CapacityExceeded,
}

/// A stable handle for a location in a [`Network`].
///
/// Ids are assigned in insertion order and are only meaningful to the
/// network that issued them.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct LocationId(pub(crate) usize);

impl LocationId {
    /// The position of the location in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A direct connection between two locations.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Leg {
    pub distance: u32,
    pub cost: u32,
    pub time: u32,
}

impl Leg {
    pub fn new(distance: u32, cost: u32, time: u32) -> Leg {
        Leg { distance, cost, time }
    }
}

/// A directed travel network.
///
/// Locations are identified by name and are never removed once added.
/// Every ordered pair of locations carries at most one [`Leg`]; adding
/// a second leg for a pair replaces the first. A pair without an
/// adjacency entry is not connected.
///
/// A network is built up front and queried read-only thereafter; the
/// search functions in [`crate::search`] never mutate it. Queries that
/// must run concurrently can share a clone each.
#[derive(Clone, Debug, Default)]
pub struct Network {
    names: Vec<String>,
    index: HashMap<String, usize>,
    legs: Vec<BTreeMap<usize, Leg>>,
    capacity: Option<usize>,
}

impl Network {
    /// Creates an empty network without a location limit.
    pub fn new() -> Network {
        Network::default()
    }

    /// Creates an empty network that refuses to grow beyond `limit`
    /// locations.
    pub fn with_capacity(limit: usize) -> Network {
        Network { capacity: Some(limit), ..Network::default() }
    }

    /// Adds a location, if it is not already present.
    ///
    /// Adding a known name leaves the network unchanged and returns
    /// the existing id.
    pub fn add_location(&mut self, name: &str) -> Result<LocationId> {
        if let Some(&i) = self.index.get(name) {
            return Ok(LocationId(i));
        }
        if self.capacity.map_or(false, |max| self.names.len() >= max) {
            return Err(NetworkError::CapacityExceeded);
        }
        let i = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), i);
        self.legs.push(BTreeMap::new());
        Ok(LocationId(i))
    }

    /// Connects `from` to `to`, replacing any existing leg for the
    /// ordered pair.
    ///
    /// Unknown endpoints make this a no-op: loaders may submit legs
    /// between locations they never announced and expect them to be
    /// dropped.
    pub fn add_leg(&mut self, from: &str, to: &str, leg: Leg) {
        if let (Some(&u), Some(&v)) = (self.index.get(from), self.index.get(to)) {
            self.legs[u].insert(v, leg);
        }
    }

    /// Looks up a location by exact name.
    pub fn index_of(&self, name: &str) -> Option<LocationId> {
        self.index.get(name).map(|&i| LocationId(i))
    }

    /// Looks up a location by exact name, failing the request if there
    /// is no such location.
    pub fn resolve(&self, name: &str) -> Result<LocationId> {
        self.index_of(name)
            .ok_or_else(|| NetworkError::UnknownLocation(name.to_string()))
    }

    /// The name of a location.
    pub fn name(&self, id: LocationId) -> Option<&str> {
        self.names.get(id.0).map(|n| n.as_str())
    }

    /// The leg from `from` to `to`, if the two are connected.
    pub fn leg(&self, from: LocationId, to: LocationId) -> Option<&Leg> {
        self.legs.get(from.0).and_then(|m| m.get(&to.0))
    }

    /// Iterate over the outgoing legs of a location, in increasing
    /// order of the destination id.
    pub fn legs_from(&self, from: LocationId) -> impl Iterator<Item=(LocationId, &Leg)> + '_ {
        match self.legs.get(from.0) {
            None => Either::Left(iter::empty()),
            Some(m) => Either::Right(m.iter().map(|(&v, leg)| (LocationId(v), leg))),
        }
    }

    /// Iterate over all locations in insertion order.
    pub fn locations(&self) -> impl Iterator<Item=(LocationId, &str)> + '_ {
        self.names.iter().enumerate().map(|(i, n)| (LocationId(i), n.as_str()))
    }

    /// The number of locations.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
