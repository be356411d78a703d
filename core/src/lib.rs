//! A toolkit for the construction and querying of travel networks,
//! i.e. directed graphs of named locations whose connections each
//! carry a distance, a monetary cost and a travel time.

extern crate either;
extern crate log;
extern crate num_traits;
extern crate thiserror;
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
extern crate rand;

pub mod network;
pub mod search;
