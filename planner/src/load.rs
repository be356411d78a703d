//! Loading travel networks from flat files.

use anyhow::{ bail, Context, Error };

use routekit::network::{ Leg, Network };

use std::fs;
use std::path::Path;

/// Reads a travel network from a text file of whitespace-separated
/// records of the form `<from> <to> <distance> <cost> <time>`, one
/// per line. Blank lines are skipped.
///
/// Locations are created on first reference and legs are applied in
/// file order, so of two records for the same ordered pair the later
/// one wins. A record with a distance of zero is rejected: every leg
/// present in a network is travellable.
pub fn read_network(path: impl AsRef<Path>) -> Result<Network, Error> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read network file {}", path.display()))?;
    parse_network(&data)
}

fn parse_network(data: &str) -> Result<Network, Error> {
    let mut net = Network::new();
    for (lineno, line) in data.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (from, to, leg) = parse_record(line)
            .with_context(|| format!("invalid record on line {}", lineno + 1))?;
        net.add_location(from)?;
        net.add_location(to)?;
        net.add_leg(from, to, leg);
    }
    Ok(net)
}

fn parse_record(line: &str) -> Result<(&str, &str, Leg), Error> {
    let mut fields = line.split_whitespace();
    let record = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    );
    if let (Some(from), Some(to), Some(d), Some(c), Some(t), None) = record {
        let distance = d.parse().with_context(|| format!("bad distance `{}`", d))?;
        let cost = c.parse().with_context(|| format!("bad cost `{}`", c))?;
        let time = t.parse().with_context(|| format!("bad time `{}`", t))?;
        if distance == 0 {
            bail!("a leg must have a non-zero distance");
        }
        Ok((from, to, Leg::new(distance, cost, time)))
    } else {
        bail!("expected `<from> <to> <distance> <cost> <time>`");
    }
}
