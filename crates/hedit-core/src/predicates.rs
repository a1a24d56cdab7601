// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Small structural analyses over `(source, destination)` pairs.
//!
//! The functions are generic over the endpoint type so they work on plain
//! node ids as well as on borrowed [`Endpoint`](hedit_graph::Endpoint)s.
//! Inputs that need more than one pass are required to be `Clone` and are
//! replayed rather than consumed twice.

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

/// Which end of each pair an analysis looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// The source (first) element.
    Source,
    /// The destination (second) element.
    Destination,
    /// Sources first, then destinations, as two independent passes.
    Either,
}

fn side<T>((source, destination): (T, T), position: Position) -> T {
    match position {
        Position::Destination => destination,
        Position::Source | Position::Either => source,
    }
}

/// Source of the first pair whose two ends are equal.
pub fn maybe_self_loop<T, I>(pairs: I) -> Option<T>
where
    T: PartialEq,
    I: IntoIterator<Item = (T, T)>,
{
    pairs
        .into_iter()
        .find_map(|(source, destination)| (source == destination).then_some(source))
}

/// First value seen twice at `position`.
pub fn maybe_duplicate<T, I>(pairs: I, position: Position) -> Option<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = (T, T)> + Clone,
{
    if position == Position::Either {
        return maybe_duplicate(pairs.clone(), Position::Source)
            .or_else(|| maybe_duplicate(pairs, Position::Destination));
    }

    let mut seen = FxHashSet::default();
    for value in pairs.into_iter().map(|pair| side(pair, position)) {
        if seen.contains(&value) {
            return Some(value);
        }
        seen.insert(value);
    }
    None
}

/// First value seen twice across both ends of the pairs, in a single pass.
///
/// Unlike [`Position::Either`], a value met once as a source and once as a
/// destination counts as repeated.
pub fn maybe_shared<T, I>(pairs: I) -> Option<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = (T, T)>,
{
    let mut seen = FxHashSet::default();
    for (source, destination) in pairs {
        for value in [source, destination] {
            if seen.contains(&value) {
                return Some(value);
            }
            seen.insert(value);
        }
    }
    None
}

/// The value at `position` when every pair agrees on it. Empty input has no
/// sole value. With [`Position::Either`] the sole source wins over the sole
/// destination.
pub fn maybe_single<T, I>(pairs: I, position: Position) -> Option<T>
where
    T: PartialEq,
    I: IntoIterator<Item = (T, T)> + Clone,
{
    if position == Position::Either {
        return maybe_single(pairs.clone(), Position::Source)
            .or_else(|| maybe_single(pairs, Position::Destination));
    }

    let mut values = pairs.into_iter().map(|pair| side(pair, position));
    let first = values.next()?;
    values.all(|v| v == first).then_some(first)
}

/// First pair that closes a cycle, processing pairs in order.
///
/// Keeps, for every endpoint seen so far, the set of endpoints reachable
/// from it, and extends those sets edge by edge instead of recomputing a
/// closure. The reported pair is the one whose arrival created the cycle.
pub fn maybe_cycle_elem<T, I>(pairs: I) -> Option<(T, T)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = (T, T)>,
{
    let mut reachable: FxHashMap<T, FxHashSet<T>> = FxHashMap::default();

    for (source, destination) in pairs {
        reachable
            .entry(source.clone())
            .or_default()
            .insert(destination.clone());
        let from_destination = reachable.get(&destination).cloned().unwrap_or_default();

        for (start, reached) in &mut reachable {
            if *start != source && !reached.contains(&source) {
                continue;
            }
            if *start == destination || from_destination.contains(start) {
                return Some((source, destination));
            }
            reached.insert(destination.clone());
            reached.extend(from_destination.iter().cloned());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn self_loop_reports_first() {
        assert_eq!(maybe_self_loop(vec![(1, 2), (3, 3), (4, 4)]), Some(3));
        assert_eq!(maybe_self_loop(vec![(1, 2)]), None);
    }

    #[test]
    fn duplicate_by_position() {
        let pairs = vec![(1, 5), (2, 5), (1, 6)];
        assert_eq!(maybe_duplicate(pairs.clone(), Position::Source), Some(1));
        assert_eq!(maybe_duplicate(pairs.clone(), Position::Destination), Some(5));
        assert_eq!(maybe_duplicate(vec![(1, 5), (2, 6)], Position::Either), None);
        assert_eq!(maybe_duplicate(vec![(1, 5), (2, 5)], Position::Either), Some(5));
    }

    #[test]
    fn duplicate_either_checks_sources_first() {
        let pairs = vec![(7, 1), (8, 1), (7, 2)];
        assert_eq!(maybe_duplicate(pairs, Position::Either), Some(7));
    }

    #[test]
    fn shared_spans_both_ends() {
        assert_eq!(maybe_shared(vec![(1, 2), (3, 1)]), Some(1));
        assert_eq!(maybe_duplicate(vec![(1, 2), (3, 1)], Position::Either), None);
        assert_eq!(maybe_shared(vec![(1, 2), (3, 4)]), None);
        assert_eq!(maybe_shared(vec![(5, 5)]), Some(5));
    }

    #[test]
    fn single_value() {
        assert_eq!(maybe_single(vec![(1, 2), (1, 3)], Position::Source), Some(1));
        assert_eq!(maybe_single(vec![(1, 2), (1, 3)], Position::Destination), None);
        assert_eq!(maybe_single(Vec::<(i64, i64)>::new(), Position::Source), None);
        assert_eq!(maybe_single(vec![(1, 3), (2, 3)], Position::Either), Some(3));
    }

    #[test]
    fn zero_is_a_real_value() {
        assert_eq!(maybe_duplicate(vec![(0, 1), (0, 2)], Position::Either), Some(0));
        assert_eq!(maybe_single(vec![(0, 1), (0, 2)], Position::Either), Some(0));
    }

    #[test]
    fn cycle_reports_closing_pair() {
        assert_eq!(maybe_cycle_elem(vec![(1, 2), (2, 3), (3, 1)]), Some((3, 1)));
        assert_eq!(maybe_cycle_elem(vec![(1, 1)]), Some((1, 1)));
        assert_eq!(maybe_cycle_elem(vec![(1, 2), (2, 1), (5, 6)]), Some((2, 1)));
    }

    #[test]
    fn cycle_found_when_closed_out_of_order() {
        // 3 -> 1 arrives before the path 1 -> 2 -> 3 is complete.
        assert_eq!(
            maybe_cycle_elem(vec![(3, 1), (1, 2), (2, 3), (4, 5)]),
            Some((2, 3))
        );
    }

    #[test]
    fn cycle_found_when_path_is_built_backwards() {
        assert_eq!(
            maybe_cycle_elem(vec![(2, 3), (1, 2), (0, 1), (3, 0)]),
            Some((3, 0))
        );
    }

    #[test]
    fn dags_have_no_cycle() {
        assert_eq!(maybe_cycle_elem(vec![(1, 2), (1, 3), (2, 4), (3, 4)]), None);
        assert_eq!(maybe_cycle_elem(Vec::<(u8, u8)>::new()), None);
    }
}
