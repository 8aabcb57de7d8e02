//! Best-effort source positions for diagnostics
//!
//! Structural validation runs over the parsed tree, not a source-mapped
//! parse, so positions are reproduced textually. Keys and values repeat
//! verbatim in real documents, therefore each (line, column) is claimed
//! at most once per pass: the first unclaimed occurrence of the needle
//! wins, and when every occurrence is already claimed any occurrence is
//! returned so the diagnostic still points somewhere plausible.

use std::collections::HashSet;

use crate::diagnostics::Position;

pub struct PositionFinder<'a> {
    lines: Vec<&'a str>,
    claimed: HashSet<(usize, usize)>,
}

impl<'a> PositionFinder<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().collect(),
            claimed: HashSet::new(),
        }
    }

    /// Finds the first unclaimed occurrence of `needle`, claiming it.
    ///
    /// Coordinates are 1-based. Returns `None` only when the needle does
    /// not appear in the source at all.
    pub fn find(&mut self, needle: &str) -> Option<Position> {
        if needle.is_empty() {
            return None;
        }

        let mut first_match = None;
        for (line_idx, line) in self.lines.iter().enumerate() {
            for (col_idx, _) in line.match_indices(needle) {
                let coords = (line_idx + 1, col_idx + 1);
                if first_match.is_none() {
                    first_match = Some(coords);
                }
                if self.claimed.insert(coords) {
                    return Some(Position {
                        line: coords.0,
                        column: coords.1,
                    });
                }
            }
        }

        // Everything claimed; fall back to any occurrence.
        first_match.map(|(line, column)| Position { line, column })
    }
}
