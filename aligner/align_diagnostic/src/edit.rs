//! Positioned text insertions.
//!
//! # Design
//!
//! Insertions are accumulated and then applied in reverse column order
//! (from end to start) so that earlier positions stay valid while text is
//! inserted.
//!
//! Positions are columns within the original line. Every emitted insertion
//! targets a distinct original column, so application order cannot change
//! the result; reverse order just avoids re-offsetting.

use std::fmt;

/// A text insertion at a column of the original line.
///
/// Insert-only by construction: alignment never replaces or deletes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Insertion {
    /// Column in the original, pre-edit line.
    pub at: u32,
    /// The literal text to insert.
    pub text: String,
}

impl Insertion {
    /// Create an insertion.
    pub fn new(at: u32, text: impl Into<String>) -> Self {
        Insertion {
            at,
            text: text.into(),
        }
    }

    /// Check if applying this insertion changes anything.
    pub fn is_noop(&self) -> bool {
        self.text.is_empty()
    }
}

/// Error when two insertions target the same column.
#[derive(Clone, Debug)]
pub struct PositionConflict {
    pub first: Insertion,
    pub second: Insertion,
}

impl fmt::Display for PositionConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "insertions collide at column {}: {:?} and {:?}",
            self.first.at, self.first.text, self.second.text
        )
    }
}

impl std::error::Error for PositionConflict {}

/// Accumulates insertions and applies them to a line.
///
/// Hosts that manage their own fixers can consume the raw [`Insertion`]
/// list instead; this type exists for hosts (and tests) that want the
/// textual result directly.
#[derive(Clone, Debug, Default)]
pub struct InsertionSet {
    insertions: Vec<Insertion>,
}

impl InsertionSet {
    /// Create a new empty set.
    pub fn new() -> Self {
        InsertionSet {
            insertions: Vec::new(),
        }
    }

    /// Add an insertion.
    pub fn push(&mut self, insertion: Insertion) {
        self.insertions.push(insertion);
    }

    /// Insert `text` at `at`.
    pub fn insert(&mut self, at: u32, text: impl Into<String>) {
        self.insertions.push(Insertion::new(at, text));
    }

    /// Number of pending insertions.
    pub fn len(&self) -> usize {
        self.insertions.len()
    }

    /// Check if there are no pending insertions.
    pub fn is_empty(&self) -> bool {
        self.insertions.is_empty()
    }

    /// The pending insertions.
    pub fn insertions(&self) -> &[Insertion] {
        &self.insertions
    }

    /// Check for two insertions targeting the same column.
    ///
    /// Returns the first conflict found, if any. The engine never produces
    /// one (each insertion sits at a distinct item's column), so a conflict
    /// means the host merged edit lists from different scopes on one line.
    pub fn check_conflicts(&self) -> Option<PositionConflict> {
        let mut sorted = self.insertions.clone();
        sorted.sort_by_key(|i| i.at);

        for window in sorted.windows(2) {
            if window[0].at == window[1].at && !window[0].is_noop() && !window[1].is_noop() {
                return Some(PositionConflict {
                    first: window[0].clone(),
                    second: window[1].clone(),
                });
            }
        }

        None
    }

    /// Apply all insertions to the line and return the result.
    ///
    /// Insertions are applied from the highest column down so earlier
    /// positions remain valid. Positions are character columns, not byte
    /// offsets; columns past the end of the line clamp to the end.
    pub fn apply(&self, line: &str) -> String {
        if self.insertions.is_empty() {
            return line.to_string();
        }

        let mut sorted = self.insertions.clone();
        sorted.sort_by(|a, b| b.at.cmp(&a.at));

        let mut result = line.to_string();
        for insertion in sorted {
            let at = byte_offset(&result, insertion.at);
            result.insert_str(at, &insertion.text);
        }

        result
    }

    /// Apply all insertions, returning an error if two collide.
    pub fn apply_checked(&self, line: &str) -> Result<String, PositionConflict> {
        if let Some(conflict) = self.check_conflicts() {
            return Err(conflict);
        }
        Ok(self.apply(line))
    }
}

/// Byte offset of the given character column, clamped to the end of the
/// line.
fn byte_offset(line: &str, column: u32) -> usize {
    let column = usize::try_from(column).unwrap_or(usize::MAX);
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(offset, _)| offset)
}

impl FromIterator<Insertion> for InsertionSet {
    fn from_iter<T: IntoIterator<Item = Insertion>>(iter: T) -> Self {
        InsertionSet {
            insertions: iter.into_iter().collect(),
        }
    }
}
