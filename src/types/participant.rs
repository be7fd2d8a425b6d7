//! Participant roster with a stable, explicit ordering.
//!
//! ## Ordering Is the Priority Rule
//!
//! The roster preserves the column order of the input table, and that order
//! IS the first-come-first-served matching priority. Everywhere else in the
//! crate a participant is a dense `usize` index into the roster; names only
//! resurface at the I/O boundary.
//!
//! The same roster (same names, same order) applies to every period of a
//! run. Per-period state is indexed by these positions, so the roster
//! rejects duplicate names up front.

use crate::error::MarketError;

/// Ordered set of participant names.
///
/// Construction fails on duplicate names; an empty roster is valid and
/// produces a degenerate but well-formed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Build a roster from names in declaration (column) order.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::DuplicateParticipant`] if any name repeats.
    ///
    /// # Example
    ///
    /// ```
    /// use peergrid::types::Roster;
    ///
    /// let roster = Roster::new(vec!["house_1".into(), "house_2".into()]).unwrap();
    /// assert_eq!(roster.len(), 2);
    /// assert_eq!(roster.name(1), "house_2");
    /// ```
    pub fn new(names: Vec<String>) -> Result<Self, MarketError> {
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(MarketError::DuplicateParticipant(name.clone()));
            }
        }
        Ok(Self { names })
    }

    /// Number of participants
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when there are no participant columns (degenerate run)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the participant at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// Iterate over names in priority order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_roster_preserves_order() {
        let roster = Roster::new(names(&["c", "a", "b"])).unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.name(0), "c");
        assert_eq!(roster.name(1), "a");
        assert_eq!(roster.name(2), "b");

        let collected: Vec<&str> = roster.iter().collect();
        assert_eq!(collected, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_roster_rejects_duplicates() {
        let err = Roster::new(names(&["a", "b", "a"])).unwrap_err();
        assert!(matches!(
            err,
            MarketError::DuplicateParticipant(name) if name == "a"
        ));
    }

    #[test]
    fn test_roster_empty_is_valid() {
        let roster = Roster::new(Vec::new()).unwrap();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
    }

}
