//! Identity-based pairing of two object snapshots.
//!
//! [`zip_objects`] walks a previous and a current snapshot and reports every
//! identity exactly once, as `(previous, current)` with either side possibly
//! absent. Snapshots usually keep their order between updates, so the walk
//! first matches positions and only falls back to an id map once the two
//! sides diverge.

use maps_object::{find_duplicate_object_id, index_by_object_id, MapsObject};
use tracing::trace;

/// Options for [`zip_objects`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipOptions {
    /// Panic if the unmatched part of `current` repeats an id.
    ///
    /// Only the part of `current` after the positional match is scanned. An
    /// id repeated inside the matched prefix, or repeated once in the prefix
    /// and once after it, is not detected: its first occurrence is paired and
    /// later ones are reported as unpaired.
    ///
    /// Without the check, a repeated id pairs its first occurrence with the
    /// previous object and reports later occurrences as unpaired.
    pub check_duplicates: bool,
}

impl Default for ZipOptions {
    fn default() -> Self {
        Self {
            check_duplicates: cfg!(debug_assertions),
        }
    }
}

impl ZipOptions {
    pub fn unchecked() -> Self {
        Self {
            check_duplicates: false,
        }
    }
}

/// Pair `previous` and `current` by object id.
///
/// `on_pair` is called once per id found in either slice:
/// - `(Some(p), Some(c))` when the id is in both,
/// - `(None, Some(c))` when it is only in `current`,
/// - `(Some(p), None)` when it is only in `previous`.
///
/// Pairs involving `current` are reported in `current` order. Pure removals
/// come last, in no particular order.
///
/// Runs in linear time. While ids match position by position no memory is
/// allocated; after the first mismatch the rest of `previous` is indexed by
/// id (repeated ids in `previous` collapse to one entry, last value wins).
///
/// # Panics
///
/// When `options.check_duplicates` is set and the unmatched part of `current`
/// contains the same id twice.
pub fn zip_objects<'a, T, F>(previous: &'a [T], current: &'a [T], options: &ZipOptions, mut on_pair: F)
where
    T: MapsObject,
    F: FnMut(Option<&'a T>, Option<&'a T>),
{
    let mut matched = 0;
    for (prev, curr) in previous.iter().zip(current) {
        if prev.object_id() != curr.object_id() {
            break;
        }
        on_pair(Some(prev), Some(curr));
        matched += 1;
    }
    if matched == previous.len() && matched == current.len() {
        return;
    }

    let previous = &previous[matched..];
    let current = &current[matched..];
    trace!(
        kind = T::KIND,
        matched,
        previous = previous.len(),
        current = current.len(),
        "positional match ended, pairing the rest by id"
    );

    if options.check_duplicates {
        if let Some(id) = find_duplicate_object_id(current) {
            panic!("duplicate {} id `{}` in current objects", T::KIND, id);
        }
    }

    let mut remaining = index_by_object_id(previous);
    for curr in current {
        on_pair(remaining.swap_remove(curr.object_id()), Some(curr));
    }
    for prev in remaining.into_values() {
        on_pair(Some(prev), None);
    }
}
