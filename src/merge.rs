//! Insert-only merge of missing keys into a target map
//!
//! The merge may only ever add entries. Existing target entries are never
//! read, replaced, or reordered; this is enforced by inserting through the
//! vacant half of the entry API, so an occupied slot cannot be written even
//! by a buggy caller passing a key that is not actually missing.

use crate::store::KeyValueMap;
use indexmap::map::Entry;

/// Result of one merge step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Number of keys inserted into the target
    pub added: usize,
}

impl MergeOutcome {
    /// Whether the target file must be rewritten
    ///
    /// A merge that added nothing must not trigger a write, so untouched
    /// files stay byte-identical on disk.
    #[must_use]
    pub const fn needs_write(&self) -> bool {
        self.added > 0
    }
}

/// Insert every missing key into the target, with the reference value
///
/// Keys are inserted in the given order, appending to the end of the target
/// map. Keys already present in the target are left untouched.
pub fn apply_missing(
    target: &mut KeyValueMap,
    missing: &[String],
    reference: &KeyValueMap,
) -> MergeOutcome {
    let mut added = 0;
    for key in missing {
        let Some(value) = reference.get(key) else {
            continue;
        };
        if let Entry::Vacant(slot) = target.entry(key.clone()) {
            slot.insert(value.clone());
            added += 1;
        }
    }

    MergeOutcome { added }
}
