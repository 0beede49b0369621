//! Computing the set of keys missing from a target locale
//!
//! A missing key is one present in the reference map but absent from the
//! target map. Output order follows the reference map, so backfilled keys
//! land in target files in a deterministic, reviewable order.

use crate::store::KeyValueMap;
use tracing::warn;

/// Ordered list of reference keys absent from the target
#[must_use]
pub fn missing_keys(reference: &KeyValueMap, target: &KeyValueMap) -> Vec<String> {
    reference
        .keys()
        .filter(|key| !target.contains_key(*key))
        .cloned()
        .collect()
}

/// Like [`missing_keys`], restricted to an explicit key subset
///
/// Subset keys that do not exist in the reference map cannot be backfilled;
/// they are logged and skipped rather than treated as errors. Output order
/// still follows the reference map, not the subset.
#[must_use]
pub fn missing_keys_in_subset(
    reference: &KeyValueMap,
    target: &KeyValueMap,
    subset: &[String],
) -> Vec<String> {
    for key in subset {
        if !reference.contains_key(key) {
            warn!("Requested key not present in reference locale: {key}");
        }
    }

    reference
        .keys()
        .filter(|key| subset.iter().any(|s| s == *key))
        .filter(|key| !target.contains_key(*key))
        .cloned()
        .collect()
}
