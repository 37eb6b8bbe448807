//! The sign-off verifier: counts collected sign-offs per role and
//! compares against required counts.

use std::collections::HashMap;

/// Verifies that `signoffs` (user -> role) satisfy `required` (role ->
/// required count).
///
/// An absent or empty `required` trivially passes. Counting is by role
/// occurrence in `signoffs`'s values, so the result is invariant under
/// any permutation of the map's keys.
pub fn verify_signoffs(
    required: &HashMap<String, u32>,
    signoffs: &HashMap<String, String>,
) -> bool {
    if required.is_empty() {
        return true;
    }
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for role in signoffs.values() {
        *counts.entry(role.as_str()).or_insert(0) += 1;
    }
    required
        .iter()
        .all(|(role, &needed)| counts.get(role.as_str()).copied().unwrap_or(0) >= needed)
}
