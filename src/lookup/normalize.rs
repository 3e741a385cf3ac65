//! Response shape normalization
//!
//! Lookup services answer either `{ "<field>": [...] }` or a bare `[...]`.
//! The nested field wins when it is present and non-null; otherwise the whole
//! payload is used. Whatever is chosen must be an array, anything else
//! normalizes to no candidates.

use serde_json::Value;

use crate::candidate::Candidate;

/// Extract the candidate list from a lookup payload
pub fn normalize_payload(payload: &Value, results_field: &str) -> Vec<Candidate> {
    let chosen = match payload.get(results_field) {
        Some(nested) if !nested.is_null() => nested,
        _ => payload,
    };

    let Some(entries) = chosen.as_array() else {
        log::debug!("Lookup payload has no candidate array, treating as empty");
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let candidate = Candidate::from_value(entry);
            if candidate.is_none() {
                log::debug!("Skipping malformed candidate at index {}", index);
            }
            candidate
        })
        .collect()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod normalize_tests;
