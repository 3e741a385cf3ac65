//! Search-and-select autocomplete control
//!
//! Typing is debounced into lookups against a pluggable [`LookupService`];
//! only the latest lookup can ever update the suggestions, and committing a
//! suggestion locks the input until the selection is cleared.

pub mod autocomplete;
pub mod candidate;
pub mod config;
pub mod error;
pub mod focus;
pub mod input;
pub mod lookup;
pub mod render;
pub mod selection;
pub mod suggestions;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use autocomplete::{Autocomplete, Phase};
pub use candidate::{Candidate, CandidateId, ItemKey};
pub use config::Config;
pub use error::LookupError;
pub use lookup::{HttpLookup, LookupService};
