mod autocomplete_events;
mod controller;

pub use controller::{Autocomplete, Phase};
