mod autocomplete_render;

pub use autocomplete_render::{AutocompleteLayout, render_autocomplete};
