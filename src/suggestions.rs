mod suggestion_state;
mod viewport;

pub use suggestion_state::SuggestionList;
pub use viewport::ListViewport;
