mod selection_state;

pub use selection_state::{ObserverId, SelectionHolder, SelectionObserver};
