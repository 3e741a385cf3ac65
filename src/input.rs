mod debouncer;
mod input_state;

pub use debouncer::Debouncer;
pub use input_state::InputState;
