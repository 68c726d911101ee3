pub mod action;
pub mod state;

pub use action::{map_key_to_action, Action};
pub use state::{AppState, InputMode};
