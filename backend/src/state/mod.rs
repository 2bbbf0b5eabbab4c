// State management module
// Holds the immutable values shared by all request handlers

pub mod app_state;

pub use app_state::AppState;
