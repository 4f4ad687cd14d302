// Utility functions
// Helper types shared across pages

pub mod view_state;

pub use view_state::ViewState;
