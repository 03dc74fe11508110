//! Presentation: client-side state, rendering and export.

mod export;
mod render;
mod state;

pub use export::write_matches_csv;
pub use render::{render_html, render_text};
pub use state::{SelectionError, TrackerState};
