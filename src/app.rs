mod events;
mod mouse_click;
mod render;
mod state;
mod view;

// Re-export public types
pub use state::{App, Focus};
pub use view::TuiView;
