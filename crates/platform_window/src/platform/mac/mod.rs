//! macOS backend

pub mod application;
pub mod window;

pub use application::MacApplication;
pub use window::MacWindow;
