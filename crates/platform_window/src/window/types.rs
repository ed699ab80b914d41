//! Plain data types shared by every window backend

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Display mode of a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// Regular decorated window
    #[default]
    Windowed,
    /// Borderless window covering the display
    WindowedFullscreen,
    /// Exclusive fullscreen
    Fullscreen,
}

impl WindowMode {
    /// True for both fullscreen flavours
    pub const fn is_fullscreen(self) -> bool {
        !matches!(self, Self::Windowed)
    }
}

/// Window geometry in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WindowRect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl WindowRect {
    /// Create a rectangle from position and size
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Strict containment test: points on the edges are outside
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        x > self.x
            && x < self.x.saturating_add(self.width)
            && y > self.y
            && y < self.y.saturating_add(self.height)
    }

    /// Width over height, or `None` for a degenerate height
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.height != 0).then(|| self.width as f32 / self.height as f32)
    }
}

bitflags! {
    /// Independent window state bits
    ///
    /// No combination is forbidden; a window can be both minimized and
    /// maximized at the same time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowState: u8 {
        /// Window is shown
        const VISIBLE = 1 << 0;
        /// Window is iconified
        const MINIMIZED = 1 << 1;
        /// Window is zoomed to the work area
        const MAXIMIZED = 1 << 2;
        /// Window accepts input
        const ENABLED = 1 << 3;
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self::ENABLED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_contains_point_excludes_edges() {
        let rect = WindowRect::new(10, 20, 100, 50);

        assert!(rect.contains_point(11, 21));
        assert!(rect.contains_point(109, 69));

        // Left/top edges
        assert!(!rect.contains_point(10, 40));
        assert!(!rect.contains_point(50, 20));

        // Right/bottom edges
        assert!(!rect.contains_point(110, 40));
        assert!(!rect.contains_point(50, 70));
    }

    #[test]
    fn test_single_pixel_rect_contains_nothing() {
        let rect = WindowRect::new(0, 0, 1, 1);
        assert!(!rect.contains_point(0, 0));
        assert!(!rect.contains_point(1, 1));
    }

    #[test]
    fn test_zero_size_rect_contains_nothing() {
        let rect = WindowRect::new(5, 5, 0, 0);
        assert!(!rect.contains_point(5, 5));
        assert!(!rect.contains_point(4, 4));
        assert!(!rect.contains_point(6, 6));
    }

    #[test]
    fn test_contains_point_near_i32_max() {
        let rect = WindowRect::new(i32::MAX - 10, 0, 100, 100);
        assert!(rect.contains_point(i32::MAX - 5, 50));
        assert!(!rect.contains_point(i32::MAX, 50));
    }

    #[test]
    fn test_aspect_ratio() {
        let wide = WindowRect::new(0, 0, 1920, 1080);
        assert_relative_eq!(wide.aspect_ratio().unwrap(), 16.0 / 9.0);
        assert!(WindowRect::new(0, 0, 800, 0).aspect_ratio().is_none());
    }

    #[test]
    fn test_window_mode_fullscreen() {
        assert!(!WindowMode::Windowed.is_fullscreen());
        assert!(WindowMode::WindowedFullscreen.is_fullscreen());
        assert!(WindowMode::Fullscreen.is_fullscreen());
    }

    #[test]
    fn test_default_state_is_enabled_only() {
        let state = WindowState::default();
        assert!(state.contains(WindowState::ENABLED));
        let shown_or_sized = WindowState::VISIBLE | WindowState::MINIMIZED | WindowState::MAXIMIZED;
        assert!(!state.intersects(shown_or_sized));
    }
}
