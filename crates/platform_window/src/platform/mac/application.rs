//! macOS application context
//!
//! Owns every live window and knows the display bounds windows go fullscreen
//! into. Windows point back at the application weakly.

use std::cell::RefCell;
use std::rc::Rc;

use super::window::MacWindow;
use crate::config::{PlatformConfig, WindowConfig};
use crate::window::{GenericWindow, WindowRect};

/// Application context for macOS windows
pub struct MacApplication {
    windows: Vec<Rc<RefCell<MacWindow>>>,
    display_bounds: WindowRect,
}

impl MacApplication {
    /// Create an application for a display with the given bounds
    pub fn new(display_bounds: WindowRect) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            windows: Vec::new(),
            display_bounds,
        }))
    }

    /// Create an application from the display section of a config
    pub fn from_config(config: &PlatformConfig) -> Rc<RefCell<Self>> {
        Self::new(config.display.rect())
    }

    /// Create a window, attach it to `app` and register it
    pub fn make_window(
        app: &Rc<RefCell<Self>>,
        width: i32,
        height: i32,
        title: &str,
    ) -> Rc<RefCell<MacWindow>> {
        let window = MacWindow::make(width, height, title);
        window.borrow_mut().initialize(app);
        app.borrow_mut().windows.push(Rc::clone(&window));

        log::info!("Window '{}' registered ({}x{})", title, width, height);
        window
    }

    /// Create a window from a config section
    ///
    /// Position, mode, DPI factor and visibility are applied after the window
    /// is registered, so fullscreen modes pick up the display bounds.
    pub fn make_window_from_config(
        app: &Rc<RefCell<Self>>,
        config: &WindowConfig,
    ) -> Rc<RefCell<MacWindow>> {
        let window = Self::make_window(app, config.width, config.height, &config.title);
        {
            let mut window = window.borrow_mut();
            window.move_to(config.x, config.y);
            window.set_dpi_scale_factor(config.dpi_scale_factor);
            window.set_window_mode(config.mode);
            if config.visible {
                window.show();
            }
        }
        window
    }

    /// Destroy a window and drop it from the registry
    ///
    /// Returns false when the window did not belong to this application; it
    /// is destroyed either way.
    pub fn destroy_window(app: &Rc<RefCell<Self>>, window: &Rc<RefCell<MacWindow>>) -> bool {
        let registered = app.borrow_mut().unregister(window.as_ptr());
        window.borrow_mut().destroy();
        registered
    }

    /// Drop a window from the registry without touching it
    ///
    /// Compares addresses only, so it is safe to call while the window itself
    /// is mutably borrowed.
    pub(super) fn unregister(&mut self, window: *const MacWindow) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| !std::ptr::eq(w.as_ptr(), window));
        self.windows.len() != before
    }

    /// Destroy every registered window
    pub fn destroy_all(app: &Rc<RefCell<Self>>) {
        let windows = std::mem::take(&mut app.borrow_mut().windows);
        log::debug!("Destroying {} window(s)", windows.len());
        for window in windows {
            window.borrow_mut().destroy();
        }
    }

    /// Registered windows
    pub fn windows(&self) -> &[Rc<RefCell<MacWindow>>] {
        &self.windows
    }

    /// Number of registered windows
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Bounds of the display
    pub const fn display_bounds(&self) -> WindowRect {
        self.display_bounds
    }

    /// Update the display bounds, e.g. after a resolution change
    pub fn set_display_bounds(&mut self, bounds: WindowRect) {
        self.display_bounds = bounds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowMode;
    use approx::assert_relative_eq;

    fn display() -> WindowRect {
        WindowRect::new(0, 0, 2560, 1440)
    }

    #[test]
    fn test_make_window_registers_and_links() {
        let app = MacApplication::new(display());
        let window = MacApplication::make_window(&app, 800, 600, "Main");

        assert_eq!(app.borrow().window_count(), 1);
        let owner = window.borrow().application().unwrap();
        assert!(Rc::ptr_eq(&owner, &app));
    }

    #[test]
    fn test_back_reference_is_weak() {
        let app = MacApplication::new(display());
        let window = MacApplication::make_window(&app, 800, 600, "Orphan");

        drop(app);

        assert!(window.borrow().application().is_none());
        assert!(window.borrow().fullscreen_info().is_none());
    }

    #[test]
    fn test_window_does_not_keep_app_alive() {
        let app = MacApplication::new(display());
        let _window = MacApplication::make_window(&app, 800, 600, "Main");

        // Only the app's own handle is strong
        assert_eq!(Rc::strong_count(&app), 1);
        assert_eq!(Rc::weak_count(&app), 1);
    }

    #[test]
    fn test_fullscreen_info_reports_display() {
        let app = MacApplication::new(display());
        let window = MacApplication::make_window(&app, 800, 600, "Main");

        assert_eq!(window.borrow().fullscreen_info(), Some(display()));

        app.borrow_mut().set_display_bounds(WindowRect::new(0, 0, 1280, 800));
        assert_eq!(window.borrow().fullscreen_info(), Some(WindowRect::new(0, 0, 1280, 800)));
    }

    #[test]
    fn test_fullscreen_round_trip() {
        let app = MacApplication::new(display());
        let window = MacApplication::make_window(&app, 800, 600, "Main");
        let mut window = window.borrow_mut();
        window.move_to(100, 200);

        window.set_window_mode(WindowMode::WindowedFullscreen);
        assert_eq!(window.rect(), display());
        assert_relative_eq!(window.aspect_ratio(), 16.0 / 9.0);
        assert_eq!(window.restored_dimensions(), WindowRect::new(100, 200, 800, 600));

        // Switching between fullscreen flavours keeps the windowed geometry
        window.set_window_mode(WindowMode::Fullscreen);
        assert_eq!(window.restored_dimensions(), WindowRect::new(100, 200, 800, 600));

        window.set_window_mode(WindowMode::Windowed);
        assert_eq!(window.rect(), WindowRect::new(100, 200, 800, 600));
        assert_relative_eq!(window.aspect_ratio(), 800.0 / 600.0);
        assert_eq!(window.restored_dimensions(), window.rect());
    }

    #[test]
    fn test_make_window_from_config() {
        let config = PlatformConfig::default().with_window(
            WindowConfig::new("Configured", 1024, 768)
                .with_position(30, 40)
                .with_dpi_scale_factor(2.0),
        );
        let app = MacApplication::from_config(&config);
        let window = MacApplication::make_window_from_config(&app, &config.window);
        let window = window.borrow();

        assert_eq!(window.title(), "Configured");
        assert_eq!(window.rect(), WindowRect::new(30, 40, 1024, 768));
        assert_relative_eq!(window.dpi_scale_factor(), 2.0);
        assert!(window.is_visible());
        assert_eq!(window.window_mode(), WindowMode::Windowed);
    }

    #[test]
    fn test_make_fullscreen_window_from_config() {
        let config = PlatformConfig::default().with_window(
            WindowConfig::new("Game", 800, 600)
                .with_mode(WindowMode::Fullscreen)
                .with_visible(false),
        );
        let app = MacApplication::from_config(&config);
        let window = MacApplication::make_window_from_config(&app, &config.window);
        let window = window.borrow();

        assert_eq!(window.rect(), config.display.rect());
        assert!(!window.is_visible());
        assert_eq!(
            window.restored_dimensions(),
            WindowRect::new(config.window.x, config.window.y, 800, 600)
        );
    }

    #[test]
    fn test_destroy_window_unregisters() {
        let app = MacApplication::new(display());
        let first = MacApplication::make_window(&app, 800, 600, "First");
        let second = MacApplication::make_window(&app, 400, 300, "Second");

        assert!(MacApplication::destroy_window(&app, &first));
        assert_eq!(app.borrow().window_count(), 1);
        assert!(first.borrow().is_destroyed());
        assert!(first.borrow().application().is_none());
        assert!(!second.borrow().is_destroyed());

        // Second call finds nothing to unregister
        assert!(!MacApplication::destroy_window(&app, &first));
    }

    #[test]
    fn test_direct_destroy_unregisters() {
        let app = MacApplication::new(display());
        let first = MacApplication::make_window(&app, 800, 600, "First");
        let second = MacApplication::make_window(&app, 400, 300, "Second");

        first.borrow_mut().destroy();

        assert!(first.borrow().is_destroyed());
        assert_eq!(app.borrow().window_count(), 1);
        assert!(Rc::ptr_eq(&app.borrow().windows()[0], &second));

        // Already gone from the registry
        assert!(!MacApplication::destroy_window(&app, &first));
    }

    #[test]
    fn test_maximized_fullscreen_round_trip() {
        let app = MacApplication::new(display());
        let window = MacApplication::make_window(&app, 800, 600, "Main");
        let mut window = window.borrow_mut();
        window.move_to(10, 10);

        window.maximize();
        window.reshape(0, 0, 2560, 1400);
        window.set_window_mode(WindowMode::Fullscreen);
        assert_eq!(window.rect(), display());
        assert_eq!(window.restored_dimensions(), WindowRect::new(10, 10, 800, 600));

        window.set_window_mode(WindowMode::Windowed);
        assert_eq!(window.rect(), WindowRect::new(10, 10, 800, 600));
        assert!(!window.is_maximized());
        assert_eq!(window.restored_dimensions(), window.rect());
    }

    #[test]
    fn test_destroy_foreign_window() {
        let app = MacApplication::new(display());
        let stray = MacWindow::make(100, 100, "Stray");

        assert!(!MacApplication::destroy_window(&app, &stray));
        assert!(stray.borrow().is_destroyed());
    }

    #[test]
    fn test_destroy_all() {
        let app = MacApplication::new(display());
        let windows: Vec<_> = (0..3)
            .map(|i| MacApplication::make_window(&app, 100, 100, &format!("Window {i}")))
            .collect();

        MacApplication::destroy_all(&app);

        assert_eq!(app.borrow().window_count(), 0);
        assert!(windows.iter().all(|w| w.borrow().is_destroyed()));
    }
}
