//! macOS window backend
//!
//! Keeps the geometry and state bookkeeping for one window. Everything that
//! needs a real Cocoa call (focus, z-order, border metrics) is left to the
//! native toolkit, which hands its handles over through
//! [`MacWindow::attach_native_handles`].

use std::any::Any;
use std::cell::RefCell;
use std::ffi::{c_char, CStr};
use std::rc::{Rc, Weak};

use ash::vk;
use raw_window_handle::RawWindowHandle;

use super::application::MacApplication;
use crate::window::surface::{extension_name_ptrs, MACOS_INSTANCE_EXTENSIONS};
use crate::window::{
    GenericWindow, NativeHandles, SurfaceFactory, WindowError, WindowMode, WindowRect,
    WindowResult, WindowState,
};

/// A window on macOS
pub struct MacWindow {
    rect: WindowRect,
    restored_rect: WindowRect,
    title: String,
    window_mode: WindowMode,
    application: Option<Weak<RefCell<MacApplication>>>,
    state: WindowState,
    aspect_ratio: f32,
    dpi_scale_factor: f32,
    opacity: f32,
    native: Option<NativeHandles>,
    destroyed: bool,
}

impl MacWindow {
    /// Create a hidden, windowed window at the origin
    pub fn new(width: i32, height: i32, title: &str) -> Self {
        let rect = WindowRect::new(0, 0, width, height);

        Self {
            rect,
            restored_rect: rect,
            title: title.to_owned(),
            window_mode: WindowMode::Windowed,
            application: None,
            state: WindowState::default(),
            aspect_ratio: rect.aspect_ratio().unwrap_or(1.0),
            dpi_scale_factor: 1.0,
            opacity: 1.0,
            native: None,
            destroyed: false,
        }
    }

    /// Create a shared window
    ///
    /// The application and the renderer both hold on to the returned handle.
    pub fn make(width: i32, height: i32, title: &str) -> Rc<RefCell<Self>> {
        log::debug!("Creating window '{}' ({}x{})", title, width, height);
        Rc::new(RefCell::new(Self::new(width, height, title)))
    }

    /// Attach the window to its owning application
    ///
    /// Only a weak reference is kept; the application owns its windows.
    pub fn initialize(&mut self, application: &Rc<RefCell<MacApplication>>) {
        self.application = Some(Rc::downgrade(application));
    }

    /// Owning application, if it is still alive
    pub fn application(&self) -> Option<Rc<RefCell<MacApplication>>> {
        self.application.as_ref().and_then(Weak::upgrade)
    }

    /// Record the handles the native toolkit created for this window
    pub fn attach_native_handles(&mut self, handles: NativeHandles) {
        self.native = Some(handles);
    }

    /// Native handles, if attached
    pub const fn native_handles(&self) -> Option<&NativeHandles> {
        self.native.as_ref()
    }

    /// Required instance extensions as pointers for `vk::InstanceCreateInfo`
    pub fn required_instance_extension_ptrs(&self) -> Vec<*const c_char> {
        extension_name_ptrs(self.required_instance_extensions())
    }

    /// Raw state bits
    pub const fn state(&self) -> WindowState {
        self.state
    }

    /// Current opacity
    pub const fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Whether the window accepts input
    pub const fn is_enabled(&self) -> bool {
        self.state.contains(WindowState::ENABLED)
    }

    /// Whether `destroy()` has run
    pub const fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn set_rect(&mut self, rect: WindowRect) {
        self.rect = rect;
        // Keep the last good ratio through a zero-height reshape
        if let Some(aspect_ratio) = rect.aspect_ratio() {
            self.aspect_ratio = aspect_ratio;
        }
    }

    fn display_bounds(&self) -> Option<WindowRect> {
        let app = self.application()?;
        let bounds = app.borrow().display_bounds();
        Some(bounds)
    }
}

impl GenericWindow for MacWindow {
    fn rect(&self) -> WindowRect {
        self.rect
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn window_mode(&self) -> WindowMode {
        self.window_mode
    }

    fn dpi_scale_factor_at_point(&self, _x: f32, _y: f32) -> f32 {
        1.0
    }

    fn dpi_scale_factor(&self) -> f32 {
        self.dpi_scale_factor
    }

    fn set_dpi_scale_factor(&mut self, value: f32) {
        self.dpi_scale_factor = value;
    }

    fn required_instance_extensions(&self) -> &'static [&'static CStr] {
        &MACOS_INSTANCE_EXTENSIONS
    }

    fn create_vk_surface(&self, factory: &dyn SurfaceFactory) -> WindowResult<vk::SurfaceKHR> {
        if self.destroyed {
            return Err(WindowError::Destroyed);
        }
        let handles = self.native.as_ref().ok_or(WindowError::NoNativeHandle)?;
        let surface = factory.create_surface(handles)?;
        log::debug!("Created Vulkan surface for window '{}'", self.title);
        Ok(surface)
    }

    fn os_window_handle(&self) -> Option<RawWindowHandle> {
        self.native.map(|handles| handles.window)
    }

    fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    fn reshape(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.set_rect(WindowRect::new(x, y, width, height));
    }

    fn fullscreen_info(&self) -> Option<WindowRect> {
        self.display_bounds()
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    fn bring_to_front(&mut self, force: bool) {
        log::debug!(
            "bring_to_front(force: {}) for '{}' is left to the native toolkit",
            force,
            self.title
        );
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        log::info!("Destroying window '{}'", self.title);
        if let Some(app) = self.application() {
            // The application may be mid-borrow when it tears windows down itself
            match app.try_borrow_mut() {
                Ok(mut app) => {
                    app.unregister(self);
                }
                Err(_) => log::debug!("Application busy, '{}' left to its caller", self.title),
            }
        }
        self.state.remove(WindowState::VISIBLE);
        self.native = None;
        self.application = None;
        self.destroyed = true;
    }

    /// Set the minimized flag; only `restore()` clears it
    fn minimize(&mut self) {
        self.state.insert(WindowState::MINIMIZED);
    }

    fn maximize(&mut self) {
        if !self.state.contains(WindowState::MAXIMIZED) && !self.window_mode.is_fullscreen() {
            self.restored_rect = self.rect;
        }
        self.state.insert(WindowState::MAXIMIZED);
    }

    /// Clear minimized and maximized, moving back to the restored geometry
    /// when leaving the maximized state
    fn restore(&mut self) {
        self.state.remove(WindowState::MINIMIZED);
        if self.state.contains(WindowState::MAXIMIZED) {
            self.state.remove(WindowState::MAXIMIZED);
            if !self.window_mode.is_fullscreen() {
                self.set_rect(self.restored_rect);
            }
        }
    }

    fn show(&mut self) {
        if self.state.contains(WindowState::VISIBLE) {
            return;
        }
        self.state.insert(WindowState::VISIBLE);
    }

    fn hide(&mut self) {
        if !self.state.contains(WindowState::VISIBLE) {
            return;
        }
        self.state.remove(WindowState::VISIBLE);
    }

    fn set_window_mode(&mut self, mode: WindowMode) {
        if mode == self.window_mode {
            return;
        }
        log::info!("Window '{}' mode {:?} -> {:?}", self.title, self.window_mode, mode);

        let was_fullscreen = self.window_mode.is_fullscreen();
        self.window_mode = mode;

        if mode.is_fullscreen() {
            if !was_fullscreen && !self.state.contains(WindowState::MAXIMIZED) {
                self.restored_rect = self.rect;
            }
            if let Some(bounds) = self.display_bounds() {
                self.set_rect(bounds);
            }
        } else {
            // Back at the pre-maximize geometry, so no longer maximized
            self.state.remove(WindowState::MAXIMIZED);
            self.set_rect(self.restored_rect);
        }
    }

    fn is_maximized(&self) -> bool {
        self.state.contains(WindowState::MAXIMIZED)
    }

    fn is_minimized(&self) -> bool {
        self.state.contains(WindowState::MINIMIZED)
    }

    fn is_visible(&self) -> bool {
        self.state.contains(WindowState::VISIBLE)
    }

    fn restored_dimensions(&self) -> WindowRect {
        if self.state.contains(WindowState::MAXIMIZED) || self.window_mode.is_fullscreen() {
            self.restored_rect
        } else {
            self.rect
        }
    }

    fn set_window_focus(&mut self) {
        log::debug!("set_window_focus for '{}' is left to the native toolkit", self.title);
    }

    fn set_opacity(&mut self, opacity: f32) {
        if opacity.is_nan() {
            log::warn!("Ignoring NaN opacity for window '{}'", self.title);
            return;
        }
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    fn enable(&mut self, enable: bool) {
        self.state.set(WindowState::ENABLED, enable);
    }

    fn is_point_in_window(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point(x, y)
    }

    fn window_border_size(&self) -> i32 {
        0
    }

    fn window_title_bar_size(&self) -> i32 {
        0
    }

    fn is_foreground_window(&self) -> bool {
        false
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.title);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
