//! Window lifecycle demo
//!
//! Loads a platform config (TOML or RON, first CLI argument), creates the
//! application and its main window, then walks the window through the
//! operations the engine performs during a session.
//!
//! Usage: `window_demo [CONFIG_PATH]`

use ash::vk;
use platform_window::foundation::logging;
use platform_window::prelude::*;

fn load_config() -> Result<PlatformConfig, Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => PlatformConfig::load_from_file(&path)?,
        None => PlatformConfig::new("Monkey Demo"),
    };
    config.validate()?;
    Ok(config)
}

fn log_window(label: &str, window: &MacWindow) {
    let rect = window.rect();
    log::info!(
        "[{}] '{}' at ({}, {}) {}x{} aspect {:.3} mode {:?} visible={} minimized={} maximized={}",
        label,
        window.title(),
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        window.aspect_ratio(),
        window.window_mode(),
        window.is_visible(),
        window.is_minimized(),
        window.is_maximized(),
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init_with_level(&config.log_level);

    log::info!("Starting window demo");

    let app = MacApplication::from_config(&config);
    let window = MacApplication::make_window_from_config(&app, &config.window);

    {
        let mut window = window.borrow_mut();
        log_window("created", &window);

        let extensions: Vec<_> = window
            .required_instance_extensions()
            .iter()
            .map(|name| name.to_string_lossy())
            .collect();
        log::info!("Required instance extensions: {}", extensions.join(", "));

        // No native toolkit is attached in the demo
        if let Err(err) = window.create_vk_surface(&NoSurface) {
            log::warn!("Surface not created: {}", err);
        }

        window.reshape(200, 150, 1600, 900);
        log_window("reshaped", &window);

        let rect = window.rect();
        let (x, y) = (rect.x.saturating_add(10), rect.y.saturating_add(10));
        log::info!("Point ({}, {}) inside: {}", x, y, window.is_point_in_window(x, y));

        window.maximize();
        log_window("maximized", &window);
        window.restore();

        window.set_window_mode(WindowMode::WindowedFullscreen);
        log_window("fullscreen", &window);
        window.set_window_mode(WindowMode::Windowed);
        log_window("windowed", &window);

        window.minimize();
        log_window("minimized", &window);
        window.restore();

        window.set_text("Monkey Demo (done)");
        window.set_opacity(0.9);
        window.hide();
        log_window("hidden", &window);
    }

    MacApplication::destroy_all(&app);
    log::info!("Window demo completed successfully");
    Ok(())
}

/// Factory for runs without a Vulkan instance; never reached without handles
struct NoSurface;

impl SurfaceFactory for NoSurface {
    fn create_surface(&self, _handles: &NativeHandles) -> WindowResult<vk::SurfaceKHR> {
        Err(WindowError::NoNativeHandle)
    }
}
