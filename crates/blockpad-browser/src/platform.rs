//! Platform detection for keyboard conventions.
//!
//! Shortcut labels read "⌘ + B" on macOS and "Ctrl + B" everywhere else.

use std::sync::OnceLock;

use blockpad_core::PlatformHint;

/// Cached platform detection results.
#[derive(Debug, Clone, Default)]
pub struct Platform {
    pub mac: bool,
}

impl Platform {
    /// Resolve a configured hint against what was detected.
    pub fn is_mac(&self, hint: PlatformHint) -> bool {
        hint.is_mac(self.mac)
    }
}

static PLATFORM: OnceLock<Platform> = OnceLock::new();

/// Get cached platform info. Detection runs once on first call.
pub fn platform() -> &'static Platform {
    PLATFORM.get_or_init(detect_platform)
}

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
fn detect_platform() -> Platform {
    let Some(window) = web_sys::window() else {
        return Platform::default();
    };

    let navigator = window.navigator();
    let user_agent = navigator.user_agent().unwrap_or_default().to_lowercase();
    let platform_str = navigator.platform().unwrap_or_default().to_lowercase();

    Platform::from_strings(&user_agent, &platform_str)
}

#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
fn detect_platform() -> Platform {
    Platform::default()
}

impl Platform {
    /// Classify from lowercased `navigator.userAgent` and `navigator.platform`.
    ///
    /// An iOS user agent wins over a Mac platform string.
    pub fn from_strings(user_agent: &str, platform_str: &str) -> Self {
        let ios = user_agent.contains("iphone")
            || user_agent.contains("ipad")
            || user_agent.contains("ipod");
        Self {
            mac: platform_str.contains("mac") && !ios,
        }
    }
}
