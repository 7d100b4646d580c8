//! Logging utilities with colored output.
//!
//! Provides the `log!` macro for formatted terminal output with colored
//! prefixes, and a global verbose flag gating the `debug!` macro.
//!
//! # Example
//!
//! ```ignore
//! log!("config"; "loaded {} sidebar sections", count);
//! debug!("config"; "ignored fields: {:?}", ignored);
//! ```

use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macros
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when verbose mode is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix.
///
/// Writes to stderr so library consumers keep stdout for their own output.
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);

    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "error" => prefix.bright_red().bold().to_string(),
        "warning" => prefix.bright_yellow().bold().to_string(),
        "hint" => prefix.bright_cyan().bold().to_string(),
        _ => prefix.bright_blue().bold().to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flag_round_trip() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }

    #[test]
    fn test_colorize_prefix_contains_module() {
        // Colored or not, the module name must survive formatting
        for module in ["config", "error", "warning", "hint"] {
            assert!(colorize_prefix(module).contains(module));
        }
    }
}
