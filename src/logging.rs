//! Logging abstraction for chemin
//!
//! Development-only diagnostics for authoring mistakes: registering callbacks
//! outside component setup, passing a bare future where a loader was
//! expected, and similar misconfigurations. All macros compile to no-ops
//! without `debug_assertions`, so release builds carry zero overhead.
//!
//! Warnings are routed through a replaceable sink. The default sink writes to
//! `eprintln!`; hosts embed their own sink with [`set_warn_handler`], and
//! tests capture warnings the same way.
//!
//! ## Example
//!
//! ```ignore
//! use chemin::warn_log;
//!
//! warn_log!("record {:?} is missing a component", path);
//! ```

use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Sink receiving formatted warning messages.
pub type WarnHandler = Box<dyn Fn(&str) + Send + Sync>;

static WARN_HANDLER: Lazy<RwLock<Option<WarnHandler>>> = Lazy::new(|| RwLock::new(None));

/// Replaces the warning sink.
///
/// The handler stays installed until [`reset_warn_handler`] is called, so
/// tests that install one should run serially.
pub fn set_warn_handler<F>(handler: F)
where
	F: Fn(&str) + Send + Sync + 'static,
{
	*WARN_HANDLER.write() = Some(Box::new(handler));
}

/// Restores the default `eprintln!` sink.
pub fn reset_warn_handler() {
	*WARN_HANDLER.write() = None;
}

/// Delivers a formatted message to the current sink.
///
/// Called by the `warn_log!` macro; not meant to be used directly.
#[doc(hidden)]
pub fn __emit_warning(message: &str) {
	let handler = WARN_HANDLER.read();
	match handler.as_ref() {
		Some(handler) => handler(message),
		None => eprintln!("[chemin warn]: {}", message),
	}
}

/// Logs a warning message (requires `debug_assertions`)
///
/// This macro is for surfacing authoring mistakes during development.
/// It compiles to a no-op in release builds.
///
/// # Arguments
///
/// Takes format arguments similar to `format!` or `println!`.
///
/// # Example
///
/// ```ignore
/// warn_log!("no active route record for slot {:?}", slot);
/// ```
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::logging::__emit_warning(&format!($($arg)*));
	}};
}

/// No-op warn_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;
	use std::sync::Arc;
	use std::sync::Mutex;

	#[test]
	#[serial(warn_sink)]
	fn test_warn_log_reaches_installed_handler() {
		let captured = Arc::new(Mutex::new(Vec::new()));
		set_warn_handler({
			let captured = Arc::clone(&captured);
			move |message| captured.lock().unwrap().push(message.to_string())
		});

		warn_log!("slot {:?} misconfigured", "default");

		reset_warn_handler();
		let messages = captured.lock().unwrap();
		assert_eq!(messages.len(), 1);
		assert_eq!(messages[0], "slot \"default\" misconfigured");
	}

	#[test]
	#[serial(warn_sink)]
	fn test_reset_warn_handler_detaches_sink() {
		let captured = Arc::new(Mutex::new(Vec::new()));
		set_warn_handler({
			let captured = Arc::clone(&captured);
			move |message| captured.lock().unwrap().push(message.to_string())
		});
		reset_warn_handler();

		warn_log!("dropped on the floor");

		assert!(captured.lock().unwrap().is_empty());
	}

	#[test]
	#[serial(warn_sink)]
	fn test_warn_log_without_format_args() {
		let captured = Arc::new(Mutex::new(Vec::new()));
		set_warn_handler({
			let captured = Arc::clone(&captured);
			move |message| captured.lock().unwrap().push(message.to_string())
		});

		warn_log!("plain message");

		reset_warn_handler();
		assert_eq!(captured.lock().unwrap().as_slice(), ["plain message"]);
	}
}
