// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Logging macros for convenient usage
//!
//! `log_info!("New conn", "addr" => "127.0.0.1:80")` builds the same entry
//! as `with_field("addr", "127.0.0.1:80")` and calls the same severity
//! method; the macros add no code path of their own. With the `location`
//! feature they also capture file, line and enclosing function.
//!
//! Prebuilt fields go after a `;`, which is how an OS error joins the
//! record:
//!
//! ```ignore
//! log_error!("Mem Fail"; Field::error(libc::ENOMEM), field!("size" => 4096u32));
//! log_error!("Mem Fail", ERROR_KEY => strerror(libc::ENOMEM), "size" => 4096u32);
//! ```

/// Name of the enclosing function
#[doc(hidden)]
#[macro_export]
macro_rules! __function {
	() => {{
		fn f() {}
		fn type_name_of<T>(_: T) -> &'static str {
			::core::any::type_name::<T>()
		}
		let name = type_name_of(f);
		name.strip_suffix("::f").unwrap_or(name)
	}};
}

#[doc(hidden)]
#[cfg(feature = "location")]
#[macro_export]
macro_rules! __location {
	() => {
		::core::option::Option::Some($crate::Location::new(file!(), line!(), $crate::__function!()))
	};
}

#[doc(hidden)]
#[cfg(not(feature = "location"))]
#[macro_export]
macro_rules! __location {
	() => {
		::core::option::Option::None::<$crate::Location<'static>>
	};
}

/// Main logging macro with support for structured fields
#[macro_export]
macro_rules! log {
	($severity:expr, $msg:expr $(,)?) => {{
		let location = $crate::__location!();
		$crate::Entry::new().log_located($severity, location.as_ref(), $msg)
	}};

	($severity:expr, $msg:expr, $($key:expr => $value:expr),+ $(,)?) => {{
		let location = $crate::__location!();
		$crate::Entry::from_fields([$($crate::Field::new($key, $value)),+]).log_located(
			$severity,
			location.as_ref(),
			$msg,
		)
	}};

	($severity:expr, $msg:expr; $($field:expr),+ $(,)?) => {{
		let location = $crate::__location!();
		$crate::Entry::from_fields([$($field),+]).log_located($severity, location.as_ref(), $msg)
	}};
}

/// Trace level logging
#[macro_export]
macro_rules! log_trace {
	($($arg:tt)+) => {
		$crate::log!($crate::Severity::Trace, $($arg)+)
	};
}

/// Debug level logging
#[macro_export]
macro_rules! log_debug {
	($($arg:tt)+) => {
		$crate::log!($crate::Severity::Debug, $($arg)+)
	};
}

/// Info level logging
#[macro_export]
macro_rules! log_info {
	($($arg:tt)+) => {
		$crate::log!($crate::Severity::Info, $($arg)+)
	};
}

/// Warning level logging
#[macro_export]
macro_rules! log_warn {
	($($arg:tt)+) => {
		$crate::log!($crate::Severity::Warn, $($arg)+)
	};
}

/// Error level logging
#[macro_export]
macro_rules! log_error {
	($($arg:tt)+) => {
		$crate::log!($crate::Severity::Error, $($arg)+)
	};
}

/// Fatal level logging; terminates the process after the backend call
#[macro_export]
macro_rules! log_fatal {
	($($arg:tt)+) => {
		$crate::log!($crate::Severity::Fatal, $($arg)+)
	};
}
