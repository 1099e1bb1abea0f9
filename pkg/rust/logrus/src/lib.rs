// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Structured key/value logging.
//!
//! ```no_run
//! logrus::init_from_env().unwrap();
//!
//! logrus::info("hello world!");
//! logrus::with_field("ip", "127.0.0.1").with_field("port", 80).info("Listen on");
//! logrus::log_info!("Updated version", "from" => "1.6.1", "to" => "2.0.0", "task_id" => 2);
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use logrus_core::*;
#[cfg(feature = "subscriber")]
pub use logrus_sub_tracing as subscriber;
#[cfg(feature = "subscriber")]
pub use logrus_sub_tracing::{Config, FormatStyle, Target, TracingBuilder};

/// Install the console subscriber configured from `LOGRUS_*` variables
#[cfg(feature = "subscriber")]
pub fn init_from_env() -> logrus_sub_tracing::Result<()> {
	TracingBuilder::from_env()?.init()
}
