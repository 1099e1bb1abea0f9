// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! `tracing-subscriber` setup for logrus lines.
//!
//! ```no_run
//! use logrus_core::Severity;
//! use logrus_sub_tracing::TracingBuilder;
//!
//! TracingBuilder::new().level(Severity::Debug).color(true).init().unwrap();
//! logrus_core::with_field("port", 80).info("Listen on");
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod builder;
pub mod config;
mod error;
pub mod filter;
pub mod format;

pub use builder::{TracingBuilder, init_with};
pub use config::{Config, FormatStyle, Target};
pub use error::{Error, Result};
pub use format::LineFormat;
