// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use logrus_core::{Severity, backend::tracing::severity_of};
use tracing::Metadata;
use tracing_subscriber::filter::{FilterFn, filter_fn};

/// Whether a callsite passes a `min` threshold.
///
/// Fatal events sit above error, so `min = Fatal` keeps fatal records
/// only and `min = Off` rejects everything.
pub fn enabled(metadata: &Metadata<'_>, min: Severity) -> bool {
	min != Severity::Off && severity_of(metadata) >= min
}

/// Per-layer filter passing callsites at or above `min`
pub fn severity_filter(min: Severity) -> FilterFn<impl Fn(&Metadata<'_>) -> bool> {
	filter_fn(move |metadata| enabled(metadata, min))
}
