// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

use std::{env, io, process};

use logrus::{Field, FormatStyle, Severity, TracingBuilder, field, log_error, log_fatal, log_info, subscriber::init_with};

fn logger_configuration(tracing: TracingBuilder) -> TracingBuilder {
	tracing.style(FormatStyle::Timeline).color(true).level(Severity::Debug)
}

fn main() {
	if let Err(err) = init_with(logger_configuration) {
		eprintln!("playground: {err}");
		process::exit(2);
	}

	logrus::info("hello world!");
	logrus::warn("hello 2024");
	logrus::debug("2023, bye!");

	logrus::with_field("key1", "xyz").info("Test c str");
	logrus::with_field("key2", String::from("std::string")).info("Test std::string");
	logrus::with_field("key3", 1).info("Test int");
	logrus::with_field("key4", 6.25).info("Test double");

	logrus::with_field("ip", "127.0.0.1").with_field("port", 80).info("with_fieldx2");
	logrus::with_fields([Field::new("ip", "127.0.0.1"), Field::new("port", 80)]).info("with_fields");
	logrus::with_fields([Field::new("ip", "127.0.0.1"), Field::new("port", 80)])
		.with_field("proto", "tcp")
		.info("with_fields+with_field");

	let l = logrus::with_field("task_id", 1);
	l.with_fields([Field::new("ip", "127.0.0.1"), Field::new("port", 80)]).info("Listen on");
	l.with_field("path", "xx.sock").info("Listen on");

	log_info!("Task done");
	log_info!("New conn", "addr" => "127.0.0.1:80");
	log_info!("Updated version", "from" => "1.6.1", "to" => "2.0.0", "task_id" => 2);

	logrus::with_field("ip", "127.0.0.1")
		.with_io_error(&io::Error::from_raw_os_error(12))
		.error("Mem Fail");
	log_error!("Mem Fail"; Field::error(12), field!("size" => 4096u32));

	if env::args().any(|arg| arg == "--fatal") {
		log_fatal!("Test Fatal", "reason" => "requested");
	}
}
