// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crossbeam_channel::{Receiver, unbounded};
use logrus::{Field, Severity, backend::mock::with_mock_backend, fields, log_info};

fn lines(receiver: &Receiver<logrus::backend::mock::Captured>) -> Vec<(Severity, String)> {
	receiver.try_iter().map(|captured| (captured.severity, captured.line)).collect()
}

#[test]
fn test_plain_messages() {
	let (sender, receiver) = unbounded();

	with_mock_backend(sender, || {
		logrus::info("hello world!");
		logrus::warn("hello 2024");
		logrus::debug("2023, bye!");
	});

	assert_eq!(
		lines(&receiver),
		vec![
			(Severity::Info, "msg='hello world!'".to_string()),
			(Severity::Warn, "msg='hello 2024'".to_string()),
			(Severity::Debug, "msg='2023, bye!'".to_string()),
		]
	);
}

#[test]
fn test_single_field_types() {
	let (sender, receiver) = unbounded();

	with_mock_backend(sender, || {
		logrus::with_field("key1", "xyz").info("Test c str");
		logrus::with_field("key2", String::from("std::string")).info("Test std::string");
		logrus::with_field("key3", 1).info("Test int");
		logrus::with_field("key4", 6.25).info("Test double");
	});

	let got: Vec<String> = lines(&receiver).into_iter().map(|(_, line)| line).collect();
	assert_eq!(
		got,
		vec![
			"msg='Test c str' key1='xyz'",
			"msg='Test std::string' key2='std::string'",
			"msg='Test int' key3='1'",
			"msg='Test double' key4='6.25'",
		]
	);
}

#[test]
fn test_chained_and_batched_fields() {
	let (sender, receiver) = unbounded();

	with_mock_backend(sender, || {
		logrus::with_field("ip", "127.0.0.1").with_field("port", 80).info("with_fieldx2");
		logrus::with_fields([Field::new("ip", "127.0.0.1"), Field::new("port", 80)]).info("with_fields");
		logrus::with_fields(fields!["ip" => "127.0.0.1", "port" => 80])
			.with_field("proto", "tcp")
			.info("with_fields+with_field");
	});

	let got: Vec<String> = lines(&receiver).into_iter().map(|(_, line)| line).collect();
	assert_eq!(
		got,
		vec![
			"msg='with_fieldx2' ip='127.0.0.1' port='80'",
			"msg='with_fields' ip='127.0.0.1' port='80'",
			"msg='with_fields+with_field' ip='127.0.0.1' port='80' proto='tcp'",
		]
	);
}

#[test]
fn test_shared_base_entry() {
	let (sender, receiver) = unbounded();

	with_mock_backend(sender, || {
		let base = logrus::with_field("task_id", 1);
		base.with_fields([Field::new("ip", "127.0.0.1"), Field::new("port", 80)]).info("Listen on");
		base.with_field("path", "xx.sock").info("Listen on");
		base.info("unchanged");
	});

	let got: Vec<String> = lines(&receiver).into_iter().map(|(_, line)| line).collect();
	assert_eq!(
		got,
		vec![
			"msg='Listen on' task_id='1' ip='127.0.0.1' port='80'",
			"msg='Listen on' task_id='1' path='xx.sock'",
			"msg='unchanged' task_id='1'",
		]
	);
}

#[test]
fn test_macros() {
	let (sender, receiver) = unbounded();

	with_mock_backend(sender, || {
		log_info!("Task done");
		log_info!("New conn", "addr" => "127.0.0.1:80");
		log_info!("Updated version", "from" => "1.6.1", "to" => "2.0.0", "task_id" => 2);
		logrus::log_error!("Mem Fail", logrus::ERROR_KEY => logrus::strerror(12));
		logrus::log_error!("Mem Fail"; Field::error(12), logrus::field!("size" => 4096u32));
	});

	let mem_fail = format!("msg='Mem Fail' error='{}'", logrus::strerror(12));

	assert_eq!(
		lines(&receiver),
		vec![
			(Severity::Info, "msg='Task done'".to_string()),
			(Severity::Info, "msg='New conn' addr='127.0.0.1:80'".to_string()),
			(Severity::Info, "msg='Updated version' from='1.6.1' to='2.0.0' task_id='2'".to_string()),
			(Severity::Error, mem_fail.clone()),
			(Severity::Error, format!("{mem_fail} size='4096'")),
		]
	);
}

#[test]
fn test_with_error_matches_strerror() {
	let (sender, receiver) = unbounded();
	let errnum = 12;

	with_mock_backend(sender, || logrus::with_error(errnum).error("Mem Fail"));

	let (severity, line) = lines(&receiver).remove(0);
	assert_eq!(severity, Severity::Error);
	assert_eq!(line, format!("msg='Mem Fail' error='{}'", logrus::strerror(errnum)));
}
