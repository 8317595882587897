use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use vibe_config::{Config, Error};

const SAMPLE_CONFIG_TOML: &str = include_str!("fixtures/sample_config.toml");

static COUNTER: AtomicU64 = AtomicU64::new(0);

fn parse(raw: &str) -> Config {
	toml::from_str(raw).expect("Failed to parse sample config.")
}

fn sample_with<F>(mutate: F) -> String
where
	F: FnOnce(&mut toml::Table),
{
	let mut value: Value =
		toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let root = value.as_table_mut().expect("Sample config must be a table.");

	mutate(root);

	toml::to_string(&value).expect("Failed to render sample config.")
}

fn write_temp_config(raw: &str) -> PathBuf {
	let stamp = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System clock before epoch.")
		.as_nanos();
	let id = COUNTER.fetch_add(1, Ordering::Relaxed);
	let path = env::temp_dir().join(format!("vibe_config_test_{stamp}_{id}.toml"));

	fs::write(&path, raw).expect("Failed to write temp config.");

	path
}

#[test]
fn sample_config_passes_validation() {
	let cfg = parse(SAMPLE_CONFIG_TOML);

	vibe_config::validate(&cfg).expect("Sample config must validate.");
	assert_eq!(cfg.engine.top_k, 3);
	assert_eq!(cfg.provider.dimensions, 1536);
	assert_eq!(cfg.thresholds.fallback, 0.35);
	assert_eq!(cfg.thresholds.good_hit, 0.70);
}

#[test]
fn defaults_match_reference_thresholds() {
	let cfg = Config::default();

	vibe_config::validate(&cfg).expect("Default config must validate.");
	assert_eq!(cfg.thresholds.fallback, 0.35);
	assert_eq!(cfg.thresholds.good_hit, 0.70);
	assert_eq!(cfg.engine.top_k, 3);
	assert!(cfg.provider.api_key.is_none());
}

#[test]
fn missing_sections_fall_back_to_defaults() {
	let cfg = parse("[engine]\ntop_k = 5\n");

	vibe_config::validate(&cfg).expect("Partial config must validate.");
	assert_eq!(cfg.engine.top_k, 5);
	assert_eq!(cfg.provider.dimensions, 1536);
}

#[test]
fn rejects_zero_top_k() {
	let raw = sample_with(|root| {
		let engine = root.get_mut("engine").and_then(Value::as_table_mut).unwrap();

		engine.insert("top_k".to_string(), Value::Integer(0));
	});
	let err = vibe_config::validate(&parse(&raw)).unwrap_err();

	assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn rejects_zero_dimensions() {
	let raw = sample_with(|root| {
		let provider = root.get_mut("provider").and_then(Value::as_table_mut).unwrap();

		provider.insert("dimensions".to_string(), Value::Integer(0));
	});

	assert!(vibe_config::validate(&parse(&raw)).is_err());
}

#[test]
fn rejects_inverted_thresholds() {
	let raw = sample_with(|root| {
		let thresholds = root.get_mut("thresholds").and_then(Value::as_table_mut).unwrap();

		thresholds.insert("fallback".to_string(), Value::Float(0.9));
	});

	assert!(vibe_config::validate(&parse(&raw)).is_err());
}

#[test]
fn rejects_out_of_range_thresholds() {
	let raw = sample_with(|root| {
		let thresholds = root.get_mut("thresholds").and_then(Value::as_table_mut).unwrap();

		thresholds.insert("good_hit".to_string(), Value::Float(1.5));
	});

	assert!(vibe_config::validate(&parse(&raw)).is_err());
}

#[test]
fn load_normalizes_blank_api_key_to_none() {
	let raw = sample_with(|root| {
		let provider = root.get_mut("provider").and_then(Value::as_table_mut).unwrap();

		provider.insert("api_key".to_string(), Value::String("   ".to_string()));
	});
	let path = write_temp_config(&raw);
	let cfg = vibe_config::load(&path).expect("Config must load.");

	assert!(cfg.provider.api_key.is_none());

	let _ = fs::remove_file(&path);
}

#[test]
fn load_reports_missing_file() {
	let path = env::temp_dir().join("vibe_config_test_does_not_exist.toml");
	let err = vibe_config::load(&path).unwrap_err();

	assert!(matches!(err, Error::ReadConfig { .. }));
}
