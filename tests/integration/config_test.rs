//! Integration tests for config loading

use ansiwrap::config::{Config, ConfigError};
use ansiwrap::wrap_with;

use crate::helpers::temp_config;

#[test]
fn full_config_drives_wrapping() {
    let (_dir, path) = temp_config(
        r#"
[wrap]
width = 6
breakpoints = ["/"]
hard_wrap = false
preserve_spaces = false
"#,
    );

    let config = Config::load(Some(&path)).unwrap();
    let options = config.wrap.to_options(config.wrap.width.unwrap_or(80));
    assert_eq!(wrap_with(options, "usr/local/bin"), "usr/\nlocal/\nbin");
}

#[test]
fn explicit_missing_path_is_an_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");

    let err = Config::load(Some(&missing)).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn unknown_fields_are_ignored() {
    let (_dir, path) = temp_config("[wrap]\nwidth = 12\ncolor = \"always\"\n\n[other]\nx = 1\n");
    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.wrap.width, Some(12));
}
