use refdeck::config::Config;
use refdeck::icons::IconTheme;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.icon_theme, IconTheme::Unicode);
    assert!(config.catalog.path.is_none());
    assert_eq!(config.theme.section_colors.len(), 5);
    assert!(!config.logging.enabled);
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Unknown color name should fail
    config.theme.section_colors = vec!["not-a-color".to_string()];
    assert!(config.validate().is_err());

    // Hex colors are accepted
    config.theme.section_colors = vec!["#304a5f".to_string(), "clay".to_string()];
    assert!(config.validate().is_ok());

    // A catalog path that doesn't exist should fail
    config.catalog.path = Some(std::path::PathBuf::from("/nonexistent/catalog.json"));
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("mouse_enabled = true"));
    assert!(toml_str.contains("icon_theme = \"Unicode\""));
    assert!(toml_str.contains("section_colors"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
icon_theme = "Ascii"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.icon_theme, IconTheme::Ascii);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert!(config.ui.mouse_enabled); // default value
    assert!(config.catalog.path.is_none()); // default value
    assert_eq!(config.theme.section_colors.len(), 5); // default value
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.mouse_enabled, default_config.ui.mouse_enabled);
    assert_eq!(config.ui.icon_theme, default_config.ui.icon_theme);
    assert_eq!(config.theme.section_colors, default_config.theme.section_colors);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("refdeck_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(temp_dir.exists());
    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Refdeck Configuration File"));
    assert!(content.contains("mouse_enabled = true"));

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}
