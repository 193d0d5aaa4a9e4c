use finance_core::config::{Config, ConfigManager};
use tempfile::TempDir;

#[test]
fn missing_file_falls_back_to_defaults() {
    let temp = TempDir::new().expect("create temp dir");
    let manager =
        ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("create config manager");

    let config = manager.load().expect("load defaults");
    assert_eq!(config, Config::default());
    assert!(!manager.path().exists());
}

#[test]
fn save_then_load_round_trips() {
    let temp = TempDir::new().expect("create temp dir");
    let manager =
        ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("create config manager");

    let config = Config {
        plain_output: true,
        projection_months: 6,
    };
    manager.save(&config).expect("save config");
    assert!(manager.path().exists());

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded, config);
}

#[test]
fn save_leaves_no_temporary_file_behind() {
    let temp = TempDir::new().expect("create temp dir");
    let manager =
        ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("create config manager");
    manager.save(&Config::default()).expect("save config");

    let entries: Vec<_> = std::fs::read_dir(temp.path())
        .expect("read temp dir")
        .map(|entry| entry.expect("dir entry").file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("config.json")]);
}
