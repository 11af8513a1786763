use data_runtime::configs::tables::{TablesCfg, load_default};
use serial_test::serial;
use std::path::PathBuf;

#[test]
#[serial]
fn shipped_config_uses_embedded_tables() {
    let cfg = load_default().expect("load");
    assert_eq!(cfg, TablesCfg::default());
}

#[test]
#[serial]
fn env_overrides_table_paths() {
    unsafe {
        std::env::set_var("ARTIFACT_TABLE", "/tmp/artifact.json");
        std::env::set_var("SKIN_TABLE", "upgrades/skin_upgrade.json");
    }
    let cfg = load_default().expect("load");
    unsafe {
        std::env::remove_var("ARTIFACT_TABLE");
        std::env::remove_var("SKIN_TABLE");
    }
    assert_eq!(cfg.artifact_path, Some(PathBuf::from("/tmp/artifact.json")));
    assert_eq!(cfg.skin_path, Some(PathBuf::from("upgrades/skin_upgrade.json")));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = toml::from_str::<TablesCfg>("artifact = \"x.json\"").unwrap_err();
    assert!(err.to_string().contains("unknown field"), "{err}");
}
