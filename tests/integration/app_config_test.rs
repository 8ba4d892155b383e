//! Loading a complete app directory.

mod helpers;

use tcex::app_config::{InstallJson, LayoutJson, ParamFilter, TcexJson};

#[test]
fn test_app_directory_is_consistent() {
    let dir = tempfile::tempdir().unwrap();
    helpers::write_app(dir.path());

    let install = InstallJson::load(dir.path().join("install.json")).unwrap();
    let tcex = TcexJson::load(dir.path().join("tcex.json")).unwrap();
    let layout = LayoutJson::load(dir.path().join("layout.json")).unwrap();

    assert_eq!(install.app_prefix(), "TCPB_-_");
    assert!(install.app_id.is_some());
    assert!(tcex.warnings().is_empty());
    for name in layout.param_names() {
        assert!(install.get_param(name).is_some(), "{name} missing from install.json");
    }
    for output in layout.outputs_map().keys() {
        assert!(install.playbook_outputs().contains_key(output));
    }

    let required = install.filter_params(&ParamFilter {
        required: Some(true),
        ..Default::default()
    });
    assert_eq!(required.len(), 2);
}

#[test]
fn test_short_display_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    helpers::write_app(dir.path());
    let path = dir.path().join("install.json");
    let mut raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    raw["displayName"] = "ab".into();
    std::fs::write(&path, raw.to_string()).unwrap();

    let err = InstallJson::load(&path).unwrap_err();
    assert!(err.is_validation());
}
