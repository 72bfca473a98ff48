// StateStore tests: first run, save/load round trip, overwrite, corrupt files

mod common;

use common::samples;
use tailnet_prtg::delta::DeltaEngine;
use tailnet_prtg::error::SensorError;
use tailnet_prtg::models::*;
use tailnet_prtg::state_store::StateStore;
use tempfile::TempDir;

fn snapshot(ts: f64, values: &[(usize, f64)]) -> Snapshot {
    DeltaEngine::new(ChannelTable::default())
        .snapshot(ts, samples(values), None)
        .unwrap()
}

#[test]
fn load_missing_file_is_first_run() {
    let dir = TempDir::new().unwrap();
    let store = StateStore::new(dir.path().join("tailscale.json"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = StateStore::new(dir.path().join("tailscale.json"));
    let snap = snapshot(1_700_000_000.25, &[(0, 2.0), (3, 1234.5), (12, 99.0)]);

    store.save(&snap).unwrap();
    let loaded = store.load().unwrap().expect("snapshot saved");
    assert_eq!(loaded, snap);
}

#[test]
fn save_overwrites_previous_state() {
    let dir = TempDir::new().unwrap();
    let store = StateStore::new(dir.path().join("tailscale.json"));
    store.save(&snapshot(1.0, &[(0, 1.0)])).unwrap();
    store.save(&snapshot(2.0, &[(0, 7.0)])).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.timestamp, 2.0);
    assert_eq!(loaded.samples.value_of("tailscaled_advertised_routes"), Some(7.0));
    // No temp file left behind
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("state").join("tailscale.json");
    let store = StateStore::new(&path);
    store.save(&snapshot(1.0, &[])).unwrap();
    assert!(path.is_file());
}

#[test]
fn saved_file_uses_expected_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tailscale.json");
    StateStore::new(&path)
        .save(&snapshot(10.0, &[(0, 3.0)]))
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["timestamp"], 10.0);
    assert_eq!(json["samples"][0]["name"], "tailscaled_advertised_routes");
    assert_eq!(json["samples"][0]["value"], 3.0);
    let routes = &json["channels"][3];
    assert_eq!(routes["name"], "Advertised Routes");
    assert_eq!(routes["ctype"], "count");
    assert_eq!(routes["metrics"], serde_json::json!([0]));
    assert_eq!(routes["value"], 3);
    assert_eq!(routes["unit"], "Count");
    assert_eq!(routes["size"], "One");
    assert_eq!(routes["float"], 0);
    assert!(json["channels"][0].get("size").is_none());
}

#[test]
fn load_null_timestamp_is_first_run() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tailscale.json");
    std::fs::write(&path, r#"{"timestamp": null, "channels": [], "samples": []}"#).unwrap();
    assert!(StateStore::new(&path).load().unwrap().is_none());
}

#[test]
fn load_accepts_hand_written_state() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tailscale.json");
    std::fs::write(
        &path,
        r#"{
            "timestamp": 1700000000.5,
            "channels": [
                {"name": "Traffic In (Speed)", "ctype": "speed", "metrics": [3, 4, 5],
                 "value": 12.5, "unit": "SpeedNet", "float": 1},
                {"name": "Advertised Routes", "ctype": "count", "metrics": [0],
                 "value": 3, "unit": "Count", "size": "One", "float": 0}
            ],
            "samples": [{"name": "tailscaled_advertised_routes", "value": 3.0}]
        }"#,
    )
    .unwrap();

    let snap = StateStore::new(&path).load().unwrap().unwrap();
    assert_eq!(snap.timestamp, 1_700_000_000.5);
    assert_eq!(snap.channels.len(), 2);
    assert_eq!(snap.channels[0].value, ChannelValue::Float(12.5));
    assert_eq!(snap.channels[1].value, ChannelValue::Int(3));
    assert_eq!(snap.samples.value_of("tailscaled_advertised_routes"), Some(3.0));
}

#[test]
fn failed_save_removes_temp_file_and_keeps_target() {
    let dir = TempDir::new().unwrap();
    // A non-empty directory at the target path makes the rename fail.
    let path = dir.path().join("tailscale.json");
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep"), "x").unwrap();

    let err = StateStore::new(&path)
        .save(&snapshot(1.0, &[]))
        .unwrap_err();
    assert!(matches!(err, SensorError::StateIo { .. }));
    assert!(!dir.path().join("tailscale.json.tmp").exists());
    assert!(path.join("keep").is_file());
}

#[test]
fn encode_error_names_encoding_not_loading() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = SensorError::from(source);
    assert!(matches!(err, SensorError::Encode(_)));
    assert!(err.to_string().starts_with("encode JSON"));
}

#[test]
fn load_corrupt_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tailscale.json");
    std::fs::write(&path, "not json").unwrap();
    let err = StateStore::new(&path).load().unwrap_err();
    assert!(matches!(err, SensorError::StateFormat { .. }));
}
