//! Load a configuration file, activate, and adjust a realistic item table.

use std::fs;
use std::path::Path;

use easyammo::{
    config, is_color_converter_installed, Activation, ItemTable, LogColour, MemoryLogger,
    COLOR_CONVERTER_PLUGIN,
};
use serde_json::json;

const AMMO_PARENT: &str = "5485a8684bdc2da71d8b4567";

fn items() -> ItemTable {
    let raw = json!({
        "54009119af1c881c07000029": { "_id": "54009119af1c881c07000029", "_name": "Item", "_parent": "", "_props": {} },
        AMMO_PARENT: { "_id": AMMO_PARENT, "_name": "Ammo", "_parent": "5661632d4bdc2d903d8b456b", "_props": {} },
        "5656d7c34bdc2d9d198b4587": {
            "_id": "5656d7c34bdc2d9d198b4587", "_name": "patron_762x39_PS", "_parent": AMMO_PARENT,
            "_props": { "ammoType": "bullet", "PenetrationPower": 35, "BackgroundColor": "yellow", "Damage": 57 }
        },
        "560d5e524bdc2d25448b4571": {
            "_id": "560d5e524bdc2d25448b4571", "_name": "patron_12x70_buckshot_7mm", "_parent": AMMO_PARENT,
            "_props": { "ammoType": "buckshot", "PenetrationPower": 3, "BackgroundColor": "yellow" }
        },
        "5710c24ad2720bc3458b45a3": {
            "_id": "5710c24ad2720bc3458b45a3", "_name": "patron_40x46_M406", "_parent": AMMO_PARENT,
            "_props": { "ammoType": "grenade", "PenetrationPower": 40, "BackgroundColor": "red" }
        },
        "5996f6d686f77467977ba6cc": {
            "_id": "5996f6d686f77467977ba6cc", "_name": "shrapnel_F1", "_parent": AMMO_PARENT,
            "_props": { "ammoType": "bullet", "PenetrationPower": 8, "BackgroundColor": "red" }
        },
        "64b7af434b75259c590fa893": {
            "_id": "64b7af434b75259c590fa893", "_name": "patron_556x45_M855", "_parent": AMMO_PARENT,
            "_props": { "ammoType": "bullet", "BackgroundColor": "blue" }
        }
    });
    serde_json::from_value(raw).unwrap()
}

fn write_config(dir: &Path, high_second: &str) -> std::path::PathBuf {
    let path = dir.join("config.json");
    let doc = json!({
        "general": { "enabled": true, "debug": false, "useColorConverter": true },
        "penetration": [
            { "range": { "min": 0, "max": 20 }, "colour": { "high": "green", "low": "#336600" } },
            { "range": { "min": 21, "max": 40 }, "colour": { "high": high_second, "low": "#993300" } }
        ]
    });
    fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
    path
}

fn background(items: &ItemTable, id: &str) -> String {
    items[id].props.background_color.clone().unwrap_or_default()
}

#[test]
fn gradient_colours_with_converter_installed() {
    let dir = tempfile::tempdir().unwrap();
    let plugins = dir.path().join("plugins");
    fs::create_dir_all(&plugins).unwrap();
    fs::write(plugins.join(COLOR_CONVERTER_PLUGIN), b"").unwrap();

    let logger = MemoryLogger::new();
    let activation = Activation::prepare(
        config::load(&write_config(dir.path(), "#336600")),
        || is_color_converter_installed(&plugins),
        &logger,
    )
    .expect("activation");

    let mut items = items();
    let result = activation.apply(&mut items, &logger);

    assert_eq!(result.changed, 2);
    assert_eq!(result.failed, 0);
    // 35 -> amt 14/19 between #336600 and #993300
    assert_eq!(background(&items, "5656d7c34bdc2d9d198b4587"), "#7E4000");
    // 3 -> amt 3/20 between green (#336600) and #336600
    assert_eq!(background(&items, "560d5e524bdc2d25448b4571"), "#336600");
    assert_eq!(background(&items, "5710c24ad2720bc3458b45a3"), "red");
    assert_eq!(background(&items, "5996f6d686f77467977ba6cc"), "red");
    assert_eq!(background(&items, "64b7af434b75259c590fa893"), "blue");

    // Untyped props survive the pass
    assert_eq!(
        items["5656d7c34bdc2d9d198b4587"].props.extra.get("Damage"),
        Some(&json!(57))
    );
}

#[test]
fn hex_start_without_converter_leaves_item_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let logger = MemoryLogger::new();
    let activation = Activation::prepare(
        config::load(&write_config(dir.path(), "#336600")),
        || is_color_converter_installed(&dir.path().join("missing")),
        &logger,
    )
    .expect("activation");

    let mut items = items();
    let result = activation.apply(&mut items, &logger);

    assert_eq!(result.changed, 1);
    assert_eq!(result.failed, 1);
    assert_eq!(result.errors[0].0, "5656d7c34bdc2d9d198b4587");
    assert_eq!(background(&items, "5656d7c34bdc2d9d198b4587"), "yellow");
    assert_eq!(background(&items, "560d5e524bdc2d25448b4571"), "green");

    let errors = logger.messages(LogColour::Red);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("#336600"));
}

#[test]
fn vanilla_start_without_converter() {
    let dir = tempfile::tempdir().unwrap();
    let logger = MemoryLogger::new();
    let activation = Activation::prepare(
        config::load(&write_config(dir.path(), "violet")),
        || false,
        &logger,
    )
    .expect("activation");

    let mut items = items();
    let result = activation.apply(&mut items, &logger);

    assert_eq!(result.changed, 2);
    assert_eq!(background(&items, "5656d7c34bdc2d9d198b4587"), "violet");
}

#[test]
fn invalid_config_is_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "penetration": [ { "minPenetration": 10, "backgroundColor": "red" },
                              { "minPenetration": 20, "backgroundColor": "blue" } ] }"#,
    )
    .unwrap();

    let logger = MemoryLogger::new();
    let activation = Activation::prepare(config::load(&path), || true, &logger);

    assert!(activation.is_none());
    let errors = logger.messages(LogColour::Red);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("descending"));
}
