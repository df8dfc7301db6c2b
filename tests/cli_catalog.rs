mod common;

use common::TestEnv;

#[test]
fn presets_lists_all_builtins() {
    let env = TestEnv::new();
    let result = env.run(&["presets"]);

    assert!(result.success);
    assert!(result.stdout.contains("Presets (8)"));
    for name in ["smarthome_desk", "workshop_tools", "medical_sealed", "mvp", "bathroom_meds"] {
        assert!(result.stdout.contains(name), "missing {name}");
    }
}

#[test]
fn presets_json_carries_configs() {
    let env = TestEnv::new();
    let result = env.run(&["presets", "--json"]);

    let presets = result.event("data")["presets"].as_array().unwrap().clone();
    assert_eq!(presets.len(), 8);
    assert!(presets.iter().all(|p| p["config"]["width"].is_number()));
}

#[test]
fn options_json_lists_every_option_set() {
    let env = TestEnv::new();
    let result = env.run(&["--json", "options"]);

    let options = result.event("data")["options"].as_array().unwrap().clone();
    assert_eq!(options.len(), 28);
    let material = options.iter().find(|o| o["name"] == "material").unwrap();
    assert_eq!(material["values"], serde_json::json!(["hyper_pla", "petg", "abs"]));
}

#[test]
fn options_text_shows_wire_names() {
    let env = TestEnv::new();
    let result = env.run(&["options"]);

    assert!(result.success);
    assert!(result.stdout.contains("hyper_pla"));
    assert!(result.stdout.contains("grid_2x3"));
}

#[test]
fn version_text() {
    let env = TestEnv::new();
    let result = env.run(&["version"]);

    assert!(result.success);
    assert!(result
        .stdout
        .contains(&format!("stowbox v{}", env!("CARGO_PKG_VERSION"))));
    assert!(result.stdout.contains("Config format:  1.0"));
}

#[test]
fn version_json() {
    let env = TestEnv::new();
    let result = env.run(&["version", "--json"]);

    let data = result.event("data");
    assert_eq!(data["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(data["format_version"], "1.0");
    assert_eq!(data["report_version"], 1);
}

#[test]
fn verbose_logging_goes_to_stderr() {
    let env = TestEnv::new();
    let result = env.run(&["-vv", "--json", "derive"]);

    assert!(result.success);
    // stdout stays pure NDJSON
    assert!(result.events().len() >= 3);
    assert!(result.stderr.contains("resolved box"), "stderr:\n{}", result.stderr);
}

#[test]
fn log_colors_follow_settings_file() {
    let env = TestEnv::new();
    env.write("stowbox.toml", "[output]\ncolor = \"always\"\n");

    let colored = env.run(&["-vv", "--json", "derive"]);
    assert!(colored.success);
    assert!(colored.stderr.contains("resolved box"));
    assert!(colored.stderr.contains('\u{1b}'), "stderr:\n{}", colored.stderr);

    let plain = env.run(&["-vv", "--json", "--color", "never", "derive"]);
    assert!(plain.stderr.contains("resolved box"));
    assert!(!plain.stderr.contains('\u{1b}'), "stderr:\n{}", plain.stderr);
}
