mod common;

use common::TestEnv;

#[test]
fn default_box_passes() {
    let env = TestEnv::new();
    let result = env.run(&["check"]);

    assert!(result.success, "stdout:\n{}", result.stdout);
    assert!(result.stdout.starts_with("[CHECK] Box Check\nSource: flags\n"));
    assert!(result.stdout.contains("  [OK] wall_thickness - 2.0 mm"));
    assert!(result.stdout.contains("[OK] All checks passed"));
    assert!(!result.stdout.contains("[FAIL]"));
}

#[test]
fn tiny_box_fails_with_exit_code_one() {
    let env = TestEnv::new();
    let result = env.run(&["check", "--width", "54", "--depth", "100", "--height", "20"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("[FAIL] inner_width"));
    assert!(result.stdout.contains("[FAIL] drawer_depth"));
    assert!(result.stdout.contains("Check FAILED"));
    assert!(result.stdout.contains("[>] Next:"));
}

#[test]
fn warnings_pass_unless_strict() {
    let env = TestEnv::new();

    let relaxed = env.run(&["check", "--sealed"]);
    assert!(relaxed.success, "stdout:\n{}", relaxed.stdout);
    assert!(relaxed.stdout.contains("[WARN] config - Sealed version recommended with PETG"));
    assert!(relaxed.stdout.contains("Check passed with warnings"));

    let strict = env.run(&["check", "--sealed", "--strict-warnings"]);
    assert_eq!(strict.exit_code, 1);
    assert!(strict.stdout.contains("Strict: failing on warnings"));
    assert!(strict.stdout.contains("Check FAILED"));
}

#[test]
fn sealed_petg_box_is_clean() {
    let env = TestEnv::new();
    let result = env.run(&["check", "--sealed", "--material", "petg", "--strict-warnings"]);

    assert!(result.success, "stdout:\n{}", result.stdout);
}

#[test]
fn json_streams_check_events() {
    let env = TestEnv::new();
    let result = env.run(&["--json", "check", "--width", "54", "--depth", "100", "--height", "20"]);

    assert_eq!(result.exit_code, 1);
    let events = result.events();
    assert_eq!(events[0]["event"], "start");

    let checks: Vec<_> = events.iter().filter(|e| e["event"] == "check").collect();
    assert!(checks.len() >= 3);
    assert_eq!(checks[0]["name"], "wall_thickness");
    assert_eq!(checks[0]["status"], "pass");
    assert!(checks.iter().any(|e| e["status"] == "error"));

    let totals = result.event("data");
    assert_eq!(totals["errors"], 2);
    assert_eq!(totals["success"], false);

    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["success"], false);
}

#[test]
fn saved_config_with_unknown_key_reports_document_warning() {
    let env = TestEnv::new();
    env.write("configs/typo.yaml", "dimensions:\n  widht: 120\n");

    let result = env.run(&["check", "--config", "typo"]);
    assert!(result.success, "stdout:\n{}", result.stdout);
    assert!(result.stdout.contains("Source: config typo"));
    assert!(result.stdout.contains("[WARN] document - unknown key"));
}

#[test]
fn github_actions_gets_annotations() {
    let env = TestEnv::new();
    let result = env.run_with_env(
        &["check", "--width", "54", "--depth", "100", "--height", "20"],
        &[("CI", "true"), ("GITHUB_ACTIONS", "true")],
    );

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("::error title=stowbox::inner_width: "));
    assert!(result.stdout.contains("::warning title=stowbox::config: "));
}
