//! Scenario: starting climenu
//!
//! Journey: a user launches climenu with missing, broken, and finally
//! working inputs, and tunes behavior through config files and env vars.

use crate::common::*;

fn args(v: &[String]) -> Vec<&str> {
    v.iter().map(String::as_str).collect()
}

/// SCENARIO: Missing inputs print help instead of starting a session
#[test]
fn scenario_missing_inputs_print_help() {
    let env = TestEnv::new();
    let menu = env.write_project_file("menu.json", MAIN_MENU_JSON);

    for cli in [vec![], vec!["--menu", menu.to_str().unwrap()]] {
        let result = env.run_with_input(&cli, "1\n");
        assert!(result.success, "stderr: {}", result.stderr);
        assert!(result.stdout.contains("Usage:"), "stdout: {}", result.stdout);
        assert!(result.stdout.contains("--actions <PATH>"));
        assert!(!result.stdout.contains(PROMPT));
    }
}

/// SCENARIO: A menu file that does not exist
#[test]
fn scenario_missing_menu_file() {
    let env = TestEnv::new();
    let actions = env.write_project_file("actions.toml", MAIN_ACTIONS_TOML);

    let result = env.run(&["-m", "nope.json", "-a", actions.to_str().unwrap()]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.starts_with("Error: cannot read menu nope.json"),
        "stderr: {}",
        result.stderr
    );
    assert!(result.stdout.is_empty());
}

/// SCENARIO: A document without `items` is rejected before any menu is drawn
#[test]
fn scenario_malformed_menu_document() {
    let env = TestEnv::new();
    let cli = env.with_fixtures(r#"{ "title": "Main" }"#, MAIN_ACTIONS_TOML);

    let result = env.run_with_input(&args(&cli), "B\n");

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("malformed menu document"), "stderr: {}", result.stderr);
    assert!(result.stderr.contains("items"), "stderr: {}", result.stderr);
    assert!(result.stdout.is_empty());
}

/// SCENARIO: Unknown file extensions are rejected
#[test]
fn scenario_unsupported_menu_format() {
    let env = TestEnv::new();
    let menu = env.write_project_file("menu.xml", "<menu/>");
    let actions = env.write_project_file("actions.toml", MAIN_ACTIONS_TOML);

    let result = env.run(&["-m", menu.to_str().unwrap(), "-a", actions.to_str().unwrap()]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("unsupported file format"), "stderr: {}", result.stderr);
}

/// SCENARIO: YAML menus with unknown keys still load, with a warning
#[test]
fn scenario_yaml_menu_with_unknown_key() {
    let env = TestEnv::new();
    let menu = env.write_project_file(
        "menu.yaml",
        "title: Yaml Menu\ntheme: dark\nitems:\n  - title: Only\n",
    );
    let actions = env.write_project_file("actions.toml", "[actions]\n");

    let result = env.run_with_input(
        &["-m", menu.to_str().unwrap(), "-a", actions.to_str().unwrap()],
        "B\n",
    );

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("\nYaml Menu\n\n1. Only\n"));
    assert!(result.stderr.contains("unknown key 'theme'"), "stderr: {}", result.stderr);
}

/// SCENARIO: Project config turns off the pause, env var turns it back on
#[cfg(unix)]
#[test]
fn scenario_pause_follows_config_then_env() {
    let env = TestEnv::new();
    let cli = env.with_fixtures(
        r#"{ "title": "Main", "items": [ { "title": "Hi", "action": "hi" } ] }"#,
        "[actions]\nhi = \"echo hi-there\"\n",
    );
    env.write_project_file(".climenu.toml", "[actions]\npause = false\n");

    let result = env.run_with_input(&args(&cli), "1\nB\n");
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(!result.stdout.contains("Press Enter to continue..."));

    let result = env.run_with_env(&args(&cli), "1\n\nB\n", &[("CLIMENU_PAUSE", "true")]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Press Enter to continue..."));
}

/// SCENARIO: An invalid env value warns and keeps the configured setting
#[test]
fn scenario_invalid_env_value_warns() {
    let env = TestEnv::new();
    let cli = env.with_fixtures(MAIN_MENU_JSON, MAIN_ACTIONS_TOML);

    let result = env.run_with_env(&args(&cli), "B\n", &[("CLIMENU_COLOR", "alwys")]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(
        result.stderr.contains("Did you mean 'always'?"),
        "stderr: {}",
        result.stderr
    );
}

/// SCENARIO: A broken user config is skipped
#[test]
fn scenario_broken_user_config_is_skipped() {
    let env = TestEnv::new();
    let cli = env.with_fixtures(MAIN_MENU_JSON, MAIN_ACTIONS_TOML);
    env.write_home_file(".config/climenu/config.toml", "[output\n");

    let result = env.run_with_input(&args(&cli), "B\n");

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("\nMain Menu\n"));
}

/// SCENARIO: -v and -vv raise the log level on stderr
#[test]
fn scenario_verbosity_flags_raise_log_level() {
    let env = TestEnv::new();
    let cli = env.with_fixtures(MAIN_MENU_JSON, MAIN_ACTIONS_TOML);

    let quiet = env.run_with_input(&args(&cli), "B\n");
    assert!(!quiet.stderr.contains("loaded actions"), "stderr: {}", quiet.stderr);
    assert!(!quiet.stderr.contains("enter menu"), "stderr: {}", quiet.stderr);

    let mut info_args = args(&cli);
    info_args.push("-v");
    let info = env.run_with_input(&info_args, "B\n");
    assert!(info.stderr.contains("loaded actions"), "stderr: {}", info.stderr);
    assert!(!info.stderr.contains("enter menu"), "stderr: {}", info.stderr);

    let mut debug_args = args(&cli);
    debug_args.push("-vv");
    let debug = env.run_with_input(&debug_args, "B\n");
    assert!(debug.stderr.contains("DEBUG"), "stderr: {}", debug.stderr);
    assert!(debug.stderr.contains("enter menu"), "stderr: {}", debug.stderr);

    // Logging never touches the menu output.
    assert_eq!(debug.stdout, quiet.stdout);
}

/// SCENARIO: CLIMENU_LOG takes precedence over -v
#[test]
fn scenario_climenu_log_overrides_verbosity() {
    let env = TestEnv::new();
    let cli = env.with_fixtures(MAIN_MENU_JSON, MAIN_ACTIONS_TOML);

    let result = env.run_with_env(&args(&cli), "B\n", &[("CLIMENU_LOG", "debug")]);
    assert!(result.stderr.contains("enter menu"), "stderr: {}", result.stderr);

    let mut verbose = args(&cli);
    verbose.push("-vv");
    let result = env.run_with_env(&verbose, "B\n", &[("CLIMENU_LOG", "error")]);
    assert!(!result.stderr.contains("enter menu"), "stderr: {}", result.stderr);
    assert!(result.success);
}
