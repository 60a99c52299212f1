//! Scenario: navigating a menu session
//!
//! Journey: a user opens the main menu, runs an action, walks into a
//! submenu and back, mistypes a choice, and leaves.

use crate::common::*;

fn args(v: &[String]) -> Vec<&str> {
    v.iter().map(String::as_str).collect()
}

/// SCENARIO: Action, submenu round-trip, back out of the root
#[cfg(unix)]
#[test]
fn scenario_run_action_then_visit_submenu() {
    let env = TestEnv::new();
    let cli = env.with_fixtures(MAIN_MENU_JSON, MAIN_ACTIONS_TOML);

    let result = env.run_with_input(&args(&cli), "1\n2\n1\nb\nB\n");

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout.matches("hello-from-greet").count(), 1);
    assert_eq!(result.stdout.matches("building-now").count(), 1);
    assert_eq!(result.stdout.matches("\nTools Menu\n").count(), 2);
    // root, root after greet, tools, tools after build, root after back
    assert_eq!(result.stdout.matches(PROMPT).count(), 5);
}

/// SCENARIO: A shell action reads the line typed after the menu choice
#[cfg(unix)]
#[test]
fn scenario_action_reads_its_own_input_line() {
    let env = TestEnv::new();
    let cli = env.with_fixtures(ASK_MENU_JSON, ASK_ACTIONS_TOML);

    let result = env.run_with_input(&args(&cli), "1\nalice\nB\n");

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("got-[alice]"), "stdout: {}", result.stdout);
    assert!(!result.stdout.contains(INVALID_CHOICE), "stdout: {}", result.stdout);
    // root, root after the action
    assert_eq!(result.stdout.matches(PROMPT).count(), 2);
}

/// SCENARIO: The menu layout is drawn exactly as specified
#[test]
fn scenario_menu_layout() {
    let env = TestEnv::new();
    let cli = env.with_fixtures(MAIN_MENU_JSON, MAIN_ACTIONS_TOML);

    let result = env.run_with_input(&args(&cli), "B\n");

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(
        result.stdout,
        "\nMain Menu\n\n1. Greet\n2. Tools\n3. Coming soon\n\n\
         B. Back\nX. Exit\n\nEnter your choice: "
    );
}

/// SCENARIO: "X" deep inside the tree ends the program at once
#[test]
fn scenario_exit_from_submenu() {
    let env = TestEnv::new();
    let cli = env.with_fixtures(MAIN_MENU_JSON, MAIN_ACTIONS_TOML);

    let result = env.run_with_input(&args(&cli), "2\nx\nB\nB\n");

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.stdout.matches(PROMPT).count(), 2);
    assert!(result.stdout.ends_with(PROMPT));
}

/// SCENARIO: Typos are recovered from without leaving the menu
#[test]
fn scenario_invalid_choices_reprompt() {
    let env = TestEnv::new();
    let cli = env.with_fixtures(MAIN_MENU_JSON, MAIN_ACTIONS_TOML);

    let result = env.run_with_input(&args(&cli), "99\n\nzero\n\n0\n\nB\n");

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout.matches(INVALID_CHOICE).count(), 3);
    assert_eq!(result.stdout.matches("\nMain Menu\n").count(), 4);
}

/// SCENARIO: Closing stdin ends the session cleanly
#[test]
fn scenario_end_of_input_exits_cleanly() {
    let env = TestEnv::new();
    let cli = env.with_fixtures(MAIN_MENU_JSON, MAIN_ACTIONS_TOML);

    let result = env.run_with_input(&args(&cli), "3\n");

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout.matches(PROMPT).count(), 2);
}

/// SCENARIO: A failing shell command is reported but the menu keeps going
#[cfg(unix)]
#[test]
fn scenario_failing_command_is_not_fatal() {
    let env = TestEnv::new();
    let cli = env.with_fixtures(
        r#"{ "title": "Main", "items": [ { "title": "Fail", "action": "fail" } ] }"#,
        "[actions.fail]\ncommand = \"exit 3\"\npause = false\n",
    );

    let result = env.run_with_input(&args(&cli), "1\nB\n");

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Command exited with status 3"));
    assert_eq!(result.stdout.matches(PROMPT).count(), 2);
}

/// SCENARIO: Pausing actions wait for Enter before the menu returns
#[cfg(unix)]
#[test]
fn scenario_pause_waits_for_enter() {
    let env = TestEnv::new();
    let cli = env.with_fixtures(
        r#"{ "title": "Main", "items": [ { "title": "Hi", "action": "hi" } ] }"#,
        "[actions]\nhi = \"echo hi-there\"\n",
    );

    let result = env.run_with_input(&args(&cli), "1\n\nB\n");

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Press Enter to continue..."));
    // Enter was consumed by the pause, so "B" reaches the menu.
    assert_eq!(result.stdout.matches(PROMPT).count(), 2);
    assert!(!result.stdout.contains(INVALID_CHOICE));
}

/// SCENARIO: An action named in the menu but missing from the actions file
#[test]
fn scenario_unknown_action_aborts_with_error() {
    let env = TestEnv::new();
    let cli = env.with_fixtures(
        r#"{ "title": "Main", "items": [ { "title": "Ghost", "action": "ghost" } ] }"#,
        "[actions]\n",
    );

    let result = env.run_with_input(&args(&cli), "1\n");

    assert_eq!(result.exit_code, 1);
    assert!(
        result
            .stderr
            .contains("Error: action 'ghost' not found in the action registry"),
        "stderr: {}",
        result.stderr
    );
}
