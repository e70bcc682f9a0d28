mod common;

use common::*;

#[test]
fn dry_run_print_succeeds_and_records_history() {
    let env = TestEnv::new();
    env.write_config(r#"{"default_printer": "Office"}"#);
    let doc = env.doc("invoice.txt", b"total: 42");

    let result = env.run(&["--dry-run", "--json", "print", &path_arg(&doc)]);

    assert!(result.success, "stderr: {}", result.stderr);
    let events = result.json_lines();
    assert_eq!(events[0]["event"], "print_started");
    assert_eq!(events[0]["printer"], "Office");
    assert_eq!(events[1]["event"], "print_completed");
    assert_eq!(events[1]["success"], true);

    let history = env.run(&["--json", "history"]).json_lines();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["file_name"], "invoice.txt");
    assert_eq!(history[0]["success"], true);
}

#[test]
fn missing_file_fails_with_error_event() {
    let env = TestEnv::new();
    let missing = env.docs.path().join("missing.txt");

    let result = env.run(&["--dry-run", "--json", "print", &path_arg(&missing)]);

    assert!(!result.success);
    let events = result.json_lines();
    let error = events
        .iter()
        .find(|e| e["event"] == "print_error")
        .expect("print_error event");
    assert!(error["message"].as_str().unwrap().contains("file not found"));

    let history = env.run(&["--json", "history"]).json_lines();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["success"], false);
    assert!(history[0]["error"].as_str().unwrap().contains("missing.txt"));
}

#[test]
fn explicit_printer_is_honoured_in_dry_run() {
    let env = TestEnv::new();
    let doc = env.doc("label.png", b"png");

    let result = env.run(&[
        "--dry-run",
        "--json",
        "print",
        &path_arg(&doc),
        "--printer",
        "Zebra",
        "-n",
        "2",
    ]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.json_lines()[0]["printer"], "Zebra");
}

#[test]
fn history_clear_empties_log() {
    let env = TestEnv::new();
    let doc = env.doc("a.txt", b"x");
    assert!(env.run(&["--dry-run", "print", &path_arg(&doc)]).success);

    assert!(env.run(&["history", "--clear"]).success);

    assert!(env.run(&["--json", "history"]).json_lines().is_empty());
    let text = env.run(&["history"]);
    assert!(text.stdout.contains("No print history."));
}

#[test]
fn history_limit_from_config_caps_log() {
    let env = TestEnv::new();
    env.write_config(r#"{"history_limit": 2}"#);
    for name in ["1.txt", "2.txt", "3.txt"] {
        let doc = env.doc(name, b"x");
        assert!(env.run(&["--dry-run", "print", &path_arg(&doc)]).success);
    }

    let names: Vec<_> = env
        .run(&["--json", "history"])
        .json_lines()
        .iter()
        .map(|r| r["file_name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["2.txt", "3.txt"]);
}
