// crates/pal16-cli/tests/cli_match.rs

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pal16-cli"))
        .args(args)
        .output()
        .expect("run pal16-cli")
}

fn run_ok(args: &[&str]) -> String {
    let out = run(args);
    assert!(
        out.status.success(),
        "command failed: args={:?} status={:?}\nstdout:\n{}\nstderr:\n{}",
        args,
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).expect("utf8 stdout")
}

#[test]
fn match_prints_index() {
    assert_eq!(run_ok(&["match", "--color", "0,0,0,255"]).trim(), "0");
    assert_eq!(run_ok(&["match", "--color", "#ffffff"]).trim(), "15");
    assert_eq!(run_ok(&["match", "--color", "3,2,4"]).trim(), "0");
    assert_eq!(run_ok(&["match", "--color", "200,200,0,0"]).trim(), "0");
    assert_eq!(run_ok(&["match", "--color", "128,128,128"]).trim(), "7");
}

#[test]
fn match_explain_names_rule() {
    let out = run_ok(&["match", "--color", "128,128,128", "--explain"]);
    assert!(out.contains("rule     = nearest"), "{out}");
    assert!(out.contains("entry    = #aaaaaa"), "{out}");
    assert!(out.contains("distance = "), "{out}");

    let out = run_ok(&["match", "--color", "#0a0", "--explain"]);
    assert!(out.contains("rule     = fuzzy"), "{out}");
    assert!(!out.contains("distance"), "{out}");
}

#[test]
fn out_of_range_rejected_unless_clamped() {
    let out = run(&["match", "--color", "300,0,0"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("red must be in 0..=255"), "{stderr}");

    // clamps to (255,0,0); dark red (4) is nearer than red (12) under the weighting
    assert_eq!(run_ok(&["match", "--color", "300,0,-5", "--clamp"]).trim(), "4");
}

#[test]
fn palette_lists_sixteen_entries() {
    let out = run_ok(&["palette"]);
    let lines: Vec<&str> = out.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines.len(), 16);
    assert_eq!(lines[0], "{\"index\":0,\"rgb\":[0,0,0]}");
    assert_eq!(lines[6], "{\"index\":6,\"rgb\":[255,170,0]}");
    assert_eq!(lines[15], "{\"index\":15,\"rgb\":[255,255,255]}");
}
