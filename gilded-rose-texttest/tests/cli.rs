use std::io::Read;
use std::process::{Command, Output, Stdio};

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "gilded-rose-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn run_cli(args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_gilded-rose-texttest");
    Command::new(exe)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run cli")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn cli_default_run_matches_approved_two_days() {
    let output = run_cli(&[]);
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        include_str!("approved/default_two_days.txt")
    );
}

#[test]
fn cli_day_argument_counts_extra_days() {
    let output = run_cli(&["30"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), include_str!("approved/thirty_days.txt"));
}

#[test]
fn cli_zero_days_prints_only_day_zero() {
    let output = run_cli(&["0"]);
    assert!(output.status.success());
    let text = stdout_of(&output);
    assert!(text.contains("-------- day 0 --------"));
    assert!(!text.contains("-------- day 1 --------"));
}

#[test]
fn cli_negative_days_prints_banner_only() {
    let output = run_cli(&["-5"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "OMGHAI!\n");
}

#[test]
fn cli_huge_day_count_prints_before_finishing() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_gilded-rose-texttest"))
        .arg("5000000")
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn cli");
    let mut head = [0u8; 64];
    let read = child
        .stdout
        .take()
        .expect("piped stdout")
        .read_exact(&mut head);
    let _ = child.kill();
    let _ = child.wait();
    read.expect("first bytes of output");
    assert!(head.starts_with(b"OMGHAI!\n-------- day 0 --------\nname, sell_in, quality\n"));
}

#[test]
fn cli_rejects_non_integer_days() {
    let output = run_cli(&["two"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("two"));
}

#[test]
fn cli_reads_items_and_writes_json_report() {
    let items_path = temp_path("items.json");
    std::fs::write(
        &items_path,
        r#"{"items": [{"name": "Aged Brie", "sell_in": -1, "quality": 48}]}"#,
    )
    .expect("write items");
    let output_path = temp_path("report.json");

    let output = Command::new(env!("CARGO_BIN_EXE_gilded-rose-texttest"))
        .arg("2")
        .arg("--items")
        .arg(&items_path)
        .args(["--report", "json", "--output"])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let content = std::fs::read_to_string(output_path).expect("read output");
    let days: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let qualities: Vec<_> = days
        .as_array()
        .expect("array of days")
        .iter()
        .map(|day| day["items"][0]["quality"].as_i64().unwrap_or_default())
        .collect();
    assert_eq!(qualities, vec![48, 50, 50]);
}

#[test]
fn cli_reports_unreadable_item_file() {
    let missing = temp_path("missing.json");
    let output = run_cli(&["--items", missing.to_str().expect("utf-8 path")]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read item set"));
}

#[test]
fn cli_verbose_banner_goes_to_stderr() {
    let output = run_cli(&["--verbose"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        include_str!("approved/default_two_days.txt")
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Gilded Rose Texttest"));
}
