use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const QUOTES: &str = r#"[
  {"quote": "Breathe in. Breathe out.", "author": "Anon", "meaning": "Your breath is always here.", "tags": ["calm", "breath"]},
  {"quote": "This too shall pass.", "instruction": "Name one thing you can see.", "category": "Perspective"},
  {"quote": "Slow is smooth.", "tags": "focus, patience"}
]"#;

const FIRST_LINES: [&str; 3] = [
    "Breathe in. Breathe out.",
    "This too shall pass.",
    "Slow is smooth.",
];

/// Run calmquote in a specific directory
fn run_calmquote(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_calmquote"))
        .current_dir(dir)
        .env_remove("CALMQUOTE_QUOTES")
        .env_remove("CALMQUOTE_STATE_DIR")
        .env_remove("CALMQUOTE_SITE_NAME")
        .env_remove("CALMQUOTE_SITE_URL")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute calmquote command")
}

/// Helper to get stdout as string
fn stdout_str(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Helper to get stderr as string
fn stderr_str(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// First line of a successful command's output
fn first_line(output: &std::process::Output) -> String {
    assert!(
        output.status.success(),
        "command should succeed: {}",
        stderr_str(output)
    );
    stdout_str(output).lines().next().unwrap_or_default().to_string()
}

fn setup_quotes(dir: &Path) {
    fs::write(dir.join("quotes.json"), QUOTES).unwrap();
}

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_missing_quotes_file_shows_placeholder() {
    let dir = tempdir().unwrap();

    let output = run_calmquote(dir.path(), &["next"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_str(&output).contains("Unable to load quotes."));
    assert!(stdout_str(&output).contains("Please check back later."));
    assert!(stderr_str(&output).contains("unreachable"));
}

#[test]
fn test_non_list_quotes_file_fails_to_load() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("quotes.json"), r#"{"quote": "A"}"#).unwrap();

    let output = run_calmquote(dir.path(), &["next"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_str(&output).contains("must be a list"));
}

#[test]
fn test_empty_quotes_file_fails_to_load() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("quotes.json"), "[]").unwrap();

    let output = run_calmquote(dir.path(), &["status"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_quotes_path_from_env() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data/mine.json"), r#"[{"quote": "Only one"}]"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_calmquote"))
        .current_dir(dir.path())
        .env("CALMQUOTE_QUOTES", "data/mine.json")
        .arg("next")
        .output()
        .unwrap();

    assert_eq!(first_line(&output), "Only one");
}

// =============================================================================
// NEXT
// =============================================================================

#[test]
fn test_next_shows_every_quote_once_per_pass() {
    let dir = tempdir().unwrap();
    setup_quotes(dir.path());

    for _pass in 0..2 {
        let mut seen = HashSet::new();
        for _ in 0..3 {
            let line = first_line(&run_calmquote(dir.path(), &["next"]));
            assert!(FIRST_LINES.contains(&line.as_str()), "unexpected quote {}", line);
            assert!(seen.insert(line), "quote repeated within a pass");
        }
        assert_eq!(seen.len(), 3);
    }

    assert!(dir.path().join(".calmquote/sequence.v1.json").exists());
}

#[test]
fn test_next_renders_supporting_text() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("quotes.json"),
        r#"[{"quote": "Rest.", "author": "Anon", "meaning": "Pause.", "tags": ["a", "b"]}]"#,
    )
    .unwrap();

    let output = run_calmquote(dir.path(), &["next"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_str(&output),
        "Rest.\n— Anon\n\nMeaning: Pause.\n\nTags: a, b\n"
    );
}

#[test]
fn test_corrupt_state_is_ignored() {
    let dir = tempdir().unwrap();
    setup_quotes(dir.path());
    fs::create_dir(dir.path().join(".calmquote")).unwrap();
    fs::write(dir.path().join(".calmquote/sequence.v1.json"), "{ garbage").unwrap();

    let output = run_calmquote(dir.path(), &["next"]);
    assert!(FIRST_LINES.contains(&first_line(&output).as_str()));

    // The state file was rewritten with a valid pass.
    let state = fs::read_to_string(dir.path().join(".calmquote/sequence.v1.json")).unwrap();
    assert!(state.contains("\"cursor\": 1"));
}

#[test]
fn test_changed_quotes_start_new_pass() {
    let dir = tempdir().unwrap();
    setup_quotes(dir.path());
    run_calmquote(dir.path(), &["next"]);
    run_calmquote(dir.path(), &["next"]);

    fs::write(
        dir.path().join("quotes.json"),
        r#"[{"quote": "New one"}, {"quote": "New two"}]"#,
    )
    .unwrap();
    run_calmquote(dir.path(), &["next"]);

    let status = stdout_str(&run_calmquote(dir.path(), &["status"]));
    assert!(status.contains("Quotes:  2"), "{}", status);
    assert!(status.contains("1 of 2 shown"), "{}", status);
}

#[test]
fn test_state_dir_option() {
    let dir = tempdir().unwrap();
    setup_quotes(dir.path());

    let output = run_calmquote(dir.path(), &["--state-dir", "custom", "next"]);
    assert!(output.status.success());
    assert!(dir.path().join("custom/sequence.v1.json").exists());
    assert!(!dir.path().join(".calmquote").exists());
}

// =============================================================================
// DAILY
// =============================================================================

#[test]
fn test_daily_is_stable_for_a_date() {
    let dir = tempdir().unwrap();
    setup_quotes(dir.path());

    let first = first_line(&run_calmquote(dir.path(), &["daily", "--date", "2025-06-12"]));
    run_calmquote(dir.path(), &["next"]);
    run_calmquote(dir.path(), &["next"]);
    let second = first_line(&run_calmquote(dir.path(), &["daily", "--date", "2025-06-12"]));

    assert_eq!(first, second);
}

#[test]
fn test_daily_does_not_advance_pass() {
    let dir = tempdir().unwrap();
    setup_quotes(dir.path());

    run_calmquote(dir.path(), &["next"]);
    run_calmquote(dir.path(), &["daily"]);

    let status = stdout_str(&run_calmquote(dir.path(), &["status"]));
    assert!(status.contains("1 of 3 shown, 2 remaining"), "{}", status);
}

#[test]
fn test_daily_rejects_bad_date() {
    let dir = tempdir().unwrap();
    setup_quotes(dir.path());

    let output = run_calmquote(dir.path(), &["daily", "--date", "12/06/2025"]);
    assert!(!output.status.success());
}

// =============================================================================
// SHARE
// =============================================================================

#[test]
fn test_share_before_any_quote_prompts() {
    let dir = tempdir().unwrap();
    setup_quotes(dir.path());

    let output = run_calmquote(dir.path(), &["share", "print"]);

    assert!(output.status.success());
    assert!(stdout_str(&output).contains("Please generate a quote first."));
}

#[test]
fn test_share_print_uses_quote_on_display() {
    let dir = tempdir().unwrap();
    setup_quotes(dir.path());

    let shown = first_line(&run_calmquote(dir.path(), &["next"]));
    let output = run_calmquote(dir.path(), &["share", "print"]);
    let text = stdout_str(&output);

    assert!(output.status.success());
    assert!(text.starts_with(&shown));
    assert!(text.ends_with("\n\nShared from Calm Down Quotes\nhttps://calm-down-quotes.github.io/\n"));
    assert!(!text.contains("\n\n\n"));
}

#[test]
fn test_share_daily_quote() {
    let dir = tempdir().unwrap();
    setup_quotes(dir.path());

    let shown = first_line(&run_calmquote(dir.path(), &["daily", "--date", "2024-02-29"]));
    let text = stdout_str(&run_calmquote(dir.path(), &["share", "print"]));
    assert!(text.starts_with(&shown));
}

#[test]
fn test_share_custom_site() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("quotes.json"), r#"[{"quote": "Q"}]"#).unwrap();
    run_calmquote(dir.path(), &["next"]);

    let output = run_calmquote(
        dir.path(),
        &[
            "share",
            "print",
            "--site-name",
            "Quiet Place",
            "--site-url",
            "https://quiet.example//",
        ],
    );
    assert_eq!(
        stdout_str(&output),
        "Q\n\nShared from Quiet Place\nhttps://quiet.example/\n"
    );
}

#[test]
fn test_share_whatsapp_print_url() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("quotes.json"), r#"[{"quote": "Be still"}]"#).unwrap();
    run_calmquote(dir.path(), &["next"]);

    let output = run_calmquote(dir.path(), &["share", "whatsapp", "--print-url"]);
    let stdout = stdout_str(&output);

    assert!(output.status.success());
    assert!(stdout.contains("https://api.whatsapp.com/send?text=Be%20still%0A%0AShared%20from"));
}

#[test]
fn test_share_messenger_needs_no_quote() {
    let dir = tempdir().unwrap();
    setup_quotes(dir.path());

    let output = run_calmquote(dir.path(), &["share", "messenger", "--print-url"]);
    let stdout = stdout_str(&output);

    assert!(output.status.success());
    assert!(stdout.contains(
        "https://www.messenger.com/share/?link=https%3A%2F%2Fcalm-down-quotes.github.io%2F"
    ));
    assert!(!stdout.contains("Please generate a quote first."));
}

#[test]
fn test_share_unknown_channel_is_rejected() {
    let dir = tempdir().unwrap();
    setup_quotes(dir.path());

    let output = run_calmquote(dir.path(), &["share", "carrier-pigeon"]);
    assert!(!output.status.success());
}

// =============================================================================
// STATUS / RESET
// =============================================================================

#[test]
fn test_status_reports_progress() {
    let dir = tempdir().unwrap();
    setup_quotes(dir.path());

    let before = stdout_str(&run_calmquote(dir.path(), &["status"]));
    assert!(before.contains("Calmquote Status"));
    assert!(before.contains("Quotes:  3"));
    assert!(before.contains("0 of 3 shown, 3 remaining"));
    assert!(before.contains("Current: None"));

    let shown = first_line(&run_calmquote(dir.path(), &["next"]));
    let after = stdout_str(&run_calmquote(dir.path(), &["status"]));
    assert!(after.contains("1 of 3 shown, 2 remaining"));
    assert!(after.contains(&shown));
    assert!(after.contains("sequence.v1.json"));
}

#[test]
fn test_status_after_full_pass() {
    let dir = tempdir().unwrap();
    setup_quotes(dir.path());
    for _ in 0..3 {
        run_calmquote(dir.path(), &["next"]);
    }

    let status = stdout_str(&run_calmquote(dir.path(), &["status"]));
    assert!(status.contains("3 of 3 shown, reshuffles on next quote"), "{}", status);
}

#[test]
fn test_reset_forgets_quote_on_display() {
    let dir = tempdir().unwrap();
    setup_quotes(dir.path());
    run_calmquote(dir.path(), &["next"]);

    let output = run_calmquote(dir.path(), &["reset"]);
    assert!(output.status.success());
    assert!(stdout_str(&output).contains("3 quotes in a new pass"));
    assert!(!dir.path().join(".calmquote/sequence.v1.json").exists());

    let share = stdout_str(&run_calmquote(dir.path(), &["share", "print"]));
    assert!(share.contains("Please generate a quote first."));
}

#[test]
fn test_reset_without_quotes_clears_state() {
    let dir = tempdir().unwrap();
    setup_quotes(dir.path());
    run_calmquote(dir.path(), &["next"]);
    fs::remove_file(dir.path().join("quotes.json")).unwrap();

    let output = run_calmquote(dir.path(), &["reset"]);

    assert!(output.status.success(), "{}", stderr_str(&output));
    assert!(stdout_str(&output).contains("Sequence state cleared"));
    assert!(!dir.path().join(".calmquote/sequence.v1.json").exists());
}
