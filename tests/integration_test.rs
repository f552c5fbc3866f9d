use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    Command::new("cargo")
        .arg("run")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn write_deck(dir: &std::path::Path) -> std::path::PathBuf {
    let deck_path = dir.join("deck.json");
    let deck = r#"[
        {"id": "a", "headline": "Stop Wasting Mornings", "body": "Three habits that buy back an hour."},
        {"id": "b", "headline": "Plan the Night Before", "body": "Decide tomorrow's top task today."},
        {"id": "c", "headline": "Follow for More", "body": "New tips every week."}
    ]"#;
    fs::write(&deck_path, deck).expect("Failed to write deck file");
    deck_path
}

#[test]
fn test_themes_command_lists_every_theme() {
    let output = run_command(&["themes"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    for id in ["modern", "custom", "midnight_blue", "vibrant_yellow"] {
        assert!(stdout.contains(id), "Missing theme {}", id);
    }
    assert_eq!(stdout.lines().count(), 16);
}

#[test]
fn test_html_command_with_deck_and_custom_theme() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();
    let deck_path = write_deck(temp_path);
    let output_path = temp_path.join("out").join("carousel.html");

    let output = run_command(&[
        "html",
        "--deck",
        deck_path.to_str().unwrap(),
        "--theme",
        "custom",
        "--color1",
        "#112233",
        "--color2",
        "#445566",
        "--name",
        "Sam Writer",
        "--handle",
        "@sam",
        "-o",
        output_path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(output_path.exists(), "Output file was not created");

    let html_content = fs::read_to_string(&output_path).expect("Failed to read output file");
    assert_eq!(html_content.matches(r#"class="print-page""#).count(), 3);
    assert!(html_content.contains("Stop Wasting Mornings"));
    assert!(html_content.contains("3 / 3"));
    assert!(html_content.contains("Sam Writer"));
    assert!(html_content.contains("linear-gradient(135deg, #112233, #445566)"));

    let first = html_content.find("Stop Wasting Mornings").unwrap();
    let last = html_content.find("Follow for More").unwrap();
    assert!(first < last, "Slides out of order");
}

#[test]
fn test_html_command_uses_default_slides() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("default.html");

    let output = run_command(&["html", "-o", output_path.to_str().unwrap()]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let html_content = fs::read_to_string(&output_path).expect("Failed to read output file");
    assert!(html_content.contains("Master Social Media Carousels"));
    assert!(html_content.contains("Jane Designer"));
    assert!(html_content.contains("@jane_creatives"));
}

#[test]
fn test_unknown_theme_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("never.html");

    let output = run_command(&[
        "html",
        "--theme",
        "neon",
        "-o",
        output_path.to_str().unwrap(),
    ]);
    assert!(!output.status.success(), "Command should have failed");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown theme"));
    assert!(!output_path.exists());
}

#[test]
fn test_empty_deck_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let deck_path = temp_dir.path().join("empty.json");
    fs::write(&deck_path, "[]").expect("Failed to write deck file");
    let output_path = temp_dir.path().join("never.html");

    let output = run_command(&[
        "html",
        "--deck",
        deck_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ]);
    assert!(!output.status.success(), "Command should have failed");
    assert!(!output_path.exists());
}

#[test]
fn test_generate_without_api_key_fails() {
    let output = Command::new("cargo")
        .arg("run")
        .arg("--")
        .args(["generate", "--topic", "time management"])
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed");
    assert!(String::from_utf8_lossy(&output.stderr).contains("API key"));
}
