use std::{fs, process::Command};

use tempfile::{TempDir, tempdir};

use fretwork_cli::{Args, run};

fn args(temp_dir: &TempDir, name: &str, scale: &str) -> Args {
    Args {
        tuning: None,
        instrument: None,
        scale: scale.to_string(),
        title: None,
        start: None,
        stop: None,
        output: temp_dir.path().join(name).to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

fn write_config(temp_dir: &TempDir, content: &str) -> String {
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    path.to_string_lossy().to_string()
}

#[test]
fn e2e_smoke_test_a_mixolydian() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let mut args = args(&temp_dir, "a_mixolydian.svg", "A,B,C#,D,E,F#,G");
    args.tuning = Some("E,A,D,G,B,E".to_string());
    args.title = Some("A Mixolydian".to_string());

    run(&args).expect("Rendering A Mixolydian should succeed");

    let svg = fs::read_to_string(&args.output).expect("Output file should exist");
    assert!(svg.contains("<svg"));
    assert!(svg.contains("A Mixolydian"));
    assert_eq!(svg.matches("class=\"half\"").count(), 12);
}

#[test]
fn e2e_smoke_test_presets() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let mut failed = Vec::new();
    for instrument in ["guitar", "bass", "ukulele", "drop-d", "seven-string"] {
        let mut args = args(&temp_dir, &format!("{instrument}.svg"), "C,D,E,F,G,A,B");
        args.instrument = Some(instrument.parse().expect("Preset should parse"));
        args.start = Some(3);
        args.stop = Some(8);

        if let Err(err) = run(&args) {
            failed.push((instrument, err));
        }
    }

    if !failed.is_empty() {
        for (instrument, err) in &failed {
            eprintln!("  - {instrument}: {err}");
        }
        panic!("{} preset(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_blank_board() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = args(&temp_dir, "blank.svg", "");

    run(&args).expect("An empty scale should render");

    let svg = fs::read_to_string(&args.output).expect("Output file should exist");
    assert!(!svg.contains("class=\"full\""));
}

#[test]
fn e2e_smoke_test_error_inputs() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let unknown_scale = args(&temp_dir, "unknown_scale.svg", "A,H,C#");

    let mut unknown_tuning = args(&temp_dir, "unknown_tuning.svg", "A");
    unknown_tuning.tuning = Some("E,A,Z".to_string());

    let mut inverted_window = args(&temp_dir, "inverted.svg", "A");
    inverted_window.start = Some(9);
    inverted_window.stop = Some(5);

    let mut missing_config = args(&temp_dir, "missing_config.svg", "A");
    missing_config.config = Some(
        temp_dir
            .path()
            .join("absent.toml")
            .to_string_lossy()
            .to_string(),
    );

    let mut unexpectedly_succeeded = Vec::new();
    for args in [unknown_scale, unknown_tuning, inverted_window, missing_config] {
        if run(&args).is_ok() {
            unexpectedly_succeeded.push(args.output.clone());
        }
        assert!(
            fs::metadata(&args.output).is_err(),
            "No output should be written for {}",
            args.output
        );
    }

    assert!(
        unexpectedly_succeeded.is_empty(),
        "Error inputs unexpectedly succeeded: {unexpectedly_succeeded:?}"
    );
}

#[test]
fn e2e_smoke_test_config_defaults() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = write_config(
        &temp_dir,
        r#"
[style]
background_color = "ivory"
note_color = "seagreen"

[defaults]
instrument = "ukulele"
start = 2
stop = 7
"#,
    );

    let mut args = args(&temp_dir, "configured.svg", "C,E,G");
    args.config = Some(config);

    run(&args).expect("Configured render should succeed");

    let svg = fs::read_to_string(&args.output).expect("Output file should exist");
    // Four ukulele strings, three notes, two octaves
    let notes = svg.matches("class=\"full\"").count() + svg.matches("class=\"half\"").count();
    assert_eq!(notes, 4 * 3 * 2);
}

#[test]
fn e2e_errors_reach_stderr_with_logging_off() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("never.svg");

    let output = Command::new(env!("CARGO_BIN_EXE_fretwork"))
        .args(["--scale", "A,H", "--log-level", "off", "-o"])
        .arg(&output_path)
        .output()
        .expect("Failed to run fretwork");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown pitch `H` in scale entry 2"), "{stderr}");
    assert!(!output_path.exists());
}
