use std::fs;
use std::process::{Command, Output};

fn cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_euler-projectile"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("EULER_PROJECTILE_CONFIG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn default_run_prints_full_report() {
    let output = cli(&["run", "--no-plot"]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Step 10: t = 1.00s"));
    assert!(stdout.contains("Simulation finished: 30 steps"));
    assert!(stdout.contains("Analytic range: 40.77 m"));
    assert!(stdout.contains("PRECISION ANALYSIS"));
    assert!(stdout.contains("Reduce the step h"));
}

#[test]
fn fine_step_is_reported_as_acceptable() {
    let output = cli(&["run", "--no-plot", "--step", "0.001"]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Good precision"));
}

#[test]
fn invalid_step_is_rejected() {
    let output = cli(&["run", "--no-plot", "--step", "0"]);

    assert!(!output.status.success(), "Command should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid step"), "stderr: {stderr}");
}

#[test]
fn unsupported_plot_format_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("trajectory.gif");
    let output = cli(&["run", "--plot", path.to_str().expect("utf-8 path")]);

    assert!(!output.status.success(), "Command should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported plot format"), "stderr: {stderr}");
}

#[test]
fn convergence_table_shows_monotonic_decrease() {
    let output = cli(&["convergence"]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0.001"));
    assert!(stdout.contains("decreases monotonically: yes"));
}

#[test]
fn config_file_values_are_overridden_by_flags() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("launch.toml");
    fs::write(&path, "[simulation]\nspeed_mps = 30.0\nstep_s = 0.5\n").expect("write config");

    let output = cli(&[
        "--config",
        path.to_str().expect("utf-8 path"),
        "run",
        "--no-plot",
        "--step",
        "0.01",
    ]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Initial speed: 30.00 m/s"));
    assert!(stdout.contains("Step 10: t = 0.10s"));
}
