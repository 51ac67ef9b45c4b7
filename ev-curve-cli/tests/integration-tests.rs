use std::process::Command;

use assert_cmd::prelude::{CommandCargoExt, OutputAssertExt};
use predicates::prelude::predicate;

const REFERENCE_CURVE: &str = "10,10.52:20,8.24:30,7.76:40,7.85:50,8.24:60,8.86:70,9.68:\
    80,10.66:90,11.81:100,13.12:110,14.58:120,16.19:130,17.95:140,19.86:150,21.91:\
    160,24.11:170,26.46:180,28.96:190,31.59:200,34.38\n";

#[test]
fn test_that_cli_app_produces_curve() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("ev-curve")?;
    cmd.args(["--weight=1800", "--drag-area=0.5"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::diff(REFERENCE_CURVE));
    Ok(())
}

#[test]
fn test_equivalent_inputs_produce_same_curve() -> Result<(), Box<dyn std::error::Error>> {
    let variants: [&[&str]; 3] = [
        &["--curb-weight=1710", "--drag-area=0.5"],
        &["--weight=1800", "--drag-coefficient=0.25", "--frontal-area=2.0"],
        &[
            "--weight", "1800", "--drag-coefficient", "0.25", "--width", "2.5", "--height", "1.0",
        ],
    ];
    for args in variants {
        Command::cargo_bin("ev-curve")?
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::diff(REFERENCE_CURVE));
    }
    Ok(())
}

#[test]
fn test_max_speed_and_temperature() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("ev-curve")?;
    cmd.args([
        "--weight=1800",
        "--drag-area=0.5",
        "--max-speed=35",
        "--temperature",
        "-10",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::is_match(r"^10,\d+\.\d\d:20,\d+\.\d\d:30,\d+\.\d\d\n$")?);
    Ok(())
}

#[test]
fn test_highway_consumption_calibration() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("ev-curve")?;
    cmd.args([
        "--weight=1800",
        "--drag-area=0.5",
        "--temperature=23",
        "--highway-consumption=180",
        "--max-speed=120",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(":110,18.00:120,"));
    Ok(())
}

#[test]
fn test_conflicting_weights_fail() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("ev-curve")?;
    cmd.args(["--weight=1800", "--curb-weight=1710", "--drag-area=0.5"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Cannot have both --weight and --curb-weight.",
        ));
    Ok(())
}

#[test]
fn test_missing_drag_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("ev-curve")?;
    cmd.args(["--weight=1800"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Must specify --drag-area"));
    Ok(())
}

#[test]
fn test_out_of_range_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("ev-curve")?;
    cmd.args(["--weight=100", "--drag-area=0.5"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("must be between 200 and 80000"));

    let mut cmd = Command::cargo_bin("ev-curve")?;
    cmd.args(["--weight=heavy", "--drag-area=0.5"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("is not a number"));
    Ok(())
}

#[test]
fn test_veh_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let veh_file = dir.path().join("vehicle.yaml");
    std::fs::write(
        &veh_file,
        "mass_kg: 1800.0\ndrag_area_m2: 0.5\ndrivetrain_eff: 0.9\nwheel_rr_coef: 0.01\nidle_power_w: 500.0\n",
    )?;

    Command::cargo_bin("ev-curve")?
        .arg("--veh-file")
        .arg(&veh_file)
        .assert()
        .success()
        .stdout(predicate::str::diff(REFERENCE_CURVE));

    Command::cargo_bin("ev-curve")?
        .arg("--veh-file")
        .arg(&veh_file)
        .arg("--weight=1800")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be combined"));
    Ok(())
}

#[test]
fn test_json_result_format() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("ev-curve")?;
    cmd.args([
        "--weight=1800",
        "--drag-area=0.5",
        "--max-speed=20",
        "--res-fmt=json",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(r#"{"points":[{"speed_kmh":10,"#));

    let mut cmd = Command::cargo_bin("ev-curve")?;
    cmd.args(["--weight=1800", "--drag-area=0.5", "--res-fmt=csv"]);
    cmd.assert().failure();
    Ok(())
}

#[test]
fn test_verbose_logs_go_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("ev-curve")?
        .args(["--weight=1800", "--drag-area=0.5", "--highway-consumption=180", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^10,\d+\.\d\d:.*:200,\d+\.\d\d\n$")?)
        .stderr(predicate::str::contains("scaling modelled consumption by"))
        .stderr(predicate::str::contains("lowest consumption"));

    Command::cargo_bin("ev-curve")?
        .args(["--weight=1800", "--drag-area=0.5", "-vv"])
        .assert()
        .success()
        .stdout(predicate::str::diff(REFERENCE_CURVE))
        .stderr(predicate::str::contains("lowest consumption 7.76 kWh/100km at 30 km/h"));

    Command::cargo_bin("ev-curve")?
        .args(["--weight=1800", "--drag-area=0.5"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    Ok(())
}
