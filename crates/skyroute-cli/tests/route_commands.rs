use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

const AIRPORTS_CSV: &str = "\
id,name,city,country,iata,icao,latitude,longitude,altitude
507,Heathrow,London,United Kingdom,LHR,EGLL,51.4706,-0.461941,83
502,Gatwick,London,United Kingdom,LGW,EGKK,51.1481,-0.190278,202
1382,Charles de Gaulle,Paris,France,CDG,LFPG,49.012798,2.55,392
1386,Orly,Paris,France,ORY,LFPO,48.7233,2.37944,291
";

const ROUTES_CSV: &str = "\
airline,airline_id,source,source_id,dest,dest_id,codeshare,stops,equipment
BA,1355,LHR,507,CDG,1382,,0,744
AF,137,ORY,1386,LGW,502,,0,320
";

fn write_dataset(dir: &Path) {
    fs::write(dir.join("airports.csv"), AIRPORTS_CSV).unwrap();
    fs::write(dir.join("routes.csv"), ROUTES_CSV).unwrap();
}

fn cli() -> Command {
    cargo_bin_cmd!("skyroute")
}

fn prepare_command() -> (Command, TempDir) {
    let temp_dir = tempdir().expect("create temp dir");
    write_dataset(temp_dir.path());
    let mut cmd = cli();
    cmd.env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(temp_dir.path());
    (cmd, temp_dir)
}

#[test]
fn route_prints_the_rendered_path() {
    let (mut cmd, _temp) = prepare_command();
    cmd.arg("route").arg("--from").arg("LHR").arg("--to").arg("CDG");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("LHR->CDG"));
}

#[test]
fn route_accepts_icao_codes() {
    let (mut cmd, _temp) = prepare_command();
    cmd.arg("route").arg("--from").arg("EGLL").arg("--to").arg("LFPG");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("LHR->CDG"));
}

#[test]
fn unreachable_destination_prints_the_sentinel() {
    let (mut cmd, _temp) = prepare_command();
    cmd.arg("route").arg("--from").arg("LHR").arg("--to").arg("LGW");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No route."));
}

#[test]
fn perimeter_flag_enables_ground_transfers() {
    // LHR->CDG by air, CDG=>ORY on the ground, ORY->LGW by air.
    let (mut cmd, _temp) = prepare_command();
    cmd.arg("route")
        .arg("--from")
        .arg("LHR")
        .arg("--to")
        .arg("LGW")
        .arg("--check-perimeter");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("LHR->CDG=>ORY->LGW"));
}

#[test]
fn unknown_airport_fails_with_a_clear_error() {
    let (mut cmd, _temp) = prepare_command();
    cmd.arg("route").arg("--from").arg("ZZZZ").arg("--to").arg("CDG");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown airport code: ZZZZ"));
}

#[test]
fn build_writes_a_snapshot() {
    let (mut cmd, temp) = prepare_command();
    cmd.arg("build");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Snapshot written"));
    assert!(temp.path().join("snapshot.json").exists());
}
