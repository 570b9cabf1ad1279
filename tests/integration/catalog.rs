// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use tempfile::tempdir;

use crate::{calflux, get_cmd_output, CATALOG, UMRAO_DIR, VLA_LISTING};

#[test]
fn test_ingest_then_verify() {
    let tmp_dir = tempdir().expect("couldn't make tmp dir");
    let snapshot = tmp_dir.path().join("vla.json");

    let cmd = calflux()
        .args(["catalog-ingest", VLA_LISTING, &snapshot.display().to_string()])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("4 calibrators (4 with B1950 names, 3 with 3C designations)"), "{stdout}");
    assert!(snapshot.exists());

    let cmd = calflux()
        .args(["catalog-verify", &snapshot.display().to_string(), CATALOG])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
    // The ingested snapshot and the checked-in snapshot agree.
    assert_eq!(
        stdout
            .matches("12 flux-density samples; 1 calibrators without any")
            .count(),
        2,
        "{stdout}"
    );
}

#[test]
fn test_ingest_dry_run_writes_nothing() {
    let tmp_dir = tempdir().expect("couldn't make tmp dir");
    let snapshot = tmp_dir.path().join("vla.yaml");

    let cmd = calflux()
        .args([
            "catalog-ingest",
            VLA_LISTING,
            &snapshot.display().to_string(),
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    assert!(!snapshot.exists());
}

#[test]
fn test_ingest_bad_listing() {
    let tmp_dir = tempdir().expect("couldn't make tmp dir");
    let listing = tmp_dir.path().join("listing.txt");
    let mut f = std::fs::File::create(&listing).unwrap();
    writeln!(f, "1331+305   J2000  A  nonsense  30d30'32.958850\"").unwrap();
    drop(f);

    let cmd = calflux()
        .args([
            "catalog-ingest",
            &listing.display().to_string(),
            &tmp_dir.path().join("out.yaml").display().to_string(),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("right ascension"), "{stderr}");
    assert!(stderr.contains("catalog-ingest --help"), "{stderr}");
}

#[test]
fn test_verify_umrao_table() {
    let table = format!("{UMRAO_DIR}/2251+158.txt");
    let cmd = calflux().args(["catalog-verify", &table]).ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("UMRAO table: 3 channels, 15 samples"), "{stdout}");
}

#[test]
fn test_verify_reports_every_bad_file() {
    let tmp_dir = tempdir().expect("couldn't make tmp dir");
    let bad = tmp_dir.path().join("bad.yaml");
    std::fs::write(&bad, "1331+305:\n  ra: 400.0\n  dec: 30.5\n").unwrap();
    let unknown = tmp_dir.path().join("catalog.pkl");
    std::fs::write(&unknown, "").unwrap();

    let cmd = calflux()
        .args([
            "catalog-verify",
            &bad.display().to_string(),
            CATALOG,
            &unknown.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_err());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stdout.contains("out of range"), "{stdout}");
    assert!(stdout.contains("recognised file extension"), "{stdout}");
    assert!(stdout.contains("4 calibrators"), "{stdout}");
    assert!(stderr.contains("2 of 3 files could not be read"), "{stderr}");
}
