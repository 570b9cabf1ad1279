// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::Path;

use approx::assert_relative_eq;
use serde_json::Value;
use tempfile::tempdir;

use crate::{calflux, get_cmd_output, CATALOG, UMRAO_DIR};

const DATE: &str = "2020-01-01T00:00:00 UTC";

/// Pull the pretty-printed json array out of stdout, which also contains log
/// messages.
fn json_from_stdout(stdout: &str) -> Value {
    let start = stdout.find("[\n  {").expect("no json in stdout");
    let end = start + stdout[start..].find("\n]").expect("unterminated json") + 2;
    serde_json::from_str(&stdout[start..end]).unwrap()
}

#[test]
fn test_planet_without_catalog() {
    let cmd = calflux()
        .args(["flux", "jupiter", "14.5", "--date", DATE])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
    assert!(stdout.contains("Provenance: planet"), "{stdout}");
    assert!(stdout.contains("14.5 GHz: 17.99"), "{stdout}");
    // Only planets can be resolved without a catalog.
    assert!(stdout.contains("only planets can be resolved"), "{stdout}");
}

#[test]
fn test_3c286() {
    #[rustfmt::skip]
    let cmd = calflux()
        .args([
            "flux", "3C286", "5", "90",
            "--catalog", CATALOG,
            "--date", DATE,
        ])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("3C286 (1331+305)"), "{stdout}");
    assert!(stdout.contains("Provenance: catalog-static"), "{stdout}");
    assert!(stdout.contains("5 GHz: 12.2336 Jy (interpolated)"), "{stdout}");
    assert!(stdout.contains("90 GHz:"), "{stdout}");
    assert!(stdout.contains("(extrapolated)"), "{stdout}");
}

#[test]
fn test_json_output() {
    #[rustfmt::skip]
    let cmd = calflux()
        .args([
            "flux", "B1328+307", "5",
            "--catalog", CATALOG,
            "--date", "58849",
            "--json",
        ])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    let json = json_from_stdout(&stdout);
    let estimate = &json[0];
    assert_eq!(estimate["source"], "B1328+307");
    assert_eq!(estimate["canonical_name"], "1331+305");
    assert_eq!(estimate["provenance"], "catalog-static");
    assert_eq!(estimate["polation"], "interpolated");
    assert_relative_eq!(estimate["freq_ghz"].as_f64().unwrap(), 5.0);
    assert_relative_eq!(
        estimate["flux_jy"].as_f64().unwrap(),
        12.233579728609719,
        max_relative = 1e-9
    );
}

#[test]
fn test_variable_source() {
    #[rustfmt::skip]
    let cmd = calflux()
        .args([
            "flux", "3C454.3", "8",
            "--catalog", CATALOG,
            "--umrao-dir", UMRAO_DIR,
            "--date", DATE,
        ])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("3C454.3 (2253+161)"), "{stdout}");
    assert!(stdout.contains("Provenance: catalog-variable"), "{stdout}");
    // The monitoring ends before the date.
    assert!(stdout.contains("(extrapolated)"), "{stdout}");

    // Without the monitoring tables, the catalog fluxes are used.
    #[rustfmt::skip]
    let cmd = calflux()
        .args([
            "flux", "3C454.3", "8",
            "--catalog", CATALOG,
            "--date", DATE,
        ])
        .ok();
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Provenance: catalog-static"), "{stdout}");
}

#[test]
fn test_arg_file_and_save_toml() {
    let tmp_dir = tempdir().expect("couldn't make tmp dir");
    let toml = tmp_dir.path().join("flux.toml");

    #[rustfmt::skip]
    let cmd = calflux()
        .args([
            "flux", "3C48", "1.4",
            "--catalog", &Path::new(CATALOG).canonicalize().unwrap().display().to_string(),
            "--date", DATE,
            "--save-toml", &toml.display().to_string(),
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Dry run"), "{stdout}");
    assert!(toml.exists());

    let cmd = calflux()
        .args(["flux", "--args-file", &toml.display().to_string()])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("3C48 (0137+331)"), "{stdout}");

    // Command-line arguments take precedence over the file.
    let cmd = calflux()
        .args(["flux", "Mars", "--args-file", &toml.display().to_string()])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Provenance: planet"), "{stdout}");
}

#[test]
fn test_failures() {
    let cmd = calflux()
        .args(["flux", "Cygnus A", "1.4", "--catalog", CATALOG, "--date", DATE])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(
        stderr.contains("is not a known planet or catalogued source"),
        "{stderr}"
    );

    let cmd = calflux()
        .args(["flux", "J0022-423", "1.4", "--catalog", CATALOG, "--date", DATE])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("no usable flux-density samples"), "{stderr}");

    let cmd = calflux().args(["flux", "Venus", "--date", DATE]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("No frequencies were specified"), "{stderr}");

    let cmd = calflux()
        .args(["flux", "Venus", "8.4", "--date", "yesterday"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("as a date"), "{stderr}");

    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.yaml");
    let cmd = calflux()
        .args(["flux", "3C286", "5", "--date", DATE, "--catalog"])
        .arg(&missing)
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("is unavailable"), "{stderr}");
    assert!(stderr.contains("missing.yaml"), "{stderr}");
}
