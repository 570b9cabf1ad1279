// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{calflux, get_cmd_output, CATALOG};

#[test]
fn test_name_resolve() {
    #[rustfmt::skip]
    let cmd = calflux()
        .args([
            "name-resolve",
            "--catalog", CATALOG,
            "3c 286", "B2251+158", "J0137+33", "0019-426", "Saturn",
        ])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
    assert!(stdout.contains("3c 286: J1331+305 (matched 3C286)"), "{stdout}");
    assert!(stdout.contains("B2251+158: J2253+161"), "{stdout}");
    assert!(stdout.contains("J0137+33: J0137+331"), "{stdout}");
    assert!(stdout.contains("0019-426: J0022-423 (matched B0019-426)"), "{stdout}");
    assert!(stdout.contains("Saturn: the planet Saturn"), "{stdout}");
}

#[test]
fn test_name_resolve_failures() {
    #[rustfmt::skip]
    let cmd = calflux()
        .args([
            "name-resolve",
            "--catalog", CATALOG,
            "3C286", "3C999", "J1331",
        ])
        .ok();
    assert!(cmd.is_err());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stdout.contains("3C286: J1331+305"), "{stdout}");
    assert!(stderr.contains("2 of 3 names could not be resolved"), "{stderr}");
}
