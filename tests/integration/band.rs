// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{calflux, get_cmd_output};

#[test]
fn test_band_lookups() {
    let cmd = calflux().args(["band", "8.4"]).ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("8.4 GHz is in X band"), "{stdout}");

    let cmd = calflux().args(["band", "Ka"]).ok();
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Ka band: nominal frequency 34 GHz"), "{stdout}");
}

#[test]
fn test_band_failure() {
    let cmd = calflux().args(["band", "0.1"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("not in any waveguide band"), "{stderr}");
}
