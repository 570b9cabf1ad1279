// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod band;
mod catalog;
mod flux;
mod names;

use std::process::Output;
use std::str::from_utf8;

use assert_cmd::{output::OutputError, Command};

const CATALOG: &str = "test_files/catalog.yaml";
const VLA_LISTING: &str = "test_files/vla_listing.txt";
const UMRAO_DIR: &str = "test_files/umrao";

fn calflux() -> Command {
    Command::cargo_bin("calflux").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}
