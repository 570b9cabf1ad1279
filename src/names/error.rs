// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Source name '{0}' can't be split into right ascension and declination parts (expected something like '1331+305')")]
    Malformed(String),

    #[error("Source name '{0}' doesn't match any catalogued source")]
    Unresolved(String),
}
