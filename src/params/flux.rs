// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use hifitime::Epoch;
use log::debug;
use vec1::Vec1;

use crate::resolve::{CalibratorFluxResolver, FluxEstimate, ResolveError};

pub(crate) struct FluxParams {
    pub(crate) source: String,

    /// \[GHz\]. All finite and positive.
    pub(crate) freqs_ghz: Vec1<f64>,

    pub(crate) epoch: Epoch,

    pub(crate) resolver: CalibratorFluxResolver,
}

impl FluxParams {
    /// Estimate the flux density of the source at each frequency. The first
    /// failure stops the run.
    pub(crate) fn run(&self) -> Result<Vec1<FluxEstimate>, ResolveError> {
        debug!(
            "Resolving {} at {} frequencies on {}",
            self.source,
            self.freqs_ghz.len(),
            self.epoch
        );
        self.freqs_ghz.try_mapped_ref(|&freq_ghz| {
            self.resolver.resolve(&self.source, freq_ghz, self.epoch)
        })
    }
}
