// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Flux-density estimates of radio calibrators.

Planets are modelled from their brightness temperatures, and extragalactic
calibrators are looked up in a catalog snapshot (built from the VLA calibrator
listing) and, for variable sources, UMRAO monitoring tables. Catalogued flux
densities are interpolated (or extrapolated) in frequency and time.
 */

pub mod catalog;
mod cli;
pub mod constants;
pub mod interp;
pub(crate) mod math;
pub mod names;
pub(crate) mod params;
pub mod physics;
pub mod planets;
pub mod resolve;
pub mod timeseries;

// Re-exports.
pub use catalog::{CalibratorRecord, CatalogError, CatalogStore, IngestError};
pub use cli::{Calflux, CalfluxError};
pub use interp::{InterpolationError, Polation};
pub use math::FitError;
pub use names::{NameError, SourceNameKind};
pub use planets::Planet;
pub use resolve::{CalibratorFluxResolver, FluxEstimate, Provenance, ResolveError};
pub use timeseries::{TimeSeries, TimeSeriesSource};
