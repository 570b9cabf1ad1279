// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parse flux-density arguments into parameters, and report the estimates.


use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use hifitime::Epoch;
use itertools::Itertools;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vec1::Vec1;

use super::common::{display_warnings, CatalogArgs, InfoPrinter, ARG_FILE_HELP};
use crate::{params::FluxParams, resolve::FluxEstimate, CalfluxError};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct FluxArgs {
    /// The calibrator. This may be a planet (e.g. Jupiter), a 3C designation
    /// (e.g. 3C286) or a J2000 or B1950 IAU name (e.g. J1331+305, B1328+307).
    /// IAU names without a prefix are tried as J2000 names first.
    #[clap(name = "SOURCE")]
    pub(super) source: Option<String>,

    /// The frequencies at which to estimate the flux density [GHz].
    #[clap(name = "FREQS_GHZ", multiple_values(true))]
    pub(super) freqs_ghz: Option<Vec<f64>>,

    #[clap(long, help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// The date of the observation. Accepts a date like "2020-01-01T00:00:00
    /// UTC" or a UTC MJD like 58849. Default: now.
    #[clap(short, long)]
    pub(super) date: Option<String>,

    /// Print the estimates as json, rather than a summary.
    #[clap(long)]
    #[serde(default)]
    pub(super) json: bool,

    #[clap(flatten)]
    #[serde(rename = "catalogs")]
    #[serde(default)]
    pub(super) catalog_args: CatalogArgs,
}

impl FluxArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<FluxArgs, CalfluxError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Ensure all of the file args are accounted for by pattern
            // matching.
            let FluxArgs {
                args_file: _,
                source,
                freqs_ghz,
                date,
                json,
                catalog_args,
            } = unpack_arg_file!(arg_file);

            Ok(FluxArgs {
                args_file: None,
                source: cli_args.source.or(source),
                freqs_ghz: cli_args.freqs_ghz.or(freqs_ghz),
                date: cli_args.date.or(date),
                json: cli_args.json || json,
                catalog_args: cli_args.catalog_args.merge(catalog_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    fn parse(self) -> Result<(FluxParams, bool), CalfluxError> {
        debug!("{:#?}", self);

        let FluxArgs {
            args_file: _,
            source,
            freqs_ghz,
            date,
            json,
            catalog_args,
        } = self;

        let source = match source {
            Some(s) if !s.trim().is_empty() => s.trim().to_string(),
            _ => return Err(FluxArgsError::NoSource.into()),
        };
        let freqs_ghz = freqs_ghz
            .and_then(|f| Vec1::try_from_vec(f).ok())
            .ok_or(FluxArgsError::NoFrequencies)?;
        if let Some(&bad) = freqs_ghz.iter().find(|f| !(f.is_finite() && **f > 0.0)) {
            return Err(FluxArgsError::BadFrequency(bad).into());
        }

        let epoch = match date {
            Some(date) => parse_date(&date)?,
            None => {
                let now = Epoch::now().map_err(|e| FluxArgsError::Clock(e.to_string()))?;
                debug!("No date was given; using the current time");
                now
            }
        };

        let resolver = catalog_args.parse()?;

        let mut printer = InfoPrinter::new("Flux-density estimation".into());
        printer.push_line(format!("Source: {source}").into());
        printer.push_line(format!("Date: {epoch}").into());
        printer.push_line(format!("Frequencies: {} GHz", freqs_ghz.iter().join(", ")).into());
        let counts = resolver.catalog().get_counts();
        printer.push_line(format!("Catalog: {} calibrators", counts.num_records).into());
        printer.display();
        display_warnings();

        Ok((
            FluxParams {
                source,
                freqs_ghz,
                epoch,
                resolver,
            },
            json,
        ))
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), CalfluxError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let (params, json) = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        let estimates = params.run()?;
        if json {
            let reports = params
                .freqs_ghz
                .iter()
                .zip(estimates.iter())
                .map(|(&freq_ghz, estimate)| FluxReport {
                    source: &params.source,
                    freq_ghz,
                    date: params.epoch.to_string(),
                    estimate,
                })
                .collect::<Vec<_>>();
            let s = serde_json::to_string_pretty(&reports)
                .map_err(|e| CalfluxError::Generic(e.to_string()))?;
            println!("{s}");
        } else {
            let first = estimates.first();
            let mut printer = InfoPrinter::new(
                format!("{} ({})", params.source, first.canonical_name).into(),
            );
            printer.push_line(format!("Provenance: {}", first.provenance).into());
            for (freq_ghz, estimate) in params.freqs_ghz.iter().zip(estimates.iter()) {
                let mut line = format!("{freq_ghz} GHz: {:.4} Jy", estimate.flux_jy);
                if let Some(polation) = estimate.polation {
                    line.push_str(&format!(" ({polation})"));
                }
                printer.push_line(line.into());
            }
            printer.display();
        }

        Ok(())
    }
}

/// One estimate as printed with `--json`.
#[derive(Serialize)]
struct FluxReport<'a> {
    source: &'a str,
    freq_ghz: f64,
    date: String,
    #[serde(flatten)]
    estimate: &'a FluxEstimate,
}

/// Parse a date, either as a UTC MJD or anything [`Epoch`] understands.
fn parse_date(date: &str) -> Result<Epoch, FluxArgsError> {
    let date = date.trim();
    if let Ok(mjd) = date.parse::<f64>() {
        if mjd.is_finite() {
            return Ok(Epoch::from_mjd_utc(mjd));
        }
    }
    Epoch::from_str(date).map_err(|e| FluxArgsError::ParseDate {
        date: date.to_string(),
        err: e.to_string(),
    })
}

#[derive(Error, Debug)]
pub(crate) enum FluxArgsError {
    #[error("No source was specified")]
    NoSource,

    #[error("No frequencies were specified")]
    NoFrequencies,

    #[error("Frequencies must be positive numbers of GHz, but got {0}")]
    BadFrequency(f64),

    #[error("Could not parse '{date}' as a date: {err}")]
    ParseDate { date: String, err: String },

    #[error("Could not read the current time: {0}")]
    Clock(String),
}
