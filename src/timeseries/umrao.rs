// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to read UMRAO flux-density tables.
//!
//! A table has three lines of header, then one sample per line:
//!
//! ```text
//! 45223.50  1982-12-20  4.8  12.0  3.12  0.05
//! ```
//!
//! i.e. MJD, date, frequency \[GHz\], UT hour, flux density \[Jy\] and its
//! uncertainty \[Jy\]. A line with fewer fields ends the table.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use log::{debug, trace};

use super::{Channel, FluxSample, TimeSeries, TimeSeriesSource};
use crate::catalog::{CatalogError, IngestError};

const NUM_HEADER_LINES: u32 = 3;
const NUM_FIELDS: usize = 6;

/// Parse a UMRAO table.
pub fn parse_umrao_table<T: std::io::BufRead>(buf: &mut T) -> Result<TimeSeries, IngestError> {
    let mut line = String::new();
    let mut line_num: u32 = 0;
    // Keyed by the frequency as it is written, so that channels keep the
    // table's order.
    let mut channels: IndexMap<String, (f64, Vec<FluxSample>)> = IndexMap::new();

    let parse_float = |s: &str, line_num: u32| -> Result<f64, IngestError> {
        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(f),
            Ok(_) => Err(IngestError::NonFiniteValue {
                line_num,
                string: s.to_string(),
            }),
            Err(_) => Err(IngestError::ParseFloat {
                line_num,
                string: s.to_string(),
            }),
        }
    };

    while buf.read_line(&mut line)? > 0 {
        line_num += 1;
        if line_num <= NUM_HEADER_LINES || line.trim().is_empty() {
            line.clear();
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < NUM_FIELDS {
            trace!("Line {line_num} has no flux data; stopping");
            break;
        }
        let sample = FluxSample {
            mjd: parse_float(fields[0], line_num)?,
            flux_jy: parse_float(fields[4], line_num)?,
            sigma_jy: parse_float(fields[5], line_num)?,
        };
        let freq_ghz = parse_float(fields[2], line_num)?;
        channels
            .entry(fields[2].to_string())
            .or_insert_with(|| (freq_ghz, vec![]))
            .1
            .push(sample);

        line.clear();
    }

    let parsed: Vec<Channel> = channels
        .into_values()
        .filter_map(|(freq_ghz, samples)| Channel::new(freq_ghz, samples))
        .collect();
    if parsed.is_empty() {
        return Err(IngestError::NoSamples);
    }
    let ts = TimeSeries::new(parsed);
    debug!(
        "Read {} samples in {} channels",
        ts.num_samples(),
        ts.channels().len()
    );
    Ok(ts)
}

/// A directory of UMRAO tables, one per source, named `<B1950 name>.txt`.
#[derive(Debug, Clone)]
pub struct UmraoDirectory {
    dir: PathBuf,
}

impl UmraoDirectory {
    pub fn new<P: AsRef<Path>>(dir: P) -> UmraoDirectory {
        UmraoDirectory {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn table_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.txt"))
    }
}

impl TimeSeriesSource for UmraoDirectory {
    fn load_timeseries(&self, name: &str) -> Result<Option<TimeSeries>, CatalogError> {
        let path = self.table_path(name);
        if !path.exists() {
            trace!("No UMRAO table at {}", path.display());
            return Ok(None);
        }
        debug!("Reading UMRAO table {}", path.display());
        let mut f = BufReader::new(File::open(&path)?);
        parse_umrao_table(&mut f)
            .map(Some)
            .map_err(|err| CatalogError::Ingest { path, err })
    }
}
