// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Source-name classification and resolution.
//!
//! Calibrators are known by many names. The catalog is keyed by J2000 IAU
//! names (e.g. "1331+305"), but users may supply a B1950 IAU name
//! ("B1328+307"), a 3C designation ("3C286"), a planet ("Jupiter") or a bare
//! fragment without any prefix. IAU names may also be truncated or carry more
//! declination precision than the catalog, so these are matched
//! approximately.

mod error;

pub use error::NameError;

use std::str::FromStr;

use log::{debug, trace};

use crate::{
    catalog::CatalogStore,
    constants::{IAU_DEC_TOLERANCE, IAU_NAME_LENGTH},
    planets::Planet,
};

/// What kind of name a user has supplied. The IAU-name variants hold the name
/// without its prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceNameKind {
    Planet(Planet),

    /// A J2000 IAU name (without the "J").
    JName(String),

    /// A B1950 IAU name (without the "B").
    BName(String),

    /// A normalised 3C designation, e.g. "3C286".
    Designation3C(String),

    /// A fragment that could be in either IAU name space.
    Ambiguous(String),
}

impl SourceNameKind {
    /// Classify a free-form source name. Classification never fails; whether
    /// the name means anything is determined when it is resolved.
    pub fn classify(name: &str) -> SourceNameKind {
        let name = name.trim();
        if let Ok(planet) = Planet::from_str(name) {
            return SourceNameKind::Planet(planet);
        }
        if name
            .get(..2)
            .map(|p| p.eq_ignore_ascii_case("3c"))
            .unwrap_or(false)
        {
            return SourceNameKind::Designation3C(normalise_3c(name));
        }

        // Only a digit after the prefix makes an IAU name; "BL Lac" is not one.
        let mut chars = name.chars();
        let prefix = chars.next();
        let fragment = chars.as_str().trim();
        let is_iau = fragment
            .chars()
            .next()
            .map(|c| c.is_ascii_digit())
            .unwrap_or(false);
        match prefix {
            Some('j' | 'J') if is_iau => SourceNameKind::JName(fragment.to_string()),
            Some('b' | 'B') if is_iau => SourceNameKind::BName(fragment.to_string()),
            _ => SourceNameKind::Ambiguous(name.to_string()),
        }
    }
}

/// The IAU name space (or catalog) in which a source name was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum NameSpace {
    #[strum(serialize = "J2000")]
    J2000,

    #[strum(serialize = "B1950")]
    B1950,

    #[strum(serialize = "3C")]
    ThreeC,
}

/// The outcome of resolving a source name against a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    /// The canonical catalog key (J2000 name without the "J").
    pub jname: String,

    /// The catalogued name that was matched, in its own name space (without
    /// any prefix, except for 3C designations).
    pub matched: String,

    pub matched_as: NameSpace,
}

impl ResolvedName {
    /// The matched name as a user would write it, e.g. "B1328+307".
    pub fn display_matched(&self) -> String {
        match self.matched_as {
            NameSpace::J2000 => format!("J{}", self.matched),
            NameSpace::B1950 => format!("B{}", self.matched),
            NameSpace::ThreeC => self.matched.clone(),
        }
    }
}

/// Normalise a 3C designation: remove whitespace and use upper case, so that
/// "3c 286" becomes "3C286".
pub fn normalise_3c(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Split an IAU name (without prefix) into its right ascension, declination
/// sign and declination digits, e.g. "1331+305" -> ("1331", '+', "305").
/// `None` is returned if there is no sign, or either side is not all digits.
pub fn iau_name_parts(name: &str) -> Option<(&str, char, &str)> {
    let sign_pos = name.find(['+', '-'])?;
    let (ra, rest) = name.split_at(sign_pos);
    let mut rest_chars = rest.chars();
    let sign = rest_chars.next()?;
    let dec = rest_chars.as_str();
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if all_digits(ra) && all_digits(dec) {
        Some((ra, sign, dec))
    } else {
        None
    }
}

/// Find the first of `keys` that matches an IAU name fragment. A fragment of
/// the complete length must match exactly. Otherwise, a key matches if its
/// right ascension and declination sign are identical, and its declination
/// scaled to the fragment's precision (or vice versa) rounds to within
/// [`IAU_DEC_TOLERANCE`] of the fragment's declination.
///
/// An error is returned only if an incomplete fragment is malformed.
pub fn match_iau_name<'a, I>(fragment: &str, keys: I) -> Result<Option<&'a str>, NameError>
where
    I: IntoIterator<Item = &'a str>,
{
    let missing = IAU_NAME_LENGTH as i32 - fragment.len() as i32;
    if missing == 0 {
        return Ok(keys.into_iter().find(|&k| k == fragment));
    }

    let (ra, sign, dec) =
        iau_name_parts(fragment).ok_or_else(|| NameError::Malformed(fragment.to_string()))?;
    let dec: i64 = dec
        .parse()
        .map_err(|_| NameError::Malformed(fragment.to_string()))?;
    let scale = 10_f64.powi(missing.abs());

    for key in keys {
        let (key_ra, key_sign, key_dec) = match iau_name_parts(key) {
            Some(p) => p,
            None => continue,
        };
        if key_ra != ra || key_sign != sign {
            continue;
        }
        let key_dec: i64 = match key_dec.parse() {
            Ok(d) => d,
            Err(_) => continue,
        };

        let diff = if missing > 0 {
            // The fragment is shorter; round the key's declination down to
            // the fragment's precision.
            dec - (key_dec as f64 / scale).round() as i64
        } else {
            (dec as f64 / scale).round() as i64 - key_dec
        };
        trace!("{fragment} vs. {key}: declination difference {diff}");
        if diff.abs() < IAU_DEC_TOLERANCE {
            debug!("Approximately matched {fragment} to {key}");
            return Ok(Some(key));
        }
    }
    Ok(None)
}

/// Resolve a free-form source name to a catalog record.
pub fn resolve_name(catalog: &CatalogStore, name: &str) -> Result<ResolvedName, NameError> {
    resolve_kind(catalog, &SourceNameKind::classify(name))
}

/// Resolve an already-classified source name to a catalog record. Planets are
/// never catalogued, so they are always unresolved here.
///
/// Ambiguous fragments are tried against J2000 names before B1950 names. A
/// malformed ambiguous fragment is unresolved, whereas a malformed fragment
/// with an explicit "J" or "B" prefix is malformed.
pub fn resolve_kind(
    catalog: &CatalogStore,
    kind: &SourceNameKind,
) -> Result<ResolvedName, NameError> {
    match kind {
        SourceNameKind::Planet(p) => Err(NameError::Unresolved(p.to_string())),

        SourceNameKind::JName(fragment) => {
            resolve_jname(catalog, fragment)?.ok_or_else(|| unresolved('J', fragment))
        }

        SourceNameKind::BName(fragment) => {
            resolve_bname(catalog, fragment)?.ok_or_else(|| unresolved('B', fragment))
        }

        SourceNameKind::Designation3C(designation) => catalog
            .jname_for_3c(designation)
            .map(|jname| {
                debug!("{designation} is J{jname}");
                ResolvedName {
                    jname: jname.to_string(),
                    matched: designation.clone(),
                    matched_as: NameSpace::ThreeC,
                }
            })
            .ok_or_else(|| NameError::Unresolved(designation.clone())),

        SourceNameKind::Ambiguous(fragment) => {
            if let Ok(Some(r)) = resolve_jname(catalog, fragment) {
                return Ok(r);
            }
            if let Ok(Some(r)) = resolve_bname(catalog, fragment) {
                return Ok(r);
            }
            Err(NameError::Unresolved(fragment.clone()))
        }
    }
}

fn unresolved(prefix: char, fragment: &str) -> NameError {
    NameError::Unresolved(format!("{prefix}{fragment}"))
}

fn resolve_jname(
    catalog: &CatalogStore,
    fragment: &str,
) -> Result<Option<ResolvedName>, NameError> {
    Ok(
        match_iau_name(fragment, catalog.jnames())?.map(|jname| ResolvedName {
            jname: jname.to_string(),
            matched: jname.to_string(),
            matched_as: NameSpace::J2000,
        }),
    )
}

fn resolve_bname(
    catalog: &CatalogStore,
    fragment: &str,
) -> Result<Option<ResolvedName>, NameError> {
    let bname = match match_iau_name(fragment, catalog.bnames())? {
        Some(b) => b,
        None => return Ok(None),
    };
    Ok(catalog.jname_for_bname(bname).map(|jname| {
        debug!("B{bname} is J{jname}");
        ResolvedName {
            jname: jname.to_string(),
            matched: bname.to_string(),
            matched_as: NameSpace::B1950,
        }
    }))
}
