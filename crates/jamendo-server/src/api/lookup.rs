//! Declarative identification precedence for show pages.

use std::collections::HashMap;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Local integer primary key.
    PrimaryKey,
    /// Integer id assigned by the remote catalog.
    ExternalId,
    /// MusicBrainz id.
    AlternateId,
    /// A unique string column such as a country code or tag name.
    NaturalKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    pub param: &'static str,
    pub strategy: Strategy,
}

impl Lookup {
    pub const fn new(param: &'static str, strategy: Strategy) -> Self {
        Self { param, strategy }
    }
}

pub const ARTIST: &[Lookup] = &[
    Lookup::new("pk", Strategy::PrimaryKey),
    Lookup::new("juid", Strategy::ExternalId),
    Lookup::new("mbgid", Strategy::AlternateId),
];

pub const ALBUM: &[Lookup] = ARTIST;

pub const COUNTRY: &[Lookup] = &[
    Lookup::new("code", Strategy::NaturalKey),
    Lookup::new("juid", Strategy::ExternalId),
];

pub const CITY: &[Lookup] = &[
    Lookup::new("pk", Strategy::PrimaryKey),
    Lookup::new("juid", Strategy::ExternalId),
];

pub const LICENSE: &[Lookup] = CITY;

pub const TAG: &[Lookup] = &[Lookup::new("tag", Strategy::NaturalKey)];

/// The identifier picked from the route parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier<'a> {
    pub param: &'static str,
    pub strategy: Strategy,
    pub value: &'a str,
}

impl Identifier<'_> {
    /// `None` when the value is not an integer; such a key can never match.
    pub fn as_int(&self) -> Option<i32> {
        self.value.trim().parse().ok()
    }
}

/// Pick the first lookup whose parameter is present and non-empty.
pub fn identify<'a>(
    lookups: &[Lookup],
    params: &'a HashMap<String, String>,
) -> Result<Identifier<'a>, ApiError> {
    lookups
        .iter()
        .find_map(|lookup| {
            params
                .get(lookup.param)
                .filter(|value| !value.is_empty())
                .map(|value| Identifier {
                    param: lookup.param,
                    strategy: lookup.strategy,
                    value: value.as_str(),
                })
        })
        .ok_or_else(|| {
            let expected: Vec<&str> = lookups.iter().map(|l| l.param).collect();
            ApiError::BadRequest(format!(
                "no identifying parameter supplied; expected one of {}",
                expected.join(", ")
            ))
        })
}
