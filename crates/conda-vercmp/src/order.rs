//! Validated version strings with a total order
//!
//! The comparison engine is total over arbitrary bytes; `VersionOrder`
//! adds the validation the package index applies before storing a
//! version, so that typos surface as errors instead of sorting in odd
//! places.

use std::cmp::Ordering;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::evr::{compare_evr, compare_evr_impl};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidVersionError {
    #[error("Invalid version '{0}': empty version string")]
    Empty(String),
    #[error("Invalid version '{0}': invalid character(s)")]
    InvalidCharacters(String),
    #[error("Invalid version '{0}': epoch must be an integer")]
    BadEpoch(String),
    #[error("Invalid version '{0}': duplicated epoch separator '!'")]
    DuplicatedEpoch(String),
    #[error("Invalid version '{0}': duplicated local version separator '+'")]
    DuplicatedLocal(String),
    #[error("Invalid version '{0}': empty version component")]
    EmptyComponent(String),
}

lazy_static! {
    // lower case is established before this check runs
    static ref VERSION_CHECK_RE: Regex = Regex::new(r"^[\*\.\+!_0-9a-z]+$").unwrap();
}

/// A validated, normalized version string.
///
/// Normalization trims surrounding whitespace, folds to lower case
/// and, when the string carries dashes but no underscores, rewrites
/// dashes to underscores. Ordering and equality follow
/// [`compare_evr`], so `VersionOrder::new("1.1")? ==
/// VersionOrder::new("1.1.0")?`.
#[derive(Debug, Clone)]
pub struct VersionOrder {
    raw: String,
    normalized: String,
}

impl VersionOrder {
    pub fn new(vstr: &str) -> Result<Self, InvalidVersionError> {
        let mut version = vstr.trim().to_ascii_lowercase();
        if version.is_empty() {
            return Err(InvalidVersionError::Empty(vstr.to_string()));
        }
        if !VERSION_CHECK_RE.is_match(&version) {
            // dashes are tolerated as long as no underscore competes
            if version.contains('-') && !version.contains('_') {
                version = version.replace('-', "_");
            }
            if !VERSION_CHECK_RE.is_match(&version) {
                return Err(InvalidVersionError::InvalidCharacters(vstr.to_string()));
            }
        }

        let body = match version.split_once('!') {
            None => version.as_str(),
            Some((epoch, body)) => {
                if body.contains('!') {
                    return Err(InvalidVersionError::DuplicatedEpoch(vstr.to_string()));
                }
                if epoch.is_empty() || !epoch.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(InvalidVersionError::BadEpoch(vstr.to_string()));
                }
                body
            }
        };
        let (main, local) = match body.split_once('+') {
            None => (body, None),
            Some((main, local)) => {
                if local.contains('+') {
                    return Err(InvalidVersionError::DuplicatedLocal(vstr.to_string()));
                }
                (main, Some(local))
            }
        };
        Self::check_components(main, vstr)?;
        if let Some(local) = local {
            Self::check_components(local, vstr)?;
        }

        Ok(VersionOrder {
            raw: vstr.to_string(),
            normalized: version,
        })
    }

    /// Reject empty dot/underscore components. One trailing
    /// underscore sticks to the last component (openssl-style
    /// version strings).
    fn check_components(part: &str, vstr: &str) -> Result<(), InvalidVersionError> {
        let body = part.strip_suffix('_').unwrap_or(part);
        if body.is_empty() || body.split(['.', '_']).any(str::is_empty) {
            return Err(InvalidVersionError::EmptyComponent(vstr.to_string()));
        }
        Ok(())
    }

    /// The version as given, before normalization.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Whether `self` matches `other` up to the end of `other`, e.g.
    /// `1.2.3` starts with `1.2`.
    pub fn starts_with(&self, other: &VersionOrder) -> bool {
        compare_evr_impl(
            self.normalized.as_bytes(),
            other.normalized.as_bytes(),
            true,
        ) == Ordering::Equal
    }
}

impl fmt::Display for VersionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl PartialEq for VersionOrder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionOrder {}

impl PartialOrd for VersionOrder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionOrder {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_evr(&self.normalized, &other.normalized)
    }
}

/// Sort version strings in ascending order. Strings that fail
/// validation are dropped; the original spellings are returned.
pub fn sort(versions: &[&str]) -> Vec<String> {
    usort(versions, true)
}

/// Sort version strings in descending order.
pub fn rsort(versions: &[&str]) -> Vec<String> {
    usort(versions, false)
}

fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
    let mut parsed: Vec<VersionOrder> = versions
        .iter()
        .filter_map(|v| VersionOrder::new(v).ok())
        .collect();
    parsed.sort_by(|a, b| {
        let ord = a.cmp(b);
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
    parsed.into_iter().map(|v| v.raw).collect()
}
