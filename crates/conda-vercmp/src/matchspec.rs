//! Compound match spec expressions
//!
//! An expression combines constraint atoms with `,` (AND), `|` (OR)
//! and parentheses, e.g. `>=1.0,<2.0|>=2.5`. AND binds tighter than
//! OR. Malformed expressions never match and never panic.

use std::fmt;

use crate::matcher::match_atom;

/// Evaluate the expression starting at `*pos`, leaving `*pos` on the
/// closing `)` or at the end of input. `None` signals a parse
/// failure.
fn eval(evr: &str, expr: &str, pos: &mut usize) -> Option<bool> {
    let bytes = expr.as_bytes();
    if *pos == bytes.len() {
        return None;
    }
    let mut any = false;
    // None until the first atom of the current AND group lands
    let mut all: Option<bool> = None;
    loop {
        let v = match bytes.get(*pos).copied() {
            // a trailing ',' or '|' leaves an empty atom, which
            // matches everything
            None => {
                if all.map_or(any, |a| !a) {
                    false
                } else {
                    match_atom(evr, "")
                }
            }
            Some(b'(') => {
                *pos += 1;
                let v = eval(evr, expr, pos)?;
                if bytes.get(*pos) != Some(&b')') {
                    return None;
                }
                *pos += 1;
                v
            }
            Some(b')') | Some(b'|') | Some(b',') => return None,
            Some(_) => {
                let start = *pos;
                while *pos < bytes.len() && !matches!(bytes[*pos], b'(' | b')' | b'|' | b',') {
                    *pos += 1;
                }
                // the atom is always parsed, but the matcher is only
                // invoked while the result is still undecided
                if all.map_or(any, |a| !a) {
                    false
                } else {
                    match_atom(evr, &expr[start..*pos])
                }
            }
        };
        match bytes.get(*pos).copied() {
            None | Some(b')') => return Some(any | all.map_or(v, |a| a & v)),
            Some(b',') => all = Some(all.map_or(v, |a| a & v)),
            Some(b'|') => {
                any |= all.map_or(v, |a| a & v);
                all = None;
            }
            Some(_) => return None,
        }
        *pos += 1;
    }
}

/// Test whether a version satisfies a match spec expression.
///
/// Returns `false` for any malformed expression, and for a
/// well-formed prefix followed by trailing garbage. The empty
/// expression matches every version.
///
/// ```
/// use conda_vercmp::match_version;
///
/// assert!(match_version("1.5", ">=1.0,<2.0"));
/// assert!(match_version("2.5", ">=1.0,<2.0|>=2.5"));
/// assert!(!match_version("2.1", ">=1.0,<2.0|>=2.5"));
/// assert!(!match_version("1.0", "(1.0"));
/// ```
pub fn match_version(evr: &str, spec: &str) -> bool {
    if spec.is_empty() {
        return true;
    }
    let mut pos = 0;
    matches!(eval(evr, spec, &mut pos), Some(true) if pos == spec.len())
}

/// A match spec expression held for repeated evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpec {
    spec: String,
}

impl MatchSpec {
    pub fn new(spec: impl Into<String>) -> Self {
        MatchSpec { spec: spec.into() }
    }

    /// Test a version against this spec.
    pub fn matches(&self, evr: &str) -> bool {
        match_version(evr, &self.spec)
    }

    /// Return the versions that satisfy this spec, keeping their
    /// original order.
    pub fn satisfied_by<'a>(&self, versions: &[&'a str]) -> Vec<&'a str> {
        versions
            .iter()
            .copied()
            .filter(|v| self.matches(v))
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.spec
    }
}

impl fmt::Display for MatchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec)
    }
}

impl From<&str> for MatchSpec {
    fn from(spec: &str) -> Self {
        MatchSpec::new(spec)
    }
}
