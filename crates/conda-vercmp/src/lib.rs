//! Conda-compatible version ordering and match spec evaluation
//!
//! This crate orders version strings under the conda versioning
//! scheme (epoch `!`, dot/dash/underscore segments, `dev`/`post`
//! special tokens, `+` local versions) and evaluates match spec
//! expressions such as `>=1.0,<2.0|>=2.5` against them.
//!
//! ```
//! use std::cmp::Ordering;
//! use conda_vercmp::{compare_evr, match_version};
//!
//! assert_eq!(compare_evr("1.9", "1.10"), Ordering::Less);
//! assert_eq!(compare_evr("1!1.0", "2.0"), Ordering::Greater);
//! assert!(match_version("1.2.3", "1.2.*"));
//! assert!(match_version("1.5", ">=1.0,<2.0"));
//! ```
//!
//! Matching never fails: malformed expressions and patterns simply
//! do not match.

mod evr;
mod matcher;
mod matchspec;
mod order;
mod pattern;
mod segment;

pub use evr::compare_evr;
pub use matchspec::{match_version, MatchSpec};
pub use order::{rsort, sort, InvalidVersionError, VersionOrder};
