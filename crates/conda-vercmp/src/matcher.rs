//! Evaluation of a single match spec atom against a version

use std::cmp::Ordering;

use crate::evr::compare_evr_impl;
use crate::pattern::{glob_match, regex_match};

/// Comparison operators accepted at the start of an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelOp {
    Less,
    LessEq,
    Greater,
    GreaterEq,
    Eq,
    NotEq,
    /// Single `=`: the operand is a prefix pattern.
    StartsWith,
    /// `!=` with a `.*` operand suffix.
    NotStartsWith,
    /// `~=`, the compatible-release operator.
    Compatible,
}

impl RelOp {
    /// Parse the operator prefix, returning the operator and its
    /// length in bytes.
    fn parse(atom: &[u8]) -> Option<(RelOp, usize)> {
        match atom[0] {
            b'=' => {
                if atom.get(1) == Some(&b'=') {
                    Some((RelOp::Eq, 2))
                } else {
                    Some((RelOp::StartsWith, 1))
                }
            }
            b'!' => (atom.get(1) == Some(&b'=')).then_some((RelOp::NotEq, 2)),
            b'~' => (atom.get(1) == Some(&b'=')).then_some((RelOp::Compatible, 2)),
            b'<' => {
                if atom.get(1) == Some(&b'=') {
                    Some((RelOp::LessEq, 2))
                } else {
                    Some((RelOp::Less, 1))
                }
            }
            b'>' => {
                if atom.get(1) == Some(&b'=') {
                    Some((RelOp::GreaterEq, 2))
                } else {
                    Some((RelOp::Greater, 1))
                }
            }
            _ => None,
        }
    }
}

fn is_op_byte(b: u8) -> bool {
    matches!(b, b'=' | b'<' | b'>' | b'!' | b'~')
}

/// Evaluate one constraint atom against a version. Malformed atoms
/// never match.
pub(crate) fn match_atom(evr: &str, atom: &str) -> bool {
    let bytes = atom.as_bytes();
    if bytes.is_empty() || atom == "*" {
        return true;
    }
    if bytes.len() >= 2 && bytes[0] == b'^' && bytes[bytes.len() - 1] == b'$' {
        return regex_match(evr, atom, false);
    }
    if is_op_byte(bytes[0]) {
        return match_relational(evr, bytes);
    }

    // a wildcard run with anything after it turns the atom into a glob
    if let Some(star) = bytes.iter().position(|&b| b == b'*') {
        let mut i = star;
        while i < bytes.len() && bytes[i] == b'*' {
            i += 1;
        }
        if i < bytes.len() {
            return glob_match(evr, atom, true);
        }
    }

    // a trailing wildcard run is a prefix match
    if bytes.len() > 1 && bytes[bytes.len() - 1] == b'*' {
        let mut end = bytes.len();
        while end > 0 && bytes[end - 1] == b'*' {
            end -= 1;
        }
        while end > 0 && bytes[end - 1] == b'.' {
            end -= 1;
        }
        return compare_evr_impl(evr.as_bytes(), &bytes[..end], true) == Ordering::Equal;
    }

    // '@' forces exact string identity
    if bytes.contains(&b'@') {
        return evr == atom;
    }

    compare_evr_impl(evr.as_bytes(), bytes, false) == Ordering::Equal
}

fn match_relational(evr: &str, atom: &[u8]) -> bool {
    let Some((mut op, oplen)) = RelOp::parse(atom) else {
        return false;
    };
    if atom.len() < oplen + 1 {
        return false;
    }
    let mut operand = &atom[oplen..];
    if is_op_byte(operand[0]) {
        return false;
    }
    if operand.len() >= 2 && operand.ends_with(b".*") {
        op = match op {
            RelOp::StartsWith | RelOp::GreaterEq => op,
            RelOp::NotEq => RelOp::NotStartsWith,
            _ => return false,
        };
        operand = &operand[..operand.len() - 2];
    }

    let evr = evr.as_bytes();
    match op {
        RelOp::Less => compare_evr_impl(evr, operand, false) == Ordering::Less,
        RelOp::LessEq => compare_evr_impl(evr, operand, false) != Ordering::Greater,
        RelOp::Greater => compare_evr_impl(evr, operand, false) == Ordering::Greater,
        RelOp::GreaterEq => compare_evr_impl(evr, operand, false) != Ordering::Less,
        RelOp::Eq => compare_evr_impl(evr, operand, false) == Ordering::Equal,
        RelOp::NotEq => compare_evr_impl(evr, operand, false) != Ordering::Equal,
        RelOp::StartsWith => compare_evr_impl(evr, operand, true) == Ordering::Equal,
        RelOp::NotStartsWith => compare_evr_impl(evr, operand, true) != Ordering::Equal,
        RelOp::Compatible => {
            // at least the operand, and sharing its prefix with the
            // last component dropped
            if compare_evr_impl(evr, operand, false) == Ordering::Less {
                return false;
            }
            match operand.iter().rposition(|&b| b == b'.') {
                Some(dot) if dot > 0 => {
                    compare_evr_impl(evr, &operand[..dot], true) == Ordering::Equal
                }
                _ => false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universal_atoms() {
        assert!(match_atom("1.2.3", ""));
        assert!(match_atom("1.2.3", "*"));
        assert!(match_atom("", "*"));
    }

    #[test]
    fn test_exact_literal() {
        assert!(match_atom("1.2.3", "1.2.3"));
        assert!(match_atom("1.2.3", "1.2.3.0"));
        assert!(match_atom("1.2.3", "1.2.3_0"));
        assert!(!match_atom("1.2.4", "1.2.3"));
        assert!(!match_atom("1.2.3", "1.2.3.1"));
    }

    #[test]
    fn test_ordering_operators() {
        assert!(match_atom("1.5", ">=1.0"));
        assert!(match_atom("1.0", ">=1.0"));
        assert!(!match_atom("0.9", ">=1.0"));
        assert!(match_atom("0.9", "<1.0"));
        assert!(!match_atom("1.0", "<1.0"));
        assert!(match_atom("1.0", "<=1.0"));
        assert!(match_atom("1.1", ">1.0"));
        assert!(!match_atom("1.0", ">1.0"));
        assert!(match_atom("1.0", "==1.0"));
        assert!(match_atom("1.0", "==1.0.0"));
        assert!(match_atom("1.1", "!=1.0"));
        assert!(!match_atom("1.0", "!=1.0"));
    }

    #[test]
    fn test_numeric_not_lexical_through_operators() {
        assert!(match_atom("1.10", ">1.9"));
        assert!(!match_atom("1.10", "<1.9"));
    }

    #[test]
    fn test_single_equal_is_prefix() {
        assert!(match_atom("1.7.1", "=1.7"));
        assert!(match_atom("1.7", "=1.7"));
        assert!(!match_atom("1.8", "=1.7"));
        // while == wants full equality
        assert!(!match_atom("1.7.1", "==1.7"));
    }

    #[test]
    fn test_dot_star_suffix() {
        assert!(match_atom("1.7.1", "=1.7.*"));
        assert!(!match_atom("1.8.0", "=1.7.*"));
        assert!(match_atom("1.8.0", "!=1.7.*"));
        assert!(!match_atom("1.7.1", "!=1.7.*"));
        assert!(match_atom("1.7.1", ">=1.7.*"));
        assert!(match_atom("2.0", ">=1.7.*"));
        // only =, >= and != accept the suffix
        assert!(!match_atom("1.7.1", "<1.8.*"));
        assert!(!match_atom("1.7.1", "<=1.8.*"));
        assert!(!match_atom("1.7.1", ">1.6.*"));
        assert!(!match_atom("1.7.1", "==1.7.*"));
    }

    #[test]
    fn test_compatible_release() {
        assert!(match_atom("1.4.5", "~=1.4.2"));
        assert!(match_atom("1.4.2", "~=1.4.2"));
        assert!(!match_atom("1.3.9", "~=1.4.2"));
        assert!(!match_atom("1.5.0", "~=1.4.2"));
        assert!(match_atom("1.7", "~=1.4"));
        assert!(!match_atom("2.0", "~=1.4"));
        // the operand needs a droppable component
        assert!(!match_atom("1.4", "~=1"));
        assert!(!match_atom("1.4", "~=.4"));
    }

    #[test]
    fn test_malformed_operators_never_match() {
        assert!(!match_atom("1.0", "="));
        assert!(!match_atom("1.0", "=="));
        assert!(!match_atom("1.0", "<"));
        assert!(!match_atom("1.0", "~1.0"));
        assert!(!match_atom("1.0", "!1.0"));
        assert!(!match_atom("1.0", "<>1.0"));
        assert!(!match_atom("1.0", "<=>1.0"));
        assert!(!match_atom("1.0", "==~1.0"));
    }

    #[test]
    fn test_regex_atom() {
        assert!(match_atom("1.7.1", r"^1\.7\.\d$"));
        assert!(!match_atom("1.8.1", r"^1\.7\.\d$"));
        // regex atoms are case sensitive
        assert!(!match_atom("1.0RC1", "^1\\.0rc1$"));
        // an unclosed pattern is a quiet no-match
        assert!(!match_atom("1.0", "^1.(0$"));
    }

    #[test]
    fn test_glob_atom() {
        assert!(match_atom("1.2.3", "1.*.3"));
        assert!(!match_atom("1.2.4", "1.*.3"));
        assert!(match_atom("1.2.3", "*.3"));
        // globs fold case
        assert!(match_atom("1.0RC1", "1.0rc*1"));
    }

    #[test]
    fn test_trailing_star_prefix() {
        assert!(match_atom("1.2.3", "1.2.*"));
        assert!(!match_atom("1.3.0", "1.2.*"));
        assert!(match_atom("1.2", "1.2.*"));
        assert!(match_atom("1.2.3", "1.2*"));
        assert!(match_atom("1.2.3", "1.2.**"));
        // a bare wildcard run reduces to an empty prefix pattern
        assert!(match_atom("1.0+x", "**"));
    }

    #[test]
    fn test_at_literal() {
        assert!(match_atom("1.0@dev", "1.0@dev"));
        assert!(!match_atom("1.0@dev0", "1.0@dev"));
        // '@' disables the looser evr comparison
        assert!(!match_atom("1.0.0@x", "1.0@x"));
    }

    #[test]
    fn test_epoch_through_operators() {
        assert!(match_atom("1!1.0", ">2.0"));
        assert!(!match_atom("1!1.0", "<2.0"));
        assert!(match_atom("1!1.0", "==1!1.0"));
    }
}
