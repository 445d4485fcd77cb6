//! Token-level comparison of version strings
//!
//! Versions are split at `.`, `-` and `_` into segments, and each
//! segment into maximal runs of digits, asterisks or other bytes.
//! Numeric runs compare as unbounded integers, everything else
//! case-insensitively, with `post` and `dev` given special weight.

use std::cmp::Ordering;

pub(crate) fn is_separator(b: u8) -> bool {
    matches!(b, b'.' | b'-' | b'_')
}

/// End of the current segment: the next separator, or `end`.
fn segment_end(bytes: &[u8], mut pos: usize, end: usize) -> usize {
    while pos < end && !is_separator(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// End of the current part: a maximal run of digits, of `*`, or of
/// anything else. A part never mixes the three classes.
fn part_end(bytes: &[u8], pos: usize, end: usize) -> usize {
    if pos == end {
        return pos;
    }
    let mut i = pos + 1;
    if bytes[pos].is_ascii_digit() {
        while i < end && bytes[i].is_ascii_digit() {
            i += 1;
        }
    } else if bytes[pos] == b'*' {
        while i < end && bytes[i] == b'*' {
            i += 1;
        }
    } else {
        while i < end && !bytes[i].is_ascii_digit() && bytes[i] != b'*' {
            i += 1;
        }
    }
    i
}

fn is_token(bytes: &[u8], start: usize, end: usize, token: &[u8]) -> bool {
    end - start == token.len() && bytes[start..end].eq_ignore_ascii_case(token)
}

/// Numeric comparison without integer conversion: strip leading
/// zeros, then a longer run of significant digits wins, then the
/// digits themselves decide.
fn compare_numeric(
    v1: &[u8],
    mut s1: usize,
    e1: usize,
    v2: &[u8],
    mut s2: usize,
    e2: usize,
) -> Ordering {
    while s1 < e1 && v1[s1] == b'0' {
        s1 += 1;
    }
    while s2 < e2 && v2[s2] == b'0' {
        s2 += 1;
    }
    match (e1 - s1).cmp(&(e2 - s2)) {
        Ordering::Equal => v1[s1..e1].cmp(&v2[s2..e2]),
        ord => ord,
    }
}

fn compare_alpha(a: &[u8], b: &[u8]) -> Ordering {
    let n = a.len().min(b.len());
    for i in 0..n {
        let (x, y) = (a[i].to_ascii_lowercase(), b[i].to_ascii_lowercase());
        if x != y {
            return x.cmp(&y);
        }
    }
    a.len().cmp(&b.len())
}

/// Compare two version bodies segment by segment.
///
/// With `startswith` set, `v2` is a prefix pattern: the comparison
/// reports equality as soon as the pattern (minus trailing
/// separators) is fully consumed.
pub(crate) fn compare_segments(v1: &[u8], v2: &[u8], startswith: bool) -> Ordering {
    let (end1, end2) = (v1.len(), v2.len());
    let (mut p1, mut p2) = (0, 0);
    // in prefix mode the pattern ends at its last non-separator byte
    let lim2 = if startswith {
        let mut e = end2;
        while e > 0 && is_separator(v2[e - 1]) {
            e -= 1;
        }
        Some(e)
    } else {
        None
    };
    loop {
        while p1 < end1 && is_separator(v1[p1]) {
            p1 += 1;
        }
        while p2 < end2 && is_separator(v2[p2]) {
            p2 += 1;
        }
        if p1 == end1 && p2 == end2 {
            return Ordering::Equal;
        }
        if startswith && p2 == end2 {
            return Ordering::Equal;
        }
        let s1e = segment_end(v1, p1, end1);
        let s2e = segment_end(v2, p2, end2);

        let mut first = true;
        while p1 != s1e || p2 != s2e {
            if lim2 == Some(p2) {
                return Ordering::Equal;
            }
            let mut e1 = part_end(v1, p1, s1e);
            let mut e2 = part_end(v2, p2, s2e);
            // a segment conceptually starts with a numeral; a leading
            // non-numeric part gets an empty numeral in front of it,
            // so that 1.1.a1 sorts like 1.1.0a1
            if first {
                if e1 != p1 && !v1[p1].is_ascii_digit() {
                    e1 = p1;
                }
                if e2 != p2 && !v2[p2].is_ascii_digit() {
                    e2 = p2;
                }
            }
            if is_token(v1, p1, e1, b"post") {
                if !is_token(v2, p2, e2, b"post") {
                    // post outranks any other part
                    return Ordering::Greater;
                }
            } else if is_token(v2, p2, e2, b"post") {
                return Ordering::Less;
            } else {
                let numeric1 = p1 == e1 || v1[p1].is_ascii_digit();
                let numeric2 = p2 == e2 || v2[p2].is_ascii_digit();
                if first || (numeric1 && numeric2) {
                    let r = compare_numeric(v1, p1, e1, v2, p2, e2);
                    if r != Ordering::Equal {
                        return r;
                    }
                } else if numeric1 {
                    // a missing or numeric part outranks letters:
                    // 1.0 > 1.0a
                    return Ordering::Greater;
                } else if numeric2 {
                    return Ordering::Less;
                } else if v2[p2] != b'*' && is_token(v1, p1, e1, b"dev") {
                    // dev sorts below everything except a wildcard
                    if !is_token(v2, p2, e2, b"dev") {
                        return Ordering::Less;
                    }
                } else if v1[p1] != b'*' && is_token(v2, p2, e2, b"dev") {
                    return Ordering::Greater;
                } else {
                    let r = compare_alpha(&v1[p1..e1], &v2[p2..e2]);
                    if r != Ordering::Equal {
                        return r;
                    }
                }
            }
            p1 = e1;
            p2 = e2;
            first = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(a: &str, b: &str) -> Ordering {
        compare_segments(a.as_bytes(), b.as_bytes(), false)
    }

    fn prefix(a: &str, b: &str) -> bool {
        compare_segments(a.as_bytes(), b.as_bytes(), true) == Ordering::Equal
    }

    #[test]
    fn test_numeric_not_lexical() {
        assert_eq!(cmp("1.9", "1.10"), Ordering::Less);
        assert_eq!(cmp("0.960923", "1.0"), Ordering::Less);
        assert_eq!(cmp("10", "9"), Ordering::Greater);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(cmp("1.01", "1.1"), Ordering::Equal);
        assert_eq!(cmp("1.007", "1.7"), Ordering::Equal);
        assert_eq!(cmp("1.010", "1.9"), Ordering::Greater);
    }

    #[test]
    fn test_huge_numbers_do_not_overflow() {
        assert_eq!(
            cmp("99999999999999999999999", "100000000000000000000000"),
            Ordering::Less
        );
        assert_eq!(
            cmp("340282366920938463463374607431768211456", "2"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_separators_are_equivalent() {
        assert_eq!(cmp("0.5_5", "0.5-5"), Ordering::Equal);
        assert_eq!(cmp("1.0", "1_0"), Ordering::Equal);
        assert_eq!(cmp("1-0", "1.0"), Ordering::Equal);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(cmp("1.0RC1", "1.0rc1"), Ordering::Equal);
        assert_eq!(cmp("0.5C1", "0.5c1"), Ordering::Equal);
        assert_eq!(cmp("1.0ALPHA", "1.0beta"), Ordering::Less);
    }

    #[test]
    fn test_letters_sort_before_release() {
        assert_eq!(cmp("1.0a1", "1.0"), Ordering::Less);
        assert_eq!(cmp("1.0", "1.0a"), Ordering::Greater);
        assert_eq!(cmp("1.0a1", "1.0b1"), Ordering::Less);
    }

    #[test]
    fn test_implicit_leading_zero() {
        // 1.1.a1 sorts like 1.1.0a1
        assert_eq!(cmp("1.1.a1", "1.1.0a1"), Ordering::Equal);
        assert_eq!(cmp("1.1.a1", "1.1.1a1"), Ordering::Less);
    }

    #[test]
    fn test_post_token() {
        assert_eq!(cmp("1.0post", "1.0"), Ordering::Greater);
        assert_eq!(cmp("1.0post1", "1.0z"), Ordering::Greater);
        assert_eq!(cmp("1.0post1", "1.0post2"), Ordering::Less);
        assert_eq!(cmp("1.0POST1", "1.0post1"), Ordering::Equal);
    }

    #[test]
    fn test_dev_token() {
        assert_eq!(cmp("1.0dev", "1.0a"), Ordering::Less);
        assert_eq!(cmp("1.0dev1", "1.0dev2"), Ordering::Less);
        assert_eq!(cmp("1.0DEV", "1.0dev"), Ordering::Equal);
        // the wildcard is the only thing below dev
        assert_eq!(cmp("1.0dev", "1.0*"), Ordering::Greater);
    }

    #[test]
    fn test_startswith_mode() {
        assert!(prefix("1.2.3", "1.2"));
        assert!(prefix("1.2.3", "1.2."));
        assert!(prefix("0.4.1p1", "0.4.1p"));
        assert!(prefix("0.4.1p1", "0.4"));
        assert!(!prefix("0.4.1p1", "0.4.1q1"));
        assert!(!prefix("0.4", "0.4.1"));
        assert!(prefix("1.2.3", ""));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(cmp("", ""), Ordering::Equal);
        assert_eq!(cmp("", "1"), Ordering::Less);
        assert_eq!(cmp("1", ""), Ordering::Greater);
    }
}
