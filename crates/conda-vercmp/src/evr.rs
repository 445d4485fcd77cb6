//! Epoch / version / local-version splitting and comparison

use std::cmp::Ordering;

use crate::segment::compare_segments;

/// Length of a leading epoch: a non-empty run of digits immediately
/// followed by `!`.
fn epoch_end(evr: &[u8]) -> Option<usize> {
    let n = evr.iter().position(|b| !b.is_ascii_digit())?;
    (n > 0 && evr[n] == b'!').then_some(n)
}

/// Compare two full evr strings, optionally treating `evr2` as a
/// prefix pattern.
pub(crate) fn compare_evr_impl(evr1: &[u8], evr2: &[u8], startswith: bool) -> Ordering {
    let epoch1 = epoch_end(evr1);
    let epoch2 = epoch_end(evr2);
    let (mut v1, mut v2) = (evr1, evr2);
    if epoch1.is_some() || epoch2.is_some() {
        // a missing epoch counts as 0
        let e1 = epoch1.map_or(&b"0"[..], |n| &evr1[..n]);
        let e2 = epoch2.map_or(&b"0"[..], |n| &evr2[..n]);
        let r = compare_segments(e1, e2, false);
        if r != Ordering::Equal {
            return r;
        }
        if let Some(n) = epoch1 {
            v1 = &evr1[n + 1..];
        }
        if let Some(n) = epoch2 {
            v2 = &evr2[n + 1..];
        }
    }

    // the last '+' delimits the local version
    let local1 = v1.iter().rposition(|&b| b == b'+');
    let local2 = v2.iter().rposition(|&b| b == b'+');
    let body1 = local1.map_or(v1, |i| &v1[..i]);
    let body2 = local2.map_or(v2, |i| &v2[..i]);
    // a pattern without a local part applies the prefix check to the
    // version body itself
    let body_prefix = local2.is_none() && startswith;
    let r = compare_segments(body1, body2, body_prefix);
    if r != Ordering::Equal {
        return r;
    }
    match (local1, local2) {
        (_, None) if startswith => Ordering::Equal,
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(i), Some(j)) => compare_segments(&v1[i + 1..], &v2[j + 1..], startswith),
    }
}

/// Compare two conda version strings.
///
/// Implements the conda ordering over epoch, version and local
/// version. Total over arbitrary input; ties are exact.
///
/// ```
/// use std::cmp::Ordering;
///
/// assert_eq!(conda_vercmp::compare_evr("1.9", "1.10"), Ordering::Less);
/// assert_eq!(conda_vercmp::compare_evr("1!1.0", "2.0"), Ordering::Greater);
/// ```
pub fn compare_evr(evr1: &str, evr2: &str) -> Ordering {
    compare_evr_impl(evr1.as_bytes(), evr2.as_bytes(), false)
}
