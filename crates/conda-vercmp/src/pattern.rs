//! Regex and glob matching for match spec atoms

use regex::RegexBuilder;

/// Match `evr` against a regular expression. A pattern that fails to
/// compile matches nothing.
pub(crate) fn regex_match(evr: &str, pattern: &str, case_insensitive: bool) -> bool {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map(|re| re.is_match(evr))
        .unwrap_or(false)
}

/// Match `evr` against a glob: `*` matches any run of characters,
/// `.` and `+` are literal, the whole string must match.
pub(crate) fn glob_match(evr: &str, glob: &str, case_insensitive: bool) -> bool {
    let mut pattern = String::with_capacity(glob.len() * 2 + 2);
    pattern.push('^');
    for c in glob.chars() {
        match c {
            '*' => pattern.push_str(".*"),
            '.' | '+' => {
                pattern.push('\\');
                pattern.push(c);
            }
            _ => pattern.push(c),
        }
    }
    pattern.push('$');
    regex_match(evr, &pattern, case_insensitive)
}
