//! Line splitting and locale-tolerant decimal parsing
//!
//! Historian exports are semicolon-delimited with a locale-dependent decimal
//! separator (usually `,`). Values are parsed with numeric-prefix semantics:
//! leading whitespace is skipped and trailing garbage after a valid number
//! is ignored, matching the stream extraction the exports were written
//! against.

/// Split a line into fields on every occurrence of `delimiter`.
///
/// Empty fields between consecutive delimiters are preserved as empty
/// strings. No whitespace trimming.
pub fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter).collect()
}

/// Parse a decimal number, tolerating `decimal_separator` as the fractional
/// separator.
///
/// If the separator is `.` the text is parsed directly. Otherwise the first
/// occurrence of the separator is substituted with `.` before parsing; when
/// the separator is absent the text is parsed as-is, so `.`-formatted input
/// is accepted regardless of the configured separator.
///
/// Returns `None` when no numeric prefix is present; the zero-fallback
/// policy for that case belongs to the caller.
pub fn parse_decimal(text: &str, decimal_separator: char) -> Option<f64> {
    if decimal_separator == '.' {
        return parse_number_prefix(text);
    }

    match text.find(decimal_separator) {
        None => parse_number_prefix(text),
        Some(i) => {
            let mut substituted = text.to_string();
            substituted.replace_range(i..i + decimal_separator.len_utf8(), ".");
            parse_number_prefix(&substituted)
        }
    }
}

/// Parse the longest valid numeric prefix of `text` as an f64.
///
/// Accepts an optional sign, integer and/or fractional digits, and an
/// optional exponent; anything after the prefix is ignored. `None` if no
/// valid prefix exists (e.g. empty text, bare `.`, bare sign).
fn parse_number_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let is_digit = |b: Option<&u8>| b.is_some_and(|b| b.is_ascii_digit());
    let is_sign = |b: Option<&u8>| matches!(b, Some(&b'+') | Some(&b'-'));

    let mut i = 0;
    if is_sign(bytes.first()) {
        i += 1;
    }

    let mut end = 0;
    let mut any_digit = false;
    while is_digit(bytes.get(i)) {
        i += 1;
        any_digit = true;
    }
    if any_digit {
        end = i;
    }

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let mut frac_digit = false;
        while is_digit(bytes.get(i)) {
            i += 1;
            frac_digit = true;
        }
        // "12." and ".5" are valid prefixes, "." alone is not
        if any_digit || frac_digit {
            end = i;
            any_digit = true;
        }
    }

    if any_digit && matches!(bytes.get(i), Some(&b'e') | Some(&b'E')) {
        let mut j = i + 1;
        if is_sign(bytes.get(j)) {
            j += 1;
        }
        let mut exp_digit = false;
        while is_digit(bytes.get(j)) {
            j += 1;
            exp_digit = true;
        }
        // incomplete exponent ("1e", "1e+") keeps the mantissa only
        if exp_digit {
            end = j;
        }
    }

    if end == 0 {
        return None;
    }
    trimmed[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_preserves_empty_fields() {
        assert_eq!(split_fields("a;;b", ';'), vec!["a", "", "b"]);
        assert_eq!(split_fields(";x", ';'), vec!["", "x"]);
        assert_eq!(split_fields("", ';'), vec![""]);
    }

    #[test]
    fn test_split_no_trimming() {
        assert_eq!(split_fields(" a ; b ", ';'), vec![" a ", " b "]);
    }

    #[test]
    fn test_comma_separator() {
        assert_eq!(parse_decimal("12,5", ','), Some(12.5));
        assert_eq!(parse_decimal("-0,25", ','), Some(-0.25));
    }

    #[test]
    fn test_dot_separator() {
        assert_eq!(parse_decimal("12.5", '.'), Some(12.5));
        assert_eq!(parse_decimal("42", '.'), Some(42.0));
    }

    #[test]
    fn test_absent_separator_falls_back_to_direct_parse() {
        // '.'-formatted input still parses when ',' is configured
        assert_eq!(parse_decimal("12.5", ','), Some(12.5));
        assert_eq!(parse_decimal("42", ','), Some(42.0));
    }

    #[test]
    fn test_only_first_separator_substituted() {
        assert_eq!(parse_decimal("1,2,3", ','), Some(1.2));
    }

    #[test]
    fn test_prefix_semantics() {
        assert_eq!(parse_decimal("  12.5abc", '.'), Some(12.5));
        assert_eq!(parse_decimal("3,14 m3/h", ','), Some(3.14));
        assert_eq!(parse_decimal("1e3", '.'), Some(1000.0));
        assert_eq!(parse_decimal("1e", '.'), Some(1.0));
        assert_eq!(parse_decimal("12.", '.'), Some(12.0));
        assert_eq!(parse_decimal(".5", '.'), Some(0.5));
    }

    #[test]
    fn test_non_numeric_yields_none() {
        assert_eq!(parse_decimal("", ','), None);
        assert_eq!(parse_decimal("abc", ','), None);
        assert_eq!(parse_decimal(".", '.'), None);
        assert_eq!(parse_decimal("-", ','), None);
        assert_eq!(parse_decimal(",", ','), None);
    }
}
