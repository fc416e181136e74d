//! Numeric prefix scanning with C conversion semantics.
//!
//! Integers are base-sensing: `0x`/`0X` selects hex, a leading `0` octal,
//! anything else decimal. Leading whitespace and a sign are accepted, the
//! longest valid prefix is consumed and the rest of the string is ignored.
//! Each scanner returns the value and the number of bytes consumed, or `None`
//! when nothing could be consumed.

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn skip_space(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && is_space(bytes[i]) {
        i += 1;
    }
    i
}

fn skip_sign(bytes: &[u8], i: usize) -> (bool, usize) {
    match bytes.get(i) {
        Some(b'-') => (true, i + 1),
        Some(b'+') => (false, i + 1),
        _ => (false, i),
    }
}

struct Magnitude {
    negative: bool,
    value: u64,
    overflow: bool,
    consumed: usize,
}

fn scan_magnitude(s: &str) -> Option<Magnitude> {
    let bytes = s.as_bytes();
    let i = skip_space(bytes, 0);
    let (negative, mut i) = skip_sign(bytes, i);

    let radix = if bytes.get(i) == Some(&b'0')
        && matches!(bytes.get(i + 1), Some(b'x' | b'X'))
        && bytes.get(i + 2).is_some_and(|b| b.is_ascii_hexdigit())
    {
        i += 2;
        16
    } else if bytes.get(i) == Some(&b'0') {
        8
    } else {
        10
    };

    let start = i;
    let mut value: u64 = 0;
    let mut overflow = false;
    while let Some(digit) = bytes.get(i).and_then(|&b| (b as char).to_digit(radix)) {
        match value
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
        {
            Some(v) => value = v,
            None => overflow = true,
        }
        i += 1;
    }
    if i == start {
        return None;
    }

    Some(Magnitude {
        negative,
        value,
        overflow,
        consumed: i,
    })
}

/// Scan a signed integer like `strtoimax(s, _, 0)`. Out-of-range values
/// saturate at `i64::MIN`/`i64::MAX`.
pub fn parse_signed(s: &str) -> Option<(i64, usize)> {
    let m = scan_magnitude(s)?;
    let limit = if m.negative {
        1u64 << 63
    } else {
        i64::MAX as u64
    };
    let value = if m.overflow || m.value > limit {
        if m.negative {
            i64::MIN
        } else {
            i64::MAX
        }
    } else if m.negative {
        (m.value as i64).wrapping_neg()
    } else {
        m.value as i64
    };
    Some((value, m.consumed))
}

/// Scan an unsigned integer like `strtoumax(s, _, 0)`. A minus sign negates
/// in 64-bit arithmetic; out-of-range values saturate at `u64::MAX`.
pub fn parse_unsigned(s: &str) -> Option<(u64, usize)> {
    let m = scan_magnitude(s)?;
    let value = if m.overflow {
        u64::MAX
    } else if m.negative {
        m.value.wrapping_neg()
    } else {
        m.value
    };
    Some((value, m.consumed))
}

fn starts_with_ignore_case(bytes: &[u8], i: usize, word: &str) -> bool {
    bytes
        .get(i..i + word.len())
        .is_some_and(|s| s.eq_ignore_ascii_case(word.as_bytes()))
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(|b| b.is_ascii_digit()) {
        i += 1;
    }
    i
}

fn hex_digit(bytes: &[u8], i: usize) -> Option<u32> {
    bytes.get(i).and_then(|&b| (b as char).to_digit(16))
}

/// Hexadecimal mantissa with an optional binary `p` exponent, starting at
/// the first character after `0x`.
fn scan_hex_float(bytes: &[u8], mut i: usize) -> (f64, usize) {
    let mut value = 0.0f64;
    while let Some(d) = hex_digit(bytes, i) {
        value = value * 16.0 + f64::from(d);
        i += 1;
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let mut scale = 1.0 / 16.0;
        while let Some(d) = hex_digit(bytes, i) {
            value += f64::from(d) * scale;
            scale /= 16.0;
            i += 1;
        }
    }
    if matches!(bytes.get(i), Some(b'p' | b'P')) {
        let (negative, exp_start) = skip_sign(bytes, i + 1);
        let exp_end = skip_digits(bytes, exp_start);
        if exp_end > exp_start {
            let exp = std::str::from_utf8(&bytes[exp_start..exp_end])
                .ok()
                .and_then(|e| e.parse::<i32>().ok())
                .unwrap_or(i32::MAX);
            let exp = if negative { -exp } else { exp };
            value *= 2.0f64.powi(exp);
            i = exp_end;
        }
    }
    (value, i)
}

/// Scan a floating-point number like `strtod`. Accepts an optional fraction
/// and exponent, hexadecimal `0x1.8p1` notation, and `inf`, `infinity` and
/// `nan`.
pub fn parse_float(s: &str) -> Option<(f64, usize)> {
    let bytes = s.as_bytes();
    let start = skip_space(bytes, 0);
    let (negative, i) = skip_sign(bytes, start);

    if bytes.get(i) == Some(&b'0') && matches!(bytes.get(i + 1), Some(b'x' | b'X')) {
        let after = i + 2;
        let has_digits = hex_digit(bytes, after).is_some()
            || (bytes.get(after) == Some(&b'.') && hex_digit(bytes, after + 1).is_some());
        if has_digits {
            let (value, end) = scan_hex_float(bytes, after);
            return Some((if negative { -value } else { value }, end));
        }
    }

    let end = if starts_with_ignore_case(bytes, i, "infinity") {
        i + "infinity".len()
    } else if starts_with_ignore_case(bytes, i, "inf") || starts_with_ignore_case(bytes, i, "nan") {
        i + 3
    } else {
        let int_end = skip_digits(bytes, i);
        let mut end = int_end;
        let mut digits = int_end - i;
        if bytes.get(end) == Some(&b'.') {
            let frac_end = skip_digits(bytes, end + 1);
            digits += frac_end - (end + 1);
            end = frac_end;
        }
        if digits == 0 {
            return None;
        }
        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            let (_, exp_start) = skip_sign(bytes, end + 1);
            let exp_end = skip_digits(bytes, exp_start);
            if exp_end > exp_start {
                end = exp_end;
            }
        }
        end
    };

    let value: f64 = s[start..end].parse().ok()?;
    Some((value, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_integers() {
        assert_eq!(parse_signed("42"), Some((42, 2)));
        assert_eq!(parse_signed("-17"), Some((-17, 3)));
        assert_eq!(parse_signed("+5"), Some((5, 2)));
        assert_eq!(parse_unsigned("123"), Some((123, 3)));
    }

    #[test]
    fn base_is_sensed_from_prefix() {
        assert_eq!(parse_signed("0x1F"), Some((31, 4)));
        assert_eq!(parse_signed("0XfF"), Some((255, 4)));
        assert_eq!(parse_signed("017"), Some((15, 3)));
        assert_eq!(parse_signed("0"), Some((0, 1)));
        assert_eq!(parse_unsigned("-0x10"), Some((0x10u64.wrapping_neg(), 5)));
    }

    #[test]
    fn hex_prefix_without_digits_reads_the_zero() {
        assert_eq!(parse_signed("0x"), Some((0, 1)));
        assert_eq!(parse_signed("0xg"), Some((0, 1)));
    }

    #[test]
    fn octal_stops_at_eight() {
        assert_eq!(parse_signed("0189"), Some((1, 2)));
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        assert_eq!(parse_signed("12abc"), Some((12, 2)));
        assert_eq!(parse_unsigned("7 "), Some((7, 1)));
    }

    #[test]
    fn leading_whitespace_is_skipped() {
        assert_eq!(parse_signed("  \t9"), Some((9, 4)));
    }

    #[test]
    fn no_digits_means_nothing_consumed() {
        assert_eq!(parse_signed(""), None);
        assert_eq!(parse_signed("XYZ"), None);
        assert_eq!(parse_signed("-"), None);
        assert_eq!(parse_signed("  +"), None);
        assert_eq!(parse_unsigned("notanumber"), None);
    }

    #[test]
    fn signed_overflow_saturates() {
        assert_eq!(parse_signed("99999999999999999999").map(|r| r.0), Some(i64::MAX));
        assert_eq!(parse_signed("-99999999999999999999").map(|r| r.0), Some(i64::MIN));
        assert_eq!(parse_signed("9223372036854775808").map(|r| r.0), Some(i64::MAX));
        assert_eq!(parse_signed("-9223372036854775808").map(|r| r.0), Some(i64::MIN));
    }

    #[test]
    fn unsigned_overflow_saturates() {
        assert_eq!(parse_unsigned("18446744073709551615").map(|r| r.0), Some(u64::MAX));
        assert_eq!(parse_unsigned("18446744073709551616").map(|r| r.0), Some(u64::MAX));
        assert_eq!(parse_unsigned("-1").map(|r| r.0), Some(u64::MAX));
    }

    #[test]
    fn floats() {
        assert_eq!(parse_float("1.5"), Some((1.5, 3)));
        assert_eq!(parse_float("-2"), Some((-2.0, 2)));
        assert_eq!(parse_float(".25"), Some((0.25, 3)));
        assert_eq!(parse_float("3."), Some((3.0, 2)));
        assert_eq!(parse_float("1e3"), Some((1000.0, 3)));
        assert_eq!(parse_float("2.5E-1x"), Some((0.25, 6)));
        assert_eq!(parse_float(" 4"), Some((4.0, 2)));
    }

    #[test]
    fn dangling_exponent_is_not_consumed() {
        assert_eq!(parse_float("1e"), Some((1.0, 1)));
        assert_eq!(parse_float("1e+"), Some((1.0, 1)));
    }

    #[test]
    fn special_float_values() {
        assert_eq!(parse_float("inf"), Some((f64::INFINITY, 3)));
        assert_eq!(parse_float("-Infinity"), Some((f64::NEG_INFINITY, 9)));
        let (nan, used) = parse_float("NaN").unwrap();
        assert!(nan.is_nan());
        assert_eq!(used, 3);
    }

    #[test]
    fn hex_floats() {
        assert_eq!(parse_float("0x10"), Some((16.0, 4)));
        assert_eq!(parse_float("0x1.8p1"), Some((3.0, 7)));
        assert_eq!(parse_float("-0x.8"), Some((-0.5, 5)));
        assert_eq!(parse_float("0X1P-2"), Some((0.25, 6)));
        assert_eq!(parse_float("0x1p"), Some((1.0, 3)));
    }

    #[test]
    fn hex_prefix_without_digits_reads_the_zero_float() {
        assert_eq!(parse_float("0xg"), Some((0.0, 1)));
        assert_eq!(parse_float("0x."), Some((0.0, 1)));
    }

    #[test]
    fn float_without_digits_fails() {
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("-.e5"), None);
        assert_eq!(parse_float("abc"), None);
    }
}
