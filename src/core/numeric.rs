//! Decimal fixed-point formatting
//!
//! Scores cross the result boundary as short decimals. The rounding has to
//! be reproducible across ports, so it works on the exact binary value of
//! the double and rounds ties away from zero, instead of relying on
//! `{:.N}` (which rounds ties to even).

/// Enough fractional digits to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Formats `value` with exactly `digits` fractional digits.
///
/// Rounds on the exact decimal expansion of `value`, ties away from zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut buf: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .is_some_and(|&next| next >= b'5');

    if round_up {
        let mut carry = true;
        for d in buf.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            buf.insert(0, b'1');
        }
    }

    let split = buf.len() - digits;
    let mut out = String::with_capacity(buf.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(buf[..split].iter().map(|&b| b as char));
    if digits > 0 {
        out.push('.');
        out.extend(buf[split..].iter().map(|&b| b as char));
    }
    out
}

/// Rounds `value` to `digits` decimal places and re-reads it as `f64`.
pub fn round_to(value: f64, digits: usize) -> f64 {
    to_fixed(value, digits).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_basic() {
        assert_eq!(to_fixed(0.85612, 3), "0.856");
        assert_eq!(to_fixed(53.87, 1), "53.9");
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(12.0, 0), "12");
    }

    #[test]
    fn test_to_fixed_ties_round_away_from_zero() {
        // 62.5 and 0.125 are exact in binary, so these are true ties.
        assert_eq!(to_fixed(62.5, 0), "63");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-2.5, 0), "-3");
    }

    #[test]
    fn test_to_fixed_uses_exact_binary_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(to_fixed(1.005, 2), "1.00");
        // 0.169 * 0.25 is stored slightly above 0.04225
        assert_eq!(to_fixed(0.169 * 0.25, 4), "0.0423");
    }

    #[test]
    fn test_to_fixed_carry_propagates() {
        assert_eq!(to_fixed(9.9996, 3), "10.000");
        assert_eq!(to_fixed(0.9999, 2), "1.00");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.61650000001, 4), 0.6165);
        assert_eq!(round_to(61.65 + 1e-9, 1), 61.7);
        assert_eq!(round_to(0.892, 3), 0.892);
    }
}
