//! Number rendering for generated CSS.
//!
//! Output has to match what browsers produced for the same values in the
//! editor, so these follow the `Number.prototype.toFixed` and number-to-string
//! rules rather than Rust's own float formatting where the two disagree
//! (tie rounding and negative zero).

/// Render `value` with exactly `digits` decimals.
///
/// Rounds the exact binary value; a value lying exactly halfway rounds away
/// from zero. Negative zero renders unsigned.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return js_number(value);
    }

    let magnitude = value.abs();
    let digits_str = if is_exact_tie(magnitude, digits) {
        // Rust breaks exact ties toward even; step the truncated form up instead.
        let wide = format!("{magnitude:.prec$}", prec = digits + 1);
        let mut truncated = wide[..wide.len() - 1].to_string();
        if truncated.ends_with('.') {
            truncated.pop();
        }
        increment_last_digit(&truncated)
    } else {
        format!("{magnitude:.digits$}")
    };

    if value < 0.0 {
        format!("-{digits_str}")
    } else {
        digits_str
    }
}

/// `to_fixed`, then drop trailing zeros and a dangling decimal point.
pub fn trim_fixed(value: f64, digits: usize) -> String {
    let fixed = to_fixed(value, digits);
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Shortest round-trip rendering: `16` not `16.0`, `0` for negative zero.
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        (if value > 0.0 { "Infinity" } else { "-Infinity" }).to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

/// Whether `magnitude` sits exactly on a rounding midpoint at `digits` decimals.
///
/// A midpoint needs at most `digits + 1` binary fraction bits, in which case the
/// `digits + 1` decimal rendering is exact and can be inspected directly.
fn is_exact_tie(magnitude: f64, digits: usize) -> bool {
    let Ok(exp) = i32::try_from(digits + 1) else {
        return false;
    };
    let scaled = magnitude * 2f64.powi(exp);
    if !scaled.is_finite() || scaled.fract() != 0.0 {
        return false;
    }
    format!("{magnitude:.prec$}", prec = digits + 1).ends_with('5')
}

fn increment_last_digit(s: &str) -> String {
    let mut bytes = s.as_bytes().to_vec();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carry = false;
            }
        }
    }
    let mut out = String::from_utf8(bytes).unwrap_or_default();
    if carry {
        out.insert(0, '1');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_pads_and_rounds() {
        assert_eq!(to_fixed(14.795180722891567, 2), "14.80");
        assert_eq!(to_fixed(0.321285140562249, 4), "0.3213");
        assert_eq!(to_fixed(1.0, 3), "1.000");
        assert_eq!(to_fixed(8.0, 4), "8.0000");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        // 0.125 and 2.5 are exactly representable midpoints.
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(9.995, 2), "9.99"); // stored just below the midpoint
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(99.5, 0), "100");
        assert_eq!(to_fixed(0.0625, 3), "0.063");
    }

    #[test]
    fn not_quite_ties_follow_the_binary_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(to_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn negative_zero_is_unsigned() {
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(js_number(-0.0), "0");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
    }

    #[test]
    fn trim_drops_trailing_zeros() {
        assert_eq!(trim_fixed(1.0, 3), "1");
        assert_eq!(trim_fixed(0.875, 3), "0.875");
        assert_eq!(trim_fixed(1.5, 3), "1.5");
        assert_eq!(trim_fixed(10.0, 3), "10");
        assert_eq!(trim_fixed(0.0, 3), "0");
    }

    #[test]
    fn js_number_matches_string_concatenation() {
        assert_eq!(js_number(16.0), "16");
        assert_eq!(js_number(12.8), "12.8");
        assert_eq!(js_number(-4.0), "-4");
        assert_eq!(js_number(f64::INFINITY), "Infinity");
        assert_eq!(js_number(f64::NAN), "NaN");
    }
}
