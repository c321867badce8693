//! Decimal rounding primitive for preference scores.
//!
//! Scores are rounded half-up at a fixed decimal scale, operating on the
//! value's shortest round-trip decimal representation rather than its binary
//! expansion. Ties at the first dropped digit round away from zero.

/// Rounds `value` half-up to `scale` decimal places.
///
/// Non-finite values are returned unchanged; the scorer never produces them
/// on validated input.
pub fn round_half_up(value: f64, scale: u32) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }

    let negative = value < 0.0;
    let magnitude = value.abs();

    // Shortest round-trip decimal form, e.g. "8.2075e-1".
    let repr = format!("{:e}", magnitude);
    let (mantissa, exp) = match repr.split_once('e') {
        Some(parts) => parts,
        None => (repr.as_str(), "0"),
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some(parts) => parts,
        None => (mantissa, ""),
    };

    // magnitude = digits x 10^exp10
    let digits = format!("{}{}", int_part, frac_part);
    let exp10 = exp - frac_part.len() as i32;

    let shift = exp10 + scale as i32;
    if shift >= 0 {
        // Already representable at the requested scale.
        return value;
    }

    let cut = (-shift) as usize;
    let digit_count = digits.len();
    let parsed: u128 = digits.parse().unwrap_or(0);

    let scaled = if cut > digit_count {
        // Magnitude is below half of the smallest representable step.
        0
    } else if cut == digit_count {
        // All digits dropped; the leading digit decides the tie.
        u128::from(digits.as_bytes()[0] >= b'5')
    } else {
        let power = 10u128.pow(cut as u32);
        let quotient = parsed / power;
        let remainder = parsed % power;
        if remainder * 2 >= power {
            quotient + 1
        } else {
            quotient
        }
    };

    let result = scaled as f64 / 10f64.powi(scale as i32);
    if negative {
        -result
    } else {
        result
    }
}
