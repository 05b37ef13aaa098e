//! Canonical rendering of calculation results.

/// Format a finite numeric value for display.
///
/// Whole values render as plain integers. Fractional values are rounded to
/// at most 10 fractional digits with trailing zeros (and a then-dangling
/// decimal point) trimmed, so the output always parses back to the same
/// value within that rounding tolerance.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let fixed = format!("{:.10}", value);
        fixed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_values_render_as_integers() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-17.0), "-17");
        assert_eq!(format_number(1000000.0), "1000000");
    }

    #[test]
    fn test_fractional_values_keep_their_digits() {
        assert_eq!(format_number(4.5), "4.5");
        assert_eq!(format_number(-0.25), "-0.25");
    }

    #[test]
    fn test_rounds_to_ten_fractional_digits() {
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_number(2.0 / 3.0), "0.6666666667");
    }

    #[test]
    fn test_trims_trailing_zero_artifacts() {
        // 0.1 + 0.2 carries float noise well past the 10th digit
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(2.5000000000001), "2.5");
    }

    #[test]
    fn test_round_trips_within_tolerance() {
        for &v in &[4.5, 0.1 + 0.2, 1.0 / 3.0, -123.456, 7.0] {
            let rendered = format_number(v);
            let reparsed: f64 = rendered.parse().unwrap();
            assert!((reparsed - v).abs() < 1e-10, "{} -> {}", v, rendered);
        }
    }

    #[test]
    fn test_negative_zero_is_plain_zero() {
        assert_eq!(format_number(-0.0), "0");
    }
}
