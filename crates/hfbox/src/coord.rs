//! Dimensioned coordinate strings.
//!
//! The modeler takes lengths as text: a number immediately followed by a
//! unit designator, e.g. `5.4mm` or `-15.0mm`.

use std::fmt;

use hfbox_math::Point3;

/// A length value tagged with its unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimensioned {
    /// Numeric value.
    pub value: f64,
    /// Unit suffix (e.g. `"mm"`).
    pub unit: String,
}

impl Dimensioned {
    /// Create a dimensioned value.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Dimensioned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit)
    }
}

/// A point as three dimensioned coordinates.
pub type DimensionedPoint = [Dimensioned; 3];

/// Format a number the way the modeler scripts expect.
///
/// Magnitudes in `[1e-4, 1e16)` print positionally: integral values keep a
/// trailing `.0`, everything else prints its shortest round-trip form.
/// Outside that range the exponent form is used, with an explicit sign and
/// at least two exponent digits (`1e-05`, `1.5e+17`).
pub fn format_number(value: f64) -> String {
    // Fold -0.0 into 0.0.
    let value = value + 0.0;
    if !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponent_form(value);
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn exponent_form(value: f64) -> String {
    let raw = format!("{value:e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => raw,
    }
}

/// Tag each coordinate of `p` with `unit`.
pub fn dimension_point(p: &Point3, unit: &str) -> DimensionedPoint {
    [
        Dimensioned::new(p.x, unit),
        Dimensioned::new(p.y, unit),
        Dimensioned::new(p.z, unit),
    ]
}

/// Format a point as three dimensioned coordinate strings.
pub fn format_point(p: &Point3, unit: &str) -> [String; 3] {
    dimension_point(p, unit).map(|d| d.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_keep_decimal() {
        assert_eq!(format_number(35.0), "35.0");
        assert_eq!(format_number(-15.0), "-15.0");
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(-0.0), "0.0");
    }

    #[test]
    fn fractional_values_shortest_form() {
        assert_eq!(format_number(5.4), "5.4");
        assert_eq!(format_number(-1.6), "-1.6");
        assert_eq!(format_number(12.5), "12.5");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(format_number(1e-5), "1e-05");
        assert_eq!(format_number(-2.5e-7), "-2.5e-07");
        assert_eq!(format_number(1e17), "1e+17");
        assert_eq!(format_number(1.5e100), "1.5e+100");
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(1e-4), "0.0001");
        assert_eq!(format_number(123456789.0), "123456789.0");
    }

    #[test]
    fn dimensioned_display_appends_unit() {
        assert_eq!(Dimensioned::new(12.5, "mm").to_string(), "12.5mm");
        assert_eq!(Dimensioned::new(5.0, "mm").to_string(), "5.0mm");
        assert_eq!(Dimensioned::new(0.25, "meter").to_string(), "0.25meter");
    }

    #[test]
    fn format_point_per_axis() {
        let p = Point3::new(5.4, 5.4, -15.0);
        assert_eq!(format_point(&p, "mm"), ["5.4mm", "5.4mm", "-15.0mm"]);

        let dims = dimension_point(&p, "mm");
        assert_eq!(dims[2], Dimensioned::new(-15.0, "mm"));
        assert!(dims.iter().all(|d| d.unit == "mm"));
    }
}
