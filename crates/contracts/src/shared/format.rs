//! Display formatting for chart values, tooltips and counters.

use serde::{Deserialize, Serialize};

/// A value that may reach a formatter: numeric data or pre-rendered text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Number(f64),
    Text(String),
}

impl From<f64> for DisplayValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for DisplayValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Integers without a decimal point, everything else with one decimal.
/// Text passes through untouched.
pub fn format_value(value: &DisplayValue) -> String {
    match value {
        DisplayValue::Number(v) => format_number(*v),
        DisplayValue::Text(s) => s.clone(),
    }
}

/// Numeric half of [`format_value`].
///
/// `5.0` -> `"5"`, `3.5364` -> `"3.5"`, `31.99` -> `"32.0"`, `3.50` -> `"3.5"`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // -0.0 shows as 0
    let value = if value == 0.0 { 0.0 } else { value };
    if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        format_fixed(value, 1)
    }
}

/// Fixed number of decimals, rounded on the stored binary value.
///
/// `1.45` is stored just below the halfway point and gives `"1.4"`. Exact
/// ties such as `0.25` round away from zero (`"0.3"`).
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    // a zero residual means the product was exact, so `.5` is a real tie
    let is_tie = scaled.fract().abs() == 0.5 && value.mul_add(factor, -scaled) == 0.0;
    if is_tie {
        format!("{:.prec$}", scaled.round() / factor, prec = decimals)
    } else {
        format!("{:.prec$}", value, prec = decimals)
    }
}

/// Group thousands with commas: `3154` -> `"3,154"`.
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Axis tick label: integers bare, fractions with up to two decimals.
pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value);
    }
    let s = format_fixed(value, 2);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// How a chart renders a hovered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipFormat {
    /// Ratings and counts: [`format_number`].
    Value,
    /// Percentages of respondents: [`format_number`] followed by `%`.
    Percent,
    /// Pie slices: always one decimal followed by `%`.
    FixedPercent,
}

impl TooltipFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            TooltipFormat::Value => format_number(value),
            TooltipFormat::Percent => format!("{}%", format_number(value)),
            TooltipFormat::FixedPercent => format!("{}%", format_fixed(value, 1)),
        }
    }
}

/// Pie slice label, `share` being a fraction in `0..=1`.
pub fn slice_label(name: &str, share: f64) -> String {
    format!("{}: {}%", name, format_fixed(share * 100.0, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.5364), "3.5");
        assert_eq!(format_number(31.99), "32.0");
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(1959.0), "1959");
        assert_eq!(format_number(3.50), "3.5");
        assert_eq!(format_number(0.25), "0.3");
        assert_eq!(format_number(-2.25), "-2.3");
    }

    #[test]
    fn test_format_number_rounds_stored_value() {
        assert_eq!(format_number(1.45), "1.4");
        assert_eq!(format_number(0.35), "0.3");
        assert_eq!(format_number(0.25), "0.3");
        assert_eq!(format_number(2.75), "2.8");
        assert_eq!(format_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn test_format_number_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(TooltipFormat::Value.format(-0.0), "0");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }

    #[test]
    fn test_format_value_passes_text_through() {
        assert_eq!(format_value(&"n/a".into()), "n/a");
        assert_eq!(format_value(&DisplayValue::Number(45.02)), "45.0");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(3154), "3,154");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(2000.0), "2000");
        assert_eq!(format_tick(3.25), "3.25");
        assert_eq!(format_tick(3.5), "3.5");
    }

    #[test]
    fn test_tooltip_formats() {
        assert_eq!(TooltipFormat::Value.format(3.34), "3.3");
        assert_eq!(TooltipFormat::Percent.format(21.0), "21%");
        assert_eq!(TooltipFormat::Percent.format(34.69), "34.7%");
        assert_eq!(TooltipFormat::FixedPercent.format(52.0), "52.0%");
    }

    #[test]
    fn test_slice_label() {
        assert_eq!(slice_label("Female", 0.5222), "Female: 52.2%");
    }
}
