/// Slice colours, cycled by index.
pub const SERIES_COLORS: [&str; 7] = [
    "#6A0DAD", "#4B0082", "#663399", "#7B68EE", "#9370DB", "#BA55D3", "#D8BFD8",
];

/// Fill for single-series bar charts.
pub const PRIMARY: &str = "#6A0DAD";

pub fn series_color(index: usize) -> &'static str {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_color_cycles() {
        assert_eq!(series_color(0), "#6A0DAD");
        assert_eq!(series_color(6), "#D8BFD8");
        assert_eq!(series_color(7), series_color(0));
        assert_eq!(series_color(15), "#4B0082");
    }
}
