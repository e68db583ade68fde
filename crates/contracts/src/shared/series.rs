use serde::{Deserialize, Serialize};

/// One survey question's results: parallel label and value sequences.
///
/// `labels[i]` describes `values[i]`. Both sequences always have the same
/// length; constructing a series with mismatched lengths is a programming
/// error and panics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSeries {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl LabeledSeries {
    /// Build a series from static data.
    ///
    /// # Panics
    /// When `labels` and `values` differ in length.
    pub fn new<L, S>(title: &str, labels: L, values: Vec<f64>) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        assert_eq!(
            labels.len(),
            values.len(),
            "series '{}' has {} labels but {} values",
            title,
            labels.len(),
            values.len()
        );
        Self {
            title: title.to_string(),
            labels,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Chart-ready points in input order. Recomputed on every call.
    pub fn points(&self) -> Vec<ChartPoint> {
        transform_to_chart_data(&self.labels, &self.values)
    }

    /// Check the parallel-length invariant without panicking.
    ///
    /// Series built with [`LabeledSeries::new`] always pass; deserialized
    /// series may not.
    pub fn check(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.labels.len() == self.values.len(),
            "series '{}' has {} labels but {} values",
            self.title,
            self.labels.len(),
            self.values.len()
        );
        Ok(())
    }
}

/// A single named value handed to the chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

/// Zip labels and values into chart points, one to one, preserving order.
///
/// No filtering, sorting or deduplication happens here.
///
/// # Panics
/// When `labels` and `values` differ in length.
pub fn transform_to_chart_data<S: AsRef<str>>(labels: &[S], values: &[f64]) -> Vec<ChartPoint> {
    assert_eq!(
        labels.len(),
        values.len(),
        "labels and values must have equal length"
    );
    labels
        .iter()
        .zip(values)
        .map(|(label, &value)| ChartPoint {
            name: label.as_ref().to_string(),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_two_points() {
        let points = transform_to_chart_data(&["A", "B"], &[1.0, 2.25]);
        assert_eq!(
            points,
            vec![
                ChartPoint {
                    name: "A".to_string(),
                    value: 1.0
                },
                ChartPoint {
                    name: "B".to_string(),
                    value: 2.25
                },
            ]
        );
    }

    #[test]
    fn test_transform_keeps_duplicates_and_order() {
        let points = transform_to_chart_data(&["z", "a", "z"], &[3.0, 1.0, 2.0]);
        let names: Vec<&str> = points.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "z"]);
        assert_eq!(points[2].value, 2.0);
    }

    #[test]
    fn test_transform_empty() {
        let labels: [&str; 0] = [];
        assert!(transform_to_chart_data(&labels, &[]).is_empty());
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_transform_length_mismatch_panics() {
        transform_to_chart_data(&["A", "B"], &[1.0]);
    }

    #[test]
    #[should_panic(expected = "has 2 labels but 3 values")]
    fn test_series_new_length_mismatch_panics() {
        LabeledSeries::new("broken", ["A", "B"], vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_series_points_are_recomputed_equal() {
        let series = LabeledSeries::new("Brands", ["JBL", "Bose"], vec![1959.0, 1006.0]);
        assert_eq!(series.points(), series.points());
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_series_check_reports_deserialized_mismatch() {
        let series: LabeledSeries =
            serde_json::from_str(r#"{"title":"t","labels":["a"],"values":[1.0,2.0]}"#).unwrap();
        let err = series.check().unwrap_err();
        assert_eq!(err.to_string(), "series 't' has 1 labels but 2 values");
    }
}
