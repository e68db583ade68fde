use crate::shared::format::format_tick;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TICK_COUNT: usize = 5;

/// Largest magnitude a chart value may have and still get a laid-out axis.
pub const MAX_CHART_VALUE: f64 = 1.0e15;

/// Round a raw step to 1, 2, 5 or 10 times a power of ten.
pub fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw_step.log10().floor());
    if !magnitude.is_normal() {
        return 1.0;
    }
    let normalized = raw_step / magnitude;
    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Closed value range mapped onto a pixel span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` in `0..=1`, clamped at both ends.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 || !span.is_finite() {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// A labelled axis position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

impl Tick {
    fn at(value: f64) -> Self {
        Self {
            value,
            label: format_tick(value),
        }
    }
}

/// Value axis for a bar chart: the resolved domain plus its ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    pub domain: Domain,
    pub ticks: Vec<Tick>,
}

impl ValueAxis {
    /// `[0, nice upper bound]` covering the largest value.
    ///
    /// Empty or non-positive data falls back to `[0, 1]`. A maximum whose
    /// rounded bound is not representable gets `[0, max]` split evenly.
    pub fn auto(values: &[f64], tick_count: usize) -> Self {
        let max = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return Self::fixed(0.0, 1.0, tick_count);
        }

        let intervals = tick_count.max(2) - 1;
        let step = nice_step(max / intervals as f64);
        let upper = (max / step).ceil() * step;
        let steps = (upper / step).round();
        if !upper.is_finite() || !(steps >= 1.0 && steps <= (2 * intervals + 1) as f64) {
            return Self::fixed(0.0, max, tick_count);
        }
        let steps = steps as usize;
        let ticks = (0..=steps).map(|i| Tick::at(i as f64 * step)).collect();

        Self {
            domain: Domain::new(0.0, upper),
            ticks,
        }
    }

    /// Caller-supplied domain split into evenly spaced ticks.
    pub fn fixed(min: f64, max: f64, tick_count: usize) -> Self {
        let intervals = tick_count.max(2) - 1;
        let step = (max - min) / intervals as f64;
        let ticks = (0..=intervals)
            .map(|i| Tick::at(min + i as f64 * step))
            .collect();
        Self {
            domain: Domain::new(min, max),
            ticks,
        }
    }

    pub fn resolve(values: &[f64], explicit: Option<(f64, f64)>, tick_count: usize) -> Self {
        match explicit {
            Some((min, max)) => Self::fixed(min, max, tick_count),
            None => Self::auto(values, tick_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tick_values(axis: &ValueAxis) -> Vec<f64> {
        axis.ticks.iter().map(|t| t.value).collect()
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(489.75), 500.0);
        assert_eq!(nice_step(11.255), 10.0);
        assert_relative_eq!(nice_step(0.22), 0.2, epsilon = 1e-12);
        assert_eq!(nice_step(0.0), 1.0);
        assert_eq!(nice_step(8.0), 10.0);
    }

    #[test]
    fn test_auto_axis_brand_mentions() {
        let axis = ValueAxis::auto(&[1959.0, 1006.0, 775.0, 469.0, 188.0], DEFAULT_TICK_COUNT);
        assert_eq!(axis.domain, Domain::new(0.0, 2000.0));
        assert_eq!(tick_values(&axis), vec![0.0, 500.0, 1000.0, 1500.0, 2000.0]);
        assert_eq!(axis.ticks[2].label, "1000");
    }

    #[test]
    fn test_auto_axis_percentages() {
        let axis = ValueAxis::auto(&[45.02, 21.0, 18.21, 13.77], DEFAULT_TICK_COUNT);
        assert_eq!(axis.domain.max, 50.0);
        assert_eq!(axis.ticks.len(), 6);
    }

    #[test]
    fn test_auto_axis_degenerate() {
        assert_eq!(ValueAxis::auto(&[], 5).domain, Domain::new(0.0, 1.0));
        assert_eq!(ValueAxis::auto(&[-3.0, 0.0], 5).domain, Domain::new(0.0, 1.0));
    }

    #[test]
    fn test_auto_axis_huge_maximum() {
        let axis = ValueAxis::auto(&[1.7e308, 20.0], DEFAULT_TICK_COUNT);
        assert_eq!(axis.domain, Domain::new(0.0, 1.7e308));
        assert_eq!(axis.ticks.len(), DEFAULT_TICK_COUNT);
        assert!(axis.ticks.iter().all(|t| t.value.is_finite()));
    }

    #[test]
    fn test_auto_axis_denormal_maximum() {
        assert_eq!(nice_step(5e-324), 1.0);
        let axis = ValueAxis::auto(&[2e-323], DEFAULT_TICK_COUNT);
        assert_eq!(axis.domain, Domain::new(0.0, 1.0));
        assert_eq!(tick_values(&axis), vec![0.0, 1.0]);
    }

    #[test]
    fn test_fixed_axis_rating_domain() {
        let axis = ValueAxis::resolve(&[3.5], Some((3.0, 4.0)), DEFAULT_TICK_COUNT);
        assert_eq!(tick_values(&axis), vec![3.0, 3.25, 3.5, 3.75, 4.0]);
        let labels: Vec<&str> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["3", "3.25", "3.5", "3.75", "4"]);
    }

    #[test]
    fn test_domain_normalize_clamps() {
        let domain = Domain::new(3.0, 4.0);
        assert_relative_eq!(domain.normalize(3.5364), 0.5364, epsilon = 1e-9);
        assert_eq!(domain.normalize(2.69), 0.0);
        assert_eq!(domain.normalize(9.0), 1.0);
        assert_eq!(Domain::new(1.0, 1.0).normalize(1.0), 0.0);
    }
}
