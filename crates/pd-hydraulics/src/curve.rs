//! Illustrative head-vs-flow characteristic curve.
//!
//! The curve is a display aid, not a fitted pump curve: a parabola scaled
//! so the duty point sits on it plausibly, sampled at fixed resolution.

use serde::{Deserialize, Serialize};

/// Number of samples generated per curve.
pub const CURVE_SAMPLES: usize = 50;

/// Shutoff head multiplier: head at zero flow is 1.25x the duty head.
const SHUTOFF_HEAD_FACTOR: f64 = 1.25;
/// Flow axis extends to 1.5x the duty flow.
const FLOW_SPAN_FACTOR: f64 = 1.5;

/// Sampled characteristic curve plus the duty point it was built around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveData {
    /// Flow samples (m³/h), ascending
    pub flows_m3h: Vec<f64>,
    /// Head at each flow sample (m)
    pub heads_m: Vec<f64>,
    pub label: String,
    /// Duty point (flow m³/h, head m)
    pub operating_point: (f64, f64),
}

impl CurveData {
    /// Iterate (flow, head) pairs in sample order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.flows_m3h.iter().copied().zip(self.heads_m.iter().copied())
    }
}

/// Generate the characteristic curve for a duty point.
///
/// `head(f) = 1.25 * H * (1 - (f / 2Q)^2)` over 50 evenly spaced flows in
/// `[0, 1.5Q]`. A non-positive duty flow degenerates to a flat curve at
/// shutoff head.
pub fn characteristic_curve(flow_m3h: f64, head_m: f64) -> CurveData {
    let shutoff_head = SHUTOFF_HEAD_FACTOR * head_m;
    let mut flows = Vec::with_capacity(CURVE_SAMPLES);
    let mut heads = Vec::with_capacity(CURVE_SAMPLES);

    for i in 0..CURVE_SAMPLES {
        let fraction = i as f64 / (CURVE_SAMPLES - 1) as f64;
        if flow_m3h > 0.0 {
            let flow = FLOW_SPAN_FACTOR * flow_m3h * fraction;
            let ratio = flow / (2.0 * flow_m3h);
            flows.push(flow);
            heads.push(shutoff_head * (1.0 - ratio * ratio));
        } else {
            flows.push(0.0);
            heads.push(shutoff_head);
        }
    }

    CurveData {
        flows_m3h: flows,
        heads_m: heads,
        label: format!("{:.1} m3/h @ {:.1} m", flow_m3h, head_m),
        operating_point: (flow_m3h, head_m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_starts_at_shutoff_head() {
        let curve = characteristic_curve(50.0, 100.0);
        assert_eq!(curve.flows_m3h.len(), CURVE_SAMPLES);
        assert_eq!(curve.heads_m.len(), CURVE_SAMPLES);
        assert_eq!(curve.flows_m3h[0], 0.0);
        assert!((curve.heads_m[0] - 125.0).abs() < 1e-9);
    }

    #[test]
    fn curve_spans_one_and_a_half_duty_flows() {
        let curve = characteristic_curve(50.0, 100.0);
        assert!((curve.flows_m3h[CURVE_SAMPLES - 1] - 75.0).abs() < 1e-9);
    }

    #[test]
    fn curve_is_non_increasing() {
        let curve = characteristic_curve(50.0, 100.0);
        for pair in curve.heads_m.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn duty_point_lies_below_shutoff() {
        let curve = characteristic_curve(50.0, 100.0);
        // head(Q) = 1.25 * H * (1 - 0.25) = 0.9375 * H
        let mid = curve
            .samples()
            .min_by(|a, b| {
                (a.0 - 50.0).abs().partial_cmp(&(b.0 - 50.0).abs()).unwrap()
            })
            .unwrap();
        assert!(mid.1 < 125.0);
        assert!(mid.1 > 80.0);
    }

    #[test]
    fn zero_flow_degenerates_to_flat_curve() {
        let curve = characteristic_curve(0.0, 100.0);
        assert!(curve.flows_m3h.iter().all(|&f| f == 0.0));
        assert!(curve.heads_m.iter().all(|&h| (h - 125.0).abs() < 1e-9));
    }
}
