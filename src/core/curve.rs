//! Base price stage: a piecewise-linear price per cubic meter, clamped to a minimum total.

use crate::config::rates::{BaseRates, CurvePoint};

/// Ordered `(volume, price per m³)` breakpoints. Flat outside the table,
/// linearly interpolated between neighbouring breakpoints.
#[derive(Debug, Clone, Copy)]
pub struct VolumeCurve<'a> {
    points: &'a [CurvePoint],
}

impl<'a> VolumeCurve<'a> {
    /// `points` must be non-empty with strictly increasing volumes; rate validation guarantees this.
    pub fn new(points: &'a [CurvePoint]) -> Self {
        Self { points }
    }

    pub fn price_for_volume(&self, volume: f64) -> f64 {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return 0.0;
        };
        if volume <= first.volume {
            return first.price_per_cubic_meter;
        }
        if volume >= last.volume {
            return last.price_per_cubic_meter;
        }

        self.points
            .windows(2)
            .find(|segment| volume <= segment[1].volume)
            .map(|segment| interpolate(segment[0], segment[1], volume))
            .unwrap_or(last.price_per_cubic_meter)
    }
}

fn interpolate(lower: CurvePoint, upper: CurvePoint, volume: f64) -> f64 {
    let slope = (upper.price_per_cubic_meter - lower.price_per_cubic_meter)
        / (upper.volume - lower.volume);
    lower.price_per_cubic_meter + slope * (volume - lower.volume)
}

/// `volume × price_for_volume(volume)`, never below the minimum base price.
pub fn base_price(rates: &BaseRates, volume: f64) -> f64 {
    let price = volume * VolumeCurve::new(&rates.volume_curve).price_for_volume(volume);
    price.max(rates.minimum_base_price)
}
