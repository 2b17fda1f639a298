//! Discount stacking.
//!
//! Two phases: the combo discount first reduces the subtotal, then the volume,
//! key-customer and season discounts are each taken as an independent share of
//! that reduced subtotal and summed. The reported total restores the combo
//! amount so that `final = pre-combo subtotal - total`.

use crate::config::rates::DiscountRates;
use crate::domain::model::MoveSpecification;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComboReduction {
    pub pre_combo_subtotal: f64,
    pub combo_discount: f64,
    pub reduced_subtotal: f64,
}

impl ComboReduction {
    pub fn apply(rates: &DiscountRates, subtotal: f64, category_count: u8) -> Self {
        let combo_discount = if category_count == 0 {
            0.0
        } else {
            subtotal * (f64::from(category_count) * rates.combo_rate_per_category)
        };

        Self {
            pre_combo_subtotal: subtotal,
            combo_discount,
            reduced_subtotal: subtotal - combo_discount,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiscountTally {
    pub volume: f64,
    pub key_customer: f64,
    pub season: f64,
}

impl DiscountTally {
    pub fn from_reduced(rates: &DiscountRates, reduced_subtotal: f64, spec: &MoveSpecification) -> Self {
        let share = |applies: bool, rate: f64| if applies { reduced_subtotal * rate } else { 0.0 };

        Self {
            volume: reduced_subtotal * rates.volume_rate(spec.volume_cubic_meters),
            key_customer: share(spec.is_key_customer, rates.key_customer_rate),
            season: share(spec.is_low_season, rates.low_season_rate),
        }
    }

    pub fn sum(&self) -> f64 {
        self.volume + self.key_customer + self.season
    }
}

/// Result of both phases, still unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackedDiscounts {
    pub combo: ComboReduction,
    pub tally: DiscountTally,
}

impl StackedDiscounts {
    pub fn compute(
        rates: &DiscountRates,
        subtotal: f64,
        category_count: u8,
        spec: &MoveSpecification,
    ) -> Self {
        let combo = ComboReduction::apply(rates, subtotal, category_count);
        let tally = DiscountTally::from_reduced(rates, combo.reduced_subtotal, spec);
        Self { combo, tally }
    }

    pub fn final_price(&self) -> f64 {
        self.combo.reduced_subtotal - self.tally.sum()
    }

    pub fn reported_total(&self) -> f64 {
        self.tally.sum() + self.combo.combo_discount
    }
}
