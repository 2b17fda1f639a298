use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{validate_fraction, validate_rate, Validate};
use serde::{Deserialize, Serialize};

/// One breakpoint of the volume price curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub volume: f64,
    pub price_per_cubic_meter: f64,
}

impl CurvePoint {
    pub const fn new(volume: f64, price_per_cubic_meter: f64) -> Self {
        Self {
            volume,
            price_per_cubic_meter,
        }
    }
}

/// Volume discount tier; the highest tier whose `min_volume` is reached applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeTier {
    pub min_volume: f64,
    pub rate: f64,
}

impl VolumeTier {
    pub const fn new(min_volume: f64, rate: f64) -> Self {
        Self { min_volume, rate }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseRates {
    pub volume_curve: Vec<CurvePoint>,
    pub minimum_base_price: f64,
}

impl Default for BaseRates {
    fn default() -> Self {
        Self {
            volume_curve: vec![
                CurvePoint::new(5.0, 320.0),
                CurvePoint::new(15.0, 200.0),
                CurvePoint::new(40.0, 144.0),
                CurvePoint::new(57.0, 128.0),
            ],
            minimum_base_price: 1600.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportRates {
    /// Moves up to this distance carry no transport surcharge.
    pub local_distance_limit_km: f64,
    /// Beyond this distance the long-distance rate applies.
    pub regional_distance_limit_km: f64,
    pub regional_rate_per_km: f64,
    pub long_distance_rate_per_km: f64,
    pub truck_capacity_cubic_meters: f64,
    pub truck_multiplier_step: f64,
    pub truck_multiplier_base: f64,
}

impl Default for TransportRates {
    fn default() -> Self {
        Self {
            local_distance_limit_km: 50.0,
            regional_distance_limit_km: 400.0,
            regional_rate_per_km: 10.4,
            long_distance_rate_per_km: 15.0,
            truck_capacity_cubic_meters: 19.0,
            truck_multiplier_step: 0.7,
            truck_multiplier_base: 0.3,
        }
    }
}

/// Carrying surcharge per cubic meter and floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessRates {
    pub small_elevator_rate: f64,
    pub stairs_only_rate: f64,
}

impl Default for AccessRates {
    fn default() -> Self {
        Self {
            small_elevator_rate: 10.0,
            stairs_only_rate: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceRates {
    pub packing_rate_per_sqm: f64,
    pub cleaning_rate_per_sqm: f64,
    pub allergy_cleaning_rate_per_sqm: f64,
    pub heavy_item_fee: f64,
    pub long_carry_rate_per_meter: f64,
    pub long_carry_cap_meters: f64,
    pub furniture_assembly_fee: f64,
    pub wall_mounting_fee: f64,
    pub disposal_fee: f64,
}

impl Default for ServiceRates {
    fn default() -> Self {
        Self {
            packing_rate_per_sqm: 44.0,
            cleaning_rate_per_sqm: 44.0,
            allergy_cleaning_rate_per_sqm: 65.0,
            heavy_item_fee: 800.0,
            long_carry_rate_per_meter: 80.0,
            long_carry_cap_meters: 100.0,
            furniture_assembly_fee: 1500.0,
            wall_mounting_fee: 1200.0,
            disposal_fee: 1800.0,
        }
    }
}

/// Unit price per box type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagingRates {
    pub moving_box: f64,
    pub wardrobe_box: f64,
    pub picture_box: f64,
    pub mirror_box: f64,
}

impl Default for PackagingRates {
    fn default() -> Self {
        Self {
            moving_box: 20.0,
            wardrobe_box: 40.0,
            picture_box: 60.0,
            mirror_box: 75.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountRates {
    pub combo_rate_per_category: f64,
    pub volume_tiers: Vec<VolumeTier>,
    pub key_customer_rate: f64,
    pub low_season_rate: f64,
}

impl Default for DiscountRates {
    fn default() -> Self {
        Self {
            combo_rate_per_category: 0.05,
            volume_tiers: vec![
                VolumeTier::new(100.0, 0.15),
                VolumeTier::new(75.0, 0.10),
                VolumeTier::new(50.0, 0.05),
            ],
            key_customer_rate: 0.10,
            low_season_rate: 0.08,
        }
    }
}

impl DiscountRates {
    /// Rate of the highest tier reached by `volume`, or 0.
    pub fn volume_rate(&self, volume: f64) -> f64 {
        self.volume_tiers
            .iter()
            .filter(|tier| volume >= tier.min_volume)
            .max_by(|a, b| a.min_volume.total_cmp(&b.min_volume))
            .map(|tier| tier.rate)
            .unwrap_or(0.0)
    }

    fn max_volume_rate(&self) -> f64 {
        self.volume_tiers
            .iter()
            .map(|tier| tier.rate)
            .fold(0.0, f64::max)
    }
}

/// The complete rate card. `Default` is the current production price list;
/// every section can be overridden from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRates {
    pub base: BaseRates,
    pub transport: TransportRates,
    pub access: AccessRates,
    pub services: ServiceRates,
    pub packaging: PackagingRates,
    pub discounts: DiscountRates,
}

/// Number of add-on categories that can earn a combo discount.
pub const MAX_ADD_ON_CATEGORIES: u8 = 5;

impl Validate for PricingRates {
    fn validate(&self) -> Result<()> {
        let curve = &self.base.volume_curve;
        if curve.is_empty() {
            return Err(QuoteError::invalid_config(
                "base.volume_curve",
                "[]",
                "needs at least one breakpoint",
            ));
        }
        for (index, point) in curve.iter().enumerate() {
            validate_rate(&format!("base.volume_curve[{}].volume", index), point.volume)?;
            validate_rate(
                &format!("base.volume_curve[{}].price_per_cubic_meter", index),
                point.price_per_cubic_meter,
            )?;
        }
        if let Some(pair) = curve.windows(2).find(|pair| pair[1].volume <= pair[0].volume) {
            return Err(QuoteError::invalid_config(
                "base.volume_curve",
                pair[1].volume,
                "breakpoint volumes must be strictly increasing",
            ));
        }
        validate_rate("base.minimum_base_price", self.base.minimum_base_price)?;

        let t = &self.transport;
        validate_rate("transport.local_distance_limit_km", t.local_distance_limit_km)?;
        validate_rate("transport.regional_distance_limit_km", t.regional_distance_limit_km)?;
        validate_rate("transport.regional_rate_per_km", t.regional_rate_per_km)?;
        validate_rate("transport.long_distance_rate_per_km", t.long_distance_rate_per_km)?;
        validate_rate("transport.truck_multiplier_step", t.truck_multiplier_step)?;
        validate_rate("transport.truck_multiplier_base", t.truck_multiplier_base)?;
        validate_rate("transport.truck_capacity_cubic_meters", t.truck_capacity_cubic_meters)?;
        if t.truck_capacity_cubic_meters == 0.0 {
            return Err(QuoteError::invalid_config(
                "transport.truck_capacity_cubic_meters",
                t.truck_capacity_cubic_meters,
                "must be greater than 0",
            ));
        }
        if t.regional_distance_limit_km < t.local_distance_limit_km {
            return Err(QuoteError::invalid_config(
                "transport.regional_distance_limit_km",
                t.regional_distance_limit_km,
                "must not be below transport.local_distance_limit_km",
            ));
        }

        validate_rate("access.small_elevator_rate", self.access.small_elevator_rate)?;
        validate_rate("access.stairs_only_rate", self.access.stairs_only_rate)?;

        let s = &self.services;
        for (field, value) in [
            ("services.packing_rate_per_sqm", s.packing_rate_per_sqm),
            ("services.cleaning_rate_per_sqm", s.cleaning_rate_per_sqm),
            ("services.allergy_cleaning_rate_per_sqm", s.allergy_cleaning_rate_per_sqm),
            ("services.heavy_item_fee", s.heavy_item_fee),
            ("services.long_carry_rate_per_meter", s.long_carry_rate_per_meter),
            ("services.long_carry_cap_meters", s.long_carry_cap_meters),
            ("services.furniture_assembly_fee", s.furniture_assembly_fee),
            ("services.wall_mounting_fee", s.wall_mounting_fee),
            ("services.disposal_fee", s.disposal_fee),
            ("packaging.moving_box", self.packaging.moving_box),
            ("packaging.wardrobe_box", self.packaging.wardrobe_box),
            ("packaging.picture_box", self.packaging.picture_box),
            ("packaging.mirror_box", self.packaging.mirror_box),
        ] {
            validate_rate(field, value)?;
        }

        let d = &self.discounts;
        validate_fraction("discounts.combo_rate_per_category", d.combo_rate_per_category)?;
        validate_fraction("discounts.key_customer_rate", d.key_customer_rate)?;
        validate_fraction("discounts.low_season_rate", d.low_season_rate)?;
        for (index, tier) in d.volume_tiers.iter().enumerate() {
            validate_rate(&format!("discounts.volume_tiers[{}].min_volume", index), tier.min_volume)?;
            validate_fraction(&format!("discounts.volume_tiers[{}].rate", index), tier.rate)?;
        }

        let max_combo = d.combo_rate_per_category * f64::from(MAX_ADD_ON_CATEGORIES);
        if max_combo > 1.0 {
            return Err(QuoteError::invalid_config(
                "discounts.combo_rate_per_category",
                d.combo_rate_per_category,
                "five add-on categories would discount more than the whole subtotal",
            ));
        }
        let max_stacked = d.max_volume_rate() + d.key_customer_rate + d.low_season_rate;
        if max_stacked > 1.0 {
            return Err(QuoteError::invalid_config(
                "discounts",
                max_stacked,
                "volume, key customer and season discounts together exceed 100%",
            ));
        }

        Ok(())
    }
}
