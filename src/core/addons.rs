//! Service add-on stage: packing, cleaning, heavy items, long carry, flat-fee services and boxes.

use crate::config::rates::{PackagingRates, ServiceRates};
use crate::domain::model::{BoxCounts, MoveSpecification};
use serde::{Deserialize, Serialize};

/// Service groups counted towards the combo discount. Only counted, never priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOnCategory {
    Packing,
    /// Regular and allergy cleaning count as one category.
    Cleaning,
    FurnitureAssembly,
    WallMounting,
    Disposal,
}

pub fn add_on_categories(spec: &MoveSpecification) -> Vec<AddOnCategory> {
    [
        (spec.packing_requested, AddOnCategory::Packing),
        (
            spec.cleaning_requested || spec.allergy_cleaning_requested,
            AddOnCategory::Cleaning,
        ),
        (spec.furniture_assembly, AddOnCategory::FurnitureAssembly),
        (spec.wall_mounting, AddOnCategory::WallMounting),
        (spec.disposal_service, AddOnCategory::Disposal),
    ]
    .into_iter()
    .filter_map(|(active, category)| active.then_some(category))
    .collect()
}

/// Unrounded add-on amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ServiceCosts {
    pub packing: f64,
    pub cleaning: f64,
    pub heavy_items: f64,
    pub long_carry: f64,
    pub furniture_assembly: f64,
    pub wall_mounting: f64,
    pub disposal: f64,
    pub packaging_material: f64,
}

impl ServiceCosts {
    pub fn compute(
        services: &ServiceRates,
        packaging: &PackagingRates,
        spec: &MoveSpecification,
    ) -> Self {
        let flat_fee = |requested: bool, fee: f64| if requested { fee } else { 0.0 };

        Self {
            packing: flat_fee(
                spec.packing_requested,
                spec.living_area_sqm * services.packing_rate_per_sqm,
            ),
            cleaning: cleaning_cost(services, spec),
            heavy_items: f64::from(spec.heavy_item_count) * services.heavy_item_fee,
            long_carry: long_carry_surcharge(services, spec.long_carry, spec.long_carry_extra_meters),
            furniture_assembly: flat_fee(spec.furniture_assembly, services.furniture_assembly_fee),
            wall_mounting: flat_fee(spec.wall_mounting, services.wall_mounting_fee),
            disposal: flat_fee(spec.disposal_service, services.disposal_fee),
            packaging_material: packaging_material_cost(packaging, &spec.box_counts),
        }
    }

    pub fn total(&self) -> f64 {
        self.packing
            + self.cleaning
            + self.heavy_items
            + self.long_carry
            + self.furniture_assembly
            + self.wall_mounting
            + self.disposal
            + self.packaging_material
    }
}

/// Allergy cleaning wins when both cleaning flags are set.
pub fn cleaning_cost(rates: &ServiceRates, spec: &MoveSpecification) -> f64 {
    if spec.allergy_cleaning_requested {
        spec.living_area_sqm * rates.allergy_cleaning_rate_per_sqm
    } else if spec.cleaning_requested {
        spec.living_area_sqm * rates.cleaning_rate_per_sqm
    } else {
        0.0
    }
}

/// Extra meters beyond the cap are not charged.
pub fn long_carry_surcharge(rates: &ServiceRates, long_carry: bool, extra_meters: f64) -> f64 {
    if !long_carry {
        return 0.0;
    }
    extra_meters.min(rates.long_carry_cap_meters) * rates.long_carry_rate_per_meter
}

pub fn packaging_material_cost(rates: &PackagingRates, boxes: &BoxCounts) -> f64 {
    f64::from(boxes.moving_boxes) * rates.moving_box
        + f64::from(boxes.wardrobe_boxes) * rates.wardrobe_box
        + f64::from(boxes.picture_boxes) * rates.picture_box
        + f64::from(boxes.mirror_boxes) * rates.mirror_box
}
