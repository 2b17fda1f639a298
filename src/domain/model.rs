use crate::utils::error::QuoteError;
use crate::utils::validation::{validate_non_negative, validate_positive, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lift available at a pickup or delivery address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ElevatorType {
    /// No elevator and no stairs to speak of (ground floor).
    None,
    Small,
    Large,
    StairsOnly,
}

impl ElevatorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElevatorType::None => "none",
            ElevatorType::Small => "small",
            ElevatorType::Large => "large",
            ElevatorType::StairsOnly => "stairs_only",
        }
    }
}

impl FromStr for ElevatorType {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "ingen" => Ok(ElevatorType::None),
            "small" | "liten" => Ok(ElevatorType::Small),
            "large" | "stor" => Ok(ElevatorType::Large),
            "stairs_only" | "stairsonly" | "stairs" | "trappa" => Ok(ElevatorType::StairsOnly),
            _ => Err(QuoteError::validation(
                "elevator_type",
                s,
                "must be one of none, small, large, stairs_only",
            )),
        }
    }
}

impl TryFrom<String> for ElevatorType {
    type Error = QuoteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ElevatorType> for String {
    fn from(value: ElevatorType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ElevatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccessDescriptor {
    pub elevator_type: ElevatorType,
    #[serde(default)]
    pub floors: u32,
}

impl AccessDescriptor {
    pub fn new(elevator_type: ElevatorType, floors: u32) -> Self {
        Self {
            elevator_type,
            floors,
        }
    }

    pub fn ground_floor() -> Self {
        Self::new(ElevatorType::Large, 0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxCounts {
    pub moving_boxes: u32,
    pub wardrobe_boxes: u32,
    pub picture_boxes: u32,
    pub mirror_boxes: u32,
}

/// Everything the engine needs to know about one move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveSpecification {
    pub volume_cubic_meters: f64,
    #[serde(default)]
    pub distance_km: f64,
    pub origin_access: AccessDescriptor,
    pub destination_access: AccessDescriptor,
    #[serde(default)]
    pub living_area_sqm: f64,
    #[serde(default)]
    pub packing_requested: bool,
    #[serde(default)]
    pub cleaning_requested: bool,
    #[serde(default)]
    pub allergy_cleaning_requested: bool,
    #[serde(default)]
    pub heavy_item_count: u32,
    #[serde(default)]
    pub long_carry: bool,
    #[serde(default)]
    pub long_carry_extra_meters: f64,
    #[serde(default)]
    pub furniture_assembly: bool,
    #[serde(default)]
    pub wall_mounting: bool,
    #[serde(default)]
    pub disposal_service: bool,
    #[serde(default)]
    pub box_counts: BoxCounts,
    #[serde(default)]
    pub is_key_customer: bool,
    #[serde(default)]
    pub is_low_season: bool,
}

impl MoveSpecification {
    /// A bare move: given volume and distance, large elevators at both ends, no services.
    pub fn new(volume_cubic_meters: f64, distance_km: f64) -> Self {
        Self {
            volume_cubic_meters,
            distance_km,
            origin_access: AccessDescriptor::ground_floor(),
            destination_access: AccessDescriptor::ground_floor(),
            living_area_sqm: 0.0,
            packing_requested: false,
            cleaning_requested: false,
            allergy_cleaning_requested: false,
            heavy_item_count: 0,
            long_carry: false,
            long_carry_extra_meters: 0.0,
            furniture_assembly: false,
            wall_mounting: false,
            disposal_service: false,
            box_counts: BoxCounts::default(),
            is_key_customer: false,
            is_low_season: false,
        }
    }
}

impl Validate for MoveSpecification {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_positive("volume_cubic_meters", self.volume_cubic_meters)?;
        validate_non_negative("distance_km", self.distance_km)?;
        validate_non_negative("living_area_sqm", self.living_area_sqm)?;
        validate_non_negative("long_carry_extra_meters", self.long_carry_extra_meters)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtotals {
    pub base_price: i64,
    pub transport_surcharge: i64,
    pub carry_surcharge_origin: i64,
    pub carry_surcharge_destination: i64,
    pub packing_cost: i64,
    pub cleaning_cost: i64,
    pub heavy_item_surcharge: i64,
    pub long_carry_surcharge: i64,
    pub furniture_assembly_cost: i64,
    pub wall_mounting_cost: i64,
    pub disposal_cost: i64,
    pub packaging_material_cost: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discounts {
    pub combo_discount: i64,
    pub volume_discount: i64,
    pub key_customer_discount: i64,
    pub season_discount: i64,
    /// Includes the combo discount, so `final_price = pre-discount subtotal - total_discount`.
    pub total_discount: i64,
}

/// Itemized quote. All amounts are whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub final_price: i64,
    pub add_on_category_count: u8,
    pub combo_discount_percent: u32,
    pub subtotals: Subtotals,
    pub discounts: Discounts,
}

/// A priced move as handed to the booking store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteReport {
    pub generated_at: DateTime<Utc>,
    pub rate_card: String,
    pub specification: MoveSpecification,
    pub breakdown: PriceBreakdown,
}

impl QuoteReport {
    pub fn new(rate_card: &str, specification: MoveSpecification, breakdown: PriceBreakdown) -> Self {
        Self {
            generated_at: Utc::now(),
            rate_card: rate_card.to_string(),
            specification,
            breakdown,
        }
    }
}
