//! Booking form → move specification.
//!
//! The booking form records elevators as `big`/`small`/`none` (anything else
//! means stairs), services as free-text labels, and carrying distance as the
//! walk from the parking spot at each address.

use crate::domain::model::{AccessDescriptor, BoxCounts, ElevatorType, MoveSpecification};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Parking distance that is included in the price.
pub const FREE_CARRY_METERS: f64 = 10.0;

/// Longest parking distance the form can report.
pub const MAX_PARKING_DISTANCE_METERS: f64 = 100.0;

/// Larger parking distances were entered in centimetres.
const CENTIMETRE_THRESHOLD: f64 = 1000.0;

/// Living area assumed when neither address has one.
pub const DEFAULT_LIVING_AREA_SQM: f64 = 80.0;

/// Cubic meters of goods per square meter of living area.
pub const VOLUME_PER_SQM: f64 = 0.35;

pub const NO_PACKING_LABEL: &str = "Ingen packning";
pub const NO_CLEANING_LABEL: &str = "Ingen städning";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingForm {
    pub estimated_volume: Option<f64>,
    pub calculated_distance: Option<f64>,
    pub start_elevator: String,
    pub start_floor: Option<u32>,
    pub end_elevator: String,
    pub end_floor: Option<u32>,
    pub start_living_area: Option<f64>,
    pub end_living_area: Option<f64>,
    pub packing_service: String,
    pub cleaning_service: String,
    pub allergy_cleaning: bool,
    /// Service ids or display names picked on the additional-services step.
    #[serde(alias = "additionalBusinessServices")]
    pub additional_services: Vec<String>,
    pub large_items: Vec<String>,
    pub start_parking_distance: Option<f64>,
    pub end_parking_distance: Option<f64>,
    pub move_date: Option<NaiveDate>,
    pub box_counts: BoxCounts,
    pub key_customer: bool,
}

fn elevator_from_code(code: &str) -> ElevatorType {
    match code {
        "big" => ElevatorType::Large,
        "small" => ElevatorType::Small,
        "none" => ElevatorType::None,
        _ => ElevatorType::StairsOnly,
    }
}

/// A blank label means the step was skipped, so it is not a request either.
fn service_requested(label: &str, declined_label: &str) -> bool {
    let label = label.trim();
    !label.is_empty() && label != declined_label
}

/// November through February.
pub fn is_low_season(move_date: Option<NaiveDate>) -> bool {
    move_date.is_some_and(|date| matches!(date.month(), 11 | 12 | 1 | 2))
}

pub fn sanitize_parking_distance(distance: Option<f64>) -> f64 {
    let distance = distance.unwrap_or(0.0);
    if distance > CENTIMETRE_THRESHOLD {
        (distance / 100.0).floor().min(MAX_PARKING_DISTANCE_METERS)
    } else {
        distance.min(MAX_PARKING_DISTANCE_METERS)
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// Falls back to an estimate from the living area when no volume was given.
pub fn estimated_volume(form: &BookingForm) -> f64 {
    positive(form.estimated_volume).unwrap_or_else(|| {
        let area = positive(form.start_living_area)
            .or_else(|| positive(form.end_living_area))
            .unwrap_or(DEFAULT_LIVING_AREA_SQM);
        (area * VOLUME_PER_SQM).ceil()
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdditionalServices {
    pub furniture_assembly: bool,
    pub wall_mounting: bool,
    pub disposal: bool,
}

impl AdditionalServices {
    /// Unknown entries are ignored.
    pub fn from_selection<S: AsRef<str>>(selection: &[S]) -> Self {
        let mut services = Self::default();
        for entry in selection {
            match entry.as_ref().trim().to_lowercase().as_str() {
                "assembly" | "furniture-assembly" | "möbelmontering" => {
                    services.furniture_assembly = true
                }
                "mounting" | "wall-mounting" | "upphängning & installation" => {
                    services.wall_mounting = true
                }
                "disposal" | "bortforsling & återvinning" => services.disposal = true,
                _ => {}
            }
        }
        services
    }
}

impl From<&BookingForm> for MoveSpecification {
    fn from(form: &BookingForm) -> Self {
        let start_parking = sanitize_parking_distance(form.start_parking_distance);
        let end_parking = sanitize_parking_distance(form.end_parking_distance);
        let extra_meters = (start_parking - FREE_CARRY_METERS)
            .max(end_parking - FREE_CARRY_METERS)
            .max(0.0);
        let additional = AdditionalServices::from_selection(form.additional_services.as_slice());

        Self {
            volume_cubic_meters: estimated_volume(form),
            distance_km: form.calculated_distance.unwrap_or(0.0),
            origin_access: AccessDescriptor::new(
                elevator_from_code(&form.start_elevator),
                form.start_floor.unwrap_or(0),
            ),
            destination_access: AccessDescriptor::new(
                elevator_from_code(&form.end_elevator),
                form.end_floor.unwrap_or(0),
            ),
            living_area_sqm: form.start_living_area.unwrap_or(0.0),
            packing_requested: service_requested(&form.packing_service, NO_PACKING_LABEL),
            cleaning_requested: service_requested(&form.cleaning_service, NO_CLEANING_LABEL),
            allergy_cleaning_requested: form.allergy_cleaning,
            heavy_item_count: form.large_items.len() as u32,
            long_carry: start_parking > FREE_CARRY_METERS || end_parking > FREE_CARRY_METERS,
            long_carry_extra_meters: extra_meters,
            furniture_assembly: additional.furniture_assembly,
            wall_mounting: additional.wall_mounting,
            disposal_service: additional.disposal,
            box_counts: form.box_counts,
            is_key_customer: form.key_customer,
            is_low_season: is_low_season(form.move_date),
        }
    }
}
