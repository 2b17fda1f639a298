//! CSV batch quoting: one flat move per input row, one flat quote per output row.

use crate::core::engine::QuoteEngine;
use crate::domain::model::{
    AccessDescriptor, BoxCounts, ElevatorType, MoveSpecification, PriceBreakdown,
};
use crate::domain::ports::RateProvider;
use crate::utils::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRow {
    pub id: String,
    pub volume_cubic_meters: f64,
    pub distance_km: f64,
    pub origin_elevator: ElevatorType,
    pub origin_floors: u32,
    pub destination_elevator: ElevatorType,
    pub destination_floors: u32,
    pub living_area_sqm: f64,
    pub packing_requested: bool,
    pub cleaning_requested: bool,
    pub allergy_cleaning_requested: bool,
    pub heavy_item_count: u32,
    pub long_carry: bool,
    pub long_carry_extra_meters: f64,
    pub furniture_assembly: bool,
    pub wall_mounting: bool,
    pub disposal_service: bool,
    pub moving_boxes: u32,
    pub wardrobe_boxes: u32,
    pub picture_boxes: u32,
    pub mirror_boxes: u32,
    pub is_key_customer: bool,
    pub is_low_season: bool,
}

impl From<&MoveRow> for MoveSpecification {
    fn from(row: &MoveRow) -> Self {
        Self {
            volume_cubic_meters: row.volume_cubic_meters,
            distance_km: row.distance_km,
            origin_access: AccessDescriptor::new(row.origin_elevator, row.origin_floors),
            destination_access: AccessDescriptor::new(
                row.destination_elevator,
                row.destination_floors,
            ),
            living_area_sqm: row.living_area_sqm,
            packing_requested: row.packing_requested,
            cleaning_requested: row.cleaning_requested,
            allergy_cleaning_requested: row.allergy_cleaning_requested,
            heavy_item_count: row.heavy_item_count,
            long_carry: row.long_carry,
            long_carry_extra_meters: row.long_carry_extra_meters,
            furniture_assembly: row.furniture_assembly,
            wall_mounting: row.wall_mounting,
            disposal_service: row.disposal_service,
            box_counts: BoxCounts {
                moving_boxes: row.moving_boxes,
                wardrobe_boxes: row.wardrobe_boxes,
                picture_boxes: row.picture_boxes,
                mirror_boxes: row.mirror_boxes,
            },
            is_key_customer: row.is_key_customer,
            is_low_season: row.is_low_season,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRow {
    pub id: String,
    pub status: QuoteStatus,
    pub final_price: Option<i64>,
    pub pre_discount_subtotal: Option<i64>,
    pub total_discount: Option<i64>,
    pub add_on_category_count: Option<u8>,
    pub error: Option<String>,
}

impl QuoteRow {
    pub fn accepted(id: &str, breakdown: &PriceBreakdown) -> Self {
        Self {
            id: id.to_string(),
            status: QuoteStatus::Accepted,
            final_price: Some(breakdown.final_price),
            // rounded identity; may differ from the sum of rounded subtotals by rounding
            pre_discount_subtotal: Some(breakdown.final_price + breakdown.discounts.total_discount),
            total_discount: Some(breakdown.discounts.total_discount),
            add_on_category_count: Some(breakdown.add_on_category_count),
            error: None,
        }
    }

    pub fn rejected(id: &str, error: &QuoteError) -> Self {
        Self {
            id: id.to_string(),
            status: QuoteStatus::Rejected,
            final_price: None,
            pre_discount_subtotal: None,
            total_discount: None,
            add_on_category_count: None,
            error: Some(error.to_string()),
        }
    }
}

/// One input row; a row that does not deserialize is kept with its error so the rest of the batch still runs.
#[derive(Debug)]
pub struct ParsedRow {
    pub id: String,
    pub row: Result<MoveRow>,
}

/// Header or structural CSV errors fail the whole batch; field errors only fail their row.
pub fn read_move_rows<R: Read>(reader: R) -> Result<Vec<ParsedRow>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let id_column = headers.iter().position(|header| header == "id");

    let mut rows = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let id = id_column
            .and_then(|column| record.get(column))
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("row-{}", index + 1));
        let row = record
            .deserialize::<MoveRow>(Some(&headers))
            .map_err(QuoteError::from);
        rows.push(ParsedRow { id, row });
    }
    Ok(rows)
}

/// Quotes every row independently; a failing row becomes a `rejected` quote row.
pub fn quote_rows<R: RateProvider>(engine: &QuoteEngine<R>, parsed: &[ParsedRow]) -> Vec<QuoteRow> {
    parsed
        .iter()
        .map(|parsed_row| {
            let result = match &parsed_row.row {
                Ok(row) => engine.compute_quote(&MoveSpecification::from(row)),
                Err(e) => Err(QuoteError::validation("row", &parsed_row.id, e.to_string())),
            };
            match result {
                Ok(breakdown) => QuoteRow::accepted(&parsed_row.id, &breakdown),
                Err(e) => {
                    tracing::warn!("Row {} rejected: {}", parsed_row.id, e);
                    QuoteRow::rejected(&parsed_row.id, &e)
                }
            }
        })
        .collect()
}

pub fn write_quote_rows<W: Write>(writer: W, rows: &[QuoteRow]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
