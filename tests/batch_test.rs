use anyhow::Result;
use move_quote::adapters::batch::{quote_rows, read_move_rows, write_quote_rows, QuoteStatus};
use move_quote::adapters::booking::BookingForm;
use move_quote::adapters::spec_file::{parse_move_specification, SpecFormat};
use move_quote::core::Storage;
use move_quote::{compute_quote, LocalStorage, MoveSpecification, QuoteEngine, TomlConfig};
use tempfile::TempDir;

const HEADER: &str = "id,volume_cubic_meters,distance_km,origin_elevator,origin_floors,destination_elevator,destination_floors,living_area_sqm,packing_requested,cleaning_requested,allergy_cleaning_requested,heavy_item_count,long_carry,long_carry_extra_meters,furniture_assembly,wall_mounting,disposal_service,moving_boxes,wardrobe_boxes,picture_boxes,mirror_boxes,is_key_customer,is_low_season";

/// 批次中的無效列只影響自己，其餘照常報價
#[test]
fn test_batch_rejects_only_invalid_rows() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path());

    let csv_content = format!(
        "{}\n\
         local,10,30,large,0,large,0,0,false,false,false,0,false,0,false,false,false,0,0,0,0,false,false\n\
         empty,0,30,large,0,large,0,0,false,false,false,0,false,0,false,false,false,0,0,0,0,false,false\n\
         stairs,25,80,trappa,3,small,1,70,true,true,false,0,false,0,false,false,false,30,0,0,0,true,false\n\
         bad-lift,25,80,paternoster,3,small,1,70,true,true,false,0,false,0,false,false,false,30,0,0,0,true,false\n",
        HEADER
    );
    storage.write_file("moves.csv", csv_content.as_bytes())?;

    let parsed = storage.load_move_rows("moves.csv")?;
    let engine = QuoteEngine::with_default_rates();
    let rows = quote_rows(&engine, &parsed);

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].status, QuoteStatus::Accepted);
    assert_eq!(rows[0].final_price, Some(2600));
    assert_eq!(rows[1].status, QuoteStatus::Rejected);
    assert!(rows[1].error.as_deref().unwrap().contains("volume_cubic_meters"));
    assert_eq!(rows[2].status, QuoteStatus::Accepted);
    assert_eq!(rows[2].add_on_category_count, Some(2));
    assert_eq!(rows[3].status, QuoteStatus::Rejected);

    let mut buffer = Vec::new();
    write_quote_rows(&mut buffer, &rows)?;
    storage.write_file("out/quotes.csv", &buffer)?;

    let written = String::from_utf8(storage.read_file("out/quotes.csv")?)?;
    assert_eq!(written.lines().count(), 5);
    assert!(written.contains("local,accepted,2600,2600,0,0,"));

    Ok(())
}

/// id 欄位不在第一欄時仍以表頭名稱取值
#[test]
fn test_batch_id_column_found_by_header_name() -> Result<()> {
    let reordered_header = HEADER.replacen("id,volume_cubic_meters", "volume_cubic_meters,id", 1);
    let csv_content = format!(
        "{}\n\
         10,q-1,30,large,0,large,0,0,false,false,false,0,false,0,false,false,false,0,0,0,0,false,false\n\
         0,q-2,30,large,0,large,0,0,false,false,false,0,false,0,false,false,false,0,0,0,0,false,false\n",
        reordered_header
    );

    let parsed = read_move_rows(csv_content.as_bytes())?;
    assert_eq!(parsed[0].id, "q-1");
    assert_eq!(parsed[1].id, "q-2");

    let rows = quote_rows(&QuoteEngine::with_default_rates(), &parsed);
    assert_eq!(rows[0].id, "q-1");
    assert_eq!(rows[0].status, QuoteStatus::Accepted);
    assert_eq!(rows[1].id, "q-2");
    assert_eq!(rows[1].status, QuoteStatus::Rejected);

    Ok(())
}

#[test]
fn test_rate_card_file_changes_prices() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let rates_path = temp_dir.path().join("rates.toml");
    std::fs::write(
        &rates_path,
        r#"
[quote]
name = "minimum-2000"

[rates.base]
minimum_base_price = 2000
"#,
    )?;

    let config = TomlConfig::from_file(&rates_path)?;
    assert_eq!(config.name(), "minimum-2000");
    let engine = QuoteEngine::new(config)?;

    let spec = MoveSpecification::new(4.0, 10.0);
    assert_eq!(engine.compute_quote(&spec)?.subtotals.base_price, 2000);
    assert_eq!(compute_quote(&spec)?.subtotals.base_price, 1600);

    Ok(())
}

#[test]
fn test_json_spec_file_round_trip_through_engine() -> Result<()> {
    let json = r#"{
        "volume_cubic_meters": 45,
        "distance_km": 250,
        "origin_access": { "elevator_type": "stairsOnly", "floors": 1 },
        "destination_access": { "elevator_type": "none" },
        "living_area_sqm": 90,
        "allergy_cleaning_requested": true,
        "disposal_service": true
    }"#;

    let spec = parse_move_specification(json.as_bytes(), SpecFormat::from_path("move.json")?)?;
    let breakdown = compute_quote(&spec)?;

    assert_eq!(breakdown.subtotals.carry_surcharge_origin, 900);
    assert_eq!(breakdown.subtotals.carry_surcharge_destination, 0);
    assert_eq!(breakdown.subtotals.cleaning_cost, 5850);
    assert_eq!(breakdown.subtotals.disposal_cost, 1800);
    assert_eq!(breakdown.add_on_category_count, 2);

    Ok(())
}

#[test]
fn test_booking_form_to_quote() -> Result<()> {
    let form: BookingForm = serde_json::from_str(
        r#"{
            "estimatedVolume": 18,
            "calculatedDistance": 12,
            "startElevator": "small",
            "startFloor": 4,
            "endElevator": "big",
            "startLivingArea": 55,
            "packingService": "Ingen packning",
            "cleaningService": "Flyttstädning",
            "largeItems": ["piano"],
            "startParkingDistance": 40
        }"#,
    )?;

    let spec = MoveSpecification::from(&form);
    let breakdown = compute_quote(&spec)?;

    assert_eq!(breakdown.subtotals.carry_surcharge_origin, 720);
    assert_eq!(breakdown.subtotals.cleaning_cost, 2420);
    assert_eq!(breakdown.subtotals.heavy_item_surcharge, 800);
    assert_eq!(breakdown.subtotals.long_carry_surcharge, 2400);
    assert_eq!(breakdown.add_on_category_count, 1);

    Ok(())
}
