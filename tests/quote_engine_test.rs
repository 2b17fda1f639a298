use move_quote::core::access::carry_surcharge;
use move_quote::core::addons::ServiceCosts;
use move_quote::core::curve::{base_price, VolumeCurve};
use move_quote::core::transport::transport_surcharge;
use move_quote::{
    compute_quote, AccessDescriptor, BoxCounts, ElevatorType, MoveSpecification, PricingRates,
    QuoteEngine, QuoteError,
};
use proptest::prelude::*;

fn pre_discount_subtotal(spec: &MoveSpecification) -> f64 {
    let rates = PricingRates::default();
    let volume = spec.volume_cubic_meters;
    base_price(&rates.base, volume)
        + transport_surcharge(&rates.transport, volume, spec.distance_km)
        + carry_surcharge(&rates.access, volume, &spec.origin_access)
        + carry_surcharge(&rates.access, volume, &spec.destination_access)
        + ServiceCosts::compute(&rates.services, &rates.packaging, spec).total()
}

#[test]
fn test_local_move_prices_at_base() {
    let spec = MoveSpecification::new(10.0, 30.0);
    let breakdown = compute_quote(&spec).unwrap();

    assert_eq!(breakdown.subtotals.base_price, 2600);
    assert_eq!(breakdown.subtotals.transport_surcharge, 0);
    assert_eq!(breakdown.final_price, breakdown.subtotals.base_price);
}

#[test]
fn test_long_distance_multi_truck_move() {
    let spec = MoveSpecification::new(60.0, 600.0);
    let breakdown = compute_quote(&spec).unwrap();

    assert_eq!(breakdown.subtotals.base_price, 7680);
    assert_eq!(breakdown.subtotals.transport_surcharge, 27900);
    // 60 m³ earns the 5% volume tier
    assert_eq!(breakdown.discounts.volume_discount, 1779);
    assert_eq!(breakdown.final_price, 33801);
    assert_eq!(breakdown.discounts.total_discount, 1779);
}

#[test]
fn test_combo_then_independent_discounts() {
    let mut spec = MoveSpecification::new(80.0, 30.0);
    spec.living_area_sqm = 60.0;
    spec.packing_requested = true;
    spec.cleaning_requested = true;
    spec.furniture_assembly = true;
    spec.is_key_customer = true;
    spec.is_low_season = true;

    let breakdown = compute_quote(&spec).unwrap();

    assert_eq!(breakdown.add_on_category_count, 3);
    assert_eq!(breakdown.combo_discount_percent, 15);
    assert_eq!(breakdown.subtotals.base_price, 10240);
    assert_eq!(breakdown.subtotals.packing_cost, 2640);
    assert_eq!(breakdown.subtotals.cleaning_cost, 2640);
    assert_eq!(breakdown.subtotals.furniture_assembly_cost, 1500);

    // subtotal 17020, combo 2553, reduced 14467
    assert_eq!(breakdown.discounts.combo_discount, 2553);
    assert_eq!(breakdown.discounts.volume_discount, 1447);
    assert_eq!(breakdown.discounts.key_customer_discount, 1447);
    assert_eq!(breakdown.discounts.season_discount, 1157);
    assert_eq!(breakdown.discounts.total_discount, 6604);
    assert_eq!(breakdown.final_price, 10416);
}

#[test]
fn test_every_cost_component() {
    let spec = MoveSpecification {
        volume_cubic_meters: 20.0,
        distance_km: 100.0,
        origin_access: AccessDescriptor::new(ElevatorType::StairsOnly, 2),
        destination_access: AccessDescriptor::new(ElevatorType::Small, 4),
        living_area_sqm: 50.0,
        packing_requested: true,
        cleaning_requested: false,
        allergy_cleaning_requested: true,
        heavy_item_count: 1,
        long_carry: true,
        long_carry_extra_meters: 15.0,
        furniture_assembly: false,
        wall_mounting: true,
        disposal_service: true,
        box_counts: BoxCounts {
            moving_boxes: 10,
            wardrobe_boxes: 1,
            picture_boxes: 1,
            mirror_boxes: 0,
        },
        is_key_customer: false,
        is_low_season: false,
    };

    let breakdown = compute_quote(&spec).unwrap();
    let subtotals = breakdown.subtotals;

    assert_eq!(subtotals.transport_surcharge, 1768);
    assert_eq!(subtotals.carry_surcharge_origin, 800);
    assert_eq!(subtotals.carry_surcharge_destination, 800);
    assert_eq!(subtotals.packing_cost, 2200);
    assert_eq!(subtotals.cleaning_cost, 3250);
    assert_eq!(subtotals.heavy_item_surcharge, 800);
    assert_eq!(subtotals.long_carry_surcharge, 1200);
    assert_eq!(subtotals.furniture_assembly_cost, 0);
    assert_eq!(subtotals.wall_mounting_cost, 1200);
    assert_eq!(subtotals.disposal_cost, 1800);
    assert_eq!(subtotals.packaging_material_cost, 300);
    assert_eq!(breakdown.add_on_category_count, 4);
    assert_eq!(breakdown.combo_discount_percent, 20);
}

#[test]
fn test_validation_error_fails_whole_quote() {
    let mut spec = MoveSpecification::new(12.0, 40.0);
    spec.living_area_sqm = -20.0;

    match compute_quote(&spec) {
        Err(QuoteError::ValidationError { field, .. }) => assert_eq!(field, "living_area_sqm"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(QuoteEngine::with_default_rates());
    let handles: Vec<_> = (1..=4u32)
        .map(|i| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                engine
                    .compute_quote(&MoveSpecification::new(10.0 * f64::from(i), 120.0))
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let expected =
            compute_quote(&MoveSpecification::new(10.0 * (i as f64 + 1.0), 120.0)).unwrap();
        assert_eq!(handle.join().unwrap(), expected);
    }
}

fn elevator_strategy() -> impl Strategy<Value = ElevatorType> {
    prop_oneof![
        Just(ElevatorType::None),
        Just(ElevatorType::Small),
        Just(ElevatorType::Large),
        Just(ElevatorType::StairsOnly),
    ]
}

fn access_strategy() -> impl Strategy<Value = AccessDescriptor> {
    (elevator_strategy(), 0u32..12).prop_map(|(elevator, floors)| AccessDescriptor::new(elevator, floors))
}

fn spec_strategy() -> impl Strategy<Value = MoveSpecification> {
    let sizes = (
        0.1f64..200.0,
        0.0f64..1200.0,
        access_strategy(),
        access_strategy(),
        0.0f64..300.0,
        0u32..6,
        0.0f64..200.0,
    );
    let flags = prop::array::uniform9(any::<bool>());
    let boxes = (0u32..80, 0u32..10, 0u32..10, 0u32..10);

    (sizes, flags, boxes).prop_map(
        |((volume, distance, origin, destination, area, heavy, extra), f, (mv, wd, pc, mr))| {
            MoveSpecification {
                volume_cubic_meters: volume,
                distance_km: distance,
                origin_access: origin,
                destination_access: destination,
                living_area_sqm: area,
                packing_requested: f[0],
                cleaning_requested: f[1],
                allergy_cleaning_requested: f[2],
                heavy_item_count: heavy,
                long_carry: f[3],
                long_carry_extra_meters: extra,
                furniture_assembly: f[4],
                wall_mounting: f[5],
                disposal_service: f[6],
                box_counts: BoxCounts {
                    moving_boxes: mv,
                    wardrobe_boxes: wd,
                    picture_boxes: pc,
                    mirror_boxes: mr,
                },
                is_key_customer: f[7],
                is_low_season: f[8],
            }
        },
    )
}

proptest! {
    #[test]
    fn prop_quote_is_deterministic(spec in spec_strategy()) {
        prop_assert_eq!(compute_quote(&spec).unwrap(), compute_quote(&spec).unwrap());
    }

    #[test]
    fn prop_final_price_matches_discount_identity(spec in spec_strategy()) {
        let breakdown = compute_quote(&spec).unwrap();
        let pre = pre_discount_subtotal(&spec);
        let reported = (breakdown.final_price + breakdown.discounts.total_discount) as f64;
        prop_assert!((reported - pre).abs() <= 1.0 + 1e-6, "{} vs {}", reported, pre);
    }

    #[test]
    fn prop_amounts_are_non_negative(spec in spec_strategy()) {
        let b = compute_quote(&spec).unwrap();
        let s = b.subtotals;
        for amount in [
            s.base_price, s.transport_surcharge, s.carry_surcharge_origin,
            s.carry_surcharge_destination, s.packing_cost, s.cleaning_cost,
            s.heavy_item_surcharge, s.long_carry_surcharge, s.furniture_assembly_cost,
            s.wall_mounting_cost, s.disposal_cost, s.packaging_material_cost,
            b.discounts.combo_discount, b.discounts.volume_discount,
            b.discounts.key_customer_discount, b.discounts.season_discount,
            b.discounts.total_discount, b.final_price,
        ] {
            prop_assert!(amount >= 0);
        }
    }

    #[test]
    fn prop_combo_discount_is_capped(spec in spec_strategy()) {
        let breakdown = compute_quote(&spec).unwrap();
        let pre = pre_discount_subtotal(&spec);
        prop_assert!(breakdown.add_on_category_count <= 5);
        prop_assert_eq!(
            breakdown.combo_discount_percent,
            u32::from(breakdown.add_on_category_count) * 5
        );
        prop_assert!(breakdown.discounts.combo_discount as f64 <= pre * 0.25 + 0.5);
    }

    #[test]
    fn prop_small_moves_hit_minimum(volume in 0.1f64..5.0) {
        let breakdown = compute_quote(&MoveSpecification::new(volume, 10.0)).unwrap();
        prop_assert_eq!(breakdown.subtotals.base_price, 1600);
    }

    #[test]
    fn prop_local_moves_have_no_transport(volume in 0.1f64..300.0, distance in 0.0f64..=50.0) {
        let breakdown = compute_quote(&MoveSpecification::new(volume, distance)).unwrap();
        prop_assert_eq!(breakdown.subtotals.transport_surcharge, 0);
    }

    #[test]
    fn prop_long_carry_above_cap_costs_the_same(extra in 100.0f64..1000.0) {
        let mut capped = MoveSpecification::new(15.0, 10.0);
        capped.long_carry = true;
        capped.long_carry_extra_meters = 100.0;
        let mut beyond = capped.clone();
        beyond.long_carry_extra_meters = extra;

        prop_assert_eq!(
            compute_quote(&capped).unwrap().subtotals.long_carry_surcharge,
            compute_quote(&beyond).unwrap().subtotals.long_carry_surcharge
        );
    }

    #[test]
    fn prop_curve_is_non_increasing(a in 0.1f64..100.0, b in 0.1f64..100.0) {
        let rates = PricingRates::default();
        let curve = VolumeCurve::new(&rates.base.volume_curve);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(curve.price_for_volume(low) >= curve.price_for_volume(high) - 1e-9);
    }
}
