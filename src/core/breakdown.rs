use crate::core::addons::ServiceCosts;
use crate::core::discount::StackedDiscounts;
use crate::domain::model::{Discounts, PriceBreakdown, Subtotals};

/// Every stage's unrounded output for one quote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteLedger {
    pub base_price: f64,
    pub transport_surcharge: f64,
    pub carry_surcharge_origin: f64,
    pub carry_surcharge_destination: f64,
    pub services: ServiceCosts,
}

impl QuoteLedger {
    pub fn subtotal(&self) -> f64 {
        self.base_price
            + self.transport_surcharge
            + self.carry_surcharge_origin
            + self.carry_surcharge_destination
            + self.services.total()
    }
}

/// Nearest whole unit; amounts are non-negative so halves round up.
fn round(amount: f64) -> i64 {
    amount.round() as i64
}

/// Rounds each field on its own; `final_price` comes from the unrounded computation.
pub fn assemble(
    ledger: &QuoteLedger,
    discounts: &StackedDiscounts,
    add_on_category_count: u8,
    combo_rate_per_category: f64,
) -> PriceBreakdown {
    let services = &ledger.services;
    let combo_percent = f64::from(add_on_category_count) * combo_rate_per_category * 100.0;

    PriceBreakdown {
        final_price: round(discounts.final_price()),
        add_on_category_count,
        combo_discount_percent: combo_percent.round() as u32,
        subtotals: Subtotals {
            base_price: round(ledger.base_price),
            transport_surcharge: round(ledger.transport_surcharge),
            carry_surcharge_origin: round(ledger.carry_surcharge_origin),
            carry_surcharge_destination: round(ledger.carry_surcharge_destination),
            packing_cost: round(services.packing),
            cleaning_cost: round(services.cleaning),
            heavy_item_surcharge: round(services.heavy_items),
            long_carry_surcharge: round(services.long_carry),
            furniture_assembly_cost: round(services.furniture_assembly),
            wall_mounting_cost: round(services.wall_mounting),
            disposal_cost: round(services.disposal),
            packaging_material_cost: round(services.packaging_material),
        },
        discounts: Discounts {
            combo_discount: round(discounts.combo.combo_discount),
            volume_discount: round(discounts.tally.volume),
            key_customer_discount: round(discounts.tally.key_customer),
            season_discount: round(discounts.tally.season),
            total_discount: round(discounts.reported_total()),
        },
    }
}
