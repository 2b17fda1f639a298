use crate::config::rates::PricingRates;
use crate::core::access::carry_surcharge;
use crate::core::addons::{add_on_categories, ServiceCosts};
use crate::core::breakdown::{assemble, QuoteLedger};
use crate::core::curve::base_price;
use crate::core::discount::StackedDiscounts;
use crate::core::transport::transport_surcharge;
use crate::domain::model::{MoveSpecification, PriceBreakdown};
use crate::domain::ports::RateProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Prices moves against a rate card. Holds no mutable state; share it freely across threads.
pub struct QuoteEngine<R: RateProvider> {
    rates: R,
}

impl QuoteEngine<PricingRates> {
    /// Engine on the production rate card.
    pub fn with_default_rates() -> Self {
        Self {
            rates: PricingRates::default(),
        }
    }
}

impl<R: RateProvider> QuoteEngine<R> {
    /// Rejects a rate card that could produce negative or undefined prices.
    pub fn new(rates: R) -> Result<Self> {
        rates.rates().validate()?;
        Ok(Self { rates })
    }

    pub fn rates(&self) -> &PricingRates {
        self.rates.rates()
    }

    /// Validates `spec` and runs the pricing stages in order. Fails atomically on invalid input.
    pub fn compute_quote(&self, spec: &MoveSpecification) -> Result<PriceBreakdown> {
        spec.validate()?;
        let rates = self.rates.rates();
        let volume = spec.volume_cubic_meters;

        let ledger = QuoteLedger {
            base_price: base_price(&rates.base, volume),
            transport_surcharge: transport_surcharge(&rates.transport, volume, spec.distance_km),
            carry_surcharge_origin: carry_surcharge(&rates.access, volume, &spec.origin_access),
            carry_surcharge_destination: carry_surcharge(
                &rates.access,
                volume,
                &spec.destination_access,
            ),
            services: ServiceCosts::compute(&rates.services, &rates.packaging, spec),
        };
        tracing::debug!(
            base_price = ledger.base_price,
            transport = ledger.transport_surcharge,
            carry_origin = ledger.carry_surcharge_origin,
            carry_destination = ledger.carry_surcharge_destination,
            services = ledger.services.total(),
            "priced cost components"
        );

        let category_count = add_on_categories(spec).len() as u8;
        let discounts =
            StackedDiscounts::compute(&rates.discounts, ledger.subtotal(), category_count, spec);
        tracing::debug!(
            subtotal = discounts.combo.pre_combo_subtotal,
            categories = category_count,
            combo = discounts.combo.combo_discount,
            volume = discounts.tally.volume,
            key_customer = discounts.tally.key_customer,
            season = discounts.tally.season,
            "stacked discounts"
        );

        Ok(assemble(
            &ledger,
            &discounts,
            category_count,
            rates.discounts.combo_rate_per_category,
        ))
    }
}

/// Quotes `spec` against the production rate card.
pub fn compute_quote(spec: &MoveSpecification) -> Result<PriceBreakdown> {
    QuoteEngine::with_default_rates().compute_quote(spec)
}
