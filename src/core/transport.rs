use crate::config::rates::TransportRates;

/// Trucks needed to carry `volume`, as a whole number kept in `f64` so huge volumes do not saturate.
pub fn truck_count(rates: &TransportRates, volume: f64) -> f64 {
    (volume / rates.truck_capacity_cubic_meters).ceil()
}

/// Sub-linear fleet scaling: one truck is ×1.0, two ×1.7, three ×2.4 with the default rates.
pub fn truck_multiplier(rates: &TransportRates, trucks: f64) -> f64 {
    trucks * rates.truck_multiplier_step + rates.truck_multiplier_base
}

pub fn per_truck_rate(rates: &TransportRates, distance_km: f64) -> f64 {
    if distance_km <= rates.regional_distance_limit_km {
        rates.regional_rate_per_km
    } else {
        rates.long_distance_rate_per_km
    }
}

/// Zero for local moves; otherwise `distance × per-truck rate × truck multiplier`.
pub fn transport_surcharge(rates: &TransportRates, volume: f64, distance_km: f64) -> f64 {
    if distance_km <= rates.local_distance_limit_km {
        return 0.0;
    }
    let per_truck = distance_km * per_truck_rate(rates, distance_km);
    per_truck * truck_multiplier(rates, truck_count(rates, volume))
}
