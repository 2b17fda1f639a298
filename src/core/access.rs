use crate::config::rates::AccessRates;
use crate::domain::model::{AccessDescriptor, ElevatorType};

/// Manual carrying cost at one address, linear in volume and floors.
pub fn carry_surcharge(rates: &AccessRates, volume: f64, access: &AccessDescriptor) -> f64 {
    let rate = match access.elevator_type {
        ElevatorType::Large | ElevatorType::None => return 0.0,
        ElevatorType::Small => rates.small_elevator_rate,
        ElevatorType::StairsOnly => rates.stairs_only_rate,
    };
    volume * f64::from(access.floors) * rate
}
