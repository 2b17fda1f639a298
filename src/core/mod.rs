pub mod access;
pub mod addons;
pub mod breakdown;
pub mod curve;
pub mod discount;
pub mod engine;
pub mod transport;

pub use crate::domain::model::{MoveSpecification, PriceBreakdown};
pub use crate::domain::ports::{RateProvider, Storage};
pub use crate::utils::error::Result;
