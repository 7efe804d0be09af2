//! Typed records built from scraped page fragments.

mod build;
mod types;

pub use build::{build_power_detail, build_vehicle_detail};
pub use types::{LookupResult, PowerDetail, RegistrationQuery, VehicleDetail};
