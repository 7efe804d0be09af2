//! Record type definitions.
//!
//! All records are constructed fresh per lookup and immutable afterwards;
//! nothing here persists beyond one query.

use crate::error::Result;
use crate::units::{PowerUnit, TorqueUnit};
use serde::Serialize;

/// A validated lookup request: the registration plus resolved unit
/// preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationQuery {
    /// The vehicle registration, as given (the site matches it
    /// case-insensitively).
    pub registration: String,
    /// Unit the power readings should be expressed in.
    pub power_unit: PowerUnit,
    /// Unit the torque readings should be expressed in.
    pub torque_unit: TorqueUnit,
}

impl RegistrationQuery {
    /// Resolve the requested unit strings and build a query.
    ///
    /// Fails with `InvalidUnit` before any network traffic when either
    /// unit does not name a member of its set.
    pub fn new(registration: &str, power_unit: &str, torque_unit: &str) -> Result<Self> {
        Ok(Self {
            registration: registration.trim().to_owned(),
            power_unit: power_unit.parse()?,
            torque_unit: torque_unit.parse()?,
        })
    }
}

/// The six remap readings plus their units and the optional dyno chart.
///
/// All power readings share `power_unit` and all torque readings share
/// `torque_unit`. The diff readings are scraped from the page in their
/// own right, not computed from the other two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PowerDetail {
    /// Factory power figure.
    pub power_stock: i64,
    /// Power figure after the stage 1 map.
    pub power_mapped: i64,
    /// Power gain as published by the site.
    pub power_diff: i64,
    /// Factory torque figure.
    pub torque_stock: i64,
    /// Torque figure after the stage 1 map.
    pub torque_mapped: i64,
    /// Torque gain as published by the site.
    pub torque_diff: i64,
    /// Unit every power reading is expressed in.
    pub power_unit: PowerUnit,
    /// Unit every torque reading is expressed in.
    pub torque_unit: TorqueUnit,
    /// Dyno chart image link, when the page offers one.
    pub remap_chart_url: Option<String>,
}

impl PowerDetail {
    /// Power gain as a percentage of the stock figure, rounded.
    /// `None` when the stock figure is zero.
    #[must_use]
    pub fn power_diff_pct(&self) -> Option<i64> {
        pct(self.power_diff, self.power_stock)
    }

    /// Torque gain as a percentage of the stock figure, rounded.
    /// `None` when the stock figure is zero.
    #[must_use]
    pub fn torque_diff_pct(&self) -> Option<i64> {
        pct(self.torque_diff, self.torque_stock)
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn pct(diff: i64, stock: i64) -> Option<i64> {
    (stock != 0).then(|| (diff as f64 / stock as f64 * 100.0).round() as i64)
}

/// Vehicle attributes extracted from the result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleDetail {
    /// ECU fitted to the vehicle.
    pub ecu_type: String,
    /// Engine displacement value.
    pub displacement: u32,
    /// Unit the displacement is given in (normally "cc").
    pub displacement_unit: String,
    /// Engine variant designation.
    pub engine_variant: String,
    /// Fuel type.
    pub fuel: String,
    /// Vehicle model.
    pub model: String,
    /// Model year.
    pub year: u16,
}

impl VehicleDetail {
    /// Displacement value and unit as one string, e.g. "1968 cc".
    #[must_use]
    pub fn displacement_formatted(&self) -> String {
        format!("{} {}", self.displacement, self.displacement_unit)
    }

    /// Field names and display values in declared order, for rendering.
    #[must_use]
    pub fn field_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ecu_type", self.ecu_type.clone()),
            ("displacement", self.displacement.to_string()),
            ("displacement_unit", self.displacement_unit.clone()),
            ("engine_variant", self.engine_variant.clone()),
            ("fuel", self.fuel.clone()),
            ("model", self.model.clone()),
            ("year", self.year.to_string()),
        ]
    }
}

/// Everything one lookup produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    /// Remap readings and units.
    pub power_detail: PowerDetail,
    /// Vehicle attributes.
    pub vehicle_detail: VehicleDetail,
    /// Vehicle title as shown on the page.
    pub vehicle_title: String,
    /// Canonical URL of the result page.
    pub result_url: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_query_resolves_units_case_insensitively() {
        let query = RegistrationQuery::new("ab12cde", "kw", "NM").unwrap();
        assert_eq!(query.power_unit, PowerUnit::Kw);
        assert_eq!(query.torque_unit, TorqueUnit::Nm);
        assert_eq!(query.registration, "ab12cde");
    }

    #[test]
    fn test_query_rejects_unknown_power_unit() {
        let err = RegistrationQuery::new("AB12CDE", "watts", "Nm").unwrap_err();
        assert!(matches!(err, Error::InvalidUnit { kind: "power", .. }));
    }

    #[test]
    fn test_query_rejects_unknown_torque_unit() {
        let err = RegistrationQuery::new("AB12CDE", "BHP", "kgm").unwrap_err();
        assert!(matches!(err, Error::InvalidUnit { kind: "torque", .. }));
    }

    #[test]
    fn test_diff_percentages() {
        let detail = PowerDetail {
            power_stock: 200,
            power_mapped: 250,
            power_diff: 50,
            torque_stock: 300,
            torque_mapped: 400,
            torque_diff: 100,
            power_unit: PowerUnit::Bhp,
            torque_unit: TorqueUnit::LbFt,
            remap_chart_url: None,
        };
        assert_eq!(detail.power_diff_pct(), Some(25));
        assert_eq!(detail.torque_diff_pct(), Some(33));
    }

    #[test]
    fn test_diff_percentage_none_for_zero_stock() {
        let detail = PowerDetail {
            power_stock: 0,
            power_mapped: 0,
            power_diff: 0,
            torque_stock: 0,
            torque_mapped: 0,
            torque_diff: 0,
            power_unit: PowerUnit::Bhp,
            torque_unit: TorqueUnit::LbFt,
            remap_chart_url: None,
        };
        assert_eq!(detail.power_diff_pct(), None);
    }

    #[test]
    fn test_displacement_formatted() {
        let detail = VehicleDetail {
            ecu_type: "Bosch EDC17".to_owned(),
            displacement: 1968,
            displacement_unit: "cc".to_owned(),
            engine_variant: "2.0 TDI CR".to_owned(),
            fuel: "Diesel".to_owned(),
            model: "Golf".to_owned(),
            year: 2015,
        };
        assert_eq!(detail.displacement_formatted(), "1968 cc");
    }
}
