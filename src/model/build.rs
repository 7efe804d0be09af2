//! Builders turning raw scraped strings into validated records.

use crate::constants::GAUGE_READING_COUNT;
use crate::error::{Error, Result};
use crate::model::{PowerDetail, VehicleDetail};
use crate::units::{PowerUnit, TorqueUnit, convert_power, convert_torque};
use std::collections::HashMap;

/// Names of the six gauge readings, in page order.
const GAUGE_FIELDS: [&str; GAUGE_READING_COUNT] = [
    "power_stock",
    "power_mapped",
    "power_diff",
    "torque_stock",
    "torque_mapped",
    "torque_diff",
];

/// Build a [`PowerDetail`] from the six gauge texts.
///
/// Each reading is parsed and converted independently from the site's
/// native units (BHP, lb/ft) into the requested ones. The diff readings
/// come from the page, so they are converted from their own scraped
/// values rather than recomputed.
pub fn build_power_detail(
    texts: &[String; GAUGE_READING_COUNT],
    power_unit: PowerUnit,
    torque_unit: TorqueUnit,
    remap_chart_url: Option<String>,
) -> Result<PowerDetail> {
    let power = |index: usize| -> Result<i64> {
        convert_power(parse_reading(&texts[index], GAUGE_FIELDS[index])?, PowerUnit::Bhp, power_unit)
    };
    let torque = |index: usize| -> Result<i64> {
        convert_torque(
            parse_reading(&texts[index], GAUGE_FIELDS[index])?,
            TorqueUnit::LbFt,
            torque_unit,
        )
    };

    Ok(PowerDetail {
        power_stock: power(0)?,
        power_mapped: power(1)?,
        power_diff: power(2)?,
        torque_stock: torque(3)?,
        torque_mapped: torque(4)?,
        torque_diff: torque(5)?,
        power_unit,
        torque_unit,
        remap_chart_url,
    })
}

/// Build a [`VehicleDetail`] from the attribute rows.
///
/// Requires `engine_size`, `variant`, `ecu_type`, `fuel`, `model` and
/// `year`; `engine_size` must split into `<integer> <unit>` and `variant`
/// is renamed to `engine_variant`.
pub fn build_vehicle_detail(rows: &HashMap<String, String>) -> Result<VehicleDetail> {
    let engine_size = required(rows, "engine_size")?;
    let tokens: Vec<&str> = engine_size.split_whitespace().collect();
    let &[displacement_raw, displacement_unit] = tokens.as_slice() else {
        return Err(Error::MalformedField {
            field: "engine_size",
            value: engine_size.to_owned(),
        });
    };
    let displacement = displacement_raw
        .parse()
        .map_err(|_| Error::MalformedField {
            field: "engine_size",
            value: engine_size.to_owned(),
        })?;

    let year_raw = required(rows, "year")?;
    let year = year_raw.parse().map_err(|_| Error::MalformedField {
        field: "year",
        value: year_raw.to_owned(),
    })?;

    Ok(VehicleDetail {
        ecu_type: required(rows, "ecu_type")?.to_owned(),
        displacement,
        displacement_unit: displacement_unit.to_owned(),
        engine_variant: required(rows, "variant")?.to_owned(),
        fuel: required(rows, "fuel")?.to_owned(),
        model: required(rows, "model")?.to_owned(),
        year,
    })
}

fn parse_reading(raw: &str, field: &'static str) -> Result<i64> {
    raw.parse().map_err(|_| Error::MalformedNumber {
        field,
        value: raw.to_owned(),
    })
}

fn required<'a>(rows: &'a HashMap<String, String>, field: &'static str) -> Result<&'a str> {
    rows.get(field)
        .map(String::as_str)
        .ok_or(Error::MissingField { field })
}
