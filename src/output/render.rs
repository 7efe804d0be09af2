//! Pretty rendering of a lookup result.

use crate::model::LookupResult;
use std::fmt::Write as _;

/// Render a lookup result as the multi-line text the CLI prints by
/// default: the vehicle title, an aligned vehicle-data block, the remap
/// figures with their units, and the source URLs.
#[must_use]
pub fn pretty(result: &LookupResult) -> String {
    let detail = &result.power_detail;
    let power_unit = detail.power_unit;
    let torque_unit = detail.torque_unit;
    let chart_url = detail.remap_chart_url.as_deref().unwrap_or("n/a");

    format!(
        "Found vehicle: {title}\n\
         \n\
         == VEHICLE DATA ==\n\
         {vehicle_block}\n\
         \n\
         == REMAP DATA ==\n\
         Stock power:  {} {power_unit}\n\
         Mapped power: {} {power_unit}\n\
         \n\
         Stock torque:  {} {torque_unit}\n\
         Mapped torque: {} {torque_unit}\n\
         \n\
         Power increase:  {} {power_unit}\n\
         Torque increase: {} {torque_unit}\n\
         \n\
         Result URL: {result_url}\n\
         Chart URL: {chart_url}",
        detail.power_stock,
        detail.power_mapped,
        detail.torque_stock,
        detail.torque_mapped,
        detail.power_diff,
        detail.torque_diff,
        title = result.vehicle_title,
        vehicle_block = vehicle_block(result),
        result_url = result.result_url,
    )
}

/// One line per vehicle field, labels title-cased and values right-aligned
/// to the longest field name.
fn vehicle_block(result: &LookupResult) -> String {
    let rows = result.vehicle_detail.field_rows();
    let width = rows.iter().map(|(field, _)| field.len()).max().unwrap_or(0);

    let mut block = String::new();
    for (field, value) in &rows {
        let label = title_case(field);
        let pad = width.saturating_sub(label.len());
        let _ = writeln!(block, "{label}: {}{value}", " ".repeat(pad));
    }
    block.truncate(block.trim_end_matches('\n').len());
    block
}

/// `engine_variant` -> `Engine Variant`.
fn title_case(field: &str) -> String {
    field
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{PowerDetail, VehicleDetail};
    use crate::units::{PowerUnit, TorqueUnit};

    fn sample_result() -> LookupResult {
        LookupResult {
            power_detail: PowerDetail {
                power_stock: 200,
                power_mapped: 250,
                power_diff: 50,
                torque_stock: 244,
                torque_mapped: 298,
                torque_diff: 54,
                power_unit: PowerUnit::Bhp,
                torque_unit: TorqueUnit::Nm,
                remap_chart_url: None,
            },
            vehicle_detail: VehicleDetail {
                ecu_type: "Bosch".to_owned(),
                displacement: 2000,
                displacement_unit: "cc".to_owned(),
                engine_variant: "GTI".to_owned(),
                fuel: "Petrol".to_owned(),
                model: "Golf".to_owned(),
                year: 2015,
            },
            vehicle_title: "Volkswagen Golf GTI".to_owned(),
            result_url: "https://www.celtictuning.co.uk/component/ctvc/search/1/2".to_owned(),
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("ecu_type"), "Ecu Type");
        assert_eq!(title_case("displacement_unit"), "Displacement Unit");
        assert_eq!(title_case("year"), "Year");
    }

    #[test]
    fn test_vehicle_labels_right_align_values() {
        let rendered = pretty(&sample_result());
        // "displacement_unit" is the longest field, so its value sits
        // directly after the colon and shorter labels are padded out.
        assert!(rendered.contains("Displacement Unit: cc"));
        assert!(rendered.contains("Fuel:              Petrol"));
        assert!(rendered.contains("Year:              2015"));
    }

    #[test]
    fn test_remap_block_is_unit_qualified() {
        let rendered = pretty(&sample_result());
        assert!(rendered.contains("Stock power:  200 BHP"));
        assert!(rendered.contains("Mapped power: 250 BHP"));
        assert!(rendered.contains("Stock torque:  244 Nm"));
        assert!(rendered.contains("Mapped torque: 298 Nm"));
        assert!(rendered.contains("Power increase:  50 BHP"));
        assert!(rendered.contains("Torque increase: 54 Nm"));
    }

    #[test]
    fn test_header_and_urls() {
        let rendered = pretty(&sample_result());
        assert!(rendered.starts_with("Found vehicle: Volkswagen Golf GTI\n"));
        assert!(rendered.contains("== VEHICLE DATA =="));
        assert!(rendered.contains("== REMAP DATA =="));
        assert!(rendered
            .contains("Result URL: https://www.celtictuning.co.uk/component/ctvc/search/1/2"));
        assert!(rendered.ends_with("Chart URL: n/a"));
    }

    #[test]
    fn test_chart_url_rendered_when_present() {
        let mut result = sample_result();
        result.power_detail.remap_chart_url = Some("/images/chart.png".to_owned());
        assert!(pretty(&result).ends_with("Chart URL: /images/chart.png"));
    }
}
