//! Power and torque units and the conversions between them.
//!
//! Celtic Tuning publishes every figure in BHP and lb/ft, so conversion is
//! one-directional from those native units. Both directions are still
//! validated so a misrouted call fails loudly instead of returning a
//! silently wrong number.

use crate::constants::conversion;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Units a power reading can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PowerUnit {
    /// Brake horsepower; the unit the site scrapes in.
    #[serde(rename = "BHP")]
    Bhp,
    /// Kilowatts.
    #[serde(rename = "kW")]
    Kw,
    /// Metric horsepower.
    #[serde(rename = "PS")]
    Ps,
}

impl PowerUnit {
    /// All members, in canonical order.
    pub const ALL: [Self; 3] = [Self::Bhp, Self::Kw, Self::Ps];

    /// Comma-separated list of accepted labels, for error messages.
    pub const ALLOWED: &'static str = "BHP, kW, PS";

    /// Canonical textual label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bhp => "BHP",
            Self::Kw => "kW",
            Self::Ps => "PS",
        }
    }
}

impl fmt::Display for PowerUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PowerUnit {
    type Err = Error;

    /// Case-insensitive match against the canonical labels.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidUnit {
                kind: "power",
                value: s.to_string(),
                allowed: Self::ALLOWED,
            })
    }
}

/// Units a torque reading can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TorqueUnit {
    /// Newton-metres.
    #[serde(rename = "Nm")]
    Nm,
    /// Pound-feet; the unit the site scrapes in.
    #[serde(rename = "lb/ft")]
    LbFt,
}

impl TorqueUnit {
    /// All members, in canonical order.
    pub const ALL: [Self; 2] = [Self::Nm, Self::LbFt];

    /// Comma-separated list of accepted labels, for error messages.
    pub const ALLOWED: &'static str = "Nm, lb/ft";

    /// Canonical textual label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nm => "Nm",
            Self::LbFt => "lb/ft",
        }
    }
}

impl fmt::Display for TorqueUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TorqueUnit {
    type Err = Error;

    /// Case-insensitive match against the canonical labels.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidUnit {
                kind: "torque",
                value: s.to_string(),
                allowed: Self::ALLOWED,
            })
    }
}

/// Convert a power reading between units, rounding to the nearest integer.
///
/// Source data is always BHP, so only conversions out of BHP are
/// supported; any other pair is a programming error.
pub fn convert_power(value: i64, from: PowerUnit, to: PowerUnit) -> Result<i64> {
    match (from, to) {
        _ if from == to => Ok(value),
        (PowerUnit::Bhp, PowerUnit::Kw) => Ok(scale(value, conversion::BHP_TO_KW)),
        (PowerUnit::Bhp, PowerUnit::Ps) => Ok(scale(value, conversion::BHP_TO_PS)),
        _ => Err(Error::UnsupportedConversion {
            from: from.label(),
            to: to.label(),
        }),
    }
}

/// Convert a torque reading between units, rounding to the nearest integer.
///
/// Source data is always lb/ft; the reverse direction is not supported.
pub fn convert_torque(value: i64, from: TorqueUnit, to: TorqueUnit) -> Result<i64> {
    match (from, to) {
        _ if from == to => Ok(value),
        (TorqueUnit::LbFt, TorqueUnit::Nm) => Ok(scale(value, conversion::LBFT_TO_NM)),
        _ => Err(Error::UnsupportedConversion {
            from: from.label(),
            to: to.label(),
        }),
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn scale(value: i64, factor: f64) -> i64 {
    (value as f64 * factor).round() as i64
}
