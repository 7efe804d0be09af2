//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track. The `markup` module in particular is
//! the single place that knows about Celtic Tuning's current page
//! structure; when the site changes, this is the file to adjust.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "remapq";

/// Default Celtic Tuning site root.
pub const DEFAULT_BASE_URL: &str = "https://www.celtictuning.co.uk";

/// Search endpoint path; the registration is appended verbatim.
pub const SEARCH_PATH: &str = "/component/ctvc/search?dvla=";

/// Redirect target the search endpoint answers with when no vehicle
/// matched the registration.
pub const NOT_FOUND_PATH: &str = "/component/ctvc/#t3-content";

/// Body substring on result pages that could not be resolved to a single
/// vehicle variant. Treated the same as an unmatched registration.
pub const VARIANT_PROMPT: &str = "Please select variant";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default power unit when neither the CLI nor the config names one.
/// Matches the unit the site publishes its figures in.
pub const DEFAULT_POWER_UNIT: &str = "BHP";

/// Default torque unit when neither the CLI nor the config names one.
pub const DEFAULT_TORQUE_UNIT: &str = "lb/ft";

/// Number of gauge readings on a vehicle page: stock/mapped/diff for
/// power, then stock/mapped/diff for torque.
pub const GAUGE_READING_COUNT: usize = 6;

/// CSS selectors for the parts of the vehicle page we scrape.
pub mod markup {
    /// Wrapper around each rendered gauge readout.
    pub const GAUGE_TEXT: &str = "div.ctvc_gauge_text";

    /// Heading inside a gauge wrapper that carries the numeric value.
    pub const GAUGE_HEADING: &str = "h5";

    /// Vehicle title element.
    pub const TITLE: &str = "#ctvc-title";

    /// Vehicle attributes list.
    pub const VEHICLE_LIST: &str = "ul.ctvs_list";

    /// A single attribute row inside the vehicle list.
    pub const VEHICLE_ROW: &str = "li";

    /// Dyno chart link; not present for every vehicle.
    pub const CHART_LINK: &str = "a.ctvc_chart_btn";
}

/// Unit conversion factors. Source figures are always BHP and lb/ft.
pub mod conversion {
    /// BHP to kilowatts.
    pub const BHP_TO_KW: f64 = 0.745_699_872;

    /// BHP to metric horsepower.
    pub const BHP_TO_PS: f64 = 1.013_87;

    /// Pound-feet to newton-metres.
    pub const LBFT_TO_NM: f64 = 1.355_817_948_3;
}
