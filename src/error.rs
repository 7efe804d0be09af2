//! Error types for remapq.

/// Result type alias for remapq operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for remapq.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unit string did not match any member of its unit set.
    #[error("invalid {kind} unit '{value}': must be one of {allowed}")]
    InvalidUnit {
        /// Which unit set was being resolved ("power" or "torque").
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// Comma-separated list of accepted unit labels.
        allowed: &'static str,
    },

    /// Conversion between a unit pair the site never produces.
    #[error("unsupported unit conversion: {from} to {to}")]
    UnsupportedConversion {
        /// Source unit label.
        from: &'static str,
        /// Target unit label.
        to: &'static str,
    },

    /// The registration is unknown to the site, or no tune is offered.
    /// An expected outcome, not a defect.
    #[error(
        "a vehicle with registration \"{registration}\" could not be found\n\n\
         Possible causes:\n\
         - Incorrect registration.\n\
         - Celtic Tuning does not offer a tune for this vehicle.\n\
         - Celtic Tuning could not identify the vehicle from the information \
         provided by the DVLA."
    )]
    NotFound {
        /// The registration that was looked up.
        registration: String,
    },

    /// The result page was found but did not have the expected shape.
    /// Usually means the site's markup has changed and the scraper needs
    /// maintenance.
    #[error("unexpected page structure: {what}")]
    UnexpectedPageStructure {
        /// What was missing or malformed.
        what: String,
    },

    /// A gauge reading was not numeric.
    #[error("malformed number in field '{field}': {value:?}")]
    MalformedNumber {
        /// Name of the offending reading.
        field: &'static str,
        /// The raw scraped text.
        value: String,
    },

    /// A vehicle attribute did not have the expected form.
    #[error("malformed field '{field}': {value:?}")]
    MalformedField {
        /// Name of the offending attribute.
        field: &'static str,
        /// The raw scraped text.
        value: String,
    },

    /// A required vehicle attribute was absent from the page.
    #[error("missing field '{field}' in vehicle data")]
    MissingField {
        /// Name of the absent attribute.
        field: &'static str,
    },

    /// Failed to construct the HTTP client.
    #[error("failed to build HTTP client")]
    HttpClient {
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// An HTTP request failed for a reason other than a timeout.
    #[error("request to '{url}' failed")]
    Request {
        /// The requested URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// An HTTP request exceeded the configured timeout.
    #[error("request to '{url}' timed out")]
    Timeout {
        /// The requested URL.
        url: String,
    },

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Internal invariant breakage.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the breakage.
        message: String,
    },
}
