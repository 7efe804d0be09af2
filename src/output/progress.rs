//! Progress display for the in-flight lookup.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for the network lookup, or `None` when progress
/// display is disabled.
#[must_use]
pub fn create_lookup_spinner(enabled: bool, registration: &str) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Looking up {registration}..."));
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

/// Clear the spinner once the lookup has settled.
pub fn finish_spinner(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}
