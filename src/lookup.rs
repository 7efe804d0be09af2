//! Lookup orchestration against the Celtic Tuning site.
//!
//! One lookup is a strictly sequential pipeline: search for the
//! registration, follow the site's answer to the result page, scrape it,
//! build the record. No retries; any failure aborts the lookup.

use crate::constants::{NOT_FOUND_PATH, SEARCH_PATH, VARIANT_PROMPT};
use crate::error::{Error, Result};
use crate::model::{LookupResult, RegistrationQuery, build_power_detail, build_vehicle_detail};
use crate::scrape::VehiclePage;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::{debug, info};

/// HTTP client for the tuning site.
///
/// The search endpoint answers with a redirect we must inspect rather
/// than follow, so it gets its own client with redirects disabled; the
/// result page is fetched with normal redirect handling.
pub struct SiteClient {
    base_url: String,
    search_http: reqwest::Client,
    page_http: reqwest::Client,
}

impl SiteClient {
    /// Build a client for the given site root with a bounded per-request
    /// timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let search_http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()
            .map_err(|source| Error::HttpClient { source })?;
        let page_http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| Error::HttpClient { source })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            search_http,
            page_http,
        })
    }

    /// Run the full lookup pipeline for one registration.
    pub async fn lookup(&self, query: &RegistrationQuery) -> Result<LookupResult> {
        let result_url = self.search(query).await?;
        info!("vehicle located, fetching {result_url}");

        let body = self.fetch_page(&result_url).await?;
        if page_is_not_found(&body) {
            return Err(self.not_found(query));
        }

        debug!("scraping result page ({} bytes)", body.len());
        scrape_result(&body, query, &result_url)
    }

    /// Search for the registration and resolve the result page URL.
    async fn search(&self, query: &RegistrationQuery) -> Result<String> {
        let search_url = format!("{}{}{}", self.base_url, SEARCH_PATH, query.registration);
        debug!("searching {search_url}");

        let response = self
            .search_http
            .get(&search_url)
            .send()
            .await
            .map_err(|e| request_error(&search_url, e))?;

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| Error::UnexpectedPageStructure {
                what: "search response carried no Location header".to_owned(),
            })?;

        redirect_result_path(location, &self.base_url)
            .map(|path| format!("{}{path}", self.base_url))
            .ok_or_else(|| self.not_found(query))
    }

    /// Fetch the result page body.
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self
            .page_http
            .get(url)
            .send()
            .await
            .map_err(|e| request_error(url, e))?;
        response.text().await.map_err(|e| request_error(url, e))
    }

    fn not_found(&self, query: &RegistrationQuery) -> Error {
        Error::NotFound {
            registration: query.registration.to_uppercase(),
        }
    }
}

/// Scrape and build a [`LookupResult`] from a fetched page body.
///
/// Pure with respect to the network, so the whole extraction half of the
/// pipeline can be exercised against fixture HTML.
pub fn scrape_result(
    html: &str,
    query: &RegistrationQuery,
    result_url: &str,
) -> Result<LookupResult> {
    let page = VehiclePage::parse(html);

    let gauge_texts = page.gauge_texts()?;
    let chart_url = page.chart_url()?;
    let power_detail =
        build_power_detail(&gauge_texts, query.power_unit, query.torque_unit, chart_url)?;
    let vehicle_detail = build_vehicle_detail(&page.vehicle_rows()?)?;

    Ok(LookupResult {
        power_detail,
        vehicle_detail,
        vehicle_title: page.title()?,
        result_url: result_url.to_owned(),
    })
}

/// Interpret the search redirect: `Some(path)` for a result page,
/// `None` when the site answered with its not-found anchor.
fn redirect_result_path(location: &str, base_url: &str) -> Option<String> {
    let path = location.strip_prefix(base_url).unwrap_or(location);
    (path != NOT_FOUND_PATH).then(|| path.to_owned())
}

/// A fetched page that asks the user to pick a variant carries no usable
/// result; treat it like an unmatched registration.
fn page_is_not_found(body: &str) -> bool {
    body.contains(VARIANT_PROMPT)
}

fn request_error(url: &str, source: reqwest::Error) -> Error {
    if source.is_timeout() {
        Error::Timeout {
            url: url.to_owned(),
        }
    } else {
        Error::Request {
            url: url.to_owned(),
            source,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_BASE_URL;

    #[test]
    fn test_redirect_to_result_page_keeps_path() {
        let location = format!("{DEFAULT_BASE_URL}/component/ctvc/search/123/456");
        assert_eq!(
            redirect_result_path(&location, DEFAULT_BASE_URL).as_deref(),
            Some("/component/ctvc/search/123/456")
        );
    }

    #[test]
    fn test_relative_redirect_is_kept_as_is() {
        assert_eq!(
            redirect_result_path("/component/ctvc/search/123/456", DEFAULT_BASE_URL).as_deref(),
            Some("/component/ctvc/search/123/456")
        );
    }

    #[test]
    fn test_not_found_sentinel_yields_none() {
        assert_eq!(
            redirect_result_path(NOT_FOUND_PATH, DEFAULT_BASE_URL),
            None
        );
        let absolute = format!("{DEFAULT_BASE_URL}{NOT_FOUND_PATH}");
        assert_eq!(redirect_result_path(&absolute, DEFAULT_BASE_URL), None);
    }

    #[test]
    fn test_variant_prompt_marks_page_not_found() {
        assert!(page_is_not_found(
            "<html><body>Please select variant</body></html>"
        ));
        assert!(!page_is_not_found("<html><body>Stage 1</body></html>"));
    }
}
