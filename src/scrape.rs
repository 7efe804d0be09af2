//! HTML extraction from Celtic Tuning vehicle pages.
//!
//! This layer goes from a parsed document to raw text fragments only;
//! turning those fragments into typed values is the `model` module's job,
//! so that half can be tested with literal strings and no HTML fixtures.

use crate::constants::{GAUGE_READING_COUNT, markup};
use crate::error::{Error, Result};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use tracing::debug;

/// A parsed vehicle result page.
pub struct VehiclePage {
    doc: Html,
}

impl VehiclePage {
    /// Parse the raw page body.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    /// The six gauge readouts, in the order the page renders them:
    /// power stock/mapped/diff, then torque stock/mapped/diff.
    pub fn gauge_texts(&self) -> Result<[String; GAUGE_READING_COUNT]> {
        let gauge = selector(markup::GAUGE_TEXT)?;
        let heading = selector(markup::GAUGE_HEADING)?;

        let mut texts = Vec::with_capacity(GAUGE_READING_COUNT);
        for element in self.doc.select(&gauge) {
            let Some(value) = element.select(&heading).next() else {
                return Err(Error::UnexpectedPageStructure {
                    what: format!("gauge block without a '{}' value", markup::GAUGE_HEADING),
                });
            };
            texts.push(element_text(value).trim().to_owned());
        }

        texts.truncate(GAUGE_READING_COUNT);
        <[String; GAUGE_READING_COUNT]>::try_from(texts).map_err(|found| {
            Error::UnexpectedPageStructure {
                what: format!(
                    "expected {GAUGE_READING_COUNT} gauge readings, found {}",
                    found.len()
                ),
            }
        })
    }

    /// The vehicle title, cleaned of embedded newlines.
    pub fn title(&self) -> Result<String> {
        let title = selector(markup::TITLE)?;
        let element = self
            .doc
            .select(&title)
            .next()
            .ok_or_else(|| Error::UnexpectedPageStructure {
                what: format!("missing title element '{}'", markup::TITLE),
            })?;
        Ok(clean_text(&element_text(element)))
    }

    /// The vehicle attributes list as a key/value map.
    ///
    /// Keys are lower-cased with spaces replaced by underscores, so
    /// "ECU Type: Bosch" becomes `ecu_type` -> `Bosch`. Rows without a
    /// colon are skipped.
    pub fn vehicle_rows(&self) -> Result<HashMap<String, String>> {
        let list = selector(markup::VEHICLE_LIST)?;
        let row = selector(markup::VEHICLE_ROW)?;

        let list_element =
            self.doc
                .select(&list)
                .next()
                .ok_or_else(|| Error::UnexpectedPageStructure {
                    what: format!("missing vehicle attributes list '{}'", markup::VEHICLE_LIST),
                })?;

        let mut rows = HashMap::new();
        for item in list_element.select(&row) {
            let text = clean_text(&element_text(item));
            let Some((key, value)) = text.split_once(':') else {
                debug!("skipping attribute row without a colon: {text:?}");
                continue;
            };
            rows.insert(
                key.trim().to_lowercase().replace(' ', "_"),
                value.trim().to_owned(),
            );
        }
        Ok(rows)
    }

    /// The dyno chart link, if the page has one. Not every vehicle does.
    pub fn chart_url(&self) -> Result<Option<String>> {
        let chart = selector(markup::CHART_LINK)?;
        Ok(self
            .doc
            .select(&chart)
            .next()
            .and_then(|anchor| anchor.value().attr("href"))
            .map(str::to_owned))
    }
}

fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Internal {
        message: format!("bad selector '{css}': {e}"),
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Text cleaning applied identically to the title and each attribute row:
/// trim, newline to space, then collapse a double-space artifact.
pub(crate) fn clean_text(raw: &str) -> String {
    raw.trim().replace('\n', " ").replace("  ", " ")
}
