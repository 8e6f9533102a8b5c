//! The navigable location the component reads its parameters from

use url::Url;
use tracing::info;

use crate::errors::AppError;
use super::parser::{QueryParams, RECOGNIZED_KEYS};

/// Base used for bare query strings such as `?duration=15`
pub const DEFAULT_BASE: &str = "http://localhost/";

/// Current address of the component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

impl Location {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    /// Parse a full URL, or a query string relative to [`DEFAULT_BASE`]
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let invalid = |source| AppError::InvalidLocation {
            input: input.to_string(),
            source,
        };

        let url = match Url::parse(input) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = Url::parse(DEFAULT_BASE).map_err(invalid)?;
                let relative = if input.starts_with('?') || input.starts_with('/') {
                    input.to_string()
                } else {
                    format!("?{input}")
                };
                base.join(&relative).map_err(invalid)?
            }
            Err(e) => return Err(invalid(e)),
        };

        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Values of the recognised timer parameters
    pub fn params(&self) -> QueryParams {
        QueryParams::from_url(&self.url)
    }

    /// Check if any recognised key appears in the query, even with an empty value
    pub fn has_timer_params(&self) -> bool {
        self.url
            .query_pairs()
            .any(|(key, _)| RECOGNIZED_KEYS.contains(&&*key))
    }

    /// Remove the whole query in place, without recording a new history entry.
    ///
    /// Does nothing unless a recognised timer key is present. Returns whether
    /// the address changed.
    pub fn strip_timer_params(&mut self) -> bool {
        if !self.has_timer_params() {
            return false;
        }

        self.url.set_query(None);
        info!("Stripped timer parameters from location: {}", self.url);
        true
    }
}
