use std::fmt::Display;

use serde_json::Value;
use url::Url;

use crate::config::Settings;
use crate::consts::ApiBase;
use crate::error::Error;

/// Builder of endpoint request URLs
///
/// Path segments and query values are percent-encoded, so malformed
/// identifiers can't corrupt the request path
#[derive(Debug, Clone)]
pub(crate) struct MethodUrl(Url);

impl MethodUrl {
    pub fn new(base: ApiBase) -> Self {
        // Base URIs are compile-time constants
        Self(Url::parse(base.uri()).expect("invalid base uri"))
    }

    pub fn segment(mut self, segment: impl Display) -> Self {
        self.0.path_segments_mut()
            .expect("base uri is not a valid base")
            .push(&segment.to_string());

        self
    }

    /// Append an empty segment, ending the path with a slash
    pub fn trailing_slash(self) -> Self {
        self.segment("")
    }

    pub fn query(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.0.query_pairs_mut().append_pair(key, value.as_ref());

        self
    }

    /// Append a query pair only when a value was actually given
    pub fn query_opt(self, key: &str, value: Option<impl AsRef<str>>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self
        }
    }

    pub fn finish(self) -> Url {
        self.0
    }
}

/// Check that a required path identifier was actually given
///
/// The remote API would otherwise be called with a malformed path
/// and fail much less legibly
pub(crate) fn required<'a>(name: &'static str, value: &'a str) -> Result<&'a str, Error> {
    if value.trim().is_empty() {
        return Err(Error::MissingArgument(name));
    }

    Ok(value)
}

/// Bungie.net API client
///
/// Owns the loaded [`Settings`] and performs the blocking requests
/// the endpoint functions in [`destiny`](crate::destiny) and
/// [`destiny2`](crate::destiny2) prepare
#[derive(Debug, Clone)]
pub struct Client {
    settings: Settings
}

impl Client {
    #[inline]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings
        }
    }

    /// Construct a client from `$HOME/.bungie_net_api.rc`
    pub fn from_home_config() -> Result<Self, Error> {
        Ok(Self::new(Settings::load()?))
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Perform a single GET request and parse its body as JSON
    ///
    /// The parsed value is returned as-is; nothing inside it
    /// is inspected or validated
    #[tracing::instrument(level = "trace", skip(self, token))]
    pub fn execute(&self, url: Url, token: Option<&str>) -> Result<Value, Error> {
        if self.settings.debug {
            tracing::debug!(url = %url, "Sending API request");
        }

        let mut request = minreq::get(url.as_str())
            .with_header("X-API-Key", self.settings.api_key.as_str())
            .with_timeout(*crate::REQUESTS_TIMEOUT);

        if let Some(token) = token {
            request = request.with_header("Authorization", format!("Bearer {token}"));
        }

        let response = request.send()?;

        if !(200..300).contains(&response.status_code) {
            return Err(Error::Status {
                code: response.status_code,
                url: url.to_string()
            });
        }

        Ok(serde_json::from_str(response.as_str()?)?)
    }
}
