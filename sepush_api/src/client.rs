//! HTTP client for the SePush load-shedding API.

use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::{
    config::ClientConfig,
    query::{AreaQuery, AreaTest, AreasSearchQuery, NearbyQuery, Query},
    response::{handle_response, RawResponse},
    Error, ErrorKind,
};

/// Path prefix shared by every business API endpoint.
const API_PREFIX: &str = "/business/2.0";

/// HTTP client for the SePush API.
///
/// Holds one `reqwest::Client` that sends the `token` header on every
/// request. Each operation issues exactly one request and never retries;
/// retry policy belongs to the caller.
#[derive(Debug)]
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client for the production SePush host.
    pub fn new<'a>(token: impl Into<Option<&'a str>>) -> Result<Self, Error> {
        Self::with_config(ClientConfig::new(token)?)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url<'a>(
        base_url: &str,
        token: impl Into<Option<&'a str>>,
    ) -> Result<Self, Error> {
        Self::with_config(ClientConfig::new(token)?.with_base_url(base_url))
    }

    /// Creates a client from `SEPUSH_*` environment variables. See [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self, Error> {
        Self::with_config(ClientConfig::from_env()?)
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        Url::parse(config.base_url()).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", config.base_url(), e);
            Error::new(ErrorKind::Unexpected).with_source(e)
        })?;

        let mut token = HeaderValue::from_str(config.token()).map_err(|_| {
            tracing::error!("API token contains characters not allowed in a header");
            Error::new(ErrorKind::InvalidToken)
        })?;
        token.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert("token", token);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("sepush_api/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::new(ErrorKind::Unexpected).with_source(e)
            })?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn get_url(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(&format!("{}{}{}", self.config.base_url(), API_PREFIX, path))
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::new(ErrorKind::Unexpected).with_source(e)
            })?;
        Ok(query.add_to_url(&url))
    }

    async fn get(&self, path: &str, query: &impl Query) -> Result<Value, Error> {
        let url = self.get_url(path, query)?;
        tracing::debug!(%url, "Sending request");

        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::new(ErrorKind::Unexpected).with_source(e)
        })?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::new(ErrorKind::Unexpected).with_source(e)
        })?;

        handle_response(Some(RawResponse {
            status,
            body: Some(body),
        }))
    }

    /// Fetches the remaining API allowance for the token.
    pub async fn check_allowance(&self) -> Result<Value, Error> {
        self.get("/api_allowance", &()).await
    }

    /// Alias of [`Client::check_allowance`].
    pub async fn quota(&self) -> Result<Value, Error> {
        self.check_allowance().await
    }

    /// Fetches the current national and municipal load-shedding status.
    pub async fn status(&self) -> Result<Value, Error> {
        self.get("/status", &()).await
    }

    /// Searches areas by name. Fails with `BadRequest` when `text` is missing.
    pub async fn areas_search<'a>(&self, text: impl Into<Option<&'a str>>) -> Result<Value, Error> {
        let query = AreasSearchQuery::new(text)?;
        self.get("/areas_search", &query).await
    }

    /// Fetches events and schedule for one area. `test` defaults to [`AreaTest::Current`].
    pub async fn area_information<'a>(
        &self,
        area_id: impl Into<Option<&'a str>>,
        test: Option<AreaTest>,
    ) -> Result<Value, Error> {
        let query = AreaQuery::new(area_id)?.with_test(test.unwrap_or_default());
        self.get("/area", &query).await
    }

    /// Lists areas near a coordinate.
    pub async fn areas_nearby(
        &self,
        lat: impl Into<Option<f64>>,
        long: impl Into<Option<f64>>,
    ) -> Result<Value, Error> {
        let query = NearbyQuery::new(lat, long)?;
        self.get("/areas_nearby", &query).await
    }

    /// Lists community topics near a coordinate.
    pub async fn topics_nearby(
        &self,
        lat: impl Into<Option<f64>>,
        long: impl Into<Option<f64>>,
    ) -> Result<Value, Error> {
        let query = NearbyQuery::new(lat, long)?;
        self.get("/topics_nearby", &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::with_base_url("https://developer.sepush.co.za/", "test-token")
            .expect("client construction should not fail")
    }

    #[test]
    fn get_url_for_plain_endpoint() {
        let url = client().get_url("/status", &()).unwrap();
        assert_eq!(url.as_str(), "https://developer.sepush.co.za/business/2.0/status");
    }

    #[test]
    fn get_url_for_area_defaults_to_current() {
        let query = AreaQuery::new("eskde-10-fourways").unwrap();
        let url = client().get_url("/area", &query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://developer.sepush.co.za/business/2.0/area?id=eskde-10-fourways&test=current"
        );
    }

    #[test]
    fn get_url_encodes_search_text() {
        let query = AreasSearchQuery::new("Cape Town & Co").unwrap();
        let url = client().get_url("/areas_search", &query).unwrap();
        assert_eq!(url.query(), Some("text=Cape+Town+%26+Co"));
    }

    #[test]
    fn get_url_for_coordinates() {
        let query = NearbyQuery::new(-33.9, 18.0).unwrap();
        let url = client().get_url("/topics_nearby", &query).unwrap();
        assert_eq!(url.query(), Some("lat=-33.9&long=18"));
    }

    #[test]
    fn construction_without_token_fails() {
        let err = Client::new(None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidToken);
    }

    #[test]
    fn token_with_newline_is_invalid() {
        let err = Client::new("abc\ndef").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidToken);
    }

    #[test]
    fn unparseable_base_url_is_unexpected() {
        let err = Client::with_base_url("not a url", "test-token").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn config_is_exposed() {
        let client = client();
        assert_eq!(client.config().token(), "test-token");
        assert_eq!(client.config().base_url(), "https://developer.sepush.co.za");
    }
}
