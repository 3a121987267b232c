// API client module: contains a small blocking HTTP client that talks to
// a Supabase project's PostgREST endpoint. It is intentionally small and
// synchronous; the menu issues one request at a time.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// The single table this tool manages, under PostgREST's `/rest/v1/` root.
const TABLE: &str = "test";

/// Simple API client that holds a reqwest blocking client plus the base
/// URL and API key taken from [`Config`]. Supabase expects the key both
/// as an `apikey` header and as a bearer token.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Body shared by Create and Update. Serialized with serde so free text
/// containing quotes or backslashes cannot corrupt the JSON.
#[derive(Serialize, Deserialize, Debug)]
pub struct RecordPayload {
    pub test: String,
}

/// Outcome of one HTTP exchange: the status code and whatever body the
/// backend returned. A non-2xx status is data here, not an error; only
/// transport failures surface as `Err` from the client methods.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl ApiClient {
    /// Create an ApiClient from loaded configuration. A trailing slash on
    /// the configured URL is tolerated here so the config file can carry
    /// either form.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers carried by every request: JSON content type plus the API
    /// key in both places Supabase looks for it.
    fn common_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let key = HeaderValue::from_str(&self.api_key)
            .context("API key is not a valid header value")?;
        headers.insert(HeaderName::from_static("apikey"), key);
        let bearer = format!("Bearer {}", self.api_key);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer).context("API key is not a valid header value")?,
        );
        Ok(headers)
    }

    /// Create headers additionally ask PostgREST to echo the new row back
    /// instead of replying with an empty 201.
    fn create_headers(&self) -> Result<HeaderMap> {
        let mut headers = self.common_headers()?;
        headers.insert(
            HeaderName::from_static("prefer"),
            HeaderValue::from_static("return=representation"),
        );
        Ok(headers)
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, TABLE)
    }

    fn read_url(&self) -> String {
        format!("{}?select=*", self.table_url())
    }

    /// PostgREST row filter: `id=eq.<id>` targets exactly one row.
    fn row_url(&self, id: i64) -> String {
        format!("{}?id=eq.{}", self.table_url(), id)
    }

    /// Insert a new record by POSTing to the table endpoint.
    pub fn create(&self, text: &str) -> Result<ApiResponse> {
        let payload = RecordPayload {
            test: text.to_string(),
        };
        let res = self
            .client
            .post(self.table_url())
            .headers(self.create_headers()?)
            .json(&payload)
            .send()
            .context("Failed to send create request")?;
        Ok(finish(res))
    }

    /// Fetch every row and every column of the table.
    pub fn read_all(&self) -> Result<ApiResponse> {
        let res = self
            .client
            .get(self.read_url())
            .headers(self.common_headers()?)
            .send()
            .context("Failed to send read request")?;
        Ok(finish(res))
    }

    /// Replace the text of the row with the given id.
    pub fn update(&self, id: i64, text: &str) -> Result<ApiResponse> {
        let payload = RecordPayload {
            test: text.to_string(),
        };
        let res = self
            .client
            .patch(self.row_url(id))
            .headers(self.common_headers()?)
            .json(&payload)
            .send()
            .context("Failed to send update request")?;
        Ok(finish(res))
    }

    /// Delete the row with the given id. No body either way.
    pub fn delete(&self, id: i64) -> Result<ApiResponse> {
        let res = self
            .client
            .delete(self.row_url(id))
            .headers(self.common_headers()?)
            .send()
            .context("Failed to send delete request")?;
        Ok(finish(res))
    }
}

fn finish(res: reqwest::blocking::Response) -> ApiResponse {
    let status = res.status().as_u16();
    let body = res.text().unwrap_or_else(|_| "".into());
    ApiResponse { status, body }
}
