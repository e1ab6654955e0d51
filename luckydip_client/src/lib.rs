mod response_types;

pub use response_types::RandomRecord;

/// Errors that can occur using the API client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An error occurred while making a request.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// An error occurred while building the request URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The server answered with a non-success status.
    #[error("Server returned {0}")]
    Status(reqwest::StatusCode),
}

/// The lucky-dip server as started by its development setup.
pub static DEFAULT_URL_BASE: &str = "http://127.0.0.1:5000";

/// A client for the lucky-dip record API.
pub struct Client {
    /// The base URL for the API.
    url_base: String,
    /// The HTTP client to use.
    client: reqwest::Client,
}

impl Client {
    /// Create a new client against the default server.
    #[must_use]
    pub fn new() -> Self {
        Self::new_with_url(DEFAULT_URL_BASE.to_string())
    }

    /// Create a new client with the given base URL.
    #[must_use]
    pub fn new_with_url(url_base: String) -> Self {
        Self {
            url_base,
            client: reqwest::Client::new(),
        }
    }

    /// The URL of the random-record endpoint.
    fn random_url(&self) -> Result<reqwest::Url, url::ParseError> {
        reqwest::Url::parse(&format!("{}/api/random", self.url_base.trim_end_matches('/')))
    }

    /// Fetch one random record.
    ///
    /// Exactly one request per call: no retries, no caching. Concurrent
    /// calls are independent and may settle in any order.
    pub async fn random(&self) -> Result<RandomRecord, Error> {
        let response = self.client.get(self.random_url()?).send().await?;

        if !response.status().is_success() {
            return Err(Error::Status(response.status()));
        }
        Ok(response.json::<RandomRecord>().await?)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
