use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS, DEFAULT_USERNAME};
use crate::error::{FoscamError, Result};
use crate::response::Reply;
use tokio::time::Duration;
use tracing::debug;

/// Handle to one camera. Connection settings are fixed at construction;
/// every operation issues a single HTTP GET against the camera's embedded
/// web server and completes independently, so concurrent calls through a
/// shared reference are safe.
pub struct FoscamCam {
    pub(crate) endpoint: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) timeout: Duration,
    pub(crate) http: reqwest::Client,
}

impl FoscamCam {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: DEFAULT_USERNAME.to_string(),
            password: String::new(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            http: reqwest::Client::new(),
        }
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Issue a GET against `path`, appending the credential pair the
    /// firmware expects on every request. Transport failures map to
    /// `RequestFailed`, HTTP statuses >= 300 to `ApiError`.
    pub(crate) async fn fetch(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.endpoint, path);
        debug!(%url, "sending CGI request");

        let mut query: Vec<(&str, &str)> =
            params.iter().map(|(name, value)| (*name, value.as_str())).collect();
        query.push(("user", &self.username));
        query.push(("pwd", &self.password));

        let response = self
            .http
            .get(&url)
            .query(&query)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status >= 300 {
            let body = response.text().await.unwrap_or_default();
            return Err(FoscamError::ApiError { code: status, body });
        }

        Ok(response)
    }

    pub(crate) async fn get_text(&self, path: &str, params: &[(&str, String)]) -> Result<String> {
        let response = self.fetch(path, params).await?;
        Ok(response.text().await?)
    }

    /// GET plus uniform reply classification for mutating endpoints.
    pub(crate) async fn command(&self, path: &str, params: &[(&str, String)]) -> Result<Reply> {
        let body = self.get_text(path, params).await?;
        Ok(Reply::from_body(&body))
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let response = self.fetch(path, &[]).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

impl Default for FoscamCam {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
