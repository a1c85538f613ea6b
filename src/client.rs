//! FUGA API client.
//!
//! Low-level HTTP client that handles session login and raw requests.
//! Higher-level operations are implemented via traits on entity types.

use std::env;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::{Client, Response};
use serde::Serialize;
use url::Url;

use crate::error::{FugaError, Result};

const DEFAULT_API_URL: &str = "https://next.fuga.com/api/v2";
const USER_AGENT: &str = concat!("fugapi/", env!("CARGO_PKG_VERSION"));

/// Credentials sent to the `/login` endpoint.
///
/// FUGA expects the username under the `name` key.
#[derive(Clone, Serialize)]
struct Credentials {
    name: String,
    password: String,
}

/// Low-level FUGA API client.
///
/// Handles session login and HTTP requests. Entity-specific operations
/// are implemented via the `Get`, `List`, `Create`, `Update`, and
/// `Delete` traits on model types.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool and observe the same session, so logging in on one
/// clone logs in all of them.
///
/// # Example
///
/// ```no_run
/// use fugapi::FugaClient;
///
/// # async fn example() -> fugapi::Result<()> {
/// // Create from environment variables
/// let client = FugaClient::from_env()?;
/// client.login().await?;
///
/// // Or configure manually
/// let client = FugaClient::new("https://next.fuga.com/api/v2", "user", "secret")?;
/// client.login().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FugaClient {
    http: Client,
    base_url: Arc<Url>,
    credentials: Credentials,
    /// Session cookie (`name=value`) captured by `login()`. Shared across
    /// clones so a single login covers every handle.
    session: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for FugaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FugaClient")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.credentials.name)
            .finish_non_exhaustive()
    }
}

impl FugaClient {
    /// Create a client from environment variables.
    ///
    /// Uses `FUGA_USERNAME` and `FUGA_PASSWORD` for credentials and
    /// optionally `FUGA_API_URL` for the base URL (defaults to
    /// `https://next.fuga.com/api/v2`).
    ///
    /// # Errors
    ///
    /// Returns an error if `FUGA_USERNAME` or `FUGA_PASSWORD` is not set.
    pub fn from_env() -> Result<Self> {
        let username = env::var("FUGA_USERNAME").map_err(|_| {
            FugaError::ConfigMissing("FUGA_USERNAME environment variable not set".to_string())
        })?;
        let password = env::var("FUGA_PASSWORD").map_err(|_| {
            FugaError::ConfigMissing("FUGA_PASSWORD environment variable not set".to_string())
        })?;

        let base_url = env::var("FUGA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&base_url, &username, &password)
    }

    /// Create a new client with the provided base URL and credentials.
    ///
    /// The client holds credentials but no session; call [`login`] before
    /// making requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    ///
    /// [`login`]: FugaClient::login
    pub fn new(base_url: &str, username: &str, password: &str) -> Result<Self> {
        // Ensure base URL ends with / so Url::join keeps the path prefix
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(FugaError::Transport)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            credentials: Credentials {
                name: username.to_string(),
                password: password.to_string(),
            },
            session: Arc::new(RwLock::new(None)),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether a session token is currently held.
    pub fn is_logged_in(&self) -> bool {
        self.session
            .read()
            .map(|s| s.is_some())
            .unwrap_or(false)
    }

    /// Authenticate against FUGA and store the session cookie.
    ///
    /// # Errors
    ///
    /// Returns [`FugaError::Authentication`] if the credentials are
    /// rejected, the endpoint is unreachable, or the response carries no
    /// session cookie.
    #[tracing::instrument(skip(self))]
    pub async fn login(&self) -> Result<()> {
        let url = self.base_url.join("login")?;

        let response = self
            .http
            .post(url)
            .json(&self.credentials)
            .send()
            .await
            .map_err(|e| FugaError::Authentication(format!("login request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FugaError::Authentication(format!(
                "login failed: HTTP {status} {body}"
            )));
        }

        // FUGA issues the session as a cookie; keep it as `name=value`
        // and replay it on every request.
        let cookie = response
            .headers()
            .get(reqwest::header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::to_string);

        match cookie {
            Some(token) => {
                if let Ok(mut session) = self.session.write() {
                    *session = Some(token);
                }
                tracing::debug!("login succeeded, session established");
                Ok(())
            }
            None => Err(FugaError::Authentication(
                "login response carried no session cookie".to_string(),
            )),
        }
    }

    /// The session cookie to attach, or `NotAuthenticated` if `login()`
    /// has not run yet.
    fn session_cookie(&self) -> Result<String> {
        self.session
            .read()
            .ok()
            .and_then(|s| s.clone())
            .ok_or(FugaError::NotAuthenticated)
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;
        let cookie = self.session_cookie()?;

        let response = self
            .http
            .get(url)
            .header(reqwest::header::COOKIE, cookie)
            .send()
            .await
            .map_err(FugaError::Transport)?;

        Self::check_response(response).await
    }

    /// Make a GET request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response> {
        let url = self.base_url.join(path)?;
        let cookie = self.session_cookie()?;

        let response = self
            .http
            .get(url)
            .header(reqwest::header::COOKIE, cookie)
            .query(query)
            .send()
            .await
            .map_err(FugaError::Transport)?;

        Self::check_response(response).await
    }

    /// Make a POST request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.base_url.join(path)?;
        let cookie = self.session_cookie()?;

        let response = self
            .http
            .post(url)
            .header(reqwest::header::COOKIE, cookie)
            .json(body)
            .send()
            .await
            .map_err(FugaError::Transport)?;

        Self::check_response(response).await
    }

    /// Make a POST request with an empty body.
    ///
    /// Used by action endpoints like `/products/{id}/publish`.
    #[tracing::instrument(skip(self))]
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        self.post(path, &serde_json::json!({})).await
    }

    /// Make a PUT request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.base_url.join(path)?;
        let cookie = self.session_cookie()?;

        let response = self
            .http
            .put(url)
            .header(reqwest::header::COOKIE, cookie)
            .json(body)
            .send()
            .await
            .map_err(FugaError::Transport)?;

        Self::check_response(response).await
    }

    /// Make a DELETE request.
    ///
    /// FUGA delete endpoints respond with plain text or an empty body;
    /// callers should treat any returned response as success.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;
        let cookie = self.session_cookie()?;

        let response = self
            .http
            .delete(url)
            .header(reqwest::header::COOKIE, cookie)
            .send()
            .await
            .map_err(FugaError::Transport)?;

        Self::check_response(response).await
    }

    /// Decode a JSON response body.
    ///
    /// A 2xx response with a malformed or non-JSON body becomes
    /// [`FugaError::Api`] rather than an opaque decode failure.
    pub async fn parse_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await.map_err(FugaError::Transport)?;

        serde_json::from_str(&body).map_err(|_| FugaError::Api {
            message: format!("unexpected response format: {body}"),
            status_code: Some(status.as_u16()),
        })
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        tracing::error!(status = status.as_u16(), %message, "FUGA API error");
        Err(FugaError::Api {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract an error message from a failed response.
    ///
    /// FUGA wraps errors in an envelope where `error` is either an object
    /// or an array of objects carrying `code`, `message`, and optionally
    /// `original_error.error_info`.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) else {
            return format!("HTTP {status}: {body}");
        };

        match json.get("error") {
            Some(serde_json::Value::Array(errors)) => {
                let details: Vec<String> = errors.iter().map(format_error_entry).collect();
                format!("HTTP {status}: {}", details.join("\n"))
            }
            Some(err @ serde_json::Value::Object(_)) => {
                format!("HTTP {status}: {}", format_error_entry(err))
            }
            _ => format!("HTTP {status}: {body}"),
        }
    }
}

/// Render one entry of FUGA's error envelope.
fn format_error_entry(err: &serde_json::Value) -> String {
    let code = err
        .get("code")
        .and_then(|c| c.as_str())
        .unwrap_or("no code");
    let message = err
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or("no message");
    let context = err
        .get("original_error")
        .and_then(|o| o.get("error_info"))
        .and_then(|i| i.as_str());

    match context {
        Some(ctx) => format!("Code: {code}, Message: {message}, Context: {ctx}"),
        None => format!("Code: {code}, Message: {message}"),
    }
}
