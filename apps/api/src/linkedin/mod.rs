/// LinkedIn client — OAuth 2.0 authorization-code exchange plus profile lookup.
///
/// The front-end completes the LinkedIn consent screen and posts the returned
/// `code` here; this module swaps it for an access token and fetches the
/// member's `userinfo`. Nothing is stored. No retries.
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod handlers;

const TOKEN_URL: &str = "https://www.linkedin.com/oauth/v2/accessToken";
const USERINFO_URL: &str = "https://api.linkedin.com/v2/userinfo";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum LinkedInError {
    #[error("LinkedIn API credentials are not configured on the server.")]
    NotConfigured,

    #[error("LinkedIn responded with status {status}")]
    Api { status: u16, detail: Value },

    #[error("Could not retrieve access token from LinkedIn.")]
    MissingAccessToken,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Body posted by the front-end after the LinkedIn redirect.
#[derive(Debug, Deserialize)]
pub struct LinkedInCallback {
    pub code: String,
    pub redirect_uri: String,
}

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    code: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    redirect_uri: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LinkedInSession {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    pub profile: Value,
}

#[derive(Clone)]
struct Credentials {
    client_id: String,
    client_secret: String,
}

#[derive(Clone)]
pub struct LinkedInClient {
    client: Client,
    credentials: Option<Credentials>,
    token_url: String,
    userinfo_url: String,
}

impl LinkedInClient {
    /// Both halves of the credential pair must be present for the exchange to
    /// be attempted.
    pub fn new(client_id: Option<String>, client_secret: Option<String>) -> Self {
        let credentials = match (client_id, client_secret) {
            (Some(client_id), Some(client_secret)) => Some(Credentials {
                client_id,
                client_secret,
            }),
            _ => None,
        };
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            credentials,
            token_url: TOKEN_URL.to_string(),
            userinfo_url: USERINFO_URL.to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// Points the client at another host; used to exercise the exchange
    /// against a local stub.
    #[cfg(test)]
    pub fn with_endpoints(mut self, token_url: String, userinfo_url: String) -> Self {
        self.token_url = token_url;
        self.userinfo_url = userinfo_url;
        self
    }

    /// Exchanges the authorization code for an access token, then fetches the
    /// member profile with it.
    pub async fn exchange(&self, callback: &LinkedInCallback) -> Result<LinkedInSession, LinkedInError> {
        let credentials = self.credentials.as_ref().ok_or(LinkedInError::NotConfigured)?;

        let form = TokenRequest {
            grant_type: "authorization_code",
            code: &callback.code,
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
            redirect_uri: &callback.redirect_uri,
        };
        let response = self.client.post(&self.token_url).form(&form).send().await?;
        let token: TokenResponse = ensure_success(response).await?.json().await?;
        let access_token = token
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(LinkedInError::MissingAccessToken)?;
        debug!("LinkedIn access token obtained");

        let response = self
            .client
            .get(&self.userinfo_url)
            .bearer_auth(&access_token)
            .send()
            .await?;
        let profile: Value = ensure_success(response).await?.json().await?;

        Ok(LinkedInSession {
            access_token,
            profile,
        })
    }
}

/// Turns a non-2xx response into `LinkedInError::Api`, keeping LinkedIn's
/// error body (as JSON when it parses, else as text).
async fn ensure_success(response: Response) -> Result<Response, LinkedInError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    warn!("LinkedIn API returned {}: {}", status, body);
    let detail = serde_json::from_str::<Value>(&body).unwrap_or(Value::String(body));
    Err(LinkedInError::Api {
        status: status.as_u16(),
        detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn callback() -> LinkedInCallback {
        LinkedInCallback {
            code: "auth-code".to_string(),
            redirect_uri: "http://localhost:5173/linkedin".to_string(),
        }
    }

    #[test]
    fn test_client_requires_both_credentials() {
        assert!(!LinkedInClient::new(Some("id".into()), None).is_configured());
        assert!(!LinkedInClient::new(None, Some("secret".into())).is_configured());
        assert!(LinkedInClient::new(Some("id".into()), Some("secret".into())).is_configured());
    }

    #[tokio::test]
    async fn test_unconfigured_client_fails_without_network() {
        let client = LinkedInClient::new(None, None);
        let err = client.exchange(&callback()).await.unwrap_err();
        assert!(matches!(err, LinkedInError::NotConfigured));
    }

    /// Serves `router` on an ephemeral local port and returns its base URL.
    async fn serve_stub(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn configured_client(base: &str) -> LinkedInClient {
        LinkedInClient::new(Some("id".into()), Some("secret".into()))
            .with_endpoints(format!("{base}/token"), format!("{base}/userinfo"))
    }

    #[tokio::test]
    async fn test_exchange_returns_token_and_profile() {
        use axum::http::HeaderMap;
        use axum::routing::{get, post};

        let router = axum::Router::new()
            .route(
                "/token",
                post(|body: String| async move {
                    assert!(body.contains("grant_type=authorization_code"));
                    assert!(body.contains("code=auth-code"));
                    assert!(body.contains("client_secret=secret"));
                    axum::Json(serde_json::json!({"access_token": "tok-123", "expires_in": 60}))
                }),
            )
            .route(
                "/userinfo",
                get(|headers: HeaderMap| async move {
                    assert_eq!(headers["authorization"], "Bearer tok-123");
                    axum::Json(serde_json::json!({"sub": "abc", "name": "Jane Doe"}))
                }),
            );
        let base = serve_stub(router).await;

        let session = configured_client(&base).exchange(&callback()).await.unwrap();
        assert_eq!(session.access_token, "tok-123");
        assert_eq!(session.profile["name"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_exchange_relays_upstream_error_body() {
        use axum::http::StatusCode;
        use axum::routing::post;

        let router = axum::Router::new().route(
            "/token",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    axum::Json(serde_json::json!({"error": "invalid_client"})),
                )
            }),
        );
        let base = serve_stub(router).await;

        match configured_client(&base).exchange(&callback()).await {
            Err(LinkedInError::Api { status, detail }) => {
                assert_eq!(status, 401);
                assert_eq!(detail["error"], "invalid_client");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_exchange_without_access_token_fails() {
        use axum::routing::post;

        let router = axum::Router::new().route(
            "/token",
            post(|| async { axum::Json(serde_json::json!({"error": "nope"})) }),
        );
        let base = serve_stub(router).await;

        let err = configured_client(&base).exchange(&callback()).await.unwrap_err();
        assert!(matches!(err, LinkedInError::MissingAccessToken));
    }

    #[test]
    fn test_session_serializes_camel_case_token() {
        let session = LinkedInSession {
            access_token: "tok".to_string(),
            profile: serde_json::json!({"sub": "abc"}),
        };
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["accessToken"], "tok");
        assert_eq!(json["profile"]["sub"], "abc");
    }
}
