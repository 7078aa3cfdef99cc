// mvnfetch-net/src/http.rs
use mvnfetch_common::error::{MvnError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response};
use tracing::debug;

const USER_AGENT_STRING: &str = concat!("mvnfetch/", env!("CARGO_PKG_VERSION"), " (Rust)");
const MAX_REDIRECTS: usize = 10;

/// Client shared by the metadata, checksum and artifact fetches.
///
/// No request timeout is configured; callers that need a deadline wrap the
/// download future themselves.
pub fn build_http_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STRING));
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    Client::builder()
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()
        .map_err(MvnError::from)
}

/// Issues one GET. Basic credentials are attached only when both the username
/// and the password are non-empty. The status code is not inspected here.
pub async fn http_get(
    client: &Client,
    url: &str,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<Response> {
    let request = match (username, password) {
        (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => {
            debug!("GET {} (basic auth as '{}')", url, user);
            client.get(url).basic_auth(user, Some(pass))
        }
        _ => {
            debug!("GET {}", url);
            client.get(url)
        }
    };
    let response = request.send().await.map_err(|e| {
        debug!("HTTP request failed for {url}: {e}");
        MvnError::from(e)
    })?;
    debug!("Received HTTP status: {} for {}", response.status(), url);
    Ok(response)
}

/// Turns any status >= 400 into [`MvnError::RemoteNotFound`] carrying the
/// requested URL verbatim.
pub fn ensure_success(response: Response, url: &str) -> Result<Response> {
    let status = response.status().as_u16();
    if status >= 400 {
        return Err(MvnError::RemoteNotFound {
            status,
            url: url.to_string(),
        });
    }
    Ok(response)
}
