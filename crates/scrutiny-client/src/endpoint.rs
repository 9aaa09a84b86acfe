//! Request target: base address plus bearer token.

use reqwest::Url;
use scrutiny_core::{ConnectionConfig, SessionState, Storage};

use crate::error::ApiError;

/// Where a call goes and which credential it carries.
///
/// Built fresh for every call from the current session, so a logout or a
/// login to another server is picked up by the next request.
#[derive(Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// `{protocol}://{hostname}:{port}/api`
    pub base_url: String,
    /// Bearer token, empty for unauthenticated calls.
    pub token: String,
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("base_url", &self.base_url)
            .field("has_token", &!self.token.is_empty())
            .finish()
    }
}

impl Endpoint {
    /// Create an endpoint from its parts.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), token: token.into() }
    }

    /// Endpoint for the server and token the session holds.
    pub fn for_session<S: Storage>(session: &SessionState<S>, config: &ConnectionConfig) -> Self {
        Self::new(config.base_api_path(session), session.token())
    }

    /// Tokenless endpoint for logging in to `hostname`.
    pub fn for_login(hostname: &str, config: &ConnectionConfig) -> Self {
        Self::new(config.derive_base_url(hostname), "")
    }

    /// Absolute URL of `route` (which starts with `/`).
    pub fn url(&self, route: &str) -> Result<Url, ApiError> {
        self.build(route, None)
    }

    /// Absolute URL of `route` followed by `item` as a single path segment.
    ///
    /// `item` is percent-encoded, so `/`, `?` and `#` in it can't change the
    /// route. Empty, `.` and `..` are rejected.
    pub fn item_url(&self, route: &str, item: &str) -> Result<Url, ApiError> {
        if matches!(item, "" | "." | "..") {
            return Err(ApiError::InvalidUrl { url: format!("{}{route}/{item}", self.base_url) });
        }
        self.build(route, Some(item))
    }

    fn build(&self, route: &str, item: Option<&str>) -> Result<Url, ApiError> {
        let invalid = || ApiError::InvalidUrl { url: format!("{}{route}", self.base_url) };
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        {
            let mut segments = url.path_segments_mut().map_err(|()| invalid())?;
            segments.pop_if_empty();
            segments.extend(route.split('/').filter(|s| !s.is_empty()));
            if let Some(item) = item {
                segments.push(item);
            }
        }
        Ok(url)
    }
}
