//! Console pages and their static metadata.

use scrutiny_core::{RouteMeta, route};

/// A page of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page.
    Home,
    /// Login form.
    Login,
    /// About page.
    About,
    /// Usage documentation.
    Docs,
    /// Configuration checks and suggestions.
    Configurations,
    /// Configuration backups.
    Backups,
}

impl Route {
    /// Every page, in menu order.
    pub const ALL: [Route; 6] =
        [Self::Home, Self::Login, Self::About, Self::Docs, Self::Configurations, Self::Backups];

    /// Path of the page.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => route::HOME_PATH,
            Self::Login => route::LOGIN_PATH,
            Self::About => "/about",
            Self::Docs => "/docs",
            Self::Configurations => "/configurations",
            Self::Backups => "/backups",
        }
    }

    /// Guard metadata. Only the login page is reachable without a session.
    pub fn meta(self) -> RouteMeta {
        match self {
            Self::Login => RouteMeta::login(),
            _ => RouteMeta::protected(),
        }
    }

    /// Look up a page by path. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
