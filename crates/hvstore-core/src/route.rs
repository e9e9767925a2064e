//! Client-side route table for the storefront.
//!
//! Maps a location (path + query) to a page and back. There is no server
//! routing behind these paths.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves alone: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    CustomDesign,
    Products,
    Membership,
    About,
    Admin,
    Login,
    Register,
    Cart,
    Checkout,
    Search { category: String },
    ProductDetail { id: String },
    PaySuccess,
    PayFail,
}

impl Route {
    /// Resolves a location. `path` may carry leading slashes and `query`
    /// may start with `?`. Unknown paths resolve to [`Route::Home`].
    #[must_use]
    pub fn from_location(path: &str, query: &str) -> Self {
        let path = path.trim_start_matches('/');

        if let Some(id) = path.strip_prefix("product-detail/") {
            if !id.is_empty() {
                return Self::ProductDetail { id: id.to_string() };
            }
        }

        if path.starts_with("search") {
            let category = query_param(query, "category").unwrap_or_default();
            return Self::Search { category };
        }

        match path {
            "custom-design" => Self::CustomDesign,
            "products" => Self::Products,
            "membership" => Self::Membership,
            "about" => Self::About,
            "admin" => Self::Admin,
            "login" => Self::Login,
            "register" => Self::Register,
            "cart" => Self::Cart,
            "checkout" => Self::Checkout,
            "pay_success" => Self::PaySuccess,
            "pay_fail" => Self::PayFail,
            _ => Self::Home,
        }
    }

    /// Resolves an absolute URL or a root-relative `/path?query` string.
    #[must_use]
    pub fn from_href(href: &str) -> Self {
        let base = url::Url::parse("http://localhost/").ok();
        let parsed = url::Url::options().base_url(base.as_ref()).parse(href);
        match parsed {
            Ok(url) => Self::from_location(url.path(), url.query().unwrap_or_default()),
            Err(e) => {
                tracing::debug!(href, error = %e, "unparseable location, routing home");
                Self::Home
            }
        }
    }

    /// Page key, as used in the path for simple routes.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::CustomDesign => "custom-design",
            Self::Products => "products",
            Self::Membership => "membership",
            Self::About => "about",
            Self::Admin => "admin",
            Self::Login => "login",
            Self::Register => "register",
            Self::Cart => "cart",
            Self::Checkout => "checkout",
            Self::Search { .. } => "search",
            Self::ProductDetail { .. } => "product-detail",
            Self::PaySuccess => "pay_success",
            Self::PayFail => "pay_fail",
        }
    }

    /// Path pushed to history when navigating to this route.
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::ProductDetail { id } => format!("/product-detail/{id}"),
            Self::Search { category } if !category.is_empty() => {
                format!("/search?category={}", utf8_percent_encode(category, COMPONENT))
            }
            other => format!("/{}", other.key()),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// First value of `name` in a `URLSearchParams`-style query string.
pub(crate) fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}
