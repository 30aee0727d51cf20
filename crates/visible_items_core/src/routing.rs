pub const ROOT_PATH: &str = "/";
/// Methods advertised to CORS preflight requests.
pub const ALLOWED_METHODS: &str = "GET,OPTIONS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ListVisibleItems,
    Preflight,
    NotFound,
}

impl Route {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListVisibleItems => "list_visible_items",
            Self::Preflight => "preflight",
            Self::NotFound => "not_found",
        }
    }
}

/// Resolves requests to routes after removing the deployment base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    base_path: String,
}

impl Router {
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: normalize_base_path(base_path),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Removes the base path when it matches on a segment boundary.
    pub fn strip<'a>(&self, path: &'a str) -> &'a str {
        if path.is_empty() {
            return ROOT_PATH;
        }
        if self.base_path.is_empty() {
            return path;
        }
        match path.strip_prefix(self.base_path.as_str()) {
            Some("") => ROOT_PATH,
            Some(rest) if rest.starts_with('/') => rest,
            _ => path,
        }
    }

    /// Routes match on method and path together, so a known path with an
    /// unsupported method is simply not found.
    pub fn route(&self, method: &str, path: &str) -> Route {
        if method.eq_ignore_ascii_case("OPTIONS") {
            return Route::Preflight;
        }
        if method.eq_ignore_ascii_case("GET") && self.strip(path) == ROOT_PATH {
            Route::ListVisibleItems
        } else {
            Route::NotFound
        }
    }
}

fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
