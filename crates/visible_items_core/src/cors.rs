use crate::routing::ALLOWED_METHODS;

pub const DEFAULT_MAX_AGE_SECS: u32 = 300;
pub const DEFAULT_ALLOW_HEADERS: [&str; 5] = [
    "Authorization",
    "Content-Type",
    "X-Amz-Date",
    "X-Amz-Security-Token",
    "X-Api-Key",
];

pub const ALLOW_ORIGIN_HEADER: &str = "access-control-allow-origin";
pub const ALLOW_HEADERS_HEADER: &str = "access-control-allow-headers";
pub const ALLOW_METHODS_HEADER: &str = "access-control-allow-methods";
pub const MAX_AGE_HEADER: &str = "access-control-max-age";

const ANY_ORIGIN: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    allow_origin: String,
    allow_headers: Vec<String>,
    max_age_secs: u32,
}

impl CorsPolicy {
    pub fn new(allow_origin: impl Into<String>) -> Self {
        Self {
            allow_origin: allow_origin.into(),
            allow_headers: sorted_headers(&DEFAULT_ALLOW_HEADERS),
            max_age_secs: DEFAULT_MAX_AGE_SECS,
        }
    }

    pub fn allow_origin(&self) -> &str {
        &self.allow_origin
    }

    pub fn allows(&self, origin: &str) -> bool {
        self.allow_origin == ANY_ORIGIN || self.allow_origin == origin
    }

    /// Headers to attach to a response. Empty when the request carries no
    /// origin or one the policy rejects. Preflight answers also list methods.
    pub fn response_headers(
        &self,
        request_origin: Option<&str>,
        preflight: bool,
    ) -> Vec<(&'static str, String)> {
        let Some(origin) = request_origin else {
            return Vec::new();
        };
        if !self.allows(origin) {
            return Vec::new();
        }

        let mut headers = vec![
            (ALLOW_ORIGIN_HEADER, self.allow_origin.clone()),
            (ALLOW_HEADERS_HEADER, self.allow_headers.join(",")),
            (MAX_AGE_HEADER, self.max_age_secs.to_string()),
        ];
        if preflight {
            headers.push((ALLOW_METHODS_HEADER, ALLOWED_METHODS.to_string()));
        }
        headers
    }
}

fn sorted_headers(headers: &[&str]) -> Vec<String> {
    let mut sorted: Vec<String> = headers.iter().map(|header| header.to_string()).collect();
    sorted.sort();
    sorted.dedup();
    sorted
}
