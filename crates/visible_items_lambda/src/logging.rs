use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Picks the filter directive: `RUST_LOG` first, then `LOG_LEVEL`.
pub fn filter_directive(lookup: impl Fn(&str) -> Option<String>) -> String {
    if let Some(directive) = non_blank(lookup("RUST_LOG")) {
        return directive;
    }
    non_blank(lookup("LOG_LEVEL"))
        .map(|level| level.to_ascii_lowercase())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Installs a JSON subscriber writing one object per line to stdout.
pub fn init() {
    let directive = filter_directive(|name| std::env::var(name).ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // CloudWatch adds the ingestion time.
        .without_time()
        .with_ansi(false)
        .init();
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_takes_precedence() {
        let directive = filter_directive(|name| match name {
            "RUST_LOG" => Some("visible_items_lambda=trace".to_string()),
            "LOG_LEVEL" => Some("DEBUG".to_string()),
            _ => None,
        });

        assert_eq!(directive, "visible_items_lambda=trace");
    }

    #[test]
    fn log_level_is_lowercased() {
        let directive = filter_directive(|name| (name == "LOG_LEVEL").then(|| "DEBUG".to_string()));

        assert_eq!(directive, "debug");
    }

    #[test]
    fn defaults_to_info() {
        assert_eq!(filter_directive(|_| None), "info");
        assert_eq!(
            filter_directive(|name| (name == "LOG_LEVEL").then(|| " ".to_string())),
            "info"
        );
    }
}
