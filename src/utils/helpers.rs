use std::env;

/// Service label reported in response envelopes.
pub fn service_name() -> String {
    env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string())
}

/// Display form of an author: `"{first_name} {last_name}"`.
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name)
}
