use std::time::Duration;

use reqwest::Client;

/// Maximum time budget for every upstream call. Exceeding it is treated as a
/// transport failure, terminal for that call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the HTTP client backing an upstream wrapper.
pub fn build_client() -> anyhow::Result<Client> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Join a provider base URL and a request path with exactly one separator,
/// whatever combination of leading/trailing slashes the two carry.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_with_leading_slash() {
        assert_eq!(
            join_url("https://example.com/api/v2", "/pokemon/mewtwo"),
            "https://example.com/api/v2/pokemon/mewtwo"
        );
    }

    #[test]
    fn join_url_without_leading_slash() {
        assert_eq!(
            join_url("https://example.com/api/v2", "pokemon/mewtwo"),
            "https://example.com/api/v2/pokemon/mewtwo"
        );
    }

    #[test]
    fn join_url_trims_trailing_base_slashes() {
        assert_eq!(
            join_url("https://example.com/api/v2/", "/yoda.json"),
            "https://example.com/api/v2/yoda.json"
        );
        assert_eq!(
            join_url("https://example.com/api/v2/", "yoda.json"),
            "https://example.com/api/v2/yoda.json"
        );
    }
}
