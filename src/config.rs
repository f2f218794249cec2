pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const BASE_URL_ENV: &str = "VIDEO_GAMES_API_URL";

pub const GAMES_PATH: &str = "/api/video-games";
pub const SUMMARY_PATH: &str = "/api/video-games/summary";

/// Upper bound on records requested from the listing endpoint.
pub const DEFAULT_LIMIT: u32 = 10_000;

/// Id of the element holding the three badges.
pub const CONTAINER_ID: &str = "video-games";

pub fn base_url_from_env() -> String {
    match std::env::var(BASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

/// Join a base URL and an absolute API path without doubling the slash.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
