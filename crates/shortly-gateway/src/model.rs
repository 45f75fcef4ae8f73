use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The URL to shorten.
    pub link: String,
    /// Minutes until the link expires; 0 (the default) means never.
    #[serde(default)]
    pub expiry: u32,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_link: String,
    pub shortened_link: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
