use serde::{Deserialize, Serialize};

use crate::content::quota::Remaining;

/// Raw body of `POST /generate-reel`. Every field may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateReelRequest {
    pub topic: Option<String>,
    pub niche: Option<String>,
    pub style: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateReelResponse {
    pub result: String,
    pub remaining: Remaining,
}
