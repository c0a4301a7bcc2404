
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub fn lead_submission_url() -> String {
    format!("{}/api/agent-requests", get_backend_url())
}

// Where a visitor lands once their application went through
pub const SUCCESS_REDIRECT_URL: &str = "https://imigoimmigration.com";
pub const REDIRECT_DELAY_MS: u32 = 2_000;
pub const SCROLL_DELAY_MS: u32 = 100;

pub const EVALUATION_FORM_BASE_URL: &str = "https://team.imigoimmigration.com/form";
pub const DEFAULT_FORM_ID: &str = "entree-express";

pub const AMBASSADOR_VIDEO_URL: &str = "https://www.youtube.com/embed/ZitdmF-QnnE";
