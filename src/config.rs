//! Application Configuration
//!
//! Build-time defaults with an optional runtime override from `index.html`.

/// Committee size bounds enforced by the backend and mirrored in the UI
pub const MAX_MEMBERS: usize = 5;
pub const MIN_MEMBERS: usize = 1;

/// Digits in an emailed passcode
pub const OTP_LENGTH: usize = 6;

/// Rows the backend returns in an upload preview
pub const PREVIEW_LIMIT: usize = 10;

/// localStorage keys for the cached session
pub const TOKEN_KEY: &str = "waterbill.token";
pub const EMAIL_KEY: &str = "waterbill.email";

const DEFAULT_API_BASE: &str = "/api/v1";
const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 5_000;
const API_BASE_META: &str = "meta[name=\"waterbill-api-base\"]";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// REST base path, no trailing slash
    pub api_base: String,
    /// Delay before the notification banner clears itself
    pub notice_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_api_base(option_env!("WATERBILL_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}

impl AppConfig {
    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: normalize_base(api_base),
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }

    /// Build-time defaults, then `<meta name="waterbill-api-base">` if the page has one
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(base) = meta_api_base() {
            log::info!("[CONFIG] API base overridden by page: {}", base);
            config.api_base = normalize_base(&base);
        }
        config
    }

    /// Absolute URL for an endpoint path such as `/auth/me`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

fn meta_api_base() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(API_BASE_META).ok()??;
    meta.get_attribute("content").filter(|c| !c.trim().is_empty())
}
