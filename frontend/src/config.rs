/// Configuration for the frontend application

// API base URL - 编译时从环境变量读取，默认 staging 服务
#[cfg_attr(feature = "mock", allow(dead_code, reason = "mock builds never hit the network"))]
pub const API_BASE: &str = match option_env!("DEVOTIONAL_API_BASE") {
    Some(url) => url,
    None => "https://staging-fcsdevotional.onrender.com/api/v1",
};

/// Durable image storage endpoint. Empty means `{API_BASE}/uploads/images`.
#[cfg_attr(feature = "mock", allow(dead_code, reason = "mock builds never hit the network"))]
const UPLOAD_URL: &str = match option_env!("DEVOTIONAL_UPLOAD_URL") {
    Some(url) => url,
    None => "",
};

/// Items requested per page.
pub const PAGE_SIZE: usize = 10;

/// Page buttons shown by the pager.
pub const PAGE_WINDOW: usize = 5;

/// Quiet period after the last keystroke before a search is sent.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// How long a toast stays on screen.
pub const TOAST_DISMISS_MS: u32 = 3000;

#[cfg_attr(feature = "mock", allow(dead_code, reason = "mock builds never hit the network"))]
pub fn upload_url() -> String {
    if UPLOAD_URL.is_empty() {
        format!("{}/uploads/images", API_BASE.trim_end_matches('/'))
    } else {
        UPLOAD_URL.to_string()
    }
}
