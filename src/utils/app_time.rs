// src/utils/app_time.rs

// `web_time` re-exports `std::time::Instant` on native targets and wraps
// `performance.now()` in the browser, so the same call works in both builds.
pub type AppInstant = web_time::Instant;

pub fn now() -> AppInstant {
    web_time::Instant::now()
}
