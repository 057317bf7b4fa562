/// Current wall clock time in milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Current wall clock time in milliseconds since the Unix epoch.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// Format the UTC time of day of `timestamp_ms` as `HH:MM:SS.mmm`.
pub fn format_clock(timestamp_ms: u64) -> String {
    let millis = timestamp_ms % 1000;
    let seconds = (timestamp_ms / 1000) % 60;
    let minutes = (timestamp_ms / 60_000) % 60;
    let hours = (timestamp_ms / 3_600_000) % 24;
    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}
