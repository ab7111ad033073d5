use chrono::Local;

/// Wall-clock timestamp used for chat message display. Never an ordering key.
pub fn clock_timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
