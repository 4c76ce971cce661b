use chrono::{Local, Timelike};

/// HH:MM with the colon blinking at 1 Hz: lit on even seconds, replaced by a
/// space on odd ones.
pub fn clock_text(hour: u32, minute: u32, colon_on: bool) -> String {
    if colon_on {
        format!("{:02}:{:02}", hour, minute)
    } else {
        format!("{:02} {:02}", hour, minute)
    }
}

/// Clock text for the current local wall-clock time.
pub fn current_clock_text() -> String {
    let now = Local::now();
    clock_text(now.hour(), now.minute(), now.second() % 2 == 0)
}
