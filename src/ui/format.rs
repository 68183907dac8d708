//! Display formatting for timestamps and counters.

use chrono::{DateTime, Local, Utc};

/// Bubble time, `HH:MM` on a 24-hour clock in server-local time.
pub fn bubble_time(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M").to_string()
}

/// Coarse age of a chat: `{m}m ago`, `{h}h ago` or `{d}d ago`.
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - timestamp).max(chrono::Duration::zero());
    let hours = elapsed.num_hours();

    if hours < 1 {
        format!("{}m ago", elapsed.num_minutes())
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{}d ago", hours / 24)
    }
}

/// Unread badge label; counts above nine collapse to `9+`.
pub fn unread_label(count: u32) -> String {
    if count > 9 {
        "9+".to_string()
    } else {
        count.to_string()
    }
}

/// Upper-case the first letter of each word (`small business` → `Small Business`).
pub fn capitalize(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc::now();
        assert_eq!(relative_time(now, now), "0m ago");
        assert_eq!(relative_time(now - Duration::minutes(30), now), "30m ago");
        assert_eq!(relative_time(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(relative_time(now - Duration::minutes(60), now), "1h ago");
        assert_eq!(relative_time(now - Duration::hours(23), now), "23h ago");
        assert_eq!(relative_time(now - Duration::hours(24), now), "1d ago");
        assert_eq!(relative_time(now - Duration::hours(75), now), "3d ago");
    }

    #[test]
    fn test_future_timestamp_clamps() {
        let now = Utc::now();
        assert_eq!(relative_time(now + Duration::minutes(5), now), "0m ago");
    }

    #[test]
    fn test_unread_label() {
        assert_eq!(unread_label(1), "1");
        assert_eq!(unread_label(9), "9");
        assert_eq!(unread_label(10), "9+");
    }

    #[test]
    fn test_bubble_time_shape() {
        let time = bubble_time(Utc::now());
        assert_eq!(time.len(), 5);
        assert_eq!(time.as_bytes()[2], b':');
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("small business"), "Small Business");
        assert_eq!(capitalize("bank"), "Bank");
        assert_eq!(capitalize(""), "");
    }
}
