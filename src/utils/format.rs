// src/utils/format.rs

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;

// Render a brute-force estimate in the largest unit under its threshold
pub fn format_crack_time(seconds: f64) -> String {
    if seconds < 1.0 {
        "under a second".to_string()
    } else if seconds < MINUTE {
        format!("{:.1} seconds", seconds)
    } else if seconds < HOUR {
        format!("{:.1} minutes", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.1} hours", seconds / HOUR)
    } else if seconds < YEAR {
        format!("{:.1} days", seconds / DAY)
    } else if seconds < YEAR * 100.0 {
        format!("{:.1} years", seconds / YEAR)
    } else {
        // Also covers an infinite keyspace
        "over 100 years".to_string()
    }
}

// Hide all but the first and last character, for echoing user input back
pub fn mask_password(password: &str) -> String {
    let chars: Vec<char> = password.chars().collect();
    match chars.len() {
        0 => String::new(),
        1 | 2 => "*".repeat(chars.len()),
        n => format!("{}{}{}", chars[0], "*".repeat(n - 2), chars[n - 1]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crack_time_buckets() {
        assert_eq!(format_crack_time(0.0), "under a second");
        assert_eq!(format_crack_time(0.99), "under a second");
        assert_eq!(format_crack_time(1.0), "1.0 seconds");
        assert_eq!(format_crack_time(59.94), "59.9 seconds");
        assert_eq!(format_crack_time(90.0), "1.5 minutes");
        assert_eq!(format_crack_time(7_200.0), "2.0 hours");
        assert_eq!(format_crack_time(DAY * 3.34), "3.3 days");
        assert_eq!(format_crack_time(YEAR * 42.0), "42.0 years");
        assert_eq!(format_crack_time(YEAR * 100.0), "over 100 years");
        assert_eq!(format_crack_time(f64::INFINITY), "over 100 years");
    }

    #[test]
    fn test_mask_password() {
        assert_eq!(mask_password(""), "");
        assert_eq!(mask_password("ab"), "**");
        assert_eq!(mask_password("secret"), "s****t");
        assert_eq!(mask_password("ñandú"), "ñ***ú");
    }
}
