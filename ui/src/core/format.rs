//! Formatting helpers for clinic content.

use crate::content::models::MAX_STARS;

/// One filled star per rating point.
pub fn stars(rating: u8) -> String {
    "★".repeat(rating.min(MAX_STARS) as usize)
}

/// Opening hours are stored as one free-text field with a line per day range.
pub fn timing_lines(timings: &str) -> Vec<String> {
    timings
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

pub fn px(value: f64) -> String {
    format!("{value:.0}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_capped() {
        assert_eq!(stars(3), "★★★");
        assert_eq!(stars(9).chars().count(), 5);
    }

    #[test]
    fn timings_split_and_trim() {
        assert_eq!(
            timing_lines("Mon–Fri 9–6\n\n  Sat 10–2 "),
            vec!["Mon–Fri 9–6".to_string(), "Sat 10–2".to_string()]
        );
    }

    #[test]
    fn tel_strips_formatting() {
        assert_eq!(tel_href("(123) 456-7890"), "tel:1234567890");
        assert_eq!(tel_href("+92 300 1234567"), "tel:+923001234567");
    }
}
