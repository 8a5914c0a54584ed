//! Human-readable number and duration formatting helpers.

/// Format an activity volume into a compact string (e.g., "845", "12.3k",
/// "1.2M").
pub fn fmt_activity(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 10_000.0 {
        format!("{:.0}k", value / 1_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

/// Format a count with thousands separators ("1 432 801").
pub fn fmt_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Format a data age as a short human string ("just now", "42s ago",
/// "3m ago").
pub fn fmt_age(age: chrono::Duration) -> String {
    let secs = age.num_seconds().max(0);
    if secs < 5 {
        "just now".into()
    } else if secs < 60 {
        format!("{secs}s ago")
    } else {
        format!("{}m ago", secs / 60)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn activity_scales_units() {
        assert_eq!(fmt_activity(845.2), "845");
        assert_eq!(fmt_activity(1_234.0), "1.2k");
        assert_eq!(fmt_activity(45_600.0), "46k");
        assert_eq!(fmt_activity(2_500_000.0), "2.5M");
    }

    #[test]
    fn count_groups_thousands() {
        assert_eq!(fmt_count(7), "7");
        assert_eq!(fmt_count(1432), "1 432");
        assert_eq!(fmt_count(1_432_801), "1 432 801");
    }

    #[test]
    fn age_buckets() {
        assert_eq!(fmt_age(chrono::Duration::seconds(2)), "just now");
        assert_eq!(fmt_age(chrono::Duration::seconds(42)), "42s ago");
        assert_eq!(fmt_age(chrono::Duration::seconds(185)), "3m ago");
    }
}
