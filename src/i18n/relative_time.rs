use chrono::{DateTime, Utc};

use super::Locale;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Distance {
    UnderAMinute,
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Months(i64),
    Years(i64),
}

impl Distance {
    fn between(seconds: i64) -> Self {
        match seconds {
            s if s < 30 => Distance::UnderAMinute,
            s if s < 45 * MINUTE => Distance::Minutes(((s + 30) / MINUTE).max(1)),
            s if s < DAY - 30 => Distance::Hours(((s + HOUR / 2) / HOUR).max(1)),
            s if s < MONTH => Distance::Days(((s + DAY / 2) / DAY).max(1)),
            s if s < YEAR => Distance::Months(((s + MONTH / 2) / MONTH).clamp(1, 11)),
            s => Distance::Years((s / YEAR).max(1)),
        }
    }

    fn en(self) -> String {
        let plural = |n: i64, unit: &str| {
            if n == 1 {
                format!("1 {}", unit)
            } else {
                format!("{} {}s", n, unit)
            }
        };
        match self {
            Distance::UnderAMinute => "less than a minute".to_string(),
            Distance::Minutes(n) => plural(n, "minute"),
            Distance::Hours(n) => format!("about {}", plural(n, "hour")),
            Distance::Days(n) => plural(n, "day"),
            Distance::Months(n) => format!("about {}", plural(n, "month")),
            Distance::Years(n) => format!("about {}", plural(n, "year")),
        }
    }

    /// German forms after "vor" / "in" take the dative.
    fn de(self) -> String {
        let unit = |n: i64, one: &str, many: &str| {
            if n == 1 {
                format!("1 {}", one)
            } else {
                format!("{} {}", n, many)
            }
        };
        match self {
            Distance::UnderAMinute => "weniger als einer Minute".to_string(),
            Distance::Minutes(n) => unit(n, "Minute", "Minuten"),
            Distance::Hours(n) => format!("etwa {}", unit(n, "Stunde", "Stunden")),
            Distance::Days(n) => unit(n, "Tag", "Tagen"),
            Distance::Months(n) => format!("etwa {}", unit(n, "Monat", "Monaten")),
            Distance::Years(n) => format!("etwa {}", unit(n, "Jahr", "Jahren")),
        }
    }
}

/// Describes `then` relative to `now`, e.g. `3 days ago` or `vor 3 Tagen`.
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>, locale: Locale) -> String {
    let seconds = (now - then).num_seconds();
    let in_past = seconds >= 0;
    let distance = Distance::between(seconds.abs());

    match (locale, in_past) {
        (Locale::En, true) => format!("{} ago", distance.en()),
        (Locale::En, false) => format!("in {}", distance.en()),
        (Locale::De, true) => format!("vor {}", distance.de()),
        (Locale::De, false) => format!("in {}", distance.de()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rstest::rstest;

    #[rstest]
    #[case(Duration::seconds(5), "less than a minute ago")]
    #[case(Duration::minutes(1), "1 minute ago")]
    #[case(Duration::minutes(12), "12 minutes ago")]
    #[case(Duration::hours(3), "about 3 hours ago")]
    #[case(Duration::days(1), "1 day ago")]
    #[case(Duration::days(9), "9 days ago")]
    #[case(Duration::days(75), "about 3 months ago")]
    #[case(Duration::days(800), "about 2 years ago")]
    fn english_distances(#[case] elapsed: Duration, #[case] expected: &str) {
        let now = Utc::now();
        assert_eq!(format_relative(now - elapsed, now, Locale::En), expected);
    }

    #[rstest]
    #[case(Duration::days(3), "vor 3 Tagen")]
    #[case(Duration::days(1), "vor 1 Tag")]
    #[case(Duration::hours(2), "vor etwa 2 Stunden")]
    fn german_distances(#[case] elapsed: Duration, #[case] expected: &str) {
        let now = Utc::now();
        assert_eq!(format_relative(now - elapsed, now, Locale::De), expected);
    }

    #[test]
    fn future_dates_read_forward() {
        let now = Utc::now();
        assert_eq!(
            format_relative(now + Duration::days(2), now, Locale::En),
            "in 2 days"
        );
    }
}
