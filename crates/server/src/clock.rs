use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Source of "today" for window aggregation.
#[derive(Clone, Copy, Debug)]
pub enum Clock {
    /// Current date in the given time zone.
    System(Tz),
    /// Always the same date.
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Self::System(tz) => Utc::now().with_timezone(tz).date_naive(),
            Self::Fixed(date) => *date,
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::System(Tz::UTC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_never_moves() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 29).unwrap();
        assert_eq!(Clock::Fixed(date).today(), date);
    }
}
