//! Date, time and datetime picker setters.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};

use blockkit_types::element::{DatePicker, DatetimePicker, TimePicker};

use crate::element::ElementBuilder;

impl ElementBuilder<DatePicker> {
    /// Preselect `date`, sent as `YYYY-MM-DD`.
    pub fn initial_date(&mut self, date: NaiveDate) -> &mut Self {
        let formatted = date.format("%Y-%m-%d").to_string();
        self.set(|p| p.initial_date = Some(formatted))
    }
}

impl ElementBuilder<TimePicker> {
    /// Preselect `time`, sent as 24-hour `HH:MM`. Seconds are dropped.
    pub fn initial_time(&mut self, time: NaiveTime) -> &mut Self {
        let formatted = time.format("%H:%M").to_string();
        self.set(|p| p.initial_time = Some(formatted))
    }

    pub fn timezone(&mut self, timezone: impl Into<String>) -> &mut Self {
        let timezone = timezone.into();
        self.set(|p| p.timezone = Some(timezone))
    }
}

impl ElementBuilder<DatetimePicker> {
    /// Preselect `when`, sent as a unix timestamp in seconds.
    pub fn initial_date_time<Tz: TimeZone>(&mut self, when: DateTime<Tz>) -> &mut Self {
        let timestamp = when.timestamp();
        self.set(|p| p.initial_date_time = Some(timestamp))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_initial_date_format() {
        let mut builder = ElementBuilder::new(DatePicker::default());
        builder
            .initial_date(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap())
            .placeholder("Pick a day");
        assert_eq!(builder.element().initial_date.as_deref(), Some("2024-03-07"));
    }

    #[test]
    fn test_initial_time_drops_seconds() {
        let mut builder = ElementBuilder::new(TimePicker::default());
        builder
            .initial_time(NaiveTime::from_hms_opt(9, 5, 59).unwrap())
            .timezone("Europe/Berlin");
        assert_eq!(builder.element().initial_time.as_deref(), Some("09:05"));
        assert_eq!(builder.element().timezone.as_deref(), Some("Europe/Berlin"));
    }

    #[test]
    fn test_initial_date_time_unix_seconds() {
        let when = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut builder = ElementBuilder::new(DatetimePicker::default());
        builder.initial_date_time(when);
        assert_eq!(builder.element().initial_date_time, Some(1_704_067_200));
    }
}
