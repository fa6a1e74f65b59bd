use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

/// Represents the day of the week a period is scheduled on
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn all() -> Vec<DayOfWeek> {
        DayOfWeek::iter().collect()
    }

    /// Position within the week, monday first
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::day_of_week::DayOfWeek;
    use std::str::FromStr;

    #[test]
    fn test_day_of_week_from_str() {
        assert_eq!(DayOfWeek::from_str("monday").unwrap(), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::from_str("sunday").unwrap(), DayOfWeek::Sunday);
        assert!(DayOfWeek::from_str("someday").is_err());
    }

    #[test]
    fn test_day_of_week_as_str() {
        assert_eq!(DayOfWeek::Wednesday.as_str(), "wednesday");
    }

    #[test]
    fn test_day_of_week_ordering() {
        let mut days = vec![DayOfWeek::Friday, DayOfWeek::Monday, DayOfWeek::Sunday];
        days.sort_by_key(DayOfWeek::ordinal);
        assert_eq!(
            days,
            vec![DayOfWeek::Monday, DayOfWeek::Friday, DayOfWeek::Sunday]
        );
    }

    #[test]
    fn test_all_days() {
        assert_eq!(DayOfWeek::all().len(), 7);
    }
}
