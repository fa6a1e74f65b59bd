use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// Lifecycle of a quiz attempt. A row only exists once the attempt has been
/// started, so "not started" is the absence of an attempt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttemptStatus {
    InProgress,
    Completed,
    TimedOut,
}

impl AttemptStatus {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Whether the attempt can still accept a submission
    pub fn is_open(&self) -> bool {
        matches!(self, Self::InProgress)
    }
}

#[cfg(test)]
mod test {
    use crate::attempt::AttemptStatus;
    use std::str::FromStr;

    #[test]
    fn test_status_round_trip() {
        assert_eq!(AttemptStatus::TimedOut.as_str(), "timed_out");
        assert_eq!(
            AttemptStatus::from_str("in_progress").unwrap(),
            AttemptStatus::InProgress
        );
    }

    #[test]
    fn test_only_in_progress_is_open() {
        assert!(AttemptStatus::InProgress.is_open());
        assert!(!AttemptStatus::Completed.is_open());
        assert!(!AttemptStatus::TimedOut.is_open());
    }
}
