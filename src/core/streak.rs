use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize,
};

use crate::persistence::{
    load_json_or_else,
    save_json,
    BlobStore,
    STREAK_KEY,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudyStreak {
    pub last_study_day: Option<NaiveDate>,
    pub streak_days: u32,
}

impl StudyStreak {
    /// Returns true if the streak changed.
    pub fn record(&mut self, today: NaiveDate) -> bool {
        let next = match self.last_study_day {
            Some(last) if last == today => return false,
            Some(last) if last.succ_opt() == Some(today) => self.streak_days + 1,
            _ => 1,
        };
        self.last_study_day = Some(today);
        self.streak_days = next;
        true
    }

    /// A streak is only alive if the last study day was today or yesterday.
    pub fn current(&self, today: NaiveDate) -> u32 {
        match self.last_study_day {
            Some(last) if last == today || last.succ_opt() == Some(today) => self.streak_days,
            _ => 0,
        }
    }
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub struct StreakTracker<S: BlobStore> {
    streak: StudyStreak,
    blobs: S,
}

impl<S: BlobStore> StreakTracker<S> {
    pub fn load(blobs: S) -> Self {
        let streak = load_json_or_else(&blobs, STREAK_KEY, StudyStreak::default);
        Self { streak, blobs }
    }

    pub fn streak(&self) -> &StudyStreak {
        &self.streak
    }

    pub fn record_study(&mut self, today: NaiveDate) {
        if !self.streak.record(today) {
            return;
        }
        tracing::info!("Study streak is now {} days", self.streak.streak_days);
        if let Err(e) = save_json(&mut self.blobs, STREAK_KEY, &self.streak) {
            tracing::error!("Failed to save study streak: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryBlobStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_streak_transitions() {
        let mut streak = StudyStreak::default();
        assert!(streak.record(day(1)));
        assert_eq!(streak.streak_days, 1);

        assert!(!streak.record(day(1)));
        assert_eq!(streak.streak_days, 1);

        assert!(streak.record(day(2)));
        assert!(streak.record(day(3)));
        assert_eq!(streak.streak_days, 3);

        assert!(streak.record(day(6)));
        assert_eq!(streak.streak_days, 1);
    }

    #[test]
    fn test_clock_going_backwards_restarts() {
        let mut streak = StudyStreak { last_study_day: Some(day(10)), streak_days: 4 };
        assert!(streak.record(day(8)));
        assert_eq!(streak.streak_days, 1);
    }

    #[test]
    fn test_current_expires_after_a_missed_day() {
        let streak = StudyStreak { last_study_day: Some(day(10)), streak_days: 4 };
        assert_eq!(streak.current(day(10)), 4);
        assert_eq!(streak.current(day(11)), 4);
        assert_eq!(streak.current(day(12)), 0);
        assert_eq!(StudyStreak::default().current(day(1)), 0);
    }

    #[test]
    fn test_tracker_persists_only_on_change() {
        let mut tracker = StreakTracker::load(MemoryBlobStore::new());
        tracker.record_study(day(1));
        tracker.record_study(day(1));
        tracker.record_study(day(2));
        assert_eq!(tracker.blobs.write_count(), 2);

        let reloaded = StreakTracker::load(tracker.blobs.clone());
        assert_eq!(reloaded.streak(), &StudyStreak { last_study_day: Some(day(2)), streak_days: 2 });
    }
}
