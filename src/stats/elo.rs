use serde::{Deserialize, Serialize};

use crate::elo::models::EloEntry;

/// How many of the latest entries feed the recent-performance metrics
pub const RECENT_ENTRY_LIMIT: usize = 10;

/// Rating movement within a period window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EloStats {
    pub change: i64,
    pub entries: Vec<EloEntry>,
}

impl EloStats {
    pub fn from_window(entries: Vec<EloEntry>) -> Self {
        let change = entries.iter().map(|e| i64::from(e.elo_change)).sum();
        Self { change, entries }
    }
}

/// Win rate, average change and best streak over the latest entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPerformance {
    /// Share of entries with a positive change, 0-100
    pub win_rate: f64,
    pub average_change: f64,
    /// Longest run of consecutive positive changes
    pub best_streak: u32,
    pub sample_size: usize,
}

impl RecentPerformance {
    /// Entries must be in the order they were recorded.
    pub fn from_entries(entries: &[EloEntry]) -> Self {
        if entries.is_empty() {
            return Self {
                win_rate: 0.0,
                average_change: 0.0,
                best_streak: 0,
                sample_size: 0,
            };
        }

        let count = entries.len() as f64;
        let wins = entries.iter().filter(|e| e.elo_change > 0).count() as f64;
        let total: i64 = entries.iter().map(|e| i64::from(e.elo_change)).sum();

        let mut best_streak = 0;
        let mut current = 0;
        for entry in entries {
            if entry.elo_change > 0 {
                current += 1;
                best_streak = best_streak.max(current);
            } else {
                current = 0;
            }
        }

        Self {
            win_rate: wins / count * 100.0,
            average_change: total as f64 / count,
            best_streak,
            sample_size: entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    fn entries(changes: &[i32]) -> Vec<EloEntry> {
        changes
            .iter()
            .enumerate()
            .map(|(i, &elo_change)| EloEntry {
                id: i as u64 + 1,
                user_id: 1,
                elo_change,
                new_elo: 1200_i32.saturating_add(elo_change),
                date: Utc::now(),
                notes: None,
            })
            .collect()
    }

    #[test]
    fn test_window_change_is_sum() {
        let stats = EloStats::from_window(entries(&[10, -4, 7]));
        assert_eq!(stats.change, 13);
        assert_eq!(stats.entries.len(), 3);
    }

    #[test]
    fn test_window_sum_does_not_overflow() {
        let stats = EloStats::from_window(entries(&[i32::MAX, i32::MAX, 5]));
        assert_eq!(stats.change, 2 * i64::from(i32::MAX) + 5);
    }

    #[test]
    fn test_empty_window() {
        let stats = EloStats::from_window(Vec::new());
        assert_eq!(stats.change, 0);
        assert!(stats.entries.is_empty());
    }

    #[test]
    fn test_mixed_sequence() {
        let performance = RecentPerformance::from_entries(&entries(&[5, 3, -1, 8, 2]));
        assert!((performance.win_rate - 80.0).abs() < 1e-9);
        assert!((performance.average_change - 3.4).abs() < 1e-9);
        assert_eq!(performance.best_streak, 2);
        assert_eq!(performance.sample_size, 5);
    }

    #[rstest]
    #[case(&[], 0, 0.0)]
    #[case(&[-3, -2], 0, 0.0)]
    #[case(&[1, 1, 1, 0, 1], 3, 80.0)]
    #[case(&[0, 4, 4, 4, 4, -9, 4], 4, 5.0 / 7.0 * 100.0)]
    fn test_streak_and_win_rate(
        #[case] changes: &[i32],
        #[case] streak: u32,
        #[case] win_rate: f64,
    ) {
        let performance = RecentPerformance::from_entries(&entries(changes));
        assert_eq!(performance.best_streak, streak);
        assert!((performance.win_rate - win_rate).abs() < 1e-9);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(RecentPerformance::from_entries(&entries(&[1]))).unwrap();
        assert_eq!(json["winRate"], 100.0);
        assert_eq!(json["bestStreak"], 1);
    }
}
