use crate::models::{CalendarDayScore, DailyLog, RankingItem, Rankings, ScoreBand};
use std::collections::HashMap;

pub const RANKING_SIZE: usize = 5;
pub const HISTORY_DAYS: usize = 10;

/// Tag frequencies over the whole history, top five per side.
///
/// Equal counts keep the order in which each label was first seen while walking
/// `logs` front to back.
pub fn compute_rankings(logs: &[DailyLog]) -> Rankings {
    Rankings {
        positives: rank_labels(logs.iter().flat_map(|log| log.positives.iter())),
        negatives: rank_labels(logs.iter().flat_map(|log| log.negatives.iter())),
    }
}

fn rank_labels<'a>(labels: impl Iterator<Item = &'a String>) -> Vec<RankingItem> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut items: Vec<RankingItem> = Vec::new();

    for label in labels {
        if label.is_empty() {
            continue;
        }
        match index.get(label.as_str()) {
            Some(&slot) => items[slot].count += 1,
            None => {
                index.insert(label.as_str(), items.len());
                items.push(RankingItem {
                    label: label.clone(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, so ties stay in first-seen order.
    items.sort_by(|a, b| b.count.cmp(&a.count));
    items.truncate(RANKING_SIZE);
    items
}

/// Number of most-recent logs in a row with at least one completed task.
///
/// Never reports less than 1.
pub fn compute_streak(logs: &[DailyLog]) -> u32 {
    let streak = sorted_desc(logs)
        .into_iter()
        .take_while(|log| !log.completed_task_ids.is_empty())
        .count() as u32;
    streak.max(1)
}

pub fn recent_history(logs: &[DailyLog], limit: usize) -> Vec<CalendarDayScore> {
    sorted_desc(logs)
        .into_iter()
        .take(limit)
        .map(|log| CalendarDayScore {
            date: log.date.clone(),
            score: log.score,
        })
        .collect()
}

pub fn score_band(score: u8) -> ScoreBand {
    if score >= 80 {
        ScoreBand::High
    } else if score >= 60 {
        ScoreBand::Mid
    } else {
        ScoreBand::Low
    }
}

// YYYY-MM-DD keys sort chronologically as plain strings.
fn sorted_desc(logs: &[DailyLog]) -> Vec<&DailyLog> {
    let mut sorted: Vec<&DailyLog> = logs.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use std::collections::BTreeSet;

    fn log(date: &str, positives: &[&str], negatives: &[&str], completed: &[&str]) -> DailyLog {
        DailyLog {
            date: date.to_string(),
            score: 50,
            positives: positives.iter().map(|s| s.to_string()).collect(),
            negatives: negatives.iter().map(|s| s.to_string()).collect(),
            completed_task_ids: completed.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn rankings_match_manual_tally() {
        let logs = vec![
            log("2024-01-01", &["walk", "sleep"], &["late"], &[]),
            log("2024-01-02", &["walk"], &["late", "snacks"], &[]),
            log("2024-01-03", &["walk", "sleep", "read"], &["snacks"], &[]),
        ];

        let rankings = compute_rankings(&logs);
        assert_eq!(
            rankings.positives,
            vec![
                RankingItem { label: "walk".into(), count: 3 },
                RankingItem { label: "sleep".into(), count: 2 },
                RankingItem { label: "read".into(), count: 1 },
            ]
        );
        assert_eq!(
            rankings.negatives,
            vec![
                RankingItem { label: "late".into(), count: 2 },
                RankingItem { label: "snacks".into(), count: 2 },
            ]
        );

        for item in rankings.positives.iter().chain(rankings.negatives.iter()) {
            let containing = logs
                .iter()
                .filter(|l| l.positives.contains(&item.label) || l.negatives.contains(&item.label))
                .count() as u32;
            assert!(item.count <= containing);
        }
    }

    #[test]
    fn rankings_skip_empty_labels() {
        let logs = vec![
            log("2024-01-01", &["", "walk"], &[""], &[]),
            log("2024-01-02", &[""], &[], &[]),
        ];
        let rankings = compute_rankings(&logs);
        assert_eq!(rankings.positives.len(), 1);
        assert_eq!(rankings.positives[0].label, "walk");
        assert!(rankings.negatives.is_empty());
    }

    #[test]
    fn rankings_break_ties_by_first_seen_order() {
        let logs = vec![
            log("2024-01-05", &["c", "a"], &[], &[]),
            log("2024-01-01", &["b", "a"], &[], &[]),
            log("2024-01-03", &["b", "c"], &[], &[]),
        ];
        let labels: Vec<String> = compute_rankings(&logs)
            .positives
            .into_iter()
            .map(|item| item.label)
            .collect();
        assert_eq!(labels, vec!["c", "a", "b"]);
    }

    #[test]
    fn rankings_truncate_to_top_five() {
        let logs = vec![log("2024-01-01", &["a", "b", "c", "d", "e", "f", "g"], &[], &[])];
        let rankings = compute_rankings(&logs);
        assert_eq!(rankings.positives.len(), RANKING_SIZE);
        assert_eq!(rankings.positives.last().unwrap().label, "e");
    }

    #[test]
    fn rankings_do_not_touch_input() {
        let logs = vec![log("2024-01-01", &["a"], &["b"], &["x"])];
        let before = logs.clone();
        let first = compute_rankings(&logs);
        let second = compute_rankings(&logs);
        assert_eq!(logs, before);
        assert_eq!(first, second);
    }

    #[test]
    fn streak_is_one_without_logs() {
        assert_eq!(compute_streak(&[]), 1);
    }

    #[test]
    fn streak_is_one_when_latest_log_has_no_completions() {
        let logs = vec![
            log("2024-01-01", &[], &[], &["stretch"]),
            log("2024-01-02", &[], &[], &["stretch"]),
            log("2024-01-03", &[], &[], &[]),
        ];
        assert_eq!(compute_streak(&logs), 1);
    }

    #[test]
    fn streak_stops_at_first_empty_day() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let day = |offset: i64| (today - Duration::days(offset)).to_string();
        // Deliberately out of order; the walk sorts by date first.
        let logs = vec![
            log(&day(3), &[], &[], &[]),
            log(&day(1), &[], &[], &["hydrate"]),
            log(&day(0), &[], &[], &["stretch"]),
            log(&day(4), &[], &[], &["stretch"]),
            log(&day(2), &[], &[], &["journal", "hydrate"]),
        ];
        assert_eq!(compute_streak(&logs), 3);
    }

    #[test]
    fn recent_history_is_bounded_and_descending() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let logs: Vec<DailyLog> = (0..50)
            .map(|offset| {
                let mut entry = log(&(start + Duration::days(offset)).to_string(), &[], &[], &[]);
                entry.score = offset as u8;
                entry
            })
            .collect();

        let history = recent_history(&logs, HISTORY_DAYS);
        assert_eq!(history.len(), 10);
        assert_eq!(history[0].date, "2024-02-19");
        assert_eq!(history[0].score, 49);
        assert!(history.windows(2).all(|pair| pair[0].date > pair[1].date));
    }

    #[test]
    fn recent_history_with_fewer_logs_than_limit() {
        let logs = vec![log("2024-01-01", &[], &[], &[]), log("2024-01-03", &[], &[], &[])];
        let history = recent_history(&logs, HISTORY_DAYS);
        let dates: Vec<&str> = history.iter().map(|day| day.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-03", "2024-01-01"]);
    }

    #[test]
    fn score_band_thresholds() {
        assert_eq!(score_band(100), ScoreBand::High);
        assert_eq!(score_band(80), ScoreBand::High);
        assert_eq!(score_band(79), ScoreBand::Mid);
        assert_eq!(score_band(60), ScoreBand::Mid);
        assert_eq!(score_band(59), ScoreBand::Low);
        assert_eq!(score_band(0), ScoreBand::Low);
    }
}
