use crate::models::DailyLog;
use tracing::debug;

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

/// Per-date daily logs, kept in the order they were first written.
#[derive(Debug, Clone, Default)]
pub struct LogStore {
    logs: Vec<DailyLog>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from seed records. A repeated date replaces the earlier record.
    pub fn from_logs(logs: impl IntoIterator<Item = DailyLog>) -> Self {
        let mut store = Self::new();
        for mut log in logs {
            log.positives = dedup_tags(log.positives);
            log.negatives = dedup_tags(log.negatives);
            match store.position(&log.date) {
                Some(index) => store.logs[index] = log,
                None => store.logs.push(log),
            }
        }
        store
    }

    pub fn all(&self) -> &[DailyLog] {
        &self.logs
    }

    pub fn get(&self, date: &str) -> Option<&DailyLog> {
        self.logs.iter().find(|log| log.date == date)
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    /// Replaces score and tags for `date`, leaving completed tasks alone.
    pub fn upsert_score(
        &mut self,
        date: &str,
        score: i64,
        positives: Vec<String>,
        negatives: Vec<String>,
    ) -> &DailyLog {
        let score = clamp_score(score);
        let positives = dedup_tags(positives);
        let negatives = dedup_tags(negatives);

        let index = match self.position(date) {
            Some(index) => {
                let log = &mut self.logs[index];
                log.score = score;
                log.positives = positives;
                log.negatives = negatives;
                index
            }
            None => {
                self.logs.push(DailyLog {
                    date: date.to_string(),
                    score,
                    positives,
                    negatives,
                    ..DailyLog::default()
                });
                self.logs.len() - 1
            }
        };

        debug!(date, score, "daily log upserted");
        &self.logs[index]
    }

    /// Flips `task_id` in the completion set for `date`, creating a blank log if needed.
    pub fn toggle_task_completion(&mut self, date: &str, task_id: &str) -> &DailyLog {
        let index = match self.position(date) {
            Some(index) => {
                let completed = &mut self.logs[index].completed_task_ids;
                if !completed.remove(task_id) {
                    completed.insert(task_id.to_string());
                }
                index
            }
            None => {
                let mut log = DailyLog::empty(date);
                log.completed_task_ids.insert(task_id.to_string());
                self.logs.push(log);
                self.logs.len() - 1
            }
        };

        let log = &self.logs[index];
        debug!(
            date,
            task_id,
            completed = log.completed_task_ids.contains(task_id),
            "task toggled"
        );
        log
    }

    fn position(&self, date: &str) -> Option<usize> {
        self.logs.iter().position(|log| log.date == date)
    }
}

pub fn clamp_score(score: i64) -> u8 {
    score.clamp(MIN_SCORE, MAX_SCORE) as u8
}

/// Coerces raw score input. Anything that is not a finite number counts as zero.
pub fn parse_score(input: &str) -> u8 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) => score_from_f64(value),
        Err(_) => 0,
    }
}

/// Same coercion for JSON payloads, which may carry the score as a number or a string.
pub fn score_from_json(value: &serde_json::Value) -> u8 {
    match value {
        serde_json::Value::Number(number) => number.as_f64().map(score_from_f64).unwrap_or(0),
        serde_json::Value::String(text) => parse_score(text),
        serde_json::Value::Bool(true) => 1,
        _ => 0,
    }
}

fn score_from_f64(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    (value.round().clamp(MIN_SCORE as f64, MAX_SCORE as f64)) as u8
}

fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn upsert_clamps_score_to_range() {
        let mut store = LogStore::new();
        let log = store.upsert_score("2024-01-01", 150, tags(&["a"]), vec![]);
        assert_eq!(log.score, 100);

        let log = store.upsert_score("2024-01-02", -20, vec![], vec![]);
        assert_eq!(log.score, 0);
    }

    #[test]
    fn upsert_creates_log_with_empty_completion_set() {
        let mut store = LogStore::new();
        store.upsert_score("2024-01-01", 60, tags(&["walk"]), tags(&["late"]));

        let log = store.get("2024-01-01").expect("log created");
        assert_eq!(log.score, 60);
        assert_eq!(log.positives, tags(&["walk"]));
        assert_eq!(log.negatives, tags(&["late"]));
        assert!(log.completed_task_ids.is_empty());
    }

    #[test]
    fn upsert_preserves_completed_tasks_on_existing_log() {
        let mut store = LogStore::from_logs([DailyLog {
            date: "2024-01-01".to_string(),
            score: 50,
            completed_task_ids: BTreeSet::from(["x".to_string()]),
            ..DailyLog::default()
        }]);

        store.upsert_score("2024-01-01", 80, tags(&["b"]), vec![]);

        assert_eq!(store.len(), 1);
        let log = store.get("2024-01-01").unwrap();
        assert_eq!(log.score, 80);
        assert_eq!(log.positives, tags(&["b"]));
        assert_eq!(log.completed_task_ids, BTreeSet::from(["x".to_string()]));
    }

    #[test]
    fn upsert_drops_duplicate_tags() {
        let mut store = LogStore::new();
        let log = store.upsert_score("2024-01-01", 10, tags(&["a", "b", "a"]), tags(&["c", "c"]));
        assert_eq!(log.positives, tags(&["a", "b"]));
        assert_eq!(log.negatives, tags(&["c"]));
    }

    #[test]
    fn toggle_twice_on_fresh_date_reverts_completion() {
        let mut store = LogStore::new();
        store.toggle_task_completion("2024-03-10", "stretch");
        assert!(store.get("2024-03-10").unwrap().completed_task_ids.contains("stretch"));

        store.toggle_task_completion("2024-03-10", "stretch");
        let log = store.get("2024-03-10").unwrap();
        assert!(!log.completed_task_ids.contains("stretch"));
        assert_eq!(log.score, 0);
        assert!(log.positives.is_empty());
        assert!(log.negatives.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn toggle_keeps_score_and_tags_of_existing_log() {
        let mut store = LogStore::new();
        store.upsert_score("2024-03-10", 72, tags(&["walk"]), tags(&["snacks"]));
        store.toggle_task_completion("2024-03-10", "journal");

        let log = store.get("2024-03-10").unwrap();
        assert_eq!(log.score, 72);
        assert_eq!(log.positives, tags(&["walk"]));
        assert_eq!(log.negatives, tags(&["snacks"]));
        assert!(log.completed_task_ids.contains("journal"));
    }

    #[test]
    fn toggle_accepts_ids_outside_the_catalog() {
        let mut store = LogStore::new();
        let log = store.toggle_task_completion("2024-03-10", "not-a-task");
        assert!(log.completed_task_ids.contains("not-a-task"));
    }

    #[test]
    fn from_logs_keeps_one_record_per_date() {
        let store = LogStore::from_logs([
            DailyLog {
                date: "2024-01-01".to_string(),
                score: 10,
                ..DailyLog::default()
            },
            DailyLog {
                date: "2024-01-02".to_string(),
                score: 20,
                ..DailyLog::default()
            },
            DailyLog {
                date: "2024-01-01".to_string(),
                score: 30,
                ..DailyLog::default()
            },
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("2024-01-01").unwrap().score, 30);
        assert_eq!(store.all()[0].date, "2024-01-01");
    }

    #[test]
    fn parse_score_coerces_invalid_input_to_zero() {
        assert_eq!(parse_score(""), 0);
        assert_eq!(parse_score("abc"), 0);
        assert_eq!(parse_score("NaN"), 0);
        assert_eq!(parse_score("inf"), 0);
        assert_eq!(parse_score(" 75 "), 75);
        assert_eq!(parse_score("74.6"), 75);
        assert_eq!(parse_score("250"), 100);
        assert_eq!(parse_score("-3"), 0);
    }

    #[test]
    fn score_from_json_accepts_numbers_and_strings() {
        assert_eq!(score_from_json(&serde_json::json!(88)), 88);
        assert_eq!(score_from_json(&serde_json::json!("42")), 42);
        assert_eq!(score_from_json(&serde_json::json!(null)), 0);
        assert_eq!(score_from_json(&serde_json::json!([1])), 0);
        assert_eq!(score_from_json(&serde_json::json!(1000)), 100);
    }
}
