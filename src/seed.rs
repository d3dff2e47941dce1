use crate::catalog::TaskCatalog;
use crate::models::DailyLog;
use chrono::{Duration, NaiveDate};

pub const SEED_DAYS: usize = 8;

const SEED_POSITIVES: [&str; 3] = ["Woke up early", "Walk", "Hydrated"];
const SEED_NEGATIVES_EVEN: [&str; 1] = ["Stayed up late"];
const SEED_NEGATIVES_ODD: [&str; 2] = ["Too many snacks", "Couldn't focus"];

/// Demo history counting back from `today`, newest first.
pub fn seed_logs_at(today: NaiveDate, catalog: &TaskCatalog) -> Vec<DailyLog> {
    (0..SEED_DAYS)
        .map(|index| {
            let date = today - Duration::days(index as i64);
            let bonus = if index % 3 == 0 { 5 } else { 0 };
            let score = (85 - index as i64 * 4 + bonus).clamp(40, 100) as u8;

            let positives = SEED_POSITIVES[..(index % 3) + 1]
                .iter()
                .map(|label| label.to_string())
                .collect();
            let negatives: &[&str] = if index % 2 == 0 {
                &SEED_NEGATIVES_EVEN
            } else {
                &SEED_NEGATIVES_ODD
            };

            let completed_task_ids = catalog
                .list()
                .iter()
                .enumerate()
                .filter(|(task_index, _)| task_index % 2 == index % 2)
                .map(|(_, task)| task.id.to_string())
                .collect();

            DailyLog {
                date: date.format("%Y-%m-%d").to_string(),
                score,
                positives,
                negatives: negatives.iter().map(|label| label.to_string()).collect(),
                completed_task_ids,
            }
        })
        .collect()
}
