use crate::catalog::TaskCatalog;
use crate::models::{CalendarDayScore, DailyLog, Rankings, ScoreBand, TaskInstance, TodayResponse};
use crate::seed::seed_logs_at;
use crate::stats::{HISTORY_DAYS, compute_rankings, compute_streak, recent_history, score_band};
use crate::store::LogStore;
use chrono::{Local, NaiveDate};
use tracing::info;

/// Score shown in the header before anything is logged for the selected date.
pub const PLACEHOLDER_SCORE: u8 = 72;

/// Daily log input as the log form submits it.
#[derive(Debug, Clone, Default)]
pub struct SaveLog {
    pub score: u8,
    pub positives: Vec<String>,
    pub negatives: Vec<String>,
}

/// The habit tracker's state: logs, the selected date and the views derived from them.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: TaskCatalog,
    store: LogStore,
    selected_date: String,
    tasks: Vec<TaskInstance>,
    rankings: Rankings,
}

impl Session {
    /// Starts on today's date with the demo history loaded.
    pub fn initialize() -> Self {
        let today = Local::now().date_naive();
        let catalog = TaskCatalog::builtin();
        let seed = seed_logs_at(today, &catalog);
        Self::initialize_at(today, catalog, seed)
    }

    pub fn initialize_at(today: NaiveDate, catalog: TaskCatalog, seed: Vec<DailyLog>) -> Self {
        let mut session = Self {
            catalog,
            store: LogStore::from_logs(seed),
            selected_date: today.format("%Y-%m-%d").to_string(),
            tasks: Vec::new(),
            rankings: Rankings::default(),
        };
        session.refresh();
        info!(
            date = %session.selected_date,
            logs = session.store.len(),
            tasks = session.tasks.len(),
            "session initialized"
        );
        session
    }

    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }

    pub fn set_selected_date(&mut self, date: impl Into<String>) {
        self.selected_date = date.into();
        self.refresh_tasks();
    }

    pub fn toggle_task(&mut self, task_id: &str) {
        self.store.toggle_task_completion(&self.selected_date, task_id);
        self.refresh();
    }

    pub fn save_daily_log(&mut self, input: SaveLog) {
        let positives = clean_tags(input.positives);
        let negatives = clean_tags(input.negatives);
        self.store
            .upsert_score(&self.selected_date, i64::from(input.score), positives, negatives);
        self.refresh();
    }

    pub fn current_tasks(&self) -> &[TaskInstance] {
        &self.tasks
    }

    pub fn rankings(&self) -> &Rankings {
        &self.rankings
    }

    pub fn recent_history(&self) -> Vec<CalendarDayScore> {
        self.recent_history_with_limit(HISTORY_DAYS)
    }

    pub fn recent_history_with_limit(&self, limit: usize) -> Vec<CalendarDayScore> {
        recent_history(self.store.all(), limit)
    }

    pub fn streak(&self) -> u32 {
        compute_streak(self.store.all())
    }

    pub fn selected_log(&self) -> Option<&DailyLog> {
        self.store.get(&self.selected_date)
    }

    pub fn display_score(&self) -> u8 {
        self.selected_log()
            .map(|log| log.score)
            .unwrap_or(PLACEHOLDER_SCORE)
    }

    pub fn display_band(&self) -> ScoreBand {
        score_band(self.display_score())
    }

    pub fn logs(&self) -> &[DailyLog] {
        self.store.all()
    }

    pub fn catalog(&self) -> &TaskCatalog {
        &self.catalog
    }

    pub fn today(&self) -> TodayResponse {
        let log = self.selected_log();
        TodayResponse {
            date: self.selected_date.clone(),
            score: self.display_score(),
            band: self.display_band(),
            streak_days: self.streak(),
            logged: log.is_some(),
            positives: log.map(|log| log.positives.clone()).unwrap_or_default(),
            negatives: log.map(|log| log.negatives.clone()).unwrap_or_default(),
            tasks: self.tasks.clone(),
        }
    }

    fn refresh(&mut self) {
        self.refresh_tasks();
        self.rankings = compute_rankings(self.store.all());
    }

    fn refresh_tasks(&mut self) {
        let completed = self.store.get(&self.selected_date).map(|log| &log.completed_task_ids);
        self.tasks = self
            .catalog
            .list()
            .iter()
            .map(|template| {
                let done = completed.is_some_and(|ids| ids.contains(template.id));
                TaskInstance::from_template(template, done)
            })
            .collect();
    }
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
