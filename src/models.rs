use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
    Wellbeing,
    Health,
    Movement,
    Home,
    Learning,
}

impl HabitCategory {
    pub fn label(self) -> &'static str {
        match self {
            HabitCategory::Wellbeing => "Wellbeing",
            HabitCategory::Health => "Health",
            HabitCategory::Movement => "Movement",
            HabitCategory::Home => "Home",
            HabitCategory::Learning => "Learning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: HabitCategory,
    pub target_per_day: u32,
}

/// A template joined with the selected date's completion set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInstance {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: HabitCategory,
    pub target_per_day: u32,
    pub completed: bool,
}

impl TaskInstance {
    pub fn from_template(template: &TaskTemplate, completed: bool) -> Self {
        Self {
            id: template.id.to_string(),
            title: template.title.to_string(),
            description: template.description.to_string(),
            category: template.category,
            target_per_day: template.target_per_day,
            completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DailyLog {
    pub date: String,
    pub score: u8,
    pub positives: Vec<String>,
    pub negatives: Vec<String>,
    pub completed_task_ids: BTreeSet<String>,
}

impl DailyLog {
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingItem {
    pub label: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Rankings {
    pub positives: Vec<RankingItem>,
    pub negatives: Vec<RankingItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDayScore {
    pub date: String,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    High,
    Mid,
    Low,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub task_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveLogRequest {
    #[serde(default)]
    pub score: serde_json::Value,
    #[serde(default)]
    pub positives: Vec<String>,
    #[serde(default)]
    pub negatives: Vec<String>,
}

/// Form body posted by the HTML page; tag fields are comma separated.
#[derive(Debug, Deserialize)]
pub struct SaveLogForm {
    #[serde(default)]
    pub score: String,
    #[serde(default)]
    pub positives: String,
    #[serde(default)]
    pub negatives: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectDateRequest {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: String,
    pub score: u8,
    pub band: ScoreBand,
    pub streak_days: u32,
    pub logged: bool,
    pub positives: Vec<String>,
    pub negatives: Vec<String>,
    pub tasks: Vec<TaskInstance>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub tasks: Vec<TaskTemplate>,
    pub positive_presets: Vec<&'static str>,
    pub negative_presets: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub today: TodayResponse,
    pub rankings: Rankings,
    pub history: Vec<CalendarDayScore>,
}
