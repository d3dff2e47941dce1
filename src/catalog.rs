use crate::models::{HabitCategory, TaskTemplate};

const BUILTIN_TASKS: &[TaskTemplate] = &[
    TaskTemplate {
        id: "stretch",
        title: "Stretch",
        description: "Three minutes of morning stretching to wake the body up",
        category: HabitCategory::Movement,
        target_per_day: 1,
    },
    TaskTemplate {
        id: "hydrate",
        title: "Stay hydrated",
        description: "Finish one 500ml bottle of water",
        category: HabitCategory::Health,
        target_per_day: 1,
    },
    TaskTemplate {
        id: "reset-desk",
        title: "Reset the desk",
        description: "Tidy the desk when work is done",
        category: HabitCategory::Home,
        target_per_day: 1,
    },
    TaskTemplate {
        id: "journal",
        title: "Evening journal",
        description: "Write down three good things from today",
        category: HabitCategory::Wellbeing,
        target_per_day: 1,
    },
];

const POSITIVE_PRESETS: &[&str] = &["Woke up early", "Walk", "Focused well", "Balanced meals"];
const NEGATIVE_PRESETS: &[&str] = &["Stayed up late", "Snacking", "Not enough exercise", "Low mood"];

/// Read-only habit templates, in definition order.
#[derive(Debug, Clone, Copy)]
pub struct TaskCatalog {
    tasks: &'static [TaskTemplate],
}

impl TaskCatalog {
    pub fn builtin() -> Self {
        Self {
            tasks: BUILTIN_TASKS,
        }
    }

    pub fn list(&self) -> &'static [TaskTemplate] {
        self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&'static TaskTemplate> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn positive_presets(&self) -> &'static [&'static str] {
        POSITIVE_PRESETS
    }

    pub fn negative_presets(&self) -> &'static [&'static str] {
        NEGATIVE_PRESETS
    }
}

impl Default for TaskCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
