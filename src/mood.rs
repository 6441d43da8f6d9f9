//! The mood catalog: one descriptor per supported mood.
//!
//! Each mood carries its display emoji and color, energy and focus levels,
//! a short strategy line, suggested activities and a list of task
//! suggestions. Lookups are case-insensitive; unknown names fall back to
//! neutral defaults where a value is always needed.

use crate::tasks::{Priority, Task};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB` form.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Part of the day a suggestion suits best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// Morning.
    Morning,
    /// Afternoon.
    Afternoon,
    /// Evening.
    Evening,
}

/// Kind of work a suggestion represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    /// Regular work.
    Work,
    /// Creative work.
    Creative,
    /// Concentrated work.
    Focus,
    /// Upkeep and tidying.
    Maintenance,
    /// Planning ahead.
    Planning,
    /// Time with other people.
    Social,
}

/// A task recommended for a mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSuggestion {
    /// Title used for the task when accepted.
    pub title: &'static str,
    /// Priority used for the task when accepted.
    pub priority: Priority,
    /// Rough time needed, in minutes.
    pub estimated_minutes: u32,
    /// Energy required, 1-5.
    pub energy_required: u8,
    /// When the task fits best.
    pub best_time_of_day: TimeOfDay,
    /// Category of work.
    pub category: TaskCategory,
    /// The mood this suggestion belongs to.
    pub mood_tag: &'static str,
    /// One-line explanation.
    pub description: &'static str,
}

impl TaskSuggestion {
    /// A new active task prefilled from this suggestion and tagged with its mood.
    #[must_use]
    pub fn to_task(&self) -> Task {
        Task::new(self.title, self.priority).with_mood(self.mood_tag)
    }
}

/// Everything known about one mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mood {
    /// Canonical name, used as the statistics key.
    pub name: &'static str,
    /// Display emoji.
    pub emoji: &'static str,
    /// Display color.
    pub color: Rgb,
    /// Energy level, 1-5.
    pub energy_level: u8,
    /// Focus level, 1-5.
    pub focus_level: u8,
    /// How to approach tasks in this mood.
    pub strategy: &'static str,
    /// Activities that suit this mood.
    pub suggested_activities: &'static [&'static str],
    /// Task suggestions, in display order.
    pub suggestions: &'static [TaskSuggestion],
}

/// Emoji shown for unknown moods.
pub const DEFAULT_EMOJI: &str = "💪";

/// Color shown for unknown moods.
pub const DEFAULT_COLOR: Rgb = Rgb::new(255, 149, 0);

/// Strategy shown for unknown moods.
pub const DEFAULT_STRATEGY: &str = "Take tasks one step at a time";

#[allow(clippy::too_many_arguments)]
const fn suggestion(
    mood_tag: &'static str,
    title: &'static str,
    priority: Priority,
    estimated_minutes: u32,
    energy_required: u8,
    best_time_of_day: TimeOfDay,
    category: TaskCategory,
    description: &'static str,
) -> TaskSuggestion {
    TaskSuggestion {
        title,
        priority,
        estimated_minutes,
        energy_required,
        best_time_of_day,
        category,
        mood_tag,
        description,
    }
}

static MOODS: [Mood; 6] = [
    Mood {
        name: "Happy",
        emoji: "😊",
        color: Rgb::new(255, 223, 0),
        energy_level: 5,
        focus_level: 4,
        strategy: "Channel your positivity into meaningful tasks",
        suggested_activities: &[
            "Set ambitious goals",
            "Help others with tasks",
            "Take on new challenges",
            "Social activities",
        ],
        suggestions: &[
            suggestion(
                "Happy",
                "Take on a Challenge",
                Priority::High,
                60,
                5,
                TimeOfDay::Morning,
                TaskCategory::Focus,
                "Tackle a challenging task while feeling optimistic",
            ),
            suggestion(
                "Happy",
                "Share Your Energy",
                Priority::Medium,
                30,
                4,
                TimeOfDay::Afternoon,
                TaskCategory::Social,
                "Help others or engage in team activities",
            ),
        ],
    },
    Mood {
        name: "Productive",
        emoji: "💪",
        color: Rgb::new(255, 149, 0),
        energy_level: 5,
        focus_level: 5,
        strategy: "Perfect time for challenging work and important tasks",
        suggested_activities: &[
            "Important deadlines",
            "Complex problem solving",
            "Project planning",
            "Deep work sessions",
        ],
        suggestions: &[
            suggestion(
                "Productive",
                "Important Project",
                Priority::High,
                60,
                5,
                TimeOfDay::Morning,
                TaskCategory::Work,
                "Focus on high-priority tasks requiring concentration",
            ),
            suggestion(
                "Productive",
                "Strategic Planning",
                Priority::High,
                40,
                4,
                TimeOfDay::Afternoon,
                TaskCategory::Planning,
                "Plan and organize upcoming projects",
            ),
        ],
    },
    Mood {
        name: "Stressed",
        emoji: "😰",
        color: Rgb::new(0, 122, 255),
        energy_level: 3,
        focus_level: 2,
        strategy: "Focus on manageable tasks to reduce overwhelm",
        suggested_activities: &[
            "Break tasks into smaller steps",
            "Organize workspace",
            "Quick wins",
            "Breathing exercises",
        ],
        suggestions: &[
            suggestion(
                "Stressed",
                "Small Steps",
                Priority::Medium,
                15,
                2,
                TimeOfDay::Morning,
                TaskCategory::Maintenance,
                "Break down larger tasks into manageable pieces",
            ),
            suggestion(
                "Stressed",
                "Organize Space",
                Priority::Low,
                20,
                2,
                TimeOfDay::Afternoon,
                TaskCategory::Maintenance,
                "Clear your environment to reduce stress",
            ),
        ],
    },
    Mood {
        name: "Tired",
        emoji: "😴",
        color: Rgb::new(191, 90, 242),
        energy_level: 1,
        focus_level: 2,
        strategy: "Take it easy with simple, low-energy tasks",
        suggested_activities: &[
            "Simple tasks",
            "Review work",
            "Light organization",
            "Self-care activities",
        ],
        suggestions: &[
            suggestion(
                "Tired",
                "Easy Tasks",
                Priority::Low,
                15,
                1,
                TimeOfDay::Morning,
                TaskCategory::Maintenance,
                "Focus on simple, low-energy tasks",
            ),
            suggestion(
                "Tired",
                "Light Review",
                Priority::Low,
                20,
                1,
                TimeOfDay::Afternoon,
                TaskCategory::Focus,
                "Review and organize existing work",
            ),
        ],
    },
    Mood {
        name: "Bored",
        emoji: "😑",
        color: Rgb::new(255, 159, 10),
        energy_level: 3,
        focus_level: 2,
        strategy: "Try something new or creative to re-engage",
        suggested_activities: &[
            "Learn something new",
            "Creative projects",
            "Change of environment",
            "Brainstorming sessions",
        ],
        suggestions: &[
            suggestion(
                "Bored",
                "Creative Project",
                Priority::Medium,
                30,
                3,
                TimeOfDay::Morning,
                TaskCategory::Creative,
                "Start something new and engaging",
            ),
            suggestion(
                "Bored",
                "Learn Something",
                Priority::Medium,
                25,
                3,
                TimeOfDay::Afternoon,
                TaskCategory::Focus,
                "Explore a new skill or topic",
            ),
        ],
    },
    Mood {
        name: "Sad",
        emoji: "😢",
        color: Rgb::new(88, 86, 214),
        energy_level: 2,
        focus_level: 2,
        strategy: "Be gentle with yourself, focus on small wins",
        suggested_activities: &[
            "Gentle, manageable tasks",
            "Mood-lifting activities",
            "Connect with others",
            "Self-care routines",
        ],
        suggestions: &[
            suggestion(
                "Sad",
                "Gentle Tasks",
                Priority::Low,
                15,
                2,
                TimeOfDay::Morning,
                TaskCategory::Maintenance,
                "Start with something small and achievable",
            ),
            suggestion(
                "Sad",
                "Connect",
                Priority::Medium,
                20,
                2,
                TimeOfDay::Afternoon,
                TaskCategory::Social,
                "Reach out to someone supportive",
            ),
        ],
    },
];

/// Lowercased mood name to index in `MOODS`.
static BY_NAME: Lazy<HashMap<String, usize>> =
    Lazy::new(|| MOODS.iter().enumerate().map(|(i, m)| (m.name.to_lowercase(), i)).collect());

/// Read-only access to the built-in moods.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoodCatalog;

impl MoodCatalog {
    /// The built-in catalog.
    #[must_use]
    pub const fn builtin() -> Self {
        Self
    }

    /// All moods in display order.
    #[must_use]
    pub fn moods(&self) -> &'static [Mood] {
        &MOODS
    }

    /// All mood names in display order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        MOODS.iter().map(|m| m.name)
    }

    /// Look up a mood by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static Mood> {
        BY_NAME.get(&name.trim().to_lowercase()).map(|&i| &MOODS[i])
    }

    /// Task suggestions for a mood. Empty for unknown moods.
    #[must_use]
    pub fn suggest_tasks(&self, name: &str) -> Vec<TaskSuggestion> {
        self.get(name).map(|m| m.suggestions.to_vec()).unwrap_or_default()
    }

    /// Emoji for a mood.
    #[must_use]
    pub fn emoji_for(&self, name: &str) -> &'static str {
        self.get(name).map_or(DEFAULT_EMOJI, |m| m.emoji)
    }

    /// Color for a mood.
    #[must_use]
    pub fn color_for(&self, name: &str) -> Rgb {
        self.get(name).map_or(DEFAULT_COLOR, |m| m.color)
    }

    /// Strategy line for a mood.
    #[must_use]
    pub fn strategy_for(&self, name: &str) -> &'static str {
        self.get(name).map_or(DEFAULT_STRATEGY, |m| m.strategy)
    }
}

/// Task suggestions for a mood from the built-in catalog.
#[must_use]
pub fn suggest_tasks(mood: &str) -> Vec<TaskSuggestion> {
    MoodCatalog::builtin().suggest_tasks(mood)
}
