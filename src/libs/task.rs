//! Task data model.
//!
//! A [`Task`] is one row of the planner table. Text attributes are kept as plain
//! strings, while the weekday, priority and recurrence rule are closed
//! enumerations. Those three are `Option`s in memory because a loaded file may lack
//! the column entirely, in which case the cell is the empty string and maps to
//! `None`. A cell holding a label outside the set is also `None`, but its text is
//! kept and written back unchanged.
//!
//! The file stores the Arabic labels used by the planner's users. On the command
//! line every choice can also be given by its English name:
//!
//! ```rust
//! use daytask::libs::task::{Choice, Repeat, Weekday};
//!
//! assert_eq!("sunday".parse::<Weekday>().unwrap(), Weekday::Sunday);
//! assert_eq!(Weekday::Sunday.label(), "الأحد");
//! assert_eq!(Repeat::from_label("يومي"), Some(Repeat::Daily));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Closed set of values stored as a fixed label.
pub trait Choice: Copy + Sized + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];
    /// Human readable name of the attribute, used in error messages.
    const KIND: &'static str;

    /// Label written to the backing file.
    fn label(self) -> &'static str;

    /// English name accepted on the command line.
    fn name(self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.label() == label)
    }

    /// Accepts either the stored label or the English name, ignoring case.
    fn parse_choice(input: &str) -> Result<Self, ParseChoiceError> {
        let input = input.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.label() == input || choice.name().eq_ignore_ascii_case(input))
            .ok_or_else(|| ParseChoiceError {
                kind: Self::KIND,
                value: input.to_string(),
                expected: Self::ALL.iter().map(|c| format!("{} ({})", c.name(), c.label())).collect::<Vec<_>>().join(", "),
            })
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}', expected one of: {expected}")]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Day of the week, ordered the way the planner lists them (week starts on Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub fn from_chrono(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
        }
    }
}

impl Choice for Weekday {
    const ALL: &'static [Self] = &[
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];
    const KIND: &'static str = "day";

    fn label(self) -> &'static str {
        match self {
            Weekday::Saturday => "السبت",
            Weekday::Sunday => "الأحد",
            Weekday::Monday => "الاثنين",
            Weekday::Tuesday => "الثلاثاء",
            Weekday::Wednesday => "الأربعاء",
            Weekday::Thursday => "الخميس",
            Weekday::Friday => "الجمعة",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Choice for Priority {
    const ALL: &'static [Self] = &[Priority::High, Priority::Medium, Priority::Low];
    const KIND: &'static str = "priority";

    fn label(self) -> &'static str {
        match self {
            Priority::High => "عالية",
            Priority::Medium => "متوسطة",
            Priority::Low => "منخفضة",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Recurrence rule of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repeat {
    None,
    Daily,
    Weekly,
}

impl Choice for Repeat {
    const ALL: &'static [Self] = &[Repeat::None, Repeat::Daily, Repeat::Weekly];
    const KIND: &'static str = "repeat";

    fn label(self) -> &'static str {
        match self {
            Repeat::None => "بدون",
            Repeat::Daily => "يومي",
            Repeat::Weekly => "أسبوعي",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Repeat::None => "none",
            Repeat::Daily => "daily",
            Repeat::Weekly => "weekly",
        }
    }
}

macro_rules! impl_choice_traits {
    ($($ty:ty),+) => {
        $(
            impl FromStr for $ty {
                type Err = ParseChoiceError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as Choice>::parse_choice(s)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )+
    };
}

impl_choice_traits!(Weekday, Priority, Repeat);

/// Columns of the backing table, in their fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Title,
    Description,
    Day,
    StartTime,
    EndTime,
    Priority,
    Repeat,
}

pub const COLUMNS: [Column; 8] = [
    Column::Id,
    Column::Title,
    Column::Description,
    Column::Day,
    Column::StartTime,
    Column::EndTime,
    Column::Priority,
    Column::Repeat,
];

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Title => "title",
            Column::Description => "description",
            Column::Day => "day",
            Column::StartTime => "start_time",
            Column::EndTime => "end_time",
            Column::Priority => "priority",
            Column::Repeat => "repeat",
        }
    }

    pub fn from_header(header: &str) -> Option<Self> {
        COLUMNS.iter().copied().find(|column| column.header() == header.trim())
    }
}

/// A single schedulable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub day: Option<Weekday>,
    pub start_time: String,
    pub end_time: String,
    pub priority: Option<Priority>,
    pub repeat: Option<Repeat>,
    /// Text of choice cells whose label is not recognized.
    unrecognized: HashMap<Column, String>,
}

impl Task {
    /// Builds a task from raw cell text, one lookup per column.
    ///
    /// Unknown labels in choice columns are logged and read as `None`; the
    /// original text is kept for [`Task::field`].
    pub fn from_cells<F>(mut cell: F) -> Self
    where
        F: FnMut(Column) -> String,
    {
        let id = cell(Column::Id);
        let mut unrecognized = HashMap::new();
        let day = choice_cell(&id, Column::Day, cell(Column::Day), &mut unrecognized);
        let priority = choice_cell(&id, Column::Priority, cell(Column::Priority), &mut unrecognized);
        let repeat = choice_cell(&id, Column::Repeat, cell(Column::Repeat), &mut unrecognized);
        Task {
            title: cell(Column::Title),
            description: cell(Column::Description),
            day,
            start_time: cell(Column::StartTime),
            end_time: cell(Column::EndTime),
            priority,
            repeat,
            unrecognized,
            id,
        }
    }

    /// Raw text of a choice cell that did not match any label.
    pub fn unrecognized(&self, column: Column) -> Option<&str> {
        self.unrecognized.get(&column).map(String::as_str)
    }

    /// Text of one column as it is written to the backing file.
    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Id => &self.id,
            Column::Title => &self.title,
            Column::Description => &self.description,
            Column::Day => self.choice_text(column, self.day),
            Column::StartTime => &self.start_time,
            Column::EndTime => &self.end_time,
            Column::Priority => self.choice_text(column, self.priority),
            Column::Repeat => self.choice_text(column, self.repeat),
        }
    }

    fn choice_text<C: Choice>(&self, column: Column, choice: Option<C>) -> &str {
        match choice {
            Some(choice) => choice.label(),
            None => self.unrecognized(column).unwrap_or(""),
        }
    }

    /// All cells in column order.
    pub fn cells(&self) -> [&str; 8] {
        COLUMNS.map(|column| self.field(column))
    }
}

fn choice_cell<C: Choice>(id: &str, column: Column, value: String, unrecognized: &mut HashMap<Column, String>) -> Option<C> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = C::from_label(trimmed).or_else(|| C::parse_choice(trimmed).ok());
    if parsed.is_none() {
        warn!(task_id = %id, column = column.header(), value = %trimmed, "Unrecognized value, keeping it as text");
        unrecognized.insert(column, value);
    }
    parsed
}

/// Attribute values for a task about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
    pub priority: Priority,
    pub repeat: Repeat,
}

impl TaskDraft {
    pub fn into_task(self, id: String) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            day: Some(self.day),
            start_time: self.start_time,
            end_time: self.end_time,
            priority: Some(self.priority),
            repeat: Some(self.repeat),
            unrecognized: HashMap::new(),
        }
    }
}

/// Partial update of a task. `None` leaves the attribute untouched.
///
/// The id is not part of the patch: it never changes after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub day: Option<Weekday>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub priority: Option<Priority>,
    pub repeat: Option<Repeat>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        *self == TaskPatch::default()
    }

    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(day) = self.day {
            task.day = Some(day);
            task.unrecognized.remove(&Column::Day);
        }
        if let Some(start_time) = &self.start_time {
            task.start_time = start_time.clone();
        }
        if let Some(end_time) = &self.end_time {
            task.end_time = end_time.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = Some(priority);
            task.unrecognized.remove(&Column::Priority);
        }
        if let Some(repeat) = self.repeat {
            task.repeat = Some(repeat);
            task.unrecognized.remove(&Column::Repeat);
        }
    }
}
