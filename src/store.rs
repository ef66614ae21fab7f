use crate::catalog::MoodCategory;
use crate::models::{MoodEntry, TodoItem};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("todo index {index} is out of range (list has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("todo task must not be empty")]
    EmptyTask,
}

/// Everything one session owns. Callers hold this value and pass it into
/// the store and statistics functions; nothing here is global.
///
/// The store does not range-check intensity, note length or slider values;
/// that happens at the HTTP boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub mood_entries: Vec<MoodEntry>,
    pub todos: Vec<TodoItem>,
    #[serde(default)]
    pub daily_goal: String,
    #[serde(default)]
    pub hydration_glasses: u8,
    #[serde(default)]
    pub sleep_hours: u8,
}

impl SessionData {
    pub fn add_mood_entry(
        &mut self,
        mood: &MoodCategory,
        intensity: u8,
        note: Option<String>,
    ) -> MoodEntry {
        self.add_mood_entry_on(Local::now().date_naive(), mood, intensity, note)
    }

    pub fn add_mood_entry_on(
        &mut self,
        date: NaiveDate,
        mood: &MoodCategory,
        intensity: u8,
        note: Option<String>,
    ) -> MoodEntry {
        let entry = MoodEntry {
            date,
            mood: mood.name.clone(),
            intensity,
            note: note.filter(|text| !text.trim().is_empty()),
            emoji: mood.emoji.clone(),
        };
        self.mood_entries.push(entry.clone());
        entry
    }

    pub fn add_todo(&mut self, task: impl Into<String>) -> Result<TodoItem, StoreError> {
        let task = task.into();
        if task.trim().is_empty() {
            return Err(StoreError::EmptyTask);
        }

        let item = TodoItem {
            task,
            completed: false,
        };
        self.todos.push(item.clone());
        Ok(item)
    }

    pub fn toggle_todo(&mut self, index: usize, completed: bool) -> Result<TodoItem, StoreError> {
        let len = self.todos.len();
        let item = self
            .todos
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        item.completed = completed;
        Ok(item.clone())
    }

    /// Later items shift down by one, so indices held before the call are stale.
    pub fn remove_todo(&mut self, index: usize) -> Result<TodoItem, StoreError> {
        if index >= self.todos.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.todos.len(),
            });
        }
        Ok(self.todos.remove(index))
    }

    pub fn set_daily_goal(&mut self, goal: impl Into<String>) {
        self.daily_goal = goal.into();
    }

    pub fn set_hydration(&mut self, glasses: u8) {
        self.hydration_glasses = glasses;
    }

    pub fn set_sleep(&mut self, hours: u8) {
        self.sleep_hours = hours;
    }
}
