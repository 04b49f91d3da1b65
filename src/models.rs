//! Frontend Models
//!
//! Idea records as served by the list endpoint, and the rows rendered from them.

use serde::{Deserialize, Deserializer};

use crate::config::Strings;
use crate::error::ClientError;

/// Idea record (server-owned)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Idea {
    /// Stable identifier, when the storage side assigns one
    #[serde(default)]
    pub id: Option<u64>,
    pub idea: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub done: bool,
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl Idea {
    /// Date text, or `-` when absent or blank
    pub fn date_label(&self) -> &str {
        match self.date.as_deref() {
            Some(date) if !date.is_empty() => date,
            _ => "-",
        }
    }

    pub fn marker(&self) -> char {
        if self.done { '✓' } else { 'x' }
    }

    /// `"{idea} [{date}] ({marker})"`
    pub fn label(&self) -> String {
        format!("{} [{}] ({})", self.idea, self.date_label(), self.marker())
    }
}

/// How the done endpoint addresses an idea.
///
/// Index keys are positional and only hold until the next mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeaKey {
    Id(u64),
    Index(usize),
}

impl IdeaKey {
    pub fn for_idea(index: usize, idea: &Idea) -> Self {
        idea.id.map(IdeaKey::Id).unwrap_or(IdeaKey::Index(index))
    }

    /// Hidden form field name and value
    pub fn form_field(self) -> (&'static str, String) {
        match self {
            IdeaKey::Id(id) => ("id", id.to_string()),
            IdeaKey::Index(idx) => ("idx", idx.to_string()),
        }
    }
}

/// State of the list area, recomputed on every load
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListPane {
    #[default]
    Loading,
    Populated(Vec<Idea>),
    Empty,
    Failed,
}

impl ListPane {
    pub fn from_load(result: Result<Vec<Idea>, ClientError>) -> Self {
        match result {
            Ok(ideas) if ideas.is_empty() => ListPane::Empty,
            Ok(ideas) => ListPane::Populated(ideas),
            Err(_) => ListPane::Failed,
        }
    }

    pub fn rows(&self, strings: &'static Strings) -> Vec<Row> {
        match self {
            ListPane::Loading => Vec::new(),
            ListPane::Empty => vec![Row::Placeholder(strings.no_ideas)],
            ListPane::Failed => vec![Row::Placeholder(strings.load_failed)],
            ListPane::Populated(ideas) => ideas
                .iter()
                .enumerate()
                .map(|(index, idea)| Row::Entry(IdeaRowData::new(index, idea)))
                .collect(),
        }
    }
}

/// One rendered list entry
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// Message-only row without controls
    Placeholder(&'static str),
    Entry(IdeaRowData),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdeaRowData {
    pub key: IdeaKey,
    pub label: String,
    pub done: bool,
}

impl IdeaRowData {
    pub fn new(index: usize, idea: &Idea) -> Self {
        Self {
            key: IdeaKey::for_idea(index, idea),
            label: idea.label(),
            done: idea.done,
        }
    }

    /// The mark-done control is disabled once the idea is done
    pub fn can_mark_done(&self) -> bool {
        !self.done
    }
}
