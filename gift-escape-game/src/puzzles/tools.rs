//! Chapter one: pick exactly the tools needed to smooth and size a plank.
//!
//! The correct tools carry the letters of the password. The selection is
//! solved only when it holds every correct tool and nothing else, and their
//! letters sorted ascending spell [`TARGET_WORD`].
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    pub name: &'static str,
    pub icon: &'static str,
    pub letter: char,
    pub correct: bool,
}

pub const TOOLS: [Tool; 6] = [
    Tool {
        name: "Saw",
        icon: "🪚",
        letter: 'W',
        correct: true,
    },
    Tool {
        name: "Hammer",
        icon: "🔨",
        letter: 'A',
        correct: false,
    },
    Tool {
        name: "Plane",
        icon: "🪵",
        letter: 'O',
        correct: true,
    },
    Tool {
        name: "Ruler",
        icon: "📏",
        letter: 'D',
        correct: true,
    },
    Tool {
        name: "Brush",
        icon: "🖌️",
        letter: 'X',
        correct: false,
    },
    Tool {
        name: "Clamp",
        icon: "🗜️",
        letter: 'Q',
        correct: false,
    },
];

pub const TARGET_WORD: &str = "DOW";

fn is_correct(index: usize) -> bool {
    TOOLS.get(index).is_some_and(|tool| tool.correct)
}

/// Chosen catalog indices. Rebuilt empty every time the chapter is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSelection {
    picked: BTreeSet<usize>,
}

impl ToolSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `index` if unselected, deselect it otherwise. Returns whether
    /// the tool is selected afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.picked.remove(&index) {
            false
        } else {
            self.picked.insert(index);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.picked.contains(&index)
    }

    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.picked.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.picked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    /// Letters of the selected correct tools, sorted ascending.
    #[must_use]
    pub fn letters(&self) -> String {
        let mut letters: Vec<char> = self
            .picked
            .iter()
            .filter(|&&i| is_correct(i))
            .map(|&i| TOOLS[i].letter)
            .collect();
        letters.sort_unstable();
        letters.into_iter().collect()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        let any_wrong = self.picked.iter().any(|&i| !is_correct(i));
        !any_wrong && self.letters() == TARGET_WORD
    }
}

impl FromIterator<usize> for ToolSelection {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self {
            picked: iter.into_iter().collect(),
        }
    }
}

/// Evaluate a selection given as raw indices.
#[must_use]
pub fn evaluate_selection<I: IntoIterator<Item = usize>>(indices: I) -> bool {
    indices.into_iter().collect::<ToolSelection>().is_solved()
}

/// Catalog indices of the correct tools.
pub fn correct_indices() -> impl Iterator<Item = usize> {
    TOOLS
        .iter()
        .enumerate()
        .filter(|(_, tool)| tool.correct)
        .map(|(i, _)| i)
}
