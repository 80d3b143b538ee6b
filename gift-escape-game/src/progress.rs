//! Stage counter and hint budget, persisted through a [`ProgressStorage`].
//!
//! The controller is the only writer of [`ProgressState`]. Every mutation is
//! followed by a synchronous write so a reload always sees the last action.
use crate::ProgressStorage;
use crate::puzzles::PuzzleId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const STAGE_KEY: &str = "gift.stage";
pub const HINTS_KEY: &str = "gift.hints";
pub const HINT_BUDGET: u8 = 3;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Intro,
    Tools,
    Cipher,
    LightsOut,
    Reward,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StageError {
    #[error("stage value {0:?} is not a number")]
    NotNumeric(String),
    #[error("stage {0} is outside 0..=4")]
    OutOfRange(u8),
}

impl Stage {
    pub const ALL: [Self; 5] = [
        Self::Intro,
        Self::Tools,
        Self::Cipher,
        Self::LightsOut,
        Self::Reward,
    ];

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Intro => Some(Self::Tools),
            Self::Tools => Some(Self::Cipher),
            Self::Cipher => Some(Self::LightsOut),
            Self::LightsOut => Some(Self::Reward),
            Self::Reward => None,
        }
    }

    /// Puzzle on screen during this stage.
    #[must_use]
    pub const fn puzzle(self) -> Option<PuzzleId> {
        match self {
            Self::Tools => Some(PuzzleId::Tools),
            Self::Cipher => Some(PuzzleId::Cipher),
            Self::LightsOut => Some(PuzzleId::LightsOut),
            Self::Intro | Self::Reward => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Reward)
    }

    #[must_use]
    pub const fn is_puzzle(self) -> bool {
        self.puzzle().is_some()
    }
}

impl TryFrom<u8> for Stage {
    type Error = StageError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(StageError::OutOfRange(value))
    }
}

impl FromStr for Stage {
    type Err = StageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| StageError::NotNumeric(s.to_string()))?;
        Self::try_from(value)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// A hint revealed by spending one unit of the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hint {
    Tools,
    Cipher,
    Grid,
    NoneNeeded,
}

impl Hint {
    #[must_use]
    pub const fn for_stage(stage: Stage) -> Self {
        match stage {
            Stage::Tools => Self::Tools,
            Stage::Cipher => Self::Cipher,
            Stage::LightsOut => Self::Grid,
            Stage::Intro | Stage::Reward => Self::NoneNeeded,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Tools => "hint.tools",
            Self::Cipher => "hint.cipher",
            Self::Grid => "hint.grid",
            Self::NoneNeeded => "hint.none",
        }
    }

    /// English text, used when no translation is available.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Tools => "Pick: Saw, Plane, Ruler. Sort letters alphabetically.",
            Self::Cipher => "It’s Caesar. Shift each letter back by 10.",
            Self::Grid => "Lights Out: Try solving rows top to bottom.",
            Self::NoneNeeded => "No hint needed here!",
        }
    }
}

/// Edge-triggered notifications produced by controller transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressEvent {
    /// The final puzzle was just solved. Produced once per genuine
    /// `LightsOut -> Reward` transition, never by a reload at `Reward`.
    ReachedReward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    pub stage: Stage,
    pub hints: u8,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            stage: Stage::Intro,
            hints: HINT_BUDGET,
        }
    }
}

impl ProgressState {
    /// Rebuild from stored entries. Each field falls back to its default on
    /// its own when absent, non-numeric or out of range.
    #[must_use]
    pub fn from_entries(stage: Option<&str>, hints: Option<&str>) -> Self {
        let defaults = Self::default();
        let stage = match stage.map(str::parse::<Stage>) {
            Some(Ok(stage)) => stage,
            Some(Err(err)) => {
                log::warn!("ignoring stored stage: {err}");
                defaults.stage
            }
            None => defaults.stage,
        };
        let hints = match hints.map(|raw| raw.trim().parse::<u8>()) {
            Some(Ok(hints)) if hints <= HINT_BUDGET => hints,
            Some(_) => {
                log::warn!("ignoring stored hint count {hints:?}");
                defaults.hints
            }
            None => defaults.hints,
        };
        Self { stage, hints }
    }

    #[must_use]
    pub fn stage_entry(&self) -> String {
        self.stage.index().to_string()
    }

    #[must_use]
    pub fn hints_entry(&self) -> String {
        self.hints.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct ProgressController<S>
where
    S: ProgressStorage,
{
    state: ProgressState,
    storage: S,
}

impl<S> ProgressController<S>
where
    S: ProgressStorage,
{
    /// Read persisted progress from `storage`. Never fails: unreadable or
    /// malformed entries yield the default state.
    pub fn new(storage: S) -> Self {
        let state = load_progress(&storage);
        log::debug!("progress loaded: stage {} hints {}", state.stage, state.hints);
        Self { state, storage }
    }

    #[must_use]
    pub const fn state(&self) -> ProgressState {
        self.state
    }

    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.state.stage
    }

    #[must_use]
    pub const fn hints(&self) -> u8 {
        self.state.hints
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Leave the intro. Does nothing from any other stage.
    pub fn begin(&mut self) {
        if self.state.stage == Stage::Intro {
            self.advance();
        }
    }

    /// Move one stage forward, clamping at [`Stage::Reward`].
    pub fn advance(&mut self) -> Option<ProgressEvent> {
        let from = self.state.stage;
        let to = from.next()?;
        self.state.stage = to;
        self.persist();
        log::debug!("stage {from} -> {to}");
        if to.is_terminal() {
            log::info!("all puzzles solved");
            Some(ProgressEvent::ReachedReward)
        } else {
            None
        }
    }

    /// Advance only if `puzzle` is the one on screen. A solved signal from a
    /// puzzle that is no longer current is ignored.
    pub fn complete(&mut self, puzzle: PuzzleId) -> Option<ProgressEvent> {
        if self.state.stage.puzzle() == Some(puzzle) {
            self.advance()
        } else {
            log::debug!("ignoring stale solve of {puzzle:?} at stage {}", self.state.stage);
            None
        }
    }

    /// Spend one hint. `None` when the budget is exhausted.
    pub fn consume_hint(&mut self) -> Option<Hint> {
        if self.state.hints == 0 {
            return None;
        }
        self.state.hints -= 1;
        self.persist();
        Some(Hint::for_stage(self.state.stage))
    }

    /// Back to the intro with a full hint budget. Stored entries are removed.
    pub fn reset(&mut self) {
        self.state = ProgressState::default();
        for key in [STAGE_KEY, HINTS_KEY] {
            if let Err(err) = self.storage.remove_entry(key) {
                log::warn!("failed to clear {key}: {err}");
            }
        }
    }

    fn persist(&self) {
        save_progress(&self.storage, &self.state);
    }
}

/// Read `{stage, hints}` from storage, falling back to defaults.
pub fn load_progress<S: ProgressStorage + ?Sized>(storage: &S) -> ProgressState {
    let read = |key: &str| match storage.read_entry(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("failed to read {key}: {err}");
            None
        }
    };
    let stage = read(STAGE_KEY);
    let hints = read(HINTS_KEY);
    ProgressState::from_entries(stage.as_deref(), hints.as_deref())
}

/// Write both entries. Failures are logged; the caller's state stays
/// authoritative for the session.
pub fn save_progress<S: ProgressStorage + ?Sized>(storage: &S, state: &ProgressState) {
    for (key, value) in [
        (STAGE_KEY, state.stage_entry()),
        (HINTS_KEY, state.hints_entry()),
    ] {
        if let Err(err) = storage.write_entry(key, &value) {
            log::warn!("failed to write {key}: {err}");
        }
    }
}
