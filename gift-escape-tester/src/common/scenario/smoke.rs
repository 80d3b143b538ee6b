use anyhow::{Result, ensure};
use gift_escape_game::puzzles::cipher::PLAINTEXT;
use gift_escape_game::puzzles::tools::correct_indices;
use gift_escape_game::{
    CipherPuzzle, HINT_BUDGET, LightsOut, MemoryStorage, NeighborRule, ProgressEvent, PuzzleId,
    Stage, ToolSelection,
};

use super::{Scenario, ScenarioCtx};

/// Intro through reward, solving each chapter the way a player would.
pub struct SmokeScenario;

impl Scenario for SmokeScenario {
    fn name(&self) -> &'static str {
        "Full Playthrough"
    }

    fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let storage = MemoryStorage::default();
        let mut session = ctx.open(storage.clone());
        let progress = session.progress_mut();
        ensure!(progress.stage() == Stage::Intro, "fresh visit should open on the intro");
        ensure!(progress.hints() == HINT_BUDGET, "fresh visit should have a full hint budget");

        progress.begin();
        ctx.trace(format!("began: stage {}", progress.stage()));
        ensure!(progress.stage() == Stage::Tools, "begin should open chapter one");

        let mut selection = ToolSelection::new();
        for index in correct_indices() {
            ensure!(!selection.is_solved(), "partial selection must not solve");
            selection.toggle(index);
        }
        ensure!(selection.is_solved(), "correct tools should spell {}", selection.letters());
        ensure!(progress.complete(PuzzleId::Tools).is_none(), "chapter one is not the last");
        ctx.trace(format!("tools solved with {}", selection.letters()));

        let cipher = CipherPuzzle::default();
        let answer = format!("  {}  ", PLAINTEXT.to_lowercase());
        ensure!(cipher.is_solved(&answer), "padded lowercase answer should decode");
        ensure!(progress.complete(PuzzleId::Cipher).is_none(), "chapter two is not the last");
        ctx.trace(format!("cipher {} decoded", cipher.ciphertext()));

        let mut board = LightsOut::new(NeighborRule::IndexWrap);
        let presses = board
            .solution()
            .ok_or_else(|| anyhow::anyhow!("starting board should be solvable"))?;
        let mut solved = false;
        for index in &presses {
            solved = board.toggle(*index);
        }
        ensure!(solved && board.is_solved(), "solver presses {presses:?} should darken the board");
        ctx.trace(format!("board cleared with presses {presses:?}"));

        let event = progress.complete(PuzzleId::LightsOut);
        ensure!(
            event == Some(ProgressEvent::ReachedReward),
            "final chapter should report the reward"
        );
        ensure!(progress.stage() == Stage::Reward, "should rest on the reward");
        ensure!(progress.advance().is_none(), "advancing past the reward clamps silently");
        ensure!(storage.get("gift.stage").as_deref() == Some("4"), "stage should persist");

        let cfg = session.config();
        ctx.trace(format!("voucher for {} at {}", cfg.name, cfg.location));
        ensure!(!cfg.name.is_empty(), "voucher needs a name");
        Ok(())
    }
}
