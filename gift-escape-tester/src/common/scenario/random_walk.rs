use anyhow::{Result, ensure};
use gift_escape_game::{
    HINT_BUDGET, HINTS_KEY, MemoryStorage, ProgressController, ProgressEvent, ProgressState,
    PuzzleId, STAGE_KEY, Stage,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Scenario, ScenarioCtx};

/// Player actions the walk draws from.
#[derive(Debug, Clone, Copy)]
enum Action {
    Begin,
    Solve(PuzzleId),
    Hint,
    Reset,
    Reload,
}

fn draw(rng: &mut ChaCha8Rng) -> Action {
    match rng.gen_range(0..10) {
        0 => Action::Begin,
        1..=5 => Action::Solve(PuzzleId::ALL[rng.gen_range(0..PuzzleId::ALL.len())]),
        6 | 7 => Action::Hint,
        8 => Action::Reset,
        _ => Action::Reload,
    }
}

/// Seeded sequence of arbitrary actions, checking the controller's
/// invariants after every step.
pub struct RandomWalkScenario {
    steps: usize,
}

impl Default for RandomWalkScenario {
    fn default() -> Self {
        Self { steps: 250 }
    }
}

fn check_persisted(storage: &MemoryStorage, state: ProgressState) -> Result<()> {
    let stage = storage.get(STAGE_KEY);
    let hints = storage.get(HINTS_KEY);
    if stage.is_none() && hints.is_none() {
        ensure!(
            state == ProgressState::default(),
            "empty storage only after reset, state is {state:?}"
        );
        return Ok(());
    }
    ensure!(
        ProgressState::from_entries(stage.as_deref(), hints.as_deref()) == state,
        "stored ({stage:?}, {hints:?}) diverged from {state:?}"
    );
    Ok(())
}

impl Scenario for RandomWalkScenario {
    fn name(&self) -> &'static str {
        "Seeded Random Walk"
    }

    fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let mut rng = ChaCha8Rng::seed_from_u64(ctx.seed);
        let storage = MemoryStorage::default();
        let mut progress = ProgressController::new(storage.clone());
        let mut rewards = 0_usize;

        for step in 0..self.steps {
            let action = draw(&mut rng);
            let before = progress.stage();
            let event = match action {
                Action::Begin => {
                    progress.begin();
                    None
                }
                Action::Solve(puzzle) => progress.complete(puzzle),
                Action::Hint => {
                    let had = progress.hints();
                    let hint = progress.consume_hint();
                    ensure!(
                        hint.is_some() == (had > 0),
                        "step {step}: hint availability mismatched budget {had}"
                    );
                    None
                }
                Action::Reset => {
                    progress.reset();
                    None
                }
                Action::Reload => {
                    let reloaded = ProgressController::new(storage.clone());
                    ensure!(
                        reloaded.state() == progress.state(),
                        "step {step}: reload produced {:?}",
                        reloaded.state()
                    );
                    progress = reloaded;
                    None
                }
            };
            let after = progress.stage();
            ctx.trace(format!("step {step}: {action:?} {before} -> {after}"));

            ensure!(progress.hints() <= HINT_BUDGET, "step {step}: hints over budget");
            let reached = event == Some(ProgressEvent::ReachedReward);
            ensure!(
                reached == (before == Stage::LightsOut && after == Stage::Reward),
                "step {step}: reward event must fire exactly on the final transition"
            );
            if let Action::Solve(puzzle) = action {
                let expected = if before.puzzle() == Some(puzzle) {
                    before.next().unwrap_or(before)
                } else {
                    before
                };
                ensure!(after == expected, "step {step}: {puzzle:?} moved {before} to {after}");
            }
            rewards += usize::from(reached);
            check_persisted(&storage, progress.state())?;
        }
        ctx.trace(format!("{rewards} rewards reached in {} steps", self.steps));
        Ok(())
    }
}
