//! Focused checks, one concern each. Every entry runs against a fresh
//! in-memory store.
use anyhow::{Result, bail, ensure};
use gift_escape_game::puzzles::cipher::{PLAINTEXT, SHIFT};
use gift_escape_game::puzzles::lights_out::INITIAL_PATTERN;
use gift_escape_game::puzzles::tools::{TARGET_WORD, evaluate_selection};
use gift_escape_game::{
    CipherPuzzle, ConfigKey, HINT_BUDGET, HINTS_KEY, Hint, LightsOut, MemoryStorage,
    NeighborRule, ProgressController, PuzzleId, STAGE_KEY, Stage, TOOLS, ToolSelection,
    caesar_shift,
};

use super::{Scenario, ScenarioCtx};

#[derive(Clone, Copy)]
pub struct CatalogScenario {
    name: &'static str,
    check: fn(&ScenarioCtx) -> Result<()>,
}

impl Scenario for CatalogScenario {
    fn name(&self) -> &'static str {
        self.name
    }

    fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        (self.check)(ctx)
    }
}

const CATALOG: &[CatalogScenario] = &[
    CatalogScenario {
        name: "Hint Budget Exhaustion",
        check: hint_budget,
    },
    CatalogScenario {
        name: "Reload Persistence",
        check: reload_persistence,
    },
    CatalogScenario {
        name: "Malformed Storage Recovery",
        check: malformed_storage,
    },
    CatalogScenario {
        name: "Stale Solve Ignored",
        check: stale_solve,
    },
    CatalogScenario {
        name: "Tools Selection",
        check: tools_selection,
    },
    CatalogScenario {
        name: "Cipher Decode",
        check: cipher_decode,
    },
    CatalogScenario {
        name: "Lights Out Solver",
        check: lights_out_solver,
    },
    CatalogScenario {
        name: "Personalization Overrides",
        check: personalization,
    },
];

pub fn find_catalog_scenario(name: &str) -> Option<CatalogScenario> {
    CATALOG.iter().find(|scenario| scenario.name == name).copied()
}

fn hint_budget(ctx: &ScenarioCtx) -> Result<()> {
    let mut progress = ProgressController::new(MemoryStorage::default());
    ensure!(
        progress.consume_hint() == Some(Hint::NoneNeeded),
        "intro hint should say none is needed"
    );
    progress.begin();
    for expected in (0..HINT_BUDGET - 1).rev() {
        let hint = progress.consume_hint();
        ctx.trace(format!("hint {hint:?}, {} left", progress.hints()));
        ensure!(hint == Some(Hint::Tools), "chapter one hint should be the tools hint");
        ensure!(progress.hints() == expected, "budget should drop to {expected}");
    }
    ensure!(progress.consume_hint().is_none(), "empty budget yields nothing");
    ensure!(progress.hints() == 0, "budget never goes negative");
    progress.reset();
    ensure!(progress.hints() == HINT_BUDGET, "reset restores the budget");
    Ok(())
}

fn reload_persistence(ctx: &ScenarioCtx) -> Result<()> {
    let storage = MemoryStorage::default();
    let mut first = ProgressController::new(storage.clone());
    first.begin();
    first.complete(PuzzleId::Tools);
    first.consume_hint();
    ctx.trace(format!(
        "stored stage={:?} hints={:?}",
        storage.get(STAGE_KEY),
        storage.get(HINTS_KEY)
    ));

    let reloaded = ProgressController::new(storage.clone());
    ensure!(reloaded.state() == first.state(), "reload should restore the same state");
    ensure!(reloaded.stage() == Stage::Cipher, "reload should resume at chapter two");

    let mut at_reward = ProgressController::new(storage.clone());
    at_reward.complete(PuzzleId::Cipher);
    if at_reward.complete(PuzzleId::LightsOut).is_none() {
        bail!("finishing the last chapter should report the reward");
    }
    let revisit = ProgressController::new(storage.clone());
    ensure!(revisit.stage() == Stage::Reward, "reward survives reload");

    let mut cleared = revisit;
    cleared.reset();
    ensure!(storage.is_empty(), "reset removes both entries");
    Ok(())
}

fn malformed_storage(ctx: &ScenarioCtx) -> Result<()> {
    let cases: [(&str, &str, Stage, u8); 5] = [
        ("banana", "2", Stage::Intro, 2),
        ("2", "lots", Stage::Cipher, HINT_BUDGET),
        ("9", "7", Stage::Intro, HINT_BUDGET),
        ("-1", "-1", Stage::Intro, HINT_BUDGET),
        (" 3 ", "0", Stage::LightsOut, 0),
    ];
    for (stage, hints, want_stage, want_hints) in cases {
        let storage = MemoryStorage::default();
        storage.insert(STAGE_KEY, stage);
        storage.insert(HINTS_KEY, hints);
        let progress = ProgressController::new(storage);
        ctx.trace(format!(
            "stored ({stage:?}, {hints:?}) -> ({}, {})",
            progress.stage(),
            progress.hints()
        ));
        ensure!(
            progress.stage() == want_stage && progress.hints() == want_hints,
            "({stage:?}, {hints:?}) should recover to ({want_stage}, {want_hints})"
        );
    }
    Ok(())
}

fn stale_solve(ctx: &ScenarioCtx) -> Result<()> {
    let mut progress = ProgressController::new(MemoryStorage::default());
    ensure!(progress.complete(PuzzleId::Tools).is_none(), "no solve before begin");
    ensure!(progress.stage() == Stage::Intro, "intro ignores puzzle solves");
    progress.begin();
    progress.complete(PuzzleId::Tools);
    progress.complete(PuzzleId::Tools);
    ctx.trace(format!("double tools solve left stage at {}", progress.stage()));
    ensure!(progress.stage() == Stage::Cipher, "a repeated solve must not skip a chapter");
    ensure!(
        progress.complete(PuzzleId::LightsOut).is_none(),
        "a future chapter cannot be solved early"
    );
    ensure!(progress.stage() == Stage::Cipher, "stage unchanged by out-of-order solve");
    Ok(())
}

fn tools_selection(ctx: &ScenarioCtx) -> Result<()> {
    ensure!(evaluate_selection([0, 2, 3]), "Saw, Plane and Ruler should solve");
    ensure!(evaluate_selection([3, 0, 2]), "selection order does not matter");
    ensure!(!evaluate_selection([0, 2, 3, 1]), "any wrong tool blocks the solve");
    ensure!(!evaluate_selection([0, 2]), "a missing tool blocks the solve");
    ensure!(!ToolSelection::new().is_solved(), "empty selection is unsolved");

    let mut selection: ToolSelection = [0, 2, 3, 5].into_iter().collect();
    ensure!(!selection.is_solved(), "clamp is a distractor");
    selection.toggle(5);
    ensure!(selection.letters() == TARGET_WORD, "letters should spell {TARGET_WORD}");
    ensure!(selection.is_solved(), "deselecting the distractor solves");

    let solving_subsets = (0_u32..1 << TOOLS.len())
        .filter(|mask| evaluate_selection((0..TOOLS.len()).filter(|i| mask & (1 << i) != 0)))
        .count();
    ctx.trace(format!("{solving_subsets} of 64 subsets solve"));
    ensure!(solving_subsets == 1, "exactly one subset solves, found {solving_subsets}");
    Ok(())
}

fn cipher_decode(ctx: &ScenarioCtx) -> Result<()> {
    let puzzle = CipherPuzzle::default();
    let ciphertext = puzzle.ciphertext();
    ctx.trace(format!("{PLAINTEXT} shifted by {SHIFT} is {ciphertext}"));
    ensure!(ciphertext == "ROVVY GYBVN", "unexpected ciphertext {ciphertext}");
    ensure!(
        caesar_shift(&ciphertext, -SHIFT) == PLAINTEXT,
        "shifting back should recover the plaintext"
    );
    ensure!(puzzle.is_solved("hello world"), "answers are case-insensitive");
    ensure!(puzzle.is_solved("\tHELLO WORLD \n"), "answers are trimmed");
    ensure!(!puzzle.is_solved("HELLOWORLD"), "inner spacing matters");
    ensure!(!puzzle.is_solved(&ciphertext), "the ciphertext is not the answer");
    Ok(())
}

fn lights_out_solver(ctx: &ScenarioCtx) -> Result<()> {
    for rule in [NeighborRule::IndexWrap, NeighborRule::Orthogonal] {
        let mut board = LightsOut::with_cells(INITIAL_PATTERN, rule);
        let presses = board
            .solution()
            .ok_or_else(|| anyhow::anyhow!("{rule:?} board should be solvable"))?;
        ctx.trace(format!("{rule:?}: {} presses {presses:?}", presses.len()));
        let mut solved = false;
        for press in &presses {
            ensure!(!board.is_solved(), "{rule:?} solved before the last press");
            solved = board.toggle(*press);
        }
        ensure!(solved, "{rule:?} solution should darken the board");
    }
    let wrap = LightsOut::new(NeighborRule::IndexWrap).solution();
    ensure!(
        wrap.as_deref() == Some(&[2, 3, 4, 5, 6][..]),
        "index-wrap shortest solution changed: {wrap:?}"
    );
    let mut board = LightsOut::default();
    ensure!(!board.toggle(42), "out-of-range press is ignored");
    ensure!(board.cells() == &INITIAL_PATTERN, "ignored press leaves the board intact");
    Ok(())
}

fn personalization(ctx: &ScenarioCtx) -> Result<()> {
    let session = ctx.open(MemoryStorage::default());
    let cfg = session.config();
    for key in ConfigKey::ALL {
        let expected = ctx
            .overrides
            .get(key.as_str())
            .filter(|value| !value.is_empty())
            .map_or(key.default_value(), String::as_str);
        ctx.trace(format!("{key} = {}", cfg.field(key)));
        ensure!(cfg.field(key) == expected, "{key} resolved to {:?}", cfg.field(key));
    }
    Ok(())
}
