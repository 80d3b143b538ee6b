use anyhow::Result;
use colored::Colorize;
use gift_escape_game::{GiftSession, MemoryStorage};
use std::collections::BTreeMap;

pub mod catalog;
pub mod random_walk;
pub mod smoke;

use catalog::find_catalog_scenario;

/// Inputs shared by every scenario run.
#[derive(Debug, Clone, Default)]
pub struct ScenarioCtx {
    pub seed: u64,
    pub overrides: BTreeMap<String, String>,
    pub verbose: bool,
}

impl ScenarioCtx {
    /// Per-step trace, printed only with `--verbose`.
    pub fn trace(&self, message: impl AsRef<str>) {
        let message = message.as_ref();
        log::debug!("{message}");
        if self.verbose {
            println!("   {} {message}", "›".dimmed());
        }
    }

    /// A fresh visit against `storage` with this run's overrides.
    pub fn open(&self, storage: MemoryStorage) -> GiftSession<MemoryStorage> {
        GiftSession::open(storage, &self.overrides)
    }
}

pub trait Scenario {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &ScenarioCtx) -> Result<()>;
}

pub fn get_scenario(name: &str) -> Option<Box<dyn Scenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "random-walk" | "random" => Some(Box::new(random_walk::RandomWalkScenario::default())),
        "hint-budget" | "hints" => {
            find_catalog_scenario("Hint Budget Exhaustion").map(|scenario| Box::new(scenario) as _)
        }
        "reload-persistence" | "reload" => {
            find_catalog_scenario("Reload Persistence").map(|scenario| Box::new(scenario) as _)
        }
        "malformed-storage" | "malformed" => {
            find_catalog_scenario("Malformed Storage Recovery")
                .map(|scenario| Box::new(scenario) as _)
        }
        "stale-solve" | "stale" => {
            find_catalog_scenario("Stale Solve Ignored").map(|scenario| Box::new(scenario) as _)
        }
        "tools-selection" | "tools" => {
            find_catalog_scenario("Tools Selection").map(|scenario| Box::new(scenario) as _)
        }
        "cipher-decode" | "cipher" => {
            find_catalog_scenario("Cipher Decode").map(|scenario| Box::new(scenario) as _)
        }
        "lights-out-solver" | "lights-out" => {
            find_catalog_scenario("Lights Out Solver").map(|scenario| Box::new(scenario) as _)
        }
        "personalization" | "config" => {
            find_catalog_scenario("Personalization Overrides")
                .map(|scenario| Box::new(scenario) as _)
        }
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Full Playthrough"),
        ("random-walk", "Seeded Random Walk"),
        ("hint-budget", "Hint Budget Exhaustion"),
        ("reload-persistence", "Reload Persistence"),
        ("malformed-storage", "Malformed Storage Recovery"),
        ("stale-solve", "Stale Solve Ignored"),
        ("tools-selection", "Tools Selection"),
        ("cipher-decode", "Cipher Decode"),
        ("lights-out-solver", "Lights Out Solver"),
        ("personalization", "Personalization Overrides"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves_and_passes() {
        let ctx = ScenarioCtx {
            seed: 1337,
            ..ScenarioCtx::default()
        };
        for (key, label) in list_scenarios() {
            let scenario = get_scenario(key).unwrap_or_else(|| panic!("{key} should resolve"));
            assert_eq!(scenario.name(), label);
            scenario
                .run(&ctx)
                .unwrap_or_else(|err| panic!("{key} failed: {err:#}"));
        }
    }

    #[test]
    fn aliases_and_case_are_accepted() {
        assert!(get_scenario("SMOKE").is_some());
        assert!(get_scenario("hints").is_some());
        assert!(get_scenario("lights-out").is_some());
        assert!(get_scenario("unknown").is_none());
    }
}
