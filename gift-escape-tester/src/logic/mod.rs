pub mod reports;
pub mod tester;

pub use tester::{ScenarioResult, ScenarioRunner};
