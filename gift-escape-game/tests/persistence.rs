use gift_escape_game::{
    HINTS_KEY, MemoryStorage, ProgressController, ProgressState, ProgressStorage, STAGE_KEY, Stage,
};

#[derive(Debug, thiserror::Error)]
#[error("storage offline")]
struct Offline;

/// A store whose every operation fails, like a browser with storage disabled.
#[derive(Debug, Clone, Copy, Default)]
struct OfflineStorage;

impl ProgressStorage for OfflineStorage {
    type Error = Offline;

    fn read_entry(&self, _key: &str) -> Result<Option<String>, Self::Error> {
        Err(Offline)
    }

    fn write_entry(&self, _key: &str, _value: &str) -> Result<(), Self::Error> {
        Err(Offline)
    }

    fn remove_entry(&self, _key: &str) -> Result<(), Self::Error> {
        Err(Offline)
    }
}

#[test]
fn reload_reproduces_stage_and_hints() {
    let storage = MemoryStorage::default();
    let mut first = ProgressController::new(storage.clone());
    first.begin();
    first.advance();
    first.consume_hint();
    let before = first.state();

    let reloaded = ProgressController::new(storage);
    assert_eq!(reloaded.state(), before);
    assert_eq!(
        before,
        ProgressState {
            stage: Stage::Cipher,
            hints: 2
        }
    );
}

#[test]
fn reload_at_reward_emits_nothing() {
    let storage = MemoryStorage::default();
    let mut first = ProgressController::new(storage.clone());
    let events: Vec<_> = (0..4).filter_map(|_| first.advance()).collect();
    assert_eq!(events.len(), 1);

    let mut reloaded = ProgressController::new(storage);
    assert_eq!(reloaded.stage(), Stage::Reward);
    assert_eq!(reloaded.advance(), None);
}

#[test]
fn malformed_entries_do_not_crash_construction() {
    let storage = MemoryStorage::default();
    storage.insert(STAGE_KEY, "not-a-number");
    storage.insert(HINTS_KEY, "three");
    let controller = ProgressController::new(storage);
    assert_eq!(controller.state(), ProgressState::default());
}

#[test]
fn reset_then_reload_yields_defaults() {
    let storage = MemoryStorage::default();
    let mut controller = ProgressController::new(storage.clone());
    controller.begin();
    controller.consume_hint();
    controller.reset();
    assert!(storage.is_empty());
    assert_eq!(
        ProgressController::new(storage).state(),
        ProgressState::default()
    );
}

#[test]
fn failing_store_degrades_to_in_memory_progress() {
    let mut controller = ProgressController::new(OfflineStorage);
    assert_eq!(controller.state(), ProgressState::default());
    controller.begin();
    assert!(controller.consume_hint().is_some());
    assert_eq!(controller.stage(), Stage::Tools);
    assert_eq!(controller.hints(), 2);
    controller.reset();
    assert_eq!(controller.state(), ProgressState::default());
}
