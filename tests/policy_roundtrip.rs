//! Policy persistence round-trip tests.

use tempfile::TempDir;
use twentyone::{
    Action, MonteCarloAgent, SavedPolicy, Step, Table, TrainingConfig, TrainingMetadata,
    TrainingPipeline,
};

#[test]
fn trained_policy_roundtrips_through_disk() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("policy.json");

    let mut agent = MonteCarloAgent::new(0.2);
    let mut table = Table::default();
    let mut pipeline = TrainingPipeline::new(TrainingConfig {
        episodes: 500,
        seed: Some(33),
    });
    pipeline
        .run(&mut agent, &mut table)
        .expect("training should succeed");

    let metadata = TrainingMetadata {
        episodes_trained: Some(500),
        target: Some(table.target()),
        seed: Some(33),
    };
    let saved = SavedPolicy::from_agent(&agent, metadata);
    saved
        .save_to_file(&file_path)
        .expect("saving policy should succeed");

    let loaded = SavedPolicy::load_from_file(&file_path).expect("loading policy should succeed");
    let restored = loaded.to_agent().expect("restoring agent should succeed");

    assert!(!agent.value_table().is_empty());
    assert_eq!(restored.value_table().len(), agent.value_table().len());
    for state in agent.value_table().states() {
        for action in Action::ALL {
            assert_eq!(
                restored.value_table().value(state, action),
                agent.value_table().value(state, action),
                "value mismatch at state {state} action {action}"
            );
            assert_eq!(
                restored.value_table().visits(state, action),
                agent.value_table().visits(state, action),
                "visit mismatch at state {state} action {action}"
            );
        }
    }
    assert_eq!(restored.exploration(), agent.exploration());
    assert_eq!(loaded.metadata.episodes_trained, Some(500));
    assert_eq!(loaded.metadata.seed, Some(33));
}

#[test]
fn reloaded_agent_continues_the_same_averaging_stream() {
    let mut agent = MonteCarloAgent::new(0.2).with_seed(3);
    agent.update_policy(&[Step {
        state: 17,
        action: Action::Stand,
        reward: 1.0,
    }]);

    let saved = SavedPolicy::from_agent(&agent, TrainingMetadata::default());
    let mut restored = saved.to_agent().expect("restoring agent should succeed");

    // A second sample averaged into the reloaded table must see the
    // original visit count, not a fresh one.
    restored.update_policy(&[Step {
        state: 17,
        action: Action::Stand,
        reward: -1.0,
    }]);
    assert_eq!(restored.value_table().visits(17, Action::Stand), 2);
    assert_eq!(restored.value_table().value(17, Action::Stand), 0.0);
}

#[test]
fn missing_policy_file_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("does_not_exist.json");
    assert!(SavedPolicy::load_from_file(&missing).is_err());
}

#[test]
fn malformed_policy_file_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("garbage.json");
    std::fs::write(&file_path, "not a policy").expect("writing fixture should succeed");
    assert!(SavedPolicy::load_from_file(&file_path).is_err());
}
