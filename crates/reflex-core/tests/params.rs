use reflex_core::{blackboard_key, is_blackboard_pattern, NodeParams};

#[test]
fn literal_values_are_not_patterns() {
    assert!(!is_blackboard_pattern("3"));
    assert!(!is_blackboard_pattern(""));
    assert!(!is_blackboard_pattern("{}"));
    assert!(!is_blackboard_pattern("{unclosed"));
    assert!(!is_blackboard_pattern("closed}"));
    assert!(!is_blackboard_pattern("{a{b}}"));
}

#[test]
fn braced_names_are_patterns() {
    assert!(is_blackboard_pattern("{attempts}"));
    assert_eq!(blackboard_key("{attempts}"), Some("attempts"));
    assert_eq!(blackboard_key("{retry.attempts}"), Some("retry.attempts"));
    assert_eq!(blackboard_key("3"), None);
}

#[test]
fn params_keep_unique_keys_last_write_wins() {
    let params: NodeParams = [("num_attempts", "3"), ("num_attempts", "5")]
        .into_iter()
        .collect();
    assert_eq!(params.len(), 1);
    assert_eq!(params.get("num_attempts"), Some("5"));
}

#[test]
fn builder_and_lookup() {
    let params = NodeParams::new()
        .with("num_attempts", "3")
        .with("goal", "{nav.goal}");

    assert!(params.contains("goal"));
    assert_eq!(params.get("num_attempts"), Some("3"));
    assert_eq!(params.get("missing"), None);
    assert_eq!(params.iter().count(), 2);
}
