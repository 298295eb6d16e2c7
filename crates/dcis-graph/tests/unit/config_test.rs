//! Unit tests for codec configuration.

use dcis_graph::{CodecConfig, Graph, GraphError};

#[test]
fn test_builder_methods() {
    let config = CodecConfig::default()
        .with_pretty(false)
        .with_strict_edges(true);

    assert!(!config.pretty);
    assert!(config.strict_edges);
}

#[test]
fn test_config_from_json_partial() {
    let config = CodecConfig::from_json(r#"{"strict_edges": true}"#).unwrap();

    assert!(config.strict_edges);
    assert!(config.pretty);
}

#[test]
fn test_config_from_json_round_trip() {
    let config = CodecConfig::compact().with_strict_edges(true);
    let text = serde_json::to_string(&config).unwrap();

    assert_eq!(CodecConfig::from_json(&text).unwrap(), config);
}

#[test]
fn test_config_from_invalid_json() {
    let result = CodecConfig::from_json(r#"{"pretty": "yes"}"#);
    assert!(matches!(result, Err(GraphError::Serialization { .. })));
}

#[test]
fn test_pretty_flag_controls_output() {
    let mut graph = Graph::undirected();
    graph.add_node("a0");

    let pretty = graph.to_json_with(&CodecConfig::default()).unwrap();
    let compact = graph.to_json_with(&CodecConfig::compact()).unwrap();

    assert!(pretty.contains('\n'));
    assert!(!compact.contains('\n'));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&pretty).unwrap(),
        serde_json::from_str::<serde_json::Value>(&compact).unwrap()
    );
}
