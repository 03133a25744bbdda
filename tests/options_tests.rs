use approx::assert_relative_eq;
use force_panel::{NetworkOptions, PhysicsOverrides};
use serde_json::Value;

#[test]
fn default_options_match_the_engine_defaults() {
    let options = NetworkOptions::new();

    assert!(options.physics.enabled);
    let bh = options.physics.barnes_hut;
    assert_relative_eq!(bh.theta, 0.5);
    assert_relative_eq!(bh.gravitational_constant, -2000.0);
    assert_relative_eq!(bh.central_gravity, 0.3);
    assert_relative_eq!(bh.spring_length, 95.0);
    assert_relative_eq!(bh.spring_constant, 0.04);
    assert_relative_eq!(bh.damping, 0.09);
    assert_relative_eq!(bh.avoid_overlap, 0.0);
}

#[test]
fn options_serialize_to_camel_case_wire_format() {
    let json = NetworkOptions::new().to_json().expect("options serialize");
    let value: Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["physics"]["enabled"], Value::Bool(true));
    let bh = &value["physics"]["barnesHut"];
    assert_eq!(bh["gravitationalConstant"], Value::from(-2000.0));
    assert_eq!(bh["centralGravity"], Value::from(0.3));
    assert_eq!(bh["springLength"], Value::from(95.0));
    assert_eq!(bh["springConstant"], Value::from(0.04));
    assert_eq!(bh["avoidOverlap"], Value::from(0.0));
    assert_eq!(bh["theta"], Value::from(0.5));
    assert_eq!(bh["damping"], Value::from(0.09));
}

#[test]
fn partial_wire_documents_fall_back_to_defaults() {
    let options: NetworkOptions =
        serde_json::from_str(r#"{"physics":{"enabled":false}}"#).expect("partial json parses");

    assert!(!options.physics.enabled);
    assert_relative_eq!(options.physics.barnes_hut.spring_length, 95.0);
}

#[test]
fn overrides_replace_only_the_set_fields() {
    let overrides = PhysicsOverrides {
        gravitational_constant: Some(-500.0),
        damping: Some(0.2),
        ..PhysicsOverrides::default()
    };

    let options = NetworkOptions::with_overrides(&overrides);

    assert!(options.physics.enabled, "unset fields keep their default");
    let bh = options.physics.barnes_hut;
    assert_relative_eq!(bh.gravitational_constant, -500.0);
    assert_relative_eq!(bh.damping, 0.2);
    assert_relative_eq!(bh.central_gravity, 0.3);
}
