//! Trace queries through the session: mode rule, empty results, valid
//! configurations against a reference, axis changes.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::json;

use benchplot::{AxisPair, AxisSelection, Command, Datum, Error, Filters, Status, TraceMode};

use crate::common::*;

#[test]
fn test_mode_follows_device_count() {
    let env = imported_env();
    let session = env.bp.session();
    let axes = AxisPair::new(COST, THROUGHPUT);

    let sweep = session
        .plot(&axes, &filters("W1", "d1-d2-d3", "A1", "P1"))
        .unwrap();
    assert_eq!(sweep.mode, TraceMode::Markers);
    assert_eq!(sweep.name, "W1 d1-d2-d3 A1 P1");

    let line = session
        .plot(&axes, &filters("W1", "d1-d2", "A1", "P1"))
        .unwrap();
    assert_eq!(line.mode, TraceMode::LinesMarkers);
    assert_eq!(line.x, vec![Datum::Integer(100), Datum::Integer(200)]);
    assert_eq!(line.hovertext, vec![Datum::from("1G"), Datum::from("2G")]);

    let encoded = serde_json::to_value(&sweep).unwrap();
    assert_eq!(encoded["mode"], "markers");
    assert_eq!(encoded["type"], "scattergl");
    assert_eq!(encoded["showlegend"], true);
}

#[test]
fn test_zero_rows_is_empty_result() {
    let env = imported_env();
    let err = env
        .bp
        .session()
        .plot(
            &AxisPair::new(COST, THROUGHPUT),
            &filters("W2", "d1-d2-d3", "A1", "P1"),
        )
        .unwrap_err();
    assert!(matches!(err, Error::EmptyResult));
}

#[test]
fn test_unknown_axis_rejected_before_query() {
    let env = imported_env();
    let err = env
        .bp
        .session()
        .plot(
            &AxisPair::new("cost\"; DROP TABLE master; --", THROUGHPUT),
            &filters("W1", "d1-d2", "A1", "P1"),
        )
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let count: i64 = env
        .connection()
        .query_row(r#"SELECT COUNT(*) FROM "master""#, [], |r| r.get(0))
        .unwrap();
    assert_eq!(count as usize, ROWS.len());
}

/// Sorted distinct values of every free control among rows matching `fixed`.
fn reference_valid_configs(fixed: &[(&str, &str)]) -> BTreeMap<String, Vec<Datum>> {
    let matching: Vec<&Row> = ROWS
        .iter()
        .filter(|r| fixed.iter().all(|(c, v)| r.control(c) == *v))
        .collect();

    CONTROLS
        .iter()
        .filter(|c| !fixed.iter().any(|(f, _)| f == *c))
        .map(|c| {
            let values: BTreeSet<&str> = matching.iter().map(|r| r.control(c)).collect();
            (
                c.to_string(),
                values.into_iter().map(Datum::from).collect(),
            )
        })
        .collect()
}

#[test]
fn test_valid_configs_matches_reference() {
    let env = imported_env();
    let session = env.bp.session();

    for fixed in [
        vec![("workload", "W1")],
        vec![("workload", "W2")],
        vec![("workload", "W1"), ("algorithms", "A1")],
        vec![("devices", "d1-d2"), ("write policy", "P1")],
        vec![],
    ] {
        let filters: Filters = fixed
            .iter()
            .map(|(c, v)| (c.to_string(), Datum::from(*v)))
            .collect();
        let got = session.valid_configs(&filters).unwrap();
        assert_eq!(got, reference_valid_configs(&fixed), "fixed = {:?}", fixed);
    }
}

#[test]
fn test_valid_configs_rejects_non_control() {
    let env = imported_env();
    let mut fixed = Filters::new();
    fixed.insert(IOPS.to_string(), Datum::Integer(900));
    let err = env.bp.session().valid_configs(&fixed).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_change_axes_x_only_payload() {
    let env = imported_env();
    let traces = vec![
        filters("W1", "d1-d2", "A1", "P1"),
        filters("W2", "d1", "A1", "P1"),
    ];

    let reply = env.bp.executor().handle(Command::ChangeAxes {
        axes: AxisSelection {
            xaxis: Some(IOPS.to_string()),
            yaxis: None,
        },
        traces: traces.clone(),
    });
    assert_eq!(reply.status, Status::Ok);
    assert_eq!(reply.body, json!([{"x": [1000, 2000]}, {"x": [900]}]));

    let updates = env
        .bp
        .session()
        .change_axes(
            &AxisSelection {
                xaxis: Some(IOPS.to_string()),
                yaxis: Some(COST.to_string()),
            },
            &traces,
        )
        .unwrap();
    assert_eq!(
        updates[1].y.as_deref(),
        Some(&[Datum::Integer(120)][..])
    );
}

#[test]
fn test_plot_setup_payload() {
    let env = imported_env();
    let reply = env.bp.executor().handle_json(r#"{"command": "plot_setup"}"#);
    assert_eq!(reply.status, Status::Ok);

    let body = reply.body;
    assert_eq!(body["xaxis"]["def"], COST);
    assert_eq!(body["yaxis"]["def"], THROUGHPUT);
    assert_eq!(body["xaxis"]["opts"], json!([THROUGHPUT, IOPS, COST]));
    assert_eq!(body["controls"]["workload"], json!(["W1", "W2", "W3"]));
    assert_eq!(body["files"], json!([]));
}

#[test]
fn test_queries_before_import_are_server_faults() {
    let env = empty_env();
    let reply = env.bp.executor().handle_json(r#"{"command": "plot_setup"}"#);
    assert_eq!(reply.status, Status::ServerFault);
    assert_eq!(reply.body["message"], "An unexpected error occurred.");
}
