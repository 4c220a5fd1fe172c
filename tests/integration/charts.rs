//! Saved charts: round trip through the store and replay.

use serde_json::json;

use benchplot::{AxisPair, Benchplot, Error, SavedChart, Status};

use crate::common::*;

#[test]
fn test_save_then_open_equals_direct_traces() {
    let env = imported_env();
    let session = env.bp.session();
    let axes = AxisPair::new(COST, THROUGHPUT);
    let tuples = vec![
        filters("W1", "d1-d2", "A1", "P1"),
        filters("W1", "d1-d2-d3", "A1", "P1"),
        filters("W2", "d1-d2", "A3", "P1"),
    ];
    session
        .save_chart(
            "baseline",
            &SavedChart {
                axes: axes.clone(),
                traces: tuples.clone(),
            },
        )
        .unwrap();

    let (opened, opened_axes) = session.open_chart("baseline").unwrap();
    let direct: Vec<_> = tuples
        .iter()
        .map(|f| session.plot(&axes, f).unwrap())
        .collect();
    assert_eq!(opened_axes, axes);
    assert_eq!(opened, direct);
}

#[test]
fn test_chart_file_layout() {
    let env = imported_env();
    let reply = env.bp.executor().handle_json(
        &json!({
            "command": "save_chart",
            "name": "legacy",
            "chart": {
                "axes": [COST, IOPS],
                "traces": [{"workload": "W3", "devices": "d4", "algorithms": "A4", "write policy": "P3"}]
            }
        })
        .to_string(),
    );
    assert_eq!(reply.status, Status::Created);

    let stored: serde_json::Value = serde_json::from_slice(
        &std::fs::read(env.dir.path().join("work").join("legacy")).unwrap(),
    )
    .unwrap();
    assert_eq!(stored["axes"], json!({"x": COST, "y": IOPS}));

    let reply = env
        .bp
        .executor()
        .handle_json(r#"{"command": "open_chart", "name": "legacy"}"#);
    assert_eq!(reply.status, Status::Ok);
    assert_eq!(reply.body["traces"][0]["x"], json!([500]));
    assert_eq!(reply.body["traces"][0]["y"], json!([4000]));
    assert_eq!(reply.body["axes"], json!({"x": COST, "y": IOPS}));
}

#[test]
fn test_charts_survive_reopen() {
    let env = imported_env();
    env.bp
        .session()
        .save_chart(
            "kept",
            &SavedChart {
                axes: AxisPair::new(COST, THROUGHPUT),
                traces: vec![filters("W2", "d1", "A1", "P1")],
            },
        )
        .unwrap();

    let reopened = Benchplot::builder()
        .config(env.bp.config().clone())
        .open()
        .unwrap();
    assert_eq!(reopened.session().list_charts().unwrap(), vec!["kept"]);
    let (traces, _) = reopened.session().open_chart("kept").unwrap();
    assert_eq!(traces.len(), 1);
}

#[test]
fn test_open_failures() {
    let env = imported_env();
    let session = env.bp.session();

    assert!(session.open_chart("missing").unwrap_err().is_not_found());

    std::fs::create_dir_all(env.dir.path().join("work")).unwrap();
    std::fs::write(env.dir.path().join("work").join("corrupt"), b"{not json").unwrap();
    let reply = env
        .bp
        .executor()
        .handle_json(r#"{"command": "open_chart", "name": "corrupt"}"#);
    assert_eq!(reply.status, Status::ServerFault);
    assert_eq!(
        reply.body["message"],
        "An error occurred trying to open chart file."
    );

    session
        .save_chart(
            "stale",
            &SavedChart {
                axes: AxisPair::new(COST, "dropped column"),
                traces: vec![filters("W1", "d1-d2", "A1", "P1")],
            },
        )
        .unwrap();
    assert!(matches!(
        session.open_chart("stale").unwrap_err(),
        Error::ChartOpen(_)
    ));
}

#[test]
fn test_delete_and_list() {
    let env = imported_env();
    let session = env.bp.session();
    let chart = SavedChart {
        axes: AxisPair::new(COST, THROUGHPUT),
        traces: Vec::new(),
    };
    for name in ["b", "a", "c"] {
        session.save_chart(name, &chart).unwrap();
    }
    assert_eq!(session.list_charts().unwrap(), vec!["a", "b", "c"]);

    session.delete_chart("b").unwrap();
    assert_eq!(session.list_charts().unwrap(), vec!["a", "c"]);
    assert!(session.delete_chart("b").unwrap_err().is_not_found());
}
