//! Import: idempotent replace, type inference, sanitization, index rebuild.

use benchplot::{Error, SourceRecordSet};
use benchplot_import::SourceField;

use crate::common::*;

fn table_rows(env: &TestEnv) -> Vec<(i64, String, f64)> {
    let conn = env.connection();
    let mut stmt = conn
        .prepare(r#"SELECT "id", "devices", "avg throughput (KB/s)" FROM "master" ORDER BY "id""#)
        .unwrap();
    let rows = stmt
        .query_map([], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)))
        .unwrap()
        .collect::<rusqlite::Result<Vec<_>>>()
        .unwrap();
    rows
}

fn index_names(env: &TestEnv) -> Vec<String> {
    let conn = env.connection();
    let mut stmt = conn
        .prepare(
            "SELECT name FROM sqlite_master \
             WHERE type = 'index' AND tbl_name = 'master' AND sql IS NOT NULL ORDER BY name",
        )
        .unwrap();
    let names = stmt
        .query_map([], |r| r.get(0))
        .unwrap()
        .collect::<rusqlite::Result<Vec<String>>>()
        .unwrap();
    names
}

fn column_types(env: &TestEnv) -> Vec<(String, String)> {
    let conn = env.connection();
    let mut stmt = conn
        .prepare("SELECT name, type FROM pragma_table_info('master') ORDER BY cid")
        .unwrap();
    let cols = stmt
        .query_map([], |r| Ok((r.get(0)?, r.get(1)?)))
        .unwrap()
        .collect::<rusqlite::Result<Vec<_>>>()
        .unwrap();
    cols
}

#[test]
fn test_reimport_is_idempotent() {
    let env = empty_env();
    let first = env.bp.import_csv(env.csv_path(), &[]).unwrap();
    let after_first = table_rows(&env);

    let second = env.bp.import_csv(env.csv_path(), &[]).unwrap();
    let after_second = table_rows(&env);

    assert_eq!(first.rows, ROWS.len());
    assert_eq!(second.rows, ROWS.len());
    assert_eq!(after_first.len(), ROWS.len());
    assert_eq!(
        after_first.iter().map(|r| (&r.1, r.2)).collect::<Vec<_>>(),
        after_second.iter().map(|r| (&r.1, r.2)).collect::<Vec<_>>()
    );
}

#[test]
fn test_inferred_schema() {
    let env = imported_env();
    let types = column_types(&env);
    let expect = [
        ("id", "INTEGER"),
        ("workload", "TEXT"),
        ("devices", "TEXT"),
        ("algorithms", "TEXT"),
        ("write policy", "TEXT"),
        ("cache sizes", "TEXT"),
        ("source", "TEXT"),
        (COST, "INTEGER"),
        (THROUGHPUT, "REAL"),
        (IOPS, "INTEGER"),
    ];
    assert_eq!(
        types,
        expect
            .iter()
            .map(|(n, t)| (n.to_string(), t.to_string()))
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_inference_examples_and_quote_stripping() {
    let env = empty_env();
    let source = SourceRecordSet::new(vec![
        SourceField::new("ints", vec!["1".into(), "2".into(), "3".into()]),
        SourceField::new("reals", vec!["1".into(), "2.5".into(), "3".into()]),
        SourceField::new("`", vec!["1".into(), "x".into(), "3".into()]),
        SourceField::new("we\"ird`", vec!["a".into(), "b".into(), "c".into()]),
    ])
    .unwrap();
    let summary = env.bp.import_source(&source, "\"odd`table", &[]).unwrap();
    assert_eq!(summary.table, "oddtable");

    let conn = env.connection();
    let mut stmt = conn
        .prepare("SELECT name, type FROM pragma_table_info('oddtable') ORDER BY cid")
        .unwrap();
    let cols: Vec<(String, String)> = stmt
        .query_map([], |r| Ok((r.get(0)?, r.get(1)?)))
        .unwrap()
        .collect::<rusqlite::Result<_>>()
        .unwrap();
    assert_eq!(
        cols,
        vec![
            ("id".to_string(), "INTEGER".to_string()),
            ("ints".to_string(), "INTEGER".to_string()),
            ("reals".to_string(), "REAL".to_string()),
            ("col3".to_string(), "TEXT".to_string()),
            ("weird".to_string(), "TEXT".to_string()),
        ]
    );
}

#[test]
fn test_reimport_leaves_exactly_requested_indexes() {
    let env = empty_env();
    let first = vec![
        vec!["workload".to_string()],
        vec!["devices".to_string(), "algorithms".to_string()],
        vec![IOPS.to_string()],
    ];
    env.bp.import_csv(env.csv_path(), &first).unwrap();
    assert_eq!(index_names(&env), vec!["idx_0", "idx_1", "idx_2"]);

    let second = vec![vec!["write policy".to_string()]];
    let summary = env.bp.import_csv(env.csv_path(), &second).unwrap();
    assert_eq!(summary.indexes, vec!["idx_0"]);
    assert_eq!(index_names(&env), vec!["idx_0"]);

    let conn = env.connection();
    let indexed: String = conn
        .query_row("SELECT name FROM pragma_index_info('idx_0')", [], |r| r.get(0))
        .unwrap();
    assert_eq!(indexed, "write policy");

    env.bp.import_csv(env.csv_path(), &[]).unwrap();
    assert!(index_names(&env).is_empty());
}

#[test]
fn test_bad_index_rolls_back_import() {
    let env = imported_env();
    let before = table_rows(&env);

    let err = env
        .bp
        .import_csv(env.csv_path(), &[vec!["no such column".to_string()]])
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(table_rows(&env), before);
}
