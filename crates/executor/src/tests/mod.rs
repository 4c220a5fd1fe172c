//! Executor tests against a scratch database and chart directory.


use std::sync::Arc;

use benchplot_core::{Config, Datum, Filters};
use benchplot_engine::{open_connection, OpenOptions};
use benchplot_import::{Importer, SourceRecordSet};
use benchplot_store::FsChartStore;

use crate::Executor;

pub(crate) const COST: &str = "total purchase cost ($)";
pub(crate) const THROUGHPUT: &str = "avg throughput (KB/s)";

const MASTER_CSV: &str = "\
workload,devices,algorithms,write policy,cache sizes,source,total purchase cost ($),avg throughput (KB/s)
W1,d1-d2,A1,P1,1G,run-a,100,50.5
W1,d1-d2,A1,P1,2G,run-a,200,80
W1,d1-d2-d3,A2,P1,1G,run-b,300,90
W2,d1,A1,P2,1G,run-c,120,40
";

/// Executor over a freshly imported `master` table.
pub(crate) fn create_test_environment() -> (tempfile::TempDir, Executor) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        database: dir.path().join("db.sqlite"),
        charts_dir: dir.path().join("work"),
        ..Config::default()
    };

    let mut conn = open_connection(&config.database, &OpenOptions::new()).unwrap();
    let source = SourceRecordSet::from_csv_reader(MASTER_CSV.as_bytes()).unwrap();
    Importer::new(&config.plot)
        .import(&mut conn, &source, "master", &[])
        .unwrap();
    drop(conn);

    let store = Arc::new(FsChartStore::new(config.charts_dir.clone()));
    (dir, Executor::new(&config, store))
}

pub(crate) fn filters(workload: &str, devices: &str, algorithms: &str, policy: &str) -> Filters {
    [
        ("workload", workload),
        ("devices", devices),
        ("algorithms", algorithms),
        ("write policy", policy),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), Datum::from(v)))
    .collect()
}
