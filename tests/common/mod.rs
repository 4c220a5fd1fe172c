//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use benchplot::{Benchplot, Datum, Filters};

pub const COST: &str = "total purchase cost ($)";
pub const THROUGHPUT: &str = "avg throughput (KB/s)";
pub const IOPS: &str = "iops";

pub const CONTROLS: [&str; 4] = ["workload", "devices", "algorithms", "write policy"];

/// One benchmark result row.
pub struct Row {
    pub workload: &'static str,
    pub devices: &'static str,
    pub algorithms: &'static str,
    pub policy: &'static str,
    pub cache: &'static str,
    pub source: &'static str,
    pub cost: i64,
    pub throughput: f64,
    pub iops: i64,
}

impl Row {
    pub fn control(&self, name: &str) -> &'static str {
        match name {
            "workload" => self.workload,
            "devices" => self.devices,
            "algorithms" => self.algorithms,
            "write policy" => self.policy,
            other => panic!("not a control: {}", other),
        }
    }
}

macro_rules! row {
    ($w:expr, $d:expr, $a:expr, $p:expr, $c:expr, $s:expr, $cost:expr, $tp:expr, $iops:expr) => {
        Row {
            workload: $w,
            devices: $d,
            algorithms: $a,
            policy: $p,
            cache: $c,
            source: $s,
            cost: $cost,
            throughput: $tp,
            iops: $iops,
        }
    };
}

pub const ROWS: &[Row] = &[
    row!("W1", "d1-d2", "A1", "P1", "1G", "run-a", 100, 50.5, 1000),
    row!("W1", "d1-d2", "A1", "P1", "2G", "run-a", 200, 80.0, 2000),
    row!("W1", "d1-d2-d3", "A1", "P1", "1G", "run-b", 300, 90.0, 2500),
    row!("W1", "d1-d2-d3", "A1", "P1", "2G", "run-b", 400, 95.5, 2600),
    row!("W1", "d1-d2", "A2", "P2", "4G", "run-b", 150, 60.0, 1200),
    row!("W1", "d3", "A3", "P2", "1G", "run-d", 90, 30.25, 700),
    row!("W2", "d1", "A1", "P1", "1G", "run-c", 120, 40.0, 900),
    row!("W2", "d1-d2", "A3", "P1", "2G", "run-c", 220, 70.0, 1800),
    row!("W3", "d4", "A4", "P3", "8G", "run-e", 500, 110.0, 4000),
];

/// Render `ROWS` as the CSV the importer reads.
pub fn master_csv() -> String {
    let mut csv = format!(
        "{},cache sizes,source,{},{},{}\n",
        CONTROLS.join(","),
        COST,
        THROUGHPUT,
        IOPS
    );
    for r in ROWS {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            r.workload, r.devices, r.algorithms, r.policy, r.cache, r.source, r.cost, r.throughput, r.iops
        ));
    }
    csv
}

/// Scratch directory holding `master.csv` and a database path.
pub struct TestEnv {
    pub dir: tempfile::TempDir,
    pub bp: Benchplot,
}

impl TestEnv {
    pub fn csv_path(&self) -> PathBuf {
        self.dir.path().join("master.csv")
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("db.sqlite")
    }

    pub fn connection(&self) -> rusqlite::Connection {
        rusqlite::Connection::open(self.db_path()).unwrap()
    }
}

/// Environment with the CSV written but nothing imported.
pub fn empty_env() -> TestEnv {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("master.csv"), master_csv()).unwrap();
    let bp = Benchplot::builder()
        .database(dir.path().join("db.sqlite"))
        .charts_dir(dir.path().join("work"))
        .open()
        .unwrap();
    TestEnv { dir, bp }
}

/// Environment with `master.csv` imported into the `master` table.
pub fn imported_env() -> TestEnv {
    let env = empty_env();
    env.bp.import_csv(env.csv_path(), &[]).unwrap();
    env
}

pub fn filters(workload: &str, devices: &str, algorithms: &str, policy: &str) -> Filters {
    CONTROLS
        .iter()
        .zip([workload, devices, algorithms, policy])
        .map(|(c, v)| (c.to_string(), Datum::from(v)))
        .collect()
}
