//! Shared fixture for engine tests.

use rusqlite::Connection;

use benchplot_core::{Datum, Filters, PlotConfig};
use benchplot_import::{Importer, SourceRecordSet};

pub const COST: &str = "total purchase cost ($)";
pub const THROUGHPUT: &str = "avg throughput (KB/s)";
pub const IOPS: &str = "iops";

const MASTER_CSV: &str = "\
workload,devices,algorithms,write policy,cache sizes,source,total purchase cost ($),avg throughput (KB/s),iops
W1,d1-d2,A1,P1,1G,run-a,100,50.5,1000
W1,d1-d2,A1,P1,2G,run-a,200,80,2000
W1,d1-d2-d3,A1,P1,1G,run-b,300,90,2500
W1,d1-d2,A2,P2,4G,run-b,150,60,1200
W2,d1,A1,P1,1G,run-c,120,40,900
W2,d1-d2,A3,P1,2G,run-c,220,70,1800
";

/// In-memory database holding the `master` table.
pub fn fixture() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    let source = SourceRecordSet::from_csv_reader(MASTER_CSV.as_bytes()).unwrap();
    Importer::new(&PlotConfig::default())
        .import(&mut conn, &source, "master", &[])
        .unwrap();
    conn
}

pub fn filters(workload: &str, devices: &str, algorithms: &str, policy: &str) -> Filters {
    let mut f = Filters::new();
    f.insert("workload".into(), Datum::from(workload));
    f.insert("devices".into(), Datum::from(devices));
    f.insert("algorithms".into(), Datum::from(algorithms));
    f.insert("write policy".into(), Datum::from(policy));
    f
}
