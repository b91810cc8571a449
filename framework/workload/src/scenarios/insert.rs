//! Scenarios that measure writing new rows.

use crate::rng::WorkloadRng;
use crate::scenario::{StatementSequence, Workload, WorkloadOptions, POPULATE_ROWS};

/// Scenario 1: plain inserts, each statement on its own.
pub fn plain_inserts(options: &WorkloadOptions, seed: u64) -> Workload {
    let mut rng = WorkloadRng::new(seed);
    let mut seq = StatementSequence::new(options.dialect);

    seq.reset("t1");
    seq.insert_random_rows(&mut rng, "t1", 1_000);

    seq.finish("Test 1: 1000 INSERTs")
}

/// Scenario 2: bulk inserts inside a single transaction.
pub fn transactional_inserts(options: &WorkloadOptions, seed: u64) -> Workload {
    let mut rng = WorkloadRng::new(seed);
    let mut seq = StatementSequence::new(options.dialect);

    seq.reset("t2");
    seq.begin();
    seq.insert_random_rows(&mut rng, "t2", POPULATE_ROWS);
    seq.commit();

    seq.finish("Test 2: 25000 INSERTs in a transaction")
}

/// Scenario 3: bulk inserts that have to maintain two secondary indexes.
pub fn indexed_inserts(options: &WorkloadOptions, seed: u64) -> Workload {
    let mut rng = WorkloadRng::new(seed);
    let mut seq = StatementSequence::new(options.dialect);

    seq.reset("t3");
    seq.create_index("i3a", "t3", "a");
    seq.create_index("i3b", "t3", "b");
    seq.begin();
    seq.insert_random_rows(&mut rng, "t3", POPULATE_ROWS);
    seq.commit();

    seq.finish("Test 3: 25000 INSERTs into an indexed table")
}

/// Scenario 11: a single engine side copy of a populated table.
pub fn insert_from_select(options: &WorkloadOptions, seed: u64) -> Workload {
    let mut rng = WorkloadRng::new(seed);
    let mut seq = StatementSequence::new(options.dialect);

    seq.reset("t11");
    seq.reset("t11_source");
    seq.populate(&mut rng, "t11_source");
    seq.push("INSERT INTO t11 (id, a, b, c) SELECT id, a, b, c FROM t11_source;");

    seq.finish("Test 11: INSERTs from a SELECT")
}
