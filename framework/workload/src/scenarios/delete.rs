//! Scenarios that measure deleting rows, and writing again after a delete.

use itertools::Itertools;

use crate::rng::WorkloadRng;
use crate::scenario::{StatementSequence, Workload, WorkloadOptions, POPULATE_ROWS};

/// Identifiers per statement for batched primary key deletes.
pub const DELETE_BATCH_SIZE: usize = 500;

/// Rows with `a` below this value are removed by the range delete scenarios.
pub const DELETE_BELOW: i64 = 50_000;

/// Scenario 12: one range delete on the unindexed column `a`.
pub fn unindexed_range_delete(options: &WorkloadOptions, seed: u64) -> Workload {
    let mut rng = WorkloadRng::new(seed);
    let mut seq = StatementSequence::new(options.dialect);

    seq.reset("t12");
    seq.populate(&mut rng, "t12");
    seq.push(format!("DELETE FROM t12 WHERE a < {DELETE_BELOW};"));

    seq.finish("Test 12: DELETE without an index")
}

/// Scenario 13: removes the same rows as [unindexed_range_delete] but addresses them by
/// primary key, [DELETE_BATCH_SIZE] identifiers per statement, in insert order.
pub fn batched_key_delete(options: &WorkloadOptions, seed: u64) -> Workload {
    let mut rng = WorkloadRng::new(seed);
    let mut seq = StatementSequence::new(options.dialect);

    seq.reset("t13");
    let keys = seq.populate(&mut rng, "t13");

    let doomed = keys
        .iter()
        .filter(|key| key.a < DELETE_BELOW)
        .map(|key| &key.id)
        .collect::<Vec<_>>();
    for batch in doomed.chunks(DELETE_BATCH_SIZE) {
        let ids = batch.iter().map(|id| format!("'{id}'")).join(", ");
        seq.push(format!("DELETE FROM t13 WHERE id IN ({ids});"));
    }

    seq.finish("Test 13: DELETE by primary key in batches")
}

/// Scenario 14: clear the table, then refill it inside a second transaction.
pub fn reinsert_after_delete(options: &WorkloadOptions, seed: u64) -> Workload {
    let mut rng = WorkloadRng::new(seed);
    let mut seq = StatementSequence::new(options.dialect);

    seq.reset("t14");
    seq.populate(&mut rng, "t14");
    seq.push("DELETE FROM t14;");
    seq.begin();
    seq.insert_random_rows(&mut rng, "t14", POPULATE_ROWS);
    seq.commit();

    seq.finish("Test 14: A big INSERT after a big DELETE")
}

/// Scenario 15: clear the table, then insert rows one statement at a time.
pub fn small_inserts_after_delete(options: &WorkloadOptions, seed: u64) -> Workload {
    let mut rng = WorkloadRng::new(seed);
    let mut seq = StatementSequence::new(options.dialect);

    seq.reset("t15");
    seq.populate(&mut rng, "t15");
    seq.push("DELETE FROM t15;");
    seq.insert_random_rows(&mut rng, "t15", 12_000);

    seq.finish("Test 15: A big DELETE followed by many small INSERTs")
}

/// Scenario 16: the cost of clearing a populated table.
pub fn clear_table(options: &WorkloadOptions, seed: u64) -> Workload {
    let mut rng = WorkloadRng::new(seed);
    let mut seq = StatementSequence::new(options.dialect);

    seq.reset("t16");
    seq.populate(&mut rng, "t16");
    seq.push("DELETE FROM t16;");

    seq.finish("Test 16: Clear table")
}
