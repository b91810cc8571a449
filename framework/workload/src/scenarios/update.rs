//! Scenarios that measure in place updates.

use crate::rng::WorkloadRng;
use crate::scenario::{KeyStrategy, RowKey, StatementSequence, Workload, WorkloadOptions};
use crate::table::{MAX_VALUE, MIN_VALUE, TEXT_LEN};

/// Scenario 8: updates keyed by a random value of the unindexed column `a`.
pub fn unindexed_updates(options: &WorkloadOptions, seed: u64) -> Workload {
    let mut rng = WorkloadRng::new(seed);
    let mut seq = StatementSequence::new(options.dialect);

    seq.reset("t8");
    seq.populate(&mut rng, "t8");
    for _ in 0..1_000 {
        let value = rng.bounded_int(MIN_VALUE, MAX_VALUE);
        seq.push(format!("UPDATE t8 SET b=b*2 WHERE a={value};"));
    }

    seq.finish("Test 8: 1000 UPDATEs without an index")
}

/// Scenario 9: one numeric update per populated row, inside a second transaction.
pub fn keyed_updates(options: &WorkloadOptions, seed: u64) -> Workload {
    let mut rng = WorkloadRng::new(seed);
    let mut seq = StatementSequence::new(options.dialect);

    seq.reset("t9");
    let keys = seq.populate_sequential(&mut rng, "t9");
    prepare_keyed_update(&mut seq, options.key_strategy, "i9", "t9");

    seq.begin();
    for key in &keys {
        seq.push(format!(
            "UPDATE t9 SET b=b+1 WHERE {};",
            key_predicate(options.key_strategy, key)
        ));
    }
    seq.commit();

    seq.finish(match options.key_strategy {
        KeyStrategy::IndexedColumn => "Test 9: 25000 UPDATEs with an index",
        KeyStrategy::PrimaryKey => "Test 9: 25000 UPDATEs by primary key",
    })
}

/// Scenario 10: like [keyed_updates] but every update replaces the text column.
pub fn keyed_text_updates(options: &WorkloadOptions, seed: u64) -> Workload {
    let mut rng = WorkloadRng::new(seed);
    let mut seq = StatementSequence::new(options.dialect);

    seq.reset("t10");
    let keys = seq.populate_sequential(&mut rng, "t10");
    prepare_keyed_update(&mut seq, options.key_strategy, "i10", "t10");

    seq.begin();
    for key in &keys {
        let text = rng.alphanumeric(TEXT_LEN);
        seq.push(format!(
            "UPDATE t10 SET c='{text}' WHERE {};",
            key_predicate(options.key_strategy, key)
        ));
    }
    seq.commit();

    seq.finish(match options.key_strategy {
        KeyStrategy::IndexedColumn => "Test 10: 25000 text UPDATEs with an index",
        KeyStrategy::PrimaryKey => "Test 10: 25000 text UPDATEs by primary key",
    })
}

fn prepare_keyed_update(
    seq: &mut StatementSequence,
    key_strategy: KeyStrategy,
    index: &str,
    table: &str,
) {
    if key_strategy == KeyStrategy::IndexedColumn {
        seq.create_index(index, table, "a");
    }
}

/// Rows are walked in generation order, so `a` runs from 1 upwards for the indexed variant.
fn key_predicate(key_strategy: KeyStrategy, key: &RowKey) -> String {
    match key_strategy {
        KeyStrategy::IndexedColumn => format!("a={}", key.a),
        KeyStrategy::PrimaryKey => format!("id='{}'", key.id),
    }
}
