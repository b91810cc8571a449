//! Scenarios that measure lookups against a populated table.

use crate::rng::WorkloadRng;
use crate::scenario::{KeyStrategy, StatementSequence, Workload, WorkloadOptions};
use crate::table::{MAX_VALUE, MIN_VALUE};

/// Scenario 4: lookups on a column without an index, so every query scans.
pub fn unindexed_selects(options: &WorkloadOptions, seed: u64) -> Workload {
    let mut rng = WorkloadRng::new(seed);
    let mut seq = StatementSequence::new(options.dialect);

    seq.reset("t4");
    seq.populate(&mut rng, "t4");
    for _ in 0..100 {
        let value = rng.bounded_int(MIN_VALUE, MAX_VALUE);
        seq.push(format!("SELECT count(*), avg(b) FROM t4 WHERE a={value};"));
    }

    seq.finish("Test 4: 100 SELECTs without an index")
}

/// Scenario 5: substring pattern lookups on the text column.
pub fn string_comparison_selects(options: &WorkloadOptions, seed: u64) -> Workload {
    let mut rng = WorkloadRng::new(seed);
    let mut seq = StatementSequence::new(options.dialect);

    seq.reset("t5");
    seq.populate(&mut rng, "t5");
    for _ in 0..100 {
        let pattern = rng.alphanumeric(10);
        seq.push(format!(
            "SELECT count(*), avg(b) FROM t5 WHERE c LIKE '%{pattern}%';"
        ));
    }

    seq.finish("Test 5: 100 SELECTs on a string comparison")
}

/// Scenario 7: keyed lookups.
///
/// With [KeyStrategy::IndexedColumn] column `a` is indexed after population and each lookup
/// draws a fresh value for `a`. With [KeyStrategy::PrimaryKey] each lookup picks an identifier
/// from the populated rows with an independent index draw, so identifiers may repeat.
pub fn keyed_selects(options: &WorkloadOptions, seed: u64) -> Workload {
    let mut rng = WorkloadRng::new(seed);
    let mut seq = StatementSequence::new(options.dialect);

    seq.reset("t7");
    let keys = seq.populate(&mut rng, "t7");

    let description = match options.key_strategy {
        KeyStrategy::IndexedColumn => {
            seq.create_index("i7", "t7", "a");
            for _ in 0..5_000 {
                let value = rng.bounded_int(MIN_VALUE, MAX_VALUE);
                seq.push(format!("SELECT count(*), avg(b) FROM t7 WHERE a={value};"));
            }
            "Test 7: 5000 SELECTs with an index"
        }
        KeyStrategy::PrimaryKey => {
            for _ in 0..5_000 {
                let id = &keys[rng.index(keys.len())].id;
                seq.push(format!("SELECT count(*), avg(b) FROM t7 WHERE id='{id}';"));
            }
            "Test 7: 5000 SELECTs by primary key"
        }
    };

    seq.finish(description)
}
