use std::sync::Arc;

use rayon::prelude::*;

#[test]
fn passing_checks_run_on_many_threads() {
    let table: Arc<Vec<u64>> = Arc::new((0..1_000).collect());

    let total: u64 = (0..10_000u64)
        .into_par_iter()
        .map(|i| {
            dbc::requires!(i < 10_000);
            let local = Arc::clone(&table);
            let shared = dbc::requires_equal!(local, table);
            let slot = dbc::requires_non_null!(shared.get((i % 1_000) as usize));
            let value = match slot {
                Some(value) => *value,
                None => dbc::fail!(),
            };
            dbc::ensures!(value == i % 1_000);
            dbc::weak_ensures!(value < 1_000);
            value
        })
        .sum();

    let expected: u64 = (0..1_000u64).sum::<u64>() * 10;
    dbc::invariant!(total == expected);
    assert_eq!(total, expected);
}
