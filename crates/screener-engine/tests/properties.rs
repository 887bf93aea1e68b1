//! Property tests for filter and sort invariants.
//!
//! Uses proptest to verify:
//! 1. Filtering yields an order-preserving subsequence of passing records
//! 2. Loosening any single threshold never removes a record
//! 3. Sorting is a stable permutation with unknown values last
//! 4. Descending order is the reverse of ascending order for distinct keys

use proptest::prelude::*;
use screener_data::{Record, SectorAverages};
use screener_engine::{Criteria, SortDirection, SortKey, filter, sort};

// ── Strategies ───────────────────────────────────────────────────────

const SECTORS: [&str; 4] = ["Energy", "Financials", "Health Care", "Utilities"];

fn arb_opt(range: std::ops::Range<f64>) -> impl Strategy<Value = Option<f64>> {
    prop::option::weighted(0.85, range.prop_map(|v| (v * 100.0).round() / 100.0))
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        prop::option::of(prop::sample::select(SECTORS.to_vec())),
        arb_opt(0.0..100.0),
        arb_opt(10e9..3_000e9),
        arb_opt(30.0..100.0),
        arb_opt(-40.0..60.0),
        arb_opt(-40.0..60.0),
        arb_opt(60.0..140.0),
        arb_opt(1.0..5.0),
        arb_opt(5.0..40.0),
    )
        .prop_map(
            |(sector, rsi, market_cap, pct_from_high, eps, revenue, dma, mean, pe)| Record {
                sector: sector.map(str::to_string),
                rsi,
                market_cap,
                pct_from_high,
                earnings_growth: eps,
                revenue_growth: revenue,
                pct_from_200dma: dma,
                recommendation_mean: mean,
                forward_pe: pe,
                ..Record::default()
            },
        )
}

fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_record(), 0..40).prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(i, record)| Record {
                symbol: format!("S{i:03}"),
                ..record
            })
            .collect()
    })
}

fn arb_criteria() -> impl Strategy<Value = Criteria> {
    (
        0.0..50.0_f64,
        50.0..100.0_f64,
        0.0..500.0_f64,
        40.0..90.0_f64,
        -20.0..20.0_f64,
        -20.0..20.0_f64,
        any::<[bool; 3]>(),
    )
        .prop_map(
            |(rsi_min, rsi_max, cap, high, eps, revenue, [dma, buy, per])| Criteria {
                rsi_min,
                rsi_max,
                market_cap_floor: cap,
                pct_from_high_floor: high,
                eps_growth_floor: eps,
                revenue_growth_floor: revenue,
                above_200dma: dma,
                buy_only: buy,
                per_below_sector: per,
                ..Criteria::default()
            },
        )
}

fn averages() -> SectorAverages {
    [("Energy", 11.0), ("Financials", 14.5), ("Health Care", 18.5)]
        .into_iter()
        .collect()
}

fn symbols(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.symbol.clone()).collect()
}

// ── 1. Filtering ─────────────────────────────────────────────────────

proptest! {
    /// The output is exactly the input records that pass, in input order.
    #[test]
    fn filter_is_passing_subsequence(records in arb_records(), criteria in arb_criteria()) {
        let averages = averages();
        let passing = filter(&records, &criteria, &averages);

        let expected: Vec<&Record> = records
            .iter()
            .filter(|r| criteria.rejections(r, &averages).is_empty())
            .collect();
        prop_assert_eq!(symbols(&passing), symbols(&expected));
    }

    /// Loosening the market cap floor keeps every record that passed before.
    #[test]
    fn lowering_market_cap_floor_is_monotone(
        records in arb_records(),
        criteria in arb_criteria(),
        slack in 0.0..200.0_f64,
    ) {
        let averages = averages();
        let strict = filter(&records, &criteria, &averages);
        let loose_criteria = Criteria {
            market_cap_floor: criteria.market_cap_floor - slack,
            ..criteria.clone()
        };
        let loose = symbols(&filter(&records, &loose_criteria, &averages));

        for symbol in symbols(&strict) {
            prop_assert!(loose.contains(&symbol));
        }
    }

    /// Lowering any one growth or distance floor keeps every record that passed before.
    #[test]
    fn lowering_any_floor_is_monotone(
        records in arb_records(),
        criteria in arb_criteria(),
        floor in 0..3usize,
        slack in 0.0..50.0_f64,
    ) {
        let averages = averages();
        let strict = filter(&records, &criteria, &averages);
        let mut loose_criteria = criteria.clone();
        let field = match floor {
            0 => &mut loose_criteria.pct_from_high_floor,
            1 => &mut loose_criteria.eps_growth_floor,
            _ => &mut loose_criteria.revenue_growth_floor,
        };
        *field -= slack;
        let loose = symbols(&filter(&records, &loose_criteria, &averages));

        for symbol in symbols(&strict) {
            prop_assert!(loose.contains(&symbol));
        }
    }

    /// Widening the RSI range keeps every record that passed before.
    #[test]
    fn widening_rsi_range_is_monotone(
        records in arb_records(),
        criteria in arb_criteria(),
        widen in 0.0..30.0_f64,
    ) {
        let averages = averages();
        let strict = filter(&records, &criteria, &averages);
        let wide_criteria = Criteria {
            rsi_min: criteria.rsi_min - widen,
            rsi_max: criteria.rsi_max + widen,
            ..criteria.clone()
        };
        let wide = symbols(&filter(&records, &wide_criteria, &averages));

        for symbol in symbols(&strict) {
            prop_assert!(wide.contains(&symbol));
        }
    }

    /// Turning a toggle off never removes a record.
    #[test]
    fn disabling_toggles_is_monotone(records in arb_records(), criteria in arb_criteria()) {
        let averages = averages();
        let strict = filter(&records, &criteria, &averages);
        let relaxed_criteria = Criteria {
            above_200dma: false,
            buy_only: false,
            per_below_sector: false,
            ..criteria.clone()
        };
        let relaxed = symbols(&filter(&records, &relaxed_criteria, &averages));

        for symbol in symbols(&strict) {
            prop_assert!(relaxed.contains(&symbol));
        }
    }
}

// ── 2. Sorting ───────────────────────────────────────────────────────

proptest! {
    /// Sorting is a permutation and sorting twice changes nothing.
    #[test]
    fn sort_is_idempotent_permutation(
        records in arb_records(),
        key in prop::sample::select(SortKey::all().to_vec()),
        ascending in any::<bool>(),
    ) {
        let direction = SortDirection::from_ascending(ascending);
        let once = sort(&records, key, direction);
        let twice = sort(&once, key, direction);

        let mut before: Vec<&str> = records.iter().map(|r| r.symbol.as_str()).collect();
        let mut after: Vec<&str> = once.iter().map(|r| r.symbol.as_str()).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
        prop_assert_eq!(once, twice);
    }

    /// Records without a value for the key form a suffix in input order.
    #[test]
    fn unknown_values_sort_last(
        records in arb_records(),
        key in prop::sample::select(SortKey::all().to_vec()),
        ascending in any::<bool>(),
    ) {
        let sorted = sort(&records, key, SortDirection::from_ascending(ascending));
        let known = sorted.iter().take_while(|r| key.value(r).is_some()).count();

        prop_assert!(sorted[known..].iter().all(|r| key.value(r).is_none()));

        let unknown_in_input: Vec<&str> = records
            .iter()
            .filter(|r| key.value(r).is_none())
            .map(|r| r.symbol.as_str())
            .collect();
        let unknown_in_output: Vec<&str> =
            sorted[known..].iter().map(|r| r.symbol.as_str()).collect();
        prop_assert_eq!(unknown_in_input, unknown_in_output);
    }

    /// With distinct known values, descending is ascending reversed.
    #[test]
    fn descending_reverses_ascending(values in prop::collection::hash_set(0u32..10_000, 0..30)) {
        let records: Vec<Record> = values
            .into_iter()
            .map(|v| Record {
                rsi: Some(f64::from(v) / 100.0),
                ..Record::new(format!("R{v}"))
            })
            .collect();

        let ascending = sort(&records, SortKey::Rsi, SortDirection::Ascending);
        let mut descending = sort(&records, SortKey::Rsi, SortDirection::Descending);
        descending.reverse();
        prop_assert_eq!(ascending, descending);
    }
}
