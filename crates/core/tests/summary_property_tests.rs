//! Property-based tests for currency parsing and dashboard aggregates.
//!
//! Amounts are generated as whole rupees, formatted the way the sheet formats
//! them, and checked against the totals the dashboard reports.

use proptest::prelude::*;
use projectboard_core::constants::PAGE_SIZE;
use projectboard_core::{parse_currency, query_projects, summarize, ProjectQuery, ProjectRecord};

// =============================================================================
// Generators
// =============================================================================

/// Formats whole rupees with thousands separators, e.g. `Rs. 12,345.00`.
fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("Rs. {grouped}.00")
}

/// Generates a record with well-formed monetary fields.
fn arb_record(outstanding: impl Strategy<Value = u64>) -> impl Strategy<Value = ProjectRecord> {
    (0u64..10_000_000, outstanding, 0u64..1_000_000, "[a-z]{3,12}").prop_map(
        |(payment, outstanding, profit, name)| ProjectRecord {
            project_name: name,
            payment_amount: format_rupees(payment),
            outstanding: format_rupees(outstanding),
            profit: format_rupees(profit),
            ..Default::default()
        },
    )
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_formatted_amount_round_trips(amount in 0u64..1_000_000_000_000) {
        prop_assert_eq!(parse_currency(&format_rupees(amount)), amount as f64);
    }

    #[test]
    fn prop_count_equals_record_count(records in prop::collection::vec(arb_record(0u64..1_000_000), 0..50)) {
        prop_assert_eq!(summarize(&records).count, records.len());
    }

    #[test]
    fn prop_fully_paid_current_profit_equals_total_profit(
        records in prop::collection::vec(arb_record(Just(0u64)), 0..50)
    ) {
        let summary = summarize(&records);
        prop_assert!(approx_eq(summary.current_profit, summary.total_profit));
        prop_assert_eq!(summary.total_outstanding, 0.0);
    }

    #[test]
    fn prop_nothing_paid_current_profit_is_zero(
        records in prop::collection::vec(arb_record(1u64..1_000_000), 0..50)
    ) {
        prop_assert_eq!(summarize(&records).current_profit, 0.0);
    }

    #[test]
    fn prop_totals_ignore_record_order(
        records in prop::collection::vec(arb_record(0u64..1_000), 0..50)
    ) {
        let forward = summarize(&records);
        let mut reversed = records.clone();
        reversed.reverse();
        let backward = summarize(&reversed);

        prop_assert_eq!(forward.count, backward.count);
        prop_assert!(approx_eq(forward.total_business, backward.total_business));
        prop_assert!(approx_eq(forward.total_outstanding, backward.total_outstanding));
        prop_assert!(approx_eq(forward.total_profit, backward.total_profit));
        prop_assert!(approx_eq(forward.current_profit, backward.current_profit));
    }

    #[test]
    fn prop_pages_partition_the_matches(
        records in prop::collection::vec(arb_record(0u64..1_000), 0..40)
    ) {
        let first = query_projects(&records, &ProjectQuery::default());
        let mut seen = 0;
        for page in 1..=first.total_pages.max(1) {
            let result = query_projects(&records, &ProjectQuery::new(None, page));
            prop_assert!(result.items.len() <= PAGE_SIZE);
            seen += result.items.len();
        }
        prop_assert_eq!(seen, records.len());
    }
}
