#![cfg(test)]

use proptest::prelude::*;
use serde_json::json;

use mev_revenue_monitor::normalize::normalize;
use mev_revenue_monitor::types::{AggregateReport, RelayRevenue};

const WEI_PER_ETH: f64 = 1e18;

proptest! {
    // Normalization is a total function: no input string may panic or error.
    #[test]
    fn arbitrary_strings_never_panic(s in ".*") {
        let _ = normalize(&json!(s));
    }

    #[test]
    fn hex_wei_values_scale_down(wei in any::<u128>()) {
        let eth = normalize(&json!(format!("0x{:x}", wei)));
        let expected = wei as f64 / WEI_PER_ETH;
        prop_assert!((eth - expected).abs() <= expected.abs() * 1e-9);
    }

    // Integer-typed inputs are wei whatever their magnitude.
    #[test]
    fn native_integers_always_scale(wei in any::<u64>()) {
        prop_assert_eq!(normalize(&json!(wei)), wei as f64 / WEI_PER_ETH);
    }

    // Decimal strings under the magnitude ceiling pass through unscaled.
    #[test]
    fn small_decimal_strings_pass_through(v in 0.0f64..999_999.0) {
        prop_assert_eq!(normalize(&json!(v.to_string())), v);
    }

    // The report total is always reconstructible from its entries.
    #[test]
    fn report_total_reconstructs_from_entries(
        values in proptest::collection::vec(0.0f64..100.0, 0..12)
    ) {
        let items = values
            .iter()
            .enumerate()
            .map(|(i, eth)| RelayRevenue::new(format!("https://relay-{}.example", i), *eth))
            .collect();
        let report = AggregateReport::from_items(items);
        let reconstructed: f64 = report.items.iter().map(|item| item.eth).sum();
        prop_assert_eq!(report.total_eth, reconstructed);
        prop_assert_eq!(report.items.len(), values.len());
    }
}
