//! Scripted console sessions
//!
//! Drives the full menu loop over in-memory input and output, checking both
//! the printed output and the state the flows leave behind in the catalog,
//! directory, and transaction history.

use std::io::Cursor;

use core_kernel::FixedClock;
use domain_sales::TransactionStatus;
use interface_cli::{StoreApp, StoreConfig};
use rust_decimal_macros::dec;
use test_utils::DateFixtures;

/// Runs one scripted session against the seeded demo store
fn run_session(script: &str) -> (StoreApp, String) {
    let mut app = StoreApp::new(StoreConfig::default())
        .with_clock(Box::new(FixedClock(DateFixtures::today())));
    app.seed_demo_data();

    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    app.run(&mut input, &mut output)
        .expect("scripted session should run to the exit option");
    (app, String::from_utf8(output).expect("output is valid utf-8"))
}

mod sales_flow {
    use super::*;

    // Demo products list alphabetically, so selection 2 is the cola
    // (cost 1.20 + 30% markup = $1.56 a can).
    const VIP_CASH_SALE: &str =
        "3\n1\nbob.johnson@email.com\n2\n2\n\nn\n\n1\n5\n0\n0\n";

    #[test]
    fn test_vip_cash_sale_prints_receipt_and_settles() {
        let (app, output) = run_session(VIP_CASH_SALE);

        // 2 x 1.56 = 3.12, minus 10% VIP discount = 2.808, plus 8% tax
        assert!(output.contains("Bob Johnson"), "customer greeting: {output}");
        assert!(output.contains("TOTAL: $3.03"), "final total: {output}");
        assert!(output.contains("Change: $1.97"), "change on $5: {output}");
        assert!(output.contains("Completed"));

        let cola = app.catalog().find_by_name("cola")[0];
        assert_eq!(cola.current_stock(), 48);

        let bob = app.directory().find_by_email("bob.johnson@email.com").unwrap();
        assert_eq!(bob.total_spent().amount(), dec!(3.0326));
        assert_eq!(bob.transaction_count(), 1);

        assert_eq!(app.transactions().len(), 1);
        assert_eq!(app.transactions()[0].status(), TransactionStatus::Completed);
    }

    #[test]
    fn test_abandoning_payment_cancels_without_side_effects() {
        // Walk-in, one cola in the cart, then 0 at the payment prompt
        let (app, output) = run_session("3\n1\n\n2\n1\n\nn\n0\n0\n0\n");

        assert!(output.contains("Sale cancelled."));
        assert_eq!(app.transactions()[0].status(), TransactionStatus::Cancelled);
        assert_eq!(app.catalog().find_by_name("cola")[0].current_stock(), 50);
    }

    #[test]
    fn test_refund_flow_reverses_the_sale() {
        // The cash sale above, then the refund menu on the same transaction
        let (app, output) =
            run_session("3\n1\nbob.johnson@email.com\n2\n2\n\nn\n\n1\n5\n2\n1\n\n0\n0\n");

        assert!(output.contains("Refunded $3.03"), "refund line: {output}");
        assert_eq!(app.transactions()[0].status(), TransactionStatus::Refunded);
        assert_eq!(app.catalog().find_by_name("cola")[0].current_stock(), 50);

        let bob = app.directory().find_by_email("bob.johnson@email.com").unwrap();
        assert!(bob.total_spent().is_zero());
    }
}

mod reports_flow {
    use super::*;

    #[test]
    fn test_inventory_report_over_seed_data() {
        let (_, output) = run_session("1\n6\n0\n0\n");
        assert!(output.contains("INVENTORY REPORT"));
        assert!(output.contains("Total Products: 5"));
        assert!(output.contains("Active Products: 5"));
    }

    #[test]
    fn test_customer_statistics_over_seed_data() {
        let (_, output) = run_session("2\n4\n0\n0\n");
        assert!(output.contains("CUSTOMER STATISTICS"));
        assert!(output.contains("Total Customers: 3"));
    }

    #[test]
    fn test_financial_summary_combines_inventory_and_sales() {
        // A cash sale first, then the financial summary report
        let (_, output) =
            run_session("3\n1\nbob.johnson@email.com\n2\n2\n\nn\n\n1\n5\n0\n4\n5\n0\n0\n");
        assert!(output.contains("FINANCIAL SUMMARY"));
        assert!(output.contains("Total Inventory Value:"));
        assert!(output.contains("Total Sales Revenue: $3.03"), "revenue: {output}");
        assert!(output.contains("Total Customer Spending: $3.03"));
    }

    #[test]
    fn test_unknown_menu_choice_reprompts() {
        let (_, output) = run_session("9\n0\n");
        assert!(output.contains("Invalid choice!"));
        assert!(output.contains("Thank you for using"));
    }
}

mod settings_flow {
    use super::*;

    #[test]
    fn test_system_information() {
        let (_, output) = run_session("5\n2\n0\n0\n");
        assert!(output.contains("SYSTEM INFORMATION"));
        assert!(output.contains("Products in System: 5"));
        assert!(output.contains("Customers in System: 3"));
    }

    #[test]
    fn test_change_cashier_id() {
        let (_, output) = run_session("5\n1\nCASHIER-042\n0\n0\n");
        assert!(output.contains("Cashier ID updated to: CASHIER-042"));
    }
}
