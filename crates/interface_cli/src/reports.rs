//! Report formatting
//!
//! Turns the aggregate numbers the domain crates expose into the
//! human-readable blocks the reports menu prints.

use std::fmt::Write;

use chrono::NaiveDate;

use domain_catalog::Catalog;
use domain_customer::CustomerDirectory;
use domain_sales::{Transaction, TransactionStatus};

const WIDTH: usize = 60;

fn header(title: &str) -> String {
    let rule = "=".repeat(WIDTH);
    let pad = WIDTH.saturating_sub(title.len()) / 2;
    format!("{rule}\n{}{title}\n{rule}\n", " ".repeat(pad))
}

/// Inventory report: counts, valuation, and stock status
pub fn inventory_report(catalog: &Catalog, today: NaiveDate) -> String {
    let summary = catalog.summary(today);
    let mut out = header("INVENTORY REPORT");

    let _ = writeln!(out, "Total Products: {}", summary.total_products);
    let _ = writeln!(out, "Active Products: {}", summary.active_products);
    if let Some(value) = summary.total_value {
        let _ = writeln!(out, "Total Inventory Value: {}", value.round_to_currency());
    }
    if let Some(cost) = summary.total_cost {
        let _ = writeln!(out, "Total Inventory Cost: {}", cost.round_to_currency());
    }
    if let Some(profit) = summary.potential_profit {
        let _ = writeln!(out, "Potential Profit: {}", profit.round_to_currency());
    }
    let _ = writeln!(out, "\nStock Status:");
    let _ = writeln!(out, "  Low Stock Items: {}", summary.low_stock_count);
    let _ = writeln!(out, "  Out of Stock Items: {}", summary.out_of_stock_count);
    let _ = writeln!(out, "  Overstocked Items: {}", summary.overstocked_count);
    out
}

/// Low stock report with restock recommendations
pub fn low_stock_report(catalog: &Catalog) -> String {
    let mut out = header("LOW STOCK REPORT");
    let out_of_stock = catalog.out_of_stock();
    let low_stock: Vec<_> = catalog
        .low_stock()
        .into_iter()
        .filter(|p| p.current_stock() > 0)
        .collect();

    if out_of_stock.is_empty() && low_stock.is_empty() {
        let _ = writeln!(out, "All products are adequately stocked.");
        return out;
    }

    if !out_of_stock.is_empty() {
        let _ = writeln!(out, "\nOUT OF STOCK ({} items):", out_of_stock.len());
        for product in out_of_stock {
            let _ = writeln!(
                out,
                "  {} (restock: {})",
                product.name(),
                product.restock_recommendation()
            );
        }
    }

    if !low_stock.is_empty() {
        let _ = writeln!(out, "\nLOW STOCK ({} items):", low_stock.len());
        for product in low_stock {
            let _ = writeln!(
                out,
                "  {} (current: {}, min: {}, restock: {})",
                product.name(),
                product.current_stock(),
                product.min_stock_level(),
                product.restock_recommendation()
            );
        }
    }
    out
}

/// Customer statistics: totals, tier distribution, top spenders
pub fn customer_report(directory: &CustomerDirectory) -> String {
    let stats = directory.statistics();
    let mut out = header("CUSTOMER STATISTICS");

    let _ = writeln!(out, "Total Customers: {}", stats.total_customers);
    if let Some(total) = stats.total_spending {
        let _ = writeln!(out, "Total Customer Spending: {}", total.round_to_currency());
    }
    if let Some(average) = stats.average_spending {
        let _ = writeln!(
            out,
            "Average Spending per Customer: {}",
            average.round_to_currency()
        );
    }

    let _ = writeln!(out, "\nCustomer Tier Distribution:");
    for (tier, count) in &stats.tier_counts {
        let _ = writeln!(out, "  {tier}: {count}");
    }

    if !stats.top_customers.is_empty() {
        let _ = writeln!(out, "\nTop Customers:");
        for (i, (name, spent)) in stats.top_customers.iter().enumerate() {
            let _ = writeln!(out, "  {}. {} - {}", i + 1, name, spent.round_to_currency());
        }
    }
    out
}

/// Sales summary over the session's transaction history
pub fn sales_report(transactions: &[Transaction]) -> String {
    let mut out = header("SALES SUMMARY");

    let count_by = |status: TransactionStatus| {
        transactions.iter().filter(|t| t.status() == status).count()
    };

    let _ = writeln!(out, "Total Transactions: {}", transactions.len());
    let _ = writeln!(out, "  Completed: {}", count_by(TransactionStatus::Completed));
    let _ = writeln!(out, "  Pending: {}", count_by(TransactionStatus::Pending));
    let _ = writeln!(out, "  Cancelled: {}", count_by(TransactionStatus::Cancelled));
    let _ = writeln!(out, "  Refunded: {}", count_by(TransactionStatus::Refunded));
    let _ = writeln!(
        out,
        "  Partially Refunded: {}",
        count_by(TransactionStatus::PartiallyRefunded)
    );

    let mut revenue = None;
    let mut tax_collected = None;
    let mut completed = 0u32;
    for transaction in transactions
        .iter()
        .filter(|t| t.status() == TransactionStatus::Completed)
    {
        if let Some(totals) = transaction.totals() {
            let zero = core_kernel::Money::zero(transaction.currency());
            revenue = Some(revenue.unwrap_or(zero) + totals.final_total);
            tax_collected = Some(tax_collected.unwrap_or(zero) + totals.tax);
            completed += 1;
        }
    }
    if let Some(revenue) = revenue {
        let _ = writeln!(out, "\nCompleted Revenue: {}", revenue.round_to_currency());
        if let Some(tax) = tax_collected {
            let _ = writeln!(out, "Tax Collected: {}", tax.round_to_currency());
        }
        if let Ok(average) = revenue.divide(rust_decimal::Decimal::from(completed)) {
            let _ = writeln!(out, "Average Transaction: {}", average.round_to_currency());
        }
    }
    out
}

/// Financial summary across inventory, sales, and customers
pub fn financial_summary(
    catalog: &Catalog,
    directory: &CustomerDirectory,
    transactions: &[Transaction],
    today: NaiveDate,
) -> String {
    let mut out = header("FINANCIAL SUMMARY");

    let _ = writeln!(out, "INVENTORY:");
    if let Some(value) = catalog.total_inventory_value(today) {
        let _ = writeln!(out, "Total Inventory Value: {}", value.round_to_currency());
    }
    let cost = catalog.total_inventory_cost();
    if let Some(cost) = cost {
        let _ = writeln!(out, "Total Inventory Cost: {}", cost.round_to_currency());
    }
    if let Some(profit) = catalog.potential_profit(today) {
        let _ = writeln!(out, "Potential Profit: {}", profit.round_to_currency());
        if let Some(cost) = cost {
            if cost.is_positive() {
                let margin = profit.amount() / cost.amount() * rust_decimal::Decimal::from(100);
                let _ = writeln!(out, "Profit Margin: {}%", margin.round_dp(1));
            }
        }
    }

    let mut revenue = None;
    for transaction in transactions
        .iter()
        .filter(|t| t.status() == TransactionStatus::Completed)
    {
        if let Some(totals) = transaction.totals() {
            let current = revenue.unwrap_or(core_kernel::Money::zero(transaction.currency()));
            revenue = Some(current + totals.final_total);
        }
    }
    let _ = writeln!(out, "\nSALES:");
    match revenue {
        Some(revenue) => {
            let _ = writeln!(out, "Total Sales Revenue: {}", revenue.round_to_currency());
        }
        None => {
            let _ = writeln!(out, "No completed sales yet.");
        }
    }

    let _ = writeln!(out, "\nCUSTOMERS:");
    match directory.total_spending() {
        Some(total) => {
            let _ = writeln!(out, "Total Customer Spending: {}", total.round_to_currency());
        }
        None => {
            let _ = writeln!(out, "No customers registered.");
        }
    }
    out
}
