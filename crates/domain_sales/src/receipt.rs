//! Receipt rendering
//!
//! Pure formatting over a transaction's current state; nothing here reads or
//! mutates the catalog. The customer is passed in by the caller when one is
//! attached so the receipt can show the loyalty balance.

use std::fmt::Write;

use domain_customer::Customer;

use crate::line::SaleLine;
use crate::transaction::Transaction;

const RECEIPT_WIDTH: usize = 40;
const DETAILED_WIDTH: usize = 50;

fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.len()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

fn line_entry(line: &SaleLine) -> String {
    let mut entry = line.product_name().to_string();
    if line.quantity() != rust_decimal::Decimal::ONE {
        let _ = write!(entry, " x{}", line.quantity().normalize());
    }
    let _ = write!(entry, " @ {}", line.unit_price());
    if !line.discount().is_zero() {
        let _ = write!(entry, " ({} off)", line.discount());
    }
    let _ = write!(entry, " = {}", line.subtotal().round_to_currency());
    if let Some(note) = line.note() {
        let _ = write!(entry, " [{}]", note);
    }
    entry
}

/// Renders the short receipt handed to the customer
pub fn render_receipt(
    store_name: &str,
    transaction: &Transaction,
    customer: Option<&Customer>,
) -> String {
    let rule = "=".repeat(RECEIPT_WIDTH);
    let thin = "-".repeat(RECEIPT_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{}", center(store_name, RECEIPT_WIDTH));
    let _ = writeln!(out, "{}", center("RECEIPT", RECEIPT_WIDTH));
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Transaction: {}", transaction.id());
    let _ = writeln!(
        out,
        "Date: {}",
        transaction.opened_at().format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out, "Cashier: {}", transaction.cashier_id());
    if let Some(customer) = customer {
        let _ = writeln!(
            out,
            "Customer: {} ({})",
            customer.full_name(),
            customer.tier()
        );
    }
    let _ = writeln!(out, "{thin}");

    for line in transaction.lines() {
        let _ = writeln!(out, "{}", line_entry(line));
    }

    let _ = writeln!(out, "{thin}");
    if let Some(totals) = transaction.totals() {
        if totals.total_discount.is_positive() {
            let _ = writeln!(
                out,
                "Discount: -{}",
                totals.total_discount.round_to_currency()
            );
        }
        let _ = writeln!(out, "Subtotal: {}", totals.subtotal.round_to_currency());
        let _ = writeln!(out, "Tax: {}", totals.tax.round_to_currency());
        let _ = writeln!(out, "TOTAL: {}", totals.final_total.round_to_currency());
    }
    if let Some(payment) = transaction.payment() {
        let _ = writeln!(out, "Payment Method: {}", payment.method);
        if payment.change.is_positive() {
            let _ = writeln!(out, "Change: {}", payment.change.round_to_currency());
        }
    }
    let _ = writeln!(out, "Status: {}", transaction.status());

    if let Some(customer) = customer {
        if transaction.points_earned() > rust_decimal::Decimal::ZERO {
            let _ = writeln!(
                out,
                "Loyalty Points Earned: {}",
                transaction.points_earned().round_dp(4).normalize()
            );
            let _ = writeln!(
                out,
                "Total Loyalty Points: {}",
                customer.loyalty_points().round_dp(4).normalize()
            );
        }
    }

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{}",
        center("Thank you for shopping with us!", RECEIPT_WIDTH)
    );
    let _ = writeln!(out, "{rule}");
    out
}

/// Renders the long-form receipt with the full financial breakdown
pub fn render_detailed_receipt(
    store_name: &str,
    transaction: &Transaction,
    customer: Option<&Customer>,
) -> String {
    let rule = "=".repeat(DETAILED_WIDTH);
    let thin = "-".repeat(DETAILED_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{}",
        center(&format!("{store_name} - DETAILED RECEIPT"), DETAILED_WIDTH)
    );
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Transaction: {}", transaction.id());
    let _ = writeln!(
        out,
        "Date & Time: {}",
        transaction.opened_at().format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out, "Cashier: {}", transaction.cashier_id());
    let _ = writeln!(out, "Status: {}", transaction.status());

    if let Some(customer) = customer {
        let _ = writeln!(out, "\nCustomer Information:");
        let _ = writeln!(out, "  Name: {}", customer.full_name());
        let _ = writeln!(out, "  Tier: {}", customer.tier());
        let _ = writeln!(out, "  ID: {}", customer.id());
        let _ = writeln!(out, "  Discount Rate: {}", customer.tier().discount_rate());
    }

    let _ = writeln!(out, "\n{thin}");
    let _ = writeln!(out, "ITEMS PURCHASED:");
    let _ = writeln!(out, "{thin}");
    for (i, line) in transaction.lines().iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, line_entry(line));
    }

    let _ = writeln!(out, "{thin}");
    let _ = writeln!(out, "FINANCIAL BREAKDOWN:");
    let _ = writeln!(out, "{thin}");

    if let Some(totals) = transaction.totals() {
        let gross = transaction
            .lines()
            .iter()
            .fold(core_kernel::Money::zero(transaction.currency()), |acc, l| {
                acc + l.gross()
            });
        let _ = writeln!(out, "Items Gross: {}", gross.round_to_currency());
        if totals.total_discount.is_positive() {
            let _ = writeln!(
                out,
                "Total Discounts: -{}",
                totals.total_discount.round_to_currency()
            );
        }
        if transaction.points_used() > rust_decimal::Decimal::ZERO {
            let _ = writeln!(
                out,
                "Loyalty Points Used: {}",
                transaction.points_used().normalize()
            );
        }
        let _ = writeln!(out, "Subtotal: {}", totals.subtotal.round_to_currency());
        let _ = writeln!(out, "Tax: {}", totals.tax.round_to_currency());
        let _ = writeln!(
            out,
            "FINAL TOTAL: {}",
            totals.final_total.round_to_currency()
        );
    }

    if let Some(payment) = transaction.payment() {
        let _ = writeln!(out, "\n{thin}");
        let _ = writeln!(out, "PAYMENT INFORMATION:");
        let _ = writeln!(out, "{thin}");
        let _ = writeln!(out, "Payment Method: {}", payment.method);
        let _ = writeln!(
            out,
            "Amount Paid: {}",
            payment.amount_paid.round_to_currency()
        );
        if payment.change.is_positive() {
            let _ = writeln!(out, "Change: {}", payment.change.round_to_currency());
        }
    }

    if let Some(customer) = customer {
        if transaction.points_earned() > rust_decimal::Decimal::ZERO {
            let _ = writeln!(out, "\nLOYALTY PROGRAM:");
            let _ = writeln!(
                out,
                "Points Earned: {}",
                transaction.points_earned().round_dp(4).normalize()
            );
            let _ = writeln!(
                out,
                "Current Points Balance: {}",
                customer.loyalty_points().round_dp(4).normalize()
            );
        }
    }

    if let Some(note) = transaction.note() {
        let _ = writeln!(out, "\nTransaction Notes: {}", note);
    }

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{}",
        center("Thank you for shopping with us!", DETAILED_WIDTH)
    );
    let _ = writeln!(out, "{rule}");
    out
}
