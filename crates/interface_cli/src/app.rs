//! Store application: menu loop and flows
//!
//! One `StoreApp` owns the catalog, the customer directory, the session's
//! transaction history, and the clock. Menus read from and write to injected
//! handles, so the whole interface runs scripted in tests.

use std::io::{BufRead, Write};

use anyhow::Result;
use rust_decimal::Decimal;

use core_kernel::{Clock, Money, ProductId, Rate, SystemClock};
use domain_catalog::{Catalog, Product, ProductCategory};
use domain_customer::{Customer, CustomerDirectory, CustomerTier};
use domain_sales::{
    render_detailed_receipt, render_receipt, PaymentMethod, Transaction, TransactionStatus,
};

use crate::config::StoreConfig;
use crate::input::{prompt_line, prompt_optional, prompt_parse};
use crate::reports;
use crate::seed;

/// The interactive store application
pub struct StoreApp {
    config: StoreConfig,
    catalog: Catalog,
    directory: CustomerDirectory,
    transactions: Vec<Transaction>,
    clock: Box<dyn Clock>,
}

impl StoreApp {
    /// Creates an empty store running on the system clock
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            catalog: Catalog::new(),
            directory: CustomerDirectory::new(),
            transactions: Vec::new(),
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the clock (tests pin the calendar here)
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Stocks the shelves and registers the demo customers
    pub fn seed_demo_data(&mut self) {
        seed::seed_demo_data(
            &mut self.catalog,
            &mut self.directory,
            self.config.currency,
            self.clock.today(),
        );
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn directory(&self) -> &CustomerDirectory {
        &self.directory
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Runs the main menu loop until the operator exits
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        writeln!(output, "Welcome to {}!", self.config.store_name)?;
        loop {
            let rule = "=".repeat(50);
            writeln!(output, "\n{rule}")?;
            writeln!(output, "{:^50}", self.config.store_name)?;
            writeln!(output, "{rule}")?;
            writeln!(output, "1. Inventory Management")?;
            writeln!(output, "2. Customer Management")?;
            writeln!(output, "3. Sales & Transactions")?;
            writeln!(output, "4. Reports & Analytics")?;
            writeln!(output, "5. Settings")?;
            writeln!(output, "0. Exit")?;
            writeln!(output, "{rule}")?;

            match prompt_parse::<u32, _, _>(input, output, "Choose an option: ")? {
                1 => self.inventory_menu(input, output)?,
                2 => self.customer_menu(input, output)?,
                3 => self.sales_menu(input, output)?,
                4 => self.reports_menu(input, output)?,
                5 => self.settings_menu(input, output)?,
                0 => {
                    writeln!(output, "Thank you for using {}!", self.config.store_name)?;
                    return Ok(());
                }
                _ => writeln!(output, "Invalid choice! Please try again.")?,
            }
        }
    }

    // Inventory management

    fn inventory_menu<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        loop {
            writeln!(output, "\n--- INVENTORY MANAGEMENT ---")?;
            writeln!(output, "1. View All Products")?;
            writeln!(output, "2. Add New Product")?;
            writeln!(output, "3. Search Products")?;
            writeln!(output, "4. Restock Product")?;
            writeln!(output, "5. Low Stock Alert")?;
            writeln!(output, "6. Inventory Report")?;
            writeln!(output, "0. Back to Main Menu")?;

            match prompt_parse::<u32, _, _>(input, output, "Choose an option: ")? {
                1 => self.list_products(output)?,
                2 => self.add_product_flow(input, output)?,
                3 => {
                    let term = prompt_line(input, output, "Search term: ")?;
                    let matches = self.catalog.find_by_name(&term);
                    if matches.is_empty() {
                        writeln!(output, "No products match '{term}'.")?;
                    }
                    for product in matches {
                        self.print_product_line(output, product)?;
                    }
                }
                4 => self.restock_flow(input, output)?,
                5 => write!(output, "{}", reports::low_stock_report(&self.catalog))?,
                6 => write!(
                    output,
                    "{}",
                    reports::inventory_report(&self.catalog, self.clock.today())
                )?,
                0 => return Ok(()),
                _ => writeln!(output, "Invalid choice!")?,
            }
        }
    }

    fn list_products<W: Write>(&self, output: &mut W) -> Result<()> {
        if self.catalog.is_empty() {
            writeln!(output, "No products in inventory.")?;
            return Ok(());
        }
        for product in self.catalog.iter() {
            self.print_product_line(output, product)?;
        }
        Ok(())
    }

    fn print_product_line<W: Write>(&self, output: &mut W, product: &Product) -> Result<()> {
        let today = self.clock.today();
        let mut line = format!(
            "{} | {} | Price: {} | Stock: {} | {}",
            product.barcode(),
            product.name(),
            product.selling_price(today).round_to_currency(),
            product.current_stock(),
            product.category(),
        );
        if product.is_low_stock() {
            line.push_str(" [LOW STOCK]");
        }
        if !product.is_active() {
            line.push_str(" [INACTIVE]");
        }
        writeln!(output, "{line}")?;
        Ok(())
    }

    fn add_product_flow<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        writeln!(output, "\n--- ADD NEW PRODUCT ---")?;
        let name = prompt_line(input, output, "Product Name: ")?;
        if name.is_empty() {
            writeln!(output, "Name must not be empty.")?;
            return Ok(());
        }

        let price = Money::new(
            prompt_parse::<Decimal, _, _>(input, output, "Selling Price: $")?,
            self.config.currency,
        );
        let cost = Money::new(
            prompt_parse::<Decimal, _, _>(input, output, "Cost Price: $")?,
            self.config.currency,
        );
        let stock = prompt_parse::<u32, _, _>(input, output, "Initial Stock: ")?;
        let min_stock = prompt_parse::<u32, _, _>(input, output, "Minimum Stock Level: ")?;
        let max_stock = prompt_parse::<u32, _, _>(input, output, "Maximum Stock Level: ")?;
        let supplier: Option<String> = prompt_optional(input, output, "Supplier (blank for none): ")?;

        writeln!(output, "\nCategory:")?;
        for (i, category) in ProductCategory::ALL.iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, category)?;
        }
        let category = loop {
            let n = prompt_parse::<usize, _, _>(input, output, "Choose category: ")?;
            if (1..=ProductCategory::ALL.len()).contains(&n) {
                break ProductCategory::ALL[n - 1];
            }
            writeln!(output, "Invalid category.")?;
        };

        writeln!(output, "\nProduct Type:")?;
        writeln!(output, "1. Standard Product")?;
        writeln!(output, "2. Perishable Product")?;
        writeln!(output, "3. Bulk Product")?;
        let product = loop {
            match prompt_parse::<u32, _, _>(input, output, "Choose type: ")? {
                1 => {
                    let markup =
                        prompt_parse::<Decimal, _, _>(input, output, "Markup fraction (e.g. 0.3): ")?;
                    break Product::standard(name, price, cost, stock, category, Rate::new(markup));
                }
                2 => {
                    let days =
                        prompt_parse::<i64, _, _>(input, output, "Days until expiration: ")?;
                    let shelf_life =
                        prompt_parse::<u32, _, _>(input, output, "Shelf life (days): ")?;
                    let discount = prompt_parse::<Decimal, _, _>(
                        input,
                        output,
                        "Near-expiry discount fraction (e.g. 0.2): ",
                    )?;
                    break Product::perishable(
                        name,
                        price,
                        cost,
                        stock,
                        category,
                        self.clock.today() + chrono::Duration::days(days),
                        shelf_life,
                        Rate::new(discount),
                    );
                }
                3 => {
                    let unit = prompt_line(input, output, "Unit (kg, liters, ...): ")?;
                    let min_qty =
                        prompt_parse::<Decimal, _, _>(input, output, "Minimum quantity: ")?;
                    break Product::bulk(name, price, cost, stock, category, unit, min_qty);
                }
                _ => writeln!(output, "Invalid type.")?,
            }
        };

        let mut product = product.with_stock_levels(min_stock, max_stock);
        if let Some(supplier) = supplier {
            product = product.with_supplier(supplier);
        }

        match self.catalog.insert(product) {
            Ok(_) => writeln!(output, "Product added.")?,
            Err(err) => writeln!(output, "Could not add product: {err}")?,
        }
        Ok(())
    }

    fn restock_flow<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let Some(product_id) = self.select_product(input, output)? else {
            return Ok(());
        };
        let quantity = prompt_parse::<u32, _, _>(input, output, "Quantity to add: ")?;
        if let Some(product) = self.catalog.get_mut(product_id) {
            product.add_stock(quantity);
            writeln!(
                output,
                "{} now has {} in stock.",
                product.name(),
                product.current_stock()
            )?;
        }
        Ok(())
    }

    /// Lists products and reads a 1-based pick; 0 cancels
    fn select_product<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Option<ProductId>> {
        let products = self.catalog.iter();
        if products.is_empty() {
            writeln!(output, "No products in inventory.")?;
            return Ok(None);
        }
        for (i, product) in products.iter().enumerate() {
            write!(output, "{}. ", i + 1)?;
            self.print_product_line(output, product)?;
        }
        loop {
            let n = prompt_parse::<usize, _, _>(input, output, "Select product (0 to cancel): ")?;
            if n == 0 {
                return Ok(None);
            }
            if let Some(product) = products.get(n - 1) {
                return Ok(Some(product.id()));
            }
            writeln!(output, "Invalid selection.")?;
        }
    }

    // Customer management

    fn customer_menu<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        loop {
            writeln!(output, "\n--- CUSTOMER MANAGEMENT ---")?;
            writeln!(output, "1. View All Customers")?;
            writeln!(output, "2. Add New Customer")?;
            writeln!(output, "3. Find Customer by Email")?;
            writeln!(output, "4. Customer Statistics")?;
            writeln!(output, "0. Back to Main Menu")?;

            match prompt_parse::<u32, _, _>(input, output, "Choose an option: ")? {
                1 => {
                    for customer in self.directory.iter() {
                        self.print_customer_line(output, customer)?;
                    }
                }
                2 => self.add_customer_flow(input, output)?,
                3 => {
                    let email = prompt_line(input, output, "Email: ")?;
                    match self.directory.find_by_email(&email) {
                        Some(customer) => self.print_customer_details(output, customer)?,
                        None => writeln!(output, "No customer with email '{email}'.")?,
                    }
                }
                4 => write!(output, "{}", reports::customer_report(&self.directory))?,
                0 => return Ok(()),
                _ => writeln!(output, "Invalid choice!")?,
            }
        }
    }

    fn print_customer_line<W: Write>(&self, output: &mut W, customer: &Customer) -> Result<()> {
        writeln!(
            output,
            "{} | {} | Spent: {} | Points: {}",
            customer.full_name(),
            customer.tier(),
            customer.total_spent().round_to_currency(),
            customer.loyalty_points().round_dp(2).normalize(),
        )?;
        Ok(())
    }

    fn print_customer_details<W: Write>(&self, output: &mut W, customer: &Customer) -> Result<()> {
        writeln!(output, "ID: {}", customer.id())?;
        writeln!(output, "Name: {}", customer.full_name())?;
        if let Some(email) = customer.email() {
            writeln!(output, "Email: {email}")?;
        }
        if let Some(phone) = customer.phone() {
            writeln!(output, "Phone: {phone}")?;
        }
        writeln!(output, "Tier: {}", customer.tier())?;
        writeln!(output, "Discount Rate: {}", customer.tier().discount_rate())?;
        writeln!(
            output,
            "Total Spent: {}",
            customer.total_spent().round_to_currency()
        )?;
        writeln!(output, "Transactions: {}", customer.transaction_count())?;
        writeln!(
            output,
            "Loyalty Points: {}",
            customer.loyalty_points().round_dp(2).normalize()
        )?;
        writeln!(output, "Member Since: {}", customer.member_since())?;
        if customer.upgrade_eligible() {
            writeln!(output, "Eligible for membership upgrade!")?;
        }
        Ok(())
    }

    fn add_customer_flow<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        writeln!(output, "\n--- ADD NEW CUSTOMER ---")?;
        let first = prompt_line(input, output, "First Name: ")?;
        let last = prompt_line(input, output, "Last Name: ")?;
        if first.is_empty() || last.is_empty() {
            writeln!(output, "Name must not be empty.")?;
            return Ok(());
        }

        writeln!(output, "Tier:")?;
        for (i, tier) in CustomerTier::ALL.iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, tier)?;
        }
        let tier = loop {
            let n = prompt_parse::<usize, _, _>(input, output, "Choose tier: ")?;
            if (1..=CustomerTier::ALL.len()).contains(&n) {
                break CustomerTier::ALL[n - 1];
            }
            writeln!(output, "Invalid tier.")?;
        };

        let email: Option<String> = prompt_optional(input, output, "Email (blank for none): ")?;
        let phone: Option<String> = prompt_optional(input, output, "Phone (blank for none): ")?;

        let mut customer = Customer::new(
            first,
            last,
            tier,
            self.config.currency,
            self.clock.today(),
        );
        customer.set_email(email);
        customer.set_phone(phone);

        match self.directory.insert(customer) {
            Ok(_) => writeln!(output, "Customer registered.")?,
            Err(err) => writeln!(output, "Could not register customer: {err}")?,
        }
        Ok(())
    }

    // Sales

    fn sales_menu<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            writeln!(output, "\n--- SALES & TRANSACTIONS ---")?;
            writeln!(output, "1. New Sale")?;
            writeln!(output, "2. Process Refund")?;
            writeln!(output, "3. Transaction History")?;
            writeln!(output, "0. Back to Main Menu")?;

            match prompt_parse::<u32, _, _>(input, output, "Choose an option: ")? {
                1 => self.sale_flow(input, output)?,
                2 => self.refund_flow(input, output)?,
                3 => {
                    if self.transactions.is_empty() {
                        writeln!(output, "No transactions yet.")?;
                    }
                    for transaction in &self.transactions {
                        let total = transaction
                            .totals()
                            .map(|t| t.final_total.round_to_currency().to_string())
                            .unwrap_or_else(|| "-".to_string());
                        writeln!(
                            output,
                            "{} | {} | {}",
                            transaction.id(),
                            transaction.status(),
                            total
                        )?;
                    }
                }
                0 => return Ok(()),
                _ => writeln!(output, "Invalid choice!")?,
            }
        }
    }

    fn sale_flow<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let today = self.clock.today();

        let customer_id = match prompt_optional::<String, _, _>(
            input,
            output,
            "Customer email (blank for walk-in): ",
        )? {
            Some(email) => match self.directory.find_by_email(&email) {
                Some(customer) => {
                    writeln!(
                        output,
                        "Customer: {} ({}), {} points available",
                        customer.full_name(),
                        customer.tier(),
                        customer.loyalty_points().round_dp(2).normalize()
                    )?;
                    Some(customer.id())
                }
                None => {
                    writeln!(output, "Unknown email; continuing as walk-in sale.")?;
                    None
                }
            },
            None => None,
        };

        let mut transaction = Transaction::new(
            self.config.currency,
            customer_id,
            self.config.cashier_id.clone(),
        );

        loop {
            let Some(product_id) = self.select_product(input, output)? else {
                break;
            };
            let quantity = prompt_parse::<Decimal, _, _>(input, output, "Quantity: ")?;
            let discount = prompt_optional::<Decimal, _, _>(
                input,
                output,
                "Line discount fraction (blank for none): ",
            )?
            .map(Rate::new)
            .unwrap_or(Rate::ZERO);

            match transaction.add_line(&self.catalog, product_id, quantity, discount, None, today)
            {
                Ok(()) => writeln!(output, "Item added.")?,
                Err(err) => writeln!(output, "Could not add item: {err}")?,
            }

            let more = prompt_line(input, output, "Add another item? (y/n): ")?;
            if !more.eq_ignore_ascii_case("y") {
                break;
            }
        }

        if transaction.lines().is_empty() {
            transaction.cancel().ok();
            self.transactions.push(transaction);
            writeln!(output, "Sale abandoned: no items.")?;
            return Ok(());
        }

        if let Some(customer_id) = customer_id {
            if let Some(points) = prompt_optional::<Decimal, _, _>(
                input,
                output,
                "Loyalty points to apply (blank for none): ",
            )? {
                if let Some(customer) = self.directory.get(customer_id) {
                    match transaction.apply_loyalty_points(customer, points) {
                        Ok(()) => writeln!(output, "Points reserved.")?,
                        Err(err) => writeln!(output, "Could not apply points: {err}")?,
                    }
                }
            }
        }

        let customer = customer_id.and_then(|id| self.directory.get(id));
        let totals = match transaction.compute_totals(customer, Rate::new(self.config.tax_rate)) {
            Ok(totals) => totals,
            Err(err) => {
                writeln!(output, "Could not compute totals: {err}")?;
                transaction.cancel().ok();
                self.transactions.push(transaction);
                return Ok(());
            }
        };

        writeln!(output, "\nSubtotal: {}", totals.subtotal.round_to_currency())?;
        if totals.total_discount.is_positive() {
            writeln!(
                output,
                "Discount: -{}",
                totals.total_discount.round_to_currency()
            )?;
        }
        writeln!(output, "Tax: {}", totals.tax.round_to_currency())?;
        writeln!(output, "TOTAL: {}", totals.final_total.round_to_currency())?;

        writeln!(output, "\nPayment Method:")?;
        for (i, method) in PaymentMethod::ALL.iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, method)?;
        }
        loop {
            let n = prompt_parse::<usize, _, _>(input, output, "Choose method (0 to cancel): ")?;
            if n == 0 {
                transaction.cancel().ok();
                self.transactions.push(transaction);
                writeln!(output, "Sale cancelled.")?;
                return Ok(());
            }
            let Some(&method) = PaymentMethod::ALL.get(n - 1) else {
                writeln!(output, "Invalid method.")?;
                continue;
            };
            let tendered = if method == PaymentMethod::Cash {
                Money::new(
                    prompt_parse::<Decimal, _, _>(input, output, "Amount tendered: $")?,
                    self.config.currency,
                )
            } else {
                totals.final_total
            };
            match transaction.process_payment(method, tendered) {
                Ok(()) => break,
                Err(err) => writeln!(output, "Payment failed: {err}")?,
            }
        }

        match transaction.finalize(&mut self.catalog, &mut self.directory) {
            Ok(()) => {
                let customer = customer_id.and_then(|id| self.directory.get(id));
                write!(
                    output,
                    "\n{}",
                    render_receipt(&self.config.store_name, &transaction, customer)
                )?;
            }
            Err(err) => {
                writeln!(output, "Could not finalize sale: {err}")?;
                transaction.cancel().ok();
            }
        }
        self.transactions.push(transaction);
        Ok(())
    }

    fn refund_flow<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let refundable: Vec<usize> = self
            .transactions
            .iter()
            .enumerate()
            .filter(|(_, t)| t.status() == TransactionStatus::Completed)
            .map(|(i, _)| i)
            .collect();

        if refundable.is_empty() {
            writeln!(output, "No completed transactions to refund.")?;
            return Ok(());
        }

        for (menu_index, &i) in refundable.iter().enumerate() {
            let transaction = &self.transactions[i];
            let total = transaction
                .totals()
                .map(|t| t.final_total.round_to_currency().to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(output, "{}. {} | {}", menu_index + 1, transaction.id(), total)?;
        }

        let picked = loop {
            let n = prompt_parse::<usize, _, _>(input, output, "Select transaction (0 to cancel): ")?;
            if n == 0 {
                return Ok(());
            }
            if let Some(&i) = refundable.get(n - 1) {
                break i;
            }
            writeln!(output, "Invalid selection.")?;
        };

        let amount = prompt_optional::<Decimal, _, _>(
            input,
            output,
            "Refund amount (blank for full refund): $",
        )?
        .map(|amount| Money::new(amount, self.config.currency));

        let transaction = &mut self.transactions[picked];
        match transaction.refund(&mut self.catalog, &mut self.directory, amount) {
            Ok(refunded) => writeln!(
                output,
                "Refunded {} ({}).",
                refunded.round_to_currency(),
                transaction.status()
            )?,
            Err(err) => writeln!(output, "Refund failed: {err}")?,
        }
        Ok(())
    }

    // Reports

    fn reports_menu<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            writeln!(output, "\n--- REPORTS & ANALYTICS ---")?;
            writeln!(output, "1. Inventory Report")?;
            writeln!(output, "2. Low Stock Report")?;
            writeln!(output, "3. Customer Statistics")?;
            writeln!(output, "4. Sales Summary")?;
            writeln!(output, "5. Financial Summary")?;
            writeln!(output, "6. Detailed Receipt Lookup")?;
            writeln!(output, "0. Back to Main Menu")?;

            match prompt_parse::<u32, _, _>(input, output, "Choose an option: ")? {
                1 => write!(
                    output,
                    "{}",
                    reports::inventory_report(&self.catalog, self.clock.today())
                )?,
                2 => write!(output, "{}", reports::low_stock_report(&self.catalog))?,
                3 => write!(output, "{}", reports::customer_report(&self.directory))?,
                4 => write!(output, "{}", reports::sales_report(&self.transactions))?,
                5 => write!(
                    output,
                    "{}",
                    reports::financial_summary(
                        &self.catalog,
                        &self.directory,
                        &self.transactions,
                        self.clock.today()
                    )
                )?,
                6 => {
                    if self.transactions.is_empty() {
                        writeln!(output, "No transactions yet.")?;
                        continue;
                    }
                    for (i, transaction) in self.transactions.iter().enumerate() {
                        writeln!(
                            output,
                            "{}. {} | {}",
                            i + 1,
                            transaction.id(),
                            transaction.status()
                        )?;
                    }
                    let n =
                        prompt_parse::<usize, _, _>(input, output, "Select transaction (0 to cancel): ")?;
                    if n == 0 || n > self.transactions.len() {
                        continue;
                    }
                    let transaction = &self.transactions[n - 1];
                    let customer = transaction
                        .customer_id()
                        .and_then(|id| self.directory.get(id));
                    write!(
                        output,
                        "{}",
                        render_detailed_receipt(&self.config.store_name, transaction, customer)
                    )?;
                }
                0 => return Ok(()),
                _ => writeln!(output, "Invalid choice!")?,
            }
        }
    }

    // Settings

    fn settings_menu<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        loop {
            writeln!(output, "\n--- SETTINGS ---")?;
            writeln!(output, "1. Change Cashier ID")?;
            writeln!(output, "2. System Information")?;
            writeln!(output, "0. Back to Main Menu")?;

            match prompt_parse::<u32, _, _>(input, output, "Choose an option: ")? {
                1 => {
                    writeln!(output, "Current Cashier ID: {}", self.config.cashier_id)?;
                    let id = prompt_line(input, output, "New Cashier ID: ")?;
                    if id.is_empty() {
                        writeln!(output, "Cashier ID unchanged.")?;
                    } else {
                        self.config.cashier_id = id;
                        writeln!(output, "Cashier ID updated to: {}", self.config.cashier_id)?;
                    }
                }
                2 => {
                    writeln!(output, "\n--- SYSTEM INFORMATION ---")?;
                    writeln!(output, "Store: {}", self.config.store_name)?;
                    writeln!(output, "Current Cashier: {}", self.config.cashier_id)?;
                    writeln!(output, "Tax Rate: {}", Rate::new(self.config.tax_rate))?;
                    writeln!(output, "Products in System: {}", self.catalog.len())?;
                    writeln!(output, "Customers in System: {}", self.directory.len())?;
                    writeln!(output, "Total Transactions: {}", self.transactions.len())?;
                }
                0 => return Ok(()),
                _ => writeln!(output, "Invalid choice!")?,
            }
        }
    }
}
