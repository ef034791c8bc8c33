//! Customer directory arena
//!
//! The directory owns every [`Customer`]; transactions hold
//! [`CustomerId`]s and borrow accounts through it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use core_kernel::{CustomerId, Money};

use crate::customer::{Customer, CustomerTier};
use crate::error::CustomerError;

/// In-memory customer directory
#[derive(Debug, Default)]
pub struct CustomerDirectory {
    customers: HashMap<CustomerId, Customer>,
    currency: Option<core_kernel::Currency>,
}

/// Aggregate numbers for the customer statistics report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryStatistics {
    pub total_customers: usize,
    pub total_spending: Option<Money>,
    pub average_spending: Option<Money>,
    pub tier_counts: Vec<(CustomerTier, usize)>,
    pub top_customers: Vec<(String, Money)>,
}

impl CustomerDirectory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a customer account
    pub fn insert(&mut self, customer: Customer) -> Result<CustomerId, CustomerError> {
        let id = customer.id();
        if self.customers.contains_key(&id) {
            return Err(CustomerError::DuplicateCustomer(customer.full_name()));
        }
        self.currency
            .get_or_insert(customer.total_spent().currency());
        tracing::debug!(customer = %customer.full_name(), %id, "customer registered");
        self.customers.insert(id, customer);
        Ok(id)
    }

    /// Looks up a customer
    pub fn get(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(&id)
    }

    /// Looks up a customer for mutation
    pub fn get_mut(&mut self, id: CustomerId) -> Option<&mut Customer> {
        self.customers.get_mut(&id)
    }

    /// Finds a customer by exact email address
    pub fn find_by_email(&self, email: &str) -> Option<&Customer> {
        self.customers.values().find(|c| c.email() == Some(email))
    }

    /// Finds a customer by exact phone number
    pub fn find_by_phone(&self, phone: &str) -> Option<&Customer> {
        self.customers.values().find(|c| c.phone() == Some(phone))
    }

    /// Iterates all customers, sorted by name for stable listings
    pub fn iter(&self) -> Vec<&Customer> {
        let mut all: Vec<&Customer> = self.customers.values().collect();
        all.sort_by_key(|c| c.full_name());
        all
    }

    /// Customers in the given tier
    pub fn by_tier(&self, tier: CustomerTier) -> Vec<&Customer> {
        self.iter()
            .into_iter()
            .filter(|c| c.tier() == tier)
            .collect()
    }

    /// The `count` biggest spenders, highest first
    pub fn top_spenders(&self, count: usize) -> Vec<&Customer> {
        let mut all: Vec<&Customer> = self.customers.values().collect();
        all.sort_by(|a, b| b.total_spent().amount().cmp(&a.total_spent().amount()));
        all.truncate(count);
        all
    }

    /// Number of registered customers
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// True when no customers are registered
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Combined lifetime spending across all customers
    pub fn total_spending(&self) -> Option<Money> {
        let currency = self.currency?;
        Some(
            self.customers
                .values()
                .fold(Money::zero(currency), |acc, c| acc + c.total_spent()),
        )
    }

    /// Aggregate numbers for the customer statistics report
    pub fn statistics(&self) -> DirectoryStatistics {
        let total_spending = self.total_spending();
        let average_spending = match (total_spending, self.len()) {
            (Some(total), n) if n > 0 => total.divide(rust_decimal::Decimal::from(n as u64)).ok(),
            _ => None,
        };

        DirectoryStatistics {
            total_customers: self.len(),
            total_spending,
            average_spending,
            tier_counts: CustomerTier::ALL
                .into_iter()
                .map(|tier| (tier, self.by_tier(tier).len()))
                .collect(),
            top_customers: self
                .top_spenders(3)
                .into_iter()
                .map(|c| (c.full_name(), c.total_spent()))
                .collect(),
        }
    }
}
