use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    pub denom: String,
    pub amount: BigUint,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BalanceSetError {
    #[error("Denom `{denom}` is already present in the balance set")]
    DuplicateDenom { denom: String },
}

/// Balances keyed by denom, kept in the order they were inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceSet {
    balances: Vec<Balance>,
    positions: HashMap<String, usize>,
}

impl BalanceSet {
    pub fn insert(&mut self, denom: String, amount: BigUint) -> Result<(), BalanceSetError> {
        if self.positions.contains_key(&denom) {
            return Err(BalanceSetError::DuplicateDenom { denom });
        }
        self.positions.insert(denom.clone(), self.balances.len());
        self.balances.push(Balance { denom, amount });
        Ok(())
    }

    pub fn get(&self, denom: &str) -> Option<&BigUint> {
        self.positions
            .get(denom)
            .map(|&idx| &self.balances[idx].amount)
    }

    /// True when the set is empty or every amount in it is zero.
    pub fn is_zero(&self) -> bool {
        self.balances.iter().all(|balance| balance.amount.is_zero())
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Balance> {
        self.balances.iter()
    }
}

impl<'a> IntoIterator for &'a BalanceSet {
    type Item = &'a Balance;
    type IntoIter = std::slice::Iter<'a, Balance>;

    fn into_iter(self) -> Self::IntoIter {
        self.balances.iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub address: String,
    pub balances: BalanceSet,
}

impl Account {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            balances: BalanceSet::default(),
        }
    }
}
