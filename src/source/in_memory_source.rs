use crate::{
    account::{Account, BalanceSet, BalanceSetError},
    amount::parse_amount,
};

use super::{BalanceSource, RefreshError};

/// Balance source backed by raw `(denom, amount)` pairs held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBalanceSource {
    account: Account,
    staged: Vec<(String, String)>,
}

impl InMemoryBalanceSource {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            account: Account::new(name, address),
            staged: Vec::new(),
        }
    }

    /// Stages a raw balance; it becomes visible after the next refresh.
    pub fn stage(&mut self, denom: impl Into<String>, amount: impl Into<String>) {
        self.staged.push((denom.into(), amount.into()));
    }
}

impl BalanceSource for InMemoryBalanceSource {
    fn refresh(&mut self) -> Result<(), RefreshError> {
        let mut balances = BalanceSet::default();
        for (denom, raw) in &self.staged {
            let amount = parse_amount(raw).map_err(|source| RefreshError::InvalidAmount {
                account: self.account.name.clone(),
                denom: denom.clone(),
                source,
            })?;
            balances.insert(denom.clone(), amount).map_err(
                |BalanceSetError::DuplicateDenom { denom }| RefreshError::DuplicateDenom {
                    account: self.account.name.clone(),
                    denom,
                },
            )?;
        }
        self.account.balances = balances;
        Ok(())
    }

    fn account(&self) -> &Account {
        &self.account
    }
}

#[cfg(test)]
mod tests {
    use crate::amount::AmountError;

    use super::*;

    #[test]
    fn refresh_populates_balances() {
        let mut source = InMemoryBalanceSource::new("whale", "dym1whale");
        source.stage("adym", "1000000000000000000");
        source.stage("uatom", "0042");
        source.stage("uusdc", "340282366920938463463374607431768211456");
        assert!(source.account().balances.is_empty());

        source.refresh().unwrap();
        let acc = source.account();
        assert_eq!(acc.name, "whale");
        assert_eq!(acc.address, "dym1whale");
        assert_eq!(acc.balances.len(), 3);
        assert_eq!(
            acc.balances.get("uatom").map(ToString::to_string),
            Some("42".to_string())
        );
        // above u128::MAX
        assert_eq!(
            acc.balances.get("uusdc").map(ToString::to_string),
            Some("340282366920938463463374607431768211456".to_string())
        );
    }

    #[test]
    fn failed_refresh_keeps_previous_balances() {
        let mut source = InMemoryBalanceSource::new("bot-3", "dym1bot3");
        source.stage("adym", "10");
        source.refresh().unwrap();

        source.stage("uatom", "+1_000");
        let err = source.refresh().unwrap_err();
        assert!(matches!(
            &err,
            RefreshError::InvalidAmount {
                source: AmountError::InvalidDigit { .. },
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Invalid amount for `uatom` on account `bot-3`: Amount `+1_000` contains a non-digit character"
        );
        assert_eq!(source.account().balances.len(), 1);
    }

    #[test]
    fn duplicate_denom_fails_refresh() {
        let mut source = InMemoryBalanceSource::new("bot-1", "dym1bot1");
        source.stage("adym", "1");
        source.stage("adym", "2");
        let err = source.refresh().unwrap_err();
        assert!(matches!(
            &err,
            RefreshError::DuplicateDenom { account, denom } if account == "bot-1" && denom == "adym"
        ));
        assert_eq!(
            err.to_string(),
            "Denom `adym` appears more than once on account `bot-1`"
        );
        assert!(source.account().balances.is_empty());
    }
}
