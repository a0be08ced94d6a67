use crate::error::InvalidPurchase;
use serde::Serialize;
use std::fmt;

/// Identifier of the account a purchase is charged to.
///
/// Always strictly positive; the only way to build one from raw input is
/// through [`AccountId::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AccountId(u64);

impl AccountId {
    pub fn parse(raw: Option<i64>) -> Result<Self, InvalidPurchase> {
        let value = raw.ok_or(InvalidPurchase::AccountIdRequired)?;
        u64::try_from(value)
            .ok()
            .filter(|v| *v > 0)
            .map(Self)
            .ok_or(InvalidPurchase::InvalidAccountId)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = InvalidPurchase;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::parse(Some(value))
    }
}

impl From<AccountId> for u64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_validation() {
        assert_eq!(AccountId::parse(Some(23)).unwrap().value(), 23);
        assert_eq!(
            AccountId::parse(None),
            Err(InvalidPurchase::AccountIdRequired)
        );
        assert_eq!(
            AccountId::parse(Some(0)),
            Err(InvalidPurchase::InvalidAccountId)
        );
        assert_eq!(
            AccountId::parse(Some(-7)),
            Err(InvalidPurchase::InvalidAccountId)
        );
    }

    #[test]
    fn test_account_id_upper_bound() {
        let id = AccountId::try_from(i64::MAX).unwrap();
        assert_eq!(u64::from(id), i64::MAX as u64);
    }
}
