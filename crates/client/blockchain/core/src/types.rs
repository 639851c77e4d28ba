//! Common types for wallet and contract interactions.

use std::fmt;

/// Numeric network identifier reported by the connected provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The network every chain call must run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredNetwork {
    pub chain_id: ChainId,

    /// Human-readable name shown to the user (e.g., "Rinkeby")
    pub name: String,
}

impl RequiredNetwork {
    pub fn new(chain_id: u64, name: impl Into<String>) -> Self {
        Self {
            chain_id: ChainId(chain_id),
            name: name.into(),
        }
    }
}

/// Account address in its textual form.
///
/// Backends render addresses differently (checksummed, lowercase), so
/// equality between two addresses is case-insensitive.
#[derive(Debug, Clone, Eq)]
pub struct AccountAddress(String);

impl AccountAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for narrow displays: `0x1234…abcd`.
    pub fn short(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 12 {
            return self.0.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}…{tail}")
    }
}

impl PartialEq for AccountAddress {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Amount of the chain's native currency in its smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Wei(pub u128);

/// Number of fractional digits in one ether.
pub const ETHER_DECIMALS: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Empty amount")]
    Empty,

    #[error("Invalid digit in amount: {0}")]
    InvalidDigit(String),

    #[error("Too many decimal places: {0} (max 18)")]
    TooPrecise(usize),

    #[error("Amount overflows: {0}")]
    Overflow(String),
}

impl Wei {
    /// Parses a decimal ether amount such as `"0.01"`.
    pub fn from_ether_str(amount: &str) -> Result<Self, AmountError> {
        let amount = amount.trim();
        if amount.is_empty() {
            return Err(AmountError::Empty);
        }

        let (whole, fraction) = match amount.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (amount, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(AmountError::Empty);
        }
        if fraction.len() > ETHER_DECIMALS as usize {
            return Err(AmountError::TooPrecise(fraction.len()));
        }
        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return Err(AmountError::InvalidDigit(amount.to_string()));
        }

        let overflow = || AmountError::Overflow(amount.to_string());
        let unit = 10u128.pow(ETHER_DECIMALS);

        let whole_wei = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<u128>()
                .map_err(|_| overflow())?
                .checked_mul(unit)
                .ok_or_else(overflow)?
        };

        let fraction_wei = if fraction.is_empty() {
            0
        } else {
            let scale = 10u128.pow(ETHER_DECIMALS - fraction.len() as u32);
            fraction.parse::<u128>().map_err(|_| overflow())? * scale
        };

        whole_wei
            .checked_add(fraction_wei)
            .map(Wei)
            .ok_or_else(overflow)
    }

    pub fn as_u128(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = 10u128.pow(ETHER_DECIMALS);
        let whole = self.0 / unit;
        let fraction = self.0 % unit;
        if fraction == 0 {
            return write!(f, "{whole} ETH");
        }
        let digits = format!("{:018}", fraction);
        write!(f, "{whole}.{} ETH", digits.trim_end_matches('0'))
    }
}

/// Generic transaction identifier (hash in its textual form).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transaction status on the blockchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionStatus {
    /// Transaction is confirmed on-chain
    Confirmed { block_height: u64 },

    /// Transaction was included but reverted
    Failed { error: String },
}

/// Outcome of a submitted and awaited transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReceipt {
    pub transaction_id: TransactionId,
    pub status: TransactionStatus,
    pub gas_used: u64,
}

impl TxReceipt {
    pub fn is_success(&self) -> bool {
        matches!(self.status, TransactionStatus::Confirmed { .. })
    }
}

/// Blockchain-specific configuration.
///
/// This is a trait to allow different blockchains to provide their own config types.
pub trait BlockchainConfig: Send + Sync {
    /// Human-readable network name (e.g., "rinkeby", "sepolia")
    fn network_name(&self) -> &str;

    /// RPC endpoint URL
    fn rpc_url(&self) -> &str;

    /// Validate configuration (e.g., check credentials, URL format)
    fn validate(&self) -> Result<(), String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mint_price() {
        assert_eq!(Wei::from_ether_str("0.01").unwrap(), Wei(10_000_000_000_000_000));
        assert_eq!(Wei::from_ether_str("1").unwrap(), Wei(10u128.pow(18)));
        assert_eq!(Wei::from_ether_str(".5").unwrap(), Wei(5 * 10u128.pow(17)));
    }

    #[test]
    fn rejects_malformed_amounts() {
        assert_eq!(Wei::from_ether_str(""), Err(AmountError::Empty));
        assert_eq!(Wei::from_ether_str("."), Err(AmountError::Empty));
        assert!(matches!(
            Wei::from_ether_str("0.0x"),
            Err(AmountError::InvalidDigit(_))
        ));
        assert!(matches!(
            Wei::from_ether_str("0.0000000000000000001"),
            Err(AmountError::TooPrecise(19))
        ));
    }

    #[test]
    fn displays_wei_as_ether() {
        assert_eq!(Wei(10_000_000_000_000_000).to_string(), "0.01 ETH");
        assert_eq!(Wei(2 * 10u128.pow(18)).to_string(), "2 ETH");
    }

    #[test]
    fn address_equality_ignores_case() {
        let checksummed = AccountAddress::new("0xAbCdEf0123456789aBcDeF0123456789AbCdEf01");
        let lower = AccountAddress::new("0xabcdef0123456789abcdef0123456789abcdef01");
        assert_eq!(checksummed, lower);
        assert_ne!(
            lower,
            AccountAddress::new("0xabcdef0123456789abcdef0123456789abcdef02")
        );
    }

    #[test]
    fn shortens_long_addresses() {
        let address = AccountAddress::new("0xabcdef0123456789abcdef0123456789abcdef01");
        assert_eq!(address.short(), "0xabcd…ef01");
    }

    #[test]
    fn shortens_on_char_boundaries() {
        let address = AccountAddress::new("0xäöüäöüäöüäöüäöü");
        assert_eq!(address.short(), "0xäöüä…üäöü");
        assert_eq!(AccountAddress::new("0xé").short(), "0xé");
    }
}
