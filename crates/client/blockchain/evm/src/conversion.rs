//! Conversions between alloy primitives and the chain-agnostic domain types.

use alloy::primitives::{Address, U256};
use alloy::rpc::types::TransactionReceipt;
use client_blockchain_core::{
    AccountAddress, ContractError, TransactionId, TransactionStatus, TxReceipt, Wei,
};

/// Render an address in its EIP-55 checksummed form.
pub fn address_to_account(address: Address) -> AccountAddress {
    AccountAddress::new(address.to_checksum(None))
}

/// Narrow a `uint256` return value to `u64`.
pub fn u256_to_u64(method: &'static str, value: U256) -> Result<u64, ContractError> {
    u64::try_from(value).map_err(|_| ContractError::DecodeFailed {
        method,
        reason: format!("{} does not fit in 64 bits", value),
    })
}

pub fn wei_to_u256(value: Wei) -> U256 {
    U256::from(value.as_u128())
}

/// Convert a mined receipt, reading its success flag explicitly.
pub fn receipt_to_domain(receipt: &TransactionReceipt) -> TxReceipt {
    let status = if receipt.status() {
        TransactionStatus::Confirmed {
            block_height: receipt.block_number.unwrap_or_default(),
        }
    } else {
        TransactionStatus::Failed {
            error: "execution reverted".to_string(),
        }
    };

    TxReceipt {
        transaction_id: TransactionId::new(receipt.transaction_hash.to_string()),
        status,
        gas_used: u64::try_from(receipt.gas_used).unwrap_or(u64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrows_small_values() {
        assert_eq!(u256_to_u64("tokenIds", U256::from(20u64)).unwrap(), 20);
    }

    #[test]
    fn rejects_oversized_values() {
        let err = u256_to_u64("presaleEnded", U256::MAX).unwrap_err();
        assert!(matches!(
            err,
            ContractError::DecodeFailed {
                method: "presaleEnded",
                ..
            }
        ));
    }

    #[test]
    fn wei_survives_conversion() {
        let price = Wei(10_000_000_000_000_000);
        assert_eq!(wei_to_u256(price), U256::from(10_000_000_000_000_000u128));
    }

    #[test]
    fn addresses_compare_across_case() {
        let address = Address::repeat_byte(0xab);
        let account = address_to_account(address);
        assert_eq!(
            account,
            AccountAddress::new("0xabababababababababababababababababababab")
        );
    }
}
