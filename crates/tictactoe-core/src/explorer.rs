//! Block-explorer links for the chains the app is deployed on.

use alloy_primitives::{Address, TxHash};

/// Base URL of the block explorer for `chain_id`, if the chain is known.
pub fn explorer_base(chain_id: u64) -> Option<&'static str> {
    let base = match chain_id {
        1 => "https://etherscan.io",
        5 => "https://goerli.etherscan.io",
        10 => "https://optimistic.etherscan.io",
        56 => "https://bscscan.com",
        97 => "https://testnet.bscscan.com",
        137 => "https://polygonscan.com",
        8453 => "https://basescan.org",
        42161 => "https://arbiscan.io",
        43114 => "https://snowtrace.io",
        80001 => "https://mumbai.polygonscan.com",
        80002 => "https://amoy.polygonscan.com",
        11155111 => "https://sepolia.etherscan.io",
        _ => return None,
    };
    Some(base)
}

/// Explorer page for an account or contract.
pub fn address_link(address: &Address, chain_id: u64) -> Option<String> {
    explorer_base(chain_id).map(|base| format!("{base}/address/{}", address.to_checksum(None)))
}

/// Explorer page for a transaction.
pub fn transaction_link(hash: &TxHash, chain_id: u64) -> Option<String> {
    explorer_base(chain_id).map(|base| format!("{base}/tx/{hash}"))
}
