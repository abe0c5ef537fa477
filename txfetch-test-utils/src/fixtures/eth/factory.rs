//! Factory functions for signed mock transactions and transaction models.

use ethers::{
    signers::{LocalWallet, Signer},
    types::{
        transaction::eip2718::TypedTransaction, Address, Bytes, Log, Transaction,
        TransactionReceipt, TransactionRequest, H256, U256, U64,
    },
    utils::to_checksum,
};

use crate::{
    constant::{TEST_BLOCK_NUMBER, TEST_CHAIN_ID, TEST_PRIVATE_KEY},
    fixtures::eth::MockTransaction,
    model::EthTransactionModel,
};

/// Recipient of mock value transfers.
pub static MOCK_RECIPIENT: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

/// Address of the contract created by [`mock_contract_creation`].
pub static MOCK_CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

/// Value transferred by [`mock_transfer`], 0.05 ether in wei.
pub static MOCK_TRANSFER_VALUE: &str = "50000000000000000";

/// Create the wallet all mock transactions are signed with.
pub fn mock_wallet() -> LocalWallet {
    TEST_PRIVATE_KEY
        .parse::<LocalWallet>()
        .unwrap()
        .with_chain_id(TEST_CHAIN_ID)
}

/// Hash of the block mock transactions are included in.
pub fn mock_block_hash() -> H256 {
    H256::from_low_u64_be(TEST_BLOCK_NUMBER)
}

/// Create a signed value transfer to [`MOCK_RECIPIENT`].
///
/// # Arguments
/// - `nonce` - Sender nonce, distinct nonces produce distinct hashes
/// - `logs` - Number of logs on the receipt
///
/// # Returns
/// - `MockTransaction` - Signed transaction with a successful receipt
pub fn mock_transfer(nonce: u64, logs: usize) -> MockTransaction {
    let recipient: Address = MOCK_RECIPIENT.parse().unwrap();
    let value = U256::from_dec_str(MOCK_TRANSFER_VALUE).unwrap();

    mock_signed(nonce, Some(recipient), value, Bytes::new(), None, logs)
}

/// Create a signed contract deployment creating [`MOCK_CONTRACT`].
pub fn mock_contract_creation(nonce: u64) -> MockTransaction {
    let contract: Address = MOCK_CONTRACT.parse().unwrap();
    let init_code = Bytes::from(vec![0x60, 0x80, 0x60, 0x40, 0x52]);

    mock_signed(nonce, None, U256::zero(), init_code, Some(contract), 1)
}

/// Create a signed transfer whose receipt reports the zero address as created contract.
pub fn mock_transfer_with_zero_contract(nonce: u64) -> MockTransaction {
    let mut mock = mock_transfer(nonce, 0);
    mock.receipt.contract_address = Some(Address::zero());
    mock
}

fn mock_signed(
    nonce: u64,
    to: Option<Address>,
    value: U256,
    input: Bytes,
    contract_address: Option<Address>,
    logs: usize,
) -> MockTransaction {
    let wallet = mock_wallet();
    let gas = U256::from(21_000u64);
    let gas_price = U256::from(1_000_000_000u64);

    let mut request = TransactionRequest::new()
        .from(wallet.address())
        .nonce(nonce)
        .value(value)
        .gas(gas)
        .gas_price(gas_price)
        .data(input.clone())
        .chain_id(TEST_CHAIN_ID);
    if let Some(to) = to {
        request = request.to(to);
    }

    let typed: TypedTransaction = request.into();
    let signature = wallet.sign_transaction_sync(&typed).unwrap();
    let hash = typed.hash(&signature);

    let block_hash = mock_block_hash();
    let block_number = U64::from(TEST_BLOCK_NUMBER);

    let transaction = Transaction {
        hash,
        nonce: nonce.into(),
        block_hash: Some(block_hash),
        block_number: Some(block_number),
        transaction_index: Some(U64::zero()),
        from: wallet.address(),
        to,
        value,
        gas_price: Some(gas_price),
        gas,
        input,
        v: signature.v.into(),
        r: signature.r,
        s: signature.s,
        chain_id: Some(TEST_CHAIN_ID.into()),
        ..Default::default()
    };

    let receipt = TransactionReceipt {
        transaction_hash: hash,
        transaction_index: U64::zero(),
        block_hash: Some(block_hash),
        block_number: Some(block_number),
        from: wallet.address(),
        to,
        cumulative_gas_used: gas,
        gas_used: Some(gas),
        contract_address,
        logs: vec![Log::default(); logs],
        status: Some(U64::one()),
        ..Default::default()
    };

    MockTransaction {
        hash: format!("{:#x}", hash),
        from: to_checksum(&wallet.address(), None),
        transaction,
        receipt,
    }
}

/// Create a transaction database model for testing.
///
/// Returns an in-memory model without database interaction.
///
/// # Arguments
/// - `transaction_hash` - Hash stored as the primary key
///
/// # Returns
/// - `EthTransactionModel` - A transfer record with test data
pub fn mock_transaction_model(transaction_hash: &str) -> EthTransactionModel {
    EthTransactionModel {
        transaction_hash: transaction_hash.to_string(),
        transaction_status: 1,
        block_hash: format!("{:#x}", mock_block_hash()),
        block_number: TEST_BLOCK_NUMBER as i64,
        from_address: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
        to_address: Some(MOCK_RECIPIENT.to_string()),
        contract_address: None,
        logs_count: 0,
        input: "0x".to_string(),
        value: MOCK_TRANSFER_VALUE.to_string(),
    }
}
