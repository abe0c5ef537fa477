//! Mock Ethereum JSON-RPC endpoint creation utilities.
//!
//! The node exposes a single POST endpoint; mocks are distinguished by matching the request's
//! `method` and `params` fields. Each mock verifies it was called exactly `expected_requests`
//! times.

use ethers::types::{Transaction, TransactionReceipt};
use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::fixtures::eth::{EthFixtures, MockTransaction};

pub static RECEIPT_METHOD: &str = "eth_getTransactionReceipt";
pub static TRANSACTION_METHOD: &str = "eth_getTransactionByHash";

impl<'a> EthFixtures<'a> {
    /// Create a mock endpoint answering a JSON-RPC call for one transaction hash.
    ///
    /// # Arguments
    /// - `method` - JSON-RPC method name to match
    /// - `hash` - Lowercase transaction hash expected as the only parameter
    /// - `result` - Value returned in the response's `result` field
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_rpc_endpoint(
        &mut self,
        method: &str,
        hash: &str,
        result: Value,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({ "jsonrpc": "2.0", "id": 0, "result": result });

        self.setup
            .server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(
                json!({ "method": method, "params": [hash] }),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint returning a JSON-RPC error for one transaction hash.
    pub fn create_rpc_error_endpoint(
        &mut self,
        method: &str,
        hash: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 0,
            "error": { "code": -32000, "message": "header not found" }
        });

        self.setup
            .server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(
                json!({ "method": method, "params": [hash] }),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `eth_getTransactionReceipt` endpoint, `None` answers with `null`.
    pub fn create_receipt_endpoint(
        &mut self,
        hash: &str,
        receipt: Option<&TransactionReceipt>,
        expected_requests: usize,
    ) -> Mock {
        let result = serde_json::to_value(receipt).unwrap();
        self.create_rpc_endpoint(RECEIPT_METHOD, hash, result, expected_requests)
    }

    /// Create a mock `eth_getTransactionByHash` endpoint, `None` answers with `null`.
    pub fn create_transaction_endpoint(
        &mut self,
        hash: &str,
        transaction: Option<&Transaction>,
        expected_requests: usize,
    ) -> Mock {
        let result = serde_json::to_value(transaction).unwrap();
        self.create_rpc_endpoint(TRANSACTION_METHOD, hash, result, expected_requests)
    }

    /// Create both endpoints needed to fetch `mock` in full.
    ///
    /// # Returns
    /// - `Vec<Mock>` - Receipt and transaction endpoints, in that order
    pub fn create_transaction_endpoints(
        &mut self,
        mock: &MockTransaction,
        expected_requests: usize,
    ) -> Vec<Mock> {
        vec![
            self.create_receipt_endpoint(&mock.hash, Some(&mock.receipt), expected_requests),
            self.create_transaction_endpoint(
                &mock.hash,
                Some(&mock.transaction),
                expected_requests,
            ),
        ]
    }
}
