use txfetch_test_utils::fixtures::eth::factory::{
    mock_contract_creation, mock_transfer, MOCK_CONTRACT, MOCK_RECIPIENT, MOCK_TRANSFER_VALUE,
};

use super::*;

fn rlp_hex(hashes: &[&str]) -> String {
    let items: Vec<String> = hashes.iter().map(|h| h.to_string()).collect();
    hex::encode(rlp::encode_list::<String, String>(&items))
}

mod get_transactions {
    use super::*;

    /// Expect stored and fetched transactions in one camelCase response
    #[tokio::test]
    async fn resolves_repeated_query_parameters() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let stored = mock_transfer(0, 0);
        let fetched = mock_transfer(1, 2);
        test.eth().insert_mock_transaction(&stored.hash).await?;
        let endpoints = test.eth().create_transaction_endpoints(&fetched, 1);

        let uri = format!(
            "/api/eth?transactionHashes={}&transactionHashes={}",
            fetched.hash, stored.hash
        );
        let (status, body) = send(app(&test), get(&uri)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response_hashes(&body), vec![stored.hash, fetched.hash.clone()]);
        let record = &body["transactions"][1];
        assert_eq!(record["transactionStatus"], 1);
        assert_eq!(record["from"], fetched.from.as_str());
        assert_eq!(record["to"], MOCK_RECIPIENT);
        assert_eq!(record["contractAddress"], Value::Null);
        assert_eq!(record["logsCount"], 2);
        assert_eq!(record["input"], "0x");
        assert_eq!(record["value"], MOCK_TRANSFER_VALUE);
        for endpoint in endpoints {
            endpoint.assert();
        }

        Ok(())
    }

    /// Expect every stored transaction when no hashes are requested
    #[tokio::test]
    async fn lists_stored_without_hashes() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        test.eth().insert_mock_transaction("0x01").await?;
        test.eth().insert_mock_transaction("0x02").await?;

        let (status, body) = send(app(&test), get("/api/eth")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response_hashes(&body).len(), 2);

        Ok(())
    }

    /// Expect unresolvable hashes to be left out rather than failing the request
    #[tokio::test]
    async fn omits_unresolvable_hashes() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;

        let (status, body) = send(app(&test), get("/api/eth?transactionHashes=hash1")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(response_hashes(&body).is_empty());

        Ok(())
    }
}

mod get_transactions_by_rlp {
    use super::*;

    /// Expect every hash in the RLP list to be resolved
    #[tokio::test]
    async fn resolves_rlp_hash_list() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let transfer = mock_transfer(0, 0);
        let creation = mock_contract_creation(1);
        let _transfer = test.eth().create_transaction_endpoints(&transfer, 1);
        let _creation = test.eth().create_transaction_endpoints(&creation, 1);

        let uri = format!("/api/eth/0x{}", rlp_hex(&[&transfer.hash, &creation.hash]));
        let (status, body) = send(app(&test), get(&uri)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            response_hashes(&body),
            vec![transfer.hash.clone(), creation.hash.clone()]
        );
        assert_eq!(body["transactions"][1]["contractAddress"], MOCK_CONTRACT);
        assert_eq!(body["transactions"][1]["to"], Value::Null);

        Ok(())
    }

    /// Expect 400 for a path that is not hex encoded RLP
    #[tokio::test]
    async fn rejects_malformed_rlp() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;

        let (status, body) = send(app(&test), get("/api/eth/zz")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("bad request"));

        Ok(())
    }

    /// Expect 400 for an empty RLP list
    #[tokio::test]
    async fn rejects_empty_hash_list() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;

        let uri = format!("/api/eth/{}", rlp_hex(&[]));
        let (status, body) = send(app(&test), get(&uri)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "bad request: at least one transaction hash is required"
        );

        Ok(())
    }
}

mod get_all_transactions {
    use super::*;

    /// Expect every stored transaction
    #[tokio::test]
    async fn lists_stored_transactions() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        test.eth().insert_mock_transaction("0x01").await?;

        let (status, body) = send(app(&test), get("/api/all")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response_hashes(&body), vec!["0x01"]);

        Ok(())
    }

    /// Expect 500 with a generic message when the database cannot be queried
    #[tokio::test]
    async fn fails_when_tables_missing() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let (status, body) = send(app(&test), get("/api/all")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");

        Ok(())
    }
}
