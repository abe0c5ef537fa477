
use txfetch_test_utils::prelude::*;

use crate::server::eth::EthClient;

/// Creates a client pointed at the setup's mock node.
fn eth_client(test: &TestSetup) -> EthClient {
    EthClient::from(test.state.provider.clone())
}
