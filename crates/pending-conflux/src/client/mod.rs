use std::time::Duration;

use jsonrpsee::http_client::HttpClient;
use jsonrpsee::proc_macros::rpc;
use tracing::instrument;

use crate::math::{parse_drip, Drip};
use crate::types::{AccountPendingTransactions, NodeStatus, PendingSummary};
use crate::values::decode_quantity;
use crate::{Address, Error};

/// Read-only subset of the `cfx` namespace
#[rpc(client, namespace = "cfx")]
pub trait ConfluxApi {
    #[method(name = "getAccountPendingTransactions")]
    async fn get_account_pending_transactions(&self, address: String) -> jsonrpsee::core::RpcResult<AccountPendingTransactions>;

    #[method(name = "getNextNonce")]
    async fn get_next_nonce(&self, address: String) -> jsonrpsee::core::RpcResult<String>;

    #[method(name = "getBalance")]
    async fn get_balance(&self, address: String) -> jsonrpsee::core::RpcResult<String>;

    #[method(name = "getStatus")]
    async fn get_status(&self) -> jsonrpsee::core::RpcResult<NodeStatus>;
}

#[derive(Clone)]
pub struct RpcClient(HttpClient);

impl RpcClient {
    pub fn new(endpoint: &str, timeout: u64) -> Result<Self, Error> {
        HttpClient::builder()
            .request_timeout(Duration::from_secs(timeout))
            .build(endpoint)
            .map(Self)
            .map_err(|e| Error::Internal(format!("invalid endpoint {}: {}", endpoint, e)))
    }

    #[instrument(name = "cfx_getAccountPendingTransactions", skip(self, address))]
    pub async fn fetch_pending_summary(&self, address: &Address) -> Result<PendingSummary, Error> {
        let response = self.0.get_account_pending_transactions(address.to_string()).await?;

        PendingSummary::try_from(response)
    }

    #[instrument(name = "cfx_getNextNonce", skip(self, address))]
    pub async fn fetch_next_nonce(&self, address: &Address) -> Result<u64, Error> {
        let nonce = self.0.get_next_nonce(address.to_string()).await?;

        decode_quantity(&nonce)
    }

    #[instrument(name = "cfx_getBalance", skip(self, address))]
    pub async fn fetch_balance(&self, address: &Address) -> Result<Drip, Error> {
        let balance = self.0.get_balance(address.to_string()).await?;

        parse_drip(&balance)
    }

    #[instrument(name = "cfx_getStatus", skip(self))]
    pub async fn fetch_status(&self) -> Result<NodeStatus, Error> {
        Ok(self.0.get_status().await?)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_json::{json, Value};
    use wiremock::matchers::method;
    use wiremock::{Match, Mock, MockServer, Request, Respond, ResponseTemplate};

    use crate::math::BigUint;
    use crate::types::TransactionStatus;
    use crate::{Address, Client, Configuration, Error, Network};

    const ADDRESS: &str = "cfxtest:aajg4wt2mbmbb44sp6szd783ry0jtad5bemzfdf83g";
    const HASH: &str = "0x4f5b5bbf22a7bbf2cb2e3eed5e0ae56bf3bd3c4a3c4a9b5e2c0f1d8bd16a5d3e";

    /// Match JSON-RPC requests calling `method`
    struct RpcMethod(&'static str);

    impl Match for RpcMethod {
        fn matches(&self, request: &Request) -> bool {
            serde_json::from_slice::<Value>(&request.body)
                .map(|body| body["method"] == self.0)
                .unwrap_or(false)
        }
    }

    /// Answer with the given JSON-RPC result, or error object, echoing the request id
    enum RpcResponse {
        Result(Value),
        Error(i32, &'static str),
    }

    impl Respond for RpcResponse {
        fn respond(&self, request: &Request) -> ResponseTemplate {
            let body: Value = serde_json::from_slice(&request.body).unwrap();
            let response = match self {
                Self::Result(result) => json!({ "jsonrpc": "2.0", "id": body["id"], "result": result }),
                Self::Error(code, message) => json!({ "jsonrpc": "2.0", "id": body["id"], "error": { "code": code, "message": message } }),
            };

            ResponseTemplate::new(200).set_body_json(response)
        }
    }

    async fn mount(server: &MockServer, rpc_method: &'static str, response: RpcResponse) {
        Mock::given(method("POST"))
            .and(RpcMethod(rpc_method))
            .respond_with(response)
            .mount(server)
            .await;
    }

    fn client(server: &MockServer) -> Client {
        Client::new(&Configuration {
            network: Network::Testnet,
            endpoint: server.uri(),
            timeout: 5,
        })
        .unwrap()
    }

    fn address() -> Address {
        Address::from_str(ADDRESS).unwrap()
    }

    #[tokio::test]
    async fn fetch_pending_summary_decodes_response() {
        let server = MockServer::start().await;
        mount(
            &server,
            "cfx_getAccountPendingTransactions",
            RpcResponse::Result(json!({
                "pendingCount": "0x1",
                "pendingTransactions": [{ "hash": HASH, "nonce": "0x7" }],
                "firstTxStatus": { "pending": "futureNonce" }
            })),
        )
        .await;

        let summary = client(&server).fetch_pending_summary(&address()).await.unwrap();

        assert_eq!(summary.pending_count, 1);
        assert_eq!(summary.first_tx_status, Some(TransactionStatus::PendingFutureNonce));
        assert_eq!(summary.pending_transactions[0].hash, HASH);
    }

    #[tokio::test]
    async fn requests_use_canonical_address() {
        let server = MockServer::start().await;
        mount(&server, "cfx_getNextNonce", RpcResponse::Result(json!("0x5"))).await;

        let uppercase = Address::from_str(&ADDRESS.to_uppercase()).unwrap();
        let nonce = client(&server).fetch_next_nonce(&uppercase).await.unwrap();
        assert_eq!(nonce, 5);

        let requests = server.received_requests().await.unwrap();
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["params"], json!([ADDRESS]));
    }

    #[tokio::test]
    async fn fetch_balance_returns_drip() {
        let server = MockServer::start().await;
        mount(&server, "cfx_getBalance", RpcResponse::Result(json!("0x14d1120d7b160000"))).await;

        let balance = client(&server).fetch_balance(&address()).await.unwrap();

        assert_eq!(balance, BigUint::from(1_500_000_000_000_000_000u64));
    }

    #[tokio::test]
    async fn node_errors_are_reported() {
        let server = MockServer::start().await;
        mount(&server, "cfx_getBalance", RpcResponse::Error(-32602, "Invalid params")).await;

        let result = client(&server).fetch_balance(&address()).await;

        assert!(matches!(result, Err(Error::Node { code: -32602, .. })));
    }

    #[tokio::test]
    async fn unknown_status_is_unclassified() {
        let server = MockServer::start().await;
        mount(
            &server,
            "cfx_getAccountPendingTransactions",
            RpcResponse::Result(json!({
                "pendingCount": "0x1",
                "pendingTransactions": [{ "hash": HASH, "nonce": "0x7" }],
                "firstTxStatus": { "pending": "oldEpochHeight" }
            })),
        )
        .await;

        let result = client(&server).fetch_pending_summary(&address()).await;

        assert!(matches!(result, Err(Error::UnclassifiedStatus(_))));
    }

    #[tokio::test]
    async fn malformed_nonce_is_rejected() {
        let server = MockServer::start().await;
        mount(&server, "cfx_getNextNonce", RpcResponse::Result(json!("five"))).await;

        let result = client(&server).fetch_next_nonce(&address()).await;

        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_rpc_error() {
        let server = MockServer::start().await;
        let client = client(&server);
        drop(server);

        let result = client.fetch_next_nonce(&address()).await;

        assert!(matches!(result, Err(Error::Rpc(_))));
    }

    #[tokio::test]
    async fn verify_network_detects_mismatch() {
        let server = MockServer::start().await;
        mount(
            &server,
            "cfx_getStatus",
            RpcResponse::Result(json!({
                "networkId": "0x405",
                "chainId": "0x405",
                "epochNumber": "0x6c4b2f0",
                "bestHash": HASH
            })),
        )
        .await;

        let result = client(&server).verify_network().await;

        assert!(matches!(result, Err(Error::NetworkMismatch { expected: 1, actual: 1029 })));
    }

    #[tokio::test]
    async fn verify_network_accepts_matching_node() {
        let server = MockServer::start().await;
        mount(
            &server,
            "cfx_getStatus",
            RpcResponse::Result(json!({ "networkId": "0x1", "chainId": "0x1", "epochNumber": "0x10" })),
        )
        .await;

        let status = client(&server).verify_network().await.unwrap();

        assert_eq!(status.epoch_number, 16);
    }
}
