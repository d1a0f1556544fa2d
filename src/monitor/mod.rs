//! Transaction fetching from a Solana JSON-RPC endpoint

mod rpc;

use anyhow::Result;
use solana_client::nonblocking::rpc_client::RpcClient;

use crate::models::RawTransaction;

pub use self::rpc::to_raw_transaction;

/// Default cluster used when none is given
pub const DEFAULT_CLUSTER: &str = "https://api.mainnet-beta.solana.com";

/// Fetches transactions for classification
pub struct Monitor {
    rpc_client: RpcClient,
}

impl Monitor {
    /// Create a new monitor with the given RPC URL
    pub async fn new(rpc_url: &str) -> Result<Self> {
        let rpc_client = RpcClient::new(rpc_url.to_string());

        Ok(Self {
            rpc_client,
        })
    }

    /// URL of the endpoint this monitor talks to
    pub fn url(&self) -> String {
        self.rpc_client.url()
    }

    /// Fetch one transaction by signature, in `jsonParsed` encoding.
    pub async fn get_transaction(&self, signature: &str) -> Result<RawTransaction> {
        Ok(rpc::get_transaction(&self.rpc_client, signature).await?)
    }
}
