//! RPC interface for the token lock.

use std::marker::PhantomData;
use std::sync::Arc;

use jsonrpsee::{core::RpcResult, proc_macros::rpc};
use pallet_token_lock::{api::TokenLockApi as TokenLockRuntimeApi, types::LockInfo};
use serde::{de::DeserializeOwned, Serialize};
use sp_api::{codec::Codec, BlockT, Decode, ProvideRuntimeApi};
use sp_blockchain::HeaderBackend;

mod error;

pub use error::{api_error_code, Error};

/// The API exposed via JSON-RPC.
#[rpc(server)]
pub trait TokenLock<BlockHash, AssetId, AccountId, Balance, Moment> {
    /// Get the lock engaged for the given asset and beneficiary, if any.
    #[method(name = "tokenLock_getLockInfo")]
    fn lock_info(
        &self,
        asset: AssetId,
        beneficiary: AccountId,
        at: Option<BlockHash>,
    ) -> RpcResult<Option<LockInfo<AccountId, Balance, Moment>>>;

    /// Get the account that holds the locked funds in custody.
    #[method(name = "tokenLock_custodyAccountId")]
    fn custody_account_id(&self, at: Option<BlockHash>) -> RpcResult<AccountId>;
}

/// The RPC implementation.
pub struct TokenLock<Client, Block> {
    /// The substrate client, provides access to the runtime APIs.
    client: Arc<Client>,
    /// The phantom types.
    phantom_types: PhantomData<Block>,
}

impl<Client, Block> TokenLock<Client, Block> {
    /// Create a new [`TokenLock`] API implementation.
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            client,
            phantom_types: PhantomData,
        }
    }
}

impl<Client, Block> TokenLock<Client, Block>
where
    Block: BlockT,
    Client: HeaderBackend<Block>,
{
    /// Resolve the block to run the query at, falling back to the best block.
    fn at(&self, at: Option<Block::Hash>) -> Block::Hash {
        at.unwrap_or_else(|| self.client.info().best_hash)
    }
}

impl<Client, Block, AssetId, AccountId, Balance, Moment>
    TokenLockServer<Block::Hash, AssetId, AccountId, Balance, Moment> for TokenLock<Client, Block>
where
    Block: BlockT,

    Client: Send + Sync + 'static,
    Client: HeaderBackend<Block>,
    Client: ProvideRuntimeApi<Block>,
    Client::Api: TokenLockRuntimeApi<Block, AssetId, AccountId, Balance, Moment>,

    AssetId: Codec + DeserializeOwned + Send + Sync + 'static,
    AccountId: Codec + Serialize + DeserializeOwned + Send + Sync + 'static,
    Balance: Decode + Serialize + Send + Sync + 'static,
    Moment: Decode + Serialize + Send + Sync + 'static,
{
    fn lock_info(
        &self,
        asset: AssetId,
        beneficiary: AccountId,
        at: Option<Block::Hash>,
    ) -> RpcResult<Option<LockInfo<AccountId, Balance, Moment>>> {
        let at = self.at(at);

        let lock_info = self
            .client
            .runtime_api()
            .lock_info(at, asset, beneficiary)
            .map_err(|err| {
                tracing::error!(message = "Unable to get lock info from the runtime", ?err);
                Error::LockInfo(err)
            })?;

        Ok(lock_info)
    }

    fn custody_account_id(&self, at: Option<Block::Hash>) -> RpcResult<AccountId> {
        let at = self.at(at);

        let custody_account_id = self
            .client
            .runtime_api()
            .custody_account_id(at)
            .map_err(|err| {
                tracing::error!(
                    message = "Unable to get custody account id from the runtime",
                    ?err
                );
                Error::CustodyAccountId(err)
            })?;

        Ok(custody_account_id)
    }
}
