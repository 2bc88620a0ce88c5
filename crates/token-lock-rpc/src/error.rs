//! The token lock RPC errors.

use jsonrpsee::{
    core::Error as JsonRpseeError,
    types::{error::CallError, ErrorObject},
};
use sp_api::ApiError;

/// Custom rpc error codes.
pub mod api_error_code {
    /// Call to runtime api has failed.
    pub const RUNTIME_API: i32 = 300;
}

/// The token lock RPC error kinds.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error that can occur during the lock info runtime api call.
    #[error("unable to get lock info from the runtime: {0}")]
    LockInfo(ApiError),
    /// An error that can occur during the custody account id runtime api call.
    #[error("unable to get custody account id from the runtime: {0}")]
    CustodyAccountId(ApiError),
}

impl Error {
    /// The rpc error code of this error.
    pub fn code(&self) -> i32 {
        match self {
            Self::LockInfo(_) | Self::CustodyAccountId(_) => api_error_code::RUNTIME_API,
        }
    }
}

impl From<Error> for JsonRpseeError {
    fn from(err: Error) -> Self {
        let error_object = ErrorObject::owned(err.code(), err.to_string(), None::<()>);
        JsonRpseeError::Call(CallError::Custom(error_object))
    }
}
