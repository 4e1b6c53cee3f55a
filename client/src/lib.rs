//! Client for the `job_market` Move module: queries owned job objects over
//! Sui JSON-RPC, maps them into the [`job_market`](job_market) domain model,
//! and builds/submits `create_job` transactions through a pluggable
//! sign-and-execute capability.

pub mod adapter;
pub mod cli;
pub mod env;
pub mod error;
pub mod rpc;
pub mod tx;
pub mod types;

pub use adapter::{JobMarketClient, NoSigner, ObjectStore, TransactionSigner, TransactionResult};
pub use error::{AdapterError, MalformedObject, QueryError, SubmissionError};
