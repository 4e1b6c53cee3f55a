//! Domain model for the on-chain job market: the [`Job`](job::Job) snapshot
//! entity, its status taxonomy, and the pure display/unit conversions the
//! client layers build on. No I/O lives here.

pub mod convert;
pub mod format;
pub mod job;

pub use convert::{days_to_ms, mist_to_sui, sui_to_mist, ConversionError, MIST_PER_SUI, MS_PER_DAY};
pub use format::{format_address, format_timestamp};
pub use job::{Job, JobStatus, StatusStyle};
