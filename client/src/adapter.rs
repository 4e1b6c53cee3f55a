use crate::{
    error::{AdapterError, MalformedObject, QueryError, SubmissionError},
    tx::{Argument, CallTarget, Transaction, TransactionBuilder, CLOCK_OBJECT_ID},
    types::ObjectResponse,
};
use async_trait::async_trait;
use job_market::{days_to_ms, sui_to_mist, Job, JobStatus};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tracing::{error, info, warn};

pub const JOB_MODULE: &str = "job_market";
pub const JOB_STRUCT: &str = "JobObject";
pub const CREATE_JOB_FUNCTION: &str = "create_job";

/// Read access to on-chain objects owned by an address.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn owned_objects(
        &self,
        owner: &str,
        struct_type: &str,
    ) -> Result<Vec<ObjectResponse>, QueryError>;
}

/// The external wallet capability that signs and executes a built
/// transaction. This client trusts it and returns its result unmodified.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    async fn sign_and_execute(
        &self,
        transaction: Transaction,
    ) -> Result<TransactionResult, SubmissionError>;
}

#[async_trait]
impl<T: ObjectStore + ?Sized> ObjectStore for &T {
    async fn owned_objects(
        &self,
        owner: &str,
        struct_type: &str,
    ) -> Result<Vec<ObjectResponse>, QueryError> {
        (**self).owned_objects(owner, struct_type).await
    }
}

#[async_trait]
impl<T: TransactionSigner + ?Sized> TransactionSigner for &T {
    async fn sign_and_execute(
        &self,
        transaction: Transaction,
    ) -> Result<TransactionResult, SubmissionError> {
        (**self).sign_and_execute(transaction).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    pub digest: String,
}

/// Placeholder signer for read-only deployments; rejects every submission.
pub struct NoSigner;

#[async_trait]
impl TransactionSigner for NoSigner {
    async fn sign_and_execute(
        &self,
        _transaction: Transaction,
    ) -> Result<TransactionResult, SubmissionError> {
        Err(SubmissionError::Rejected(
            "no signing capability attached".to_string(),
        ))
    }
}

/// Adapter between a caller and the `job_market` module, scoped to one
/// connected account (or none, in which case reads are empty and writes
/// fail with [`AdapterError::NotConnected`]).
pub struct JobMarketClient<S, X> {
    package_id: String,
    account: Option<String>,
    store: S,
    signer: X,
    fetching: AtomicBool,
    creating: AtomicBool,
    dropped: AtomicU64,
}

/// Loading-flag guard; lowers the flag on every exit path.
struct Flag<'a>(&'a AtomicBool);

impl<'a> Flag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for Flag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<S, X> JobMarketClient<S, X> {
    pub fn new(
        package_id: impl Into<String>,
        account: Option<String>,
        store: S,
        signer: X,
    ) -> Self {
        Self {
            package_id: package_id.into(),
            account,
            store,
            signer,
            fetching: AtomicBool::new(false),
            creating: AtomicBool::new(false),
            dropped: AtomicU64::new(0),
        }
    }

    pub fn connected_address(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching.load(Ordering::SeqCst)
    }

    pub fn is_creating(&self) -> bool {
        self.creating.load(Ordering::SeqCst)
    }

    /// Number of queried objects dropped by the malformed-object policy
    /// since this client was constructed.
    pub fn dropped_objects(&self) -> u64 {
        self.dropped.load(Ordering::SeqCst)
    }

    fn job_object_type(&self) -> String {
        format!("{}::{}::{}", self.package_id, JOB_MODULE, JOB_STRUCT)
    }

    /// Validate, convert, and build the `create_job` transaction without
    /// submitting it: split the payment out of the gas coin, then call the
    /// entry point with its ABI-ordered arguments.
    pub fn build_create_job(
        &self,
        freelancer: &str,
        description_url: &str,
        price: &str,
        duration_days: &str,
    ) -> Result<Transaction, AdapterError> {
        if self.account.is_none() {
            return Err(AdapterError::NotConnected);
        }
        for (name, value) in [
            ("freelancer", freelancer),
            ("description_url", description_url),
            ("price", price),
            ("duration_days", duration_days),
        ] {
            if value.trim().is_empty() {
                return Err(AdapterError::MissingField(name));
            }
        }
        let price_mist = sui_to_mist(price)?;
        let duration_ms = days_to_ms(duration_days)?;

        let mut tx = TransactionBuilder::new();
        let amount = tx.pure_u64(price_mist);
        let payment = tx.split_coins(Argument::GasCoin, vec![amount]);
        let freelancer = tx.pure_address(freelancer);
        let description_url = tx.pure_string(description_url);
        let price = tx.pure_u64(price_mist);
        let duration = tx.pure_u64(duration_ms);
        let clock = tx.object(CLOCK_OBJECT_ID);
        tx.move_call(
            CallTarget {
                package: self.package_id.clone(),
                module: JOB_MODULE.to_string(),
                function: CREATE_JOB_FUNCTION.to_string(),
            },
            // Argument order is part of the contract ABI.
            vec![freelancer, description_url, price, duration, payment, clock],
        );
        Ok(tx.finish())
    }
}

impl<S: ObjectStore, X> JobMarketClient<S, X> {
    /// Fetch all job objects owned by the connected account.
    ///
    /// Fail-soft read path: with no connected account this returns an empty
    /// vec without touching the store; query failures are logged and also
    /// yield an empty vec; individual objects that don't parse are dropped
    /// and counted. Result order is whatever the store returned and is not
    /// guaranteed stable across calls. Overlapping calls run independently.
    pub async fn fetch_jobs(&self) -> Vec<Job> {
        let Some(owner) = self.account.as_deref() else {
            return Vec::new();
        };
        let _flag = Flag::raise(&self.fetching);
        match self.store.owned_objects(owner, &self.job_object_type()).await {
            Ok(objects) => objects
                .iter()
                .filter_map(|object| match map_object(object) {
                    Ok(job) => Some(job),
                    Err(err) => {
                        self.dropped.fetch_add(1, Ordering::SeqCst);
                        warn!("dropping malformed job object: {err}");
                        None
                    }
                })
                .collect(),
            Err(err) => {
                error!("error fetching jobs: {err}");
                Vec::new()
            }
        }
    }
}

impl<S, X: TransactionSigner> JobMarketClient<S, X> {
    /// Create a job: escrow `price` SUI for `freelancer` with a deadline
    /// `duration_days` from now.
    ///
    /// Fail-loud write path: connection, validation, and conversion failures
    /// abort before any network interaction; submission failures are logged
    /// and returned to the caller.
    pub async fn create_job(
        &self,
        freelancer: &str,
        description_url: &str,
        price: &str,
        duration_days: &str,
    ) -> Result<TransactionResult, AdapterError> {
        if self.account.is_none() {
            return Err(AdapterError::NotConnected);
        }
        let _flag = Flag::raise(&self.creating);
        let tx = self
            .build_create_job(freelancer, description_url, price, duration_days)
            .inspect_err(|err| error!("error building create_job transaction: {err}"))?;
        match self.signer.sign_and_execute(tx).await {
            Ok(result) => {
                info!("create_job submitted, digest {}", result.digest);
                Ok(result)
            }
            Err(err) => {
                error!("error creating job: {err}");
                Err(AdapterError::Submission(err))
            }
        }
    }
}

/// On-chain field layout of a `JobObject`, as rendered by the RPC (u64s as
/// strings, object id nested under `id.id`).
#[derive(Debug, Deserialize)]
struct JobFields {
    id: ObjectUid,
    employer: String,
    freelancer: String,
    description_url: String,
    price: String,
    status: u8,
    deadline: String,
}

#[derive(Debug, Deserialize)]
struct ObjectUid {
    id: String,
}

fn map_object(response: &ObjectResponse) -> Result<Job, MalformedObject> {
    let data = response.data.as_ref().ok_or(MalformedObject::MissingData)?;
    let content = data
        .content
        .as_ref()
        .ok_or_else(|| MalformedObject::MissingContent(data.object_id.clone()))?;
    let fields: JobFields = serde_json::from_value(content.fields.clone())?;
    let price = fields
        .price
        .parse()
        .map_err(|_| MalformedObject::NotNumeric("price"))?;
    let deadline = fields
        .deadline
        .parse()
        .map_err(|_| MalformedObject::NotNumeric("deadline"))?;
    Ok(Job {
        id: fields.id.id,
        employer: fields.employer,
        freelancer: fields.freelancer,
        description_url: fields.description_url,
        price,
        status: JobStatus::from_code(fields.status),
        deadline,
        company: None,
        title: None,
    })
}
