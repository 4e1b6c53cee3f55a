use clap::Parser;
use serde::Serialize;
use url::Url;

#[derive(Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub enum Command {
    /// List the job objects owned by the connected account
    Jobs(JobsConfig),
    /// Build a create_job transaction and print it for an external signer
    CreateJob(CreateJobConfig),
}

#[derive(Clone, Parser, Serialize)]
pub struct BaseConfig {
    /// Fullnode JSON-RPC URL
    #[arg(
        long,
        env = "FULLNODE_URL",
        default_value = "https://fullnode.testnet.sui.io:443"
    )]
    pub fullnode_url: String,

    /// Package id of the deployed job_market module
    #[arg(long, env = "PACKAGE_ID")]
    pub package_id: String,

    /// Address of the connected account
    #[arg(long, env = "ACCOUNT")]
    pub account: Option<String>,
}

impl BaseConfig {
    pub fn fullnode_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.fullnode_url)
    }
}

#[derive(Clone, Parser, Serialize)]
pub struct JobsConfig {
    #[clap(flatten)]
    pub base: BaseConfig,
}

#[derive(Clone, Parser, Serialize)]
pub struct CreateJobConfig {
    #[clap(flatten)]
    pub base: BaseConfig,

    /// Address of the freelancer assigned to the job
    #[arg(long)]
    pub freelancer: String,

    /// URL of the off-chain job description
    #[arg(long)]
    pub description_url: String,

    /// Price in SUI
    #[arg(long)]
    pub price: String,

    /// Deadline, as days from now
    #[arg(long)]
    pub duration_days: String,
}
