use anyhow::Result;
use clap::Parser;
use job_market::{format_address, format_timestamp, mist_to_sui};
use job_market_client::{
    cli::{Command, CreateJobConfig, JobsConfig},
    env::init_console_subscriber,
    rpc::FullNode,
    JobMarketClient, NoSigner,
};
use tracing::{info, warn};

async fn list_jobs(config: JobsConfig) -> Result<()> {
    let store = FullNode::new(config.base.fullnode_url()?)?;
    let client = JobMarketClient::new(
        config.base.package_id.clone(),
        config.base.account.clone(),
        store,
        NoSigner,
    );
    let jobs = client.fetch_jobs().await;
    if jobs.is_empty() {
        println!("no jobs found");
    }
    for job in &jobs {
        println!(
            "{}  {}  employer {}  freelancer {}  {} SUI  deadline {}",
            job.id,
            job.status,
            format_address(&job.employer),
            format_address(&job.freelancer),
            mist_to_sui(job.price),
            format_timestamp(job.deadline as i64),
        );
    }
    if client.dropped_objects() > 0 {
        warn!("skipped {} malformed job objects", client.dropped_objects());
    }
    Ok(())
}

fn build_create_job(config: CreateJobConfig) -> Result<()> {
    let store = FullNode::new(config.base.fullnode_url()?)?;
    let client = JobMarketClient::new(
        config.base.package_id.clone(),
        config.base.account.clone(),
        store,
        NoSigner,
    );
    let tx = client.build_create_job(
        &config.freelancer,
        &config.description_url,
        &config.price,
        &config.duration_days,
    )?;
    println!("{}", serde_json::to_string_pretty(&tx)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_console_subscriber();
    match Command::parse() {
        Command::Jobs(config) => {
            info!("{}", serde_json::to_string_pretty(&config)?);
            list_jobs(config).await
        }
        Command::CreateJob(config) => {
            info!("{}", serde_json::to_string_pretty(&config)?);
            build_create_job(config)
        }
    }
}
