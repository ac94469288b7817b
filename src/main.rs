//! Command line entry point: download one Kaggle dataset with an API token.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::Result;
use kdataset::fetcher::DEFAULT_ENDPOINT;
use kdataset::{Credentials, DownloadRequest, FetcherBuilder};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// This simple software lets you download datasets from Kaggle using your
/// credentials (API Token).
#[derive(Debug, Parser)]
#[command(name = "kdataset", version, about)]
struct Args {
    /// Kaggle URL
    url: String,

    /// Kaggle user
    user: String,

    /// Your API Token
    key: String,

    /// The filepath
    filepath: Option<PathBuf>,

    /// Enable check MD5
    #[arg(
        long = "check-md5",
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    check_md5: bool,

    /// Enable verbose
    #[arg(
        short,
        long,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    verbose: bool,

    /// Root URL of the dataset service
    #[arg(long, default_value = DEFAULT_ENDPOINT, hide = true)]
    endpoint: String,
}

impl Args {
    fn request(&self) -> DownloadRequest {
        let request = DownloadRequest::new(&self.url, Credentials::new(&self.user, &self.key))
            .check_md5(self.check_md5);
        match self.filepath {
            Some(ref filepath) => request.filepath(filepath),
            None => request,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Parse CLI arguments first, so --help works without logs.
    let args = Args::parse();

    // RUST_LOG wins over the verbose flag.
    let default_level = if args.verbose { "kdataset=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let request = args.request();
    debug!(?request, "CLI arguments parsed");

    let fetcher = FetcherBuilder::new().endpoint(&args.endpoint).build();
    let summary = match fetcher.download(&request).await {
        Ok(summary) => summary,
        Err(e) => {
            println!("downloading failed");
            return Err(e.into());
        }
    };

    if let Some(verdict) = summary.outcome().verdict() {
        println!("{}", verdict);
    }

    if summary.is_success() {
        println!("downloading successfully.");
    } else {
        println!("downloading failed");
    }

    Ok(())
}
