use std::path::PathBuf;

use crate::{
    ci_provider::{AppVeyorProvider, CIProviderDetector},
    config::Config,
    logger::init_logger,
    prelude::*,
    uploader::{self, UploadOutcome},
    version::runtime_version_label,
};
use clap::{
    Args, Parser,
    builder::{Styles, styling},
};
use console::style;

fn create_styles() -> Styles {
    styling::Styles::styled()
        .header(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .usage(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .literal(styling::AnsiColor::Magenta.on_default() | styling::Effects::BOLD)
        .placeholder(styling::AnsiColor::Cyan.on_default())
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Upload a coverage report built on AppVeyor to Codecov",
    styles = create_styles()
)]
pub struct Cli {
    #[command(flatten)]
    pub upload_args: UploadArgs,
}

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// The upload URL to use, useful for self-hosted Codecov instances
    #[arg(long, env = "CODECOV_URL")]
    pub upload_url: Option<String>,

    /// The repository upload token. Overrides the one found in the build environment.
    #[arg(long, env = "CODECOV_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Exit with an error when the upload endpoint does not answer 200 OK
    #[arg(long, default_value = "false")]
    pub fail_on_rejected: bool,

    /// Path to the coverage report to upload
    pub report: PathBuf,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger()?;
    debug!("{}", runtime_version_label());

    let config = Config::try_from(cli.upload_args)?;
    debug!("config: {config:#?}");

    if !AppVeyorProvider::detect() {
        warn!("AppVeyor was not detected, the build metadata sent to Codecov may be empty");
    }
    let provider = AppVeyorProvider::from_process_env();
    debug!("Reading build metadata from {}", provider.get_provider_name());
    let mut environment = provider.into_upload_environment();
    environment.set_token(config.token.clone());

    info!(
        "Uploading coverage report {}",
        style(config.report_path.display()).bold()
    );
    let outcome = uploader::upload(&config.upload_url, &config.report_path, &environment).await?;

    match outcome {
        UploadOutcome::Accepted { body } => info!("{body}"),
        UploadOutcome::Rejected { status } => {
            if config.fail_on_rejected {
                bail!(
                    "Coverage report rejected by the upload endpoint, status code: {}",
                    style(status).red()
                );
            }
            info!("Status code: {status}");
        }
    }

    Ok(())
}
