//! Contains the logic for the `resolve` command.
use mvnfetch_common::error::Result;
use mvnfetch_common::Config;
use mvnfetch_net::Fetcher;

use crate::cli::CoordinateArgs;

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub coordinate: CoordinateArgs,
}

impl ResolveArgs {
    pub async fn run(&self, config: &Config) -> Result<()> {
        let fetcher = Fetcher::new(config.repository()?)?;
        let artifact = self.coordinate.artifact()?;

        let build = fetcher.resolve(&artifact).await?;
        if let Some(build) = &build {
            tracing::info!(
                "{} resolves to snapshot build {}",
                artifact,
                build.snapshot_version()
            );
        }
        println!("{}", artifact.url(fetcher.repository(), build.as_ref())?);
        Ok(())
    }
}
