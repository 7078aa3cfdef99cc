//! Contains the logic for the `fetch` command.
use std::path::PathBuf;

use mvnfetch_common::error::Result;
use mvnfetch_common::Config;
use mvnfetch_net::download_artifact;

use crate::cli::CoordinateArgs;

#[derive(clap::Args, Debug)]
pub struct FetchArgs {
    #[command(flatten)]
    pub coordinate: CoordinateArgs,

    /// Where to store the file [default: ./<artifactId>-<version>[-<classifier>].<extension>]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl FetchArgs {
    pub async fn run(&self, config: &Config) -> Result<()> {
        let repository = config.repository()?;
        let artifact = self.coordinate.artifact()?;
        tracing::debug!("Fetching {} from {:?}", artifact, repository);

        let path = download_artifact(&repository, &artifact, self.output.as_deref()).await?;
        println!("{}", path.display());
        Ok(())
    }
}
