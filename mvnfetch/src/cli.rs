// mvnfetch/src/cli.rs
//! Defines the command-line argument structure using clap.
use clap::{ArgAction, Args, Parser, Subcommand};
use mvnfetch_common::error::Result;
use mvnfetch_common::{Artifact, Config};

pub mod fetch;
pub mod resolve;

use crate::cli::fetch::FetchArgs;
use crate::cli::resolve::ResolveArgs;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "mvnfetch", bin_name = "mvnfetch")]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub repository: RepositoryArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Overrides for the `MVNFETCH_*` environment settings.
#[derive(Args, Debug, Default)]
pub struct RepositoryArgs {
    /// Base URL of the Maven repository [default: Maven Central]
    #[arg(long, global = true, value_name = "URL")]
    pub repository: Option<String>,

    /// Username for HTTP basic authentication
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// Password for HTTP basic authentication
    #[arg(long, global = true)]
    pub password: Option<String>,
}

impl RepositoryArgs {
    pub fn apply(&self, config: Config) -> Config {
        config.merge(
            self.repository.clone(),
            self.username.clone(),
            self.password.clone(),
        )
    }
}

/// The artifact to operate on.
#[derive(Args, Debug)]
pub struct CoordinateArgs {
    /// groupId:artifactId:version[:classifier[:extension]]
    #[arg(value_name = "COORDINATE")]
    pub coordinate: String,

    /// Classifier, e.g. `sources` or `javadoc`
    #[arg(long)]
    pub classifier: Option<String>,

    /// File extension [default: jar]
    #[arg(long)]
    pub extension: Option<String>,
}

impl CoordinateArgs {
    pub fn artifact(&self) -> Result<Artifact> {
        let artifact: Artifact = self.coordinate.parse()?;
        let artifact = match self.classifier.as_deref() {
            Some(classifier) => artifact.with_classifier(Some(classifier)),
            None => artifact,
        };
        Ok(artifact.with_extension(self.extension.as_deref()))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download an artifact unless an identical copy is already present
    Fetch(FetchArgs),
    /// Print the URL an artifact would be downloaded from
    Resolve(ResolveArgs),
}

impl Command {
    pub async fn run(&self, config: &Config) -> Result<()> {
        match self {
            Self::Fetch(command) => command.run(config).await,
            Self::Resolve(command) => command.run(config).await,
        }
    }
}
