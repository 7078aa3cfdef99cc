// mvnfetch-net/tests/default_output.rs
// Changes the working directory, so it lives in its own test binary.
mod common;

use std::env;
use std::fs;
use std::path::PathBuf;

use common::{fetcher, FixtureServer};
use mvnfetch_net::{Artifact, Repository};

#[tokio::test]
async fn default_output_uses_unresolved_file_name_in_cwd() {
    let server = FixtureServer::start();
    server.publish(
        "org/apache/commons/commons-text/1.9/commons-text-1.9.jar",
        b"release",
    );
    server.serve(
        "org/apache/commons/commons-text/1.10.1-SNAPSHOT/maven-metadata.xml",
        "<metadata><versioning><snapshot><timestamp>20221006.131216</timestamp>\
         <buildNumber>7</buildNumber></snapshot></versioning></metadata>",
    );
    server.publish(
        "org/apache/commons/commons-text/1.10.1-SNAPSHOT/commons-text-1.10.1-20221006.131216-7.jar",
        b"snapshot",
    );

    let dir = tempfile::tempdir().unwrap();
    let previous = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();

    let fetcher = fetcher(Repository::new(&server.url(), None, None));
    let release = Artifact::new("org.apache.commons", "commons-text", "1.9", None, None);
    let snapshot = Artifact::new(
        "org.apache.commons",
        "commons-text",
        "1.10.1-SNAPSHOT",
        None,
        None,
    );
    let release_path = fetcher.download(&release, None).await;
    let snapshot_path = fetcher.download(&snapshot, Some(PathBuf::new().as_path())).await;

    env::set_current_dir(previous).unwrap();

    assert_eq!(release_path.unwrap(), PathBuf::from("commons-text-1.9.jar"));
    assert_eq!(
        snapshot_path.unwrap(),
        PathBuf::from("commons-text-1.10.1-SNAPSHOT.jar")
    );
    assert_eq!(
        fs::read(dir.path().join("commons-text-1.9.jar")).unwrap(),
        b"release"
    );
    assert_eq!(
        fs::read(dir.path().join("commons-text-1.10.1-SNAPSHOT.jar")).unwrap(),
        b"snapshot"
    );
}
