//! Tests that run the `plexdrop` binary the way a torrent client would.

use std::path::{Path, PathBuf};
use std::process::Output;

use tempfile::TempDir;

/// Temp layout with downloads, movies and series roots plus a config file.
struct Sandbox {
    temp: TempDir,
    config_path: PathBuf,
}

impl Sandbox {
    fn new(extra_config: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        for dir in ["downloads", "movies", "series"] {
            std::fs::create_dir_all(temp.path().join(dir)).unwrap();
        }

        let root = temp.path().display();
        let config = format!(
            r#"
[paths]
downloads_root = "{root}/downloads/"
movies_root = "{root}/movies/"
series_root = "{root}/series/"

[log]
path = "{root}/hook.log"

[classify]
strip_mode = "prefix"

{extra_config}
"#
        );
        let config_path = temp.path().join("plexdrop.toml");
        std::fs::write(&config_path, config).unwrap();

        Self { temp, config_path }
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.temp.path().join(relative)
    }

    fn download(&self, name: &str) -> PathBuf {
        let path = self.path("downloads").join(name);
        std::fs::write(&path, "content").unwrap();
        path
    }

    fn hook_log(&self) -> String {
        std::fs::read_to_string(self.path("hook.log")).unwrap_or_default()
    }

    async fn run(&self, args: &[&str]) -> Output {
        run_with_config(&self.config_path, args, &[]).await
    }
}

/// Spawn the hook and wait for it to exit
async fn run_with_config(config_path: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_plexdrop"))
        .args(args)
        .env("PLEXDROP_CONFIG", config_path)
        .env("RUST_LOG", "error") // Quiet logs during tests
        .envs(envs.iter().copied())
        .output()
        .await
        .expect("Failed to run plexdrop")
}

#[tokio::test]
async fn test_moves_movie() {
    let sandbox = Sandbox::new("");
    let source = sandbox.download("Some Movie (2021).mkv");

    let output = sandbox
        .run(&[source.to_str().unwrap(), "Some Movie"])
        .await;

    assert_eq!(output.status.code(), Some(0));
    assert!(!source.exists());
    assert!(sandbox.path("movies/some.movie.2021.mkv").exists());

    let log = sandbox.hook_log();
    assert!(log.contains("] Script triggered."));
    assert!(log.contains("] Torrent Name: Some Movie"));
    assert!(log.contains("] Detected a movie with name: some.movie.2021.mkv."));
    assert!(log.contains("] Script completed."));
}

#[tokio::test]
async fn test_moves_series() {
    let sandbox = Sandbox::new("");
    let source = sandbox.download("Show.Name.Season.01.Episode.02.mkv");

    let output = sandbox
        .run(&[source.to_str().unwrap(), "Show Name S01E02"])
        .await;

    assert_eq!(output.status.code(), Some(0));
    assert!(sandbox
        .path("series/show.name.season.01.episode.02.mkv")
        .exists());
}

#[tokio::test]
async fn test_not_enough_arguments_moves_nothing() {
    let sandbox = Sandbox::new("");
    let source = sandbox.download("Some.Movie.mkv");

    let output = sandbox.run(&[source.to_str().unwrap()]).await;

    assert_eq!(output.status.code(), Some(0));
    assert!(source.exists());
    let log = sandbox.hook_log();
    assert!(log.contains("ERROR: Not enough arguments"));
    assert!(!log.contains("Script triggered."));
}

#[tokio::test]
async fn test_failure_exit_code_with_report_policy() {
    let sandbox = Sandbox::new(
        r#"
[hook]
exit_policy = "report_failures"
"#,
    );
    std::fs::remove_dir(sandbox.path("movies")).unwrap();
    let source = sandbox.download("Some.Movie.mkv");

    let output = sandbox
        .run(&[source.to_str().unwrap(), "Some Movie"])
        .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(source.exists());
    let log = sandbox.hook_log();
    assert!(log.contains("Failed to move file to"));
    assert!(log.contains("destination_unwritable"));
    assert!(log.contains("] Script completed."));

    let output = sandbox.run(&[]).await;
    assert_eq!(output.status.code(), Some(2));
}

#[tokio::test]
async fn test_failure_exits_zero_by_default() {
    let sandbox = Sandbox::new("");
    let missing = sandbox.path("downloads/Missing.mkv");

    let output = sandbox
        .run(&[missing.to_str().unwrap(), "Missing"])
        .await;

    assert_eq!(output.status.code(), Some(0));
    assert!(sandbox.hook_log().contains("source_not_found"));
}

#[tokio::test]
async fn test_environment_overrides_config_file() {
    let sandbox = Sandbox::new("");
    let other_movies = sandbox.path("other-movies");
    std::fs::create_dir_all(&other_movies).unwrap();
    let override_root = format!("{}/", other_movies.display());
    let source = sandbox.download("Film.mkv");

    let output = run_with_config(
        &sandbox.config_path,
        &[source.to_str().unwrap(), "Film"],
        &[("PLEXDROP_PATHS__MOVIES_ROOT", override_root.as_str())],
    )
    .await;

    assert_eq!(output.status.code(), Some(0));
    assert!(other_movies.join("film.mkv").exists());
}

#[tokio::test]
async fn test_missing_explicit_config_is_fatal() {
    let temp = TempDir::new().unwrap();

    let output = run_with_config(
        &temp.path().join("nope.toml"),
        &["/downloads/a.mkv", "a"],
        &[],
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
}

#[tokio::test]
async fn test_invalid_config_is_fatal_and_moves_nothing() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("plexdrop.toml");
    std::fs::write(
        &config_path,
        r#"
[paths]
movies_root = "/same/"
series_root = "/same/"
"#,
    )
    .unwrap();
    let source = temp.path().join("a.mkv");
    std::fs::write(&source, "x").unwrap();

    let output = run_with_config(&config_path, &[source.to_str().unwrap(), "a"], &[]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(source.exists());
}

#[tokio::test]
async fn test_json_log_lines() {
    let sandbox = Sandbox::new("");
    let config = std::fs::read_to_string(&sandbox.config_path).unwrap();
    std::fs::write(
        &sandbox.config_path,
        config.replace("[log]\n", "[log]\nformat = \"json\"\n"),
    )
    .unwrap();
    let source = sandbox.download("Film.mkv");

    let output = sandbox.run(&[source.to_str().unwrap(), "Film"]).await;

    assert_eq!(output.status.code(), Some(0));
    let lines: Vec<serde_json::Value> = sandbox
        .hook_log()
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid JSON line"))
        .collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[1]["message"], "Script triggered.");
    assert_eq!(lines[5]["event"]["type"], "detected");
    assert_eq!(lines[5]["event"]["kind"], "movie");
    assert_eq!(lines[6]["event"]["type"], "moved");
    assert!(lines[0]["timestamp"].is_string());
}
