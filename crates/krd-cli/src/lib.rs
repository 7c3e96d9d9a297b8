use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use krd_core::config::SiteConfig;
use krd_core::source::{AirtableClient, DEFAULT_VIEW, RecordSource, StaticSource};
use axum::http::Uri;
use krd_web::{KRD_RUNTIME_JS, Site, query_from_uri, router};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,krd=debug";

#[derive(Debug, Parser)]
#[command(name = "krd", about = "KRD MICGO catalog site", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Site config file. Defaults to ./site.json when present.
    #[arg(long, env = "KRD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Serve records from a fixture file instead of Airtable.
    #[arg(long)]
    pub fixtures: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the web server.
    Serve {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long)]
        port: Option<u16>,

        #[arg(long)]
        bind: Option<String>,
    },

    /// Print the HTML of one route, e.g. `/trumpet?view=list`.
    Render {
        route: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the records of one table as JSON.
    Fetch {
        table: String,

        #[arg(long, default_value = DEFAULT_VIEW)]
        view: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Write the client runtime script to disk.
    #[command(name = "init-client")]
    InitClient {
        #[arg(long, default_value = "krd-runtime.js")]
        out: PathBuf,
    },
}

pub async fn run_from_env() -> Result<()> {
    init_tracing();
    run(Cli::parse()).await
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Serve { source, port, bind } => {
            let mut config = load_config(&source)?;
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            let records = build_source(&config)?;
            run_server(&config, records).await
        }
        Command::Render { route, source } => {
            let records = build_source(&load_config(&source)?)?;
            print!("{}", render_route(records, &route).await?);
            Ok(())
        }
        Command::Fetch {
            table,
            view,
            source,
        } => {
            let records = build_source(&load_config(&source)?)?;
            println!("{}", fetch_table(records.as_ref(), &table, &view)?);
            Ok(())
        }
        Command::InitClient { out } => {
            write_runtime(&out)?;
            println!("wrote {}", out.display());
            Ok(())
        }
    }
}

/// Installs the fmt subscriber on stderr, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn load_config(args: &SourceArgs) -> Result<SiteConfig> {
    let mut config = SiteConfig::load(args.config.as_deref())?;
    if let Some(fixtures) = &args.fixtures {
        config.fixtures = Some(fixtures.clone());
    }
    Ok(config)
}

/// Fixtures win over the remote service; without them credentials are
/// required.
pub fn build_source(config: &SiteConfig) -> Result<Arc<dyn RecordSource>> {
    if let Some(path) = &config.fixtures {
        let source = StaticSource::from_file(path)?;
        tracing::info!(
            path = %path.display(),
            tables = source.tables().count(),
            "serving fixture records"
        );
        return Ok(Arc::new(source));
    }

    config.airtable.require_credentials()?;
    tracing::info!(
        base_url = %config.airtable.base_url,
        base_id = %config.airtable.base_id,
        "serving records from airtable"
    );
    Ok(Arc::new(AirtableClient::new(&config.airtable)))
}

pub async fn render_route(source: Arc<dyn RecordSource>, route: &str) -> Result<String> {
    let uri: Uri = route
        .parse()
        .with_context(|| format!("invalid route {route}"))?;
    let path = uri.path();
    Site::new(source)
        .render(path, &query_from_uri(&uri))
        .await
        .ok_or_else(|| anyhow!("no page at route {path}"))
}

pub fn fetch_table(source: &dyn RecordSource, table: &str, view: &str) -> Result<String> {
    let records = source
        .fetch_records(table, view)
        .with_context(|| format!("failed to fetch table {table}"))?;
    Ok(serde_json::to_string_pretty(&records)?)
}

pub fn write_runtime(out: &Path) -> Result<()> {
    fs::write(out, KRD_RUNTIME_JS).with_context(|| format!("failed to write {}", out.display()))
}

async fn run_server(config: &SiteConfig, source: Arc<dyn RecordSource>) -> Result<()> {
    let addr = format!("{}:{}", config.server.bind, config.server.port);
    let app = router(Arc::new(Site::new(source)));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    println!("KRD MICGO serve");
    println!("URL:  http://localhost:{}", config.server.port);
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(prefix: &str) -> PathBuf {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("{}-{}-{}", prefix, std::process::id(), ts));
        fs::create_dir_all(&dir).expect("failed to create temp dir");
        dir
    }

    fn demo_fixtures() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/demo.json")
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["krd", "serve", "--port", "9000", "--fixtures", "f.json"])
            .unwrap();
        match cli.command {
            Command::Serve { source, port, bind } => {
                assert_eq!(port, Some(9000));
                assert_eq!(bind, None);
                assert_eq!(source.fixtures, Some(PathBuf::from("f.json")));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["krd", "fetch", "krd"]).unwrap();
        assert!(matches!(cli.command, Command::Fetch { view, .. } if view == "data"));
        assert!(Cli::try_parse_from(["krd", "render"]).is_err());
    }

    #[test]
    fn missing_credentials_are_an_error() {
        let err = build_source(&SiteConfig::default()).err().expect("expected an error");
        assert!(err.to_string().contains("AIRTABLE_BASE_ID"));
    }

    #[test]
    fn fixtures_flag_overrides_config() {
        let dir = unique_temp_dir("krd-cli-config");
        let config_path = dir.join("site.json");
        fs::write(&config_path, r#"{"server": {"port": 3000}}"#).unwrap();

        let config = load_config(&SourceArgs {
            config: Some(config_path),
            fixtures: Some(demo_fixtures()),
        })
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(build_source(&config).is_ok());

        let _ = fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn renders_routes_from_demo_fixtures() {
        let source = build_source(&SiteConfig {
            fixtures: Some(demo_fixtures()),
            ..SiteConfig::default()
        })
        .unwrap();

        let html = render_route(Arc::clone(&source), "/trumpet?view=list").await.unwrap();
        assert!(html.contains("class=\"product-list\""));
        assert!(html.contains("data-nav-path=\"/trumpet\""));

        let home = render_route(Arc::clone(&source), "/").await.unwrap();
        assert!(home.contains("data-carousel=\"hot\""));

        let zoomed = render_route(Arc::clone(&source), "/trumpet?view=list&zoom=%6E%6F-such")
            .await
            .unwrap();
        assert!(zoomed.contains("class=\"product-list\""));
        assert!(!zoomed.contains("image-modal is-open"));

        assert!(render_route(Arc::clone(&source), "not a route").await.is_err());

        let err = render_route(source, "/missing").await.unwrap_err();
        assert_eq!(err.to_string(), "no page at route /missing");
    }

    #[test]
    fn fetch_prints_records_as_json() {
        let source = StaticSource::from_file(&demo_fixtures()).unwrap();
        let json = fetch_table(&source, "navigation", DEFAULT_VIEW).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.as_array().is_some_and(|records| !records.is_empty()));
    }

    #[test]
    fn init_client_writes_runtime() {
        let dir = unique_temp_dir("krd-cli-init");
        let out = dir.join("krd-runtime.js");
        write_runtime(&out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), KRD_RUNTIME_JS);
        let _ = fs::remove_dir_all(dir);
    }
}
