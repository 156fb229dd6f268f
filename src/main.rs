//! Vitrina - product catalog backend
//!
//! CLI entry point for the HTTP server and one-off generation commands.

use std::fs;

use actix_files::Files;
use actix_web::web::{self, Data};
use actix_web::{App, HttpServer};
use clap::Parser;
use eyre::{Context, Result};
use tracing::info;
use uuid::Uuid;

use vitrina::api;
use vitrina::catalog::Catalog;
use vitrina::cli::{Cli, Command, OutputFormat};
use vitrina::config::{Config, LogConfig};
use vitrina::domain::AdSheetCreate;
use vitrina::generate::Generator;
use vitrina::llm::create_client;
use vitrina::prompts::TemplateRegistry;
use vitrina::store::Store;
use vitrina::uploads::Uploads;

fn setup_logging(config: &LogConfig, verbose: bool) -> Result<()> {
    let filter = if verbose { "debug" } else { config.filter.as_str() };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    match &config.file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context("Failed to create log directory")?;
            }
            let log_file = fs::File::create(path).context("Failed to create log file")?;

            tracing_subscriber::fmt()
                .with_writer(log_file)
                .with_ansi(false)
                .with_env_filter(env_filter)
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(env_filter).init();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    setup_logging(&config.log, cli.verbose).context("Failed to setup logging")?;

    let resolved = config.llm.resolve();
    info!(
        "Loaded config: provider={}, model={}",
        resolved.provider, resolved.model
    );

    match cli.command {
        Some(Command::Serve { host, port }) => cmd_serve(&config, host, port).await,
        Some(Command::Generate {
            platform,
            template,
            product_ids,
            title,
        }) => cmd_generate(&config, platform, template, product_ids, title).await,
        Some(Command::Templates { format }) => cmd_templates(format),
        None => cmd_serve(&config, None, None).await,
    }
}

/// Wire the store, LLM client, and photo storage into one catalog
fn build_catalog(config: &Config) -> Result<Catalog> {
    let store = Store::open(&config.storage.db_path).context("Failed to open database")?;

    let uploads = Uploads::new(&config.storage.upload_dir, config.storage.max_upload_mb);
    uploads
        .ensure_dir()
        .context("Failed to create upload directory")?;

    let llm = create_client(&config.llm.resolve()).context("Failed to create LLM client")?;
    let generator = Generator::new(TemplateRegistry::new(), llm);

    Ok(Catalog::new(store, generator, uploads))
}

/// Run the HTTP server
async fn cmd_serve(config: &Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    config.validate()?;

    let catalog = Data::new(build_catalog(config)?);
    let upload_dir = config.storage.upload_dir.clone();

    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    info!("Serving on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(catalog.clone())
            .app_data(api::json_config())
            .route("/health", web::get().to(api::health))
            .service(api::configure_routes())
            .service(Files::new("/uploads", upload_dir.clone()))
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("Failed to bind {}:{}", host, port))?
    .run()
    .await
    .context("Server error")
}

/// Generate one ad sheet from stored products and print it as JSON
async fn cmd_generate(
    config: &Config,
    platform: String,
    template: String,
    product_ids: Vec<Uuid>,
    title: String,
) -> Result<()> {
    config.validate()?;

    let catalog = build_catalog(config)?;
    let sheet = catalog
        .create_sheet(AdSheetCreate {
            title,
            platform,
            template,
            meta_info: Default::default(),
            product_ids,
        })
        .await?;

    println!("{}", serde_json::to_string_pretty(&sheet)?);
    Ok(())
}

/// List available platforms and templates
fn cmd_templates(format: OutputFormat) -> Result<()> {
    let registry = TemplateRegistry::new();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&registry.as_json())?);
        }
        OutputFormat::Text => {
            println!("Available templates:");
            println!();
            for platform in registry.platforms() {
                println!("  {}: {}", platform, registry.templates_for(platform).join(", "));
            }
        }
    }

    Ok(())
}
