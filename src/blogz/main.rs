use anyhow::{anyhow, Context};
use blogz::api::{BlogApi, DynBlogApi};
use blogz::commands::{CmdMessage, MessageLevel};
use blogz::config::{BlogConfig, ConfigOverrides, CONFIG_FILENAME};
use blogz::store::fs::JsonFileStore;
use blogz::store::PostStore;
use blogz::web;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.log_level);

    let store = JsonFileStore::new(&config.data_file);
    let api: DynBlogApi = BlogApi::new(Box::new(store));

    match cli.command {
        Some(Commands::Serve { .. }) | None => handle_serve(api, &config),
        Some(Commands::Init) => handle_init(&api),
        Some(Commands::Config) => handle_config(&config),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<BlogConfig> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

    let (address, port) = match &cli.command {
        Some(Commands::Serve { address, port }) => (address.clone(), *port),
        _ => (None, None),
    };

    let config = BlogConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?
        .with_overrides(ConfigOverrides {
            data_file: cli.data.clone(),
            address,
            port,
        });
    Ok(config)
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_serve(api: DynBlogApi, config: &BlogConfig) -> anyhow::Result<()> {
    if !api.store().is_initialized()? {
        warn!(
            data_file = %config.data_file.display(),
            "data file does not exist; every request will fail until `blogz init` creates it"
        );
    }

    info!(
        address = %config.address,
        port = config.port,
        data_file = %config.data_file.display(),
        "starting server"
    );

    let rocket = web::build(api, web::server_figment(config))?;
    rocket::execute(rocket.launch()).map_err(|e| anyhow!("server failed: {}", e))?;
    Ok(())
}

fn handle_init(api: &DynBlogApi) -> anyhow::Result<()> {
    let result = api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(config: &BlogConfig) -> anyhow::Result<()> {
    println!("data_file = {}", config.data_file.display());
    println!("address = {}", config.address);
    println!("port = {}", config.port);
    println!("log_level = {}", config.log_level);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}
