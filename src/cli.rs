use std::env;

use clap::Parser;

use loodb_entities::email::EmailAddress;

use crate::config::{Config, DEFAULT_CONFIG_FILE};

const DEFAULT_DB_URL: &str = "openloo.db";
const DEFAULT_DB_CONNECTION_POOL_SIZE: u32 = 10;

#[derive(Debug, Parser)]
#[command(version, about = "openloodb - a toilet locator backend")]
struct Args {
    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Path to the TOML configuration file
    #[arg(long, value_name = "CONFIG_FILE", default_value = DEFAULT_CONFIG_FILE)]
    cfg_file: String,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

fn bootstrap_admins(emails: &[String]) -> Vec<EmailAddress> {
    emails
        .iter()
        .filter_map(|email| match email.parse::<EmailAddress>() {
            Ok(email) => Some(email),
            Err(err) => {
                warn!("Ignoring invalid bootstrap admin '{email}': {err}");
                None
            }
        })
        .collect()
}

pub async fn run() {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = match Config::try_load_from_file(&args.cfg_file) {
        Ok(Some(config)) => {
            info!("Loaded configuration from '{}'", args.cfg_file);
            config
        }
        Ok(None) => Config::default(),
        Err(err) => {
            error!("Failed to load configuration from '{}': {err}", args.cfg_file);
            std::process::exit(1);
        }
    };

    let db_url = args
        .db_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .or_else(|| config.db_url.clone())
        .unwrap_or_else(|| DEFAULT_DB_URL.to_string());
    let pool_size = config
        .db_pool_size
        .unwrap_or(DEFAULT_DB_CONNECTION_POOL_SIZE);
    info!("Connecting to SQLite database '{db_url}' (pool size = {pool_size})");
    let connections = match loodb_db_sqlite::Connections::init(&db_url, pool_size) {
        Ok(connections) => connections,
        Err(err) => {
            error!("Failed to connect to database '{db_url}': {err}");
            std::process::exit(1);
        }
    };
    loodb_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());

    let cfg = loodb_webserver::Cfg {
        bootstrap_admins: bootstrap_admins(&config.bootstrap_admins),
    };
    let enable_cors = args.enable_cors || config.enable_cors;
    loodb_webserver::run(connections, enable_cors, cfg, env!("CARGO_PKG_VERSION")).await;
}
