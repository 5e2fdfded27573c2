use anyhow::Result;
use clap::Parser;

use snowmap_core::usecases;
use snowmap_db_sqlite::Connections;
use snowmap_gateways::HttpLinkResolver;

mod cfg;

use cfg::Cfg;

#[derive(Debug, Parser)]
#[command(author, version, about = "Snowdrift map backend", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Run the web server (the default)
    Run {
        /// Allow cross-origin requests
        #[arg(long)]
        enable_cors: bool,
    },
    /// Create an admin user for the moderation panel
    CreateAdmin {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
}

fn init_connections(cfg: &Cfg) -> Result<Connections> {
    let connections = Connections::init(&cfg.db_url, cfg.db_connection_pool_size)?;
    snowmap_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);
    Ok(connections)
}

async fn run_server(cfg: Cfg, enable_cors: bool) -> Result<()> {
    let connections = init_connections(&cfg)?;
    let link_resolver = HttpLinkResolver::new()?;
    let version = env!("CARGO_PKG_VERSION");
    log::info!("Starting snowmap v{version} (database: {})", cfg.db_url);
    snowmap_webserver::run(
        connections,
        enable_cors || cfg.enable_cors,
        Box::new(link_resolver),
        version,
    )
    .await;
    Ok(())
}

fn create_admin(cfg: Cfg, username: String, password: String) -> Result<()> {
    let connections = init_connections(&cfg)?;
    let db = connections.exclusive()?;
    usecases::create_admin_user(&db, usecases::NewUser { username, password })
        .map_err(|err| anyhow::anyhow!("Could not create admin user: {err}"))?;
    println!("Created admin user");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let cfg = Cfg::from_env_or_default();

    match args.command {
        None => run_server(cfg, false).await,
        Some(Command::Run { enable_cors }) => run_server(cfg, enable_cors).await,
        Some(Command::CreateAdmin { username, password }) => create_admin(cfg, username, password),
    }
}
