//! Route registry CLI.
//!
//! ```text
//! routes.toml ──▶ config (load + validate) ──▶ RouteRegistry ──▶ list / lookup / match / link
//!      │                                          ▲
//!      └── watch: ConfigWatcher ──▶ mpsc ──▶ forward_updates ──▶ RegistryHandle
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use route_registry::config::{forward_updates, load_config, ConfigWatcher, RoutesConfig};
use route_registry::observability::logging::init_logging;
use route_registry::{RegistryHandle, RouteDescriptor, RouteRegistry};

#[derive(Parser)]
#[command(name = "route-registry")]
#[command(about = "Inspect and serve UI route declarations", long_about = None)]
struct Cli {
    /// Route file (TOML). Uses the built-in table when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all registered routes
    List,
    /// Show one route by key
    Lookup { key: String },
    /// Resolve a URL fragment to a route and its arguments
    Match { path: String },
    /// Build a link for a route from positional arguments
    Link { key: String, args: Vec<String> },
    /// Watch the route file and reload on change
    Watch,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RoutesConfig::default(),
    };
    init_logging(&config.observability);

    let registry = RouteRegistry::from_config(&config)?;
    tracing::info!(routes = registry.len(), "Route table loaded");

    match cli.command {
        Commands::List => {
            if cli.json {
                let routes: Vec<_> = registry.all().map(RouteDescriptor::to_config).collect();
                println!("{}", serde_json::to_string_pretty(&routes)?);
            } else {
                for route in registry.all() {
                    print_route(route);
                }
            }
        }
        Commands::Lookup { key } => match registry.lookup(&key) {
            Some(route) if cli.json => {
                println!("{}", serde_json::to_string_pretty(&route.to_config())?)
            }
            Some(route) => print_route(route),
            None => {
                eprintln!("No route with key `{}`", key);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Match { path } => match registry.resolve(&path) {
            Some(m) if cli.json => println!("{}", serde_json::to_string_pretty(&m)?),
            Some(m) => {
                println!("{} (base: {}, dialog: {})", m.key, m.base, m.dialog);
                for (name, value) in &m.arguments {
                    println!("  {} = {:?}", name, value);
                }
            }
            None => {
                eprintln!("No route matches `{}`", path);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Link { key, args } => match registry.link(&key, args.as_slice()) {
            Some(link) => println!("{}", link),
            None => {
                eprintln!("No route with key `{}`", key);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Watch => {
            let Some(path) = cli.config else {
                eprintln!("watch requires --config");
                return Ok(ExitCode::FAILURE);
            };
            watch(path, registry).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_route(route: &RouteDescriptor) {
    println!("{}", route.key());
    println!("  base:      {}", route.base());
    println!("  dialog:    {}", route.dialog());
    println!("  url:       {}", route.url_pattern().as_str());
    println!("  pattern:   {}", route.pattern_template());
    for (name, default) in route.argument_names().iter().zip(route.defaults()) {
        println!("  argument:  {} (default {:?})", name, default);
    }
}

async fn watch(path: PathBuf, registry: RouteRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let handle = Arc::new(RegistryHandle::new(registry));
    let (watcher, updates) = ConfigWatcher::new(&path);
    let _watcher = watcher.run()?;

    tokio::select! {
        _ = forward_updates(updates, handle.clone()) => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    tracing::info!(routes = handle.load().len(), "Watcher stopped");
    Ok(())
}
