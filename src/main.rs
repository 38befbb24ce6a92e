use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mobi2go_mcp::config::{Config, DEFAULT_BASE_URL};
use mobi2go_mcp::credential::Credential;
use mobi2go_mcp::executor::Executor;
use mobi2go_mcp::mcp::{self, Mobi2GoServer};
use mobi2go_mcp::registry::ToolRegistry;

#[derive(Parser)]
#[command(name = "mobi2go-mcp", version)]
#[command(about = "MCP server for the Mobi2Go restaurant management API")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve MCP over stdio (the default)
    Serve(ServeArgs),
    /// Print the tool catalog and exit
    Tools {
        /// Print full descriptors as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Clone)]
struct ServeArgs {
    /// Credential as MOBI_COOKIE=<value>; overrides the MOBI_COOKIE env var
    #[arg(value_name = "MOBI_COOKIE=VALUE")]
    assignment: Option<String>,

    /// Mobi2Go API base URL
    #[arg(long, env = "MOBI2GO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-call timeout in seconds
    #[arg(long, env = "MOBI2GO_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,
}

/// Initialize tracing on stderr; stdout is the protocol channel.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "mobi2go_mcp=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .init();
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let credential = Credential::from_env(args.assignment.as_deref())?;

    let config = Config::default()
        .with_base_url(args.base_url)
        .with_timeout(Duration::from_secs(args.timeout_secs));
    let executor = Executor::new(&config)?;
    let registry = ToolRegistry::mobi2go()?;

    tracing::info!(
        base_url = %executor.base_url(),
        tools = registry.len(),
        "Server ready"
    );

    mcp::run_stdio_server(Mobi2GoServer::new(registry, executor, credential)).await
}

fn print_tools(json: bool) -> anyhow::Result<()> {
    let registry = ToolRegistry::mobi2go()?;

    if json {
        let descriptors: Vec<_> = registry.iter().collect();
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
        return Ok(());
    }

    for tool in registry.iter() {
        println!(
            "{:<34} {:<6} {}",
            tool.name,
            tool.method.as_str(),
            tool.path_template
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve(args)) => serve(args).await,
        Some(Commands::Tools { json }) => print_tools(json),
        None => serve(cli.serve).await,
    }
}
