//! CLI entrypoint for storeclerk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use clerk_application::{ConverseUseCase, DispatchParams, ToolExecutorPort};
use clerk_infrastructure::{
    ConfigLoader, DataStores, FunctionDeclarationConverter, GeminiDispatcher,
    JsonlConversationLogger, LookupToolProvider, ToolRegistry,
};
use clerk_presentation::{ChatRepl, Cli, ConsoleFormatter};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load and validate configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow!(e.to_string()))?
    };
    config.validate()?;

    info!("Starting storeclerk");

    // Load the read-only store snapshots
    let stores = DataStores::load(
        &config.datasets.catalog,
        &config.datasets.orders,
        &config.datasets.faqs,
    );

    if !cli.quiet {
        println!(
            "{}",
            ConsoleFormatter::store_summary(
                stores.catalog.len(),
                stores.orders.len(),
                stores.faqs.len()
            )
        );
    }

    // === Dependency Injection ===
    // Register the lookup tools
    let mut registry = ToolRegistry::new().register(LookupToolProvider::new(stores));
    registry.discover().await.map_err(|e| anyhow!(e))?;

    let tool_names: Vec<String> = registry
        .available_tools()
        .into_iter()
        .map(String::from)
        .collect();

    // Create the dispatcher gateway and open the session
    let gateway = Arc::new(GeminiDispatcher::new(
        &config.dispatcher.model,
        config.dispatcher.api_key.clone(),
    )?);

    let params = DispatchParams::default().with_max_tool_turns(config.dispatcher.max_tool_turns);

    let mut use_case = ConverseUseCase::start(
        gateway,
        Arc::new(registry),
        Arc::new(FunctionDeclarationConverter),
        params,
    )
    .await?;

    if let Some(log_file) = &config.conversation.log_file
        && let Some(logger) = JsonlConversationLogger::new(log_file)
    {
        use_case = use_case.with_conversation_logger(Arc::new(logger));
    }

    // Chat mode
    if cli.chat {
        let repl = ChatRepl::new(use_case, tool_names);
        repl.run().await?;
        return Ok(());
    }

    // Single utterance mode
    let utterance = match cli.utterance {
        Some(u) => u,
        None => bail!("Utterance is required. Use --chat for interactive mode."),
    };

    let reply = use_case.send(&utterance).await;

    if cli.quiet {
        println!("{}", reply);
    } else {
        println!("{}", ConsoleFormatter::reply(&reply));
    }

    Ok(())
}
