use crate::cli::commands::{Cli, Commands};
use anyhow::{Context, Result};
use hikari::app::{App, View, describe_bottle};
use hikari::catalog::Catalog;
use hikari::config::Config;
use hikari::llm::GeminiClient;
use hikari::reading::{ReadingFlow, ReadingService};
use hikari::ui::render;
use tracing::{debug, warn};

fn reading_service(config: &Config) -> ReadingService<GeminiClient> {
    let client = GeminiClient::from_config(config);
    if !client.has_api_key() {
        warn!("no Gemini API key configured; readings will use the fallback text");
    }
    ReadingService::new(client)
}

async fn run_app(
    catalog: &Catalog,
    config: &Config,
    start: View,
    query: Option<String>,
) -> Result<()> {
    let app = App::new(
        catalog,
        reading_service(config),
        config.catalog.asset_root(),
    );
    app.run(start, query).await
}

/// Non-interactive reading: the four bottles fill the slots in order.
async fn read(catalog: &Catalog, config: &Config, tokens: &[String], json: bool) -> Result<()> {
    let mut flow = ReadingFlow::new();
    for token in tokens {
        flow.pick(catalog.resolve(token)?);
    }

    let service = reading_service(config);
    let reading = flow
        .request(&service)
        .await
        .cloned()
        .context("A reading needs four bottles")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reading).context("Failed to serialize reading")?
        );
    } else {
        println!("{}", render::reading_result(flow.selection(), &reading));
    }
    Ok(())
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let catalog = Catalog::from_config(&config, cli.catalog.as_deref())
        .context("Failed to load bottle catalog")?;
    debug!(bottles = catalog.len(), path = ?cli.catalog, "catalog loaded");

    match cli.command {
        None => run_app(&catalog, &config, View::Home, None).await,
        Some(Commands::Gallery { search }) => {
            run_app(&catalog, &config, View::Gallery, search).await
        }
        Some(Commands::Reading) => run_app(&catalog, &config, View::Reading, None).await,
        Some(Commands::Search { query }) => {
            println!("{}", render::gallery_list(&catalog.search(&query), &query));
            Ok(())
        }
        Some(Commands::Show { bottle }) => {
            let bottle = catalog.resolve(&bottle)?;
            println!(
                "{}",
                describe_bottle(bottle, &config.catalog.asset_root())
            );
            Ok(())
        }
        Some(Commands::Read { bottles, json }) => read(&catalog, &config, &bottles, json).await,
    }
}
