use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use engine::SuggestionEngine;
use graph_client::{
    EntityKind, GraphClientConfig, GraphService, HttpGraphClient, NodeRecord, Relation,
};
use std::sync::Arc;
use std::time::Duration;

/// Movie Night - shared-cast movie suggestions from a graph database
#[derive(Parser)]
#[command(name = "movie-night")]
#[command(about = "Suggests a movie your group has not seen, via shared cast members", long_about = None)]
struct Cli {
    /// Base URL of the graph facade
    #[arg(long, default_value = "http://localhost:9393")]
    graph_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest one movie based on the movies the group names
    Suggest {
        /// A movie title; repeat once per movie
        #[arg(long = "title", required = true)]
        titles: Vec<String>,

        /// Emit the raw JSON result payload instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Search the graph for movies or actors
    Search {
        /// Entity kind to search
        #[arg(long, value_enum, default_value = "movie")]
        kind: SearchKind,

        /// Query in the facade's syntax (commas AND terms, spaces OR them)
        #[arg(long)]
        query: String,
    },

    /// List the cast of a movie node
    Cast {
        /// Graph id of the movie
        #[arg(long)]
        movie_id: String,
    },

    /// List the movies an actor node acted in
    Films {
        /// Graph id of the actor
        #[arg(long)]
        actor_id: String,
    },

    /// Show a single node's properties
    Show {
        /// Graph id of the node
        #[arg(long)]
        id: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SearchKind {
    Movie,
    Actor,
}

impl From<SearchKind> for EntityKind {
    fn from(kind: SearchKind) -> Self {
        match kind {
            SearchKind::Movie => EntityKind::Movie,
            SearchKind::Actor => EntityKind::Actor,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = GraphClientConfig::new(cli.graph_url.clone())
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = Arc::new(HttpGraphClient::new(config));

    match cli.command {
        Commands::Suggest { titles, json } => handle_suggest(client, titles, json).await?,
        Commands::Search { kind, query } => handle_search(client, kind.into(), query).await?,
        Commands::Cast { movie_id } => handle_related(client, movie_id, Relation::Actors).await?,
        Commands::Films { actor_id } => handle_related(client, actor_id, Relation::ActedIn).await?,
        Commands::Show { id } => handle_show(client, id).await?,
    }

    Ok(())
}

/// Handle the 'suggest' command
async fn handle_suggest(
    client: Arc<HttpGraphClient>,
    titles: Vec<String>,
    json: bool,
) -> Result<()> {
    let engine = SuggestionEngine::new(client);

    match engine.suggest(&titles).await {
        Ok(suggestion) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestion)?);
            } else {
                println!(
                    "{} {}",
                    "Tonight's pick:".bold().green(),
                    suggestion.title.bold()
                );
                println!(
                    "   {}",
                    format!(
                        "picked because you all like {} (id {})",
                        suggestion.star.name, suggestion.star.id
                    )
                    .dimmed()
                );
            }
            Ok(())
        }
        Err(error) => {
            // Code-bearing failures are part of the documented result
            // contract; in JSON mode they are the output, not a crash.
            if json {
                if let Some(payload) = error.to_payload() {
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                    return Ok(());
                }
            }
            Err(error).context("suggestion run failed")
        }
    }
}

/// Handle the 'search' command
async fn handle_search(
    client: Arc<HttpGraphClient>,
    kind: EntityKind,
    query: String,
) -> Result<()> {
    let hits = client
        .search(kind, &query)
        .await
        .context("search request failed")?;

    println!(
        "{}",
        format!("{} {} hit(s) for '{}':", hits.len(), kind.as_str(), query)
            .bold()
            .blue()
    );
    for node in &hits {
        print_node(node);
    }
    Ok(())
}

/// Handle the 'cast' and 'films' commands
async fn handle_related(
    client: Arc<HttpGraphClient>,
    node_id: String,
    relation: Relation,
) -> Result<()> {
    let related = client
        .related(&node_id, relation)
        .await
        .context("relationship request failed")?;

    println!(
        "{}",
        format!(
            "{} node(s) related to {} via {}:",
            related.len(),
            node_id,
            relation.as_str()
        )
        .bold()
        .blue()
    );
    for node in &related {
        print_node(node);
    }
    Ok(())
}

/// Handle the 'show' command
async fn handle_show(client: Arc<HttpGraphClient>, id: String) -> Result<()> {
    let node = client.node(&id).await.context("node request failed")?;
    print_node(&node);
    Ok(())
}

/// Print one graph node, whatever kind it is
fn print_node(node: &NodeRecord) {
    let label = node
        .title
        .as_deref()
        .or(node.name.as_deref())
        .unwrap_or("<unnamed>");
    println!(
        "{} {} {}",
        "•".green(),
        label,
        format!("(id {})", node.id).dimmed()
    );
}
