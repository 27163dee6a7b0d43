use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;
use mini_arango_client::{
    ArangoClient, ArangoGraph, ClientConfig, DocumentReadOptions, EdgeCollectionOperations,
    EdgeCreateOptions, EdgeDefinition, EdgeDeleteOptions, EdgeReplaceOptions, EdgeUpdateOptions,
    GraphCreateOptions, GraphEntity, GraphOperations, VertexCollectionOperations,
    VertexCreateOptions, VertexDeleteOptions, VertexReplaceOptions, VertexUpdateOptions,
};

/// Mini ArangoDB client - manage named graphs and their edges over HTTP
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server endpoint, overrides the configuration
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Database name, overrides the configuration
    #[arg(short, long)]
    database: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Graph management commands
    Graph(GraphCommand),
    /// Edge document commands
    Edge(EdgeCommand),
    /// Vertex document commands
    Vertex(VertexCommand),
}

#[derive(Args)]
struct GraphCommand {
    #[command(subcommand)]
    action: GraphAction,
}

#[derive(Subcommand)]
enum GraphAction {
    /// List all graphs of the database
    List,
    /// Show a graph definition
    Info {
        name: String,
    },
    /// Create a graph; definitions are given as `edges:from1,from2:to1,to2`
    Create {
        name: String,
        #[arg(short = 'D', long = "definition")]
        definitions: Vec<String>,
        /// Orphan vertex collections
        #[arg(short, long)]
        orphans: Vec<String>,
        #[arg(long)]
        wait_for_sync: bool,
    },
    /// Drop a graph
    Drop {
        name: String,
        /// Drop the collections of the graph as well
        #[arg(long)]
        drop_collections: bool,
    },
    /// List the vertex collections of a graph
    VertexCollections {
        name: String,
    },
    /// Add a vertex collection to a graph
    AddVertexCollection {
        name: String,
        collection: String,
    },
    /// Remove a vertex collection from a graph
    RemoveVertexCollection {
        name: String,
        collection: String,
    },
    /// List the edge collections of a graph
    EdgeDefinitions {
        name: String,
    },
    /// Add an edge definition (`edges:from1,from2:to1,to2`)
    AddEdgeDefinition {
        name: String,
        definition: String,
    },
    /// Replace an edge definition (`edges:from1,from2:to1,to2`)
    ReplaceEdgeDefinition {
        name: String,
        definition: String,
    },
    /// Remove an edge definition
    RemoveEdgeDefinition {
        name: String,
        collection: String,
    },
}

#[derive(Args)]
struct EdgeCommand {
    /// Graph name
    graph: String,
    /// Edge collection name
    collection: String,

    #[command(subcommand)]
    action: DocumentAction,
}

#[derive(Args)]
struct VertexCommand {
    /// Graph name
    graph: String,
    /// Vertex collection name
    collection: String,

    #[command(subcommand)]
    action: DocumentAction,
}

#[derive(Subcommand)]
enum DocumentAction {
    /// Insert a document given as JSON
    Insert {
        data: String,
        #[arg(long)]
        wait_for_sync: bool,
    },
    /// Fetch a document by key
    Get {
        key: String,
        /// Only return the document if its revision differs
        #[arg(long)]
        if_none_match: Option<String>,
    },
    /// Replace a document with the given JSON
    Replace {
        key: String,
        data: String,
        /// Expected revision
        #[arg(long)]
        rev: Option<String>,
    },
    /// Merge the given JSON into a document
    Update {
        key: String,
        data: String,
        #[arg(long)]
        rev: Option<String>,
        /// Remove attributes set to null instead of storing them
        #[arg(long)]
        drop_nulls: bool,
    },
    /// Delete a document
    Delete {
        key: String,
        #[arg(long)]
        rev: Option<String>,
    },
}

struct ClientContext {
    client: ArangoClient,
    verbose: bool,
}

impl ClientContext {
    fn new(cli: &Cli) -> Result<Self> {
        let mut config = ClientConfig::load(cli.config.as_deref())
            .context("failed to load client configuration")?;
        if let Some(endpoint) = &cli.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(database) = &cli.database {
            config.database = database.clone();
        }

        let client = ArangoClient::new(config)?;
        Ok(ClientContext { client, verbose: cli.verbose })
    }

    fn log(&self, message: &str) {
        if self.verbose {
            println!("[INFO] {}", message);
        }
    }

    fn graph(&self, name: &str) -> Result<ArangoGraph> {
        Ok(self.client.db()?.graph(name))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    mini_arango_client::init()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = ClientContext::new(&cli)?;
    ctx.log(&format!("Connected to {} (database '{}')", ctx.client.config().endpoint, ctx.client.config().database));

    match cli.command {
        Commands::Graph(cmd) => handle_graph_command(&ctx, cmd).await,
        Commands::Edge(cmd) => handle_edge_command(&ctx, cmd).await,
        Commands::Vertex(cmd) => handle_vertex_command(&ctx, cmd).await,
    }?;

    let stats = ctx.client.stats();
    ctx.log(&format!(
        "{} request(s), {} error(s), average {:?}",
        stats.requests_sent, stats.request_errors, stats.average_request_time
    ));
    Ok(())
}

/// Parse `edges:from1,from2:to1,to2`
fn parse_definition(spec: &str) -> Result<EdgeDefinition> {
    let mut parts = spec.split(':');
    let collection = parts.next().filter(|c| !c.is_empty())
        .with_context(|| format!("edge definition '{}' has no collection", spec))?;

    let list = |part: Option<&str>| -> Vec<String> {
        part.map(|p| p.split(',').filter(|s| !s.is_empty()).map(str::to_string).collect())
            .unwrap_or_default()
    };
    let from = list(parts.next());
    let to = list(parts.next());
    anyhow::ensure!(parts.next().is_none(), "edge definition '{}' has too many parts", spec);

    Ok(EdgeDefinition::new(collection).with_from(from).with_to(to))
}

fn parse_json(data: &str) -> Result<Value> {
    serde_json::from_str(data).with_context(|| format!("invalid JSON document: {}", data))
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_graph(graph: &GraphEntity) {
    println!("📋 Graph '{}':", graph.name());
    for definition in &graph.edge_definitions {
        println!(
            "  🔗 {}: [{}] -> [{}]",
            definition.collection,
            definition.from.join(", "),
            definition.to.join(", ")
        );
    }
    if !graph.orphan_collections.is_empty() {
        println!("  📦 Orphans: {}", graph.orphan_collections.join(", "));
    }
}

async fn handle_graph_command(ctx: &ClientContext, cmd: GraphCommand) -> Result<()> {
    match cmd.action {
        GraphAction::List => {
            let graphs = ctx.client.db()?.get_graphs().await?;
            if graphs.is_empty() {
                println!("  (no graphs)");
            }
            for graph in &graphs {
                println!("  - {} ({} edge definition(s))", graph.name(), graph.edge_definitions.len());
            }
        }
        GraphAction::Info { name } => {
            let info = ctx.graph(&name)?.get_info().await?;
            print_graph(&info);
        }
        GraphAction::Create { name, definitions, orphans, wait_for_sync } => {
            let definitions = definitions
                .iter()
                .map(|d| parse_definition(d))
                .collect::<Result<Vec<_>>>()?;
            let options = graph_create_options(orphans, wait_for_sync);

            let info = ctx.graph(&name)?.create_with_options(definitions, options).await?;
            println!("✅ Graph '{}' created", info.name());
            print_graph(&info);
        }
        GraphAction::Drop { name, drop_collections } => {
            ctx.graph(&name)?.drop_with_collections(drop_collections).await?;
            println!("✅ Graph '{}' dropped", name);
        }
        GraphAction::VertexCollections { name } => {
            for collection in ctx.graph(&name)?.get_vertex_collections().await? {
                println!("  - {}", collection);
            }
        }
        GraphAction::AddVertexCollection { name, collection } => {
            let info = ctx.graph(&name)?.add_vertex_collection(&collection).await?;
            println!("✅ Vertex collection '{}' added", collection);
            print_graph(&info);
        }
        GraphAction::RemoveVertexCollection { name, collection } => {
            ctx.graph(&name)?.vertex_collection(collection.as_str()).drop().await?;
            println!("✅ Vertex collection '{}' removed from '{}'", collection, name);
        }
        GraphAction::EdgeDefinitions { name } => {
            for collection in ctx.graph(&name)?.get_edge_definitions().await? {
                println!("  - {}", collection);
            }
        }
        GraphAction::AddEdgeDefinition { name, definition } => {
            let definition = parse_definition(&definition)?;
            let info = ctx.graph(&name)?.add_edge_definition(&definition).await?;
            println!("✅ Edge definition '{}' added", definition.collection);
            print_graph(&info);
        }
        GraphAction::ReplaceEdgeDefinition { name, definition } => {
            let definition = parse_definition(&definition)?;
            let info = ctx.graph(&name)?.replace_edge_definition(&definition).await?;
            println!("✅ Edge definition '{}' replaced", definition.collection);
            print_graph(&info);
        }
        GraphAction::RemoveEdgeDefinition { name, collection } => {
            let info = ctx.graph(&name)?.remove_edge_definition(&collection).await?;
            println!("✅ Edge definition '{}' removed", collection);
            print_graph(&info);
        }
    }
    Ok(())
}

async fn handle_edge_command(ctx: &ClientContext, cmd: EdgeCommand) -> Result<()> {
    let edges = ctx.graph(&cmd.graph)?.edge_collection(cmd.collection.as_str());

    match cmd.action {
        DocumentAction::Insert { data, wait_for_sync } => {
            let options = EdgeCreateOptions {
                wait_for_sync: wait_for_sync.then_some(true),
                ..Default::default()
            };
            let entity = edges.insert_edge_with_options(&parse_json(&data)?, options).await?;
            println!("✅ Edge inserted: {} (rev {})", entity.meta.id, entity.meta.rev);
        }
        DocumentAction::Get { key, if_none_match } => {
            let mut options = DocumentReadOptions::new();
            if let Some(rev) = if_none_match {
                options = options.if_none_match(rev);
            }
            match edges.get_edge_with_options::<Value>(&key, options).await? {
                Some(edge) => print_json(&edge)?,
                None => println!("❌ Edge not found"),
            }
        }
        DocumentAction::Replace { key, data, rev } => {
            let mut options = EdgeReplaceOptions::new();
            if let Some(rev) = rev {
                options = options.if_match(rev);
            }
            let entity = edges.replace_edge_with_options(&key, &parse_json(&data)?, options).await?;
            println!("✅ Edge replaced: {} (rev {})", entity.meta.id, entity.meta.rev);
        }
        DocumentAction::Update { key, data, rev, drop_nulls } => {
            let mut options = EdgeUpdateOptions {
                keep_null: drop_nulls.then_some(false),
                ..Default::default()
            };
            if let Some(rev) = rev {
                options = options.if_match(rev);
            }
            let entity = edges.update_edge_with_options(&key, &parse_json(&data)?, options).await?;
            println!("✅ Edge updated: {} (rev {})", entity.meta.id, entity.meta.rev);
        }
        DocumentAction::Delete { key, rev } => {
            let mut options = EdgeDeleteOptions::new();
            if let Some(rev) = rev {
                options = options.if_match(rev);
            }
            edges.delete_edge_with_options(&key, options).await?;
            println!("✅ Edge '{}' deleted", key);
        }
    }
    Ok(())
}

async fn handle_vertex_command(ctx: &ClientContext, cmd: VertexCommand) -> Result<()> {
    let vertices = ctx.graph(&cmd.graph)?.vertex_collection(cmd.collection.as_str());

    match cmd.action {
        DocumentAction::Insert { data, wait_for_sync } => {
            let options = VertexCreateOptions {
                wait_for_sync: wait_for_sync.then_some(true),
                ..Default::default()
            };
            let entity = vertices.insert_vertex_with_options(&parse_json(&data)?, options).await?;
            println!("✅ Vertex inserted: {} (rev {})", entity.meta.id, entity.meta.rev);
        }
        DocumentAction::Get { key, if_none_match } => {
            let mut options = DocumentReadOptions::new();
            if let Some(rev) = if_none_match {
                options = options.if_none_match(rev);
            }
            match vertices.get_vertex_with_options::<Value>(&key, options).await? {
                Some(vertex) => print_json(&vertex)?,
                None => println!("❌ Vertex not found"),
            }
        }
        DocumentAction::Replace { key, data, rev } => {
            let mut options = VertexReplaceOptions::new();
            if let Some(rev) = rev {
                options = options.if_match(rev);
            }
            let entity = vertices.replace_vertex_with_options(&key, &parse_json(&data)?, options).await?;
            println!("✅ Vertex replaced: {} (rev {})", entity.meta.id, entity.meta.rev);
        }
        DocumentAction::Update { key, data, rev, drop_nulls } => {
            let mut options = VertexUpdateOptions {
                keep_null: drop_nulls.then_some(false),
                ..Default::default()
            };
            if let Some(rev) = rev {
                options = options.if_match(rev);
            }
            let entity = vertices.update_vertex_with_options(&key, &parse_json(&data)?, options).await?;
            println!("✅ Vertex updated: {} (rev {})", entity.meta.id, entity.meta.rev);
        }
        DocumentAction::Delete { key, rev } => {
            let mut options = VertexDeleteOptions::new();
            if let Some(rev) = rev {
                options = options.if_match(rev);
            }
            vertices.delete_vertex_with_options(&key, options).await?;
            println!("✅ Vertex '{}' deleted", key);
        }
    }
    Ok(())
}

/// Flags left off on the command line are not sent, so the server defaults apply
fn graph_create_options(orphans: Vec<String>, wait_for_sync: bool) -> GraphCreateOptions {
    GraphCreateOptions {
        wait_for_sync: wait_for_sync.then_some(true),
        ..GraphCreateOptions::new().orphan_collections(orphans)
    }
}
