//! `text-trimmer` CLI entry-point.
//!
//! Available sub-commands:
//! - `adapt`: print the normalized schema of a node definition JSON file.
//! - `run`  : adapt, build and invoke a node definition against one record.
//! - `trim` : trim a string with settings given as flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use engine::models::{NodeData, NodeInputs, NodeMeta};
use engine::NodeDefinition;
use nodes::text_trimmer::{
    default_inputs, default_outputs, Config, TrimMode, INPUT_KEY, NODE_TYPE, OUTPUT_KEY,
};
use nodes::{AdaptOptions, NodeRegistry, Record, Value};

#[derive(Parser)]
#[command(
    name = "text-trimmer",
    about = "Adapt, build and invoke text trimmer workflow nodes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the normalized schema for a node definition.
    Adapt {
        /// Path to the node definition JSON file.
        path: PathBuf,
    },
    /// Run a node definition once and print its output record.
    Run {
        /// Path to the node definition JSON file.
        path: PathBuf,
        #[command(flatten)]
        input: RunInput,
    },
    /// Trim TEXT with the given settings and print the result.
    Trim {
        /// Trim mode: leadingTrailing, all, leading, trailing or custom.
        #[arg(long, env = "TEXT_TRIMMER_MODE", default_value = "leadingTrailing")]
        mode: String,
        /// Characters stripped from both ends in custom mode.
        #[arg(long, env = "TEXT_TRIMMER_CUSTOM_CHARS", default_value = "")]
        custom_chars: String,
        text: String,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct RunInput {
    /// Text placed under the node's input field.
    #[arg(long)]
    text: Option<String>,
    /// Path to a JSON object used as the whole input record.
    #[arg(long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = NodeRegistry::with_builtins();

    match cli.command {
        Command::Adapt { path } => {
            let definition = read_definition(&path)?;
            let schema = registry
                .adapt(&definition, &AdaptOptions::default())
                .with_context(|| format!("failed to adapt node '{}'", definition.id))?;
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Command::Run { path, input } => {
            let definition = read_definition(&path)?;
            let record = match (input.text, input.input) {
                (Some(text), _) => text_record(text),
                (None, Some(record_path)) => read_record(&record_path)?,
                (None, None) => anyhow::bail!("either --text or --input is required"),
            };
            let output = run(&registry, &definition, &record)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Trim { mode, custom_chars, text } => {
            let definition = trim_definition(Config::new(TrimMode::from(mode), custom_chars));
            let output = run(&registry, &definition, &text_record(text))?;
            match output.get(OUTPUT_KEY) {
                Some(value) => println!("{value}"),
                None => anyhow::bail!("node produced no '{OUTPUT_KEY}' field"),
            }
        }
    }

    Ok(())
}

fn run(registry: &NodeRegistry, definition: &NodeDefinition, record: &Record) -> Result<Record> {
    let (schema, node) = registry
        .adapt_and_build(definition)
        .with_context(|| format!("failed to prepare node '{}'", definition.id))?;
    info!("built node '{}' ({})", schema.key, schema.node_type);

    node.invoke(record)
        .with_context(|| format!("node '{}' failed", schema.key))
}

fn read_definition(path: &Path) -> Result<NodeDefinition> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid node definition in {}", path.display()))
}

fn read_record(path: &Path) -> Result<Record> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid input record in {}", path.display()))
}

fn text_record(text: String) -> Record {
    Record::from([(INPUT_KEY.to_owned(), Value::String(text))])
}

/// A standalone text trimmer definition carrying `config`.
fn trim_definition(config: Config) -> NodeDefinition {
    NodeDefinition {
        id: "cli".into(),
        node_type: NODE_TYPE.into(),
        data: NodeData {
            node_meta: NodeMeta {
                title: "Text Trimmer".into(),
                description: None,
            },
            inputs: Some(NodeInputs {
                input_parameters: default_inputs(),
                trim_params: config.to_trim_params(),
            }),
            outputs: default_outputs(),
        },
    }
}
