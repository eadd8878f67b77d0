use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use costclassifier::classify::ProgressBarSink;
use costclassifier::export::{build_rows, export_file_name, save_workbook, write_workbook};
use costclassifier::models::ClassificationResult;
use costclassifier::sheets::load_items;
use costclassifier::{
    ClassificationPipeline, Config, Error, OpenAIProvider, PipelineConfig, TaxonomyCache,
};

#[derive(Parser, Debug)]
#[command(name = "costclassifier")]
#[command(version = "0.1.0")]
#[command(about = "Classify trial balance line items against a cost taxonomy")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify every item in column A of a spreadsheet
    Batch {
        /// Taxonomy workbook (header on row 5, columns B-F)
        #[arg(short, long)]
        taxonomy: PathBuf,

        /// Item workbook (column A, no header)
        #[arg(short, long)]
        items: PathBuf,

        /// Output file (defaults to classified_trial_balance_<timestamp>.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        oracle: OracleArgs,
    },
    /// Classify a single item description
    Classify {
        /// Taxonomy workbook (header on row 5, columns B-F)
        #[arg(short, long)]
        taxonomy: PathBuf,

        /// Item description to classify
        #[arg(long)]
        text: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        #[command(flatten)]
        oracle: OracleArgs,
    },
}

#[derive(Args, Debug)]
struct OracleArgs {
    /// OpenAI API key (defaults to OPENAI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Model identifier (defaults to OPENAI_MODEL or gpt-4o)
    #[arg(long)]
    model: Option<String>,
}

impl OracleArgs {
    fn apply(&self, config: Config) -> Config {
        let mut config = config.with_api_key(self.api_key.clone());
        if let Some(ref model) = self.model {
            config.model = model.clone();
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("costclassifier=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Command::Batch {
            taxonomy,
            items,
            output,
            oracle,
        } => run_batch(oracle.apply(config), &taxonomy, &items, output).await,
        Command::Classify {
            taxonomy,
            text,
            format,
            oracle,
        } => run_classify(oracle.apply(config), &taxonomy, &text, &format).await,
    }
}

async fn run_batch(
    config: Config,
    taxonomy_path: &Path,
    items_path: &Path,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let taxonomy_bytes = std::fs::read(taxonomy_path)?;
    let item_bytes = std::fs::read(items_path)?;

    let llm = OpenAIProvider::from_config(&config)?;
    let pipeline = ClassificationPipeline::new(llm, PipelineConfig::from(&config));

    let items = load_items(&item_bytes)?;
    pipeline.check_item_count(items.len())?;

    let mut cache = TaxonomyCache::new();
    let taxonomy = cache.get_or_load(&taxonomy_bytes)?;

    let progress = ProgressBarSink::new(items.len());
    let results = pipeline.run(&taxonomy.block, &items, &progress).await?;
    progress.finish("Classification complete");

    let rows = build_rows(&items, &results)?;
    let workbook = write_workbook(&rows)?;
    let path = output.unwrap_or_else(|| PathBuf::from(export_file_name(&chrono::Local::now())));
    save_workbook(&path, &workbook)?;

    let summary = results.summary();
    println!(
        "{} items classified into {} ({} errors)",
        summary.total,
        path.display(),
        summary.errors
    );

    Ok(())
}

async fn run_classify(
    config: Config,
    taxonomy_path: &Path,
    text: &str,
    format: &str,
) -> anyhow::Result<()> {
    if text.trim().is_empty() {
        return Err(Error::Config("item text is empty".to_string()).into());
    }

    let taxonomy_bytes = std::fs::read(taxonomy_path)?;
    let llm = OpenAIProvider::from_config(&config)?;
    let pipeline = ClassificationPipeline::new(llm, PipelineConfig::from(&config));

    let mut cache = TaxonomyCache::new();
    let taxonomy = cache.get_or_load(&taxonomy_bytes)?;

    let result = pipeline.classify_one(&taxonomy.block, text).await;

    let output = match format {
        "json" => serde_json::to_string_pretty(&result)?,
        _ => format_text(&result),
    };
    println!("{}", output);

    Ok(())
}

fn format_text(result: &ClassificationResult) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Lv1#: {}, Lv1name: {}\n",
        result.lv1_code, result.lv1_name
    ));
    output.push_str(&format!(
        "Lv2#: {}, Lv2name: {}\n",
        result.lv2_code, result.lv2_name
    ));
    if !result.reason.is_empty() {
        output.push_str(&format!("理由:\n{}\n", result.reason));
    }

    output
}
