use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

use tonal::{
    load_resources, read_file_async, report, select_input, Action, AnalysisResult, Analyzer,
    AnalyzerConfig, ResourcePaths,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "tonal")]
#[command(about = "Sentence-level sentiment analysis with extreme-region search")]
#[command(version)]
struct Args {
    /// Text to analyze; takes precedence over --file when non-empty
    text: Option<String>,

    /// Read the text to analyze from a UTF-8 file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Analysis to run
    #[arg(long, value_enum, default_value_t = Action::AnalyzeSentiment)]
    action: Action,

    /// Sentiment lexicon (term<TAB>score per line)
    #[arg(long, default_value = "AFINN-en-165.txt")]
    lexicon: PathBuf,

    /// Negation word list
    #[arg(long, default_value = "negations.txt")]
    negations: PathBuf,

    /// Dictionary word list used by remove-space
    #[arg(long, default_value = "2of12.txt")]
    dictionary: PathBuf,

    /// Sentences per fixed window
    #[arg(long, default_value_t = 3)]
    window_size: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logging on stderr keeps stdout for the report itself
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let paths = ResourcePaths {
        lexicon: args.lexicon.clone(),
        negations: args.negations.clone(),
        dictionary: args.dictionary.clone(),
    };
    // WHY: resources are loaded once, before any analysis, then only read
    let resources = load_resources(&paths).await?;

    let file_text = match &args.file {
        Some(path) => Some(read_file_async(path).await?),
        None => None,
    };

    let result = match select_input(args.text.clone(), file_text) {
        Some(text) => {
            let config = AnalyzerConfig {
                window_size: args.window_size,
            };
            let analyzer = Analyzer::new(&resources, config)?;
            analyzer.analyze(&text, args.action)
        }
        None => {
            info!("No input text supplied");
            AnalysisResult::default()
        }
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print!("{}", report::render_text(&result)),
    }

    Ok(())
}
