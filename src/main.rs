use anyhow::Result;
use briefsmith::{process_batch, process_single_file, Mode, RunConfig, Settings};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const EXAMPLES: &str = "Examples:
  briefsmith notes.txt --mode internal
  briefsmith meeting_transcript.docx --mode client
  briefsmith client_call.txt --mode client --output-dir outputs --email-ready
  briefsmith --batch-dir ./meeting_notes --mode investment --max-bullets 3";

#[derive(Parser, Debug)]
#[command(
    name = "briefsmith",
    version,
    about = "Convert messy text notes into a structured consulting/PE work brief",
    after_help = EXAMPLES
)]
struct Cli {
    /// Path to a .txt or .docx notes file (omit when using --batch-dir)
    #[arg(required_unless_present = "batch_dir", conflicts_with = "batch_dir")]
    input_path: Option<PathBuf>,

    /// Output framing mode
    #[arg(long, value_enum)]
    mode: Mode,

    /// Directory for generated markdown [default: outputs]
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Batch process every .txt and .docx file in this directory
    #[arg(long)]
    batch_dir: Option<PathBuf>,

    /// Maximum bullets per section (overrides mode defaults)
    #[arg(long, value_parser = parse_positive)]
    max_bullets: Option<usize>,

    /// Maximum number of key takeaways [default: 4]
    #[arg(long, value_parser = parse_positive)]
    max_ktas: Option<usize>,

    /// Include a team update email draft section
    #[arg(long, overrides_with = "no_email_ready")]
    email_ready: bool,

    /// Leave out the email draft even when settings enable it
    #[arg(long, overrides_with = "email_ready")]
    no_email_ready: bool,

    /// Output machine-readable JSON
    #[arg(long)]
    json: bool,

    /// Settings file (toml/yaml/json, extension optional)
    #[arg(long, default_value = Settings::DEFAULT_PATH)]
    config: String,
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Serialize)]
struct RunSummary {
    mode: Mode,
    outputs: Vec<PathBuf>,
}

fn parse_positive(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        Ok(_) => Err("must be >= 1".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;

    let config = RunConfig {
        mode: cli.mode,
        output_dir: cli.output_dir.unwrap_or(settings.output_dir),
        max_bullets: cli.max_bullets.or(settings.max_bullets),
        max_ktas: cli.max_ktas.unwrap_or(settings.max_ktas),
        email_ready: !cli.no_email_ready && (cli.email_ready || settings.email_ready),
    };
    config.validate()?;
    info!("Running in {} mode", config.mode);

    let (outputs, batch) = match (cli.input_path, cli.batch_dir) {
        (_, Some(batch_dir)) => (process_batch(&batch_dir, &config)?, true),
        (Some(input_path), None) => (vec![process_single_file(&input_path, &config)?], false),
        (None, None) => anyhow::bail!("Provide either input_path or --batch-dir."),
    };

    if cli.json {
        let out = JsonOut {
            ok: true,
            data: RunSummary {
                mode: config.mode,
                outputs,
            },
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if batch {
        println!("Batch complete: {} briefs generated.", outputs.len());
        for path in &outputs {
            println!("- {}", path.display());
        }
    } else {
        for path in &outputs {
            println!("Brief generated: {}", path.display());
        }
    }

    Ok(())
}
