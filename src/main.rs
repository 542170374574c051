use anyhow::Result;
use clap::Parser;
use nanobanana::app::App;
use nanobanana::config::Config;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "nanobanana")]
#[command(about = "Generate an image from a text prompt using Nano Banana Pro")]
struct CliArgs {
    /// Prompt words; joined with single spaces.
    #[arg(value_name = "PROMPT", required = true, num_args = 1..)]
    prompt: Vec<String>,

    /// Directory the PNG is written into.
    #[arg(long, env = "NANOBANANA_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nanobanana=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();
    let prompt = args.prompt.join(" ");

    if prompt.trim().is_empty() {
        error!("Prompt cannot be empty");
        println!("Usage: nanobanana \"Your image prompt here\"");
        println!("\nExample:");
        println!("  nanobanana \"A fluffy cat sitting on a cloud\"");
        std::process::exit(1);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            if matches!(e, nanobanana::Error::MissingApiKey) {
                println!("\nTo fix this, set your API key:");
                println!("  export GEMINI_API_KEY='your-api-key-here'");
            }
            if let Some(hint) = e.hint() {
                println!("\n{}", hint);
            }
            std::process::exit(1);
        }
    };

    let app = App::new(&config, &args.output_dir);

    match app.run(&prompt).await {
        Ok(path) => {
            info!("Image generation complete");
            println!("Saved as: {}", path.display());
            Ok(())
        }
        Err(e) => {
            error!("Failed to generate image: {}", e);
            if let Some(hint) = e.hint() {
                println!("\n{}", hint);
            }
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn test_cli_requires_a_prompt() {
        assert!(CliArgs::try_parse_from(["nanobanana"]).is_err());
    }

    #[test]
    fn test_cli_collects_trailing_prompt_words() {
        let args = CliArgs::try_parse_from(["nanobanana", "A", "red", "apple"]).unwrap();
        assert_eq!(args.prompt.join(" "), "A red apple");
        assert_eq!(args.output_dir.to_str(), Some("."));
    }

    #[test]
    fn test_cli_accepts_output_dir_flag() {
        let args =
            CliArgs::try_parse_from(["nanobanana", "--output-dir", "/tmp/out", "apple"]).unwrap();
        assert_eq!(args.output_dir.to_str(), Some("/tmp/out"));
    }
}
