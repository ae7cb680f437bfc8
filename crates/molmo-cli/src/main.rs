//! molmo - Query hosted Molmo and OLMo model endpoints
//!
//! Usage:
//!     molmo [OPTIONS] <INSTRUCTION>
//!
//! Environment Variables:
//!     MOLMO_API_KEY: Bearer token for endpoint authentication (required)
//!     MOLMO_ENDPOINT: Endpoint URL (default: the hosted multimodal endpoint)
//!
//! A `.env` file in the working directory is honored. Passing --image
//! selects the multimodal query; without it the text-only completion
//! endpoint protocol is used.

use anyhow::Result;
use clap::Parser;
use molmo_client::{Client, ClientConfig, ImageSource};
use tracing_subscriber::EnvFilter;

/// Query hosted Molmo and OLMo model endpoints
#[derive(Parser, Debug)]
#[command(name = "molmo")]
#[command(about = "Query hosted Molmo and OLMo model endpoints")]
#[command(after_help = r#"Examples:
    # Multimodal query with a local image (re-encoded as PNG + base64)
    molmo --image wildlands-trees.jpg "point to the trees"

    # Multimodal query with a remote image URL
    molmo --image https://example.com/trees.jpg "point to the trees"

    # Text-only completion (model id derived from the endpoint URL)
    molmo --endpoint https://ai2-reviz--olmo-2-0325-32b-instruct-combo.modal.run/completion "tell me a joke"
"#)]
struct Cli {
    /// Endpoint URL
    #[arg(
        long,
        env = "MOLMO_ENDPOINT",
        default_value = "https://ai2-reviz--uber-model-v4-synthetic.modal.run/completion_stream"
    )]
    endpoint: String,

    /// Bearer token for endpoint authentication
    #[arg(long, env = "MOLMO_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Image to send: a URL, a local file path, or base64 data
    #[arg(long)]
    image: Option<String>,

    /// Instruction to send to the model
    instruction: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before reading env-backed arguments
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Cli::parse();
    let client = Client::new(ClientConfig::new(&args.api_key));

    let answer = match &args.image {
        Some(raw) => {
            client
                .query_multimodal(&args.endpoint, &args.instruction, ImageSource::detect(raw))
                .await?
        }
        None => client.query_completion(&args.endpoint, &args.instruction).await?,
    };

    println!("{answer}");
    Ok(())
}
