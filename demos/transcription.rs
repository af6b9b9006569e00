// Audio transcription: uploads a local file as multipart form data.
// Run with: REGOLO_TOKEN=... cargo run --example transcription -- path/to/file.mp3
// ENDPOINT overrides the hosted whisper endpoint.

use regolo_invoke::defaults::{endpoints, env};
use regolo_invoke::{Invoker, TranscriptionRequest};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let file = std::env::args().nth(1).unwrap_or_else(|| "file.mp3".to_string());
    let endpoint =
        std::env::var(env::ENDPOINT).unwrap_or_else(|_| endpoints::TRANSCRIPTION.to_string());
    let credential = std::env::var(env::TOKEN).unwrap_or_default();

    let invoker = Invoker::builder()
        .endpoint(endpoint)
        .credential(credential)
        .with_http_debug()
        .build()?;

    let response = invoker
        .invoke(TranscriptionRequest::new("whisper-1", file))
        .await?;
    println!("{}", response.text());
    Ok(())
}
