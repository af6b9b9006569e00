// Image generation with a text prompt.
// Run with: ENDPOINT=... REGOLO_TOKEN=... cargo run --example image_generation

use regolo_invoke::defaults::env;
use regolo_invoke::{ImageGenerationRequest, Invoker, InvokerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let invoker = Invoker::new(InvokerConfig::from_env(env::ENDPOINT, env::TOKEN)?)?;
    let payload = ImageGenerationRequest::new("Cat playing the piano").into_payload()?;

    let response = invoker.invoke(payload).await?;
    match response.json() {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(e) => {
            tracing::warn!(status = response.status, err = %e, "response is not a JSON object");
            println!("{}", response.text());
        }
    }
    Ok(())
}
