// Chat completion against a hosted model.
// Run with: ENDPOINT=... REGOLO_TOKEN=... cargo run --example chat_completion

use regolo_invoke::defaults::env;
use regolo_invoke::{ChatCompletionRequest, InvokerBuilder, InvokerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let invoker = InvokerBuilder::from_config(InvokerConfig::from_env(env::ENDPOINT, env::TOKEN)?)
        .with_http_debug()
        .build()?;

    let payload = ChatCompletionRequest::new("mistralai/Mistral-7B-Instruct-v0.2")
        .user("Tell me about Rome in a concise manner")
        .into_payload()?;

    let reply = invoker.invoke_json(payload).await?;
    println!("{}", serde_json::to_string_pretty(&reply.json)?);
    Ok(())
}
