//! Basic OpenAI client usage example

use openai_client::{ChatRequest, Message, OpenAIClient, OpenAIError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from environment
    let client = OpenAIClient::from_env()?;

    let request = ChatRequest::new("gpt-3.5-turbo")
        .message(Message::system("You are a helpful assistant."))
        .message(Message::user("What is Rust in one sentence?"))
        .temperature(0.7)
        .output_limit(100);

    match client.chat_completion(request).await {
        Ok(response) => {
            println!(
                "Response: {}",
                response.content.as_deref().unwrap_or("<no content>")
            );
            if let Some(usage) = response.usage {
                println!("Tokens used: {}", usage.total_tokens);
            }
        }
        Err(OpenAIError::Auth(msg)) => eprintln!("Check OPENAI_API_KEY: {}", msg),
        Err(OpenAIError::QuotaExceeded(msg)) => eprintln!("Out of quota: {}", msg),
        Err(OpenAIError::RateLimited(msg)) => eprintln!("Slow down: {}", msg),
        Err(other) => return Err(other.into()),
    }

    Ok(())
}
