//! Language-model feedback.
//!
//! The adapter sends one chat completion request describing the
//! student's scores and the teacher's note, then runs the reply through
//! [`fix_grammar`]. Every failure is returned as an [`AiError`]; falling
//! back to template feedback is the caller's decision.

pub mod client;
mod error;
pub mod grammar;
pub mod prompt;

use std::error::Error;

use async_trait::async_trait;

use crate::config::AiConfig;
use crate::error::FeedbackError;
use crate::feedback::{FeedbackInput, FeedbackOrigin, FeedbackSource};
use crate::util::text_or_stdin;

pub use client::{ChatClient, ChatRequest, Message};
pub use error::AiError;
pub use grammar::fix_grammar;

/// Whether the adapter has a credential to work with.
pub fn is_available(config: &AiConfig) -> bool {
    config.is_available()
}

/// Request body for one student.
pub fn build_request(config: &AiConfig, input: &FeedbackInput<'_>) -> ChatRequest {
    ChatRequest {
        model: config.model.clone(),
        messages: vec![
            Message::system(prompt::SYSTEM_PROMPT),
            Message::user(prompt::user_prompt(input)),
        ],
        temperature: config.temperature,
        max_tokens: config.max_tokens,
        top_p: config.top_p,
    }
}

/// Generate feedback with the model, grammar-corrected.
pub async fn synthesize_ai(
    client: &ChatClient,
    config: &AiConfig,
    input: &FeedbackInput<'_>,
) -> Result<String, AiError> {
    let request = build_request(config, input);
    let completion = client.complete(&request).await?;
    tracing::debug!(
        model = %config.model,
        finish_reason = completion.finish_reason.as_deref().unwrap_or("none"),
        "completion received"
    );
    Ok(fix_grammar(&completion.content))
}

/// [`FeedbackSource`] backed by the chat API.
#[derive(Debug, Clone)]
pub struct AiSynthesizer {
    client: ChatClient,
    config: AiConfig,
}

impl AiSynthesizer {
    pub fn new(config: AiConfig) -> Result<Self, AiError> {
        let client = ChatClient::from_config(&config)?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl FeedbackSource for AiSynthesizer {
    fn name(&self) -> &'static str {
        "ai"
    }

    fn origin(&self) -> FeedbackOrigin {
        FeedbackOrigin::Ai
    }

    async fn generate(&self, input: &FeedbackInput<'_>) -> Result<String, FeedbackError> {
        Ok(synthesize_ai(&self.client, &self.config, input).await?)
    }
}

/// `sqg ai status`
pub fn run_status(config: &AiConfig) -> Result<(), Box<dyn Error>> {
    if is_available(config) {
        println!("AI feedback: available");
        println!("  endpoint: {}", config.base_url);
        println!("  model:    {}", config.model);
        println!("  timeout:  {}s", config.timeout.as_secs());
    } else {
        println!("AI feedback: not configured");
        println!("  set SQG_AI_API_KEY (or GROQ_API_KEY) to enable it");
    }
    Ok(())
}

/// `sqg ai polish`
pub fn run_polish(text: Option<String>) -> Result<(), Box<dyn Error>> {
    let text = text_or_stdin(text)?;
    print!("{}", fix_grammar(&text));
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
