// ABOUTME: AyurBot chat command
// ABOUTME: One-shot question through the Gemini provider with the fallback reply on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use vitarva::chat::{ChatReply, ChatSession};
use vitarva::config::AppConfig;
use vitarva::llm::GeminiProvider;
use vitarva_core::errors::AppResult;

/// Ask a single question and print the reply as markdown
pub async fn ask(config: &AppConfig, message: &str) -> AppResult<()> {
    let reply = match GeminiProvider::from_config(&config.assistant) {
        Ok(provider) => {
            let mut session = ChatSession::new().with_model(config.assistant.model.clone());
            session.send(&provider, message).await
        }
        Err(e) => ChatReply::from_error(&e),
    };
    println!("{}", reply.content);
    Ok(())
}
