// ABOUTME: Caller-owned AyurBot conversation with bounded history and graceful failure
// ABOUTME: ChatSession records exchanges, trims history, signs long replies, and falls back on errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

//! # Chat Session
//!
//! A [`ChatSession`] is an ordinary value owned by whoever drives the
//! conversation; there is no process-wide chat state. Each session holds the
//! system prompt plus a transcript capped at the most recent
//! [`MAX_HISTORY_MESSAGES`] messages.
//!
//! [`ChatSession::send`] never returns an error. When the provider fails, the
//! unanswered user turn is removed from the transcript and a categorised
//! fallback reply is returned instead.

mod fallback;

pub use fallback::FailureCategory;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use vitarva_core::constants::chat::{
    ASSISTANT_NAME, MAX_HISTORY_MESSAGES, PRODUCT_NAME, SIGNATURE_MIN_LENGTH,
};
use vitarva_core::errors::AppError;

use crate::llm::{ayurbot_system_prompt, ChatMessage, ChatRequest, LlmProvider, TokenUsage};

/// Footer appended to long replies that do not name the assistant
pub const SIGNATURE: &str =
    "\n\n---\n*Powered by AyurBot in Vitarva - Your Ayurvedic Practice Management System* 🌿";

/// Text handed back for one user turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Markdown shown to the practitioner
    pub content: String,
    /// Set when the provider failed and `content` is a fallback
    pub failure: Option<FailureCategory>,
    /// Token accounting reported by the provider
    pub usage: Option<TokenUsage>,
}

impl ChatReply {
    /// Fallback reply for a failed turn
    #[must_use]
    pub fn fallback(category: FailureCategory) -> Self {
        Self {
            content: category.render(),
            failure: Some(category),
            usage: None,
        }
    }

    /// Fallback reply categorised from `error`
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self::fallback(FailureCategory::from_error(error))
    }

    /// Whether this reply came from the provider
    #[must_use]
    pub const fn is_answer(&self) -> bool {
        self.failure.is_none()
    }
}

/// One practitioner's conversation with the assistant
#[derive(Debug, Clone)]
pub struct ChatSession {
    system_prompt: ChatMessage,
    history: Vec<ChatMessage>,
    model: Option<String>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Session opened with the AyurBot system prompt
    #[must_use]
    pub fn new() -> Self {
        Self::with_system_prompt(ayurbot_system_prompt())
    }

    /// Session opened with a custom system prompt
    #[must_use]
    pub fn with_system_prompt(prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: ChatMessage::system(prompt),
            history: Vec::new(),
            model: None,
        }
    }

    /// Override the provider's default model for this session
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Send one user message and return the reply.
    ///
    /// On success the exchange is recorded; on failure the transcript is left
    /// exactly as it was before the call.
    pub async fn send(&mut self, provider: &dyn LlmProvider, text: &str) -> ChatReply {
        self.history.push(ChatMessage::user(text));

        let mut request = ChatRequest::with_assistant_defaults(self.request_messages());
        if let Some(model) = &self.model {
            request = request.with_model(model.clone());
        }

        match provider.complete(&request).await {
            Ok(response) => {
                self.history
                    .push(ChatMessage::assistant(response.content.clone()));
                self.trim_history();
                info!(
                    provider = provider.name(),
                    model = %response.model,
                    history = self.history.len(),
                    "Assistant replied"
                );
                ChatReply {
                    content: sign(response.content),
                    failure: None,
                    usage: response.usage,
                }
            }
            Err(error) => {
                self.history.pop();
                let category = FailureCategory::from_error(&error);
                warn!(
                    provider = provider.name(),
                    error = %error,
                    category = ?category,
                    "Assistant call failed, returning fallback reply"
                );
                ChatReply::fallback(category)
            }
        }
    }

    /// Forget the transcript, keeping the system prompt
    pub fn clear(&mut self) {
        debug!(dropped = self.history.len(), "Clearing chat history");
        self.history.clear();
    }

    /// Number of transcript messages, excluding the system prompt
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether nothing has been exchanged yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Transcript in order, excluding the system prompt
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.history
    }

    /// The system prompt message
    #[must_use]
    pub const fn system_prompt(&self) -> &ChatMessage {
        &self.system_prompt
    }

    fn request_messages(&self) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.history.len() + 1);
        messages.push(self.system_prompt.clone());
        messages.extend(self.history.iter().cloned());
        messages
    }

    fn trim_history(&mut self) {
        if self.history.len() > MAX_HISTORY_MESSAGES {
            let excess = self.history.len() - MAX_HISTORY_MESSAGES;
            self.history.drain(..excess);
            debug!(dropped = excess, "Trimmed chat history");
        }
    }
}

/// Append the signature to long replies that do not mention the assistant
#[must_use]
pub fn sign(reply: String) -> String {
    if reply.chars().count() > SIGNATURE_MIN_LENGTH
        && !reply.contains(ASSISTANT_NAME)
        && !reply.contains(PRODUCT_NAME)
    {
        reply + SIGNATURE
    } else {
        reply
    }
}
