// ABOUTME: Fallback replies shown when the assistant provider fails
// ABOUTME: Maps error codes to a failure category and renders the practitioner-facing text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use std::fmt;

use serde::{Deserialize, Serialize};
use vitarva_core::errors::{AppError, ErrorCode};

/// Why a chat turn fell back instead of answering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCategory {
    /// Missing or rejected credentials
    Configuration,
    /// Quota exhausted or throttled
    RateLimited,
    /// Service unreachable
    Connection,
    /// Anything else
    Temporary,
}

impl FailureCategory {
    /// Categorise a provider error
    #[must_use]
    pub const fn from_error(error: &AppError) -> Self {
        match error.code {
            ErrorCode::ConfigMissing | ErrorCode::ConfigInvalid | ErrorCode::ExternalAuthFailed => {
                Self::Configuration
            }
            ErrorCode::ExternalRateLimited => Self::RateLimited,
            ErrorCode::ExternalServiceUnavailable => Self::Connection,
            _ => Self::Temporary,
        }
    }

    /// Heading of the fallback reply
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Configuration => "API Configuration Error",
            Self::RateLimited => "Service Temporarily Unavailable",
            Self::Connection => "Connection Error",
            Self::Temporary => "Temporary Issue",
        }
    }

    /// Explanation shown under the heading
    #[must_use]
    pub const fn explanation(self) -> &'static str {
        match self {
            Self::Configuration => {
                "There seems to be an issue with the API configuration. Please contact your system administrator."
            }
            Self::RateLimited => {
                "The AI service is currently experiencing high demand. Please try again in a few moments."
            }
            Self::Connection => {
                "Unable to connect to the AI service. Please check your internet connection and try again."
            }
            Self::Temporary => {
                "I'm experiencing a temporary issue. Please try rephrasing your question or try again in a moment."
            }
        }
    }

    /// Full markdown reply for this category
    #[must_use]
    pub fn render(self) -> String {
        format!(
            "**{title}**\n\n{explanation}\n\n\
             **Alternative Options:**\n\
             • Try asking a more specific question\n\
             • Check the example questions in the AyurBot interface\n\
             • Consult the Vitarva Food Library for immediate food/herb information\n\n\
             **Common Topics I Can Help With:**\n\
             • Ayurvedic properties of foods and herbs\n\
             • Dosha-specific meal planning\n\
             • Classical Ayurvedic concepts explanation\n\
             • Traditional recipes and preparation methods\n\n\
             ---\n\
             *AyurBot in Vitarva - Ayurvedic Practice Management* 🌿",
            title = self.title(),
            explanation = self.explanation(),
        )
    }
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            FailureCategory::from_error(&AppError::config_missing("no key")),
            FailureCategory::Configuration
        );
        assert_eq!(
            FailureCategory::from_error(&AppError::new(ErrorCode::ExternalRateLimited, "quota")),
            FailureCategory::RateLimited
        );
        assert_eq!(
            FailureCategory::from_error(&AppError::external_unavailable("Gemini", "dns")),
            FailureCategory::Connection
        );
        assert_eq!(
            FailureCategory::from_error(&AppError::internal("boom")),
            FailureCategory::Temporary
        );
    }

    #[test]
    fn test_render_has_heading_and_footer() {
        let text = FailureCategory::Connection.render();
        assert!(text.starts_with("**Connection Error**"));
        assert!(text.contains("Vitarva Food Library"));
        assert!(text.ends_with("🌿"));
    }
}
