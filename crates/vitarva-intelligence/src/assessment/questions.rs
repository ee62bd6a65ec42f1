// ABOUTME: Fixed dosha questionnaire embedded at build time
// ABOUTME: Question, AnswerOption, QuestionCategory, and the 15-question QuestionBank
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use vitarva_core::errors::{AppError, AppResult};
use vitarva_core::models::Dosha;
use vitarva_core::models::Dosha::{Kapha, Pitta, Vata};

/// Question identifier, unique within a bank
pub type QuestionId = u16;

/// Informational grouping of questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    /// Build, skin, eyes, sweat, climate
    Physical,
    /// Appetite and elimination
    Digestion,
    /// Stress, memory, change, speech
    Mental,
    /// Energy and pace
    Energy,
    /// Sleep and dreams
    Sleep,
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Physical => "physical",
            Self::Digestion => "digestion",
            Self::Mental => "mental",
            Self::Energy => "energy",
            Self::Sleep => "sleep",
        })
    }
}

/// One selectable answer, tagged with the axis it counts towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    /// Axis this option scores for
    pub dosha: Dosha,
    /// Short answer text
    pub text: &'static str,
    /// Longer explanation shown under the answer
    pub description: &'static str,
}

/// One questionnaire item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Identifier
    pub id: QuestionId,
    /// Prompt text
    pub prompt: &'static str,
    /// Grouping
    pub category: QuestionCategory,
    /// Exactly one option per axis
    pub options: [AnswerOption; 3],
}

impl Question {
    /// Option that scores for `dosha`
    #[must_use]
    pub fn option_for(&self, dosha: Dosha) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.dosha == dosha)
    }
}

/// Ordered, immutable set of questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl QuestionBank {
    /// The standard 15-question constitution assessment
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            questions: STANDARD_QUESTIONS,
        }
    }

    /// Wrap a caller-defined question table
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` if the table fails [`QuestionBank::validate`]
    pub fn from_static(questions: &'static [Question]) -> AppResult<Self> {
        let bank = Self { questions };
        bank.validate()?;
        Ok(bank)
    }

    /// Questions in presentation order
    #[must_use]
    pub const fn questions(&self) -> &'static [Question] {
        self.questions
    }

    /// Number of questions
    #[must_use]
    pub const fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank has no questions
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Look up a question by id
    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&'static Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Whether `id` belongs to this bank
    #[must_use]
    pub fn contains(&self, id: QuestionId) -> bool {
        self.get(id).is_some()
    }

    /// Check unique ids and one option per axis on every question
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` naming the first offending question
    pub fn validate(&self) -> AppResult<()> {
        let mut seen = BTreeSet::new();
        for question in self.questions {
            if !seen.insert(question.id) {
                return Err(AppError::invalid_input(format!(
                    "Duplicate question id {}",
                    question.id
                )));
            }
            for dosha in Dosha::ALL {
                let count = question
                    .options
                    .iter()
                    .filter(|o| o.dosha == dosha)
                    .count();
                if count != 1 {
                    return Err(AppError::invalid_input(format!(
                        "Question {} has {count} options for {dosha}, expected 1",
                        question.id
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

const fn option(dosha: Dosha, text: &'static str, description: &'static str) -> AnswerOption {
    AnswerOption {
        dosha,
        text,
        description,
    }
}

const fn question(
    id: QuestionId,
    prompt: &'static str,
    category: QuestionCategory,
    options: [AnswerOption; 3],
) -> Question {
    Question {
        id,
        prompt,
        category,
        options,
    }
}

use QuestionCategory::{Digestion, Energy, Mental, Physical, Sleep};

static STANDARD_QUESTIONS: &[Question] = &[
    question(
        1,
        "How would you describe your physical build?",
        Physical,
        [
            option(
                Vata,
                "Thin, light frame with prominent joints",
                "Small bones, low body weight, difficulty gaining weight",
            ),
            option(
                Pitta,
                "Medium, well-proportioned build",
                "Moderate bone structure, medium muscle development",
            ),
            option(
                Kapha,
                "Large, heavy frame with good muscle development",
                "Large bones, tendency to gain weight easily",
            ),
        ],
    ),
    question(
        2,
        "How is your skin and hair?",
        Physical,
        [
            option(
                Vata,
                "Dry skin, thin hair",
                "Rough, dry skin that cracks easily, coarse hair",
            ),
            option(
                Pitta,
                "Warm, oily skin, fine hair",
                "Sensitive skin, tendency to redness, early graying",
            ),
            option(
                Kapha,
                "Smooth, oily skin, thick hair",
                "Soft, moist skin, lustrous thick hair",
            ),
        ],
    ),
    question(
        3,
        "How do you typically react to weather?",
        Physical,
        [
            option(
                Vata,
                "I dislike cold and wind intensely",
                "I prefer warm, humid climates and layer up in the cold",
            ),
            option(
                Pitta,
                "I can't stand extreme heat or sun",
                "I prefer cooler environments and can get overheated easily",
            ),
            option(
                Kapha,
                "I dislike cold, damp, and cloudy weather",
                "I feel sluggish in damp weather and energized by warmth",
            ),
        ],
    ),
    question(
        4,
        "How would you describe your eyes?",
        Physical,
        [
            option(
                Vata,
                "Small, active, and somewhat dry",
                "Tendency for dark circles, quick eye movements",
            ),
            option(
                Pitta,
                "Sharp, piercing, and medium-sized",
                "Penetrating gaze, can be sensitive to light, may have reddish whites",
            ),
            option(
                Kapha,
                "Large, calm, and well-lubricated",
                "Thick eyelashes, a loving or gentle gaze, whites are very white",
            ),
        ],
    ),
    question(
        5,
        "What is your typical sweating pattern?",
        Physical,
        [
            option(
                Vata,
                "Minimal sweat, even during exercise",
                "I rarely sweat much, and it has little to no odor",
            ),
            option(
                Pitta,
                "I sweat easily and profusely, especially when hot",
                "My sweat can be hot and have a strong, sharp odor",
            ),
            option(
                Kapha,
                "Moderate sweat during exertion, but slow to start",
                "My sweat is cool and has a pleasant or mild odor",
            ),
        ],
    ),
    question(
        6,
        "How is your appetite and digestion?",
        Digestion,
        [
            option(
                Vata,
                "Irregular appetite, gas and bloating",
                "Sometimes very hungry, sometimes I forget to eat",
            ),
            option(
                Pitta,
                "Strong appetite, good digestion",
                "I get irritable or 'hangry' if I miss a meal",
            ),
            option(
                Kapha,
                "Steady appetite, slow digestion",
                "I can skip meals easily and feel heavy after eating",
            ),
        ],
    ),
    question(
        7,
        "What are your typical bowel movements like?",
        Digestion,
        [
            option(
                Vata,
                "Dry, hard, and infrequent; prone to constipation",
                "Tendency for small, irregular movements and gas",
            ),
            option(
                Pitta,
                "Frequent, soft, and sometimes loose",
                "Often more than once a day, may be urgent or have a burning sensation",
            ),
            option(
                Kapha,
                "Slow, regular, but can be heavy and thick",
                "Usually once a day, well-formed but may feel sluggish",
            ),
        ],
    ),
    question(
        8,
        "How do you handle stress and emotions?",
        Mental,
        [
            option(
                Vata,
                "I get anxious and worried quickly",
                "My mind races, and I find it hard to concentrate under stress",
            ),
            option(
                Pitta,
                "I become angry, critical, or irritated",
                "I can be sharp-tongued or judgmental when stressed",
            ),
            option(
                Kapha,
                "I remain calm but may withdraw or shut down",
                "I become lethargic and unmotivated when overwhelmed",
            ),
        ],
    ),
    question(
        9,
        "What is your memory and learning style like?",
        Mental,
        [
            option(
                Vata,
                "I learn very quickly, but also forget quickly",
                "Great short-term memory, but struggle with long-term recall",
            ),
            option(
                Pitta,
                "My mind is sharp and I learn systematically",
                "I have a focused, penetrating intellect and good memory",
            ),
            option(
                Kapha,
                "I learn slowly and methodically, but never forget",
                "Excellent long-term memory once a concept is understood",
            ),
        ],
    ),
    question(
        10,
        "How do you approach new situations or change?",
        Mental,
        [
            option(
                Vata,
                "I get excited by newness but also become anxious easily",
                "I love spontaneity but can feel ungrounded by too much change",
            ),
            option(
                Pitta,
                "I take charge and create a plan to manage it",
                "I see change as a challenge to conquer and organize",
            ),
            option(
                Kapha,
                "I resist change and prefer stability and routine",
                "I am slow to adapt and value the comfort of the familiar",
            ),
        ],
    ),
    question(
        11,
        "What is your communication style?",
        Mental,
        [
            option(
                Vata,
                "Fast, talkative, and enthusiastic, jumping between topics",
                "I love to chat, and my thoughts can sometimes be scattered",
            ),
            option(
                Pitta,
                "Precise, articulate, and direct; I get to the point",
                "My speech is focused and persuasive, but can be sharp or critical",
            ),
            option(
                Kapha,
                "Calm, thoughtful, and a good listener; I speak slowly",
                "I choose my words carefully and offer a comforting presence",
            ),
        ],
    ),
    question(
        12,
        "What is your energy level throughout the day?",
        Energy,
        [
            option(
                Vata,
                "High bursts followed by fatigue",
                "My energy comes in spurts; I'm not a marathon runner",
            ),
            option(
                Pitta,
                "Consistent, moderate to high energy",
                "I have strong, focused energy, especially in the afternoon",
            ),
            option(
                Kapha,
                "Steady, slow to start but good endurance",
                "Lower energy in the mornings, but steady throughout the day",
            ),
        ],
    ),
    question(
        13,
        "What is your general pace of activity (walking, performing tasks)?",
        Energy,
        [
            option(
                Vata,
                "Quick and fast-paced, always on the move",
                "I tend to do everything quickly, sometimes in a rush",
            ),
            option(
                Pitta,
                "Purposeful and intense, with a clear goal in mind",
                "I move with determination and dislike wasting time or motion",
            ),
            option(
                Kapha,
                "Slow, steady, and methodical",
                "I prefer a relaxed, unhurried pace and enjoy the process",
            ),
        ],
    ),
    question(
        14,
        "What is your sleep pattern like?",
        Sleep,
        [
            option(
                Vata,
                "Light sleeper, difficulty falling asleep",
                "I often have interrupted sleep and an active mind at night",
            ),
            option(
                Pitta,
                "Moderate sleeper, fall asleep easily",
                "I sleep soundly but can wake up feeling hot or with intense dreams",
            ),
            option(
                Kapha,
                "Deep, heavy sleeper, need 8+ hours",
                "I love to sleep and have a very hard time waking up",
            ),
        ],
    ),
    question(
        15,
        "What are your dreams usually like?",
        Sleep,
        [
            option(
                Vata,
                "Active, anxious dreams; flying, running, or being chased",
                "My dreams are often vivid, imaginative, and sometimes fearful",
            ),
            option(
                Pitta,
                "Intense, problem-solving, or confrontational dreams",
                "I often dream about conflicts, arguments, fire, or achieving goals",
            ),
            option(
                Kapha,
                "Calm, romantic, or watery dreams; lakes, oceans, clouds",
                "My dreams are peaceful, serene, and often pleasant",
            ),
        ],
    ),
];
