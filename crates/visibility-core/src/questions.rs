//! Prompt Decomposition
//!
//! Every non-blank line of a prompt template is one question.

use crate::model::PromptSet;

/// Placeholder the backend substitutes with each keyword before asking a model
pub const KEYWORD_PLACEHOLDER: &str = "{keyword}";

/// One trimmed, non-blank prompt line plus the label of the prompt it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub language: String,
}

impl Question {
    /// The prompt actually sent to a model for `keyword`
    pub fn prompt_for(&self, keyword: &str) -> String {
        self.text.replace(KEYWORD_PLACEHOLDER, keyword)
    }
}

fn question_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(str::trim).filter(|line| !line.is_empty())
}

/// Questions in prompt order, then line order. Blank lines are dropped.
pub fn decompose(prompts: &PromptSet) -> Vec<Question> {
    prompts
        .iter()
        .flat_map(|(language, text)| {
            question_lines(text).map(move |line| Question {
                text: line.to_string(),
                language: language.to_string(),
            })
        })
        .collect()
}

pub fn question_count(prompts: &PromptSet) -> usize {
    prompts.iter().map(|(_, text)| question_lines(text).count()).sum()
}
