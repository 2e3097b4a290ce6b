//! Query Draft
//!
//! Owned editable state behind the create/edit form. The form components
//! never hold keyword or model lists of their own; they call the mutation
//! methods here and re-render from the result.

use std::fmt;

use crate::model::{PromptSet, Query, QueryPayload};

/// Language label used when a query has no prompt yet
pub const DEFAULT_PROMPT_LANGUAGE: &str = "Español";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    MissingName,
    NoKeywords,
    NoPromptText,
    NoModels,
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::MissingName => write!(f, "Please enter a query group name."),
            DraftError::NoKeywords => write!(f, "Please add at least one keyword."),
            DraftError::NoPromptText => write!(f, "Please enter a prompt template."),
            DraftError::NoModels => write!(f, "Please select at least one AI model."),
        }
    }
}

impl std::error::Error for DraftError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDraft {
    pub name: String,
    pub keywords: Vec<String>,
    pub competitors: Vec<String>,
    pub prompt_language: String,
    pub prompt_text: String,
    pub selected_models: Vec<String>,
}

impl Default for QueryDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            keywords: Vec::new(),
            competitors: Vec::new(),
            prompt_language: DEFAULT_PROMPT_LANGUAGE.to_string(),
            prompt_text: String::new(),
            selected_models: Vec::new(),
        }
    }
}

/// Trimmed, non-empty, not already present: push and report `true`
fn push_unique(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|existing| existing == value) {
        return false;
    }
    list.push(value.to_string());
    true
}

impl QueryDraft {
    /// Load an existing query. The form edits a single prompt: the first one.
    pub fn from_query(query: &Query) -> Self {
        let (prompt_language, prompt_text) = query
            .prompts
            .first()
            .map(|(lang, text)| (lang.to_string(), text.to_string()))
            .unwrap_or_else(|| (DEFAULT_PROMPT_LANGUAGE.to_string(), String::new()));
        Self {
            name: query.name.clone(),
            keywords: query.keywords.clone(),
            competitors: query.competitors.clone(),
            prompt_language,
            prompt_text,
            selected_models: query.models.clone(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_prompt_text(&mut self, text: impl Into<String>) {
        self.prompt_text = text.into();
    }

    pub fn add_keyword(&mut self, keyword: &str) -> bool {
        push_unique(&mut self.keywords, keyword)
    }

    pub fn remove_keyword(&mut self, keyword: &str) {
        self.keywords.retain(|k| k != keyword);
    }

    pub fn add_competitor(&mut self, competitor: &str) -> bool {
        push_unique(&mut self.competitors, competitor)
    }

    pub fn remove_competitor(&mut self, competitor: &str) {
        self.competitors.retain(|c| c != competitor);
    }

    /// Select or deselect; newly selected models go to the end
    pub fn toggle_model(&mut self, model_id: &str) {
        if let Some(index) = self.selected_models.iter().position(|m| m == model_id) {
            self.selected_models.remove(index);
        } else {
            self.selected_models.push(model_id.to_string());
        }
    }

    pub fn is_selected(&self, model_id: &str) -> bool {
        self.selected_models.iter().any(|m| m == model_id)
    }

    /// Check the form and build the request body. Nothing is sent on error.
    pub fn validate(&self) -> Result<QueryPayload, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }
        if self.keywords.is_empty() {
            return Err(DraftError::NoKeywords);
        }
        let prompt_text = self.prompt_text.trim();
        if prompt_text.is_empty() {
            return Err(DraftError::NoPromptText);
        }
        if self.selected_models.is_empty() {
            return Err(DraftError::NoModels);
        }

        let mut prompts = PromptSet::new();
        prompts.insert(self.prompt_language.clone(), prompt_text);
        Ok(QueryPayload {
            name: name.to_string(),
            keywords: self.keywords.clone(),
            competitors: self.competitors.clone(),
            prompts,
            models: self.selected_models.clone(),
        })
    }
}
