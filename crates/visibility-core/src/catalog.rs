//! Model Display Names
//!
//! Maps model ids to human-readable names for column headers.

use std::collections::HashMap;

use crate::model::ModelInfo;

/// Names shown when the catalog endpoint is unavailable
const BUILTIN_NAMES: &[(&str, &str)] = &[
    ("meta-llama/llama-4-maverick-17b-128e-instruct", "Llama 4 Maverick"),
    ("meta-llama/llama-4-scout-17b-16e-instruct", "Llama 4 Scout"),
    ("qwen/qwen3-32b", "Qwen 3"),
    ("gemini-2.0-flash", "Gemini 2.0 Flash"),
    ("deepseek-chat", "DeepSeek Chat"),
];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelNames {
    names: HashMap<String, String>,
}

impl ModelNames {
    pub fn builtin() -> Self {
        Self {
            names: BUILTIN_NAMES
                .iter()
                .map(|(id, name)| (id.to_string(), name.to_string()))
                .collect(),
        }
    }

    /// Built-in names overlaid with the fetched catalog
    pub fn from_catalog(models: &[ModelInfo]) -> Self {
        let mut names = Self::builtin();
        for model in models {
            names.names.insert(model.id.clone(), model.name.clone());
        }
        names
    }

    /// Picker entries when the catalog endpoint is unavailable
    pub fn builtin_models() -> Vec<ModelInfo> {
        BUILTIN_NAMES.iter().map(|(id, name)| ModelInfo::new(*id, *name)).collect()
    }

    /// Display name for `model_id`; unknown ids display as themselves
    pub fn display_name<'a>(&'a self, model_id: &'a str) -> &'a str {
        self.names.get(model_id).map(String::as_str).unwrap_or(model_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_and_unknown_ids() {
        let names = ModelNames::builtin();
        assert_eq!(names.display_name("qwen/qwen3-32b"), "Qwen 3");
        assert_eq!(names.display_name("sonar-pro"), "sonar-pro");
    }

    #[test]
    fn test_builtin_models_keep_table_order() {
        let models = ModelNames::builtin_models();
        assert_eq!(models.len(), 5);
        assert_eq!(models[4].id, "deepseek-chat");
        assert_eq!(models[4].name, "DeepSeek Chat");
    }

    #[test]
    fn test_catalog_overrides_builtin() {
        let names = ModelNames::from_catalog(&[
            ModelInfo::new("qwen/qwen3-32b", "Qwen 3 32B"),
            ModelInfo::new("sonar-pro", "Perplexity Sonar Pro"),
        ]);
        assert_eq!(names.display_name("qwen/qwen3-32b"), "Qwen 3 32B");
        assert_eq!(names.display_name("sonar-pro"), "Perplexity Sonar Pro");
        assert_eq!(names.display_name("deepseek-chat"), "DeepSeek Chat");
    }
}
