use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, PromptViMode};
use std::borrow::Cow;

pub static DEFAULT_PROMPT_INDICATOR: &str = "〉";
pub static DEFAULT_VI_INSERT_PROMPT_INDICATOR: &str = ": ";
pub static DEFAULT_MULTILINE_INDICATOR: &str = "::: ";

/// Shows where the session is, e.g. `dataflow [converting 40%]〉`.
#[derive(Clone, Debug)]
pub struct StatePrompt {
    label: String,
}

impl StatePrompt {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

impl Prompt for StatePrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Owned(format!("dataflow [{}]", self.label))
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::from("")
    }

    fn render_prompt_indicator(&self, prompt_mode: PromptEditMode) -> Cow<'_, str> {
        match prompt_mode {
            PromptEditMode::Default | PromptEditMode::Emacs | PromptEditMode::Vi(PromptViMode::Normal) => {
                DEFAULT_PROMPT_INDICATOR.into()
            }
            PromptEditMode::Vi(PromptViMode::Insert) => DEFAULT_VI_INSERT_PROMPT_INDICATOR.into(),
            PromptEditMode::Custom(str) => format!("({str})").into(),
        }
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(DEFAULT_MULTILINE_INDICATOR)
    }

    fn render_prompt_history_search_indicator(&self, history_search: PromptHistorySearch) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({prefix}reverse-search) \"{}\": ", history_search.term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_prompt_shows_label() {
        let prompt = StatePrompt::new("upload report.csv");
        assert_eq!(prompt.render_prompt_left(), "dataflow [upload report.csv]");
        assert_eq!(prompt.render_prompt_indicator(PromptEditMode::Default), DEFAULT_PROMPT_INDICATOR);
    }
}
