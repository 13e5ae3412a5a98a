use crate::format::DataFormat;
use crate::upload::UploadedFile;
use serde::{Deserialize, Serialize};
use strum::Display;

pub const PROGRESS_STEP: u8 = 10;
pub const PROGRESS_COMPLETE: u8 = 100;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ConversionPhase {
    #[default]
    Idle,
    Converting,
    Succeeded,
    /// No transition leads here. A simulated conversion cannot fail.
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkflowState {
    pub selected_file: Option<UploadedFile>,
    pub conversion_phase: ConversionPhase,
    pub target_format: Option<DataFormat>,
    pub progress_percent: u8,
}

impl WorkflowState {
    #[must_use]
    pub fn with_file(file: UploadedFile) -> Self {
        Self {
            selected_file: Some(file),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_file.is_none()
    }

    /// Conversion choices for the selected file, empty when nothing is selected.
    #[must_use]
    pub fn available_targets(&self) -> &'static [DataFormat] {
        match &self.selected_file {
            Some(file) => file.format.conversion_targets(),
            None => &[],
        }
    }
}
