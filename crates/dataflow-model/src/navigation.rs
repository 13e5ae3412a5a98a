use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NavigationSection {
    Dashboard,
    #[default]
    Upload,
    Files,
}
