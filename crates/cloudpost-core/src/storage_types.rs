use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Provider resource types
///
/// `Auto` asks the provider to infer the type from the uploaded bytes.
/// It's defined in core because it's used in configuration and by the provider client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    #[default]
    Auto,
    Image,
    Video,
    Raw,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Auto => "auto",
            ResourceType::Image => "image",
            ResourceType::Video => "video",
            ResourceType::Raw => "raw",
        }
    }
}

impl FromStr for ResourceType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ResourceType::Auto),
            "image" => Ok(ResourceType::Image),
            "video" => Ok(ResourceType::Video),
            "raw" => Ok(ResourceType::Raw),
            _ => Err(anyhow::anyhow!("Invalid resource type: {}", s)),
        }
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
