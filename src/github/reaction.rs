//! Reaction tokens accepted by the GitHub reactions API.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::ActionError;

/// Emoji reaction that can be attached to an issue or an issue comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Reaction {
    /// 👍
    #[serde(rename = "+1")]
    ThumbsUp,
    /// 👎
    #[serde(rename = "-1")]
    ThumbsDown,
    /// 😄
    #[serde(rename = "laugh")]
    Laugh,
    /// 😕
    #[serde(rename = "confused")]
    Confused,
    /// ❤️
    #[serde(rename = "heart")]
    Heart,
    /// 🎉
    #[serde(rename = "hooray")]
    Hooray,
    /// 🚀
    #[serde(rename = "rocket")]
    Rocket,
    /// 👀
    #[serde(rename = "eyes")]
    Eyes,
}

impl Reaction {
    /// Token as sent in the `content` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThumbsUp => "+1",
            Self::ThumbsDown => "-1",
            Self::Laugh => "laugh",
            Self::Confused => "confused",
            Self::Heart => "heart",
            Self::Hooray => "hooray",
            Self::Rocket => "rocket",
            Self::Eyes => "eyes",
        }
    }
}

impl FromStr for Reaction {
    type Err = ActionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "+1" => Ok(Self::ThumbsUp),
            "-1" => Ok(Self::ThumbsDown),
            "laugh" => Ok(Self::Laugh),
            "confused" => Ok(Self::Confused),
            "heart" => Ok(Self::Heart),
            "hooray" => Ok(Self::Hooray),
            "rocket" => Ok(Self::Rocket),
            "eyes" => Ok(Self::Eyes),
            other => Err(ActionError::InvalidReaction {
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
