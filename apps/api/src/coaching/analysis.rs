//! Analysis focus — the closed set of feedback dimensions a caller can
//! request, each bound to one fixed instruction string.
//!
//! The five instruction strings are contract text: the completion service's
//! output depends on their exact wording, so they must not be paraphrased.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    General,
    Objections,
    Closing,
    Rapport,
    Pitch,
}

#[derive(Debug, Error)]
#[error("unknown analysis type '{0}'; expected one of: general, objections, closing, rapport, pitch")]
pub struct UnknownAnalysisType(pub String);

impl AnalysisType {
    pub const ALL: [AnalysisType; 5] = [
        AnalysisType::General,
        AnalysisType::Objections,
        AnalysisType::Closing,
        AnalysisType::Rapport,
        AnalysisType::Pitch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisType::General => "general",
            AnalysisType::Objections => "objections",
            AnalysisType::Closing => "closing",
            AnalysisType::Rapport => "rapport",
            AnalysisType::Pitch => "pitch",
        }
    }

    /// The instruction appended to the composed prompt for this focus.
    pub fn instruction(self) -> &'static str {
        match self {
            AnalysisType::General => {
                "Analyze this sales conversation and provide general feedback on effectiveness, engagement, and areas of improvement. Include 3-5 specific recommendations."
            }
            AnalysisType::Objections => {
                "Analyze this sales conversation and identify objections raised by the customer. Provide specific strategies on how to better handle these objections. Include examples of improved responses."
            }
            AnalysisType::Closing => {
                "Analyze this sales conversation and provide feedback on the closing techniques used. Suggest improvements for better conversion. Include specific examples of stronger closing approaches."
            }
            AnalysisType::Rapport => {
                "Analyze this sales conversation and evaluate rapport building. Suggest ways to better connect with the customer. Provide examples of questions or statements that would improve relationship building."
            }
            AnalysisType::Pitch => {
                "Analyze this sales conversation and evaluate the sales pitch. Provide feedback on value proposition and messaging. Include specific examples of how to better communicate value."
            }
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: an unrecognized value is an error, never a silent fallback
/// to a different focus. The wire-level default for an *absent* field is
/// `general` and lives at the handler boundary, not here.
impl FromStr for AnalysisType {
    type Err = UnknownAnalysisType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(AnalysisType::General),
            "objections" => Ok(AnalysisType::Objections),
            "closing" => Ok(AnalysisType::Closing),
            "rapport" => Ok(AnalysisType::Rapport),
            "pitch" => Ok(AnalysisType::Pitch),
            other => Err(UnknownAnalysisType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_parses_from_its_wire_name() {
        for ty in AnalysisType::ALL {
            assert_eq!(ty.as_str().parse::<AnalysisType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_unknown_type_fails_fast() {
        let err = "sentiment".parse::<AnalysisType>().unwrap_err();
        assert!(err.to_string().contains("sentiment"));
        assert!("General".parse::<AnalysisType>().is_err());
    }

    #[test]
    fn test_instructions_are_distinct() {
        for a in AnalysisType::ALL {
            for b in AnalysisType::ALL {
                if a != b {
                    assert_ne!(a.instruction(), b.instruction());
                }
            }
        }
    }

    #[test]
    fn test_general_instruction_wording() {
        assert_eq!(
            AnalysisType::General.instruction(),
            "Analyze this sales conversation and provide general feedback on effectiveness, engagement, and areas of improvement. Include 3-5 specific recommendations."
        );
    }
}
