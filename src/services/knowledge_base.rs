use crate::models::FitProfile;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the knowledge base
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("Failed to read knowledge base: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON knowledge base: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML knowledge base: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported knowledge base format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid profile at index {index}: {reason}")]
    InvalidProfile { index: usize, reason: String },
}

/// On-disk knowledge base formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnowledgeBaseFormat {
    /// A JSON array of profiles
    Json,
    /// A TOML document with `[[profiles]]` tables
    Toml,
}

impl KnowledgeBaseFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, KnowledgeBaseError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(KnowledgeBaseError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TomlKnowledgeBase {
    #[serde(default)]
    profiles: Vec<FitProfile>,
}

/// Loader for the fit profile knowledge base
///
/// Loading happens once at startup; a failure here must stop the service
/// from serving traffic.
pub struct KnowledgeBase;

impl KnowledgeBase {
    /// Read and validate profiles from a JSON or TOML file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Vec<FitProfile>, KnowledgeBaseError> {
        let path = path.as_ref();
        let format = KnowledgeBaseFormat::from_path(path)?;
        let contents = tokio::fs::read_to_string(path).await?;

        let profiles = Self::parse(&contents, format)?;

        if profiles.is_empty() {
            tracing::warn!("Knowledge base {} is empty, every query will get generic guidance", path.display());
        } else {
            tracing::info!("Loaded {} fit profiles from {}", profiles.len(), path.display());
        }

        Ok(profiles)
    }

    /// Parse and validate profiles from in-memory contents
    pub fn parse(contents: &str, format: KnowledgeBaseFormat) -> Result<Vec<FitProfile>, KnowledgeBaseError> {
        let profiles: Vec<FitProfile> = match format {
            KnowledgeBaseFormat::Json => serde_json::from_str(contents)?,
            KnowledgeBaseFormat::Toml => toml::from_str::<TomlKnowledgeBase>(contents)?.profiles,
        };

        for (index, profile) in profiles.iter().enumerate() {
            validate_profile(index, profile)?;
        }

        Ok(profiles)
    }
}

fn validate_profile(index: usize, profile: &FitProfile) -> Result<(), KnowledgeBaseError> {
    if profile.description.trim().is_empty() {
        return Err(KnowledgeBaseError::InvalidProfile {
            index,
            reason: "description is empty".to_string(),
        });
    }
    if profile.recommendation.trim().is_empty() {
        return Err(KnowledgeBaseError::InvalidProfile {
            index,
            reason: "recommendation is empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IssueTag;

    #[test]
    fn test_parse_json_with_optional_fields() {
        let contents = r#"[
            {
                "description": "32 underbust 34 overbust",
                "recommendation": "32D",
                "reasoning": "Two inch difference.",
                "fit_tips": "Use the loosest hook.",
                "common_issues": ["band_riding_up", "cup_gapping"]
            },
            { "description": "straps falling", "recommendation": "34B" }
        ]"#;

        let profiles = KnowledgeBase::parse(contents, KnowledgeBaseFormat::Json).unwrap();

        assert_eq!(profiles.len(), 2);
        assert!(profiles[0].common_issues.contains(&IssueTag::CupGapping));
        assert_eq!(profiles[1].reasoning, "");
        assert_eq!(profiles[1].fit_tips, "");
        assert!(profiles[1].common_issues.is_empty());
    }

    #[test]
    fn test_parse_toml() {
        let contents = r#"
            [[profiles]]
            description = "36 underbust 40 overbust"
            recommendation = "36B"
            common_issues = ["straps_falling"]
        "#;

        let profiles = KnowledgeBase::parse(contents, KnowledgeBaseFormat::Toml).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].recommendation, "36B");
    }

    #[test]
    fn test_empty_collection_is_valid() {
        let profiles = KnowledgeBase::parse("[]", KnowledgeBaseFormat::Json).unwrap();
        assert!(profiles.is_empty());
    }

    #[test]
    fn test_missing_description_rejected() {
        let result = KnowledgeBase::parse(r#"[{"recommendation": "32D"}]"#, KnowledgeBaseFormat::Json);
        assert!(matches!(result, Err(KnowledgeBaseError::Json(_))));
    }

    #[test]
    fn test_blank_recommendation_rejected() {
        let result = KnowledgeBase::parse(
            r#"[{"description": "32 band", "recommendation": " "}]"#,
            KnowledgeBaseFormat::Json,
        );
        assert!(matches!(
            result,
            Err(KnowledgeBaseError::InvalidProfile { index: 0, .. })
        ));
    }

    #[test]
    fn test_unknown_issue_tag_rejected() {
        let result = KnowledgeBase::parse(
            r#"[{"description": "32 band", "recommendation": "32B", "common_issues": ["itchy_lace"]}]"#,
            KnowledgeBaseFormat::Json,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            KnowledgeBaseFormat::from_path(Path::new("data/kb.json")).unwrap(),
            KnowledgeBaseFormat::Json
        );
        assert_eq!(
            KnowledgeBaseFormat::from_path(Path::new("kb.TOML")).unwrap(),
            KnowledgeBaseFormat::Toml
        );
        assert!(KnowledgeBaseFormat::from_path(Path::new("kb.yaml")).is_err());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = KnowledgeBase::load("does/not/exist.json").await;
        assert!(matches!(result, Err(KnowledgeBaseError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_bundled_knowledge_base() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/bra_fitting_data.json");
        let profiles = KnowledgeBase::load(path).await.unwrap();
        assert!(!profiles.is_empty());
    }
}
