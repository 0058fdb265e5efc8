//! Skill explorer panels.
//!
//! Every skill key maps to exactly one panel. Keys are a closed enum so an
//! unknown key fails when it is parsed instead of silently showing nothing.

use crate::error::FolioError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillArea {
    Backend,
    Frontend,
    Data,
    Infrastructure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillPanel {
    pub heading: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

impl SkillArea {
    pub fn all() -> &'static [SkillArea] {
        &[
            SkillArea::Backend,
            SkillArea::Frontend,
            SkillArea::Data,
            SkillArea::Infrastructure,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            SkillArea::Backend => "backend",
            SkillArea::Frontend => "frontend",
            SkillArea::Data => "data",
            SkillArea::Infrastructure => "infrastructure",
        }
    }

    pub fn label(&self) -> &'static str {
        self.panel().heading
    }

    pub fn panel(&self) -> SkillPanel {
        match self {
            SkillArea::Backend => SkillPanel {
                heading: "Backend",
                summary: "Services and APIs built to stay boring in production.",
                highlights: &[
                    "HTTP and gRPC services",
                    "Relational schema design",
                    "Background job pipelines",
                ],
            },
            SkillArea::Frontend => SkillPanel {
                heading: "Frontend",
                summary: "Accessible interfaces without framework lock-in.",
                highlights: &[
                    "Semantic HTML and ARIA",
                    "Responsive layouts",
                    "Progressive enhancement",
                ],
            },
            SkillArea::Data => SkillPanel {
                heading: "Data",
                summary: "Getting numbers from where they are to where they are useful.",
                highlights: &["Batch and streaming ETL", "SQL analytics", "Data quality checks"],
            },
            SkillArea::Infrastructure => SkillPanel {
                heading: "Infrastructure",
                summary: "Reproducible environments and quiet deploys.",
                highlights: &["Containers", "CI/CD pipelines", "Observability"],
            },
        }
    }
}

impl std::fmt::Display for SkillArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for SkillArea {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        SkillArea::all()
            .iter()
            .copied()
            .find(|area| area.key() == key)
            .ok_or_else(|| FolioError::UnknownSkill(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_area_round_trips_through_its_key() {
        for area in SkillArea::all() {
            assert_eq!(area.key().parse::<SkillArea>().unwrap(), *area);
        }
    }

    #[test]
    fn keys_are_case_insensitive() {
        assert_eq!(" Data ".parse::<SkillArea>().unwrap(), SkillArea::Data);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "cobol".parse::<SkillArea>().unwrap_err();
        assert!(matches!(err, FolioError::UnknownSkill(ref k) if k == "cobol"));
    }

    #[test]
    fn panels_have_content() {
        for area in SkillArea::all() {
            let panel = area.panel();
            assert!(!panel.summary.is_empty());
            assert!(!panel.highlights.is_empty());
        }
        assert_eq!(SkillArea::Infrastructure.label(), "Infrastructure");
    }
}
