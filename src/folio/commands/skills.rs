use crate::commands::CmdResult;
use crate::error::Result;
use crate::skills::SkillArea;

/// Every panel, or just the one named by `key`.
pub fn run(key: Option<&str>) -> Result<CmdResult> {
    let areas: Vec<SkillArea> = match key {
        Some(key) => vec![key.parse()?],
        None => SkillArea::all().to_vec(),
    };
    let skills = areas.into_iter().map(|area| (area, area.panel())).collect();
    Ok(CmdResult::default().with_skills(skills))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;

    #[test]
    fn lists_all_areas() {
        let result = run(None).unwrap();
        assert_eq!(result.skills.len(), SkillArea::all().len());
    }

    #[test]
    fn shows_one_area() {
        let result = run(Some("frontend")).unwrap();
        assert_eq!(result.skills.len(), 1);
        assert_eq!(result.skills[0].0, SkillArea::Frontend);
    }

    #[test]
    fn unknown_area_errors() {
        assert!(matches!(run(Some("cobol")), Err(FolioError::UnknownSkill(_))));
    }
}
