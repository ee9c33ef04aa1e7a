// Skills shown in the skills section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Devops,
    Tools,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Devops,
        SkillCategory::Tools,
        SkillCategory::Other,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Devops => "Tools & DevOps",
            SkillCategory::Tools => "Tools",
            SkillCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    /// 0-100.
    pub proficiency: u8,
}

impl Skill {
    pub fn new(name: &str, category: SkillCategory, proficiency: u8) -> Self {
        Self {
            name: name.to_string(),
            category,
            proficiency: proficiency.min(100),
        }
    }

    /// Proficiency as a gauge ratio.
    pub fn ratio(&self) -> f64 {
        f64::from(self.proficiency.min(100)) / 100.0
    }
}

/// Skills used when the config file lists none.
pub fn default_skills() -> Vec<Skill> {
    use SkillCategory::*;
    vec![
        Skill::new("React", Frontend, 90),
        Skill::new("TypeScript", Frontend, 85),
        Skill::new("Tailwind CSS", Frontend, 88),
        Skill::new("Next.js", Frontend, 82),
        Skill::new("Node.js", Backend, 85),
        Skill::new("Express", Backend, 80),
        Skill::new("PostgreSQL", Backend, 75),
        Skill::new("MongoDB", Backend, 78),
        Skill::new("Git", Devops, 90),
        Skill::new("Docker", Devops, 75),
        Skill::new("AWS", Devops, 70),
        Skill::new("CI/CD", Devops, 72),
    ]
}

/// Group skills by category, categories in display order, skills in input order.
/// Empty categories are left out.
pub fn group_by_category(skills: &[Skill]) -> Vec<(SkillCategory, Vec<&Skill>)> {
    SkillCategory::ALL
        .iter()
        .filter_map(|category| {
            let members: Vec<&Skill> = skills.iter().filter(|s| s.category == *category).collect();
            (!members.is_empty()).then_some((*category, members))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_three_categories() {
        let skills = default_skills();
        let groups = group_by_category(&skills);
        let titles: Vec<&str> = groups.iter().map(|(c, _)| c.title()).collect();
        assert_eq!(titles, vec!["Frontend", "Backend", "Tools & DevOps"]);
        assert!(groups.iter().all(|(_, members)| members.len() == 4));
    }

    #[test]
    fn proficiency_is_capped() {
        let skill = Skill::new("Rust", SkillCategory::Backend, 250);
        assert_eq!(skill.proficiency, 100);
        assert_eq!(skill.ratio(), 1.0);
    }

    #[test]
    fn group_keeps_input_order() {
        let skills = vec![
            Skill::new("Zig", SkillCategory::Other, 10),
            Skill::new("Rust", SkillCategory::Backend, 80),
            Skill::new("Ada", SkillCategory::Other, 20),
        ];
        let groups = group_by_category(&skills);
        assert_eq!(groups[0].0, SkillCategory::Backend);
        let other: Vec<&str> = groups[1].1.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(other, vec!["Zig", "Ada"]);
    }
}
