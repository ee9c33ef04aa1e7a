// Portfolio model.
// Project records derived from repositories and READMEs, plus the static portfolio content.

pub mod format;
pub mod language;
pub mod manual;
pub mod project;
pub mod skills;

pub use manual::{ManualProject, ProjectSource, load_projects};
pub use project::Project;
pub use skills::{Skill, default_skills};
