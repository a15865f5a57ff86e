mod create_skill;
mod delete_skill;
mod get_skills;
mod update_skill;

pub use create_skill::{add_cv_skill_handler, create_skill_handler, SkillRequest};
pub use delete_skill::delete_skill_handler;
pub use get_skills::{get_cv_skills_handler, get_single_skill_handler, get_skills_handler};
pub use update_skill::{patch_skill_handler, update_skill_handler};
