mod create_skill_service;
mod delete_skill_service;
mod get_skills_service;
mod update_skill_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use create_skill_service::CreateSkillService;
pub use delete_skill_service::DeleteSkillService;
pub use get_skills_service::{GetCvSkillsService, GetSingleSkillService, GetSkillsService};
pub use update_skill_service::{PatchSkillService, UpdateSkillService};
