mod proficiency;
mod skill_name;

pub use proficiency::Proficiency;
pub use skill_name::validate_skill_name;
