use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::skill::domain::Proficiency;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatedProject {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_ongoing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatedSkill {
    pub id: i32,
    pub name: String,
    pub proficiency: Proficiency,
}

/// The translatable parts of a CV. Titles, technologies and dates are carried unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatedCv {
    pub bio: String,
    pub projects: Vec<TranslatedProject>,
    pub skills: Vec<TranslatedSkill>,
}
