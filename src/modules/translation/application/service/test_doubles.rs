use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::modules::cv::application::ports::outgoing::{CvDetailView, ProjectItem, SkillItem};
use crate::modules::cv::application::service::test_doubles::sample_cv_detail;
use crate::modules::skill::domain::Proficiency;
use crate::modules::translation::application::ports::outgoing::{
    TranslationRequest, Translator, TranslatorError,
};

/// Replays queued responses in order and records every request.
pub struct ScriptedTranslator {
    responses: Mutex<VecDeque<Result<String, TranslatorError>>>,
    pub requests: Mutex<Vec<TranslationRequest>>,
}

impl ScriptedTranslator {
    pub fn new(responses: Vec<Result<String, TranslatorError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Translator for ScriptedTranslator {
    async fn translate(&self, request: TranslationRequest) -> Result<String, TranslatorError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(TranslatorError::EmptyResponse))
    }
}

pub fn skill(id: i32, name: &str) -> SkillItem {
    SkillItem {
        id,
        name: name.to_string(),
        proficiency: Proficiency::Advanced,
    }
}

pub fn project(id: i32, description: &str) -> ProjectItem {
    ProjectItem {
        id,
        title: format!("Project {id}"),
        description: description.to_string(),
        technologies: "Rust, PostgreSQL".to_string(),
        technologies_list: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        url: None,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: None,
        is_ongoing: true,
    }
}

pub fn cv_with(bio: &str, projects: Vec<ProjectItem>, skills: Vec<SkillItem>) -> CvDetailView {
    let mut cv = sample_cv_detail(1);
    cv.bio = bio.to_string();
    cv.projects = projects;
    cv.skills = skills;
    cv
}
