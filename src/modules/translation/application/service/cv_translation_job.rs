use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::modules::cv::application::ports::outgoing::{CvQuery, CvQueryError};
use crate::modules::jobs::domain::JobError;
use crate::modules::translation::application::ports::outgoing::{
    TranslationRequest, Translator, TranslatorError,
};
use crate::modules::translation::domain::{
    is_technical_term, protect_terms, TargetLanguage, TranslatedCv, TranslatedProject,
    TranslatedSkill,
};

const BIO_MAX_TOKENS: u32 = 1000;
const DESCRIPTION_MAX_TOKENS: u32 = 500;
const SKILL_MAX_TOKENS: u32 = 50;

fn bio_prompt(language: &str) -> String {
    format!(
        "You are a professional translator. Translate the following professional biography to {language}. \
         Maintain professional tone and keep any placeholders (TECH_TERM_X) unchanged. Preserve paragraph structure."
    )
}

fn description_prompt(language: &str) -> String {
    format!(
        "You are a professional translator. Translate the following project description to {language}. \
         Maintain professional tone and keep any placeholders (TECH_TERM_X) unchanged."
    )
}

fn skill_prompt(language: &str) -> String {
    format!(
        "You are a professional translator. Translate this skill name to {language}. \
         If it's a technical term or proper noun, return it unchanged. Return only the translated text."
    )
}

/// Body of the `translate_cv_content` job.
pub struct CvTranslationJob {
    cv_query: Arc<dyn CvQuery + Send + Sync>,
    translator: Arc<dyn Translator + Send + Sync>,
}

impl CvTranslationJob {
    pub fn new(
        cv_query: Arc<dyn CvQuery + Send + Sync>,
        translator: Arc<dyn Translator + Send + Sync>,
    ) -> Self {
        Self {
            cv_query,
            translator,
        }
    }

    pub async fn run(&self, cv_id: i32, language: TargetLanguage) -> Result<Value, JobError> {
        let cv = match self.cv_query.get_detail(cv_id).await {
            Ok(cv) => cv,
            Err(CvQueryError::NotFound) => {
                error!(cv_id, "CV does not exist");
                return Err(JobError::Permanent(format!("CV with ID {cv_id} not found")));
            }
            Err(CvQueryError::DatabaseError(e)) => return Err(JobError::Retryable(e)),
        };
        let target = language.display_name();

        let bio = if cv.bio.is_empty() {
            String::new()
        } else {
            self.translate_protected(bio_prompt(target), &cv.bio, BIO_MAX_TOKENS)
                .await
                .unwrap_or_else(|e| {
                    warn!(cv_id, "Failed to translate biography: {}", e);
                    cv.bio.clone()
                })
        };

        let mut projects = Vec::with_capacity(cv.projects.len());
        for project in &cv.projects {
            let description = if project.description.is_empty() {
                String::new()
            } else {
                self.translate_protected(
                    description_prompt(target),
                    &project.description,
                    DESCRIPTION_MAX_TOKENS,
                )
                .await
                .unwrap_or_else(|e| {
                    warn!(cv_id, project_id = project.id, "Failed to translate project: {}", e);
                    project.description.clone()
                })
            };

            projects.push(TranslatedProject {
                id: project.id,
                title: project.title.clone(),
                description,
                technologies: project.technologies.clone(),
                url: project.url.clone(),
                start_date: project.start_date,
                end_date: project.end_date,
                is_ongoing: project.is_ongoing,
            });
        }

        let mut skills = Vec::with_capacity(cv.skills.len());
        for skill in &cv.skills {
            let mut name = skill.name.clone();
            if !is_technical_term(&skill.name) {
                let request = TranslationRequest {
                    system_prompt: skill_prompt(target),
                    text: skill.name.clone(),
                    max_tokens: SKILL_MAX_TOKENS,
                };
                match self.translator.translate(request).await {
                    Ok(translated) if !translated.eq_ignore_ascii_case(&skill.name) => {
                        name = translated;
                    }
                    Ok(_) => {}
                    Err(e) => warn!(cv_id, skill = %skill.name, "Failed to translate skill: {}", e),
                }
            }
            skills.push(TranslatedSkill {
                id: skill.id,
                name,
                proficiency: skill.proficiency,
            });
        }

        info!(cv_id, target_language = target, "CV translated");

        Ok(json!({
            "success": true,
            "cv_id": cv_id,
            "target_language": target,
            "cv_name": cv.full_name,
            "translated_data": TranslatedCv { bio, projects, skills },
        }))
    }

    async fn translate_protected(
        &self,
        system_prompt: String,
        text: &str,
        max_tokens: u32,
    ) -> Result<String, TranslatorError> {
        let protected = protect_terms(text);
        let translated = self
            .translator
            .translate(TranslationRequest {
                system_prompt,
                text: protected.text.clone(),
                max_tokens,
            })
            .await?;
        Ok(protected.restore(&translated))
    }
}
