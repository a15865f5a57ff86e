// src/modules/cv/adapter/outgoing/cv_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contacts;
use crate::modules::contact::domain::ContactType;
use crate::modules::cv::adapter::outgoing::sea_orm_entity::cvs::{self, Column, Entity};
use crate::modules::cv::application::ports::outgoing::{
    ContactItem, CvDetailView, CvListFilter, CvQuery, CvQueryError, CvSummaryView, ProjectItem,
    SkillItem,
};
use crate::modules::cv::domain::full_name;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;
use crate::modules::project::domain::{is_ongoing, technologies_list};
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::sql_pattern::contains_pattern;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct CvQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CvQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct ChildCount {
    cv_id: i32,
    total: i64,
}

#[async_trait]
impl CvQuery for CvQueryPostgres {
    async fn get_detail(&self, cv_id: i32) -> Result<CvDetailView, CvQueryError> {
        let cv = Entity::find_by_id(cv_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CvQueryError::NotFound)?;

        let mut details = self.with_children(vec![cv]).await?;
        details.pop().ok_or(CvQueryError::NotFound)
    }

    async fn list_details(&self, filter: CvListFilter) -> Result<Vec<CvDetailView>, CvQueryError> {
        let mut query = Entity::find();

        if let Some(ref email) = filter.email {
            query = query.filter(Expr::col(Column::Email).ilike(contains_pattern(email)));
        }

        if let Some(ref name) = filter.name {
            let pattern = contains_pattern(name);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Firstname).ilike(&pattern))
                    .add(Expr::col(Column::Lastname).ilike(&pattern)),
            );
        }

        let cvs = query
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.with_children(cvs).await
    }

    async fn list_page(&self, page: PageRequest) -> Result<PageResult<CvSummaryView>, CvQueryError> {
        let query = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let cvs = query
            .offset(page.offset())
            .limit(page.per_page)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let ids: Vec<i32> = cvs.iter().map(|cv| cv.id).collect();
        let (skill_counts, project_counts) = if ids.is_empty() {
            (HashMap::new(), HashMap::new())
        } else {
            let skill_counts = skills::Entity::find()
                .select_only()
                .column(skills::Column::CvId)
                .column_as(Expr::col(skills::Column::Id).count(), "total")
                .filter(skills::Column::CvId.is_in(ids.clone()))
                .group_by(skills::Column::CvId)
                .into_model::<ChildCount>()
                .all(&*self.db)
                .await
                .map_err(map_db_err)?;

            let project_counts = projects::Entity::find()
                .select_only()
                .column(projects::Column::CvId)
                .column_as(Expr::col(projects::Column::Id).count(), "total")
                .filter(projects::Column::CvId.is_in(ids))
                .group_by(projects::Column::CvId)
                .into_model::<ChildCount>()
                .all(&*self.db)
                .await
                .map_err(map_db_err)?;

            (counts_by_cv(skill_counts), counts_by_cv(project_counts))
        };

        let items = cvs
            .into_iter()
            .map(|cv| CvSummaryView {
                id: cv.id,
                full_name: full_name(&cv.firstname, &cv.lastname),
                email: cv.email,
                phone: cv.phone,
                bio: cv.bio,
                created_at: cv.created_at.into(),
                skill_count: skill_counts.get(&cv.id).copied().unwrap_or(0),
                project_count: project_counts.get(&cv.id).copied().unwrap_or(0),
            })
            .collect();

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn count(&self) -> Result<u64, CvQueryError> {
        Entity::find().count(&*self.db).await.map_err(map_db_err)
    }
}

impl CvQueryPostgres {
    /// Load skills, projects and contacts for all given CVs in three queries.
    async fn with_children(&self, cvs: Vec<cvs::Model>) -> Result<Vec<CvDetailView>, CvQueryError> {
        if cvs.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<i32> = cvs.iter().map(|cv| cv.id).collect();

        let skills = skills::Entity::find()
            .filter(skills::Column::CvId.is_in(ids.clone()))
            .order_by_asc(skills::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let projects = projects::Entity::find()
            .filter(projects::Column::CvId.is_in(ids.clone()))
            .order_by_desc(projects::Column::StartDate)
            .order_by_asc(projects::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let contacts = contacts::Entity::find()
            .filter(contacts::Column::CvId.is_in(ids))
            .order_by_asc(contacts::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut skills_by_cv: HashMap<i32, Vec<SkillItem>> = HashMap::new();
        for skill in skills {
            skills_by_cv
                .entry(skill.cv_id)
                .or_default()
                .push(skill_to_item(skill));
        }

        let mut projects_by_cv: HashMap<i32, Vec<ProjectItem>> = HashMap::new();
        for project in projects {
            projects_by_cv
                .entry(project.cv_id)
                .or_default()
                .push(project_to_item(project));
        }

        let mut contacts_by_cv: HashMap<i32, Vec<ContactItem>> = HashMap::new();
        for contact in contacts {
            contacts_by_cv
                .entry(contact.cv_id)
                .or_default()
                .push(contact_to_item(contact));
        }

        Ok(cvs
            .into_iter()
            .map(|cv| {
                let id = cv.id;
                CvDetailView {
                    id,
                    full_name: full_name(&cv.firstname, &cv.lastname),
                    firstname: cv.firstname,
                    lastname: cv.lastname,
                    email: cv.email,
                    phone: cv.phone,
                    bio: cv.bio,
                    created_at: cv.created_at.into(),
                    updated_at: cv.updated_at.into(),
                    skills: skills_by_cv.remove(&id).unwrap_or_default(),
                    projects: projects_by_cv.remove(&id).unwrap_or_default(),
                    contacts: contacts_by_cv.remove(&id).unwrap_or_default(),
                }
            })
            .collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn counts_by_cv(rows: Vec<ChildCount>) -> HashMap<i32, u64> {
    rows.into_iter()
        .map(|row| (row.cv_id, row.total.max(0) as u64))
        .collect()
}

fn skill_to_item(model: skills::Model) -> SkillItem {
    SkillItem {
        id: model.id,
        name: model.name,
        proficiency: model.proficiency.parse().unwrap_or_default(),
    }
}

fn project_to_item(model: projects::Model) -> ProjectItem {
    ProjectItem {
        id: model.id,
        technologies_list: technologies_list(&model.technologies),
        is_ongoing: is_ongoing(model.end_date),
        title: model.title,
        description: model.description,
        technologies: model.technologies,
        url: model.url,
        start_date: model.start_date,
        end_date: model.end_date,
    }
}

fn contact_to_item(model: contacts::Model) -> ContactItem {
    ContactItem {
        id: model.id,
        contact_type: model.contact_type.parse().unwrap_or(ContactType::Other),
        value: model.value,
        url: model.url,
    }
}

fn map_db_err(e: DbErr) -> CvQueryError {
    CvQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
