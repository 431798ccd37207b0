use super::activity_service::ProjectActivityService;
use super::types::{ProjectIdOrKey, id_segment};
use crate::Result;
use crate::api::client::{BacklogClient, decode};
use crate::api::models::{Project, User};
use crate::api::params::{FormParams, QueryParams};
use crate::error::ValidationError;
use crate::option::{FormOption, FormType, QueryOption, QueryType, TextFormat};
use crate::utils::validation::require_non_empty;

const LIST_OPTIONS: [QueryType; 2] = [QueryType::All, QueryType::Archived];

const CREATE_OPTIONS: [FormType; 4] = [
    FormType::ChartEnabled,
    FormType::SubtaskingEnabled,
    FormType::ProjectLeaderCanEditProjectLeader,
    FormType::TextFormattingRule,
];

const UPDATE_OPTIONS: [FormType; 7] = [
    FormType::Key,
    FormType::Name,
    FormType::ChartEnabled,
    FormType::SubtaskingEnabled,
    FormType::ProjectLeaderCanEditProjectLeader,
    FormType::TextFormattingRule,
    FormType::Archived,
];

/// Project CRUD plus the per-project activity and membership services.
pub struct ProjectService {
    client: BacklogClient,
}

impl ProjectService {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    pub fn activity(&self) -> ProjectActivityService {
        ProjectActivityService::new(self.client.clone())
    }

    pub fn user(&self) -> ProjectUserService {
        ProjectUserService::new(self.client.clone())
    }

    /// Projects visible to the caller. `all(true)` lists every project in the
    /// space for administrators.
    pub async fn all(&self, options: &[QueryOption]) -> Result<Vec<Project>> {
        let mut query = QueryParams::new();
        query.with_options(options, &LIST_OPTIONS)?;

        let response = self.client.get("projects", Some(query)).await?;
        decode(response)
    }

    pub async fn one(&self, project: impl Into<ProjectIdOrKey>) -> Result<Project> {
        let spath = format!("projects/{}", project.into().segment()?);
        let response = self.client.get(&spath, None).await?;
        decode(response)
    }

    /// Creates a project. Chart, subtasking and leader-edit flags default to
    /// `false` and the formatting rule to markdown unless overridden.
    pub async fn create(&self, key: &str, name: &str, options: &[FormOption]) -> Result<Project> {
        require_non_empty("key", key)?;
        require_non_empty("name", name)?;

        let mut form = FormParams::new();
        form.set(FormType::ChartEnabled.to_string(), "false");
        form.set(FormType::SubtaskingEnabled.to_string(), "false");
        form.set(FormType::ProjectLeaderCanEditProjectLeader.to_string(), "false");
        form.set(
            FormType::TextFormattingRule.to_string(),
            TextFormat::MARKDOWN.as_str(),
        );
        form.with_options(options, &CREATE_OPTIONS)?;
        form.set(FormType::Key.to_string(), key);
        form.set(FormType::Name.to_string(), name);

        let response = self.client.post("projects", Some(form)).await?;
        decode(response)
    }

    pub async fn update(
        &self,
        project: impl Into<ProjectIdOrKey>,
        options: &[FormOption],
    ) -> Result<Project> {
        let spath = format!("projects/{}", project.into().segment()?);
        if options.is_empty() {
            return Err(ValidationError::new("requires one or more options").into());
        }

        let mut form = FormParams::new();
        form.with_options(options, &UPDATE_OPTIONS)?;

        let response = self.client.patch(&spath, Some(form)).await?;
        decode(response)
    }

    pub async fn delete(&self, project: impl Into<ProjectIdOrKey>) -> Result<Project> {
        let spath = format!("projects/{}", project.into().segment()?);
        let response = self.client.delete(&spath, None).await?;
        decode(response)
    }
}

/// Project members and project administrators.
pub struct ProjectUserService {
    client: BacklogClient,
}

impl ProjectUserService {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    pub async fn all(
        &self,
        project: impl Into<ProjectIdOrKey>,
        exclude_group_members: bool,
    ) -> Result<Vec<User>> {
        let spath = format!("projects/{}/users", project.into().segment()?);
        let mut query = QueryParams::new();
        query.set("excludeGroupMembers", exclude_group_members.to_string());

        let response = self.client.get(&spath, Some(query)).await?;
        decode(response)
    }

    pub async fn add(&self, project: impl Into<ProjectIdOrKey>, user_id: i64) -> Result<User> {
        let (spath, form) = Self::membership(project.into(), "users", user_id)?;
        let response = self.client.post(&spath, Some(form)).await?;
        decode(response)
    }

    pub async fn delete(&self, project: impl Into<ProjectIdOrKey>, user_id: i64) -> Result<User> {
        let (spath, form) = Self::membership(project.into(), "users", user_id)?;
        let response = self.client.delete(&spath, Some(form)).await?;
        decode(response)
    }

    pub async fn add_admin(&self, project: impl Into<ProjectIdOrKey>, user_id: i64) -> Result<User> {
        let (spath, form) = Self::membership(project.into(), "administrators", user_id)?;
        let response = self.client.post(&spath, Some(form)).await?;
        decode(response)
    }

    pub async fn admin_all(&self, project: impl Into<ProjectIdOrKey>) -> Result<Vec<User>> {
        let spath = format!("projects/{}/administrators", project.into().segment()?);
        let response = self.client.get(&spath, None).await?;
        decode(response)
    }

    pub async fn delete_admin(
        &self,
        project: impl Into<ProjectIdOrKey>,
        user_id: i64,
    ) -> Result<User> {
        let (spath, form) = Self::membership(project.into(), "administrators", user_id)?;
        let response = self.client.delete(&spath, Some(form)).await?;
        decode(response)
    }

    fn membership(
        project: ProjectIdOrKey,
        collection: &str,
        user_id: i64,
    ) -> Result<(String, FormParams)> {
        let spath = format!("projects/{}/{}", project.segment()?, collection);
        let mut form = FormParams::new();
        form.set("userId", id_segment("userId", user_id)?);
        Ok((spath, form))
    }
}
