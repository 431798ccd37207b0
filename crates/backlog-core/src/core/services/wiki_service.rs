use super::attachment_service::WikiAttachmentService;
use super::types::{ProjectIdOrKey, id_segment};
use crate::Result;
use crate::api::client::{BacklogClient, decode};
use crate::api::models::{Wiki, WikiCount};
use crate::api::params::{FormParams, QueryParams};
use crate::error::ValidationError;
use crate::option::{FormOption, FormType, QueryOption, QueryType};
use crate::utils::validation::require_non_empty;

const PROJECT_PARAM: &str = "projectIdOrKey";

const LIST_OPTIONS: [QueryType; 1] = [QueryType::Keyword];
const CREATE_OPTIONS: [FormType; 1] = [FormType::MailNotify];
const UPDATE_OPTIONS: [FormType; 3] = [FormType::Name, FormType::Content, FormType::MailNotify];
const DELETE_OPTIONS: [FormType; 1] = [FormType::MailNotify];

/// Wiki pages of a project.
pub struct WikiService {
    client: BacklogClient,
}

impl WikiService {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    pub fn attachment(&self) -> WikiAttachmentService {
        WikiAttachmentService::new(self.client.clone())
    }

    /// Pages of `project`, optionally narrowed with a keyword.
    pub async fn all(
        &self,
        project: impl Into<ProjectIdOrKey>,
        options: &[QueryOption],
    ) -> Result<Vec<Wiki>> {
        let mut query = QueryParams::new();
        query.set(PROJECT_PARAM, project.into().segment()?);
        query.with_options(options, &LIST_OPTIONS)?;

        let response = self.client.get("wikis", Some(query)).await?;
        decode(response)
    }

    pub async fn count(&self, project: impl Into<ProjectIdOrKey>) -> Result<i64> {
        let mut query = QueryParams::new();
        query.set(PROJECT_PARAM, project.into().segment()?);

        let response = self.client.get("wikis/count", Some(query)).await?;
        let count: WikiCount = decode(response)?;
        Ok(count.count)
    }

    pub async fn one(&self, wiki_id: i64) -> Result<Wiki> {
        let spath = format!("wikis/{}", id_segment("wikiId", wiki_id)?);
        let response = self.client.get(&spath, None).await?;
        decode(response)
    }

    pub async fn create(
        &self,
        project_id: i64,
        name: &str,
        content: &str,
        options: &[FormOption],
    ) -> Result<Wiki> {
        let project_id = id_segment("projectId", project_id)?;
        require_non_empty("name", name)?;
        require_non_empty("content", content)?;

        let mut form = FormParams::new();
        form.set("projectId", project_id);
        form.set(FormType::Name.to_string(), name);
        form.set(FormType::Content.to_string(), content);
        form.with_options(options, &CREATE_OPTIONS)?;

        let response = self.client.post("wikis", Some(form)).await?;
        decode(response)
    }

    pub async fn update(&self, wiki_id: i64, options: &[FormOption]) -> Result<Wiki> {
        let spath = format!("wikis/{}", id_segment("wikiId", wiki_id)?);
        if options.is_empty() {
            return Err(ValidationError::new("requires one or more options").into());
        }

        let mut form = FormParams::new();
        form.with_options(options, &UPDATE_OPTIONS)?;

        let response = self.client.patch(&spath, Some(form)).await?;
        decode(response)
    }

    pub async fn delete(&self, wiki_id: i64, options: &[FormOption]) -> Result<Wiki> {
        let spath = format!("wikis/{}", id_segment("wikiId", wiki_id)?);

        let mut form = FormParams::new();
        form.with_options(options, &DELETE_OPTIONS)?;

        let response = self.client.delete(&spath, Some(form)).await?;
        decode(response)
    }
}
