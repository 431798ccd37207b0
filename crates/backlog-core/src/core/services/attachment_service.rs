//! Attachment operations. Wiki, issue and pull request attachments share the
//! same list/remove calls below a resource-specific path prefix.

use super::types::{IssueIdOrKey, ProjectIdOrKey, RepositoryIdOrName, id_segment};
use crate::Result;
use crate::api::client::{BacklogClient, decode};
use crate::api::models::Attachment;
use crate::api::params::FormParams;
use crate::error::ValidationError;
use std::io::Read;

/// List and remove calls relative to an `.../attachments` collection.
struct Attachments<'a> {
    client: &'a BacklogClient,
    prefix: String,
}

impl<'a> Attachments<'a> {
    fn at(client: &'a BacklogClient, prefix: String) -> Self {
        Self { client, prefix }
    }

    async fn list(&self) -> Result<Vec<Attachment>> {
        let spath = format!("{}/attachments", self.prefix);
        let response = self.client.get(&spath, None).await?;
        decode(response)
    }

    async fn remove(&self, attachment_id: i64) -> Result<Attachment> {
        let attachment = id_segment("attachmentId", attachment_id)?;
        let spath = format!("{}/attachments/{}", self.prefix, attachment);
        let response = self.client.delete(&spath, None).await?;
        decode(response)
    }
}

/// Uploads into the space's temporary attachment area.
pub struct SpaceAttachmentService {
    client: BacklogClient,
}

impl SpaceAttachmentService {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    /// Uploads `reader` under `file_name`. The returned id can be attached to
    /// a wiki page with [`WikiAttachmentService::attach`].
    pub async fn upload<R: Read>(&self, file_name: &str, reader: R) -> Result<Attachment> {
        let response = self
            .client
            .upload("space/attachment", file_name, reader)
            .await?;
        decode(response)
    }
}

pub struct WikiAttachmentService {
    client: BacklogClient,
}

impl WikiAttachmentService {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    fn prefix(wiki_id: i64) -> Result<String> {
        Ok(format!("wikis/{}", id_segment("wikiId", wiki_id)?))
    }

    /// Attaches previously uploaded files to a wiki page.
    pub async fn attach(&self, wiki_id: i64, attachment_ids: &[i64]) -> Result<Vec<Attachment>> {
        let prefix = Self::prefix(wiki_id)?;
        if attachment_ids.is_empty() {
            return Err(ValidationError::new("attachmentIds must not be empty").into());
        }

        let mut form = FormParams::new();
        for id in attachment_ids {
            form.add("attachmentId[]", id_segment("attachmentId", *id)?);
        }

        let spath = format!("{}/attachments", prefix);
        let response = self.client.post(&spath, Some(form)).await?;
        decode(response)
    }

    pub async fn list(&self, wiki_id: i64) -> Result<Vec<Attachment>> {
        Attachments::at(&self.client, Self::prefix(wiki_id)?)
            .list()
            .await
    }

    pub async fn remove(&self, wiki_id: i64, attachment_id: i64) -> Result<Attachment> {
        Attachments::at(&self.client, Self::prefix(wiki_id)?)
            .remove(attachment_id)
            .await
    }
}

pub struct IssueAttachmentService {
    client: BacklogClient,
}

impl IssueAttachmentService {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    fn prefix(issue: IssueIdOrKey) -> Result<String> {
        Ok(format!("issues/{}", issue.segment()?))
    }

    pub async fn list(&self, issue: impl Into<IssueIdOrKey>) -> Result<Vec<Attachment>> {
        Attachments::at(&self.client, Self::prefix(issue.into())?)
            .list()
            .await
    }

    pub async fn remove(
        &self,
        issue: impl Into<IssueIdOrKey>,
        attachment_id: i64,
    ) -> Result<Attachment> {
        Attachments::at(&self.client, Self::prefix(issue.into())?)
            .remove(attachment_id)
            .await
    }
}

pub struct PullRequestAttachmentService {
    client: BacklogClient,
}

impl PullRequestAttachmentService {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    fn prefix(project: ProjectIdOrKey, repository: RepositoryIdOrName, number: i64) -> Result<String> {
        Ok(format!(
            "projects/{}/git/repositories/{}/pullRequests/{}",
            project.segment()?,
            repository.segment()?,
            id_segment("prNumber", number)?
        ))
    }

    pub async fn list(
        &self,
        project: impl Into<ProjectIdOrKey>,
        repository: impl Into<RepositoryIdOrName>,
        number: i64,
    ) -> Result<Vec<Attachment>> {
        let prefix = Self::prefix(project.into(), repository.into(), number)?;
        Attachments::at(&self.client, prefix).list().await
    }

    pub async fn remove(
        &self,
        project: impl Into<ProjectIdOrKey>,
        repository: impl Into<RepositoryIdOrName>,
        number: i64,
        attachment_id: i64,
    ) -> Result<Attachment> {
        let prefix = Self::prefix(project.into(), repository.into(), number)?;
        Attachments::at(&self.client, prefix)
            .remove(attachment_id)
            .await
    }
}
