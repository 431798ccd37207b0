use super::types::{ProjectIdOrKey, id_segment};
use crate::Result;
use crate::api::client::{BacklogClient, decode};
use crate::api::models::Activity;
use crate::api::params::QueryParams;
use crate::option::{QueryOption, QueryType};

/// Query kinds accepted by every activity listing.
pub const ACTIVITY_OPTIONS: [QueryType; 5] = [
    QueryType::ActivityTypeIds,
    QueryType::MinId,
    QueryType::MaxId,
    QueryType::Count,
    QueryType::Order,
];

async fn list_at(client: &BacklogClient, spath: &str, options: &[QueryOption]) -> Result<Vec<Activity>> {
    let mut query = QueryParams::new();
    query.with_options(options, &ACTIVITY_OPTIONS)?;

    let response = client.get(spath, Some(query)).await?;
    decode(response)
}

/// Recent updates across the whole space.
pub struct SpaceActivityService {
    client: BacklogClient,
}

impl SpaceActivityService {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &[QueryOption]) -> Result<Vec<Activity>> {
        list_at(&self.client, "space/activities", options).await
    }
}

/// Recent updates in one project.
pub struct ProjectActivityService {
    client: BacklogClient,
}

impl ProjectActivityService {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        project: impl Into<ProjectIdOrKey>,
        options: &[QueryOption],
    ) -> Result<Vec<Activity>> {
        let project = project.into().segment()?;
        let spath = format!("projects/{}/activities", project);
        list_at(&self.client, &spath, options).await
    }
}

/// Recent updates made by one user.
pub struct UserActivityService {
    client: BacklogClient,
}

impl UserActivityService {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, user_id: i64, options: &[QueryOption]) -> Result<Vec<Activity>> {
        let user = id_segment("userId", user_id)?;
        let spath = format!("users/{}/activities", user);
        list_at(&self.client, &spath, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{MockDoer, mock_client, pairs, query_without_token};
    use crate::error::BacklogError;
    use crate::option::{ActivityOptionService, Order, ProjectOptionService};

    const ACTIVITIES: &str = r#"[{"id": 3153, "type": 2, "project": {"id": 92, "projectKey": "SUB", "name": "Subtasking"}}]"#;

    #[tokio::test]
    async fn test_space_activities_with_options() {
        let (client, doer) = mock_client(vec![MockDoer::json(200, ACTIVITIES)]);
        let o = ActivityOptionService;

        let activities = client
            .space()
            .activity()
            .list(&[
                o.with_query_activity_type_ids(&[1, 2]),
                o.with_query_count(20),
                o.with_query_order(Order::ASC),
            ])
            .await
            .expect("activities");

        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].id, 3153);

        let request = doer.last_request();
        assert_eq!(request.url.path(), "/api/v2/space/activities");
        assert_eq!(
            query_without_token(&request),
            pairs(&[
                ("activityTypeId[]", "1"),
                ("activityTypeId[]", "2"),
                ("count", "20"),
                ("order", "asc"),
            ])
        );
    }

    #[tokio::test]
    async fn test_project_activities_path() {
        let (client, doer) = mock_client(vec![MockDoer::json(200, "[]")]);
        client
            .project()
            .activity()
            .list("TEST", &[])
            .await
            .expect("activities");
        assert_eq!(doer.last_request().url.path(), "/api/v2/projects/TEST/activities");
    }

    #[tokio::test]
    async fn test_user_activities_path() {
        let (client, doer) = mock_client(vec![MockDoer::json(200, "[]")]);
        client.user().activity().list(42, &[]).await.expect("activities");
        assert_eq!(doer.last_request().url.path(), "/api/v2/users/42/activities");
    }

    #[tokio::test]
    async fn test_out_of_scope_option_is_rejected_before_sending() {
        let (client, doer) = mock_client(vec![]);
        let err = client
            .space()
            .activity()
            .list(&[
                ActivityOptionService.with_query_count(500),
                ProjectOptionService.with_query_archived(true),
            ])
            .await
            .expect_err("archived is not an activity option");

        assert!(matches!(err, BacklogError::InvalidQueryOption(_)));
        assert_eq!(
            err.to_string(),
            "invalid option:archived, allowed options:activityTypeId[],minId,maxId,count,order"
        );
        assert!(doer.requests().is_empty());
    }

    #[tokio::test]
    async fn test_bad_count_is_rejected_before_sending() {
        let (client, doer) = mock_client(vec![]);
        let err = client
            .space()
            .activity()
            .list(&[ActivityOptionService.with_query_count(0)])
            .await
            .expect_err("count 0");
        assert!(err.is_validation());
        assert!(doer.requests().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_user_id() {
        let (client, doer) = mock_client(vec![]);
        let err = client.user().activity().list(0, &[]).await.expect_err("id 0");
        assert!(err.is_validation());
        assert!(doer.requests().is_empty());
    }
}
