use super::activity_service::UserActivityService;
use super::types::id_segment;
use crate::Result;
use crate::api::client::{BacklogClient, decode};
use crate::api::models::User;
use crate::api::params::FormParams;
use crate::error::ValidationError;
use crate::option::{FormOption, FormType, Role};
use crate::utils::validation::require_non_empty;

const UPDATE_OPTIONS: [FormType; 4] = [
    FormType::Name,
    FormType::Password,
    FormType::MailAddress,
    FormType::RoleType,
];

/// Users of the space.
pub struct UserService {
    client: BacklogClient,
}

impl UserService {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    pub fn activity(&self) -> UserActivityService {
        UserActivityService::new(self.client.clone())
    }

    pub async fn all(&self) -> Result<Vec<User>> {
        let response = self.client.get("users", None).await?;
        decode(response)
    }

    pub async fn one(&self, id: i64) -> Result<User> {
        let spath = format!("users/{}", id_segment("id", id)?);
        let response = self.client.get(&spath, None).await?;
        decode(response)
    }

    /// The user the API key belongs to.
    pub async fn own(&self) -> Result<User> {
        let response = self.client.get("users/myself", None).await?;
        decode(response)
    }

    pub async fn add(
        &self,
        user_id: &str,
        password: &str,
        name: &str,
        mail_address: &str,
        role: Role,
    ) -> Result<User> {
        require_non_empty("userId", user_id)?;
        require_non_empty("password", password)?;
        require_non_empty("name", name)?;
        require_non_empty("mailAddress", mail_address)?;
        if !role.is_known() {
            return Err(ValidationError::new("roleType must be between 1 and 6").into());
        }

        let mut form = FormParams::new();
        form.set("userId", user_id);
        form.set(FormType::Password.to_string(), password);
        form.set(FormType::Name.to_string(), name);
        form.set(FormType::MailAddress.to_string(), mail_address);
        form.set(FormType::RoleType.to_string(), role.0.to_string());

        let response = self.client.post("users", Some(form)).await?;
        decode(response)
    }

    pub async fn update(&self, id: i64, options: &[FormOption]) -> Result<User> {
        let spath = format!("users/{}", id_segment("id", id)?);

        let mut form = FormParams::new();
        form.with_options(options, &UPDATE_OPTIONS)?;

        let response = self.client.patch(&spath, Some(form)).await?;
        decode(response)
    }

    pub async fn delete(&self, id: i64) -> Result<User> {
        let spath = format!("users/{}", id_segment("id", id)?);
        let response = self.client.delete(&spath, None).await?;
        decode(response)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::mock::{MockDoer, form_pairs, mock_client, pairs};
    use crate::error::BacklogError;
    use crate::option::{ProjectOptionService, Role, UserOptionService};
    use reqwest::Method;

    const USER: &str = r#"{"id": 1, "userId": "admin", "name": "admin", "roleType": 1,
        "lang": "ja", "mailAddress": "eguchi@nulab.example"}"#;

    #[tokio::test]
    async fn test_all_one_own() {
        let (client, doer) = mock_client(vec![
            MockDoer::json(200, &format!("[{}]", USER)),
            MockDoer::json(200, USER),
            MockDoer::json(200, USER),
        ]);
        let users = client.user();

        assert_eq!(users.all().await.expect("all").len(), 1);
        assert_eq!(doer.last_request().url.path(), "/api/v2/users");

        users.one(1).await.expect("one");
        assert_eq!(doer.last_request().url.path(), "/api/v2/users/1");

        let me = users.own().await.expect("own");
        assert_eq!(me.user_id.as_deref(), Some("admin"));
        assert_eq!(doer.last_request().url.path(), "/api/v2/users/myself");
    }

    #[tokio::test]
    async fn test_add() {
        let (client, doer) = mock_client(vec![MockDoer::json(200, USER)]);
        client
            .user()
            .add("admin", "pass", "admin", "eguchi@nulab.example", Role::ADMINISTRATOR)
            .await
            .expect("add");

        let request = doer.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            form_pairs(&request),
            pairs(&[
                ("mailAddress", "eguchi@nulab.example"),
                ("name", "admin"),
                ("password", "pass"),
                ("roleType", "1"),
                ("userId", "admin"),
            ])
        );
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_arguments() {
        let (client, doer) = mock_client(vec![]);
        let users = client.user();

        for (user_id, password, name, mail) in [
            ("", "p", "n", "m"),
            ("u", "", "n", "m"),
            ("u", "p", "", "m"),
            ("u", "p", "n", ""),
        ] {
            let err = users
                .add(user_id, password, name, mail, Role::VIEWER)
                .await
                .expect_err("empty argument");
            assert!(err.is_validation());
        }

        let err = users
            .add("u", "p", "n", "m", Role(7))
            .await
            .expect_err("unknown role");
        assert!(err.is_validation());
        assert!(doer.requests().is_empty());
    }

    #[tokio::test]
    async fn test_update() {
        let (client, doer) = mock_client(vec![MockDoer::json(200, USER)]);
        let o = UserOptionService;

        client
            .user()
            .update(
                1,
                &[
                    o.with_form_name("eguchi"),
                    o.with_form_role_type(Role::GUEST_VIEWER),
                ],
            )
            .await
            .expect("update");

        let request = doer.last_request();
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(request.url.path(), "/api/v2/users/1");
        assert_eq!(
            form_pairs(&request),
            pairs(&[("name", "eguchi"), ("roleType", "6")])
        );
    }

    #[tokio::test]
    async fn test_update_with_bad_role_writes_nothing() {
        let (client, doer) = mock_client(vec![]);
        let err = client
            .user()
            .update(1, &[UserOptionService.with_form_role_type(Role(99))])
            .await
            .expect_err("role 99");
        assert!(err.is_validation());
        assert!(doer.requests().is_empty());
    }

    #[tokio::test]
    async fn test_update_rejects_project_options() {
        let (client, _) = mock_client(vec![]);
        let err = client
            .user()
            .update(1, &[ProjectOptionService.with_form_key("KEY")])
            .await
            .expect_err("key is not a user option");
        assert!(matches!(err, BacklogError::InvalidFormOption(_)));
        assert_eq!(
            err.to_string(),
            "invalid option:key, allowed options:name,password,mailAddress,roleType"
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let (client, doer) = mock_client(vec![MockDoer::json(200, USER)]);
        client.user().delete(1).await.expect("delete");

        let request = doer.last_request();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.url.path(), "/api/v2/users/1");
    }

    #[tokio::test]
    async fn test_invalid_ids() {
        let (client, doer) = mock_client(vec![]);
        let users = client.user();
        assert!(users.one(0).await.is_err_and(|e| e.is_validation()));
        assert!(users.update(0, &[]).await.is_err_and(|e| e.is_validation()));
        assert!(users.delete(-1).await.is_err_and(|e| e.is_validation()));
        assert!(doer.requests().is_empty());
    }
}
