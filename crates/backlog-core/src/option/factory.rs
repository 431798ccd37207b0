//! Shared option factories. Every façade delegates here.

use super::kind::{FormType, OptionType, Order, QueryType, Role, TextFormat};
use super::value::{FormOption, QueryOption};
use crate::api::params::{FormParams, QueryParams};
use crate::error::ValidationError;
use crate::utils::validation::{require_non_empty, require_positive, require_range};

fn query_value(kind: QueryType, value: String) -> QueryOption {
    QueryOption::new(kind).with_set(move |query: &mut QueryParams| {
        query.set(kind.value(), value.clone());
        Ok(())
    })
}

fn form_value(kind: FormType, value: String) -> FormOption {
    FormOption::new(kind).with_set(move |form: &mut FormParams| {
        form.set(kind.value(), value.clone());
        Ok(())
    })
}

/// Factories for every query-string kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryOptionService;

impl QueryOptionService {
    /// `activityTypeId[]`, one entry per id. Every id must lie in `1..=26`;
    /// one bad id rejects the whole option.
    pub fn with_activity_type_ids(&self, type_ids: &[i64]) -> QueryOption {
        let kind = QueryType::ActivityTypeIds;
        let checked = type_ids.to_vec();
        let written = type_ids.to_vec();
        QueryOption::new(kind)
            .with_check(move || {
                for id in &checked {
                    require_range("activityTypeId", *id, 1, 26)?;
                }
                Ok(())
            })
            .with_set(move |query: &mut QueryParams| {
                for id in &written {
                    query.add(kind.value(), id.to_string());
                }
                Ok(())
            })
    }

    pub fn with_all(&self, enabled: bool) -> QueryOption {
        query_value(QueryType::All, enabled.to_string())
    }

    pub fn with_archived(&self, archived: bool) -> QueryOption {
        query_value(QueryType::Archived, archived.to_string())
    }

    /// Page size, `1..=100`.
    pub fn with_count(&self, count: i64) -> QueryOption {
        query_value(QueryType::Count, count.to_string())
            .with_check(move || require_range("count", count, 1, 100))
    }

    pub fn with_key(&self, key: impl Into<String>) -> QueryOption {
        let key = key.into();
        let checked = key.clone();
        query_value(QueryType::Key, key).with_check(move || require_non_empty("key", &checked))
    }

    pub fn with_keyword(&self, keyword: impl Into<String>) -> QueryOption {
        let keyword = keyword.into();
        let checked = keyword.clone();
        query_value(QueryType::Keyword, keyword)
            .with_check(move || require_non_empty("keyword", &checked))
    }

    pub fn with_max_id(&self, max_id: i64) -> QueryOption {
        query_value(QueryType::MaxId, max_id.to_string())
            .with_check(move || require_positive("maxId", max_id))
    }

    pub fn with_min_id(&self, min_id: i64) -> QueryOption {
        query_value(QueryType::MinId, min_id.to_string())
            .with_check(move || require_positive("minId", min_id))
    }

    pub fn with_order(&self, order: impl Into<Order>) -> QueryOption {
        let order = order.into();
        let value = order.as_str().to_string();
        query_value(QueryType::Order, value).with_check(move || {
            if !order.is_known() {
                return Err(ValidationError::new(format!(
                    "order must be only '{}' or '{}'",
                    Order::ASC.as_str(),
                    Order::DESC.as_str()
                ))
                .into());
            }
            Ok(())
        })
    }
}

/// Factories for every form-body kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormOptionService;

impl FormOptionService {
    pub fn with_archived(&self, archived: bool) -> FormOption {
        form_value(FormType::Archived, archived.to_string())
    }

    pub fn with_chart_enabled(&self, enabled: bool) -> FormOption {
        form_value(FormType::ChartEnabled, enabled.to_string())
    }

    pub fn with_content(&self, content: impl Into<String>) -> FormOption {
        let content = content.into();
        let checked = content.clone();
        form_value(FormType::Content, content)
            .with_check(move || require_non_empty("content", &checked))
    }

    pub fn with_key(&self, key: impl Into<String>) -> FormOption {
        let key = key.into();
        let checked = key.clone();
        form_value(FormType::Key, key).with_check(move || require_non_empty("key", &checked))
    }

    pub fn with_name(&self, name: impl Into<String>) -> FormOption {
        let name = name.into();
        let checked = name.clone();
        form_value(FormType::Name, name).with_check(move || require_non_empty("name", &checked))
    }

    pub fn with_mail_address(&self, mail_address: impl Into<String>) -> FormOption {
        let mail_address = mail_address.into();
        let checked = mail_address.clone();
        form_value(FormType::MailAddress, mail_address)
            .with_check(move || require_non_empty("mailAddress", &checked))
    }

    pub fn with_mail_notify(&self, enabled: bool) -> FormOption {
        form_value(FormType::MailNotify, enabled.to_string())
    }

    pub fn with_password(&self, password: impl Into<String>) -> FormOption {
        let password = password.into();
        let checked = password.clone();
        form_value(FormType::Password, password)
            .with_check(move || require_non_empty("password", &checked))
    }

    pub fn with_project_leader_can_edit_project_leader(&self, enabled: bool) -> FormOption {
        form_value(
            FormType::ProjectLeaderCanEditProjectLeader,
            enabled.to_string(),
        )
    }

    /// One of the six [`Role`] constants.
    pub fn with_role_type(&self, role: Role) -> FormOption {
        form_value(FormType::RoleType, role.0.to_string()).with_check(move || {
            if !role.is_known() {
                return Err(ValidationError::new("roleType must be between 1 and 6").into());
            }
            Ok(())
        })
    }

    pub fn with_subtasking_enabled(&self, enabled: bool) -> FormOption {
        form_value(FormType::SubtaskingEnabled, enabled.to_string())
    }

    pub fn with_text_formatting_rule(&self, format: impl Into<TextFormat>) -> FormOption {
        let format = format.into();
        let value = format.as_str().to_string();
        form_value(FormType::TextFormattingRule, value).with_check(move || {
            if !format.is_known() {
                return Err(ValidationError::new(format!(
                    "format must be only '{}' or '{}'",
                    TextFormat::BACKLOG.as_str(),
                    TextFormat::MARKDOWN.as_str()
                ))
                .into());
            }
            Ok(())
        })
    }
}
