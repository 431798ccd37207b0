//! Options grouped by the resource family that accepts them.
//!
//! Each façade only lists the kinds its resource's operations whitelist.
//! Methods carry the container in their name (`with_query_*` /
//! `with_form_*`) because a few kinds, like `archived`, exist on both sides.

use super::factory::{FormOptionService, QueryOptionService};
use super::kind::{Order, Role, TextFormat};
use super::value::{FormOption, QueryOption};

const QUERY: QueryOptionService = QueryOptionService;
const FORM: FormOptionService = FormOptionService;

/// Options for activity listings (space, project and user activities).
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityOptionService;

impl ActivityOptionService {
    pub fn with_query_activity_type_ids(&self, type_ids: &[i64]) -> QueryOption {
        QUERY.with_activity_type_ids(type_ids)
    }

    pub fn with_query_min_id(&self, min_id: i64) -> QueryOption {
        QUERY.with_min_id(min_id)
    }

    pub fn with_query_max_id(&self, max_id: i64) -> QueryOption {
        QUERY.with_max_id(max_id)
    }

    pub fn with_query_count(&self, count: i64) -> QueryOption {
        QUERY.with_count(count)
    }

    pub fn with_query_order(&self, order: impl Into<Order>) -> QueryOption {
        QUERY.with_order(order)
    }
}

/// Options for project listing, creation and update.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectOptionService;

impl ProjectOptionService {
    pub fn with_query_all(&self, enabled: bool) -> QueryOption {
        QUERY.with_all(enabled)
    }

    pub fn with_query_archived(&self, archived: bool) -> QueryOption {
        QUERY.with_archived(archived)
    }

    pub fn with_form_key(&self, key: impl Into<String>) -> FormOption {
        FORM.with_key(key)
    }

    pub fn with_form_name(&self, name: impl Into<String>) -> FormOption {
        FORM.with_name(name)
    }

    pub fn with_form_chart_enabled(&self, enabled: bool) -> FormOption {
        FORM.with_chart_enabled(enabled)
    }

    pub fn with_form_subtasking_enabled(&self, enabled: bool) -> FormOption {
        FORM.with_subtasking_enabled(enabled)
    }

    pub fn with_form_project_leader_can_edit_project_leader(&self, enabled: bool) -> FormOption {
        FORM.with_project_leader_can_edit_project_leader(enabled)
    }

    pub fn with_form_text_formatting_rule(&self, format: impl Into<TextFormat>) -> FormOption {
        FORM.with_text_formatting_rule(format)
    }

    pub fn with_form_archived(&self, archived: bool) -> FormOption {
        FORM.with_archived(archived)
    }
}

/// Options for user updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserOptionService;

impl UserOptionService {
    pub fn with_form_name(&self, name: impl Into<String>) -> FormOption {
        FORM.with_name(name)
    }

    pub fn with_form_password(&self, password: impl Into<String>) -> FormOption {
        FORM.with_password(password)
    }

    pub fn with_form_mail_address(&self, mail_address: impl Into<String>) -> FormOption {
        FORM.with_mail_address(mail_address)
    }

    pub fn with_form_role_type(&self, role: Role) -> FormOption {
        FORM.with_role_type(role)
    }
}

/// Options for wiki search, creation, update and deletion.
#[derive(Debug, Clone, Copy, Default)]
pub struct WikiOptionService;

impl WikiOptionService {
    pub fn with_query_keyword(&self, keyword: impl Into<String>) -> QueryOption {
        QUERY.with_keyword(keyword)
    }

    pub fn with_form_name(&self, name: impl Into<String>) -> FormOption {
        FORM.with_name(name)
    }

    pub fn with_form_content(&self, content: impl Into<String>) -> FormOption {
        FORM.with_content(content)
    }

    pub fn with_form_mail_notify(&self, enabled: bool) -> FormOption {
        FORM.with_mail_notify(enabled)
    }
}
