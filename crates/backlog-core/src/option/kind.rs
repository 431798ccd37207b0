//! Parameter kinds and the values some of them are restricted to.

use crate::api::params::{FormParams, QueryParams};
use crate::error::{BacklogError, InvalidOptionError};
use std::borrow::Cow;
use std::fmt;

/// A closed set of parameter kinds bound to one container type.
pub trait OptionType: Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Container an option of this kind writes into.
    type Params: 'static;

    /// Wire-format key.
    fn value(self) -> &'static str;

    /// Error reported when `self` is missing from an operation's whitelist.
    fn invalid(self, allowed: &[Self]) -> BacklogError;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    ActivityTypeIds,
    All,
    Archived,
    Count,
    Key,
    Keyword,
    MaxId,
    MinId,
    Order,
}

impl OptionType for QueryType {
    type Params = QueryParams;

    fn value(self) -> &'static str {
        match self {
            QueryType::ActivityTypeIds => "activityTypeId[]",
            QueryType::All => "all",
            QueryType::Archived => "archived",
            QueryType::Count => "count",
            QueryType::Key => "key",
            QueryType::Keyword => "keyword",
            QueryType::MaxId => "maxId",
            QueryType::MinId => "minId",
            QueryType::Order => "order",
        }
    }

    fn invalid(self, allowed: &[Self]) -> BacklogError {
        InvalidOptionError {
            invalid: self,
            allowed: allowed.to_vec(),
        }
        .into()
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormType {
    Archived,
    ChartEnabled,
    Content,
    Key,
    Name,
    MailAddress,
    MailNotify,
    Password,
    ProjectLeaderCanEditProjectLeader,
    RoleType,
    SubtaskingEnabled,
    TextFormattingRule,
}

impl OptionType for FormType {
    type Params = FormParams;

    fn value(self) -> &'static str {
        match self {
            FormType::Archived => "archived",
            FormType::ChartEnabled => "chartEnabled",
            FormType::Content => "content",
            FormType::Key => "key",
            FormType::Name => "name",
            FormType::MailAddress => "mailAddress",
            FormType::MailNotify => "mailNotify",
            FormType::Password => "password",
            FormType::ProjectLeaderCanEditProjectLeader => "projectLeaderCanEditProjectLeader",
            FormType::RoleType => "roleType",
            FormType::SubtaskingEnabled => "subtaskingEnabled",
            FormType::TextFormattingRule => "textFormattingRule",
        }
    }

    fn invalid(self, allowed: &[Self]) -> BacklogError {
        InvalidOptionError {
            invalid: self,
            allowed: allowed.to_vec(),
        }
        .into()
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Sort order for list endpoints. Only [`Order::ASC`] and [`Order::DESC`]
/// pass validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order(Cow<'static, str>);

impl Order {
    pub const ASC: Order = Order(Cow::Borrowed("asc"));
    pub const DESC: Order = Order(Cow::Borrowed("desc"));

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn is_known(&self) -> bool {
        *self == Self::ASC || *self == Self::DESC
    }
}

impl From<&str> for Order {
    fn from(value: &str) -> Self {
        Order(Cow::Owned(value.to_string()))
    }
}

impl From<String> for Order {
    fn from(value: String) -> Self {
        Order(Cow::Owned(value))
    }
}

/// Text formatting rule of a project. Only [`TextFormat::MARKDOWN`] and
/// [`TextFormat::BACKLOG`] pass validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormat(Cow<'static, str>);

impl TextFormat {
    pub const MARKDOWN: TextFormat = TextFormat(Cow::Borrowed("markdown"));
    pub const BACKLOG: TextFormat = TextFormat(Cow::Borrowed("backlog"));

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn is_known(&self) -> bool {
        *self == Self::MARKDOWN || *self == Self::BACKLOG
    }
}

impl From<&str> for TextFormat {
    fn from(value: &str) -> Self {
        TextFormat(Cow::Owned(value.to_string()))
    }
}

impl From<String> for TextFormat {
    fn from(value: String) -> Self {
        TextFormat(Cow::Owned(value))
    }
}

/// Role type of a space user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Role(pub i64);

impl Role {
    pub const ADMINISTRATOR: Role = Role(1);
    pub const NORMAL_USER: Role = Role(2);
    pub const REPORTER: Role = Role(3);
    pub const VIEWER: Role = Role(4);
    pub const GUEST_REPORTER: Role = Role(5);
    pub const GUEST_VIEWER: Role = Role(6);

    pub(crate) fn is_known(self) -> bool {
        (1..=6).contains(&self.0)
    }
}

impl From<i64> for Role {
    fn from(value: i64) -> Self {
        Role(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_type_wire_keys() {
        assert_eq!(QueryType::ActivityTypeIds.value(), "activityTypeId[]");
        assert_eq!(QueryType::MaxId.value(), "maxId");
        assert_eq!(QueryType::MinId.value(), "minId");
        assert_eq!(QueryType::Keyword.to_string(), "keyword");
    }

    #[test]
    fn test_form_type_wire_keys() {
        assert_eq!(
            FormType::ProjectLeaderCanEditProjectLeader.value(),
            "projectLeaderCanEditProjectLeader"
        );
        assert_eq!(FormType::MailAddress.value(), "mailAddress");
        assert_eq!(FormType::TextFormattingRule.to_string(), "textFormattingRule");
    }

    #[test]
    fn test_invalid_maps_to_matching_error_variant() {
        let err = QueryType::Count.invalid(&[QueryType::Order]);
        assert!(matches!(err, BacklogError::InvalidQueryOption(_)));

        let err = FormType::Name.invalid(&[FormType::Key]);
        assert!(matches!(err, BacklogError::InvalidFormOption(_)));
    }

    #[test]
    fn test_value_domains() {
        assert!(Order::ASC.is_known());
        assert!(Order::from("desc").is_known());
        assert!(!Order::from("ASC").is_known());

        assert!(TextFormat::from("markdown").is_known());
        assert!(!TextFormat::from("html").is_known());

        assert!(Role::ADMINISTRATOR.is_known());
        assert!(Role::GUEST_VIEWER.is_known());
        assert!(!Role(0).is_known());
        assert!(!Role(7).is_known());
    }
}
