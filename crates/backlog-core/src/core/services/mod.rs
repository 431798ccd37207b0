pub mod activity_service;
pub mod attachment_service;
pub mod issue_service;
pub mod project_service;
pub mod pull_request_service;
pub mod space_service;
pub mod types;
pub mod user_service;
pub mod wiki_service;

pub use activity_service::{
    ACTIVITY_OPTIONS, ProjectActivityService, SpaceActivityService, UserActivityService,
};
pub use attachment_service::{
    IssueAttachmentService, PullRequestAttachmentService, SpaceAttachmentService,
    WikiAttachmentService,
};
pub use issue_service::IssueService;
pub use project_service::{ProjectService, ProjectUserService};
pub use pull_request_service::PullRequestService;
pub use space_service::SpaceService;
pub use types::{IssueIdOrKey, ProjectIdOrKey, RepositoryIdOrName};
pub use user_service::UserService;
pub use wiki_service::WikiService;
