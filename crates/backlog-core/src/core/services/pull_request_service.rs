use super::attachment_service::PullRequestAttachmentService;
use crate::api::client::BacklogClient;

pub struct PullRequestService {
    client: BacklogClient,
}

impl PullRequestService {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    pub fn attachment(&self) -> PullRequestAttachmentService {
        PullRequestAttachmentService::new(self.client.clone())
    }
}
