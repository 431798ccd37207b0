use super::attachment_service::IssueAttachmentService;
use crate::api::client::BacklogClient;

pub struct IssueService {
    client: BacklogClient,
}

impl IssueService {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    pub fn attachment(&self) -> IssueAttachmentService {
        IssueAttachmentService::new(self.client.clone())
    }
}
