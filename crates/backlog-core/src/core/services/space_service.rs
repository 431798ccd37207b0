use super::activity_service::SpaceActivityService;
use super::attachment_service::SpaceAttachmentService;
use crate::api::client::BacklogClient;

/// Space-wide services.
pub struct SpaceService {
    client: BacklogClient,
}

impl SpaceService {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    pub fn activity(&self) -> SpaceActivityService {
        SpaceActivityService::new(self.client.clone())
    }

    pub fn attachment(&self) -> SpaceAttachmentService {
        SpaceAttachmentService::new(self.client.clone())
    }
}
