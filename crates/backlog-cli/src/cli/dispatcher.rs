use crate::cli::command_handlers::{
    ActivityHandler, AttachmentHandler, ConfigHandler, ProjectHandler, UserHandler, WikiHandler,
};
use crate::cli::error::{CliError, CliResult};
use crate::cli::main_types::Commands;
use backlog_core::api::client::BacklogClient;
use backlog_core::storage::config::Config;
use backlog_core::storage::credentials::resolve_api_key;
use backlog_core::utils::validation::validate_api_key;
use std::path::PathBuf;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    url: Option<String>,
    api_key: Option<String>,
}

impl Dispatcher {
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        url: Option<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            config,
            config_path,
            url,
            api_key,
        }
    }

    // --url > BACKLOG_URL > config.toml
    fn effective_url(&self) -> CliResult<String> {
        self.config
            .resolve_url(self.url.as_deref())
            .ok_or(CliError::MissingUrl)
    }

    fn create_client(&self) -> CliResult<BacklogClient> {
        let url = self.effective_url()?;
        let api_key = resolve_api_key(self.api_key.as_deref()).ok_or(CliError::MissingApiKey)?;
        validate_api_key(&api_key)?;
        log::debug!("creating client for {}", url);
        Ok(BacklogClient::with_timeout(
            &url,
            &api_key,
            self.config.timeout(),
        )?)
    }

    pub async fn dispatch(&self, command: Commands) -> CliResult<()> {
        match command {
            Commands::Config { command } => {
                let handler = ConfigHandler::new(
                    self.config.clone(),
                    self.config_path.clone(),
                    self.url.clone(),
                    self.api_key.clone(),
                );
                // show and set work before a URL or key exists
                handler.handle(command, || self.create_client()).await
            }
            Commands::Project { command } => {
                ProjectHandler::new(self.create_client()?)
                    .handle(command)
                    .await
            }
            Commands::Wiki { command } => WikiHandler::new(self.create_client()?).handle(command).await,
            Commands::User { command } => UserHandler::new(self.create_client()?).handle(command).await,
            Commands::Activity(args) => {
                ActivityHandler::new(self.create_client()?)
                    .handle(args)
                    .await
            }
            Commands::Attachment { command } => {
                AttachmentHandler::new(self.create_client()?)
                    .handle(command)
                    .await
            }
        }
    }
}
