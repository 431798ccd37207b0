use crate::cli::error::{CliError, CliResult};
use crate::cli::main_types::{
    ActivityArgs, AttachmentCommands, ConfigCommands, OutputFormat, ProjectCommands, SortOrder,
    UserCommands, WikiCommands,
};
use backlog_core::api::client::BacklogClient;
use backlog_core::core::services::ProjectIdOrKey;
use backlog_core::display::TableDisplay;
use backlog_core::option::{
    ActivityOptionService, Order, ProjectOptionService, QueryOption, WikiOptionService,
};
use backlog_core::storage::config::Config;
use backlog_core::storage::credentials::resolve_api_key;
use backlog_core::utils::validation::validate_url;
use serde::Serialize;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};

/// Numeric arguments address a project by id, anything else by key.
pub fn parse_project(value: &str) -> ProjectIdOrKey {
    match value.parse::<i64>() {
        Ok(id) => ProjectIdOrKey::Id(id),
        Err(_) => ProjectIdOrKey::Key(value.to_string()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn emit<T, F>(format: OutputFormat, value: &T, render: F) -> CliResult<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&TableDisplay, &T) -> String,
{
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => {
            println!("{}", render(&TableDisplay::new(), value));
            Ok(())
        }
    }
}

pub struct ConfigHandler {
    config: Config,
    config_path: Option<PathBuf>,
    url: Option<String>,
    api_key: Option<String>,
}

impl ConfigHandler {
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

    // --api-key > BACKLOG_API_KEY, same order the client is built with
    fn api_key_status(&self) -> &'static str {
        match resolve_api_key(self.api_key.as_deref()) {
            Some(_) => "set",
            None => "not set",
        }
    }

    pub async fn handle<F>(mut self, command: ConfigCommands, create_client: F) -> CliResult<()>
    where
        F: FnOnce() -> CliResult<BacklogClient>,
    {
        match command {
            ConfigCommands::Show => {
                println!("Current Configuration:");
                println!("=====================");
                match self.config.get_url() {
                    Some(url) => println!("URL: {}", url),
                    None => println!("URL: (not set)"),
                }
                println!("Timeout: {}s", self.config.timeout().as_secs());
                println!("API Key: {}", self.api_key_status());
                Ok(())
            }
            ConfigCommands::Set { timeout } => {
                let mut updated = Vec::new();

                if let Some(url) = self.url.take() {
                    validate_url(&url)?;
                    updated.push(format!("URL to {}", url));
                    self.config.set_url(url);
                }
                if let Some(seconds) = timeout {
                    if seconds == 0 {
                        return Err(CliError::InvalidArguments(
                            "timeout must be 1 second or more".to_string(),
                        ));
                    }
                    self.config.timeout_seconds = Some(seconds);
                    updated.push(format!("timeout to {}s", seconds));
                }

                if updated.is_empty() {
                    return Err(CliError::InvalidArguments(
                        "No configuration values provided. Use --url and/or --timeout".to_string(),
                    ));
                }

                self.config.save(self.config_path.clone())?;
                println!("Set {}", updated.join(", "));
                Ok(())
            }
            ConfigCommands::Validate => {
                let client = create_client()?;
                log::debug!("validating API key against {}", client.base_url());
                let me = client.user().own().await?;
                println!(
                    "API key is valid for {} ({})",
                    me.name,
                    me.user_id.as_deref().unwrap_or("-")
                );
                Ok(())
            }
        }
    }
}

pub struct ProjectHandler {
    client: BacklogClient,
}

impl ProjectHandler {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    pub async fn handle(&self, command: ProjectCommands) -> CliResult<()> {
        match command {
            ProjectCommands::List {
                all,
                archived,
                format,
            } => {
                let o = ProjectOptionService;
                let mut options = Vec::new();
                if all {
                    options.push(o.with_query_all(true));
                }
                if let Some(archived) = archived {
                    options.push(o.with_query_archived(archived));
                }
                let projects = self.client.project().all(&options).await?;
                emit(format, projects.as_slice(), |d, p| d.render_projects(p))
            }
            ProjectCommands::Show { project, format } => {
                let project = self.client.project().one(parse_project(&project)).await?;
                emit(format, std::slice::from_ref(&project), |d, p| {
                    d.render_projects(p)
                })
            }
        }
    }
}

pub struct WikiHandler {
    client: BacklogClient,
}

impl WikiHandler {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    pub async fn handle(&self, command: WikiCommands) -> CliResult<()> {
        match command {
            WikiCommands::List {
                project,
                keyword,
                format,
            } => {
                let options: Vec<QueryOption> = keyword
                    .map(|k| WikiOptionService.with_query_keyword(k))
                    .into_iter()
                    .collect();
                let wikis = self
                    .client
                    .wiki()
                    .all(parse_project(&project), &options)
                    .await?;
                emit(format, wikis.as_slice(), |d, w| d.render_wikis(w))
            }
            WikiCommands::Count { project } => {
                let count = self.client.wiki().count(parse_project(&project)).await?;
                println!("{}", count);
                Ok(())
            }
            WikiCommands::Show { id, format } => {
                let wiki = self.client.wiki().one(id).await?;
                emit(format, &wiki, |d, w| d.render_wiki(w))
            }
        }
    }
}

pub struct UserHandler {
    client: BacklogClient,
}

impl UserHandler {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    pub async fn handle(&self, command: UserCommands) -> CliResult<()> {
        match command {
            UserCommands::List { format } => {
                let users = self.client.user().all().await?;
                emit(format, users.as_slice(), |d, u| d.render_users(u))
            }
            UserCommands::Me { format } => {
                let me = self.client.user().own().await?;
                emit(format, std::slice::from_ref(&me), |d, u| d.render_users(u))
            }
        }
    }
}

pub struct ActivityHandler {
    client: BacklogClient,
}

impl ActivityHandler {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    pub async fn handle(&self, args: ActivityArgs) -> CliResult<()> {
        let options = activity_options(&args);
        let activities = if let Some(project) = &args.project {
            self.client
                .project()
                .activity()
                .list(parse_project(project), &options)
                .await?
        } else if let Some(user_id) = args.user {
            self.client.user().activity().list(user_id, &options).await?
        } else {
            self.client.space().activity().list(&options).await?
        };
        emit(args.format, activities.as_slice(), |d, a| {
            d.render_activities(a)
        })
    }
}

fn activity_options(args: &ActivityArgs) -> Vec<QueryOption> {
    let o = ActivityOptionService;
    let mut options = Vec::new();
    if !args.type_ids.is_empty() {
        options.push(o.with_query_activity_type_ids(&args.type_ids));
    }
    if let Some(min_id) = args.min_id {
        options.push(o.with_query_min_id(min_id));
    }
    if let Some(max_id) = args.max_id {
        options.push(o.with_query_max_id(max_id));
    }
    if let Some(count) = args.count {
        options.push(o.with_query_count(count));
    }
    if let Some(order) = args.order {
        options.push(o.with_query_order(match order {
            SortOrder::Asc => Order::ASC,
            SortOrder::Desc => Order::DESC,
        }));
    }
    options
}

/// Name to upload under and the file contents, read off the runtime's
/// blocking pool.
async fn read_upload(file: &Path, name: Option<String>) -> CliResult<(String, Vec<u8>)> {
    let file_name = match name {
        Some(name) => name,
        None => file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                CliError::InvalidArguments(format!(
                    "cannot derive a file name from {}",
                    file.display()
                ))
            })?,
    };
    let bytes = tokio::fs::read(file).await?;
    Ok((file_name, bytes))
}

pub struct AttachmentHandler {
    client: BacklogClient,
}

impl AttachmentHandler {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    pub async fn handle(&self, command: AttachmentCommands) -> CliResult<()> {
        match command {
            AttachmentCommands::Upload { file, name, format } => {
                let (file_name, bytes) = read_upload(&file, name).await?;
                let attachment = self
                    .client
                    .space()
                    .attachment()
                    .upload(&file_name, Cursor::new(bytes))
                    .await?;
                emit(format, std::slice::from_ref(&attachment), |d, a| {
                    d.render_attachments(a)
                })
            }
            AttachmentCommands::List { wiki, format } => {
                let attachments = self.client.wiki().attachment().list(wiki).await?;
                emit(format, attachments.as_slice(), |d, a| {
                    d.render_attachments(a)
                })
            }
        }
    }
}
