use crate::api::models::{Activity, Attachment, Project, User, Wiki};
use crate::utils::text::{first_line, truncate_text};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use crossterm::terminal;

struct ColumnWidths {
    name: usize,
    detail: usize,
}

/// Renders API models as terminal tables.
pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _)) => Some((cols as usize).clamp(40, 200)),
            Err(_) => Some(80),
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn header(&self, text: &str) -> Cell {
        if self.use_colors {
            Cell::new(text).add_attribute(Attribute::Bold).fg(Color::Cyan)
        } else {
            Cell::new(text).add_attribute(Attribute::Bold)
        }
    }

    fn id_cell(&self, id: i64) -> Cell {
        if self.use_colors {
            Cell::new(id).fg(Color::Cyan)
        } else {
            Cell::new(id)
        }
    }

    fn muted_cell(&self, text: &str) -> Cell {
        if self.use_colors {
            Cell::new(text).fg(Color::DarkGrey)
        } else {
            Cell::new(text)
        }
    }

    fn new_table(&self, headers: &[&str]) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        if let Some(width) = self.max_width {
            table.set_width(width as u16);
        }
        table.set_header(headers.iter().map(|h| self.header(h)).collect::<Vec<_>>());
        table
    }

    fn column_widths(&self) -> ColumnWidths {
        match self.max_width.unwrap_or(80) {
            w if w < 80 => ColumnWidths { name: 20, detail: 20 },
            w if w < 120 => ColumnWidths { name: 30, detail: 35 },
            _ => ColumnWidths { name: 40, detail: 60 },
        }
    }

    pub fn render_projects(&self, projects: &[Project]) -> String {
        let widths = self.column_widths();
        let mut table = self.new_table(&["ID", "Key", "Name", "Format", "Archived"]);
        for project in projects {
            table.add_row(vec![
                self.id_cell(project.id),
                Cell::new(&project.project_key),
                Cell::new(truncate_text(&project.name, widths.name)),
                Cell::new(&project.text_formatting_rule),
                Cell::new(if project.archived { "yes" } else { "no" }),
            ]);
        }
        table.to_string()
    }

    pub fn render_users(&self, users: &[User]) -> String {
        let widths = self.column_widths();
        let mut table = self.new_table(&["ID", "User ID", "Name", "Role", "Mail"]);
        for user in users {
            table.add_row(vec![
                self.id_cell(user.id),
                Cell::new(user.user_id.as_deref().unwrap_or("-")),
                Cell::new(truncate_text(&user.name, widths.name)),
                Cell::new(role_name(user.role_type)),
                self.muted_cell(user.mail_address.as_deref().unwrap_or("-")),
            ]);
        }
        table.to_string()
    }

    pub fn render_wikis(&self, wikis: &[Wiki]) -> String {
        let widths = self.column_widths();
        let mut table = self.new_table(&["ID", "Name", "Tags", "Updated"]);
        for wiki in wikis {
            let tags = wiki
                .tags
                .iter()
                .map(|tag| tag.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let updated = wiki
                .updated
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            table.add_row(vec![
                self.id_cell(wiki.id),
                Cell::new(truncate_text(&wiki.name, widths.name)),
                Cell::new(truncate_text(&tags, widths.detail)),
                self.muted_cell(&updated),
            ]);
        }
        table.to_string()
    }

    /// One wiki page with its body below the header rows.
    pub fn render_wiki(&self, wiki: &Wiki) -> String {
        let mut table = self.new_table(&["Field", "Value"]);
        table.add_row(vec![Cell::new("ID"), self.id_cell(wiki.id)]);
        table.add_row(vec![Cell::new("Project"), Cell::new(wiki.project_id)]);
        table.add_row(vec![Cell::new("Name"), Cell::new(&wiki.name)]);
        table.add_row(vec![
            Cell::new("Attachments"),
            Cell::new(wiki.attachments.len()),
        ]);
        let body = wiki.content.as_deref().unwrap_or_default();
        format!("{}\n\n{}", table, body)
    }

    pub fn render_activities(&self, activities: &[Activity]) -> String {
        let widths = self.column_widths();
        let mut table = self.new_table(&["ID", "Type", "Project", "Summary", "By", "Created"]);
        for activity in activities {
            let project = activity
                .project
                .as_ref()
                .map(|p| p.project_key.as_str())
                .unwrap_or("-");
            let summary = activity
                .content
                .as_ref()
                .map(|c| first_line(&c.summary).to_string())
                .unwrap_or_default();
            let by = activity
                .created_user
                .as_ref()
                .map(|u| u.name.as_str())
                .unwrap_or("-");
            let created = activity
                .created
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            table.add_row(vec![
                self.id_cell(activity.id),
                Cell::new(activity.activity_type),
                Cell::new(project),
                Cell::new(truncate_text(&summary, widths.detail)),
                Cell::new(truncate_text(by, widths.name)),
                self.muted_cell(&created),
            ]);
        }
        table.to_string()
    }

    pub fn render_attachments(&self, attachments: &[Attachment]) -> String {
        let widths = self.column_widths();
        let mut table = self.new_table(&["ID", "Name", "Size"]);
        for attachment in attachments {
            table.add_row(vec![
                self.id_cell(attachment.id),
                Cell::new(truncate_text(&attachment.name, widths.name)),
                Cell::new(attachment.size),
            ]);
        }
        table.to_string()
    }
}

fn role_name(role_type: i64) -> &'static str {
    match role_type {
        1 => "Administrator",
        2 => "Normal User",
        3 => "Reporter",
        4 => "Viewer",
        5 => "Guest Reporter",
        6 => "Guest Viewer",
        _ => "Unknown",
    }
}
