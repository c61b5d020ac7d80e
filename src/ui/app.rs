//! Application state and screens for the docpost TUI.
//!
//! One [`App`] drives four screens: the folder list, a folder view with
//! the draft preview, a create/edit form for folder configuration, and
//! the global settings form. Long-running network work never runs on the
//! event loop; it is spawned and its result comes back over a oneshot
//! channel polled each tick.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use tokio::sync::oneshot;
use tracing::{error, info};

use super::theme::Palette;
use super::widgets::TextInput;
use crate::config::{GlobalConfig, Theme};
use crate::error::ApiError;
use crate::models::AppSettings;
use crate::publish::{self, PublishReport};
use crate::store::{DocConfig, DocStore, MARKDOWN_FILE};

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Folder list under the base path.
    Folders,
    /// One folder: draft preview and actions.
    Doc,
    /// Folder create / edit-config form.
    DocForm,
    /// Global settings form.
    Settings,
}

/// Whether the folder form creates a folder or edits its config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormMode {
    Create,
    EditConfig,
}

/// Severity of the status line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// The status line message, the TUI's stand-in for toasts.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Create / edit-config form for one documentation folder.
pub struct DocForm {
    pub mode: DocFormMode,
    pub name: TextInput,
    pub repository: TextInput,
    pub pull_request: TextInput,
    pub work_item: TextInput,
    focus: usize,
}

impl DocForm {
    const FIELDS: usize = 4;

    fn for_create() -> Self {
        Self {
            mode: DocFormMode::Create,
            name: TextInput::new("Folder Title"),
            repository: TextInput::new("Repository ID"),
            pull_request: TextInput::new("Pull Request ID"),
            work_item: TextInput::new("Work Item ID"),
            focus: 0,
        }
    }

    fn for_edit(folder: &str, config: &DocConfig) -> Self {
        Self {
            mode: DocFormMode::EditConfig,
            name: TextInput::new("Folder").with_initial(folder),
            repository: TextInput::new("Repository ID").with_initial(&config.repository_id),
            pull_request: TextInput::new("Pull Request ID").with_initial(&config.pull_request_id),
            work_item: TextInput::new("Work Item ID").with_initial(&config.work_item_id),
            // the folder name is fixed once created
            focus: 1,
        }
    }

    fn first_focus(&self) -> usize {
        match self.mode {
            DocFormMode::Create => 0,
            DocFormMode::EditConfig => 1,
        }
    }

    fn next(&mut self) {
        self.focus += 1;
        if self.focus >= Self::FIELDS {
            self.focus = self.first_focus();
        }
    }

    fn prev(&mut self) {
        if self.focus <= self.first_focus() {
            self.focus = Self::FIELDS - 1;
        } else {
            self.focus -= 1;
        }
    }

    fn focused_mut(&mut self) -> &mut TextInput {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.repository,
            2 => &mut self.pull_request,
            _ => &mut self.work_item,
        }
    }

    fn to_doc_config(&self) -> DocConfig {
        DocConfig {
            repository_id: self.repository.content().to_string(),
            pull_request_id: self.pull_request.content().to_string(),
            work_item_id: self.work_item.content().to_string(),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let inputs = [
            (&self.name, 0),
            (&self.repository, 1),
            (&self.pull_request, 2),
            (&self.work_item, 3),
        ];
        for (input, index) in inputs {
            let focused = self.focus == index;
            input.render(rows[index], f.buffer_mut(), focused, palette);
        }
    }
}

/// Global settings form backed by the configuration document.
pub struct SettingsForm {
    pub organization: TextInput,
    pub project: TextInput,
    pub pat: TextInput,
    pub base_path: TextInput,
    pub theme: Theme,
    focus: usize,
}

impl SettingsForm {
    const FIELDS: usize = 4;

    fn from_document(document: &GlobalConfig) -> Self {
        Self {
            organization: TextInput::new("Organization").with_initial(&document.organization),
            project: TextInput::new("Project").with_initial(&document.project),
            pat: TextInput::new("Personal Access Token")
                .masked()
                .with_initial(&document.pat),
            base_path: TextInput::new("Documentation Path").with_initial(&document.base_path),
            theme: document.theme,
            focus: 0,
        }
    }

    fn to_document(&self) -> GlobalConfig {
        GlobalConfig {
            organization: self.organization.content().to_string(),
            project: self.project.content().to_string(),
            pat: self.pat.content().to_string(),
            base_path: self.base_path.content().to_string(),
            theme: self.theme,
        }
    }

    fn next(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELDS;
    }

    fn prev(&mut self) {
        self.focus = (self.focus + Self::FIELDS - 1) % Self::FIELDS;
    }

    fn focused_mut(&mut self) -> &mut TextInput {
        match self.focus {
            0 => &mut self.organization,
            1 => &mut self.project,
            2 => &mut self.pat,
            _ => &mut self.base_path,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let inputs = [
            (&self.organization, 0),
            (&self.project, 1),
            (&self.pat, 2),
            (&self.base_path, 3),
        ];
        for (input, index) in inputs {
            input.render(rows[index], f.buffer_mut(), self.focus == index, palette);
        }

        let theme_line = Line::from(vec![
            Span::styled(" Theme: ", Style::default().fg(palette.dim)),
            Span::styled(
                self.theme.to_string(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (F3 to change)", Style::default().fg(palette.dim)),
        ]);
        f.render_widget(Paragraph::new(theme_line), rows[4]);
    }
}

/// Top-level TUI application state.
pub struct App {
    /// Resolved runtime settings; replaced wholesale when the settings
    /// form is saved.
    pub settings: AppSettings,
    /// Folder-backed local store.
    pub store: DocStore,
    /// Current screen.
    pub screen: Screen,
    /// Folder names under the base path.
    pub folders: Vec<String>,
    /// Selection state of the folder list.
    pub list_state: ListState,
    /// Folder currently opened in the Doc screen.
    pub current_folder: Option<String>,
    /// Draft content of the opened folder.
    pub draft: String,
    /// Preview scroll offset.
    pub scroll: u16,
    /// Folder create / edit form.
    pub doc_form: DocForm,
    /// Global settings form.
    pub settings_form: SettingsForm,
    /// Active palette, follows the theme setting.
    pub palette: Palette,
    /// Status line message.
    pub status: Option<StatusMessage>,
    /// Path the run loop should open in the external editor.
    pub edit_request: Option<PathBuf>,
    /// Set when the user asked to exit.
    pub should_quit: bool,
    pending_publish: Option<oneshot::Receiver<Result<PublishReport, ApiError>>>,
    pending_verify: Option<oneshot::Receiver<bool>>,
}

impl App {
    /// Creates the app from resolved settings and the loaded global
    /// document.
    ///
    /// Without a PAT the app opens on the settings screen, the same
    /// first-run behavior as a missing document.
    pub fn new(settings: AppSettings, store: DocStore, document: &GlobalConfig) -> Self {
        let screen = if settings.has_pat() {
            Screen::Folders
        } else {
            Screen::Settings
        };

        let mut app = Self {
            palette: Palette::for_theme(settings.theme),
            settings_form: SettingsForm::from_document(document),
            doc_form: DocForm::for_create(),
            settings,
            store,
            screen,
            folders: Vec::new(),
            list_state: ListState::default(),
            current_folder: None,
            draft: String::new(),
            scroll: 0,
            status: None,
            edit_request: None,
            should_quit: false,
            pending_publish: None,
            pending_verify: None,
        };
        app.refresh_folders();
        app
    }

    /// True while a spawned network operation has not completed.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.pending_publish.is_some() || self.pending_verify.is_some()
    }

    fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind,
            text: text.into(),
        });
    }

    /// Reloads the folder list from the store.
    pub fn refresh_folders(&mut self) {
        self.folders = self.store.list_doc_folders(&self.settings.base_path);
        let selection = match self.list_state.selected() {
            Some(i) if i < self.folders.len() => Some(i),
            _ if self.folders.is_empty() => None,
            _ => Some(0),
        };
        self.list_state.select(selection);
    }

    fn folder_path(&self, name: &str) -> PathBuf {
        self.settings.base_path.join(name)
    }

    fn selected_folder(&self) -> Option<&str> {
        self.list_state
            .selected()
            .and_then(|i| self.folders.get(i))
            .map(String::as_str)
    }

    fn open_selected_folder(&mut self) {
        let Some(name) = self.selected_folder().map(str::to_string) else {
            return;
        };
        match self.store.read_markdown(&self.folder_path(&name)) {
            Ok(draft) => {
                self.draft = draft;
                self.current_folder = Some(name);
                self.scroll = 0;
                self.screen = Screen::Doc;
            }
            Err(e) => self.set_status(StatusKind::Error, e.to_string()),
        }
    }

    /// Reloads the opened draft, after the external editor returns.
    pub fn reload_draft(&mut self) {
        let Some(folder) = self.current_folder.clone() else {
            return;
        };
        match self.store.read_markdown(&self.folder_path(&folder)) {
            Ok(draft) => {
                self.draft = draft;
                self.set_status(StatusKind::Success, "Draft saved");
            }
            Err(e) => self.set_status(StatusKind::Error, e.to_string()),
        }
    }

    /// Applies the outcome of an external editor run.
    pub fn editor_finished(&mut self, result: Result<(), crate::error::UiError>) {
        match result {
            Ok(()) => self.reload_draft(),
            Err(e) => self.set_status(StatusKind::Error, e.to_string()),
        }
    }

    fn create_folder(&mut self) {
        let title = self.doc_form.name.content().to_string();
        let config = self.doc_form.to_doc_config();
        match self
            .store
            .create_doc_folder(&self.settings.base_path, &title, &config)
        {
            Ok(folder) => {
                info!(folder = %folder.display(), "folder created from TUI");
                self.set_status(
                    StatusKind::Success,
                    format!("Folder '{}' created", crate::store::normalize_title(&title)),
                );
                self.refresh_folders();
                self.screen = Screen::Folders;
            }
            // surfaced verbatim; collision and empty-title are both recoverable
            Err(e) => self.set_status(StatusKind::Error, e.to_string()),
        }
    }

    fn save_doc_config(&mut self) {
        let Some(folder) = self.current_folder.clone() else {
            return;
        };
        let config = self.doc_form.to_doc_config();
        match self.store.save_doc_config(&self.folder_path(&folder), &config) {
            Ok(()) => {
                self.set_status(StatusKind::Success, "Folder configuration updated");
                self.screen = Screen::Doc;
            }
            Err(e) => self.set_status(StatusKind::Error, e.to_string()),
        }
    }

    fn save_settings(&mut self) {
        let document = self.settings_form.to_document();

        if !document.base_path.is_empty() {
            let base = PathBuf::from(&document.base_path);
            if !base.exists() {
                if let Err(e) = std::fs::create_dir_all(&base) {
                    self.set_status(
                        StatusKind::Error,
                        format!("Cannot use that path: {e}"),
                    );
                    return;
                }
            }
        }

        if let Err(e) = document.save() {
            self.set_status(StatusKind::Error, e.to_string());
            return;
        }

        self.settings = AppSettings::new(
            document.organization.clone(),
            document.project.clone(),
            document.pat.clone(),
            PathBuf::from(&document.base_path),
            document.theme,
        );
        self.palette = Palette::for_theme(document.theme);
        self.refresh_folders();
        self.set_status(StatusKind::Success, "Configuration saved");
        self.screen = Screen::Folders;
    }

    fn start_publish(&mut self) {
        if self.is_busy() {
            self.set_status(StatusKind::Info, "An operation is already running");
            return;
        }
        let Some(folder) = self.current_folder.clone() else {
            return;
        };
        if !self.settings.is_connectable() {
            self.set_status(
                StatusKind::Error,
                "Configure organization, project and PAT before publishing",
            );
            self.screen = Screen::Settings;
            return;
        }

        let path = self.folder_path(&folder);
        let doc = match self.store.load_doc_config(&path) {
            Ok(doc) => doc,
            Err(e) => {
                self.set_status(StatusKind::Error, e.to_string());
                return;
            }
        };
        let markdown = match self.store.read_markdown(&path) {
            Ok(markdown) => markdown,
            Err(e) => {
                self.set_status(StatusKind::Error, e.to_string());
                return;
            }
        };
        let client = match self.settings.client() {
            Ok(client) => client,
            Err(e) => {
                self.set_status(StatusKind::Error, e.to_string());
                return;
            }
        };

        self.pending_publish = Some(publish::spawn_publish(client, doc, markdown));
        self.set_status(StatusKind::Info, format!("Publishing '{folder}'..."));
    }

    fn start_verify(&mut self) {
        if self.is_busy() {
            self.set_status(StatusKind::Info, "An operation is already running");
            return;
        }

        // verify the values currently in the form, saved or not
        let form_settings = AppSettings::new(
            self.settings_form.organization.content().to_string(),
            self.settings_form.project.content().to_string(),
            self.settings_form.pat.content().to_string(),
            self.settings.base_path.clone(),
            self.settings_form.theme,
        );
        if !form_settings.is_connectable() {
            self.set_status(
                StatusKind::Error,
                "Fill in organization, project and PAT first",
            );
            return;
        }

        match form_settings.client() {
            Ok(client) => {
                self.pending_verify = Some(publish::spawn_verify(client));
                self.set_status(StatusKind::Info, "Checking connection...");
            }
            Err(e) => self.set_status(StatusKind::Error, e.to_string()),
        }
    }

    /// Polls the completion channels; called once per tick.
    ///
    /// Each channel delivers at most once; the receiver is consumed the
    /// tick its result lands.
    pub fn poll_completions(&mut self) {
        if let Some(mut rx) = self.pending_publish.take() {
            match rx.try_recv() {
                Ok(Ok(report)) => {
                    let kind = if report.all_ok() {
                        StatusKind::Success
                    } else {
                        StatusKind::Error
                    };
                    self.set_status(kind, report.summary());
                }
                Ok(Err(e)) => {
                    error!(error = %e, "publish failed");
                    self.set_status(StatusKind::Error, format!("Publish failed: {e}"));
                }
                Err(oneshot::error::TryRecvError::Empty) => {
                    self.pending_publish = Some(rx);
                }
                Err(oneshot::error::TryRecvError::Closed) => {
                    self.set_status(StatusKind::Error, "Publish task ended without a result");
                }
            }
        }

        if let Some(mut rx) = self.pending_verify.take() {
            match rx.try_recv() {
                Ok(true) => self.set_status(StatusKind::Success, "Connection verified"),
                Ok(false) => self.set_status(
                    StatusKind::Error,
                    "Could not reach Azure DevOps with these settings",
                ),
                Err(oneshot::error::TryRecvError::Empty) => {
                    self.pending_verify = Some(rx);
                }
                Err(oneshot::error::TryRecvError::Closed) => {
                    self.set_status(StatusKind::Error, "Verify task ended without a result");
                }
            }
        }
    }

    /// Routes a key press to the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Folders => self.handle_folders_key(key),
            Screen::Doc => self.handle_doc_key(key),
            Screen::DocForm => self.handle_doc_form_key(key),
            Screen::Settings => self.handle_settings_key(key),
        }
    }

    fn handle_folders_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('r') => {
                self.refresh_folders();
                self.set_status(StatusKind::Info, "Folder list refreshed");
            }
            KeyCode::Char('n') => {
                self.doc_form = DocForm::for_create();
                self.screen = Screen::DocForm;
            }
            KeyCode::Char('s') => self.screen = Screen::Settings,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Enter => self.open_selected_folder(),
            _ => {}
        }
    }

    fn handle_doc_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('b') => {
                self.current_folder = None;
                self.refresh_folders();
                self.screen = Screen::Folders;
            }
            KeyCode::Char('e') => {
                if let Some(folder) = &self.current_folder {
                    self.edit_request = Some(self.folder_path(folder).join(MARKDOWN_FILE));
                }
            }
            KeyCode::Char('p') => self.start_publish(),
            KeyCode::Char('c') => {
                if let Some(folder) = self.current_folder.clone() {
                    match self.store.load_doc_config(&self.folder_path(&folder)) {
                        Ok(config) => {
                            self.doc_form = DocForm::for_edit(&folder, &config);
                            self.screen = Screen::DocForm;
                        }
                        Err(e) => self.set_status(StatusKind::Error, e.to_string()),
                    }
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            _ => {}
        }
    }

    fn handle_doc_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.screen = match self.doc_form.mode {
                    DocFormMode::Create => Screen::Folders,
                    DocFormMode::EditConfig => Screen::Doc,
                };
            }
            KeyCode::Enter => match self.doc_form.mode {
                DocFormMode::Create => self.create_folder(),
                DocFormMode::EditConfig => self.save_doc_config(),
            },
            KeyCode::Tab | KeyCode::Down => self.doc_form.next(),
            KeyCode::BackTab | KeyCode::Up => self.doc_form.prev(),
            _ => {
                self.doc_form.focused_mut().handle_key(key);
            }
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.screen = Screen::Folders,
            KeyCode::Enter => self.save_settings(),
            KeyCode::F(2) => self.start_verify(),
            KeyCode::F(3) => {
                self.settings_form.theme = self.settings_form.theme.cycle();
                self.palette = Palette::for_theme(self.settings_form.theme);
            }
            KeyCode::Tab | KeyCode::Down => self.settings_form.next(),
            KeyCode::BackTab | KeyCode::Up => self.settings_form.prev(),
            _ => {
                self.settings_form.focused_mut().handle_key(key);
            }
        }
    }

    fn select_next(&mut self) {
        if self.folders.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < self.folders.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    fn select_prev(&mut self) {
        if self.folders.is_empty() {
            return;
        }
        let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev));
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Draws the whole frame.
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        match self.screen {
            Screen::Folders => self.render_folders(f, chunks[1]),
            Screen::Doc => self.render_doc(f, chunks[1]),
            Screen::DocForm => {
                let title = match self.doc_form.mode {
                    DocFormMode::Create => " New Documentation Folder ",
                    DocFormMode::EditConfig => " Folder Configuration ",
                };
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.dim))
                    .title(title);
                let inner = block.inner(chunks[1]);
                f.render_widget(block, chunks[1]);
                self.doc_form.render(f, inner, &self.palette);
            }
            Screen::Settings => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.dim))
                    .title(" Settings ");
                let inner = block.inner(chunks[1]);
                f.render_widget(block, chunks[1]);
                self.settings_form.render(f, inner, &self.palette);
            }
        }
        self.render_hints(f, chunks[2]);
        self.render_status(f, chunks[3]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let connection = if self.settings.is_connectable() {
            format!("{}/{}", self.settings.organization, self.settings.project)
        } else {
            "not configured".to_string()
        };
        let header = Line::from(vec![
            Span::styled(
                " docpost ",
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(connection, Style::default().fg(self.palette.dim)),
        ]);
        f.render_widget(Paragraph::new(header), area);
    }

    fn render_folders(&mut self, f: &mut Frame, area: Rect) {
        if self.folders.is_empty() {
            let empty = Paragraph::new("No documentation folders yet. Press 'n' to create one.")
                .style(Style::default().fg(self.palette.dim))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(" Folders "));
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .folders
            .iter()
            .map(|name| {
                let modified = self
                    .store
                    .folder_modified_at(&self.settings.base_path.join(name))
                    .map(|t| t.format("  %Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                ListItem::new(Line::from(vec![
                    Span::styled(name.clone(), Style::default().fg(self.palette.text)),
                    Span::styled(modified, Style::default().fg(self.palette.dim)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Folders "))
            .highlight_style(
                Style::default()
                    .bg(self.palette.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_doc(&self, f: &mut Frame, area: Rect) {
        let title = self
            .current_folder
            .as_deref()
            .map_or(" Draft ".to_string(), |name| format!(" {name} "));

        let body = if self.draft.is_empty() {
            Paragraph::new("Empty draft. Press 'e' to open it in your editor.")
                .style(Style::default().fg(self.palette.dim))
        } else {
            Paragraph::new(self.draft.as_str())
                .style(Style::default().fg(self.palette.text))
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0))
        };

        f.render_widget(
            body.block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
    }

    fn render_hints(&self, f: &mut Frame, area: Rect) {
        let hints = match self.screen {
            Screen::Folders => " Enter open · n new · s settings · r refresh · q quit",
            Screen::Doc => " e edit · p publish · c configure · Esc back · q quit",
            Screen::DocForm => " Enter save · Tab next field · Esc cancel",
            Screen::Settings => " Enter save · F2 verify connection · F3 theme · Esc back",
        };
        f.render_widget(
            Paragraph::new(hints).style(Style::default().fg(self.palette.dim)),
            area,
        );
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        let (text, color) = if self.is_busy() {
            (" Working...".to_string(), self.palette.accent)
        } else if let Some(status) = &self.status {
            let color = match status.kind {
                StatusKind::Info => self.palette.dim,
                StatusKind::Success => self.palette.success,
                StatusKind::Error => self.palette.error,
            };
            (format!(" {}", status.text), color)
        } else {
            (String::new(), self.palette.dim)
        };

        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(color)),
            area,
        );
    }
}
