use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tui_textarea::TextArea;

use cipher_quest::cipher;
use cipher_quest::config::Config;
use cipher_quest::engine::{
    HintOutcome, LevelStatus, ProgressEngine, SessionState, StatusKind, SubmitOutcome,
};
use cipher_quest::puzzle::{builtin_catalog, load_catalog, Catalog};
use cipher_quest::relay::{ChatMessage, OracleRelay, RelayContext, RelayWorker, Role};

const TICK_RATE: Duration = Duration::from_millis(100);

enum GameState {
    TitleScreen,
    CipherGuide,
    Playing,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    NewGame,
    CipherGuide,
    Quit,
}

impl MenuOption {
    fn next(self) -> Self {
        match self {
            MenuOption::NewGame => MenuOption::CipherGuide,
            MenuOption::CipherGuide => MenuOption::Quit,
            MenuOption::Quit => MenuOption::NewGame,
        }
    }

    fn prev(self) -> Self {
        match self {
            MenuOption::NewGame => MenuOption::Quit,
            MenuOption::CipherGuide => MenuOption::NewGame,
            MenuOption::Quit => MenuOption::CipherGuide,
        }
    }

    fn label(self) -> &'static str {
        match self {
            MenuOption::NewGame => "  BEGIN QUEST  ",
            MenuOption::CipherGuide => "  CIPHER GUIDE  ",
            MenuOption::Quit => "  QUIT  ",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus {
    Answer,
    Chat,
}

struct App<'a> {
    engine: ProgressEngine<'a>,
    session: SessionState,
    answer: TextArea<'a>,
    chat_input: TextArea<'a>,
    chat: Vec<ChatMessage>,
    chat_notice: Option<String>,
    relay: RelayWorker,
    guide_name: String,
    focus: Focus,
    notice: Option<(String, Style)>,
    final_key: Option<String>,
    state: GameState,
    menu_selection: MenuOption,
    hints_used_total: usize,
    wrong_answers_total: u32,
    command_mode: bool,
    command_buffer: String,
    should_quit: bool,
}

fn answer_box<'a>() -> TextArea<'a> {
    let mut input = TextArea::default();
    input.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Your Answer [Enter: Submit | F1: Hint | Tab: Guide | Esc: Title] "),
    );
    input.set_placeholder_text("Enter your solution...");
    input.set_cursor_line_style(Style::default());
    input
}

fn chat_box<'a>() -> TextArea<'a> {
    let mut input = TextArea::default();
    input.set_block(Block::default().borders(Borders::ALL).title(" Ask "));
    input.set_placeholder_text("Ask for guidance...");
    input.set_cursor_line_style(Style::default());
    input
}

impl<'a> App<'a> {
    fn new(engine: ProgressEngine<'a>, relay: RelayWorker, guide_name: String) -> Self {
        let session = engine.new_session();
        App {
            engine,
            session,
            answer: answer_box(),
            chat_input: chat_box(),
            chat: Vec::new(),
            chat_notice: None,
            relay,
            guide_name,
            focus: Focus::Answer,
            notice: None,
            final_key: None,
            state: GameState::TitleScreen,
            menu_selection: MenuOption::NewGame,
            hints_used_total: 0,
            wrong_answers_total: 0,
            command_mode: false,
            command_buffer: String::new(),
            should_quit: false,
        }
    }

    fn catalog(&self) -> &'a Catalog {
        self.engine.catalog()
    }

    fn start_game(&mut self) {
        self.session.teardown();
        self.session = self.engine.new_session();
        self.answer = answer_box();
        self.chat_input = chat_box();
        self.chat.clear();
        self.chat_notice = None;
        self.relay.reset();
        self.focus = Focus::Answer;
        self.notice = None;
        self.final_key = None;
        self.hints_used_total = 0;
        self.wrong_answers_total = 0;
        self.state = GameState::Playing;
        info!(levels = self.catalog().len(), "new session started");
    }

    fn end_session(&mut self) {
        self.session.teardown();
        self.relay.reset();
        self.state = GameState::TitleScreen;
        info!(
            solved = self.session.solved_level_ids().len(),
            "session ended"
        );
    }

    /// Drive the deferred advance and collect relay replies.
    fn tick(&mut self, now: Instant) {
        if self.engine.tick(&mut self.session, now).is_some() {
            self.answer = answer_box();
            self.notice = None;
        }

        if let Some(result) = self.relay.poll() {
            match result {
                Ok(reply) => {
                    self.chat.push(ChatMessage::assistant(reply));
                    self.chat_notice = None;
                }
                Err(e) => {
                    warn!(error = %e, "guide reply failed");
                    self.chat_notice = Some(format!("Failed to get a response: {e}"));
                }
            }
        }
    }

    fn answer_is_empty(&self) -> bool {
        self.answer.lines().iter().all(|line| line.is_empty())
    }

    fn submit_answer(&mut self) {
        let answer = self.answer.lines().join(" ");
        self.notice = None;

        match self
            .engine
            .submit_answer(&mut self.session, &answer, Instant::now())
        {
            SubmitOutcome::Solved { next: None, .. } => {
                self.notice = Some((
                    "All trials complete! Press F2 to combine the key fragments.".to_string(),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ));
            }
            SubmitOutcome::Solved { next: Some(_), .. } => {}
            SubmitOutcome::Incorrect => self.wrong_answers_total += 1,
            SubmitOutcome::AlreadySolved => {
                self.notice = Some((
                    "This trial is already complete.".to_string(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            SubmitOutcome::Closed => {}
        }
    }

    fn show_hint(&mut self) {
        self.notice = None;
        if let HintOutcome::Revealed { .. } = self.engine.request_hint(&mut self.session) {
            self.hints_used_total += 1;
        }
    }

    fn combine_keys(&mut self) {
        match self.engine.assemble_final_artifact(&self.session) {
            Some(key) => {
                info!("key fragments combined");
                self.final_key = Some(key);
                self.notice = Some((
                    "Keys combined! The private key has been assembled.".to_string(),
                    Style::default().fg(Color::Green),
                ));
            }
            None => {
                self.notice = Some((
                    "Complete every trial before combining the key fragments.".to_string(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
    }

    fn send_chat(&mut self) {
        let question = self.chat_input.lines().join(" ").trim().to_string();
        if question.is_empty() {
            return;
        }
        if self.relay.is_busy() {
            self.chat_notice = Some(format!("{} is still thinking...", self.guide_name));
            return;
        }

        self.chat.push(ChatMessage::user(question));
        self.chat_input = chat_box();
        let context = RelayContext {
            level_id: self.session.current_level_id(),
            hint: self
                .session
                .last_message()
                .map(|m| m.text.clone())
                .unwrap_or_default(),
        };
        if let Err(e) = self.relay.request(self.chat.clone(), context) {
            warn!(error = %e, "guide request failed");
            self.chat_notice = Some(format!("Failed to reach the guide: {e}"));
        } else {
            self.chat_notice = None;
        }
    }

    fn run_command(&mut self) {
        match self.command_buffer.as_str() {
            "q" | "quit" => self.should_quit = true,
            "hint" => self.show_hint(),
            "key" => self.combine_keys(),
            "title" => self.end_session(),
            "help" => {
                self.notice = Some((
                    "Commands: :q (quit), :hint (show hint), :key (combine keys), :title"
                        .to_string(),
                    Style::default().fg(Color::Cyan),
                ));
            }
            "" => {}
            other => {
                self.notice = Some((
                    format!("Unknown command: {other}"),
                    Style::default().fg(Color::Red),
                ));
            }
        }
        self.command_mode = false;
        self.command_buffer.clear();
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        if self.command_mode {
            match key.code {
                KeyCode::Esc => {
                    self.command_mode = false;
                    self.command_buffer.clear();
                }
                KeyCode::Enter => self.run_command(),
                KeyCode::Backspace => {
                    self.command_buffer.pop();
                    if self.command_buffer.is_empty() {
                        self.command_mode = false;
                    }
                }
                KeyCode::Char(c) => self.command_buffer.push(c),
                _ => {}
            }
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.end_session(),
            (KeyCode::Tab, _) => {
                self.focus = match self.focus {
                    Focus::Answer => Focus::Chat,
                    Focus::Chat => Focus::Answer,
                };
            }
            (KeyCode::F(1), _) => self.show_hint(),
            (KeyCode::F(2), _) => self.combine_keys(),
            (KeyCode::Enter, _) => match self.focus {
                Focus::Answer => self.submit_answer(),
                Focus::Chat => self.send_chat(),
            },
            // Vim-style commands start from an empty answer box.
            (KeyCode::Char(':'), KeyModifiers::NONE)
                if self.focus == Focus::Answer && self.answer_is_empty() =>
            {
                self.command_mode = true;
                self.command_buffer.clear();
            }
            _ => {
                let input = match self.focus {
                    Focus::Answer => &mut self.answer,
                    Focus::Chat => &mut self.chat_input,
                };
                input.input(key);
            }
        }
    }
}

fn main() -> Result<()> {
    let (config, config_path) = Config::load()?;
    init_tracing(&config.log_filter);
    match &config_path {
        Some(path) => info!(path = %path.display(), "config loaded"),
        None => info!("no config file found, using defaults"),
    }

    let catalog = match &config.puzzle_dir {
        Some(dir) => load_catalog(dir)?,
        None => builtin_catalog().context("builtin trials are invalid")?,
    };

    let engine = ProgressEngine::with_advance_delay(&catalog, config.advance_delay());
    let oracle = OracleRelay::new(config.guide_name.clone());
    let guide_name = oracle.name().to_string();
    let mut app = App::new(engine, RelayWorker::new(Arc::new(oracle)), guide_name);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore the terminal before any error reaches the user.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    if app.engine.is_complete(&app.session) {
        println!("\nCongratulations! You have completed all trials.\n");
        if let Some(key) = &app.final_key {
            println!("Private key: {key}\n");
        }
    }

    Ok(())
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| draw_ui(f, app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            app.end_session();
            break;
        }

        match app.state {
            GameState::TitleScreen => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    app.menu_selection = app.menu_selection.prev();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    app.menu_selection = app.menu_selection.next();
                }
                KeyCode::Enter => match app.menu_selection {
                    MenuOption::NewGame => app.start_game(),
                    MenuOption::CipherGuide => app.state = GameState::CipherGuide,
                    MenuOption::Quit => break,
                },
                KeyCode::Char('q') => break,
                _ => {}
            },
            GameState::CipherGuide => app.state = GameState::TitleScreen,
            GameState::Playing => app.handle_playing_key(key),
        }

        if app.should_quit {
            app.end_session();
            break;
        }
    }
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        info!(path = %log_path.display(), "logging initialized");
        for warning in init_warnings {
            warn!("{warning}");
        }
        return;
    }

    // No log file: stay silent rather than write over the TUI.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warnings.push(format!("Failed to create log dir {}: {e}", parent.display()));
                continue;
            }
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(data_dir) = dirs::data_local_dir() {
        candidates.push(data_dir.join("cipher-quest").join("logs").join("cipher-quest.log"));
    }
    candidates.push(PathBuf::from(".cipher-quest").join("logs").join("cipher-quest.log"));
    candidates
}

fn draw_ui(f: &mut Frame, app: &App) {
    match app.state {
        GameState::TitleScreen => draw_title_screen(f, app),
        GameState::CipherGuide => draw_cipher_guide(f),
        GameState::Playing => draw_playing(f, app),
    }
}

fn draw_playing(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(6),
        ])
        .split(f.area());

    // Status bar
    let catalog = app.catalog();
    let solved = app.session.solved_level_ids().len();
    let status = Line::from(vec![
        Span::styled(
            " CIPHER QUEST ",
            Style::default().fg(Color::Black).bg(Color::Magenta),
        ),
        Span::raw("  "),
        Span::styled(
            format!(
                " Trial {}/{} ",
                app.session.current_level_id(),
                catalog.len()
            ),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" Solved: {}/{} ", solved, catalog.len()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" Hints used: {} ", app.hints_used_total),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" Wrong answers: {} ", app.wrong_answers_total),
            Style::default().fg(Color::Red),
        ),
    ]);
    let status_block = Paragraph::new(status).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(status_block, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_trials(f, app, main_chunks[0]);
    draw_chat(f, app, main_chunks[1]);

    let mut answer = app.answer.clone();
    if app.focus != Focus::Answer {
        answer.set_cursor_style(Style::default());
    }
    f.render_widget(&answer, chunks[2]);

    draw_message(f, app, chunks[3]);
}

fn draw_trials(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    for level in app.catalog().iter() {
        match app.engine.level_status(&app.session, level.id) {
            LevelStatus::Solved => {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("[SOLVED] {}", level.display_title()),
                        Style::default().fg(Color::Green),
                    ),
                ]));
                lines.push(Line::styled(
                    format!("  {}", level.prompt),
                    Style::default().fg(Color::DarkGray),
                ));
                if let Some(reward) = app.session.reward_for(level.id) {
                    lines.push(Line::from(vec![
                        Span::styled("  Reward unlocked: ", Style::default().fg(Color::Green)),
                        Span::raw(reward.to_string()),
                    ]));
                }
            }
            LevelStatus::Active => {
                lines.push(Line::styled(
                    format!("[ACTIVE] {}", level.display_title()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                if let Some(riddle) = &level.riddle {
                    lines.push(Line::styled(
                        format!("  {riddle}"),
                        Style::default().fg(Color::White),
                    ));
                }
                lines.push(Line::styled(
                    format!("  {}", level.prompt),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ));
                lines.push(Line::styled(
                    format!(
                        "  Hints remaining: {}",
                        app.engine.hints_remaining(&app.session)
                    ),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            LevelStatus::Locked => {
                lines.push(Line::styled(
                    format!("[LOCKED] {}", level.display_title()),
                    Style::default().fg(Color::DarkGray),
                ));
                lines.push(Line::styled(
                    "  Complete previous trials to unlock",
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
        lines.push(Line::raw(""));
    }

    if let Some(key) = &app.final_key {
        lines.push(Line::styled(
            "Private key:",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(key.clone()));
    }

    let trials = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" The Trials "))
        .wrap(Wrap { trim: false });
    f.render_widget(trials, area);
}

fn draw_chat(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let mut lines = Vec::new();
    for message in &app.chat {
        let (speaker, style) = match message.role {
            Role::Assistant => (
                format!("{}: ", app.guide_name),
                Style::default().fg(Color::Blue),
            ),
            Role::User => ("You: ".to_string(), Style::default().fg(Color::White)),
        };
        let mut content = message.content.lines();
        lines.push(Line::from(vec![
            Span::styled(speaker, style.add_modifier(Modifier::BOLD)),
            Span::styled(content.next().unwrap_or_default().to_string(), style),
        ]));
        for rest in content {
            lines.push(Line::styled(rest.to_string(), style));
        }
    }
    if app.relay.is_busy() {
        lines.push(Line::styled(
            format!("{} is thinking...", app.guide_name),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some(notice) = &app.chat_notice {
        lines.push(Line::styled(notice.clone(), Style::default().fg(Color::Red)));
    }

    // Keep the newest lines in view.
    let visible = chunks[0].height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;
    let border_style = if app.focus == Focus::Chat {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let history = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} ", app.guide_name)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(history, chunks[0]);

    let mut input = app.chat_input.clone();
    if app.focus != Focus::Chat {
        input.set_cursor_style(Style::default());
    }
    f.render_widget(&input, chunks[1]);
}

fn draw_message(f: &mut Frame, app: &App, area: Rect) {
    let (content, style) = if app.command_mode {
        (
            format!(":{}", app.command_buffer),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        )
    } else if let Some((text, style)) = &app.notice {
        let text = match app.session.last_message() {
            Some(last) => format!("{}\n\n{}", last.text, text),
            None => text.clone(),
        };
        (text, *style)
    } else if let Some(last) = app.session.last_message() {
        let style = match last.kind {
            StatusKind::Success => Style::default().fg(Color::Black).bg(Color::Green),
            StatusKind::Complete => Style::default().fg(Color::Black).bg(Color::Yellow),
            StatusKind::Incorrect => Style::default().fg(Color::Red),
            StatusKind::Hint => Style::default().fg(Color::Cyan),
            StatusKind::HintsExhausted => Style::default().fg(Color::DarkGray),
        };
        (last.text.clone(), style)
    } else {
        (
            "Decode the symbols and enter your answer...".to_string(),
            Style::default().fg(Color::Yellow),
        )
    };

    let title = if app.command_mode {
        " Command "
    } else {
        " The Oracle Speaks "
    };
    let message = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .style(style);
    f.render_widget(message, area);
}

fn draw_cipher_guide(f: &mut Frame) {
    let area = f.area();
    let mut lines = vec![
        Line::styled(
            "Each symbol hides one letter, digit or mark.",
            Style::default().fg(Color::White),
        ),
        Line::raw(""),
    ];

    for row in cipher::SYMBOLS.chunks(6) {
        let spans: Vec<Span> = row
            .iter()
            .map(|(plain, symbol)| {
                let plain = if *plain == ' ' { '_' } else { *plain };
                Span::styled(
                    format!("  {plain} {symbol}  "),
                    Style::default().fg(Color::Cyan),
                )
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Answers ignore case and spaces. Press any key to return.",
        Style::default().fg(Color::DarkGray),
    ));

    let guide = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Cipher Guide "))
        .alignment(Alignment::Center);
    f.render_widget(guide, area);
}

fn draw_title_screen(f: &mut Frame, app: &App) {
    let area = f.area();

    let title_art = r#"
    ╔═══════════════════════════════════════════════════════════╗
    ║                                                           ║
    ║          ██████╗██╗██████╗ ██╗  ██╗███████╗██████╗        ║
    ║         ██╔════╝██║██╔══██╗██║  ██║██╔════╝██╔══██╗       ║
    ║         ██║     ██║██████╔╝███████║█████╗  ██████╔╝       ║
    ║         ██║     ██║██╔═══╝ ██╔══██║██╔══╝  ██╔══██╗       ║
    ║         ╚██████╗██║██║     ██║  ██║███████╗██║  ██║       ║
    ║          ╚═════╝╚═╝╚═╝     ╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝       ║
    ║                                                           ║
    ║                       Q  U  E  S  T                       ║
    ║                                                           ║
    ║                 "A Mystical Holiday Quest"                ║
    ║                                                           ║
    ╚═══════════════════════════════════════════════════════════╝
"#;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(17),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .split(area);

    let title = Paragraph::new(title_art)
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let tagline = Paragraph::new(cipher::encode("Decode. Discover. Delight!"))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(tagline, chunks[1]);

    let options = [MenuOption::NewGame, MenuOption::CipherGuide, MenuOption::Quit];
    for (option, chunk) in options.into_iter().zip(&chunks[2..5]) {
        let style = if app.menu_selection == option {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let item = Paragraph::new(option.label())
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(item, *chunk);
    }

    let help = Paragraph::new("↑/↓ to select  •  ENTER to confirm  •  q to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[5]);
}
