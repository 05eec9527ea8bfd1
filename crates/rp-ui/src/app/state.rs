//! Application state and main app structure

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use rp_core::comment::Placement;
use rp_core::composer::{CommentRequest, ServerReply, SubmitOutcome};
use rp_core::config::UiConfig;
use rp_core::events::{ElementRole, EventTarget, PageEvent};
use rp_core::page::{PageController, PageEffect, PagePorts};
use rp_core::rating::RatingReceipt;
use rp_core::types::{CommentId, RatingValue};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::components::{comments, composer, header, overlay, rating, status};
use crate::events::Event;
use crate::input::{map_key, Overlay, UiAction};
use crate::layout::PageLayout;
use crate::theme::Theme;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Browsing the page
    #[default]
    Normal,
    /// Writing in the composer
    Insert,
    /// Help overlay
    Help,
}

/// Application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Status message
    pub message: Option<String>,
    /// Failure popup
    pub alert: Option<String>,
    /// Should quit
    pub should_quit: bool,
    /// Index of the hovered star
    pub star_cursor: Option<usize>,
    /// Row of the highlighted comment
    pub comment_cursor: usize,
    /// Editor cursor, in characters
    pub editor_cursor: usize,
}

impl AppState {
    /// Create a new app state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

/// The page and everything needed to drive it, without a terminal
pub struct PageView {
    /// UI state
    pub state: AppState,
    page: PageController,
    ports: PagePorts,
    runtime: Handle,
    theme: Theme,
    tx: UnboundedSender<Event>,
    rx: UnboundedReceiver<Event>,
}

impl PageView {
    /// Wrap `page`; requests run on `runtime`
    pub fn new(page: PageController, ports: PagePorts, runtime: Handle, theme: Theme) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            state: AppState::new(),
            page,
            ports,
            runtime,
            theme,
            tx,
            rx,
        }
    }

    /// The page
    pub fn page(&self) -> &PageController {
        &self.page
    }

    /// Overlay currently shown
    pub fn overlay(&self) -> Overlay {
        if self.state.alert.is_some() {
            Overlay::Alert
        } else if self
            .page
            .composer()
            .is_some_and(|c| c.auth_prompt_visible())
        {
            Overlay::SignIn
        } else {
            Overlay::None
        }
    }

    /// Apply one application event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Input(key) => self.handle_key(key),
            Event::Resize(..) => {}
            Event::CommentFinished { placement, reply } => self.finish_comment(placement, reply),
            Event::RatingFinished(result) => self.finish_rating(result),
        }
    }

    /// Apply finished requests without blocking
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Wait for the next finished request and apply it
    pub async fn settle(&mut self) -> bool {
        match self.rx.recv().await {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = map_key(self.state.mode, self.overlay(), key) {
            self.apply(action);
        }
    }

    fn apply(&mut self, action: UiAction) {
        debug!("UI action {:?}", action);
        match action {
            UiAction::Quit => self.state.should_quit = true,
            UiAction::ShowHelp => self.state.mode = AppMode::Help,
            UiAction::CloseOverlay => {
                if self.state.alert.take().is_none() && self.state.mode == AppMode::Help {
                    self.state.mode = AppMode::Normal;
                }
            }
            UiAction::CloseSignIn => self.fire(PageEvent::click(EventTarget::role(ElementRole::CloseModal))),
            UiAction::SignInSurface => {
                self.fire(PageEvent::click(EventTarget::role(ElementRole::ModalSurface)))
            }
            UiAction::StarLeft => self.move_star(-1),
            UiAction::StarRight => self.move_star(1),
            UiAction::SelectStar => match self.hovered_star() {
                Some(value) => self.fire(PageEvent::click(EventTarget::star(value.get()))),
                None => self.state.set_message("Move to a star with h/l first"),
            },
            UiAction::SubmitRating => {
                self.fire(PageEvent::click(EventTarget::role(ElementRole::RatingSubmit)))
            }
            UiAction::CommentDown => {
                let last = self.page.tree().len().saturating_sub(1);
                self.state.comment_cursor = (self.state.comment_cursor + 1).min(last);
            }
            UiAction::CommentUp => {
                self.state.comment_cursor = self.state.comment_cursor.saturating_sub(1);
            }
            UiAction::Reply => self.reply_to_highlighted(),
            UiAction::CancelReply => self.cancel_reply(),
            UiAction::StartEditing => self.start_editing(),
            UiAction::StopEditing => {
                self.state.mode = AppMode::Normal;
                if let Some(composer) = self.page.composer_mut() {
                    composer.set_focused(false);
                }
            }
            UiAction::SubmitComment => self.submit_comment(),
            UiAction::InsertChar(c) => self.insert_char(c),
            UiAction::Backspace => self.backspace(),
            UiAction::CursorLeft => {
                self.state.editor_cursor = self.state.editor_cursor.saturating_sub(1);
            }
            UiAction::CursorRight => {
                let len = self.composer_text().chars().count();
                self.state.editor_cursor = (self.state.editor_cursor + 1).min(len);
            }
        }
    }

    /// Route a page event and start any requests it produces
    fn fire(&mut self, event: PageEvent) {
        match self.page.handle(&event) {
            Ok(effects) => {
                for effect in effects {
                    match effect {
                        PageEffect::Updated => {}
                        PageEffect::AuthPromptShown => self.state.mode = AppMode::Normal,
                        PageEffect::SendComment(request) => self.spawn_comment(request),
                        PageEffect::SendRating(value) => self.spawn_rating(value),
                    }
                }
            }
            Err(e) => self.state.set_message(e.to_string()),
        }
    }

    fn spawn_comment(&mut self, request: CommentRequest) {
        let transport = self.ports.comments.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let reply = transport.post_comment(&request).await;
            let _ = tx.send(Event::CommentFinished {
                placement: request.placement,
                reply,
            });
        });
        self.state.set_message("Posting comment...");
    }

    fn spawn_rating(&mut self, value: RatingValue) {
        let submitter = self.ports.rating.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = submitter.submit_rating(value).await;
            let _ = tx.send(Event::RatingFinished(result));
        });
        self.state.set_message(format!("Submitting rating {}...", value.echo()));
    }

    fn finish_comment(&mut self, placement: Placement, reply: rp_core::Result<ServerReply>) {
        match self.page.complete_comment(placement, reply) {
            Ok(SubmitOutcome::Posted { id, .. }) => {
                self.state.editor_cursor = 0;
                if let Some(row) = self.row_of(&id) {
                    self.state.comment_cursor = row;
                }
                self.state.set_message("Comment posted");
            }
            Ok(outcome @ (SubmitOutcome::Rejected { .. } | SubmitOutcome::TransportFailed { .. })) => {
                self.state.alert = outcome.message().map(str::to_string);
                self.state.clear_message();
            }
            Ok(SubmitOutcome::AuthPromptShown) => {}
            Err(e) => {
                self.state.alert = Some(e.to_string());
                self.state.clear_message();
            }
        }
    }

    fn finish_rating(&mut self, result: rp_core::Result<RatingReceipt>) {
        match result {
            Ok(receipt) => {
                let message = receipt
                    .message
                    .unwrap_or_else(|| format!("Rating {} submitted", receipt.value.echo()));
                self.state.set_message(message);
            }
            Err(e) => self.state.set_message(format!("Rating not sent: {}", e)),
        }
    }

    fn hovered_star(&self) -> Option<RatingValue> {
        let selector = self.page.rating()?;
        let index = self.state.star_cursor?;
        selector.indicators().get(index).map(|i| i.value)
    }

    fn move_star(&mut self, step: isize) {
        let Some(selector) = self.page.rating() else {
            self.state.set_message("This page has no rating");
            return;
        };
        let indicators = selector.indicators();
        if indicators.is_empty() {
            return;
        }

        let last = indicators.len() - 1;
        let from = self
            .state
            .star_cursor
            .or_else(|| indicators.iter().position(|i| i.selected))
            .unwrap_or(if step > 0 { 0 } else { last });
        let to = from.saturating_add_signed(step).min(last);

        let leaving = self
            .state
            .star_cursor
            .and_then(|i| indicators.get(i))
            .map(|i| i.value);
        let entering = indicators[to].value;

        if let Some(old) = leaving {
            self.fire(PageEvent::pointer_leave(EventTarget::star(old.get())));
        }
        self.state.star_cursor = Some(to);
        self.fire(PageEvent::pointer_enter(EventTarget::star(entering.get())));
    }

    fn highlighted_comment(&self) -> Option<CommentId> {
        self.page
            .tree()
            .walk()
            .get(self.state.comment_cursor)
            .map(|(_, node)| node.id.clone())
    }

    fn row_of(&self, id: &CommentId) -> Option<usize> {
        self.page
            .tree()
            .walk()
            .iter()
            .position(|(_, node)| &node.id == id)
    }

    fn reply_to_highlighted(&mut self) {
        let Some(id) = self.highlighted_comment() else {
            self.state.set_message("No comment to reply to");
            return;
        };
        self.fire(PageEvent::click(EventTarget::reply_toggle(id, None)));
        if self.page.composer().and_then(|c| c.reply_target()).is_some() {
            self.state.mode = AppMode::Insert;
            self.state.editor_cursor = self.composer_text().chars().count();
        }
    }

    fn cancel_reply(&mut self) {
        let Some(composer) = self.page.composer_mut() else {
            return;
        };
        if composer.reply_target().is_some() {
            composer.cancel_reply();
            self.state.set_message("Writing a new comment");
        }
    }

    fn start_editing(&mut self) {
        match self.page.composer_mut() {
            Some(composer) => {
                composer.set_focused(true);
                self.state.editor_cursor = composer.text().chars().count();
                self.state.mode = AppMode::Insert;
            }
            None => self.state.set_message("This page has no comment form"),
        }
    }

    fn submit_comment(&mut self) {
        if self.composer_text().trim().is_empty() {
            self.state.set_message("Write something first");
            return;
        }
        self.state.mode = AppMode::Normal;
        self.fire(PageEvent::submit_comment());
    }

    fn composer_text(&self) -> &str {
        self.page.composer().map(|c| c.text()).unwrap_or_default()
    }

    fn insert_char(&mut self, c: char) {
        let cursor = self.state.editor_cursor;
        if let Some(composer) = self.page.composer_mut() {
            let text = composer.text_mut();
            let byte_pos = char_to_byte_pos(text, cursor);
            text.insert(byte_pos, c);
            self.state.editor_cursor += 1;
        }
    }

    fn backspace(&mut self) {
        if self.state.editor_cursor == 0 {
            return;
        }
        self.state.editor_cursor -= 1;
        let cursor = self.state.editor_cursor;
        if let Some(composer) = self.page.composer_mut() {
            let text = composer.text_mut();
            let byte_pos = char_to_byte_pos(text, cursor);
            if let Some(ch) = text[byte_pos..].chars().next() {
                text.drain(byte_pos..byte_pos + ch.len_utf8());
            }
        }
    }

    /// Draw the page into `frame`
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = PageLayout::split(
            area,
            self.page.rating().is_some(),
            self.page.composer().is_some(),
        );

        header::render_header(frame, layout.title, self.page.recipe(), &self.theme);
        if let Some(selector) = self.page.rating() {
            rating::render_rating(frame, layout.rating, selector, &self.theme);
        }
        comments::render_comments(
            frame,
            layout.comments,
            self.page.tree(),
            self.state.comment_cursor,
            &self.theme,
        );
        if let Some(c) = self.page.composer() {
            composer::render_composer(
                frame,
                layout.composer,
                c,
                self.state.mode == AppMode::Insert,
                self.state.editor_cursor,
                &self.theme,
            );
        }
        status::render_status(frame, layout.status, &self.state, &self.page, &self.theme);

        match self.overlay() {
            Overlay::Alert => {
                let message = self.state.alert.as_deref().unwrap_or_default();
                overlay::render_alert(frame, area, message, &self.theme);
            }
            Overlay::SignIn => overlay::render_sign_in(frame, area, &self.theme),
            Overlay::None if self.state.mode == AppMode::Help => overlay::render_help(frame, area),
            Overlay::None => {}
        }
    }
}

/// Convert character position to byte position
fn char_to_byte_pos(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Main application
pub struct App {
    /// The page being shown
    pub view: PageView,
    /// Terminal
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Take over the terminal and show `page`
    pub fn new(page: PageController, ports: PagePorts, runtime: Handle, ui: &UiConfig) -> Result<Self> {
        // Install panic hook to restore terminal on panic
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let mut view = PageView::new(page, ports, runtime, Theme::named(&ui.theme));
        if ui.show_help_on_start {
            view.state.mode = AppMode::Help;
        }

        Ok(Self { view, terminal })
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.view.process_pending();

            let view = &self.view;
            self.terminal.draw(|frame| view.render(frame))?;

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.view.handle_event(Event::Input(key));
                    }
                    event::Event::Resize(w, h) => self.view.handle_event(Event::Resize(w, h)),
                    _ => {}
                }
            }

            if self.view.state.should_quit {
                break;
            }
        }

        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use rp_core::composer::{CommentTransport, TRANSPORT_FAILURE};
    use rp_core::config::Config;
    use rp_core::page::PageSnapshot;
    use rp_core::rating::PendingRatingSubmitter;
    use rp_core::RecipePageError;
    use std::sync::{Arc, Mutex};

    const PAGE: &str = r#"{
        "recipe": {"slug": "pasta", "title": "Weeknight Pasta"},
        "rating": {},
        "comment_form": {"url": "/api/recipes/recipe/pasta/comment/"},
        "comments": [
            {"id": "41", "author": "bob", "html": "<p>Older</p>"},
            {"id": "42", "author": "alice", "html": "<p>Lovely</p>"}
        ]
    }"#;

    struct CannedTransport {
        reply: Mutex<Option<rp_core::Result<ServerReply>>>,
        urls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CommentTransport for CannedTransport {
        async fn post_comment(&self, request: &CommentRequest) -> rp_core::Result<ServerReply> {
            self.urls.lock().unwrap().push(request.url.clone());
            self.reply
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(RecipePageError::Transport("no reply".into())))
        }
    }

    fn view_with(json: &str, reply: rp_core::Result<ServerReply>) -> (PageView, Arc<CannedTransport>) {
        let page =
            PageController::bootstrap(PageSnapshot::from_json_str(json).unwrap(), &Config::default())
                .unwrap();
        let transport = Arc::new(CannedTransport {
            reply: Mutex::new(Some(reply)),
            urls: Mutex::new(Vec::new()),
        });
        let ports = PagePorts {
            comments: transport.clone(),
            rating: Arc::new(PendingRatingSubmitter),
        };
        (
            PageView::new(page, ports, Handle::current(), Theme::default()),
            transport,
        )
    }

    fn press(view: &mut PageView, code: KeyCode) {
        view.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(view: &mut PageView, text: &str) {
        for c in text.chars() {
            press(view, KeyCode::Char(c));
        }
    }

    fn screen(view: &PageView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| view.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_app_mode_default() {
        assert_eq!(AppMode::default(), AppMode::Normal);
    }

    #[test]
    fn test_app_state_message() {
        let mut state = AppState::new();
        assert!(state.message.is_none());
        state.set_message("Test");
        assert_eq!(state.message, Some("Test".to_string()));
        state.clear_message();
        assert!(state.message.is_none());
    }

    #[test]
    fn test_char_to_byte_pos() {
        assert_eq!(char_to_byte_pos("héllo", 2), 3);
        assert_eq!(char_to_byte_pos("abc", 10), 3);
    }

    #[tokio::test]
    async fn test_star_keys_preview_then_select() {
        let (mut view, _) = view_with(PAGE, Ok(ServerReply::default()));

        press(&mut view, KeyCode::Char('l'));
        press(&mut view, KeyCode::Char('l'));
        let selector = view.page().rating().unwrap();
        assert_eq!(selector.hovered(), Some(RatingValue(2)));
        assert_eq!(selector.echo(), "0.0");

        press(&mut view, KeyCode::Enter);
        assert_eq!(view.page().rating().unwrap().echo(), "2.0");

        press(&mut view, KeyCode::Char('h'));
        press(&mut view, KeyCode::Char('h'));
        press(&mut view, KeyCode::Char('h'));
        let selector = view.page().rating().unwrap();
        assert_eq!(selector.hovered(), Some(RatingValue(-1)));
        assert_eq!(selector.echo(), "2.0");
    }

    #[tokio::test]
    async fn test_submit_rating_reports_unsent_value() {
        let (mut view, _) = view_with(PAGE, Ok(ServerReply::default()));
        press(&mut view, KeyCode::Char('s'));
        assert!(view.settle().await);
        assert!(view.state.message.as_deref().unwrap().starts_with("Rating not sent"));
    }

    #[tokio::test]
    async fn test_reply_via_keys() {
        let (mut view, transport) = view_with(
            PAGE,
            Ok(ServerReply::accepted("<div id=comment-100>Thanks!</div>")),
        );

        press(&mut view, KeyCode::Char('j'));
        press(&mut view, KeyCode::Char('r'));
        assert_eq!(view.state.mode, AppMode::Insert);
        assert_eq!(
            view.page().composer().unwrap().placeholder(),
            "Replying to @alice..."
        );

        type_text(&mut view, "Thanks!");
        press(&mut view, KeyCode::Enter);
        assert_eq!(view.state.mode, AppMode::Normal);
        assert!(view.settle().await);

        let id = CommentId::from("42");
        assert_eq!(view.page().tree().children(&id), &[CommentId::from("100")]);
        assert_eq!(
            transport.urls.lock().unwrap().as_slice(),
            &["/api/recipes/recipe/pasta/comment/42/reply/".to_string()]
        );
        assert_eq!(view.page().composer().unwrap().text(), "");
        assert_eq!(view.state.comment_cursor, 2);
        assert_eq!(view.state.message.as_deref(), Some("Comment posted"));
    }

    #[tokio::test]
    async fn test_escape_leaves_reply_mode() {
        let (mut view, transport) = view_with(
            PAGE,
            Ok(ServerReply::accepted("<div id=comment-100>Actually</div>")),
        );

        press(&mut view, KeyCode::Char('j'));
        press(&mut view, KeyCode::Char('r'));
        type_text(&mut view, "Actually");
        press(&mut view, KeyCode::Esc);
        assert_eq!(view.state.mode, AppMode::Normal);
        assert!(view.page().composer().unwrap().reply_target().is_some());

        press(&mut view, KeyCode::Esc);
        let composer = view.page().composer().unwrap();
        assert!(composer.reply_target().is_none());
        assert_eq!(composer.placeholder(), "Write a comment...");
        assert_eq!(composer.text(), "Actually");
        assert_eq!(view.state.message.as_deref(), Some("Writing a new comment"));

        press(&mut view, KeyCode::Char('i'));
        press(&mut view, KeyCode::Enter);
        assert!(view.settle().await);

        assert_eq!(view.page().tree().roots()[0], CommentId::from("100"));
        assert_eq!(
            transport.urls.lock().unwrap().as_slice(),
            &["/api/recipes/recipe/pasta/comment/".to_string()]
        );
    }

    #[tokio::test]
    async fn test_transport_failure_shows_alert_and_keeps_text() {
        let (mut view, _) = view_with(PAGE, Err(RecipePageError::Transport("reset".into())));

        press(&mut view, KeyCode::Char('i'));
        type_text(&mut view, "Hello");
        press(&mut view, KeyCode::Enter);
        assert!(view.settle().await);

        assert_eq!(view.state.alert.as_deref(), Some(TRANSPORT_FAILURE));
        assert_eq!(view.overlay(), Overlay::Alert);
        assert_eq!(view.page().composer().unwrap().text(), "Hello");
        assert!(screen(&view).contains("Failed to post comment"));

        press(&mut view, KeyCode::Char('x'));
        assert_eq!(view.overlay(), Overlay::None);
    }

    #[tokio::test]
    async fn test_guest_gets_sign_in_prompt() {
        let json = PAGE.replace(
            r#""url": "/api/recipes/recipe/pasta/comment/""#,
            r#""url": "/api/recipes/recipe/pasta/comment/", "guest": true"#,
        );
        let (mut view, transport) = view_with(&json, Ok(ServerReply::accepted("<p>x</p>")));

        press(&mut view, KeyCode::Char('c'));
        type_text(&mut view, "Hi");
        press(&mut view, KeyCode::Enter);

        assert_eq!(view.overlay(), Overlay::SignIn);
        assert!(screen(&view).contains("Sign in required"));
        assert!(transport.urls.lock().unwrap().is_empty());

        press(&mut view, KeyCode::Enter);
        assert_eq!(view.overlay(), Overlay::SignIn);
        press(&mut view, KeyCode::Esc);
        assert_eq!(view.overlay(), Overlay::None);
    }

    #[tokio::test]
    async fn test_empty_comment_is_not_sent() {
        let (mut view, transport) = view_with(PAGE, Ok(ServerReply::accepted("<p>x</p>")));
        press(&mut view, KeyCode::Char('i'));
        press(&mut view, KeyCode::Enter);
        assert_eq!(view.state.mode, AppMode::Insert);
        assert_eq!(view.state.message.as_deref(), Some("Write something first"));
        assert!(transport.urls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_editing_keys() {
        let (mut view, _) = view_with(PAGE, Ok(ServerReply::default()));
        press(&mut view, KeyCode::Char('i'));
        type_text(&mut view, "helo");
        press(&mut view, KeyCode::Left);
        type_text(&mut view, "l");
        assert_eq!(view.page().composer().unwrap().text(), "hello");
        press(&mut view, KeyCode::Backspace);
        assert_eq!(view.page().composer().unwrap().text(), "helo");
        press(&mut view, KeyCode::Esc);
        assert_eq!(view.state.mode, AppMode::Normal);
    }

    #[tokio::test]
    async fn test_render_page() {
        let (mut view, _) = view_with(PAGE, Ok(ServerReply::default()));
        let text = screen(&view);
        assert!(text.contains("Weeknight Pasta"));
        assert!(text.contains("alice: Lovely"));
        assert!(text.contains("Write a comment..."));
        assert!(text.contains("0.0"));

        press(&mut view, KeyCode::Char('?'));
        assert!(screen(&view).contains("Submit rating"));
    }
}
