//! Comment composer state machine

use super::endpoint::AddressingScheme;
use super::reply::{ReplyVerdict, ServerReply};
use super::request::{CommentForm, CommentRequest};
use super::transport::CommentTransport;
use crate::comment::{CommentFragment, CommentSink, Placement};
use crate::config::CommentsConfig;
use crate::error::{RecipePageError, Result};
use crate::events::ElementRole;
use crate::types::{AuthorHandle, CommentId};
use tracing::{debug, info, warn};

/// Message shown when the request itself fails
pub const TRANSPORT_FAILURE: &str = "Failed to post comment. Please try again.";

/// Composer behaviour taken from configuration
#[derive(Debug, Clone)]
pub struct ComposerSettings {
    /// Reply addressing scheme
    pub scheme: AddressingScheme,
    /// Field carrying the comment text
    pub content_field: String,
    /// Field carrying the parent id (parent-field scheme)
    pub parent_field: String,
    /// Send `X-Requested-With`
    pub requested_with: bool,
    /// Default prompt
    pub placeholder: String,
    /// Reply prompt with an `{author}` slot
    pub reply_placeholder: String,
}

impl ComposerSettings {
    /// Prompt shown while replying to `author`
    pub fn reply_prompt(&self, author: &AuthorHandle) -> String {
        self.reply_placeholder.replace("{author}", author.as_str())
    }
}

impl From<&CommentsConfig> for ComposerSettings {
    fn from(config: &CommentsConfig) -> Self {
        Self {
            scheme: config.addressing,
            content_field: config.content_field.clone(),
            parent_field: config.parent_field.clone(),
            requested_with: config.requested_with_header,
            placeholder: config.placeholder.clone(),
            reply_placeholder: config.reply_placeholder.clone(),
        }
    }
}

impl Default for ComposerSettings {
    fn default() -> Self {
        Self::from(&CommentsConfig::default())
    }
}

/// The comment a new post will be nested under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTarget {
    /// Comment being replied to
    pub id: CommentId,
    /// Its author, for the prompt
    pub author: AuthorHandle,
}

/// First half of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Guest visitor; the sign-in prompt is now visible
    AuthRequired,
    /// Send this request, then call `complete_submit`
    Send(CommentRequest),
}

/// Result of a finished submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Guest visitor; nothing was sent
    AuthPromptShown,
    /// Comment inserted into the tree
    Posted {
        /// Id of the inserted comment
        id: CommentId,
        /// Where it went
        placement: Placement,
    },
    /// Server answered with a failure; composer kept as it was
    Rejected {
        /// Message for the user
        message: String,
    },
    /// Request did not complete; composer kept as it was
    TransportFailed {
        /// Message for the user
        message: String,
    },
}

impl SubmitOutcome {
    /// Message to show the user, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Rejected { message } | SubmitOutcome::TransportFailed { message } => {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

/// Comment composer
///
/// Owns the reply target, the text field, the prompt and the sign-in
/// prompt visibility. Guest mode is fixed when the composer is created.
#[derive(Debug, Clone)]
pub struct CommentComposer {
    settings: ComposerSettings,
    form: CommentForm,
    text: String,
    placeholder: String,
    reply_target: Option<ReplyTarget>,
    focused: bool,
    in_flight: bool,
    auth_prompt_visible: bool,
}

impl CommentComposer {
    /// Create a composer for `form`
    pub fn new(form: CommentForm, settings: ComposerSettings) -> Self {
        let placeholder = settings.placeholder.clone();
        Self {
            settings,
            form,
            text: String::new(),
            placeholder,
            reply_target: None,
            focused: false,
            in_flight: false,
            auth_prompt_visible: false,
        }
    }

    /// Start replying to a comment
    pub fn begin_reply(&mut self, id: CommentId, author: AuthorHandle) {
        self.placeholder = self.settings.reply_prompt(&author);
        debug!("Replying to comment {} by {}", id, author);
        self.reply_target = Some(ReplyTarget { id, author });
        self.focused = true;
    }

    /// Drop the reply target and go back to a top-level post
    pub fn cancel_reply(&mut self) {
        if self.reply_target.take().is_some() {
            self.placeholder = self.settings.placeholder.clone();
        }
    }

    /// Replace the text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Mutable access to the text, for editors
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Give or take focus
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Build the request for the current state
    ///
    /// Guests get the sign-in prompt instead. While an earlier request is
    /// still waiting this fails with `SubmissionInFlight`.
    pub fn begin_submit(&mut self) -> Result<SubmitStart> {
        if self.form.guest {
            info!("Guest tried to comment, showing sign-in prompt");
            self.auth_prompt_visible = true;
            return Ok(SubmitStart::AuthRequired);
        }
        if self.in_flight {
            return Err(RecipePageError::SubmissionInFlight);
        }

        let target = self.reply_target.as_ref().map(|t| &t.id);
        let url = self.settings.scheme.resolve_path(&self.form.url, target)?;
        let placement = Placement::for_target(target);

        let mut fields: Vec<(String, String)> = self
            .form
            .fields
            .iter()
            .filter(|(name, _)| {
                **name != self.settings.content_field
                    && !(self.settings.scheme.sends_parent_field()
                        && **name == self.settings.parent_field)
            })
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        fields.push((self.settings.content_field.clone(), self.text.clone()));
        if self.settings.scheme.sends_parent_field() {
            let parent = target.map(|id| id.to_string()).unwrap_or_default();
            fields.push((self.settings.parent_field.clone(), parent));
        }

        self.in_flight = true;
        info!("Posting comment to {} ({:?})", url, placement);
        Ok(SubmitStart::Send(CommentRequest {
            url,
            fields,
            requested_with: self.settings.requested_with,
            placement,
        }))
    }

    /// Apply the server's answer to a request from `begin_submit`
    ///
    /// On success the comment is inserted at `placement` and the composer is
    /// reset. When the reply parent has disappeared from `sink` the composer
    /// is still reset, since the server already stored the comment, and
    /// `CommentNotFound` is returned.
    pub fn complete_submit<S: CommentSink + ?Sized>(
        &mut self,
        placement: Placement,
        reply: Result<ServerReply>,
        sink: &mut S,
    ) -> Result<SubmitOutcome> {
        self.in_flight = false;

        let reply = match reply {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Comment request failed: {}", e);
                return Ok(SubmitOutcome::TransportFailed {
                    message: TRANSPORT_FAILURE.to_string(),
                });
            }
        };

        match reply.verdict(self.settings.scheme) {
            ReplyVerdict::Accepted(markup) => {
                let fragment = CommentFragment::parse(markup);
                let inserted = placement.apply(sink, fragment);
                self.reset();
                let id = inserted?;
                Ok(SubmitOutcome::Posted { id, placement })
            }
            ReplyVerdict::Rejected(message) => {
                warn!("Server rejected comment: {}", message);
                Ok(SubmitOutcome::Rejected { message })
            }
        }
    }

    /// Submit through `transport` and merge the reply into `sink`
    pub async fn submit<S: CommentSink + ?Sized>(
        &mut self,
        transport: &dyn CommentTransport,
        sink: &mut S,
    ) -> Result<SubmitOutcome> {
        let request = match self.begin_submit()? {
            SubmitStart::AuthRequired => return Ok(SubmitOutcome::AuthPromptShown),
            SubmitStart::Send(request) => request,
        };
        let reply = transport.post_comment(&request).await;
        self.complete_submit(request.placement, reply, sink)
    }

    /// Hide the sign-in prompt when `target` is its close control or backdrop
    pub fn close_auth_prompt(&mut self, target: ElementRole) -> bool {
        if !self.auth_prompt_visible {
            return false;
        }
        match target {
            ElementRole::CloseModal | ElementRole::ModalBackdrop => {
                self.auth_prompt_visible = false;
                true
            }
            _ => false,
        }
    }

    fn reset(&mut self) {
        self.text.clear();
        self.reply_target = None;
        self.placeholder = self.settings.placeholder.clone();
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current prompt
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Current reply target
    pub fn reply_target(&self) -> Option<&ReplyTarget> {
        self.reply_target.as_ref()
    }

    /// Whether the composer has focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether a request is waiting for the server
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether the visitor is a guest
    pub fn is_guest(&self) -> bool {
        self.form.guest
    }

    /// Whether the sign-in prompt is showing
    pub fn auth_prompt_visible(&self) -> bool {
        self.auth_prompt_visible
    }

    /// The form this composer posts
    pub fn form(&self) -> &CommentForm {
        &self.form
    }

    /// Settings in use
    pub fn settings(&self) -> &ComposerSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::{CommentSeed, CommentTree};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    const BASE: &str = "/api/recipes/recipe/pasta/comment/";

    /// Transport that records requests and answers from a script
    struct ScriptedTransport {
        replies: Mutex<Vec<Result<ServerReply>>>,
        requests: Mutex<Vec<CommentRequest>>,
    }

    impl ScriptedTransport {
        fn new(reply: Result<ServerReply>) -> Self {
            Self {
                replies: Mutex::new(vec![reply]),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<CommentRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommentTransport for ScriptedTransport {
        async fn post_comment(&self, request: &CommentRequest) -> Result<ServerReply> {
            self.requests.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(RecipePageError::Transport("no reply scripted".into())))
        }
    }

    fn tree() -> CommentTree {
        CommentTree::from_seeds(vec![
            CommentSeed::new("41", "bob", "<p>Older</p>"),
            CommentSeed::new("42", "alice", "<p>Looks great</p>"),
        ])
        .unwrap()
    }

    fn composer() -> CommentComposer {
        CommentComposer::new(
            CommentForm::new(BASE).field("csrfmiddlewaretoken", "tok"),
            ComposerSettings::default(),
        )
    }

    #[test]
    fn test_initial_state() {
        let composer = composer();
        assert_eq!(composer.placeholder(), "Write a comment...");
        assert!(composer.reply_target().is_none());
        assert!(!composer.is_in_flight());
        assert!(!composer.auth_prompt_visible());
    }

    #[test]
    fn test_begin_reply_updates_prompt_and_focus() {
        let mut composer = composer();
        composer.begin_reply(CommentId::from("42"), AuthorHandle::from("alice"));

        assert_eq!(composer.placeholder(), "Replying to @alice...");
        assert_eq!(composer.reply_target().unwrap().id, CommentId::from("42"));
        assert!(composer.is_focused());

        composer.cancel_reply();
        assert_eq!(composer.placeholder(), "Write a comment...");
        assert!(composer.reply_target().is_none());
    }

    #[tokio::test]
    async fn test_top_level_post() {
        let mut composer = composer();
        let mut tree = tree();
        composer.set_text("Nice dish!");
        let transport =
            ScriptedTransport::new(Ok(ServerReply::accepted("<div id=comment-99>Nice dish!</div>")));

        let outcome = composer.submit(&transport, &mut tree).await.unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Posted {
                id: CommentId::from("99"),
                placement: Placement::TopLevel,
            }
        );
        assert_eq!(tree.roots()[0], CommentId::from("99"));
        assert_eq!(composer.text(), "");
        assert!(!composer.is_in_flight());

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, BASE);
        assert_eq!(requests[0].field("content"), Some("Nice dish!"));
        assert_eq!(requests[0].field("csrfmiddlewaretoken"), Some("tok"));
        assert!(requests[0].requested_with);
    }

    #[tokio::test]
    async fn test_reply_flow() {
        let mut composer = composer();
        let mut tree = tree();
        composer.begin_reply(CommentId::from("42"), AuthorHandle::from("alice"));
        assert_eq!(composer.placeholder(), "Replying to @alice...");
        composer.set_text("Thanks!");

        let transport =
            ScriptedTransport::new(Ok(ServerReply::accepted("<div id=comment-100>Thanks!</div>")));
        let outcome = composer.submit(&transport, &mut tree).await.unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Posted {
                id: CommentId::from("100"),
                placement: Placement::ReplyTo(CommentId::from("42")),
            }
        );
        assert_eq!(transport.requests()[0].url, "/api/recipes/recipe/pasta/comment/42/reply/");
        assert_eq!(tree.children(&CommentId::from("42")), &[CommentId::from("100")]);
        assert_eq!(tree.roots().len(), 2);
        assert!(composer.reply_target().is_none());
        assert_eq!(composer.placeholder(), "Write a comment...");
    }

    #[tokio::test]
    async fn test_guest_never_sends() {
        let mut composer = CommentComposer::new(
            CommentForm::new(BASE).guest(),
            ComposerSettings::default(),
        );
        composer.set_text("Hello");
        let mut tree = tree();
        let transport = ScriptedTransport::new(Ok(ServerReply::accepted("<p>x</p>")));

        let outcome = composer.submit(&transport, &mut tree).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::AuthPromptShown);
        assert!(transport.requests().is_empty());
        assert!(composer.auth_prompt_visible());
        assert_eq!(composer.text(), "Hello");
        assert_eq!(tree.len(), 2);
    }

    #[tokio::test]
    async fn test_server_rejection_keeps_state() {
        let mut composer = composer();
        let mut tree = tree();
        composer.begin_reply(CommentId::from("42"), AuthorHandle::from("alice"));
        composer.set_text("Thanks!");
        let transport = ScriptedTransport::new(Ok(ServerReply::rejected("Too short")));

        let outcome = composer.submit(&transport, &mut tree).await.unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: "Too short".to_string()
            }
        );
        assert_eq!(outcome.message(), Some("Too short"));
        assert_eq!(tree.len(), 2);
        assert!(tree.children(&CommentId::from("42")).is_empty());
        assert_eq!(composer.reply_target().unwrap().id, CommentId::from("42"));
        assert_eq!(composer.text(), "Thanks!");
        assert!(!composer.is_in_flight());
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_state() {
        let mut composer = composer();
        let mut tree = tree();
        composer.set_text("Hello");
        let transport =
            ScriptedTransport::new(Err(RecipePageError::Transport("connection reset".into())));

        let outcome = composer.submit(&transport, &mut tree).await.unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::TransportFailed {
                message: TRANSPORT_FAILURE.to_string()
            }
        );
        assert_eq!(composer.text(), "Hello");
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_in_flight_guard() {
        let mut composer = composer();
        composer.set_text("Hello");

        let first = composer.begin_submit().unwrap();
        assert!(matches!(first, SubmitStart::Send(_)));
        assert!(composer.is_in_flight());
        assert!(matches!(
            composer.begin_submit(),
            Err(RecipePageError::SubmissionInFlight)
        ));

        let mut tree = tree();
        composer
            .complete_submit(Placement::TopLevel, Ok(ServerReply::rejected("nope")), &mut tree)
            .unwrap();
        assert!(!composer.is_in_flight());
        assert!(composer.begin_submit().is_ok());
    }

    #[test]
    fn test_missing_reply_parent_is_reported() {
        let mut composer = composer();
        let mut tree = tree();
        composer.begin_reply(CommentId::from("42"), AuthorHandle::from("alice"));
        composer.set_text("Thanks!");

        let SubmitStart::Send(request) = composer.begin_submit().unwrap() else {
            panic!("expected a request");
        };
        tree.remove(&CommentId::from("42")).unwrap();

        let result = composer.complete_submit(
            request.placement,
            Ok(ServerReply::accepted("<div id=comment-100>Thanks!</div>")),
            &mut tree,
        );

        assert!(matches!(result, Err(RecipePageError::CommentNotFound(id)) if id == "42"));
        assert!(!tree.contains(&CommentId::from("100")));
        assert!(composer.reply_target().is_none());
        assert_eq!(composer.text(), "");
    }

    #[test]
    fn test_parent_field_scheme() {
        let settings = ComposerSettings {
            scheme: AddressingScheme::ParentField,
            ..ComposerSettings::default()
        };
        let form = CommentForm::new("/comments/add/")
            .field("csrfmiddlewaretoken", "tok")
            .field("parent", "stale");
        let mut composer = CommentComposer::new(form, settings);
        composer.set_text("Top");

        let SubmitStart::Send(request) = composer.begin_submit().unwrap() else {
            panic!("expected a request");
        };
        assert_eq!(request.url, "/comments/add/");
        assert_eq!(request.field("parent"), Some(""));
        assert_eq!(
            request.fields.iter().filter(|(k, _)| k == "parent").count(),
            1
        );

        let mut tree = tree();
        composer
            .complete_submit(
                request.placement,
                Ok(ServerReply {
                    success: true,
                    comment_html: Some("<div data-comment-id=\"7\">Top</div>".to_string()),
                    ..ServerReply::default()
                }),
                &mut tree,
            )
            .unwrap();
        assert_eq!(tree.roots()[0], CommentId::from("7"));

        composer.begin_reply(CommentId::from("41"), AuthorHandle::from("bob"));
        let SubmitStart::Send(request) = composer.begin_submit().unwrap() else {
            panic!("expected a request");
        };
        assert_eq!(request.url, "/comments/add/");
        assert_eq!(request.field("parent"), Some("41"));
        assert_eq!(request.placement, Placement::ReplyTo(CommentId::from("41")));
    }

    #[tokio::test]
    async fn test_parent_field_reply_lands_under_parent() {
        let settings = ComposerSettings {
            scheme: AddressingScheme::ParentField,
            ..ComposerSettings::default()
        };
        let mut composer = CommentComposer::new(CommentForm::new("/comments/add/"), settings);
        let mut tree = tree();
        composer.begin_reply(CommentId::from("41"), AuthorHandle::from("bob"));
        composer.set_text("Agreed");

        let transport = ScriptedTransport::new(Ok(ServerReply {
            success: true,
            comment_html: Some(r#"<div class="comment" data-comment-id="8">Agreed</div>"#.to_string()),
            ..ServerReply::default()
        }));
        let outcome = composer.submit(&transport, &mut tree).await.unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Posted {
                id: CommentId::from("8"),
                placement: Placement::ReplyTo(CommentId::from("41")),
            }
        );
        assert_eq!(transport.requests()[0].field("parent"), Some("41"));
        assert_eq!(tree.children(&CommentId::from("41")), &[CommentId::from("8")]);
        assert_eq!(tree.parent(&CommentId::from("8")), Some(&CommentId::from("41")));
        assert_eq!(tree.roots(), &[CommentId::from("41"), CommentId::from("42")]);
    }

    #[tokio::test]
    async fn test_id_like_body_text_does_not_shadow_new_comment() {
        let mut composer = composer();
        let mut tree = tree();
        composer.set_text("see data-comment-id=42 lol");

        let transport = ScriptedTransport::new(Ok(ServerReply::accepted(
            r#"<div class="comment" id="comment-99"><p>see data-comment-id=42 lol</p></div>"#,
        )));
        let outcome = composer.submit(&transport, &mut tree).await.unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Posted {
                id: CommentId::from("99"),
                placement: Placement::TopLevel,
            }
        );
        assert_eq!(tree.roots()[0], CommentId::from("99"));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_close_auth_prompt() {
        let mut composer =
            CommentComposer::new(CommentForm::new(BASE).guest(), ComposerSettings::default());
        assert!(!composer.close_auth_prompt(ElementRole::CloseModal));

        composer.begin_submit().unwrap();
        assert!(composer.auth_prompt_visible());

        assert!(!composer.close_auth_prompt(ElementRole::ModalSurface));
        assert!(composer.auth_prompt_visible());

        assert!(composer.close_auth_prompt(ElementRole::ModalBackdrop));
        assert!(!composer.auth_prompt_visible());
    }
}
