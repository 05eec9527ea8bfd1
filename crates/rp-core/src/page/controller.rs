//! Page controller

use super::snapshot::{PageSnapshot, RecipeInfo};
use crate::comment::{CommentTree, Placement};
use crate::composer::{
    CommentComposer, CommentRequest, CommentTransport, ComposerSettings, ServerReply,
    SubmitOutcome, SubmitStart,
};
use crate::config::Config;
use crate::error::{RecipePageError, Result};
use crate::events::{ElementRole, EventKind, EventRouter, PageEvent};
use crate::rating::{RatingReceipt, RatingSelector, RatingSubmitter};
use crate::types::{AuthorHandle, CommentId, RatingValue};
use std::sync::Arc;
use tracing::{debug, info};

/// What a routed event asks the page to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    /// Commit a star
    SelectRating(RatingValue),
    /// Hover a star
    PreviewRating(RatingValue),
    /// Pointer left the stars
    ClearRatingPreview,
    /// Rating submit button
    SubmitRating,
    /// Reply control of a comment
    BeginReply {
        /// Comment replied to
        id: CommentId,
        /// Author from the element, if it carried one
        author: Option<AuthorHandle>,
    },
    /// Comment form submitted
    SubmitComment,
    /// Click that may dismiss the sign-in prompt
    CloseAuthPrompt(ElementRole),
}

/// Result of handling one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    /// Local state changed
    Updated,
    /// Guest tried to comment; sign-in prompt shown
    AuthPromptShown,
    /// Comment post to send; hand the reply to `complete_comment`
    SendComment(CommentRequest),
    /// Rating to send
    SendRating(RatingValue),
}

/// Something the user should be told after `dispatch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageNotice {
    /// A comment submission finished
    Comment(SubmitOutcome),
    /// The rating was accepted
    RatingSent(RatingReceipt),
    /// The rating was not sent
    RatingFailed(String),
}

/// Transports the page talks to
#[derive(Clone)]
pub struct PagePorts {
    /// Comment endpoint
    pub comments: Arc<dyn CommentTransport>,
    /// Rating endpoint
    pub rating: Arc<dyn RatingSubmitter>,
}

/// Controller for one loaded page
///
/// Widgets exist only when the page has their elements. Each event goes
/// through the delegated router, so comments inserted later respond to the
/// same subscriptions as the ones present at load.
#[derive(Debug)]
pub struct PageController {
    recipe: RecipeInfo,
    rating: Option<RatingSelector>,
    rating_endpoint: Option<String>,
    composer: Option<CommentComposer>,
    tree: CommentTree,
    router: EventRouter<PageAction>,
}

impl PageController {
    /// Activate the page described by `snapshot`
    pub fn bootstrap(snapshot: PageSnapshot, config: &Config) -> Result<Self> {
        let scale = config.rating.scale()?;
        let (rating, rating_endpoint) = match &snapshot.rating {
            Some(widget) => {
                let selector = if widget.values.is_empty() {
                    RatingSelector::new(scale)
                } else {
                    RatingSelector::with_indicators(scale, &widget.values)?
                };
                (Some(selector), Some(widget.endpoint(&snapshot.recipe.slug)))
            }
            None => (None, None),
        };

        let composer = snapshot
            .comment_form
            .map(|form| CommentComposer::new(form, ComposerSettings::from(&config.comments)));
        let tree = CommentTree::from_seeds(snapshot.comments)?;

        let mut router = EventRouter::new();
        if rating.is_some() {
            router
                .on(EventKind::Click, |t| {
                    (t.role == ElementRole::Star)
                        .then_some(t.value)
                        .flatten()
                        .map(PageAction::SelectRating)
                })
                .on(EventKind::PointerEnter, |t| {
                    (t.role == ElementRole::Star)
                        .then_some(t.value)
                        .flatten()
                        .map(PageAction::PreviewRating)
                })
                .on(EventKind::PointerLeave, |t| {
                    (t.role == ElementRole::Star).then_some(PageAction::ClearRatingPreview)
                })
                .on(EventKind::Click, |t| {
                    (t.role == ElementRole::RatingSubmit).then_some(PageAction::SubmitRating)
                });
        }
        if composer.is_some() {
            router
                .on(EventKind::Click, |t| match (&t.role, &t.comment) {
                    (ElementRole::ReplyToggle, Some(id)) => Some(PageAction::BeginReply {
                        id: id.clone(),
                        author: t.author.clone(),
                    }),
                    _ => None,
                })
                .on(EventKind::Submit, |t| {
                    (t.role == ElementRole::CommentForm).then_some(PageAction::SubmitComment)
                })
                .on(EventKind::Click, |t| match t.role {
                    ElementRole::CloseModal | ElementRole::ModalBackdrop => {
                        Some(PageAction::CloseAuthPrompt(t.role))
                    }
                    _ => None,
                });
        }

        info!(
            "Page '{}' ready: rating={}, comments={} ({} loaded)",
            snapshot.recipe.slug,
            rating.is_some(),
            composer.is_some(),
            tree.len()
        );

        Ok(Self {
            recipe: snapshot.recipe,
            rating,
            rating_endpoint,
            composer,
            tree,
            router,
        })
    }

    /// Route `event` and apply the resulting actions
    pub fn handle(&mut self, event: &PageEvent) -> Result<Vec<PageEffect>> {
        let actions = self.router.route(event);
        let mut effects = Vec::with_capacity(actions.len());
        for action in actions {
            if let Some(effect) = self.apply(action)? {
                effects.push(effect);
            }
        }
        Ok(effects)
    }

    /// Apply one action
    pub fn apply(&mut self, action: PageAction) -> Result<Option<PageEffect>> {
        debug!("Applying {:?}", action);
        match action {
            PageAction::SelectRating(value) => {
                self.require_rating()?.select(value)?;
                Ok(Some(PageEffect::Updated))
            }
            PageAction::PreviewRating(value) => {
                self.require_rating()?.preview(value)?;
                Ok(Some(PageEffect::Updated))
            }
            PageAction::ClearRatingPreview => {
                self.require_rating()?.clear_preview();
                Ok(Some(PageEffect::Updated))
            }
            PageAction::SubmitRating => {
                let value = self.require_rating()?.value();
                Ok(Some(PageEffect::SendRating(value)))
            }
            PageAction::BeginReply { id, author } => {
                if !self.tree.contains(&id) {
                    return Err(RecipePageError::CommentNotFound(id.to_string()));
                }
                let author = author
                    .or_else(|| self.tree.author_of(&id).cloned())
                    .unwrap_or_else(|| AuthorHandle::new(id.to_string()));
                self.require_composer()?.begin_reply(id, author);
                Ok(Some(PageEffect::Updated))
            }
            PageAction::SubmitComment => match self.require_composer()?.begin_submit()? {
                SubmitStart::AuthRequired => Ok(Some(PageEffect::AuthPromptShown)),
                SubmitStart::Send(request) => Ok(Some(PageEffect::SendComment(request))),
            },
            PageAction::CloseAuthPrompt(role) => {
                let closed = self.require_composer()?.close_auth_prompt(role);
                Ok(closed.then_some(PageEffect::Updated))
            }
        }
    }

    /// Merge the reply to a `SendComment` effect into the page
    pub fn complete_comment(
        &mut self,
        placement: Placement,
        reply: Result<ServerReply>,
    ) -> Result<SubmitOutcome> {
        let composer = self
            .composer
            .as_mut()
            .ok_or(RecipePageError::MissingWidget("comment form"))?;
        composer.complete_submit(placement, reply, &mut self.tree)
    }

    /// Handle `event` and perform any requests through `ports`
    pub async fn dispatch(&mut self, event: &PageEvent, ports: &PagePorts) -> Result<Vec<PageNotice>> {
        let mut notices = Vec::new();
        for effect in self.handle(event)? {
            match effect {
                PageEffect::Updated => {}
                PageEffect::AuthPromptShown => {
                    notices.push(PageNotice::Comment(SubmitOutcome::AuthPromptShown));
                }
                PageEffect::SendComment(request) => {
                    let reply = ports.comments.post_comment(&request).await;
                    let outcome = self.complete_comment(request.placement, reply)?;
                    notices.push(PageNotice::Comment(outcome));
                }
                PageEffect::SendRating(value) => match ports.rating.submit_rating(value).await {
                    Ok(receipt) => notices.push(PageNotice::RatingSent(receipt)),
                    Err(e) => notices.push(PageNotice::RatingFailed(e.to_string())),
                },
            }
        }
        Ok(notices)
    }

    fn require_rating(&mut self) -> Result<&mut RatingSelector> {
        self.rating
            .as_mut()
            .ok_or(RecipePageError::MissingWidget("rating"))
    }

    fn require_composer(&mut self) -> Result<&mut CommentComposer> {
        self.composer
            .as_mut()
            .ok_or(RecipePageError::MissingWidget("comment form"))
    }

    /// Recipe shown on the page
    pub fn recipe(&self) -> &RecipeInfo {
        &self.recipe
    }

    /// Rating widget
    pub fn rating(&self) -> Option<&RatingSelector> {
        self.rating.as_ref()
    }

    /// Endpoint for rating submissions
    pub fn rating_endpoint(&self) -> Option<&str> {
        self.rating_endpoint.as_deref()
    }

    /// Comment composer
    pub fn composer(&self) -> Option<&CommentComposer> {
        self.composer.as_ref()
    }

    /// Mutable comment composer, for text editing
    pub fn composer_mut(&mut self) -> Option<&mut CommentComposer> {
        self.composer.as_mut()
    }

    /// Comment tree
    pub fn tree(&self) -> &CommentTree {
        &self.tree
    }
}
