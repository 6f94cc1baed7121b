//! Relay service: forward, record, acknowledge.
//!
//! Provides [`RelayService`], which turns a chat submission into a post by
//! forwarding it to the destination channel and calling the ingestion
//! service, then answers the submitter with the outcome.

use crate::post::{
    domain::{Post, User, UserId},
    ports::{PostStore, PostStoreError},
    services::{CreatePostRequest, PostErrorKind, PostIngestionService, PostServiceError},
};
use crate::relay::{
    domain::{Command, Destination, Submission},
    ports::{ChannelError, MessageChannel},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Reply to the `/start` command.
pub const WELCOME: &str =
    "Welcome! Send me any text, video, photo or link, and I'll forward it to the channel.";

/// Reply after a submission was forwarded and recorded.
pub const ACKNOWLEDGEMENT: &str = "Your submission has been forwarded to the channel.";

/// Reply when the submission was already recorded.
pub const DUPLICATE_NOTICE: &str = "This submission has already been recorded.";

/// Reply when forwarding or recording failed.
pub const APOLOGY: &str = "Sorry, there was an error forwarding your submission.";

/// Default origin source recorded on relayed posts.
const DEFAULT_SOURCE: &str = "telegram";

/// What the relay did with a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// A `/start` command was answered.
    Welcomed,
    /// The submission was forwarded and stored as a post.
    Stored(Post),
}

/// Errors raised while relaying a submission.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The submission could not be forwarded.
    #[error("forwarding failed: {0}")]
    Forward(#[source] ChannelError),

    /// The submitting user could not be registered.
    #[error("submitter registration failed: {0}")]
    Submitter(#[source] PostStoreError),

    /// The forwarded submission could not be stored.
    #[error("ingestion failed: {0}")]
    Ingestion(#[from] PostServiceError),

    /// The acknowledgement could not be delivered.
    #[error("reply failed: {0}")]
    Reply(#[source] ChannelError),
}

/// Chat submission relay.
pub struct RelayService<S, M>
where
    S: PostStore,
    M: MessageChannel,
{
    store: Arc<S>,
    ingestion: PostIngestionService<S>,
    channel: Arc<M>,
    destination: Destination,
    source: String,
}

impl<S, M> RelayService<S, M>
where
    S: PostStore,
    M: MessageChannel,
{
    /// Creates a relay that forwards into `destination`.
    #[must_use]
    pub fn new(store: Arc<S>, channel: Arc<M>, destination: Destination) -> Self {
        let ingestion = PostIngestionService::new(Arc::clone(&store));
        Self {
            store,
            ingestion,
            channel,
            destination,
            source: DEFAULT_SOURCE.to_owned(),
        }
    }

    /// Overrides the origin source recorded on relayed posts.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Handles one incoming submission.
    ///
    /// The submitter always receives a reply: a welcome, an
    /// acknowledgement, or an apology.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError`] when forwarding, submitter registration,
    /// ingestion, or the final reply fails.
    pub async fn handle(&self, submission: Submission) -> Result<RelayOutcome, RelayError> {
        if submission.command() == Some(Command::Start) {
            self.channel
                .reply(submission.chat_id, WELCOME)
                .await
                .map_err(RelayError::Reply)?;
            return Ok(RelayOutcome::Welcomed);
        }

        let receipt = match self.channel.forward(&submission, &self.destination).await {
            Ok(receipt) => receipt,
            Err(err) => {
                warn!(error = %err, chat_id = submission.chat_id, "error forwarding message");
                self.reply_best_effort(submission.chat_id, APOLOGY).await;
                return Err(RelayError::Forward(err));
            }
        };

        let submitter = User::new(UserId::new(submission.sender.uid))
            .with_handle(submission.sender.handle.clone().unwrap_or_default());
        if let Err(err) = self.store.ensure_user(&submitter).await {
            warn!(error = %err, uid = submission.sender.uid, "could not register submitter");
            self.reply_best_effort(submission.chat_id, APOLOGY).await;
            return Err(RelayError::Submitter(err));
        }

        let request = self.build_request(&submission, receipt.message_id);
        match self.ingestion.create_post(request).await {
            Ok(post) => {
                info!(
                    post_id = %post.id(),
                    chat_id = submission.chat_id,
                    "submission relayed"
                );
                self.channel
                    .reply(submission.chat_id, ACKNOWLEDGEMENT)
                    .await
                    .map_err(RelayError::Reply)?;
                Ok(RelayOutcome::Stored(post))
            }
            Err(err) => {
                let reply = if err.kind() == PostErrorKind::AlreadyExists {
                    DUPLICATE_NOTICE
                } else {
                    APOLOGY
                };
                self.reply_best_effort(submission.chat_id, reply).await;
                Err(err.into())
            }
        }
    }

    fn build_request(&self, submission: &Submission, forwarded_id: i64) -> CreatePostRequest {
        let request = CreatePostRequest::new(
            forwarded_id,
            submission.sender.uid,
            submission.sender.display_name(),
            self.source.clone(),
            submission.kind,
        )
        .with_link_code(submission.link_code());

        match self
            .destination
            .message_link(forwarded_id)
            .or_else(|| submission.url.clone())
        {
            Some(link) => request.with_share_link(link),
            None => request,
        }
    }

    async fn reply_best_effort(&self, chat_id: i64, text: &str) {
        if let Err(err) = self.channel.reply(chat_id, text).await {
            warn!(error = %err, chat_id, "could not deliver reply");
        }
    }
}
