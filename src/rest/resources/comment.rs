//! Comment resource and service.
//!
//! Comments belong to blog articles and move through a moderation
//! lifecycle on the server: pending, published, spam, removed. The
//! service exposes the standard CRUD verbs plus the moderation actions
//! (`spam`, `not_spam`, `approve`, `remove`, `restore`), each a POST to
//! `comments/{id}/<action>.json`.
//!
//! # Example
//!
//! ```rust,ignore
//! let comments = client.comments();
//!
//! // Moderate a pending comment
//! let comment = comments.get(653_537_639, None).await?;
//! let approved = comments.approve(&comment).await?;
//! assert_eq!(approved.status.as_deref(), Some("published"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::http::{Client, HttpMethod};
use crate::rest::endpoint;
use crate::rest::errors::ResourceError;
use crate::rest::resource::{
    get_count, get_edge, get_node, post_action, query_of, write_node, Resource,
};

/// A comment on a blog article.
///
/// The moderation status and commenter metadata are server-assigned and
/// never sent back; the author fields and body are writable.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Comment {
    /// The unique identifier of the comment. Server-assigned.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The ID of the article this comment belongs to.
    #[serde(skip_serializing)]
    pub article_id: Option<u64>,

    /// The ID of the blog containing the article.
    #[serde(skip_serializing)]
    pub blog_id: Option<u64>,

    /// The name of the comment author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// The email address of the comment author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The text of the comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// The text of the comment in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// The moderation status: pending, published, spam, removed.
    /// Changed through the moderation actions, never written directly.
    #[serde(skip_serializing)]
    pub status: Option<String>,

    /// The IP address the comment was posted from.
    #[serde(skip_serializing)]
    pub ip: Option<String>,

    /// The browser user agent of the commenter.
    #[serde(skip_serializing)]
    pub user_agent: Option<String>,

    /// When the comment was published.
    #[serde(skip_serializing)]
    pub published_at: Option<DateTime<Utc>>,

    /// When the comment was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the comment was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Comment {
    type Id = u64;
    const NAME: &'static str = "comment";
    const PLURAL: &'static str = "comments";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Options for fetching a single comment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CommentGetOptions {
    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Options for listing comments.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CommentListOptions {
    /// Maximum number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return only comments after the specified ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Filter by creation date (lower bound).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Filter by creation date (upper bound).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Filter by update date (lower bound).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Filter by update date (upper bound).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Filter by publication date (lower bound).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,

    /// Filter by publication date (upper bound).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,

    /// Filter by published status: published, unpublished, any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,

    /// Filter by moderation status: pending, published, spam, removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Options for counting comments.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CommentCountOptions {
    /// Filter by moderation status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Filter by published status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,
}

/// Service for the comment endpoint family.
#[derive(Debug, Clone, Copy)]
pub struct CommentService<'a> {
    client: &'a Client,
}

impl<'a> CommentService<'a> {
    /// Creates a service over the given client.
    #[must_use]
    pub const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists comments matching the given options.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport or decode failure.
    pub async fn all(
        &self,
        options: Option<CommentListOptions>,
    ) -> Result<Vec<Comment>, ResourceError> {
        let path = endpoint::collection(Comment::PLURAL);
        get_edge(self.client, &path, query_of(options)?).await
    }

    /// Counts comments matching the given options.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport or decode failure.
    pub async fn count(
        &self,
        options: Option<CommentCountOptions>,
    ) -> Result<u64, ResourceError> {
        let path = endpoint::count(Comment::PLURAL);
        get_count(self.client, &path, query_of(options)?, Comment::NAME).await
    }

    /// Fetches a single comment by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the comment does not exist.
    pub async fn get(
        &self,
        id: u64,
        options: Option<CommentGetOptions>,
    ) -> Result<Comment, ResourceError> {
        let path = endpoint::member(Comment::PLURAL, id);
        get_node(self.client, &path, query_of(options)?, &id.to_string()).await
    }

    /// Creates a new comment, returning the persisted value.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects
    /// the comment.
    pub async fn create(&self, comment: &Comment) -> Result<Comment, ResourceError> {
        let path = endpoint::collection(Comment::PLURAL);
        write_node(self.client, HttpMethod::Post, &path, comment, None).await
    }

    /// Updates an existing comment, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the comment has no ID.
    pub async fn update(&self, comment: &Comment) -> Result<Comment, ResourceError> {
        let id = comment.require_id("update")?;
        let path = endpoint::member(Comment::PLURAL, id);
        write_node(
            self.client,
            HttpMethod::Put,
            &path,
            comment,
            Some(&id.to_string()),
        )
        .await
    }

    /// Marks a comment as spam.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the comment has no ID.
    pub async fn spam(&self, comment: &Comment) -> Result<Comment, ResourceError> {
        self.moderate(comment, "spam").await
    }

    /// Unmarks a comment as spam.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the comment has no ID.
    pub async fn not_spam(&self, comment: &Comment) -> Result<Comment, ResourceError> {
        self.moderate(comment, "not_spam").await
    }

    /// Approves a pending comment for publication.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the comment has no ID.
    pub async fn approve(&self, comment: &Comment) -> Result<Comment, ResourceError> {
        self.moderate(comment, "approve").await
    }

    /// Removes a comment from publication.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the comment has no ID.
    pub async fn remove(&self, comment: &Comment) -> Result<Comment, ResourceError> {
        self.moderate(comment, "remove").await
    }

    /// Restores a removed comment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the comment has no ID.
    pub async fn restore(&self, comment: &Comment) -> Result<Comment, ResourceError> {
        self.moderate(comment, "restore").await
    }

    async fn moderate(
        &self,
        comment: &Comment,
        verb: &'static str,
    ) -> Result<Comment, ResourceError> {
        let id = comment.require_id(verb)?;
        let path = endpoint::action(Comment::PLURAL, id, verb);
        post_action(self.client, HttpMethod::Post, &path, &id.to_string()).await
    }
}
