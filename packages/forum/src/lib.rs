#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Community forum board and complaint log.
//!
//! The forum board is an in-memory discussion surface seeded with a few
//! starter threads. Complaints are the formal track: they carry a review
//! status and persist across runs through the [`KeyValueStore`] seam.

use chrono::Utc;
use sakhi_store::{KeyValueStore, StoreError, load_record, save_record};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;
use uuid::Uuid;

/// Store key the complaint log persists under.
pub const COMPLAINTS_KEY: &str = "complaints";

/// Author shown on posts and complaints filed anonymously.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

const JUST_POSTED: &str = "Just now";

/// Errors returned by the forum board and complaint log.
#[derive(Debug, Error)]
pub enum ForumError {
    /// A post was submitted without a title or body.
    #[error("title and content are required")]
    MissingPostField,
    /// A complaint was filed without a title or description.
    #[error("title and description are required")]
    MissingComplaintField,
    /// The backing store failed while loading or saving complaints.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Discussion category a forum post is filed under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PostCategory {
    Safety,
    Hostel,
    Complaint,
    General,
}

impl PostCategory {
    /// Every post category, in menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Safety, Self::Hostel, Self::Complaint, Self::General]
    }
}

/// Subject area of a filed complaint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ComplaintCategory {
    Hostel,
    Harassment,
    Safety,
    Other,
}

impl ComplaintCategory {
    /// Every complaint category, in menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Hostel, Self::Harassment, Self::Safety, Self::Other]
    }
}

/// Review state of a filed complaint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ComplaintStatus {
    Pending,
    Investigating,
    Resolved,
}

impl ComplaintStatus {
    /// Every complaint status, in review order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Pending, Self::Investigating, Self::Resolved]
    }
}

/// A thread on the community board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Display name of the poster, or [`ANONYMOUS_AUTHOR`].
    pub author: String,
    /// Human-readable age label ("2 hours ago", "Just now").
    pub posted: String,
    pub category: PostCategory,
    pub replies: u32,
    pub likes: u32,
    pub anonymous: bool,
}

/// A formally filed complaint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ComplaintCategory,
    pub status: ComplaintStatus,
    /// Filing date in `YYYY-MM-DD` form.
    pub filed: String,
    pub anonymous: bool,
}

/// In-memory forum board, newest posts first.
#[derive(Debug, Clone, Default)]
pub struct ForumBoard {
    posts: Vec<ForumPost>,
}

impl ForumBoard {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { posts: Vec::new() }
    }

    /// Creates a board seeded with the starter threads.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            posts: seed_posts(),
        }
    }

    /// All posts, newest first.
    #[must_use]
    pub fn posts(&self) -> &[ForumPost] {
        &self.posts
    }

    /// Posts in the given category, newest first.
    #[must_use]
    pub fn posts_in_category(&self, category: PostCategory) -> Vec<&ForumPost> {
        self.posts
            .iter()
            .filter(|post| post.category == category)
            .collect()
    }

    /// Publishes a new post at the top of the board.
    ///
    /// Anonymous posts are attributed to [`ANONYMOUS_AUTHOR`] regardless of
    /// the display name given.
    ///
    /// # Errors
    ///
    /// Returns [`ForumError::MissingPostField`] when the title or content is
    /// blank after trimming.
    pub fn post(
        &mut self,
        title: &str,
        content: &str,
        category: PostCategory,
        author: &str,
        anonymous: bool,
    ) -> Result<&ForumPost, ForumError> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(ForumError::MissingPostField);
        }

        let post = ForumPost {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            content: content.to_string(),
            author: if anonymous {
                ANONYMOUS_AUTHOR.to_string()
            } else {
                author.trim().to_string()
            },
            posted: JUST_POSTED.to_string(),
            category,
            replies: 0,
            likes: 0,
            anonymous,
        };
        self.posts.insert(0, post);
        Ok(&self.posts[0])
    }
}

/// Complaint log persisted through the key-value store seam.
#[derive(Clone, Copy)]
pub struct ComplaintLog<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> ComplaintLog<'a> {
    /// Creates a log over the given store.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// All filed complaints, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails or holds malformed records.
    pub async fn list(&self) -> Result<Vec<Complaint>, ForumError> {
        Ok(load_record(self.store, COMPLAINTS_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Files a new complaint with status [`ComplaintStatus::Pending`].
    ///
    /// # Errors
    ///
    /// Returns [`ForumError::MissingComplaintField`] when the title or
    /// description is blank after trimming, or a store error on save.
    pub async fn file(
        &self,
        title: &str,
        description: &str,
        category: ComplaintCategory,
        anonymous: bool,
    ) -> Result<Complaint, ForumError> {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(ForumError::MissingComplaintField);
        }

        let complaint = Complaint {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category,
            status: ComplaintStatus::Pending,
            filed: Utc::now().format("%Y-%m-%d").to_string(),
            anonymous,
        };

        let mut complaints = self.list().await?;
        complaints.insert(0, complaint.clone());
        save_record(self.store, COMPLAINTS_KEY, &complaints).await?;
        Ok(complaint)
    }

    /// Moves the complaint with the given id to a new review status.
    ///
    /// Returns `false` when no complaint has that id.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails while loading or saving.
    pub async fn set_status(&self, id: &str, status: ComplaintStatus) -> Result<bool, ForumError> {
        let mut complaints = self.list().await?;
        let Some(complaint) = complaints.iter_mut().find(|c| c.id == id) else {
            return Ok(false);
        };
        complaint.status = status;
        save_record(self.store, COMPLAINTS_KEY, &complaints).await?;
        Ok(true)
    }
}

fn seed_posts() -> Vec<ForumPost> {
    vec![
        ForumPost {
            id: "1".to_string(),
            title: "Safety tips for late night travel".to_string(),
            content: "What are some good practices when traveling alone at night?".to_string(),
            author: "SafetyFirst".to_string(),
            posted: "2 hours ago".to_string(),
            category: PostCategory::Safety,
            replies: 12,
            likes: 25,
            anonymous: false,
        },
        ForumPost {
            id: "2".to_string(),
            title: "Review: Downtown Women's Hostel".to_string(),
            content: "Just stayed here for a week. Great security and friendly staff.".to_string(),
            author: "TravelGirl".to_string(),
            posted: "5 hours ago".to_string(),
            category: PostCategory::Hostel,
            replies: 8,
            likes: 15,
            anonymous: false,
        },
        ForumPost {
            id: "3".to_string(),
            title: "Harassment incident report".to_string(),
            content: "Need advice on how to report inappropriate behavior.".to_string(),
            author: ANONYMOUS_AUTHOR.to_string(),
            posted: "1 day ago".to_string(),
            category: PostCategory::Complaint,
            replies: 6,
            likes: 18,
            anonymous: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use sakhi_store::MemoryStore;

    #[test]
    fn seeded_board_holds_starter_threads_newest_first() {
        let board = ForumBoard::seeded();
        let posts = board.posts();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].title, "Safety tips for late night travel");
        assert_eq!(posts[0].posted, "2 hours ago");
        assert_eq!(posts[2].author, ANONYMOUS_AUTHOR);
        assert!(posts[2].anonymous);
    }

    #[test]
    fn new_post_goes_to_the_top() {
        let mut board = ForumBoard::seeded();
        let post = board
            .post(
                "Well-lit routes near MG Road?",
                "Looking for recommendations for the evening commute.",
                PostCategory::Safety,
                "You",
                false,
            )
            .unwrap();
        assert_eq!(post.author, "You");
        assert_eq!(post.posted, "Just now");
        assert_eq!(post.replies, 0);
        assert_eq!(post.likes, 0);
        assert_eq!(board.posts().len(), 4);
        assert_eq!(board.posts()[0].title, "Well-lit routes near MG Road?");
    }

    #[test]
    fn anonymous_post_hides_the_display_name() {
        let mut board = ForumBoard::new();
        let post = board
            .post(
                "Incident near the station",
                "Sharing so others stay alert.",
                PostCategory::Complaint,
                "You",
                true,
            )
            .unwrap();
        assert_eq!(post.author, ANONYMOUS_AUTHOR);
        assert!(post.anonymous);
    }

    #[test]
    fn post_requires_title_and_content() {
        let mut board = ForumBoard::new();
        let err = board
            .post("  ", "body", PostCategory::General, "You", false)
            .unwrap_err();
        assert!(matches!(err, ForumError::MissingPostField));
        let err = board
            .post("title", "", PostCategory::General, "You", false)
            .unwrap_err();
        assert!(matches!(err, ForumError::MissingPostField));
        assert!(board.posts().is_empty());
    }

    #[test]
    fn category_filter_matches_exactly() {
        let board = ForumBoard::seeded();
        let safety = board.posts_in_category(PostCategory::Safety);
        assert_eq!(safety.len(), 1);
        assert_eq!(safety[0].id, "1");
        assert!(board.posts_in_category(PostCategory::General).is_empty());
    }

    #[tokio::test]
    async fn filed_complaints_start_pending_and_list_newest_first() {
        let store = MemoryStore::new();
        let log = ComplaintLog::new(&store);

        let first = log
            .file(
                "Broken corridor light",
                "Second floor corridor has been dark for a week.",
                ComplaintCategory::Hostel,
                false,
            )
            .await
            .unwrap();
        assert_eq!(first.status, ComplaintStatus::Pending);

        log.file(
            "Catcalling near the gate",
            "Happens most evenings around 8pm.",
            ComplaintCategory::Harassment,
            true,
        )
        .await
        .unwrap();

        let complaints = log.list().await.unwrap();
        assert_eq!(complaints.len(), 2);
        assert_eq!(complaints[0].title, "Catcalling near the gate");
        assert!(complaints[0].anonymous);
        assert_eq!(complaints[1].id, first.id);
    }

    #[tokio::test]
    async fn complaint_requires_title_and_description() {
        let store = MemoryStore::new();
        let log = ComplaintLog::new(&store);
        let err = log
            .file("", "desc", ComplaintCategory::Other, false)
            .await
            .unwrap_err();
        assert!(matches!(err, ForumError::MissingComplaintField));
        assert!(log.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn status_changes_persist_in_the_store() {
        let store = MemoryStore::new();
        let log = ComplaintLog::new(&store);
        let complaint = log
            .file(
                "Unsafe shortcut",
                "The path behind the market has no lighting at all.",
                ComplaintCategory::Safety,
                false,
            )
            .await
            .unwrap();

        assert!(log
            .set_status(&complaint.id, ComplaintStatus::Investigating)
            .await
            .unwrap());
        assert!(!log
            .set_status("missing-id", ComplaintStatus::Resolved)
            .await
            .unwrap());

        let reread = ComplaintLog::new(&store).list().await.unwrap();
        assert_eq!(reread[0].status, ComplaintStatus::Investigating);
    }
}
