//! Media sentiment tracking use-case service.
//!
//! # Invariants
//! - The month view only shows posts published in the requested calendar
//!   month, newest first.

use crate::collection::{remove, upsert};
use crate::model::media::MediaPost;
use crate::model::RecordId;
use crate::service::normalize_name;
use crate::store::Dashboard;
use chrono::Datelike;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum MediaServiceError {
    BlankTitle,
    PostNotFound(RecordId),
}

impl Display for MediaServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "title must not be blank"),
            Self::PostNotFound(id) => write!(f, "media post not found: {id}"),
        }
    }
}

impl Error for MediaServiceError {}

pub struct MediaService<'a> {
    state: &'a mut Dashboard,
}

impl<'a> MediaService<'a> {
    pub fn new(state: &'a mut Dashboard) -> Self {
        Self { state }
    }

    pub fn save_post(&mut self, mut post: MediaPost) -> Result<(), MediaServiceError> {
        post.title = normalize_name(&post.title).ok_or(MediaServiceError::BlankTitle)?;
        upsert(&mut self.state.media_posts, post);
        Ok(())
    }

    pub fn delete_post(&mut self, post_id: RecordId) -> Result<(), MediaServiceError> {
        if !remove(&mut self.state.media_posts, post_id) {
            return Err(MediaServiceError::PostNotFound(post_id));
        }
        Ok(())
    }
}

/// Posts published in the given calendar month, newest first.
///
/// Sentiment never affects inclusion; a post outside the month is always
/// filtered out. Ties on the date break by title for stable rendering.
pub fn posts_for_month(posts: &[MediaPost], year: i32, month: u32) -> Vec<&MediaPost> {
    let mut selected: Vec<&MediaPost> = posts
        .iter()
        .filter(|post| {
            post.publication_date.year() == year && post.publication_date.month() == month
        })
        .collect();
    selected.sort_by(|a, b| {
        b.publication_date
            .cmp(&a.publication_date)
            .then_with(|| a.title.cmp(&b.title))
    });
    selected
}
