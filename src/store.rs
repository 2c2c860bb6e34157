//! In-memory campsite data used by the app shell.
//!
//! `Directory` is plain data; `CampsiteStore` wraps it in signals so pages
//! re-render when a comment is added.
use chrono::{DateTime, SecondsFormat, Utc};
use leptos::logging::{error, log};
use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::campsite::Campsite;
use crate::models::campsite_state::CampsiteState;
use crate::models::comment::{Comment, NewComment};

const SEED: &str = include_str!("../data/directory.json");

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to load campsite data: {0}")]
    Seed(#[from] serde_json::Error),
    #[error("no campsite with id {0}")]
    UnknownCampsite(u32),
    #[error("rating must be 1 to 5, got {0:?}")]
    InvalidRating(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Directory {
    pub campsites: Vec<Campsite>,
    pub comments: Vec<Comment>,
}

impl Directory {
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn campsite(&self, id: u32) -> Option<&Campsite> {
        self.campsites.iter().find(|campsite| campsite.id == id)
    }

    /// Comments for one campsite, in stored order.
    pub fn comments_for(&self, campsite_id: u32) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|comment| comment.campsite_id == campsite_id)
            .cloned()
            .collect()
    }

    pub fn add_comment(
        &mut self,
        new_comment: NewComment,
        now: DateTime<Utc>,
    ) -> Result<Comment, StoreError> {
        if self.campsite(new_comment.campsite_id).is_none() {
            return Err(StoreError::UnknownCampsite(new_comment.campsite_id));
        }
        let rating = new_comment
            .rating
            .parse::<u8>()
            .ok()
            .filter(|rating| (1..=5).contains(rating))
            .ok_or_else(|| StoreError::InvalidRating(new_comment.rating.clone()))?;

        let comment = Comment {
            id: self.comments.iter().map(|c| c.id + 1).max().unwrap_or(0),
            campsite_id: new_comment.campsite_id,
            rating,
            text: new_comment.text,
            author: new_comment.author,
            date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        self.comments.push(comment.clone());
        Ok(comment)
    }
}

#[derive(Clone, Copy)]
pub struct CampsiteStore {
    directory: RwSignal<Directory>,
    err_mess: RwSignal<Option<String>>,
    is_loading: RwSignal<bool>,
}

impl CampsiteStore {
    /// Loads the bundled campsite data. A broken seed surfaces as an error
    /// message on every campsite page.
    pub fn seeded() -> Self {
        Self::from_seed(SEED)
    }

    pub fn from_seed(json: &str) -> Self {
        let store = Self {
            directory: create_rw_signal(Directory::default()),
            err_mess: create_rw_signal(None),
            is_loading: create_rw_signal(true),
        };
        match Directory::from_json(json) {
            Ok(directory) => {
                log!(
                    "[STORE] Loaded {} campsites and {} comments",
                    directory.campsites.len(),
                    directory.comments.len()
                );
                store.directory.set(directory);
            }
            Err(err) => {
                error!("[STORE] {}", err);
                store.err_mess.set(Some(err.to_string()));
            }
        }
        store.is_loading.set(false);
        store
    }

    pub fn campsites(&self) -> Vec<Campsite> {
        self.directory.with(|directory| directory.campsites.clone())
    }

    pub fn state_for(&self, campsite_id: u32) -> CampsiteState {
        let (campsite, comments) = self.directory.with(|directory| {
            (
                directory.campsite(campsite_id).cloned(),
                directory.comments_for(campsite_id),
            )
        });
        CampsiteState::from_props(
            self.is_loading.get(),
            self.err_mess.get(),
            campsite,
            Some(comments),
        )
    }

    pub fn add_comment(&self, new_comment: NewComment) {
        let result = self
            .directory
            .try_update(|directory| directory.add_comment(new_comment, Utc::now()));
        match result {
            Some(Ok(comment)) => log!(
                "[STORE] Added comment {} to campsite {}",
                comment.id,
                comment.campsite_id
            ),
            Some(Err(err)) => error!("[STORE] Comment rejected: {}", err),
            None => error!("[STORE] Comment dropped, store is disposed"),
        }
    }
}
