use serde::{Deserialize, Serialize};

use crate::models::campsite::Campsite;
use crate::models::comment::Comment;

/// What the campsite page should show. Exactly one branch applies.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum CampsiteState {
    Loading,
    Error(String),
    Ready {
        campsite: Campsite,
        comments: Option<Vec<Comment>>,
    },
    Empty,
}

impl CampsiteState {
    /// Builds the state from loose page inputs. Loading wins over an error
    /// message, which wins over campsite data.
    pub fn from_props(
        is_loading: bool,
        err_mess: Option<String>,
        campsite: Option<Campsite>,
        comments: Option<Vec<Comment>>,
    ) -> Self {
        if is_loading {
            return CampsiteState::Loading;
        }
        if let Some(message) = err_mess.filter(|message| !message.is_empty()) {
            return CampsiteState::Error(message);
        }
        match campsite {
            Some(campsite) => CampsiteState::Ready { campsite, comments },
            None => CampsiteState::Empty,
        }
    }
}
