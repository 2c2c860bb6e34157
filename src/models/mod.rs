pub mod campsite;
pub mod campsite_state;
pub mod comment;
pub mod comment_form;
