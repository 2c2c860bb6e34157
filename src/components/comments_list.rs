//! Component to display the comments of one campsite, followed by the form
//! for adding a new one.
use leptos::logging::log;
use leptos::*;

use crate::components::comment_form::CommentForm;
use crate::models::comment::{Comment, NewComment};
use crate::utils::date_format::format_comment_date;

#[component]
pub fn CommentsList(
    comments: Option<Vec<Comment>>,
    campsite_id: u32,
    #[prop(into)] add_comment: Callback<NewComment>,
) -> impl IntoView {
    view! {
        <div class="col-md-5 m-1">
            {comments.map(|comments| view! {
                <h4>{ "Comments" }</h4>
                {comments.into_iter().map(|comment| view! {
                    <div class="comment">
                        <p>
                            { comment.text.clone() }
                            <br />
                            { format!("-- {}, {}", comment.author, display_date(&comment)) }
                        </p>
                    </div>
                }).collect::<Vec<_>>()}
            })}
            <CommentForm campsite_id=campsite_id add_comment=add_comment />
        </div>
    }
}

// An unparseable date is shown as stored.
fn display_date(comment: &Comment) -> String {
    format_comment_date(&comment.date).unwrap_or_else(|err| {
        log!("[COMMENTS] Comment {}: {}", comment.id, err);
        comment.date.clone()
    })
}
