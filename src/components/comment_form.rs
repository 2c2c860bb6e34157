use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::logging::log;
use leptos::*;

use crate::models::comment::NewComment;
use crate::models::comment_form::{CommentFormState, DraftField, RATING_OPTIONS};

/// "Submit Comments" button plus the modal form it opens.
/// Calls `add_comment` once per accepted submission.
#[component]
pub fn CommentForm(
    campsite_id: u32,
    #[prop(into)] add_comment: Callback<NewComment>,
) -> impl IntoView {
    let form = create_rw_signal(CommentFormState::default());

    let toggle_modal = move |_: MouseEvent| form.update(CommentFormState::toggle);

    let set_field = move |field: DraftField, value: String| {
        form.update(|state| state.update_field(field, value));
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|state| state.submit(campsite_id)) {
            Some(Ok(comment)) => {
                log!("[FORM] Submitting comment by {} for campsite {}", comment.author, campsite_id);
                add_comment.call(comment);
            }
            Some(Err(err)) => log!("[FORM] Submission rejected: {}", err),
            None => {}
        }
    };

    view! {
        <Show when=move || form.with(CommentFormState::is_open)>
            <div class="modal-backdrop fade show" on:click=toggle_modal></div>
            <div class="modal fade show d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog" role="document">
                    <div class="modal-content">
                        <div class="modal-body">
                            <form on:submit=handle_submit>
                                <div class="form-group">
                                    <label for="rating">{ "Rating" }</label>
                                    <select
                                        id="rating"
                                        name="rating"
                                        class="form-control"
                                        on:change=move |e| set_field(DraftField::Rating, event_target_value(&e))
                                    >
                                        {RATING_OPTIONS.into_iter().map(|option| view! {
                                            <option
                                                value=option
                                                selected=move || form.with(|state| state.draft().rating == option)
                                            >
                                                { option }
                                            </option>
                                        }).collect::<Vec<_>>()}
                                    </select>
                                </div>
                                <div class="form-group">
                                    <label for="author">{ "Author" }</label>
                                    <input
                                        type="text"
                                        id="author"
                                        name="author"
                                        class="form-control"
                                        prop:value=move || form.with(|state| state.draft().author.clone())
                                        on:input=move |e| set_field(DraftField::Author, event_target_value(&e))
                                        on:blur=move |_| form.update(CommentFormState::touch_author)
                                    />
                                    <div class="text-danger">
                                        {move || form.with(CommentFormState::visible_author_errors)
                                            .into_iter()
                                            .map(|err| view! { <div>{ err.to_string() }</div> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </div>
                                <div class="form-group">
                                    <label for="text">{ "Comments" }</label>
                                    <textarea
                                        id="text"
                                        name="text"
                                        rows="6"
                                        class="form-control"
                                        prop:value=move || form.with(|state| state.draft().text.clone())
                                        on:input=move |e| set_field(DraftField::Text, event_target_value(&e))
                                    ></textarea>
                                </div>
                                <button type="submit" class="btn btn-primary">{ "Submit" }</button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
        <button type="button" class="btn btn-outline-secondary" on:click=toggle_modal>
            <i class="fa fa-pencil fa-lg"></i>
            { " Submit Comments" }
        </button>
    }
}
