//! Campsite detail page: loading, error, or the campsite with its comments.
use leptos::*;

use crate::components::{
    campsite_card::CampsiteCard, comments_list::CommentsList, loading::Loading,
};
use crate::models::campsite_state::CampsiteState;
use crate::models::comment::NewComment;

#[component]
pub fn CampsiteInfo(
    #[prop(into)] state: MaybeSignal<CampsiteState>,
    #[prop(into)] add_comment: Callback<NewComment>,
) -> impl IntoView {
    move || match state.get() {
        CampsiteState::Loading => view! {
            <div class="container">
                <div class="row">
                    <Loading />
                </div>
            </div>
        }
        .into_view(),
        CampsiteState::Error(message) => view! {
            <div class="container">
                <div class="row">
                    <h4>{ message }</h4>
                </div>
            </div>
        }
        .into_view(),
        CampsiteState::Ready { campsite, comments } => {
            let campsite_id = campsite.id;
            let name = campsite.name.clone();
            view! {
                <div class="container">
                    <div class="row">
                        <div class="col">
                            <nav aria-label="breadcrumb">
                                <ol class="breadcrumb">
                                    <li class="breadcrumb-item">
                                        <a href="/directory">{ "Directory" }</a>
                                    </li>
                                    <li class="breadcrumb-item active" aria-current="page">{ name.clone() }</li>
                                </ol>
                            </nav>
                            <h2>{ name }</h2>
                            <hr />
                        </div>
                    </div>
                    <div class="row">
                        <CampsiteCard campsite=campsite />
                        <CommentsList
                            comments=comments
                            campsite_id=campsite_id
                            add_comment=add_comment
                        />
                    </div>
                </div>
            }
            .into_view()
        }
        CampsiteState::Empty => view! { <div></div> }.into_view(),
    }
}
