//! Application shell: routes, page metadata, and the campsite store that
//! feeds the campsite pages.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::campsite_info::CampsiteInfo;
use crate::models::campsite_state::CampsiteState;
use crate::models::comment::NewComment;
use crate::store::CampsiteStore;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let store = CampsiteStore::seeded();

    view! {
        <Stylesheet id="leptos" href="/pkg/campsite-info.css" />
        <Title text="NuCamp" />
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=move || view! { <DirectoryPage store=store /> } />
                    <Route path="/directory" view=move || view! { <DirectoryPage store=store /> } />
                    <Route
                        path="/directory/:campsiteId"
                        view=move || view! { <CampsitePage store=store /> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn DirectoryPage(store: CampsiteStore) -> impl IntoView {
    view! {
        <div class="container">
            <div class="row">
                {store.campsites().into_iter().map(|campsite| view! {
                    <div class="col-md-5 m-1">
                        <A href=format!("/directory/{}", campsite.id)>
                            <img width="100%" src=campsite.image alt=campsite.name.clone() />
                            <h5>{ campsite.name }</h5>
                        </A>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn CampsitePage(store: CampsiteStore) -> impl IntoView {
    let params = use_params_map();
    let state = Signal::derive(move || {
        params
            .with(|params| params.get("campsiteId").and_then(|id| id.parse::<u32>().ok()))
            .map(|id| store.state_for(id))
            .unwrap_or(CampsiteState::Empty)
    });

    view! {
        <CampsiteInfo
            state=state
            add_comment=move |comment: NewComment| store.add_comment(comment)
        />
    }
}
