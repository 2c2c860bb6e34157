use leptos::*;
use crate::models::campsite::Campsite;

#[component]
pub fn CampsiteCard(campsite: Campsite) -> impl IntoView {
    view! {
        <div class="col-md-5 m-1">
            <div class="card">
                <img class="card-img-top" src=campsite.image alt=campsite.name />
                <div class="card-body">
                    <p class="card-text">{ campsite.description }</p>
                </div>
            </div>
        </div>
    }
}
