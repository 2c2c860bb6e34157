#![cfg(feature = "ssr")]

use campsite_info::components::campsite_info::CampsiteInfo;
use campsite_info::components::comment_form::CommentForm;
use campsite_info::components::comments_list::CommentsList;
use campsite_info::models::campsite::Campsite;
use campsite_info::models::campsite_state::CampsiteState;
use campsite_info::models::comment::{Comment, NewComment};
use leptos::ssr::render_to_string;
use leptos::*;

fn campsite() -> Campsite {
    Campsite {
        id: 2,
        name: "Breadcrumb Trail Campground".into(),
        image: "/assets/images/breadcrumb-trail.jpg".into(),
        description: "A hike-in-only campground".into(),
    }
}

fn comment() -> Comment {
    Comment {
        id: 1,
        campsite_id: 2,
        text: "Nice".into(),
        author: "Bo".into(),
        rating: 4,
        date: "2024-04-12T00:00:00Z".into(),
    }
}

fn render_page(state: CampsiteState) -> String {
    render_to_string(move || {
        view! {
            <CampsiteInfo state=state add_comment=move |_: NewComment| () />
        }
    })
    .to_string()
}

#[test]
fn test_comments_render_text_author_and_date() {
    let html = render_to_string(|| {
        view! {
            <CommentsList
                comments=Some(vec![comment()])
                campsite_id=2
                add_comment=move |_: NewComment| ()
            />
        }
    })
    .to_string();

    assert!(html.contains("Nice"));
    assert!(html.contains("Bo"));
    assert!(html.contains("Apr 12, 2024"));
    assert!(html.contains("Submit Comments"));
}

#[test]
fn test_comments_keep_given_order() {
    let mut later = comment();
    later.id = 2;
    later.text = "Second visit".into();
    let html = render_to_string(move || {
        view! {
            <CommentsList
                comments=Some(vec![comment(), later])
                campsite_id=2
                add_comment=move |_: NewComment| ()
            />
        }
    })
    .to_string();

    let first = html.find("Nice").unwrap();
    let second = html.find("Second visit").unwrap();
    assert!(first < second);
}

#[test]
fn test_absent_comments_still_render_form() {
    let html = render_to_string(|| {
        view! {
            <CommentsList comments=None campsite_id=2 add_comment=move |_: NewComment| () />
        }
    })
    .to_string();

    assert!(html.contains("Submit Comments"));
    assert!(!html.contains("<h4"));
    assert!(!html.contains("class=\"comment\""));
}

#[test]
fn test_unparseable_date_is_shown_verbatim() {
    let mut odd = comment();
    odd.date = "sometime in May".into();
    let html = render_to_string(move || {
        view! {
            <CommentsList comments=Some(vec![odd]) campsite_id=2 add_comment=move |_: NewComment| () />
        }
    })
    .to_string();

    assert!(html.contains("sometime in May"));
}

#[test]
fn test_comment_form_starts_closed() {
    let html = render_to_string(|| {
        view! { <CommentForm campsite_id=2 add_comment=move |_: NewComment| () /> }
    })
    .to_string();

    assert!(html.contains("Submit Comments"));
    assert!(!html.contains("modal-body"));
    assert!(!html.contains("id=\"author\""));
}

#[test]
fn test_loading_renders_only_indicator() {
    let state = CampsiteState::from_props(true, None, Some(campsite()), Some(vec![comment()]));
    let html = render_page(state);

    assert!(html.contains("Loading..."));
    assert!(!html.contains("Breadcrumb Trail Campground"));
    assert!(!html.contains("Nice"));
    assert!(!html.contains("Submit Comments"));
}

#[test]
fn test_error_renders_message_only() {
    let html = render_page(CampsiteState::Error("Network error".into()));

    assert!(html.contains("Network error"));
    assert!(!html.contains("Loading..."));
    assert!(!html.contains("Submit Comments"));
}

#[test]
fn test_ready_renders_breadcrumb_card_and_comments() {
    let html = render_page(CampsiteState::Ready {
        campsite: campsite(),
        comments: Some(vec![comment()]),
    });

    assert!(html.contains("href=\"/directory\""));
    assert!(html.contains("Directory"));
    assert!(html.contains("<h2"));
    assert!(html.contains("Breadcrumb Trail Campground"));
    assert!(html.contains("/assets/images/breadcrumb-trail.jpg"));
    assert!(html.contains("A hike-in-only campground"));
    assert!(html.contains("Apr 12, 2024"));
    assert!(html.contains("Submit Comments"));
}

#[test]
fn test_empty_renders_nothing_meaningful() {
    let html = render_page(CampsiteState::Empty);

    assert!(!html.contains("Loading..."));
    assert!(!html.contains("Directory"));
    assert!(!html.contains("Submit Comments"));
}
