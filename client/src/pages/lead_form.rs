//! Tag editor for a single lead.
//!
//! SYSTEM CONTEXT
//! ==============
//! A plain HTML form posting to `/leads/{id}/tags`. The multi-select writes
//! `tags[]` hidden inputs; when the server bounces an empty submission back
//! with `?error=tags_blank`, the page renders the empty selection that was
//! submitted, so the validation message shows.

#[cfg(test)]
#[path = "lead_form_test.rs"]
mod lead_form_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::{use_params_map, use_query_map};
use widgets::multi_select::options_from_json;

use crate::components::multi_select::MultiSelect;
use crate::config::ClientConfig;
use crate::net::types::Lead;

pub const TAGS_BLANK: &str = "tags_blank";
pub const TAGS_BLANK_MESSAGE: &str = "Please select at least one tag.";

#[derive(Clone, Debug, PartialEq, Eq)]
enum LeadLoad {
    Loading,
    Missing,
    Ready(Lead),
}

/// Form action for a lead's tags.
#[must_use]
pub fn tags_path(id: u64) -> String {
    format!("/leads/{id}/tags")
}

/// Selection the form is rendered with. A `tags_blank` bounce means the
/// submitted selection was empty, so the stored tags are not restored.
fn initial_selection(stored: &[String], code: Option<&str>) -> Vec<String> {
    match code {
        Some(TAGS_BLANK) => Vec::new(),
        _ => stored.to_vec(),
    }
}

/// Validation message for an `error` query value.
fn error_message(code: Option<&str>) -> Option<String> {
    match code {
        Some(TAGS_BLANK) => Some(TAGS_BLANK_MESSAGE.to_owned()),
        _ => None,
    }
}

#[component]
pub fn LeadFormPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let params = use_params_map();
    let query = use_query_map();

    let lead_id = params.read_untracked().get("id").and_then(|raw| raw.parse::<u64>().ok());
    let error_code = query.read_untracked().get("error");
    let error = error_message(error_code.as_deref());
    let load = RwSignal::new(if lead_id.is_some() { LeadLoad::Loading } else { LeadLoad::Missing });

    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = lead_id {
            leptos::task::spawn_local(async move {
                let next = match crate::net::api::fetch_lead(id).await {
                    Some(lead) => LeadLoad::Ready(lead),
                    None => {
                        log::warn!("lead {id} could not be loaded");
                        LeadLoad::Missing
                    }
                };
                load.set(next);
            });
        }
    }

    let options = options_from_json(&config.tag_options);
    let csrf_token = config.csrf_token.clone();

    let body = move || match load.get() {
        LeadLoad::Loading => view! { <p class="lead-form__loading" aria-busy="true">"Loading lead…"</p> }.into_any(),
        LeadLoad::Missing => view! {
            <p class="lead-form__missing" role="alert">"This lead does not exist."</p>
        }
        .into_any(),
        LeadLoad::Ready(lead) => view! {
            <form class="lead-form" method="post" action=tags_path(lead.id)>
                <h1>{lead.name.clone()}</h1>
                <input type="hidden" name="csrf_token" value=csrf_token.clone()/>
                <label class="lead-form__label" for="lead-tags-input">"Tags"</label>
                <MultiSelect
                    id="lead-tags"
                    name="tags[]"
                    options=options.clone()
                    selected=initial_selection(&lead.tags, error_code.as_deref())
                    error=error.clone()
                />
                <div class="lead-form__actions">
                    <button type="submit">"Save"</button>
                    <a href="/">"Back to board"</a>
                </div>
            </form>
        }
        .into_any(),
    };

    view! { <main class="lead-form-page">{body}</main> }
}
