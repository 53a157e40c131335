//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{self, CONFIG_ELEMENT_ID, ClientConfig};
use crate::pages::{lead_form::LeadFormPage, leads::LeadsPage};
use crate::state::{leads::LeadsState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The server provides [`ClientConfig`] as route context; it is embedded as
/// JSON so the browser sees the same values after hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let embedded = use_context::<ClientConfig>().unwrap_or_default().to_embedded_json();
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=embedded></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the config and shared state contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ClientConfig>().unwrap_or_else(config::load_embedded);
    let leads = RwSignal::new(LeadsState::default());
    let ui = RwSignal::new(UiState::from_config(&config));

    provide_context(config);
    provide_context(leads);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/leadboard.css"/>
        <Title text="Leadboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LeadsPage/>
                <Route path=(StaticSegment("leads"), ParamSegment("id"), StaticSegment("edit")) view=LeadFormPage/>
            </Routes>
        </Router>
    }
}
