use crate::domain::a001_form_draft::ui::details::FormDraftDetails;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <main class="app-main">
            <FormDraftDetails />
        </main>
    }
}
