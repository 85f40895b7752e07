use crate::routes::routes::AppRoutes;
use crate::shared::config::FormDraftConfig;
use crate::shared::service_worker::register_service_worker;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::ConfigProvider;

#[component]
pub fn App(config: FormDraftConfig) -> impl IntoView {
    if config.service_worker.register_on_start {
        let script_url = config.service_worker.script_url.clone();
        spawn_local(async move {
            if let Err(e) = register_service_worker(&script_url).await {
                log::error!("{}", e);
            }
        });
    }

    // Provide the configuration to the whole app via context.
    provide_context(config);

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
