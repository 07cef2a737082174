use crate::config::AppConfig;
use crate::domain::a001_schema::ui::{SchemaBrowser, SchemaWorkspace};
use crate::domain::a001_schema::ActiveSchemaContext;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // An invalid tab registry is fatal: the workspace is never built from it.
    let registry = match config.registry() {
        Ok(registry) => registry,
        Err(e) => {
            log::error!("Invalid tab configuration: {}", e);
            return view! { <StartupError message=e.to_string() /> }.into_any();
        }
    };

    // Ancestor scope of the workspace: owns the active schema.
    let schemas = ActiveSchemaContext::new();
    provide_context(schemas);
    provide_context(config.api.clone());
    schemas.load(config.api.base_url.clone());

    view! {
        <ConfigProvider>
            <div class="app-layout">
                <SchemaBrowser />
                <main class="app-layout__content">
                    <SchemaWorkspace registry=registry schema=schemas.active />
                </main>
            </div>
        </ConfigProvider>
    }
    .into_any()
}

/// Shown instead of the application when startup configuration is broken
#[component]
pub fn StartupError(message: String) -> impl IntoView {
    view! {
        <div class="startup-error">
            <strong>"Ошибка конфигурации: "</strong>
            {message}
        </div>
    }
}
