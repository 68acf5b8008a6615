use crate::shared::config::AnalyzerConfig;
use crate::usecases::u501_analyze_code::CodeAnalyzer;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AnalyzerConfig::from_document();
    log::info!(
        "analyzer: endpoint={} actions={}",
        config.endpoint,
        config.actions.len()
    );
    provide_context(config);

    view! {
        <main class="app">
            <CodeAnalyzer />
        </main>
    }
}
