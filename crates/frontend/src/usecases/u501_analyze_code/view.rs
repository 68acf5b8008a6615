//! Code Analyzer - View Component

use super::api::HttpTransport;
use super::button_state::ButtonState;
use super::dispatch::{run_action, DispatchOutcome, PanelState};
use super::result_panel::ResultPanelState;
use super::view_model::AnalyzerVm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Textarea};
use crate::shared::config::AnalyzerConfig;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_analyze_code::{ActionDescriptor, AnalyzeCode, AnalyzeRequest};
use leptos::ev::MouseEvent;
use leptos::html::{Div, Textarea as TextareaEl};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

#[component]
#[allow(non_snake_case)]
pub fn CodeAnalyzer() -> impl IntoView {
    let config = use_context::<AnalyzerConfig>().unwrap_or_default();
    let transport = HttpTransport::new(config.endpoint.clone());
    let vm = AnalyzerVm::new();
    let code_ref = NodeRef::<TextareaEl>::new();
    let panel_ref = NodeRef::<Div>::new();

    let on_clear = Callback::new(move |_: MouseEvent| {
        vm.panel.clear();
        if let Some(textarea) = code_ref.get_untracked() {
            let _ = textarea.focus();
        }
    });

    let buttons = config
        .actions
        .iter()
        .map(|action| {
            view! {
                <ActionButton
                    action=*action
                    transport=transport.clone()
                    vm=vm
                    panel_ref=panel_ref
                />
            }
        })
        .collect_view();

    view! {
        <div class="page analyzer" id=AnalyzeCode::full_name()>
            <PageHeader
                title=AnalyzeCode::display_name()
                subtitle=AnalyzeCode::description().to_string()
            >
                <Button id="clearBtn".to_string() variant="ghost".to_string() on_click=on_clear>
                    "Clear"
                </Button>
            </PageHeader>

            <Textarea
                id="codeInput".to_string()
                value=vm.code
                on_input=Callback::new(move |value: String| vm.code.set(value))
                textarea_ref=code_ref
                placeholder="Paste your code here".to_string()
                rows=18
                class="analyzer__code".to_string()
            />

            <div class="analyzer__actions">{buttons}</div>

            <ResultPanel panel=vm.panel card_ref=panel_ref />
        </div>
    }
}

/// One catalog action; owns its busy state
#[component]
#[allow(non_snake_case)]
fn ActionButton(
    action: ActionDescriptor,
    transport: HttpTransport,
    vm: AnalyzerVm,
    panel_ref: NodeRef<Div>,
) -> impl IntoView {
    let state = RwSignal::new(ButtonState::new(action.label));

    let on_click = Callback::new(move |_: MouseEvent| {
        let request = AnalyzeRequest::new(action.id, vm.code.get_untracked());
        let transport = transport.clone();
        spawn_local(async move {
            let outcome = run_action(&transport, request, &state, &vm.panel).await;
            if outcome == DispatchOutcome::Rendered {
                scroll_into_view(panel_ref);
            }
        });
    });

    view! {
        <Button
            class="action-btn".to_string()
            data_action=action.id.to_string()
            disabled=Signal::derive(move || state.with(|s| s.is_busy()))
            on_click=on_click
        >
            {move || state.with(|s| s.label().to_string())}
        </Button>
    }
}

#[component]
#[allow(non_snake_case)]
fn ResultPanel(panel: RwSignal<ResultPanelState>, card_ref: NodeRef<Div>) -> impl IntoView {
    view! {
        <div
            id="outputCard"
            node_ref=card_ref
            class=move || {
                if panel.with(|p| p.visible) { "card analyzer__output" } else { "card analyzer__output hidden" }
            }
        >
            <h2 id="outputTitle" class="analyzer__output-title">
                {move || panel.with(|p| p.title.clone())}
            </h2>
            <pre id="output" class="analyzer__output-body">
                {move || panel.with(|p| p.body.clone())}
            </pre>
        </div>
    }
}

/// Bring the panel into view once it has been laid out
fn scroll_into_view(panel_ref: NodeRef<Div>) {
    if let Some(card) = panel_ref.get_untracked() {
        request_animation_frame(move || {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Nearest);
            card.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}
