//! Document Generate - View Component
//!
//! The generate screen: document form on top, embedded block editor below,
//! fixed action buttons in the corner.

use std::sync::Arc;

use leptos::prelude::*;
use thaw::*;

use super::model::GenerationApi;
use super::view_model::{GeneratePageVm, SectionEntry};
use crate::shared::block_editor::{BlockNoteSurface, EditorSurface};
use crate::shared::components::TagsInput;
use crate::shared::config::{AppConfig, HeadingSource};
use crate::shared::icons::icon;

/// Id of the div the editor mounts into; `assets/editor.js` looks it up.
const EDITOR_HOST_ID: &str = "block-editor-host";

#[component]
#[allow(non_snake_case)]
pub fn GeneratePage(config: AppConfig) -> impl IntoView {
    let vm = GeneratePageVm::new();
    let backend = Arc::new(GenerationApi::new(&config));
    let editor = Arc::new(BlockNoteSurface::new());
    let heading_source = config.heading_source;
    let toaster = ToasterInjection::expect_context();

    let result_ref = NodeRef::<leptos::html::Div>::new();

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title("AI Editor");
    }

    // Mount the editor once the host div is in the DOM
    Effect::new({
        let editor = editor.clone();
        move |_| {
            editor.mount(EDITOR_HOST_ID);
        }
    });

    // Generate handler
    let handle_generate = {
        let backend = backend.clone();
        let editor = editor.clone();
        move |_| {
            let headings_override = match heading_source {
                HeadingSource::Editor => Some(editor.heading_texts()),
                HeadingSource::Form => None,
            };
            let Some(request) = vm.try_begin(headings_override) else {
                return;
            };
            log::debug!("Dispatching generation request: {:?}", request);

            if let Some(target) = result_ref.get_untracked() {
                request_animation_frame(move || target.scroll_into_view());
            }

            let backend = backend.clone();
            let editor = editor.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = vm.run_generation(&*backend, &*editor, request).await {
                    log::error!("{}", err);
                    dispatch_error_toast(toaster);
                }
            });
        }
    };

    // Reset handler
    let handle_reset = {
        let editor = editor.clone();
        move |_| {
            vm.reset();
            let editor = editor.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(reason) = editor.clear().await {
                    log::error!("Failed to clear editor: {}", reason);
                }
            });
        }
    };

    let is_loading = Signal::derive(move || vm.phase.get().is_pending());
    let can_generate = Signal::derive(move || !vm.phase.get().is_pending() && vm.is_form_valid());
    let generate_disabled = Signal::derive(move || !can_generate.get());

    view! {
        <div class="generate-page">
            <section class="generate-page__form">
                <div class="form__group">
                    <label class="form__label">
                        "Title"
                        <span style="color: red;">"*"</span>
                    </label>
                    <Input
                        value=vm.title
                        placeholder="Title..."
                        attr:style="width: 100%; font-size: 18px;"
                    />
                </div>

                <SectionRows vm=vm />

                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px; align-items: start; margin-top: 16px;">
                    <Card>
                        <div class="form__group">
                            <label class="form__label">"Tone"</label>
                            <Input
                                value=vm.tone
                                placeholder="Tone...(default: Professional and informative)"
                                attr:style="width: 100%;"
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Word Count"</label>
                            <Input
                                value=vm.word_count
                                placeholder="word count...(default: 1500)"
                                attr:style="width: 100%;"
                            />
                        </div>
                    </Card>
                    <Card>
                        <div class="form__group">
                            <label class="form__label">"Language"</label>
                            <Input
                                value=vm.language
                                placeholder="Language..."
                                attr:style="width: 100%;"
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Keywords"</label>
                            <TagsInput value=vm.keywords placeholder="Enter keywords...".to_string() />
                        </div>
                    </Card>
                </div>
            </section>

            <div class="generate-page__divider"></div>

            <div node_ref=result_ref class="generate-page__result">
                <Show when=move || is_loading.get()>
                    <SkeletonLines />
                </Show>
                // The host div stays mounted while hidden so a failed request
                // leaves the previous document in place.
                <div
                    id=EDITOR_HOST_ID
                    class="generate-page__editor"
                    style:display=move || if is_loading.get() { "none" } else { "block" }
                ></div>
            </div>

            <div class="generate-page__actions">
                <Space>
                    <div class="reset-button">
                        <Button appearance=ButtonAppearance::Secondary on_click=handle_reset>
                            "Reset"
                        </Button>
                    </div>
                    <div class="generate-button">
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=generate_disabled
                            on_click=handle_generate
                        >
                            {move || if is_loading.get() { "Generating..." } else { "AI Generate" }}
                            {move || can_generate.get().then(|| view! { <div class="shine"></div> })}
                        </Button>
                    </div>
                </Space>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn SectionRows(vm: GeneratePageVm) -> impl IntoView {
    view! {
        <div class="generate-page__sections">
            <Show when=move || !vm.sections.get().is_empty()>
                <label class="form__label">"Heading"</label>
            </Show>

            <For each=move || vm.sections.get() key=|entry| entry.key let:entry>
                <SectionRow vm=vm entry=entry />
            </For>

            <Button
                appearance=ButtonAppearance::Secondary
                size=ButtonSize::Small
                on_click=move |_| vm.add_section()
            >
                {icon("plus")}
                " Add heading"
            </Button>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn SectionRow(vm: GeneratePageVm, entry: SectionEntry) -> impl IntoView {
    let key = entry.key;
    view! {
        <Flex align=FlexAlign::Center style="gap: 8px; margin-bottom: 8px;">
            <div style="flex: 1;">
                <Input value=entry.name placeholder="Heading..." attr:style="width: 100%;" />
            </div>
            <Button
                appearance=ButtonAppearance::Subtle
                shape=ButtonShape::Square
                size=ButtonSize::Small
                on_click=move |_| vm.remove_entry(key)
                attr:style="color: var(--color-error);"
                attr:title="Remove heading"
            >
                {icon("trash")}
            </Button>
        </Flex>
    }
}

/// Gray placeholder lines shown while a request is pending.
#[component]
#[allow(non_snake_case)]
fn SkeletonLines() -> impl IntoView {
    let widths: [u32; 15] = [50, 20, 30, 80, 40, 70, 90, 60, 30, 70, 80, 80, 40, 50, 77];
    view! {
        <div class="skeleton-stack">
            {widths
                .iter()
                .enumerate()
                .map(|(i, width)| {
                    let class = if i == 0 {
                        "skeleton-line skeleton-line--title"
                    } else {
                        "skeleton-line"
                    };
                    view! { <div class=class style=format!("width: {}%;", width)></div> }
                })
                .collect_view()}
        </div>
    }
}

fn dispatch_error_toast(toaster: ToasterInjection) {
    toaster.dispatch_toast(
        move || {
            view! {
                <Toast>
                    <ToastTitle>"Something wrong!"</ToastTitle>
                    <ToastBody>"Document generation failed. Please try again."</ToastBody>
                </Toast>
            }
        },
        ToastOptions::default()
            .with_position(ToastPosition::Top)
            .with_intent(ToastIntent::Error),
    );
}
