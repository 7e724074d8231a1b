//! Upload Dialog Component
//!
//! Modal form for uploading a new knowledge document.

use leptos::*;
use web_sys::HtmlInputElement;

use crate::state::BoardState;

const FIELD_CLASS: &str = "mt-1 block w-full rounded-md border-gray-300 shadow-sm \
    focus:border-pink-500 focus:ring-pink-500 sm:text-sm";

/// Upload modal; rendered only while the board's dialog is open
#[component]
pub fn UploadDialog() -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");

    let on_files = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = input
            .files()
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();
        state.files.set(files);
    };

    let on_submit = move |_| {
        spawn_local(async move {
            state.submit().await;
        });
    };

    view! {
        <div class="fixed inset-0 z-10" aria-labelledby="modal-title" role="dialog" aria-modal="true">
            // Backdrop closes the dialog
            <div
                class="fixed inset-0 bg-gray-500/75 transition-opacity"
                aria-hidden="true"
                on:click=move |_| state.close_form()
            />

            <div class="fixed inset-0 z-10 w-screen overflow-y-auto pointer-events-none">
                <div class="flex min-h-full items-end justify-center p-4 text-center sm:items-center sm:p-0">
                    <div class="pointer-events-auto relative transform overflow-hidden rounded-lg bg-white text-left shadow-xl transition-all sm:my-8 sm:w-full sm:max-w-lg">
                        <div class="bg-white px-4 pb-4 pt-5 sm:p-6 sm:pb-4">
                            <h3 class="text-lg font-semibold text-gray-900" id="modal-title">"Upload Files"</h3>

                            <div class="mt-4">
                                <label class="block text-sm font-medium text-gray-700" for="name">"Name"</label>
                                <input
                                    type="text"
                                    id="name"
                                    class=FIELD_CLASS
                                    prop:value=move || state.name.get()
                                    on:input=move |ev| state.name.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="mt-4">
                                <label class="block text-sm font-medium text-gray-700" for="description">"Description"</label>
                                <textarea
                                    id="description"
                                    class=FIELD_CLASS
                                    prop:value=move || state.description.get()
                                    on:input=move |ev| state.description.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="mt-4">
                                <label class="block text-sm font-medium text-gray-700" for="file">"Upload Files"</label>
                                <input
                                    type="file"
                                    id="file"
                                    multiple=true
                                    class="mt-1 block w-full text-sm text-gray-500 file:mr-4 file:rounded-md file:border-0 file:bg-pink-500 file:px-3 file:py-2 file:text-white hover:file:bg-pink-600"
                                    on:change=on_files
                                />
                                <p class="mt-1 text-xs text-gray-500">
                                    {move || match state.files.with(Vec::len) {
                                        0 => String::new(),
                                        1 => "1 file selected".to_string(),
                                        n => format!("{} files selected", n),
                                    }}
                                </p>
                            </div>
                        </div>

                        <div class="bg-gray-50 px-4 py-3 sm:flex sm:flex-row-reverse sm:px-6">
                            <button
                                type="button"
                                on:click=on_submit
                                class="inline-flex w-full justify-center rounded-md bg-pink-500 px-3 py-2 text-sm font-semibold text-white shadow-sm hover:bg-pink-400 sm:ml-3 sm:w-auto"
                            >
                                "Submit"
                            </button>
                            <button
                                type="button"
                                on:click=move |_| state.close_form()
                                class="mt-3 inline-flex w-full justify-center rounded-md bg-white px-3 py-2 text-sm font-semibold text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50 sm:mt-0 sm:w-auto"
                            >
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
