//! App Root Component
//!
//! The knowledge board: card grid, "Add" action, and upload modal.

use leptos::*;

use crate::components::{KnowledgeCard, UploadDialog, BUTTON_CLASS};
use crate::state::board::{BOARD_TITLE, EMPTY_PLACEHOLDER};
use crate::state::{provide_board_state, BoardState, Knowledge};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_board_state();
    let state = use_context::<BoardState>().expect("BoardState not found");

    // Fetch the record list on mount
    create_effect(move |_| {
        spawn_local(async move {
            state.load().await;
        });
    });

    let on_remove = Callback::new(move |id: String| {
        spawn_local(async move {
            state.remove(id).await;
        });
    });

    view! {
        <div class="w-full p-[32px]">
            <p class="text-xl text-white">{BOARD_TITLE}</p>

            <div class="flex justify-end mt-4">
                <button type="button" class=BUTTON_CLASS on:click=move |_| state.open_form()>
                    "+ Add"
                </button>
            </div>

            <div class="flex flex-row gap-10 justify-start mt-[48px]">
                {move || {
                    if state.knowledge.with(Vec::is_empty) {
                        view! { <p class="text-gray-400">{EMPTY_PLACEHOLDER}</p> }.into_view()
                    } else {
                        view! {
                            <For
                                each=move || state.knowledge.get()
                                key=|item| item.id.clone()
                                children=move |item: Knowledge| view! {
                                    <KnowledgeCard knowledge=item on_remove=on_remove />
                                }
                            />
                        }.into_view()
                    }
                }}
            </div>

            <Show when=move || state.dialog_open.get()>
                <UploadDialog />
            </Show>
        </div>
    }
}
