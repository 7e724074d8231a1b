//! Knowledge Card Component
//!
//! Displays one knowledge record with a remove button.

use leptos::*;

use crate::state::Knowledge;

/// Document image shown on every card
pub const DOC_IMAGE: &str = "assets/doc1.png";

pub const BUTTON_CLASS: &str =
    "select-none rounded-lg bg-pink-500 py-3 px-6 text-center align-middle \
    font-sans text-xs font-bold uppercase text-white shadow-md shadow-pink-500/20 transition-all \
    hover:shadow-lg hover:shadow-pink-500/40 focus:opacity-[0.85] focus:shadow-none \
    active:opacity-[0.85] active:shadow-none disabled:pointer-events-none disabled:opacity-50 \
    disabled:shadow-none";

/// Knowledge card component
#[component]
pub fn KnowledgeCard(
    /// Record to display
    knowledge: Knowledge,
    /// Called with the record id when "Remove" is pressed
    #[prop(into)]
    on_remove: Callback<String>,
) -> impl IntoView {
    let Knowledge {
        id,
        name,
        description,
    } = knowledge;

    view! {
        <div class="relative flex flex-col text-gray-700 bg-white shadow-md w-80 rounded-xl bg-clip-border">
            <div class="relative h-35 mx-4 -mt-6 overflow-hidden text-white shadow-lg rounded-xl bg-blue-gray-500 bg-clip-border shadow-blue-gray-500/40">
                <img src=DOC_IMAGE alt="document" />
            </div>

            <div class="p-6">
                <h5 class="block mb-2 font-sans text-xl antialiased font-semibold leading-snug tracking-normal text-blue-gray-900">
                    {name}
                </h5>
                <p class="block font-sans text-base antialiased font-light leading-relaxed text-inherit">
                    {description}
                </p>
            </div>

            <div class="p-6 pt-0">
                <button
                    type="button"
                    class=BUTTON_CLASS
                    on:click=move |_| on_remove.call(id.clone())
                >
                    "Remove"
                </button>
            </div>
        </div>
    }
}
