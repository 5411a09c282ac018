//! Modal Component
//!
//! Centered dialog over a dimmed backdrop. Clicking the backdrop closes it.

use leptos::*;

#[component]
pub fn Modal(
    #[prop(into)]
    title: String,
    on_close: impl Fn() + 'static + Clone,
    children: Children,
) -> impl IntoView {
    let on_close_for_backdrop = on_close.clone();
    let on_close_for_x = on_close;

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/40 p-4"
            on:click=move |_| on_close_for_backdrop()
        >
            <div
                class="bg-white p-6 rounded-xl shadow-2xl w-full max-w-md relative"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-bold text-zinc-900">{title}</h2>
                    <button
                        type="button"
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-gray-600"
                    >
                        "✕"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
