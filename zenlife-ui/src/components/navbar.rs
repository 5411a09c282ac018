//! Navbar Component
//!
//! Top bar with the app title, a notification bell and the user badge.

use leptos::*;

use crate::state::global::AppState;

const NOTIFICATIONS: [&str; 3] = [
    "New user signed up",
    "Server CPU usage high",
    "Payment received",
];

/// Header bar
#[component]
pub fn Navbar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (open, set_open) = create_signal(false);

    view! {
        <header class="w-full bg-white px-8 py-4 flex justify-between items-center border-b border-gray-300 relative">
            <div class="text-3xl font-extrabold text-emerald-700 select-none">
                {state.app_name()}
            </div>

            <div class="flex items-center space-x-6 relative">
                // Notification bell
                <button
                    aria-label="Notifications"
                    on:click=move |_| set_open.update(|o| *o = !*o)
                    class="relative p-2 rounded-full hover:bg-emerald-100 transition focus:outline-none"
                >
                    <span class="text-xl">"🔔"</span>
                    <span class="absolute top-1 right-1 inline-flex items-center justify-center px-1.5 py-0.5 text-xs font-bold leading-none text-white bg-red-600 rounded-full select-none">
                        {NOTIFICATIONS.len()}
                    </span>
                </button>

                <Show when=move || open.get()>
                    <div class="absolute right-12 top-full mt-2 w-64 bg-white shadow-lg rounded-md border border-gray-200 z-50">
                        <div class="p-3 border-b border-gray-100 font-semibold text-gray-700">
                            "Notifications"
                        </div>
                        <ul class="max-h-60 overflow-y-auto">
                            {NOTIFICATIONS
                                .iter()
                                .map(|text| view! {
                                    <li
                                        class="px-4 py-2 hover:bg-emerald-50 cursor-pointer text-gray-600 text-sm"
                                        on:click=move |_| set_open.set(false)
                                    >
                                        {*text}
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </Show>

                // User badge
                <div class="flex items-center space-x-3">
                    <span class="w-10 h-10 rounded-full bg-emerald-100 border-2 border-emerald-500 flex items-center justify-center font-bold text-emerald-700">
                        "A"
                    </span>
                    <span class="font-semibold text-gray-700 select-none hidden sm:block">"Abida"</span>
                </div>
            </div>
        </header>
    }
}
