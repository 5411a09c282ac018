//! Sidebar Component
//!
//! Collapsible navigation rail with the page links.

use leptos::*;
use leptos_router::*;

use crate::state::global::AppState;

/// Navigation sidebar
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (collapsed, set_collapsed) = create_signal(false);

    view! {
        <aside class=move || {
            let width = if collapsed.get() { "w-20" } else { "w-64" };
            format!(
                "min-h-screen bg-white shadow-xl border-r transition-all duration-300 \
                 flex flex-col justify-between {}",
                width
            )
        }>
            <div class="px-4 py-5 space-y-8">
                // Brand and collapse toggle
                <div class="flex items-center justify-between">
                    <Show when=move || !collapsed.get()>
                        <h2 class="text-2xl font-extrabold text-green-600 tracking-tight">
                            {state.app_name()}
                        </h2>
                    </Show>
                    <button
                        class="text-gray-600 text-xl focus:outline-none"
                        on:click=move |_| set_collapsed.update(|c| *c = !*c)
                    >
                        "☰"
                    </button>
                </div>

                <nav class="space-y-2">
                    <SidebarLink href="/tasks" icon="📋" label="Tasks" collapsed=collapsed />
                    <SidebarLink href="/bills" icon="💸" label="Bills" collapsed=collapsed />
                    <SidebarLink href="/grocery" icon="🛒" label="Groceries" collapsed=collapsed />
                    <SidebarLink href="/summary" icon="📊" label="Summary" collapsed=collapsed />
                </nav>
            </div>

            <div class="px-4 pb-6 space-y-2 text-gray-700">
                <SidebarLink href="/settings" icon="⚙️" label="Settings" collapsed=collapsed />
                <button class="w-full flex items-center gap-3 p-2 rounded-lg hover:bg-green-100 transition-colors text-left">
                    <span class="text-lg">"🚪"</span>
                    <Show when=move || !collapsed.get()>
                        <span class="text-sm">"Logout"</span>
                    </Show>
                </button>
            </div>
        </aside>
    }
}

/// Individual navigation link
#[component]
fn SidebarLink(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
    collapsed: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="flex items-center gap-3 px-3 py-2 rounded-lg text-sm font-medium text-gray-700 hover:bg-green-100 transition-all"
            active_class="bg-green-100 text-green-700"
        >
            <span class="text-lg">{icon}</span>
            <Show when=move || !collapsed.get()>
                <span>{label}</span>
            </Show>
        </A>
    }
}
