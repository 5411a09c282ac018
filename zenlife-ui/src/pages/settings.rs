//! Settings Page
//!
//! Read-only view of the effective configuration.

use leptos::*;

use crate::state::global::AppState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="p-6 space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold text-zinc-900">"Settings"</h1>
                <p class="text-gray-500 mt-1">
                    {format!("Configuration bundled with {}", state.app_name())}
                </p>
            </div>

            <CountdownSettings />
            <DisplaySettings />
            <AboutSection />
        </div>
    }
}

/// Countdown settings
#[component]
fn CountdownSettings() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <section class="bg-white rounded-xl shadow p-6">
            <h2 class="text-xl font-semibold mb-4">"Bill Countdown"</h2>
            <dl class="grid grid-cols-2 gap-4 text-sm">
                <SettingRow label="Refresh interval" value=format!("{} ms", state.tick_interval_ms()) />
                <SettingRow label="Due-soon threshold" value=format!("{} days", state.due_soon_days()) />
            </dl>
        </section>
    }
}

/// Display and logging settings
#[component]
fn DisplaySettings() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (symbol, level) = state.config.with_value(|c| {
        (c.display.currency_symbol.clone(), c.logging.level.clone())
    });

    view! {
        <section class="bg-white rounded-xl shadow p-6">
            <h2 class="text-xl font-semibold mb-4">"Display"</h2>
            <dl class="grid grid-cols-2 gap-4 text-sm">
                <SettingRow label="App name" value=state.app_name() />
                <SettingRow label="Currency symbol" value=symbol />
                <SettingRow label="Log level" value=level />
            </dl>
        </section>
    }
}

#[component]
fn SettingRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <dt class="text-gray-500">{label}</dt>
        <dd class="font-mono text-zinc-800">{value}</dd>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-white rounded-xl shadow p-6">
            <h2 class="text-xl font-semibold mb-4">"About ZenLife"</h2>

            <div class="space-y-4 text-gray-600">
                <p>
                    "ZenLife keeps your tasks, bills and groceries in one place. "
                    "Everything lives in memory and resets when the page reloads."
                </p>

                <div class="grid md:grid-cols-2 gap-4 text-sm">
                    <div class="p-4 bg-zinc-50 rounded-lg">
                        <h3 class="font-medium text-zinc-900 mb-2">"Built With"</h3>
                        <ul class="space-y-1">
                            <li>"• Rust"</li>
                            <li>"• Leptos (WASM UI Framework)"</li>
                            <li>"• rust_decimal for money"</li>
                        </ul>
                    </div>

                    <div class="p-4 bg-zinc-50 rounded-lg">
                        <h3 class="font-medium text-zinc-900 mb-2">"Features"</h3>
                        <ul class="space-y-1">
                            <li>"• Task calendar"</li>
                            <li>"• Bill countdowns"</li>
                            <li>"• Grocery list by category"</li>
                            <li>"• Summary charts"</li>
                        </ul>
                    </div>
                </div>

                <p class="text-sm text-gray-400">"Version 0.1.0"</p>
            </div>
        </section>
    }
}
