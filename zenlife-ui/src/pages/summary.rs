//! Summary Page
//!
//! Read-only overview: bill total and breakdown, task counts and grocery
//! category stats. Uses its own dataset, not the other pages' live state.

use leptos::*;
use zenlife::seed;

use crate::components::{PieChart, BILL_COLORS, GROCERY_COLORS};
use crate::state::global::{seeded, AppState};

/// Summary page component
#[component]
pub fn Summary() -> impl IntoView {
    let state = expect_context::<AppState>();
    let data = store_value(seeded(seed::summary_data()));

    let total = data.with_value(|d| state.money(d.total_bills()));
    let counts = data.with_value(|d| d.task_counts());
    let bill_slices = Signal::derive(move || data.with_value(|d| d.bill_slices()));
    let grocery_slices = Signal::derive(move || data.with_value(|d| d.grocery_slices()));

    view! {
        <section class="w-full min-h-screen px-6 py-10 bg-gradient-to-br from-emerald-50 via-white to-cyan-50 text-gray-800">
            <h1 class="text-5xl font-extrabold text-center text-emerald-700 mb-12">
                {format!("📈 {} Summary", state.app_name())}
            </h1>

            <div class="grid md:grid-cols-2 gap-10">
                // Bills
                <div class="space-y-4">
                    <h2 class="text-2xl font-semibold text-cyan-700">"💰 Bill Breakdown"</h2>
                    <p class="text-lg">
                        "Total Payable: "
                        <span class="font-bold text-emerald-600">{total}</span>
                    </p>
                    <div class="max-w-xs">
                        <PieChart slices=bill_slices colors=&BILL_COLORS />
                    </div>
                </div>

                // Tasks
                <div class="space-y-4">
                    <h2 class="text-2xl font-semibold text-cyan-700">"📝 Task Snapshot"</h2>
                    <div class="space-y-1">
                        <p class="text-gray-700">"📌 Pending Tasks: "<strong>{counts.pending}</strong></p>
                        <p class="text-gray-700">"✅ Completed Tasks: "<strong>{counts.completed}</strong></p>
                    </div>
                </div>
            </div>

            // Grocery categories
            <div class="mt-16 grid md:grid-cols-2 gap-10 items-start">
                <div>
                    <h2 class="text-2xl font-semibold text-cyan-700 mb-2">"🛍️ Grocery Categories"</h2>
                    <ul class="flex flex-wrap gap-3 text-gray-700 text-sm">
                        {data.with_value(|d| {
                            d.grocery_stats
                                .iter()
                                .map(|stat| view! {
                                    <li class="bg-white shadow px-4 py-1 rounded-full border border-emerald-200 hover:bg-emerald-50">
                                        {stat.category.clone()}" "
                                        <span class="text-gray-500">{format!("({})", stat.count)}</span>
                                    </li>
                                })
                                .collect_view()
                        })}
                    </ul>
                </div>
                <div class="max-w-xs mx-auto">
                    <PieChart slices=grocery_slices colors=&GROCERY_COLORS />
                </div>
            </div>
        </section>
    }
}
