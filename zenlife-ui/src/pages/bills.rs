//! Bills Page
//!
//! Due-date ordered bill timeline with live countdowns, a due-soon banner
//! and an add/edit dialog.

use leptos::*;
use zenlife::bills::{BillTracker, Countdown};
use zenlife::records::{Bill, BillDraft};
use zenlife::seed;

use crate::components::Modal;
use crate::state::global::{commit, seeded, AppState};
use crate::state::ticker::use_countdown_ticker;

/// Bills page component
#[component]
pub fn Bills() -> impl IntoView {
    let state = expect_context::<AppState>();
    let bills = create_rw_signal(seeded(seed::bill_tracker()));
    let countdowns = use_countdown_ticker(bills, state.tick_interval_ms(), state.due_soon_days());

    // `None` id means a new bill
    let (editor, set_editor) = create_signal(None::<(Option<u32>, BillDraft)>);

    let delete_bill = move |id: u32| {
        bills.update(|b| {
            b.delete(id);
        });
    };

    view! {
        <div class="min-h-screen p-6 bg-green-50 text-gray-800">
            <div class="flex justify-between items-center mb-8">
                <h1 class="text-3xl font-extrabold text-green-800">"📅 Monthly Bills Timeline"</h1>
                <button
                    on:click=move |_| set_editor.set(Some((None, BillDraft::default())))
                    class="bg-green-600 hover:bg-green-700 text-white flex items-center gap-2 px-5 py-2 rounded-xl font-semibold"
                >
                    "+ Add Bill"
                </button>
            </div>

            <Show when=move || countdowns.with(|c| c.is_due_soon())>
                <div class="bg-yellow-100 border border-yellow-300 text-yellow-800 px-4 py-3 rounded-xl flex items-center gap-3 mb-6">
                    "🔔 Some bills are due soon! Don't forget to pay!"
                </div>
            </Show>

            // Timeline
            <div class="relative border-l-4 border-green-500 pl-6">
                <For
                    each=move || bills.with(|b| b.timeline().into_iter().cloned().collect::<Vec<_>>())
                    key=|bill| (bill.id, bill.name.clone(), bill.amount, bill.due_date)
                    children=move |bill: Bill| {
                        let id = bill.id;
                        let draft = BillDraft::from(&bill);
                        view! {
                            <div class="mb-8 relative">
                                <div class="absolute -left-[30px] top-2 w-4 h-4 bg-green-500 rounded-full" />
                                <div class="bg-white p-4 rounded-xl shadow-md">
                                    <div class="flex justify-between items-center">
                                        <div>
                                            <h2 class="text-lg font-bold text-green-800">{bill.name.clone()}</h2>
                                            <p class="text-gray-600">{state.money(bill.amount)}</p>
                                            <div class="text-sm mt-2 flex items-center gap-2">
                                                {move || countdown_view(countdowns.with(|c| c.get(id)))}
                                                <span class="text-gray-500">
                                                    "(Due: "{bill.due_date.to_string()}")"
                                                </span>
                                            </div>
                                        </div>
                                        <div class="flex gap-4">
                                            <button
                                                on:click=move |_| set_editor.set(Some((Some(id), draft.clone())))
                                                class="text-green-700 hover:text-green-900"
                                            >
                                                "✏️"
                                            </button>
                                            <button
                                                on:click=move |_| delete_bill(id)
                                                class="text-red-600 hover:text-red-800"
                                            >
                                                "🗑️"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            // Add/edit dialog
            {move || editor.get().map(|(id, draft)| view! {
                <BillModal id=id draft=draft bills=bills on_close=move || set_editor.set(None) />
            })}
        </div>
    }
}

/// Countdown text, or "Due!" once the due instant has passed
fn countdown_view(remaining: Option<Countdown>) -> View {
    match remaining {
        Some(countdown) => view! {
            <span class="font-mono text-green-800">{countdown_label(&countdown)}</span>
        }
        .into_view(),
        None => view! { <span class="text-red-600 font-semibold">"Due!"</span> }.into_view(),
    }
}

fn countdown_label(countdown: &Countdown) -> String {
    format!("⏳ {}", countdown)
}

/// Add/edit bill dialog
#[component]
fn BillModal(
    id: Option<u32>,
    draft: BillDraft,
    bills: RwSignal<BillTracker>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let (name, set_name) = create_signal(draft.name);
    let (amount, set_amount) = create_signal(draft.amount);
    let (due_date, set_due_date) = create_signal(draft.due_date);

    let on_close_for_submit = on_close.clone();
    let on_close_for_cancel = on_close.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = BillDraft {
            name: name.get_untracked(),
            amount: amount.get_untracked(),
            due_date: due_date.get_untracked(),
        };

        let saved = commit(bills, |b| match id {
            Some(id) => b.edit(id, &draft).map(|_| ()),
            None => b.add(&draft).map(|_| ()),
        });
        if saved.is_some() {
            on_close_for_submit();
        }
    };

    let heading = if id.is_some() { "Edit Bill" } else { "Add Bill" };
    let action = if id.is_some() { "Update" } else { "Add" };

    view! {
        <Modal title=heading on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                <input
                    type="text"
                    placeholder="Bill Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="w-full border px-4 py-2 rounded-lg"
                />
                <input
                    type="number"
                    placeholder="Amount"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                    class="w-full border px-4 py-2 rounded-lg"
                />
                <input
                    type="date"
                    prop:value=move || due_date.get()
                    on:input=move |ev| set_due_date.set(event_target_value(&ev))
                    class="w-full border px-4 py-2 rounded-lg"
                />
                <div class="flex justify-end gap-3">
                    <button
                        type="button"
                        on:click=move |_| on_close_for_cancel()
                        class="px-4 py-2 rounded-lg bg-gray-200 hover:bg-gray-300"
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="px-5 py-2 rounded-lg bg-green-600 text-white hover:bg-green-700">
                        {action}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
