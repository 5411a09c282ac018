//! Grocery Page
//!
//! Category tabs over the grocery ledger, with purchase progress per item,
//! an add/edit dialog that can move items between categories, and a
//! confirmed delete.

use leptos::*;
use zenlife::grocery::GroceryLedger;
use zenlife::records::{GroceryDraft, GroceryItem, OrganizerError};
use zenlife::seed;

use crate::components::Modal;
use crate::state::global::{alert, commit, confirm, seeded, AppState};

const DELETE_PROMPT: &str = "Are you sure you want to delete this item?";

/// Open dialog: `None` id means a new item
#[derive(Debug, Clone)]
struct GroceryEditor {
    id: Option<u32>,
    draft: GroceryDraft,
}

/// Grocery page component
#[component]
pub fn Grocery() -> impl IntoView {
    let state = expect_context::<AppState>();
    let ledger = create_rw_signal(seeded(seed::grocery_ledger()));

    let first = ledger.with_untracked(|l| l.categories().next().map(str::to_string));
    let (active, set_active) = create_signal(first.unwrap_or_default());
    let (editor, set_editor) = create_signal(None::<GroceryEditor>);

    let categories = create_memo(move |_| {
        ledger.with(|l| l.categories().map(str::to_string).collect::<Vec<_>>())
    });

    let delete_item = move |id: u32| {
        let category = active.get_untracked();
        let answer = confirm(DELETE_PROMPT);

        let mut next = ledger.get_untracked();
        match next.delete(&category, id, answer) {
            Ok(_) => ledger.set(next),
            Err(OrganizerError::DestructiveActionUnconfirmed) => {}
            Err(e) => alert(&e.to_string()),
        }
    };

    view! {
        <div class="min-h-screen p-6 bg-zinc-50 text-gray-800">
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-3xl font-extrabold text-green-800">"🛒 Grocery List"</h1>
                <button
                    on:click=move |_| set_editor.set(Some(GroceryEditor {
                        id: None,
                        draft: GroceryDraft::in_category(active.get_untracked()),
                    }))
                    class="bg-green-600 hover:bg-green-700 text-white flex items-center gap-2 px-5 py-2 rounded-xl font-semibold"
                >
                    "+ Add Item"
                </button>
            </div>

            // Category tabs
            <div class="flex gap-3 mb-6 flex-wrap">
                {move || categories.get()
                    .into_iter()
                    .map(|category| {
                        let label = format!("{} {}", category_icon(&category), category);
                        let for_click = category.clone();
                        view! {
                            <button
                                on:click=move |_| set_active.set(for_click.clone())
                                class=move || {
                                    let base = "px-4 py-2 rounded-full font-medium text-sm transition";
                                    if active.get() == category {
                                        format!("{} bg-green-600 text-white", base)
                                    } else {
                                        format!("{} bg-gray-200 hover:bg-gray-300", base)
                                    }
                                }
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            // Items in the active category
            {move || {
                let category = active.get();
                let items = ledger.with(|l| l.items(&category).to_vec());
                if items.is_empty() {
                    view! {
                        <p class="text-gray-500 text-center py-8">"No items in this category yet."</p>
                    }.into_view()
                } else {
                    view! {
                        <ul class="space-y-4">
                            {items.into_iter().map(|item| {
                                let id = item.id;
                                let price = state.money(item.price);
                                let draft = GroceryDraft::from_item(category.clone(), &item);
                                view! {
                                    <ItemRow
                                        item=item
                                        price=price
                                        on_edit=move || set_editor.set(Some(GroceryEditor {
                                            id: Some(id),
                                            draft: draft.clone(),
                                        }))
                                        on_delete=move || delete_item(id)
                                    />
                                }
                            }).collect_view()}
                        </ul>
                    }.into_view()
                }
            }}

            // Add/edit dialog
            {move || editor.get().map(|ed| view! {
                <GroceryModal
                    editor=ed
                    current=active.get_untracked()
                    categories=categories.get_untracked()
                    ledger=ledger
                    on_close=move || set_editor.set(None)
                />
            })}
        </div>
    }
}

/// One grocery item with its purchase progress
#[component]
fn ItemRow(
    item: GroceryItem,
    #[prop(into)]
    price: String,
    on_edit: impl Fn() + 'static,
    on_delete: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <li class="bg-white p-4 rounded-xl shadow-md">
            <div class="flex justify-between items-start">
                <div>
                    <h2 class="text-lg font-bold text-zinc-900">{item.name}</h2>
                    <p class="text-sm text-gray-500">
                        {format!("Qty: {} • Buyer: {}", item.quantity, item.buyer)}
                    </p>
                </div>
                <div class="flex items-center gap-4">
                    <span class="font-semibold text-green-700">{price}</span>
                    <button on:click=move |_| on_edit() class="text-green-700 hover:text-green-900">"✏️"</button>
                    <button on:click=move |_| on_delete() class="text-red-600 hover:text-red-800">"🗑️"</button>
                </div>
            </div>
            <div class="mt-3">
                <div class="w-full bg-gray-200 rounded-full h-2">
                    <div
                        class="bg-green-500 h-2 rounded-full"
                        style=format!("width: {}%", item.purchased)
                    />
                </div>
                <p class="text-xs text-gray-500 mt-1">{purchased_label(item.purchased)}</p>
            </div>
        </li>
    }
}

/// Add/edit grocery dialog
#[component]
fn GroceryModal(
    editor: GroceryEditor,
    current: String,
    categories: Vec<String>,
    ledger: RwSignal<GroceryLedger>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let GroceryEditor { id, draft } = editor;

    let (category, set_category) = create_signal(draft.category);
    let (name, set_name) = create_signal(draft.name);
    let (quantity, set_quantity) = create_signal(draft.quantity);
    let (buyer, set_buyer) = create_signal(draft.buyer);
    let (price, set_price) = create_signal(draft.price);
    let (purchased, set_purchased) = create_signal(draft.purchased);

    let on_close_for_submit = on_close.clone();
    let on_close_for_cancel = on_close.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = GroceryDraft {
            category: category.get_untracked(),
            name: name.get_untracked(),
            quantity: quantity.get_untracked(),
            buyer: buyer.get_untracked(),
            price: price.get_untracked(),
            purchased: purchased.get_untracked(),
        };

        let saved = commit(ledger, |l| match id {
            Some(id) => l.edit(&current, id, &draft).map(|_| ()),
            None => l.add(&draft).map(|_| ()),
        });
        if saved.is_some() {
            on_close_for_submit();
        }
    };

    let heading = if id.is_some() { "Edit Item" } else { "Add Item" };
    let action = if id.is_some() { "Update" } else { "Add" };
    let input_class = "w-full border border-gray-300 rounded-lg px-4 py-2 focus:outline-none focus:ring-2 focus:ring-green-400";

    view! {
        <Modal title=heading on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                <label class="block text-sm text-gray-600">"Category"</label>
                <select
                    prop:value=move || category.get()
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                    class=input_class
                >
                    {categories
                        .into_iter()
                        .map(|c| view! { <option value=c.clone()>{c}</option> })
                        .collect_view()}
                </select>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class=input_class
                />
                <input
                    type="text"
                    placeholder="Quantity"
                    prop:value=move || quantity.get()
                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                    class=input_class
                />
                <input
                    type="text"
                    placeholder="Buyer"
                    prop:value=move || buyer.get()
                    on:input=move |ev| set_buyer.set(event_target_value(&ev))
                    class=input_class
                />
                <input
                    type="number"
                    placeholder="Price"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                    class=input_class
                />
                <label class="block text-sm text-gray-600">"Purchased (%)"</label>
                <input
                    type="number"
                    min="0"
                    max="100"
                    prop:value=move || purchased.get()
                    on:input=move |ev| set_purchased.set(event_target_value(&ev))
                    class=input_class
                />
                <div class="flex justify-end gap-3">
                    <button
                        type="button"
                        on:click=move |_| on_close_for_cancel()
                        class="px-4 py-2 bg-gray-200 hover:bg-gray-300 rounded-lg"
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="px-5 py-2 bg-green-600 text-white hover:bg-green-700 rounded-lg">
                        {action}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

fn category_icon(category: &str) -> &'static str {
    match category {
        "Dairy" => "🧀",
        "Grains" => "🌾",
        "Vegetables" => "🥕",
        _ => "🛍️",
    }
}

fn purchased_label(purchased: u8) -> String {
    format!("{}% purchased", purchased)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_icon() {
        assert_eq!(category_icon("Dairy"), "🧀");
        assert_eq!(category_icon("Snacks"), "🛍️");
    }

    #[test]
    fn test_purchased_label() {
        assert_eq!(purchased_label(70), "70% purchased");
        assert_eq!(purchased_label(0), "0% purchased");
    }
}
