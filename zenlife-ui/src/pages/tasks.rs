//! Tasks Page
//!
//! Month calendar of tasks with a status filter, a selected-day panel and an
//! add/edit dialog that can also delete the task being edited.

use chrono::{Local, NaiveDate};
use leptos::*;
use zenlife::records::{Task, TaskDraft, TaskStatus, DATE_FORMAT};
use zenlife::seed;
use zenlife::tasks::{CalendarCell, CalendarMonth, StatusFilter, TaskBoard};

use crate::components::Modal;
use crate::state::global::{commit, seeded};

/// Task chips shown per calendar cell before collapsing into "+N more"
const MAX_CHIPS: usize = 2;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Open dialog: `None` id means a new task
#[derive(Debug, Clone)]
struct TaskEditor {
    id: Option<u32>,
    draft: TaskDraft,
}

/// Tasks page component
#[component]
pub fn Tasks() -> impl IntoView {
    let board = create_rw_signal(seeded(seed::task_board()));
    let today = Local::now().date_naive();

    let (month, set_month) = create_signal(CalendarMonth::containing(today));
    let (filter, set_filter) = create_signal(StatusFilter::All);
    let (selected, set_selected) = create_signal(None::<NaiveDate>);
    let (editor, set_editor) = create_signal(None::<TaskEditor>);

    let open_add = move |_| {
        let date = selected.get_untracked().unwrap_or(today);
        set_editor.set(Some(TaskEditor {
            id: None,
            draft: TaskDraft::on(date),
        }));
    };

    let open_edit = move |task: Task| {
        set_editor.set(Some(TaskEditor {
            id: Some(task.id),
            draft: TaskDraft::from(&task),
        }));
    };

    view! {
        <div class="min-h-screen bg-zinc-50 p-4 md:p-8 text-gray-800">
            // Header
            <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4 mb-8">
                <div class="flex items-center gap-3">
                    <button
                        on:click=move |_| set_month.update(|m| *m = m.previous())
                        class="px-3 py-1 rounded-lg bg-gray-200 hover:bg-gray-300"
                    >
                        "‹"
                    </button>
                    <h1 class="text-3xl font-bold text-zinc-900">{move || month.get().title()}</h1>
                    <button
                        on:click=move |_| set_month.update(|m| *m = m.next())
                        class="px-3 py-1 rounded-lg bg-gray-200 hover:bg-gray-300"
                    >
                        "›"
                    </button>
                </div>
                <button
                    on:click=open_add
                    class="flex items-center gap-2 bg-green-600 hover:bg-green-700 text-white px-5 py-2 rounded-xl font-semibold"
                >
                    "+ Add Task"
                </button>
            </div>

            // Filters
            <div class="flex gap-2 mb-6">
                {StatusFilter::all()
                    .iter()
                    .map(|&f| view! {
                        <button
                            on:click=move |_| set_filter.set(f)
                            class=move || {
                                let base = "px-4 py-2 rounded-full font-medium text-sm transition";
                                if filter.get() == f {
                                    format!("{} bg-green-600 text-white", base)
                                } else {
                                    format!("{} bg-gray-200 hover:bg-gray-300", base)
                                }
                            }
                        >
                            {f.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            // Calendar
            <div class="grid grid-cols-7 gap-2 md:gap-4">
                {WEEKDAYS
                    .iter()
                    .map(|day| view! {
                        <div class="text-center font-medium text-zinc-500 text-sm">{*day}</div>
                    })
                    .collect_view()}

                {move || {
                    board.with(|b| b.calendar(month.get(), filter.get()))
                        .into_iter()
                        .map(|cell| view! {
                            <DayCell cell=cell today=today selected=selected on_select=set_selected />
                        })
                        .collect_view()
                }}
            </div>

            // Selected day
            {move || selected.get().map(|date| {
                let tasks: Vec<Task> = board.with(|b| {
                    b.tasks_on(date, filter.get()).into_iter().cloned().collect()
                });
                view! {
                    <div class="bg-white mt-8 p-6 rounded-xl shadow-lg">
                        <div class="flex justify-between items-center mb-4">
                            <h2 class="text-xl font-bold text-zinc-900">
                                "Tasks on "{date.format("%a %b %d %Y").to_string()}
                            </h2>
                            <button
                                on:click=move |_| set_selected.set(None)
                                class="text-gray-400 hover:text-gray-600"
                            >
                                "✕"
                            </button>
                        </div>
                        {if tasks.is_empty() {
                            view! {
                                <p class="text-gray-500 text-center py-8">"No tasks for this day."</p>
                            }.into_view()
                        } else {
                            view! {
                                <ul class="space-y-3">
                                    {tasks.into_iter().map(|task| {
                                        let (status_class, check) = status_style(task.status);
                                        let title = task.title.clone();
                                        let status = task.status;
                                        view! {
                                            <li
                                                on:click=move |_| open_edit(task.clone())
                                                class="flex justify-between items-center bg-gray-100 p-3 rounded-lg hover:bg-green-100 cursor-pointer"
                                            >
                                                <span class="font-medium text-zinc-800 truncate max-w-[70%]">{title}</span>
                                                <span class=format!("flex items-center gap-2 text-sm font-semibold {}", status_class)>
                                                    {status.as_str()}" "{check}
                                                </span>
                                            </li>
                                        }
                                    }).collect_view()}
                                </ul>
                            }.into_view()
                        }}
                    </div>
                }
            })}

            // Add/edit dialog
            {move || editor.get().map(|ed| view! {
                <TaskModal
                    editor=ed
                    board=board
                    on_saved=move |date| set_selected.set(Some(date))
                    on_close=move || set_editor.set(None)
                />
            })}
        </div>
    }
}

/// One cell of the month grid
#[component]
fn DayCell(
    cell: CalendarCell,
    today: NaiveDate,
    selected: ReadSignal<Option<NaiveDate>>,
    on_select: WriteSignal<Option<NaiveDate>>,
) -> impl IntoView {
    let CalendarCell::Day { date, tasks } = cell else {
        return view! { <div /> }.into_view();
    };

    let border = if date == today {
        "border-green-500 bg-green-50"
    } else {
        "border-gray-200 bg-white"
    };
    let overflow = overflow_label(tasks.len());

    view! {
        <div
            on:click=move |_| on_select.set(Some(date))
            class=move || {
                let ring = if selected.get() == Some(date) { "ring-2 ring-green-500" } else { "" };
                format!(
                    "min-h-[80px] p-2 rounded-xl border cursor-pointer flex flex-col justify-between {} {}",
                    border, ring
                )
            }
        >
            <span class="text-sm font-semibold text-zinc-700">{date.format("%-d").to_string()}</span>
            <div class="flex flex-col gap-1 mt-1">
                {tasks.into_iter().take(MAX_CHIPS).map(|task| {
                    let chip = match task.status {
                        TaskStatus::Completed => "bg-green-200 text-green-800",
                        TaskStatus::Pending => "bg-yellow-200 text-yellow-900",
                    };
                    view! {
                        <span class=format!("text-[11px] px-2 py-1 rounded-full truncate {}", chip)>
                            {task.title}
                        </span>
                    }
                }).collect_view()}
                {overflow.map(|label| view! {
                    <span class="text-[11px] text-gray-400">{label}</span>
                })}
            </div>
        </div>
    }
    .into_view()
}

/// Add/edit task dialog
#[component]
fn TaskModal(
    editor: TaskEditor,
    board: RwSignal<TaskBoard>,
    on_saved: impl Fn(NaiveDate) + 'static + Clone,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let TaskEditor { id, draft } = editor;

    let (title, set_title) = create_signal(draft.title);
    let (date, set_date) = create_signal(draft.date);
    let (status, set_status) = create_signal(draft.status);

    let on_close_for_submit = on_close.clone();
    let on_close_for_cancel = on_close.clone();
    let on_close_for_delete = on_close.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = TaskDraft {
            title: title.get_untracked(),
            date: date.get_untracked(),
            status: status.get_untracked(),
        };

        let saved = commit(board, |b| match id {
            Some(id) => b.edit(id, &draft).map(|_| ()),
            None => b.add(&draft).map(|_| ()),
        });

        if saved.is_some() {
            on_close_for_submit();
            if let Ok(day) = NaiveDate::parse_from_str(draft.date.trim(), DATE_FORMAT) {
                on_saved(day);
            }
        }
    };

    let heading = if id.is_some() { "Edit Task" } else { "Add New Task" };
    let action = if id.is_some() { "Update" } else { "Add" };

    view! {
        <Modal title=heading on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                <input
                    type="text"
                    placeholder="Task title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    class="w-full border border-gray-300 rounded-lg px-4 py-2 focus:outline-none focus:ring-2 focus:ring-green-400"
                />
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                    class="w-full border border-gray-300 rounded-lg px-4 py-2 focus:outline-none focus:ring-2 focus:ring-green-400"
                />
                <select
                    prop:value=move || status.get().as_str()
                    on:change=move |ev| {
                        if let Ok(parsed) = event_target_value(&ev).parse::<TaskStatus>() {
                            set_status.set(parsed);
                        }
                    }
                    class="w-full border border-gray-300 rounded-lg px-4 py-2 focus:outline-none focus:ring-2 focus:ring-green-400"
                >
                    {TaskStatus::all()
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect_view()}
                </select>
                <div class="flex justify-end gap-3">
                    {id.map(|id| view! {
                        <button
                            type="button"
                            on:click=move |_| {
                                board.update(|b| {
                                    b.delete(id);
                                });
                                on_close_for_delete();
                            }
                            class="mr-auto px-4 py-2 text-red-600 hover:bg-red-50 rounded-lg"
                        >
                            "Delete"
                        </button>
                    })}
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

fn status_style(status: TaskStatus) -> (&'static str, &'static str) {
    match status {
        TaskStatus::Completed => ("text-green-600", "✔"),
        TaskStatus::Pending => ("text-yellow-600", ""),
    }
}

/// "+N more" once a day has more tasks than fit in a cell
fn overflow_label(count: usize) -> Option<String> {
    (count > MAX_CHIPS).then(|| format!("+{} more", count - MAX_CHIPS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_label() {
        assert_eq!(overflow_label(0), None);
        assert_eq!(overflow_label(2), None);
        assert_eq!(overflow_label(3).as_deref(), Some("+1 more"));
        assert_eq!(overflow_label(7).as_deref(), Some("+5 more"));
    }

    #[test]
    fn test_status_style() {
        assert_eq!(status_style(TaskStatus::Completed).1, "✔");
        assert_eq!(status_style(TaskStatus::Pending).0, "text-yellow-600");
    }
}
