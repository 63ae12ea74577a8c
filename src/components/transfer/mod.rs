//! Transfer component: two lists with move buttons between them.
//!
//! Membership is driven by `target_keys`; everything else sits in the
//! source list. Both lists render in data order.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use nebula_core::transfer::{self, CheckAll, Direction, ListSide, TransferItem, TransferState};

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::controlled::Controlled;
use crate::components::icons as ic;
use crate::utils::unique_id;

stylance::import_crate_style!(css, "src/components/transfer/transfer.module.css");

/// Payload of `on_change`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferChange {
    pub target_keys: Vec<String>,
    pub direction: Direction,
    pub moved: Vec<String>,
}

/// Payload of `on_select_change`, split by list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionChange {
    pub source_selected: Vec<String>,
    pub target_selected: Vec<String>,
}

#[derive(Clone, Copy)]
struct TransferCtx {
    data: Signal<Vec<TransferItem>>,
    target: Controlled<Vec<String>>,
    selected: Controlled<Vec<String>>,
    disabled: Signal<bool>,
    on_change: Option<Callback<TransferChange>>,
    on_select_change: Option<Callback<SelectionChange>>,
}

impl TransferCtx {
    fn snapshot(&self) -> TransferState {
        TransferState::new(self.target.get_untracked(), self.selected.get_untracked())
    }

    fn tracked_state(&self) -> TransferState {
        TransferState::new(self.target.get(), self.selected.get())
    }

    fn set_selection(&self, next: Vec<String>) {
        if next == self.selected.get_untracked() {
            return;
        }
        self.selected.set(next.clone());
        if let Some(cb) = self.on_select_change {
            let state = TransferState::new(self.target.get_untracked(), next);
            let change = self.data.with_untracked(|items| SelectionChange {
                source_selected: transfer::side_selection(items, &state, ListSide::Source),
                target_selected: transfer::side_selection(items, &state, ListSide::Target),
            });
            cb.run(change);
        }
    }

    fn toggle(&self, key: &str) {
        if self.disabled.get_untracked() {
            return;
        }
        let state = self.snapshot();
        let next = self
            .data
            .with_untracked(|items| transfer::toggle_item(items, &state, key));
        self.set_selection(next);
    }

    fn select_all(&self, side: ListSide, select: bool, visible: &[String]) {
        if self.disabled.get_untracked() {
            return;
        }
        let state = self.snapshot();
        let next = self.data.with_untracked(|items| {
            transfer::select_all(items, &state, side, select, Some(visible))
        });
        self.set_selection(next);
    }

    fn move_items(&self, direction: Direction) {
        if self.disabled.get_untracked() {
            return;
        }
        let state = self.snapshot();
        let outcome = self
            .data
            .with_untracked(|items| transfer::move_selected(items, &state, direction));
        if outcome.moved.is_empty() {
            return;
        }
        self.target.set(outcome.state.target_keys.clone());
        self.selected.set(outcome.state.selected_keys);
        if let Some(cb) = self.on_change {
            cb.run(TransferChange {
                target_keys: outcome.state.target_keys,
                direction,
                moved: outcome.moved,
            });
        }
    }

    fn can_move(&self, direction: Direction) -> bool {
        let state = self.tracked_state();
        !self.disabled.get() && self.data.with(|items| transfer::can_move(items, &state, direction))
    }
}

/// Dual list for moving items between a source and a target set.
///
/// Pass `target_keys` and/or `selected_keys` to control them; otherwise the
/// `default_*` values seed internal state.
#[component]
pub fn Transfer(
    #[prop(into)] data: Signal<Vec<TransferItem>>,
    #[prop(optional, into)] target_keys: Option<Signal<Vec<String>>>,
    #[prop(optional)] default_target_keys: Vec<String>,
    #[prop(optional, into)] selected_keys: Option<Signal<Vec<String>>>,
    #[prop(optional)] default_selected_keys: Vec<String>,
    /// List headings, source first.
    #[prop(default = ("Source".to_string(), "Target".to_string()))]
    titles: (String, String),
    /// Accessible labels of the move buttons, to-target first.
    #[prop(default = ("Move to target".to_string(), "Move to source".to_string()))]
    operations: (String, String),
    #[prop(optional)] show_search: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] on_change: Option<Callback<TransferChange>>,
    #[prop(optional, into)] on_select_change: Option<Callback<SelectionChange>>,
) -> impl IntoView {
    let ctx = TransferCtx {
        data,
        target: Controlled::new(target_keys, default_target_keys),
        selected: Controlled::new(selected_keys, default_selected_keys),
        disabled,
        on_change,
        on_select_change,
    };
    let (source_title, target_title) = titles;
    let (to_target_label, to_source_label) = operations;

    view! {
        <div class=css::transfer>
            <TransferList ctx=ctx side=ListSide::Source title=source_title show_search=show_search />
            <div class=css::operations>
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    aria_label=to_target_label
                    disabled=Signal::derive(move || !ctx.can_move(Direction::ToTarget))
                    on_click=move |_: ev::MouseEvent| ctx.move_items(Direction::ToTarget)
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </Button>
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    aria_label=to_source_label
                    disabled=Signal::derive(move || !ctx.can_move(Direction::ToSource))
                    on_click=move |_: ev::MouseEvent| ctx.move_items(Direction::ToSource)
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </Button>
            </div>
            <TransferList ctx=ctx side=ListSide::Target title=target_title show_search=show_search />
        </div>
    }
}

#[component]
fn TransferList(
    ctx: TransferCtx,
    side: ListSide,
    title: String,
    show_search: bool,
) -> impl IntoView {
    let list_id = unique_id("transfer-list");
    let query = RwSignal::new(String::new());

    let visible = Memo::new(move |_| {
        let state = ctx.tracked_state();
        query.with(|q| {
            ctx.data.with(|items| {
                let on_side = transfer::side_items(items, &state, side);
                transfer::filter_items(&on_side, q)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<TransferItem>>()
            })
        })
    });
    let visible_keys = Memo::new(move |_| {
        visible.with(|v| v.iter().map(|i| i.key.clone()).collect::<Vec<_>>())
    });

    // Scoped to the filtered rows so the header flips exactly what it shows.
    let check_all = Memo::new(move |_| {
        let state = ctx.tracked_state();
        visible_keys.with(|keys| {
            ctx.data
                .with(|items| transfer::side_check_state(items, &state, side, Some(keys)))
        })
    });

    let counts = move || {
        let state = ctx.tracked_state();
        ctx.data.with(|items| {
            let total = transfer::side_items(items, &state, side).len();
            let selected = transfer::side_selection(items, &state, side).len();
            if selected == 0 {
                format!("{} items", total)
            } else {
                format!("{}/{} items", selected, total)
            }
        })
    };

    let on_header_change = move |_| {
        let select = check_all.get_untracked() != CheckAll::All;
        visible_keys.with_untracked(|keys| ctx.select_all(side, select, keys));
    };

    view! {
        <section class=css::list aria-labelledby=format!("{}-title", list_id)>
            <header class=css::header>
                <input
                    type="checkbox"
                    class=css::checkbox
                    aria-label=format!("Select all in {}", title)
                    disabled=move || ctx.disabled.get()
                    prop:checked=move || check_all.get() == CheckAll::All
                    prop:indeterminate=move || check_all.get() == CheckAll::Partial
                    on:change=on_header_change
                />
                <span class=css::title id=format!("{}-title", list_id)>{title.clone()}</span>
                <span class=css::count>{counts}</span>
            </header>
            {show_search.then(|| view! {
                <label class=css::search>
                    <Icon icon=ic::SEARCH />
                    <input
                        type="search"
                        placeholder="Search"
                        aria-label=format!("Filter {}", title)
                        prop:value=move || query.get()
                        on:input=move |e| query.set(event_target_value(&e))
                    />
                </label>
            })}
            <ul class=css::items role="listbox" aria-multiselectable="true">
                <For
                    each=move || visible.get()
                    key=|item| item.key.clone()
                    children=move |item| view! { <TransferRow ctx=ctx item=item /> }
                />
            </ul>
            <Show when=move || visible.with(|v| v.is_empty())>
                <div class=css::empty>"No data"</div>
            </Show>
        </section>
    }
}

#[component]
fn TransferRow(ctx: TransferCtx, item: TransferItem) -> impl IntoView {
    let key = StoredValue::new(item.key.clone());
    let is_selected = move || key.with_value(|k| ctx.selected.with(|s| s.contains(k)));
    let item_disabled = item.disabled;
    let inert = move || item_disabled || ctx.disabled.get();

    let on_keydown = move |e: ev::KeyboardEvent| {
        if e.key() == " " || e.key() == "Enter" {
            e.prevent_default();
            key.with_value(|k| ctx.toggle(k));
        }
    };

    view! {
        <li
            class=move || {
                let mut classes = vec![css::item];
                if is_selected() {
                    classes.push(css::selected);
                }
                if inert() {
                    classes.push(css::disabled);
                }
                classes.join(" ")
            }
            role="option"
            aria-selected=move || if is_selected() { "true" } else { "false" }
            aria-disabled=move || if inert() { "true" } else { "false" }
            tabindex=move || if inert() { "-1" } else { "0" }
            on:click=move |_| key.with_value(|k| ctx.toggle(k))
            on:keydown=on_keydown
        >
            <input
                type="checkbox"
                class=css::checkbox
                tabindex="-1"
                aria-hidden="true"
                disabled=inert
                prop:checked=is_selected
            />
            <span class=css::itemText>
                <span>{item.title}</span>
                {item.description.map(|d| view! { <span class=css::description>{d}</span> })}
            </span>
        </li>
    }
}
