use leptos::prelude::*;
use nebula_core::transfer::{Direction, TransferItem};

use super::{Demo, PageHeader, Readout, format_keys};
use crate::app::AppContext;
use crate::components::transfer::{SelectionChange, Transfer, TransferChange};

fn demo_items() -> Vec<TransferItem> {
    [
        ("read", "Read", "View repositories and issues"),
        ("write", "Write", "Push commits and open pull requests"),
        ("triage", "Triage", "Label and close issues"),
        ("deploy", "Deploy", "Trigger production releases"),
        ("billing", "Billing", "Manage plans and invoices"),
        ("audit", "Audit log", "Review organization events"),
    ]
    .into_iter()
    .map(|(key, title, description)| TransferItem::new(key, title).with_description(description))
    .chain([TransferItem::new("owner", "Owner").with_description("Reserved").disabled()])
    .collect()
}

fn describe(change: &TransferChange) -> String {
    let direction = match change.direction {
        Direction::ToTarget => "granted",
        Direction::ToSource => "revoked",
    };
    format!("{} {}", direction, change.moved.join(", "))
}

#[component]
pub fn TransferPage(ctx: AppContext) -> impl IntoView {
    let data = Signal::stored(demo_items());

    let target = RwSignal::new(vec!["read".to_string()]);
    let selection = RwSignal::new(SelectionChange::default());

    let on_change = move |change: TransferChange| {
        ctx.toasts.info(describe(&change));
        target.set(change.target_keys);
    };

    view! {
        <PageHeader
            title="Transfer"
            lead="Two lists with a shared item set. Select items on one side and move them across."
        />
        <Demo title="Basic" caption="Disabled items cannot be selected or moved.">
            <Transfer data=data titles=("Available".to_string(), "Granted".to_string()) />
        </Demo>
        <Demo title="Controlled with search" caption="The caller owns the target keys.">
            <Transfer
                data=data
                target_keys=target
                show_search=true
                titles=("Available".to_string(), "Granted".to_string())
                on_change=on_change
                on_select_change=move |change: SelectionChange| selection.set(change)
            />
            <Readout label="target" value=Signal::derive(move || target.with(|t| format_keys(t))) />
            <Readout
                label="selected"
                value=Signal::derive(move || selection.with(|s| {
                    format!("{} / {}", format_keys(&s.source_selected), format_keys(&s.target_selected))
                }))
            />
        </Demo>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_change() {
        let change = TransferChange {
            target_keys: vec!["read".into(), "write".into()],
            direction: Direction::ToTarget,
            moved: vec!["write".into()],
        };
        assert_eq!(describe(&change), "granted write");
    }

    #[test]
    fn test_demo_items_have_unique_keys() {
        let items = demo_items();
        let mut keys: Vec<_> = items.iter().map(|i| i.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), items.len());
    }
}
