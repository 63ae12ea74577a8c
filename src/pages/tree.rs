use leptos::{ev, prelude::*};
use nebula_core::tree::{self, KeySet, TreeIndex, TreeNode, key_set};

use super::{Demo, PageHeader, Readout, css, format_keys};
use crate::app::AppContext;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::code_block::CodeBlock;
use crate::components::tree_view::{CheckEvent, ExpandEvent, TreeView};
use crate::config::DEMO_TREE_JSON;
use crate::utils::dom;

const USAGE: &str = r#"view! {
    <TreeView
        data=nodes
        checkable=true
        default_checked_keys=key_set(["button"])
        on_check=move |e: CheckEvent| log(e.checked_keys)
    />
}"#;

/// Bundled demo forest. Malformed JSON yields an empty tree.
fn demo_tree() -> Vec<TreeNode> {
    serde_json::from_str(DEMO_TREE_JSON).unwrap_or_else(|e| {
        dom::error(&format!("demo tree ignored: {}", e));
        Vec::new()
    })
}

#[component]
pub fn TreePage(ctx: AppContext) -> impl IntoView {
    let data = Signal::stored(demo_tree());

    let checked = RwSignal::new(KeySet::new());
    let half_checked = RwSignal::new(KeySet::new());
    let on_check = move |e: CheckEvent| {
        checked.set(e.checked_keys);
        half_checked.set(e.half_checked_keys);
    };

    let strict_checked = RwSignal::new(KeySet::new());

    // Controlled expansion, driven by the buttons below.
    let expanded = RwSignal::new(key_set(["src"]));
    let expand_all = move |_: ev::MouseEvent| {
        let all = data.with(|nodes| tree::expand_all(&TreeIndex::new(nodes)));
        expanded.set(all);
    };
    let collapse_all = move |_: ev::MouseEvent| expanded.set(KeySet::new());

    view! {
        <PageHeader
            title="TreeView"
            lead="Nested data with selection, a check cascade and search. Use the arrow keys to move, Enter or Space to act."
        />
        <Demo
            title="Check cascade"
            caption="Checking a folder checks everything enabled below it. Partly checked folders show a mixed state."
        >
            <TreeView data=data checkable=true selectable=false on_check=on_check aria_label="Project files" />
            <Readout label="checked" value=Signal::derive(move || checked.with(|k| format_keys(k))) />
            <Readout label="half checked" value=Signal::derive(move || half_checked.with(|k| format_keys(k))) />
        </Demo>
        <Demo title="Strict checking" caption="Each node is checked on its own.">
            <TreeView
                data=data
                checkable=true
                check_strictly=true
                default_expand_all=true
                checked_keys=strict_checked
                on_check=move |e: CheckEvent| strict_checked.set(e.checked_keys)
                aria_label="Project files, strict"
            />
        </Demo>
        <Demo title="Search" caption="Matches stay visible together with their ancestors.">
            <TreeView data=data show_search=true multiple=true aria_label="Searchable files" />
        </Demo>
        <Demo title="Controlled expansion">
            <div class=css::row>
                <Button size=ButtonSize::Sm variant=ButtonVariant::Outline on_click=expand_all>
                    "Expand all"
                </Button>
                <Button size=ButtonSize::Sm variant=ButtonVariant::Outline on_click=collapse_all>
                    "Collapse all"
                </Button>
            </div>
            <TreeView
                data=data
                expanded_keys=expanded
                on_expand=move |e: ExpandEvent| expanded.set(e.expanded_keys)
                aria_label="Controlled tree"
            />
            <Readout label="expanded" value=Signal::derive(move || expanded.with(|k| format_keys(k))) />
        </Demo>
        <Demo title="Usage">
            <CodeBlock ctx=ctx code=USAGE language="rust" />
        </Demo>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_tree_is_valid() {
        let nodes = demo_tree();
        assert!(!nodes.is_empty());
        assert!(TreeIndex::try_new(&nodes).is_ok());
    }
}
