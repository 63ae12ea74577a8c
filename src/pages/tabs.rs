use leptos::prelude::*;

use super::{Demo, PageHeader, Readout};
use crate::app::AppContext;
use crate::components::code_block::CodeBlock;
use crate::components::tabs::{Orientation, Tab, TabList, TabPanel, Tabs};

const USAGE: &str = r#"view! {
    <Tabs default_value="overview">
        <TabList aria_label="Sections">
            <Tab value="overview">"Overview"</Tab>
            <Tab value="api">"API"</Tab>
        </TabList>
        <TabPanel value="overview">"..."</TabPanel>
        <TabPanel value="api">"..."</TabPanel>
    </Tabs>
}"#;

#[component]
pub fn TabsPage(ctx: AppContext) -> impl IntoView {
    let active = RwSignal::new("profile".to_string());

    view! {
        <PageHeader
            title="Tabs"
            lead="Compound tabs. Arrow keys move between enabled tabs and wrap; Home and End jump to the ends."
        />
        <Demo title="Uncontrolled" caption="The first enabled tab is active until one is picked.">
            <Tabs>
                <TabList aria_label="Project">
                    <Tab value="readme">"Readme"</Tab>
                    <Tab value="issues">"Issues"</Tab>
                    <Tab value="archived" disabled=true>"Archived"</Tab>
                    <Tab value="settings">"Settings"</Tab>
                </TabList>
                <TabPanel value="readme">"Project overview and setup notes."</TabPanel>
                <TabPanel value="issues">"No open issues."</TabPanel>
                <TabPanel value="archived">"Nothing here."</TabPanel>
                <TabPanel value="settings">"Repository settings."</TabPanel>
            </Tabs>
        </Demo>
        <Demo title="Controlled, vertical" caption="The caller owns the active value.">
            <Tabs
                value=active
                on_change=move |value: String| active.set(value)
                orientation=Orientation::Vertical
            >
                <TabList aria_label="Account">
                    <Tab value="profile">"Profile"</Tab>
                    <Tab value="security">"Security"</Tab>
                    <Tab value="billing">"Billing"</Tab>
                </TabList>
                <TabPanel value="profile">"Name, avatar and bio."</TabPanel>
                <TabPanel value="security">"Passwords and two-factor authentication."</TabPanel>
                <TabPanel value="billing">"Plan and invoices."</TabPanel>
            </Tabs>
            <Readout label="value" value=Signal::derive(move || active.get()) />
        </Demo>
        <Demo title="Usage">
            <CodeBlock ctx=ctx code=USAGE language="rust" />
        </Demo>
    }
}
