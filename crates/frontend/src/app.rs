use crate::dashboards::SalesMetricsDashboard;
use crate::shared::config::Config;
use crate::shared::data::DataProvider;
use crate::shared::settings::SettingsProvider;
use leptos::prelude::*;

#[component]
pub fn App(config: Config) -> impl IntoView {
    // Settings first: the data views read language and currency from it.
    view! {
        <SettingsProvider>
            <DataProvider seed=config.seed>
                <SalesMetricsDashboard />
            </DataProvider>
        </SettingsProvider>
    }
}
