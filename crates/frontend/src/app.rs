use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_document::ui::generate::GeneratePage;
use crate::shared::config::AppConfig;

#[component]
pub fn App() -> impl IntoView {
    // Resolved once; downstream components take it as an explicit prop.
    let config = AppConfig::from_env();

    view! {
        <ToasterProvider>
            <GeneratePage config=config />
        </ToasterProvider>
    }
}
