use shared::{Section, ServiceTab};
use yew::prelude::*;

use crate::hooks::{use_tab_selection, UseTabSelectionResult};

#[derive(Properties, PartialEq)]
pub struct ServicesSectionProps {
    #[prop_or_default]
    pub initial_tab: ServiceTab,
}

/// Tab panel over the four services. Only the active tab's card is in
/// the DOM.
#[function_component(ServicesSection)]
pub fn services_section(props: &ServicesSectionProps) -> Html {
    let UseTabSelectionResult { selection, select } = use_tab_selection(props.initial_tab);
    let active = selection.active();
    let card = active.card();

    html! {
        <section id={Section::Services.id()} class="section">
            <h2 class="section-title">{"Services"}</h2>
            <div class="tabs">
                <div class="tab-list" role="tablist">
                    { for ServiceTab::ALL.into_iter().map(|tab| {
                        let is_active = selection.is_active(tab);
                        let onclick = {
                            let select = select.clone();
                            Callback::from(move |_: MouseEvent| select.emit(tab))
                        };
                        html! {
                            <button
                                type="button"
                                role="tab"
                                id={format!("tab-{}", tab.slug())}
                                class={classes!("tab-trigger", is_active.then_some("active"))}
                                aria-selected={is_active.to_string()}
                                aria-controls={format!("panel-{}", tab.slug())}
                                {onclick}
                            >
                                { tab.label() }
                            </button>
                        }
                    }) }
                </div>
                <div
                    class="tab-panel"
                    role="tabpanel"
                    id={format!("panel-{}", active.slug())}
                    aria-labelledby={format!("tab-{}", active.slug())}
                >
                    <article class="card service-card">
                        <header class="card-header">
                            <h3 class="card-title">{ card.title }</h3>
                            <p class="card-description">{ card.description }</p>
                        </header>
                        <div class="card-content">
                            <p>{ card.body }</p>
                        </div>
                    </article>
                </div>
            </div>
        </section>
    }
}
