use shared::Section;
use yew::prelude::*;

/// Sticky navigation bar linking to each section.
#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <div class="container">
                <nav class="site-nav">
                    { for Section::ALL.into_iter().map(|section| html! {
                        <a class="nav-link" href={section.href()}>{ section.label() }</a>
                    }) }
                </nav>
            </div>
        </header>
    }
}
