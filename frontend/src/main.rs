use std::rc::Rc;

use yew::prelude::*;

use shared::{ContactSubmission, SiteContent};

mod components;
mod hooks;
mod services;

use components::PortfolioPage;
use hooks::use_mount_phase;
use services::{load_site_config, SubmissionBackend, UnwiredBackend};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

/// Renders nothing until the browser has mounted the app, then the page.
#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let phase = use_mount_phase();
    let on_contact = use_callback((), |submission: ContactSubmission, _| {
        UnwiredBackend.submit(&submission)
    });

    if !phase.is_interactive() {
        return html! {};
    }

    html! {
        <PortfolioPage content={props.content.clone()} {on_contact} />
    }
}

fn main() {
    let config = load_site_config();
    yew::Renderer::<App>::with_props(AppProps {
        content: Rc::new(config.content),
    })
    .render();
}
