use shared::{Client, Motion, Section};
use yew::prelude::*;

use super::motion::Animated;

#[derive(Properties, PartialEq)]
pub struct ClientsSectionProps {
    pub clients: Vec<Client>,
}

#[function_component(ClientsSection)]
pub fn clients_section(props: &ClientsSectionProps) -> Html {
    html! {
        <section id={Section::Clients.id()} class="section">
            <h2 class="section-title">{"Clients"}</h2>
            <div class="client-grid">
                { for props.clients.iter().enumerate().map(|(index, client)| html! {
                    <Animated motion={Motion::client_card(index)}>
                        <div class="card client-card">
                            <div class="card-content">
                                <p class="client-name">{ client.name() }</p>
                            </div>
                        </div>
                    </Animated>
                }) }
            </div>
        </section>
    }
}
