use std::rc::Rc;

use shared::{ContactError, ContactSubmission, SiteContent};
use yew::prelude::*;

use super::about_section::AboutSection;
use super::clients_section::ClientsSection;
use super::contact_section::ContactSection;
use super::footer::Footer;
use super::header::Header;
use super::motion::MotionStyles;
use super::projects_section::ProjectsSection;
use super::services_section::ServicesSection;

#[derive(Properties, PartialEq)]
pub struct PortfolioPageProps {
    pub content: Rc<SiteContent>,
    pub on_contact: Callback<ContactSubmission, Result<(), ContactError>>,
}

/// The interactive page: header, the five sections in order, footer.
#[function_component(PortfolioPage)]
pub fn portfolio_page(props: &PortfolioPageProps) -> Html {
    let content = &props.content;

    html! {
        <div class="page">
            <MotionStyles />
            <Header />
            <main class="container main">
                <AboutSection hero={content.hero.clone()} skills={content.skills.clone()} />
                <ProjectsSection projects={content.projects.clone()} />
                <ServicesSection />
                <ClientsSection clients={content.clients.clone()} />
                <ContactSection copy={content.contact.clone()} on_submit={props.on_contact.clone()} />
            </main>
            <Footer footer={content.footer.clone()} />
        </div>
    }
}
