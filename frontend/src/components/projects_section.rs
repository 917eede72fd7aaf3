use shared::{Motion, Project, Section};
use yew::prelude::*;

use super::motion::Animated;

#[derive(Properties, PartialEq)]
pub struct ProjectsSectionProps {
    pub projects: Vec<Project>,
}

#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsSectionProps) -> Html {
    html! {
        <section id={Section::Projects.id()} class="section">
            <h2 class="section-title">{"Featured Projects"}</h2>
            <div class="project-grid">
                { for props.projects.iter().enumerate().map(|(index, project)| html! {
                    <Animated motion={Motion::project_card(index)}>
                        <article class="card project-card">
                            <header class="card-header">
                                <h3 class="card-title">{ &project.title }</h3>
                            </header>
                            <div class="card-content">
                                <img
                                    class="project-image"
                                    src={project.image.clone()}
                                    alt={project.title.clone()}
                                    loading="lazy"
                                />
                                <p class="card-description">{ &project.description }</p>
                            </div>
                        </article>
                    </Animated>
                }) }
            </div>
        </section>
    }
}
