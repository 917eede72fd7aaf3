use shared::{HeroContent, Motion, Section, Skill};
use yew::prelude::*;

use super::motion::Animated;
use super::scene_canvas::SceneCanvas;
use super::skill_row::SkillRow;

#[derive(Properties, PartialEq)]
pub struct AboutSectionProps {
    pub hero: HeroContent,
    pub skills: Vec<Skill>,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutSectionProps) -> Html {
    html! {
        <section id={Section::About.id()} class="section about-section">
            <div class="about-grid">
                <div class="about-copy">
                    <Animated motion={Motion::about_step(0)}>
                        <h1 class="hero-heading">{ &props.hero.heading }</h1>
                    </Animated>
                    <Animated motion={Motion::about_step(1)}>
                        <p class="hero-intro">{ &props.hero.intro }</p>
                    </Animated>
                    <Animated motion={Motion::about_step(2)} class="skill-list">
                        { for props.skills.iter().map(|skill| html! {
                            <SkillRow skill={skill.clone()} />
                        }) }
                    </Animated>
                </div>
                <div class="scene-container">
                    <SceneCanvas label={props.hero.scene_label.clone()} />
                </div>
            </div>
        </section>
    }
}
