use shared::Skill;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SkillRowProps {
    pub skill: Skill,
}

/// Icon, name, percentage and a bar filled to `progress/100`.
/// Progress is rendered as given, even outside 0-100.
#[function_component(SkillRow)]
pub fn skill_row(props: &SkillRowProps) -> Html {
    let skill = &props.skill;
    let fill_style = format!("width: {:.1}%;", skill.fill_fraction() * 100.0);

    html! {
        <div class="skill-row">
            <i class={format!("skill-icon {}", skill.icon.css_class())} aria-hidden="true"></i>
            <div class="skill-body">
                <div class="skill-header">
                    <span class="skill-name">{ &skill.name }</span>
                    <span class="skill-progress">{ skill.progress_label() }</span>
                </div>
                <div
                    class="progress-track"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow={skill.progress.to_string()}
                >
                    <div class="progress-fill" style={fill_style}></div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use shared::IconKind;
    use yew::ServerRenderer;

    async fn render(skill: Skill) -> String {
        ServerRenderer::<SkillRow>::with_props(move || SkillRowProps { skill })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn test_row_shows_label_and_fill() {
        let html = render(Skill::new("Video Editing", 90, IconKind::Video)).await;
        assert!(html.contains(r#"<span class="skill-name">Video Editing</span>"#));
        assert!(html.contains(r#"<span class="skill-progress">90%</span>"#));
        assert!(html.contains(r#"aria-valuenow="90""#));
        assert!(html.contains(r#"style="width: 90.0%;""#));
        assert!(html.contains("fas fa-video"));
    }

    #[tokio::test]
    async fn test_row_does_not_clamp() {
        let html = render(Skill::new("Too Much", 120, IconKind::Code)).await;
        assert!(html.contains("120%"));
        assert!(html.contains(r#"style="width: 120.0%;""#));
    }
}
