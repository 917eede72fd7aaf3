use shared::{Entrance, Motion};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnimatedProps {
    pub motion: Motion,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in an element that plays `motion` once on entry.
#[function_component(Animated)]
pub fn animated(props: &AnimatedProps) -> Html {
    html! {
        <div class={classes!("animated", props.class.clone())} style={props.motion.animation_css()}>
            { for props.children.iter() }
        </div>
    }
}

/// Keyframes referenced by every `Animated` element. Rendered once per page.
#[function_component(MotionStyles)]
pub fn motion_styles() -> Html {
    html! {
        <style>{ Entrance::stylesheet() }</style>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn test_animated_carries_inline_animation() {
        let html = ServerRenderer::<Animated>::with_props(|| AnimatedProps {
            motion: Motion::client_card(2),
            class: classes!("client"),
            children: Children::new(vec![html! { <span>{"TechCorp"}</span> }]),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains(r#"class="animated client""#));
        assert!(html.contains("animation: motion-fade-scale 0.50s ease-out 0.20s both;"));
        assert!(html.contains("<span>TechCorp</span>"));
    }

    #[tokio::test]
    async fn test_motion_styles_define_every_entrance() {
        let html = ServerRenderer::<MotionStyles>::new().hydratable(false).render().await;
        for entrance in Entrance::ALL {
            assert!(html.contains(&format!("@keyframes {}", entrance.keyframes_name())));
        }
    }
}
