//! Entrance animations. Each animated element gets an initial style, a
//! target style, a duration and a delay; interpolation is left to CSS.

/// Standard entrance duration in seconds
pub const ENTRANCE_DURATION_S: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionStyle {
    pub opacity: f32,
    pub translate_y_px: f32,
    pub scale: f32,
}

impl MotionStyle {
    pub const VISIBLE: MotionStyle = MotionStyle {
        opacity: 1.0,
        translate_y_px: 0.0,
        scale: 1.0,
    };

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({});",
            self.opacity, self.translate_y_px, self.scale
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entrance {
    /// Fade in while sliding down from 20px above
    FadeDown,
    /// Fade in while sliding up from 20px below
    FadeUp,
    /// Fade in while growing from half size
    FadeScale,
}

impl Entrance {
    pub const ALL: [Entrance; 3] = [Entrance::FadeDown, Entrance::FadeUp, Entrance::FadeScale];

    pub fn initial(&self) -> MotionStyle {
        match self {
            Entrance::FadeDown => MotionStyle {
                opacity: 0.0,
                translate_y_px: -20.0,
                scale: 1.0,
            },
            Entrance::FadeUp => MotionStyle {
                opacity: 0.0,
                translate_y_px: 20.0,
                scale: 1.0,
            },
            Entrance::FadeScale => MotionStyle {
                opacity: 0.0,
                translate_y_px: 0.0,
                scale: 0.5,
            },
        }
    }

    pub fn target(&self) -> MotionStyle {
        MotionStyle::VISIBLE
    }

    pub fn keyframes_name(&self) -> &'static str {
        match self {
            Entrance::FadeDown => "motion-fade-down",
            Entrance::FadeUp => "motion-fade-up",
            Entrance::FadeScale => "motion-fade-scale",
        }
    }

    pub fn keyframes_css(&self) -> String {
        format!(
            "@keyframes {} {{ from {{ {} }} to {{ {} }} }}",
            self.keyframes_name(),
            self.initial().css(),
            self.target().css()
        )
    }

    /// Keyframes for every entrance, one rule per line
    pub fn stylesheet() -> String {
        Entrance::ALL
            .iter()
            .map(Entrance::keyframes_css)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub entrance: Entrance,
    pub duration_s: f32,
    pub delay_s: f32,
}

impl Motion {
    pub fn new(entrance: Entrance, delay_s: f32) -> Self {
        Self {
            entrance,
            duration_s: ENTRANCE_DURATION_S,
            delay_s,
        }
    }

    /// Heading, intro and skills of the about section, 0.2s apart.
    pub fn about_step(step: usize) -> Self {
        Self::new(Entrance::FadeDown, 0.2 * step as f32)
    }

    pub fn project_card(index: usize) -> Self {
        Self::new(Entrance::FadeUp, 0.1 * index as f32)
    }

    pub fn client_card(index: usize) -> Self {
        Self::new(Entrance::FadeScale, 0.1 * index as f32)
    }

    /// Inline declaration; `both` holds the initial style during the delay.
    pub fn animation_css(&self) -> String {
        format!(
            "animation: {} {:.2}s ease-out {:.2}s both;",
            self.entrance.keyframes_name(),
            self.duration_s,
            self.delay_s
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_stagger() {
        let delays: Vec<String> = (0..3).map(|i| format!("{:.2}", Motion::about_step(i).delay_s)).collect();
        assert_eq!(delays, vec!["0.00", "0.20", "0.40"]);
        assert_eq!(Motion::about_step(2).entrance.initial().translate_y_px, -20.0);
        assert_eq!(Motion::about_step(2).duration_s, 0.5);
    }

    #[test]
    fn test_card_stagger() {
        assert_eq!(
            Motion::project_card(3).animation_css(),
            "animation: motion-fade-up 0.50s ease-out 0.30s both;"
        );
        assert_eq!(
            Motion::client_card(0).animation_css(),
            "animation: motion-fade-scale 0.50s ease-out 0.00s both;"
        );
    }

    #[test]
    fn test_entrance_styles() {
        let scale = Entrance::FadeScale.initial();
        assert_eq!(scale.opacity, 0.0);
        assert_eq!(scale.scale, 0.5);
        for entrance in Entrance::ALL {
            assert_eq!(entrance.target(), MotionStyle::VISIBLE);
        }
    }

    #[test]
    fn test_keyframes_css() {
        assert_eq!(
            Entrance::FadeDown.keyframes_css(),
            "@keyframes motion-fade-down { from { opacity: 0; transform: translateY(-20px) scale(1); } to { opacity: 1; transform: translateY(0px) scale(1); } }"
        );
        let sheet = Entrance::stylesheet();
        assert_eq!(sheet.lines().count(), 3);
        assert!(sheet.contains("motion-fade-scale"));
        assert!(sheet.contains("scale(0.5)"));
    }
}
