use iced::font::Weight;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Font, Shadow, Theme, Vector};

// Night Sky Colors
pub const NIGHT_BG: Color = Color::from_rgb(0.102, 0.067, 0.161); // #1A1129
pub const MYSTIC_FILL: Color = Color::from_rgb(0.176, 0.118, 0.271); // #2D1E45
pub const MYSTIC_HOVER: Color = Color::from_rgb(0.290, 0.196, 0.435); // #4A326F
pub const MYSTIC_BORDER: Color = Color::from_rgb(0.224, 0.153, 0.349); // #392759
pub const STAR_TEXT: Color = Color::WHITE;

pub const CALLIGRAPHY: Font = Font::with_name("Lucida Calligraphy");
pub const CALLIGRAPHY_BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::with_name("Lucida Calligraphy")
};

pub struct MysticButtonStyle;
impl button::StyleSheet for MysticButtonStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(MYSTIC_FILL)),
            text_color: STAR_TEXT,
            border: Border {
                radius: 6.0.into(),
                width: 1.0,
                color: MYSTIC_BORDER,
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            ..Default::default()
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(MYSTIC_HOVER)),
            ..self.active(style)
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.hovered(style)
    }
    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: Color::from_rgba(1.0, 1.0, 1.0, 0.5),
            ..self.active(style)
        }
    }
}

pub struct ControlStripStyle;
impl container::StyleSheet for ControlStripStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(NIGHT_BG)),
            border: Border {
                width: 1.0,
                color: MYSTIC_BORDER,
                ..Default::default()
            },
            text_color: Some(STAR_TEXT),
            ..Default::default()
        }
    }
}

/// Stand-in for a background image that failed to load.
pub struct BlankCanvasStyle;
impl container::StyleSheet for BlankCanvasStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(MYSTIC_FILL)),
            text_color: Some(STAR_TEXT),
            ..Default::default()
        }
    }
}
