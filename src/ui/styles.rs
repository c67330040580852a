// SPDX-License-Identifier: MPL-2.0
//! Container and button styles for the transport overlay.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, GRAY_400, GRAY_900, PRIMARY_500, WHITE},
    radius,
};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

fn overlay_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

/// Video surface placeholder.
pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(GRAY_900)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Transport bar shown over the bottom of the surface.
pub fn transport_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(overlay_background())),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Floating quality list.
pub fn quality_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(overlay_background())),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Entry of the quality list; the active variant is highlighted.
pub fn quality_entry(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match (active, status) {
            (true, _) => PRIMARY_500,
            (false, button::Status::Hovered | button::Status::Pressed) => GRAY_400,
            (false, _) => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
