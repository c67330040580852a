// SPDX-License-Identifier: MPL-2.0
//! Transport overlay view.
//!
//! Renders the video surface placeholder and, while the overlay is visible,
//! a bar with play/pause, the current time, the seek slider, the end time,
//! the quality button and the fullscreen button. The quality list opens
//! above the bar.

use crate::config::QUALITY_LABEL;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::video_player::{Message, PlaybackSession, TransportDisplay};
use iced::widget::{button, container, mouse_area, row, slider, text, Column, Space};
use iced::{Alignment, Element, Length};

/// Slider step in seconds. Commits are truncated to whole seconds.
const SLIDER_STEP_SECS: f64 = 0.1;

/// Renders the full control for `session`.
pub fn view(session: &PlaybackSession) -> Element<'_, Message> {
    let display = session.display();

    let caption = format!("{} | {}", session.state(), session.active_url());
    let surface = mouse_area(
        container(text(caption).size(typography::TITLE_MD))
            .center(Length::Fill)
            .style(styles::surface),
    )
    .on_press(Message::OverlayTapped);

    let mut layout = Column::new().push(surface);
    if display.overlay_visible {
        if display.quality_panel_open {
            layout = layout.push(quality_panel(session));
        }
        layout = layout.push(transport_bar(display));
    }
    layout.width(Length::Fill).height(Length::Fill).into()
}

fn transport_bar(display: &TransportDisplay) -> Element<'_, Message> {
    let play = button(text(display.play_label).size(typography::BODY))
        .on_press(Message::TogglePlayback)
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT));

    let mut bar = row![play].spacing(spacing::XS).align_y(Alignment::Center);

    if let Some(start) = &display.start_label {
        bar = bar.push(text(start.as_str()).size(typography::BODY_SM));
    }

    // Live streams have nothing to seek; keep the trailing buttons right-aligned.
    bar = if display.slider.hidden {
        bar.push(Space::new().width(Length::Fill))
    } else {
        bar.push(
            slider(
                0.0..=display.slider.max,
                display.slider.value,
                Message::SeekPreview,
            )
            .on_release(Message::SeekCommit)
            .step(SLIDER_STEP_SECS)
            .width(Length::Fill),
        )
    };

    bar = bar.push(text(display.end_label.as_str()).size(typography::BODY_SM));

    if display.quality_enabled {
        bar = bar.push(
            button(text(QUALITY_LABEL).size(typography::BODY))
                .on_press(Message::ToggleQualityPanel)
                .padding(spacing::XS)
                .height(Length::Fixed(sizing::BUTTON_HEIGHT)),
        );
    }

    bar = bar.push(
        button(text(display.fullscreen_label).size(typography::BODY))
            .on_press(Message::ToggleFullscreen)
            .padding(spacing::XS)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT)),
    );

    container(bar.padding(spacing::XS))
        .width(Length::Fill)
        .style(styles::transport_bar)
        .into()
}

/// One entry per quality variant, in source order.
fn quality_panel(session: &PlaybackSession) -> Element<'_, Message> {
    let active_url = session.active_url();
    let entries = session.source().qualities.iter().enumerate().fold(
        Column::new().spacing(spacing::XXS),
        |list, (index, quality)| {
            list.push(
                button(text(quality.label.as_str()).size(typography::BODY))
                    .on_press(Message::SelectQuality(index))
                    .width(Length::Fill)
                    .style(styles::quality_entry(quality.url == active_url)),
            )
        },
    );

    container(entries)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::QUALITY_PANEL_WIDTH))
        .style(styles::quality_panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video::{MediaSource, QualityVariant};
    use crate::test_utils::{Harness, MEDIA_URL};
    use crate::video_player::SimulatedMedia;

    #[test]
    fn view_renders_hidden_overlay() {
        let harness = Harness::new(SimulatedMedia::vod(90.0));
        let session = harness.session();
        let _element: Element<'_, Message> = view(&session);
    }

    #[test]
    fn view_renders_open_quality_panel() {
        let harness = Harness::new(SimulatedMedia::vod(90.0));
        let mut session = harness.session_for(MediaSource::with_qualities(
            MEDIA_URL,
            vec![QualityVariant::new("720p", MEDIA_URL)],
        ));
        session.set_controls_visible(true);
        session.toggle_quality_panel();

        let _element: Element<'_, Message> = view(&session);
    }

    #[test]
    fn view_renders_live_overlay() {
        let harness = Harness::new(SimulatedMedia::live());
        let mut session = harness.session();
        session.set_controls_visible(true);

        let _element: Element<'_, Message> = view(&session);
    }
}
