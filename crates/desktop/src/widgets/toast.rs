use iced::border::Border;
use iced::widget::{column, container, text};
use iced::{Color, Element, Length, Theme};

use voxpad_core::interaction::domain::notifier::{Notice, Severity};

const TOAST_WIDTH: f32 = 280.0;
const CORNER_RADIUS: f32 = 10.0;

/// Bottom-anchored stack of transient notices, newest last.
pub fn overlay<'a, Message: 'a>(notices: &[Notice], fs: f32) -> Element<'a, Message> {
    let cards = notices
        .iter()
        .map(|notice| card(notice.clone(), fs))
        .collect::<Vec<_>>();

    container(column(cards).spacing(8).width(TOAST_WIDTH))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([0, 0])
        .into()
}

fn card<'a, Message: 'a>(notice: Notice, fs: f32) -> Element<'a, Message> {
    let severity = notice.severity;
    container(
        text(notice.message)
            .size((13.0 * fs).round())
            .color(Color::WHITE),
    )
    .padding([8, 14])
    .width(Length::Fill)
    .style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        let base = match severity {
            Severity::Info => palette.primary.base.color,
            Severity::Success => palette.success.base.color,
            Severity::Error => palette.danger.base.color,
        };
        container::Style {
            background: Some(iced::Background::Color(Color { a: 0.92, ..base })),
            border: Border {
                radius: CORNER_RADIUS.into(),
                ..Border::default()
            },
            text_color: Some(Color::WHITE),
            ..container::Style::default()
        }
    })
    .into()
}
