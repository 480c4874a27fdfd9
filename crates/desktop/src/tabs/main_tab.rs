use iced::border::Border;
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Color, Element, Length, Theme};

use voxpad_core::session::domain::state_machine::SessionState;

use crate::app::{scaled, Message};
use crate::theme::{muted_color, surface_color};
use crate::widgets::primary_button::primary_button;

const TRANSCRIPT_HEIGHT: f32 = 240.0;

pub fn view<'a>(
    fs: f32,
    state: SessionState,
    finalized: &str,
    interim: &str,
    start_hovered: bool,
    theme: &Theme,
) -> Element<'a, Message> {
    if state == SessionState::Unsupported {
        return unsupported_state(fs, theme);
    }

    let muted = muted_color(theme);
    let listening = state.is_listening();

    let header = column![
        text("Speech to Text")
            .size(scaled(24.0, fs))
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            }),
        Space::new().height(4),
        text("Click Start to begin recording or Stop to end it")
            .size(scaled(13.0, fs))
            .color(muted),
    ]
    .align_x(iced::Alignment::Center)
    .width(Length::Fill);

    let start_btn = primary_button(
        move || {
            row![
                text("\u{25B6}").size(scaled(13.0, fs)).color(Color::WHITE),
                text("Start").size(scaled(14.0, fs)).color(Color::WHITE),
            ]
            .spacing(8)
            .align_y(iced::Alignment::Center)
            .into()
        },
        (state == SessionState::Idle).then_some(Message::StartListening),
        start_hovered,
        Message::StartHover,
        [10, 24],
    );

    let stop_label = row![
        text("\u{25A0}").size(scaled(13.0, fs)),
        text("Stop").size(scaled(14.0, fs)),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);
    let mut stop_btn = button(stop_label)
        .padding([10, 24])
        .style(button::danger);
    if listening {
        stop_btn = stop_btn.on_press(Message::StopListening);
    }

    let controls = row![start_btn, stop_btn]
        .spacing(12)
        .align_y(iced::Alignment::Center);

    let status = status_pill(fs, listening, theme);

    let card = transcript_card(fs, listening, finalized, interim, theme);

    column![
        Space::new().height(8),
        header,
        Space::new().height(18),
        container(controls).width(Length::Fill).center_x(Length::Fill),
        Space::new().height(12),
        container(status).width(Length::Fill).center_x(Length::Fill),
        Space::new().height(16),
        card,
        Space::new().height(14),
        instructions(fs, muted),
    ]
    .into()
}

fn status_pill<'a>(fs: f32, listening: bool, theme: &Theme) -> Element<'a, Message> {
    let muted = muted_color(theme);
    let danger = theme.extended_palette().danger.base.color;

    let (dot_color, label) = if listening {
        (danger, "Recording\u{2026}")
    } else {
        (muted, "Ready to record")
    };

    container(
        row![
            text("\u{25CF}").size(scaled(10.0, fs)).color(dot_color),
            text(label).size(scaled(12.0, fs)),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center),
    )
    .padding([6, 14])
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.background.weak.color)),
            border: Border {
                radius: 100.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        }
    })
    .into()
}

fn transcript_card<'a>(
    fs: f32,
    listening: bool,
    finalized: &str,
    interim: &str,
    theme: &Theme,
) -> Element<'a, Message> {
    let muted = muted_color(theme);

    let header = row![
        text("Transcript").size(scaled(16.0, fs)).font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..iced::Font::DEFAULT
        }),
        Space::new().width(Length::Fill),
        button(text("Copy").size(scaled(12.0, fs)))
            .on_press(Message::CopyTranscript)
            .padding([6, 12])
            .style(button::secondary),
        button(text("Clear").size(scaled(12.0, fs)))
            .on_press(Message::ClearTranscript)
            .padding([6, 12])
            .style(button::secondary),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    let body: Element<'a, Message> = if finalized.is_empty() && interim.is_empty() {
        container(
            column![
                text("\u{1F399}").size(scaled(28.0, fs)).color(muted),
                Space::new().height(8),
                text("Your transcribed text will appear here\u{2026}")
                    .size(scaled(13.0, fs))
                    .color(muted),
            ]
            .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(TRANSCRIPT_HEIGHT)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    } else {
        let mut lines = column![].spacing(6);
        if !finalized.is_empty() {
            lines = lines.push(text(finalized.to_owned()).size(scaled(14.0, fs)));
        }
        if !interim.is_empty() || listening {
            let caret = if listening { "\u{258D}" } else { "" };
            lines = lines.push(
                text(format!("{interim}{caret}"))
                    .size(scaled(14.0, fs))
                    .color(muted)
                    .font(iced::Font {
                        style: iced::font::Style::Italic,
                        ..iced::Font::DEFAULT
                    }),
            );
        }
        scrollable(lines.width(Length::Fill))
            .height(TRANSCRIPT_HEIGHT)
            .into()
    };

    container(column![header, Space::new().height(10), body])
        .padding(16)
        .width(Length::Fill)
        .style(|theme: &Theme| {
            container::Style {
                background: Some(iced::Background::Color(surface_color(theme))),
                border: Border {
                    radius: 14.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            }
        })
        .into()
}

fn instructions<'a>(fs: f32, muted: Color) -> Element<'a, Message> {
    let step = |number: &str, label: &str| -> Element<'a, Message> {
        row![
            text(number.to_owned()).size(scaled(12.0, fs)).font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            }),
            text(label.to_owned()).size(scaled(12.0, fs)).color(muted),
        ]
        .spacing(6)
        .align_y(iced::Alignment::Center)
        .into()
    };

    container(
        row![
            step("1", "Click Start"),
            step("2", "Allow microphone access"),
            step("3", "Click Stop when finished"),
        ]
        .spacing(24),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

fn unsupported_state<'a>(fs: f32, theme: &Theme) -> Element<'a, Message> {
    let muted = muted_color(theme);
    let danger = theme.extended_palette().danger.base.color;

    container(
        column![
            text("Not Supported").size(scaled(20.0, fs)).color(danger),
            Space::new().height(8),
            text(
                "Speech recognition is not available in this build. \
                 No microphone will be used.",
            )
            .size(scaled(14.0, fs))
            .color(muted),
        ]
        .align_x(iced::Alignment::Center)
        .width(360),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
