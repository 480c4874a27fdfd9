use iced::widget::{button, column, pick_list, row, text, Space};
use iced::Element;

use crate::app::{scaled, Message};
use crate::settings::{Language, Settings};

pub fn view<'a>(settings: &Settings) -> Element<'a, Message> {
    let fs = settings.font_scale;

    column![
        text("Recognition").size(scaled(16.0, fs)),
        Space::new().height(8),
        row![
            text("Language").size(scaled(13.0, fs)),
            pick_list(Language::ALL, Some(settings.language), |l| {
                Message::LanguageChanged(l)
            })
            .text_size(scaled(13.0, fs)),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
        Space::new().height(6),
        text("Takes effect the next time listening starts.").size(scaled(11.0, fs)),
        Space::new().height(24),
        button(text("Restore Defaults").size(scaled(13.0, fs)))
            .on_press(Message::RestoreDefaults)
            .padding([8, 16])
            .style(button::secondary),
    ]
    .spacing(0)
    .into()
}
