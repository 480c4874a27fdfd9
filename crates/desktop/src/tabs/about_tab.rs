use iced::widget::{button, column, text, Space};
use iced::Element;

use crate::app::{scaled, Message};

pub fn view(fs: f32) -> Element<'static, Message> {
    let version = env!("CARGO_PKG_VERSION");

    column![
        text("Voxpad").size(scaled(22.0, fs)),
        Space::new().height(4),
        text(format!("Version {version}")).size(scaled(13.0, fs)),
        Space::new().height(12),
        text(
            "A small notepad for your voice: live speech is transcribed as \
             you talk, finalized text accumulates, and the in-progress \
             phrase stays visible until it settles."
        )
        .size(scaled(13.0, fs)),
        Space::new().height(8),
        text(
            "Nothing leaves this machine \u{2014} transcripts live only in \
             this window and are gone when you close it."
        )
        .size(scaled(13.0, fs)),
        Space::new().height(16),
        button(text("Project page").size(scaled(13.0, fs)))
            .on_press(Message::OpenWebsite)
            .padding([8, 16]),
    ]
    .spacing(0)
    .into()
}
