use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use iced::widget::{button, column, container, row, scrollable, stack, text, Space};
use iced::{Element, Length, Subscription, Task, Theme};

use voxpad_core::interaction::domain::notifier::Notice;
use voxpad_core::interaction::infrastructure::channel_notifier::ChannelNotifier;
use voxpad_core::interaction::infrastructure::system_clipboard::SystemClipboard;
use voxpad_core::recognition::domain::capability::RecognizerConfig;
use voxpad_core::session::dictation_use_case::DictationUseCase;

use crate::recognizer;
use crate::settings::{Appearance, Language, Settings};
use crate::tabs;
use crate::theme;
use crate::widgets::toast;

const PROJECT_URL: &str = "https://github.com/voxpad/voxpad";
const PUMP_INTERVAL: Duration = Duration::from_millis(100);
const TOAST_TTL: Duration = Duration::from_secs(3);
const MAX_TOASTS: usize = 4;

// ---------------------------------------------------------------------------
// Tab enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Main,
    Settings,
    Appearance,
    About,
}

impl Tab {
    const ALL: &[Tab] = &[Tab::Main, Tab::Settings, Tab::Appearance, Tab::About];

    fn label(self) -> &'static str {
        match self {
            Tab::Main => "Main",
            Tab::Settings => "Settings",
            Tab::Appearance => "Appearance",
            Tab::About => "About",
        }
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    OpenWebsite,
    StartListening,
    StopListening,
    CopyTranscript,
    ClearTranscript,
    StartHover(bool),
    /// Periodic tick: drain recognizer events and expire toasts.
    Pump,
    LanguageChanged(Language),
    RestoreDefaults,
    AppearanceChanged(Appearance),
    HighContrastChanged(bool),
    FontScaleChanged(f32),
    PollSystemTheme,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

struct Toast {
    notice: Notice,
    born: Instant,
}

pub struct App {
    active_tab: Tab,
    settings: Settings,
    session: DictationUseCase,
    notices: Receiver<Notice>,
    toasts: Vec<Toast>,
    start_hovered: bool,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();

        let config = RecognizerConfig {
            language: settings.language.tag().to_string(),
            ..RecognizerConfig::default()
        };
        let probe = recognizer::probe(&config);
        let (notifier, notices) = ChannelNotifier::new();
        let session = DictationUseCase::new(
            probe,
            Box::new(SystemClipboard::new()),
            Box::new(notifier),
        );

        (
            Self {
                active_tab: Tab::Main,
                settings,
                session,
                notices,
                toasts: Vec::new(),
                start_hovered: false,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
            }
            Message::OpenWebsite => {
                let _ = open::that(PROJECT_URL);
            }
            Message::StartListening => {
                self.session.start();
            }
            Message::StopListening => {
                self.session.stop();
            }
            Message::CopyTranscript => {
                self.session.copy();
            }
            Message::ClearTranscript => {
                self.session.clear();
            }
            Message::StartHover(hovered) => {
                self.start_hovered = hovered;
            }
            Message::Pump => {
                self.session.pump();
                self.collect_notices();
                self.expire_toasts();
            }
            Message::LanguageChanged(language) => {
                self.settings.language = language;
                self.settings.save();
            }
            Message::RestoreDefaults => {
                self.settings.language = Settings::default().language;
                self.settings.save();
            }
            Message::AppearanceChanged(appearance) => {
                self.settings.appearance = appearance;
                self.settings.save();
            }
            Message::HighContrastChanged(enabled) => {
                self.settings.high_contrast = enabled;
                self.settings.save();
            }
            Message::FontScaleChanged(scale) => {
                self.settings.font_scale = scale;
                self.settings.save();
            }
            Message::PollSystemTheme => {
                // Theme is resolved fresh in theme() on every render,
                // so just requesting a redraw is enough.
            }
        }
        Task::none()
    }

    fn collect_notices(&mut self) {
        while let Ok(notice) = self.notices.try_recv() {
            self.toasts.push(Toast {
                notice,
                born: Instant::now(),
            });
        }
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
    }

    fn expire_toasts(&mut self) {
        self.toasts.retain(|toast| toast.born.elapsed() < TOAST_TTL);
    }

    pub fn view(&self) -> Element<'_, Message> {
        let fs = self.settings.font_scale;
        let current_theme = self.theme();

        // Tab bar
        let tab_bar = row(Tab::ALL
            .iter()
            .map(|&tab| {
                let label = text(tab.label()).size(scaled(13.0, fs));
                let btn = button(label)
                    .on_press(Message::TabSelected(tab))
                    .padding([6, 14]);
                if tab == self.active_tab {
                    btn.style(button::primary).into()
                } else {
                    btn.style(button::text).into()
                }
            })
            .collect::<Vec<_>>())
        .spacing(2);

        // Tab content
        let content: Element<'_, Message> = match self.active_tab {
            Tab::Main => tabs::main_tab::view(
                fs,
                self.session.state(),
                self.session.finalized(),
                self.session.interim(),
                self.start_hovered,
                &current_theme,
            ),
            Tab::Settings => tabs::settings_tab::view(&self.settings),
            Tab::Appearance => tabs::appearance_tab::view(&self.settings),
            Tab::About => tabs::about_tab::view(fs),
        };

        let tab_content = container(scrollable(content).height(Length::Fill))
            .padding(16)
            .height(Length::Fill);

        // Footer
        let footer = container(
            text(self.session.state().label().to_owned()).size(scaled(11.0, fs)),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([4, 0]);

        let base = column![tab_bar, tab_content, footer]
            .spacing(0)
            .height(Length::Fill);

        if self.toasts.is_empty() {
            return base.into();
        }

        let notices: Vec<Notice> = self.toasts.iter().map(|t| t.notice.clone()).collect();
        let overlay = column![
            Space::new().height(Length::Fill),
            toast::overlay(&notices, fs),
            Space::new().height(16),
        ];

        stack![base, overlay].into()
    }

    pub fn theme(&self) -> Theme {
        theme::resolve_theme(self.settings.appearance, self.settings.high_contrast)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subs = Vec::new();
        if self.session.supported() {
            subs.push(iced::time::every(PUMP_INTERVAL).map(|_| Message::Pump));
        }
        if self.settings.appearance == Appearance::System {
            subs.push(iced::time::every(Duration::from_secs(2)).map(|_| Message::PollSystemTheme));
        }
        Subscription::batch(subs)
    }
}

/// Scale a base font size by the user's font_scale setting.
pub fn scaled(base: f32, font_scale: f32) -> f32 {
    (base * font_scale).round()
}
