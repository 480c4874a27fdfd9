mod app;
mod recognizer;
mod settings;
mod tabs;
mod theme;
mod widgets;

use app::App;

fn main() -> iced::Result {
    env_logger::init();

    iced::application(App::new, App::update, App::view)
        .title("Voxpad \u{2014} Speech to Text")
        .theme(App::theme)
        .subscription(App::subscription)
        .window(iced::window::Settings {
            size: iced::Size::new(560.0, 640.0),
            ..Default::default()
        })
        .run()
}
