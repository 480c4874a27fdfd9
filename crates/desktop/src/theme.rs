use iced::color;
use iced::theme::Palette;
use iced::Theme;

use crate::settings::Appearance;

/// Resolve the iced Theme from appearance + high_contrast settings.
pub fn resolve_theme(appearance: Appearance, high_contrast: bool) -> Theme {
    let is_dark = match appearance {
        Appearance::Dark => true,
        Appearance::Light => false,
        Appearance::System => detect_system_dark_mode(),
    };

    let palette = match (is_dark, high_contrast) {
        (true, false) => dark_palette(),
        (false, false) => light_palette(),
        (true, true) => high_contrast_dark_palette(),
        (false, true) => high_contrast_light_palette(),
    };

    Theme::custom("Voxpad", palette)
}

fn dark_palette() -> Palette {
    Palette {
        background: color!(0x1b, 0x1d, 0x23),
        text: color!(0xd4, 0xd4, 0xd8),
        primary: color!(0x7c, 0x6c, 0xf0),
        success: color!(0x2f, 0xc9, 0x6b),
        warning: color!(0xf2, 0xb1, 0x05),
        danger: color!(0xf0, 0x4a, 0x4a),
    }
}

fn light_palette() -> Palette {
    Palette {
        background: color!(0xf7, 0xf6, 0xfb),
        text: color!(0x21, 0x21, 0x26),
        primary: color!(0x5b, 0x46, 0xdd),
        success: color!(0x27, 0xa8, 0x57),
        warning: color!(0xdd, 0x95, 0x00),
        danger: color!(0xdc, 0x32, 0x32),
    }
}

fn high_contrast_dark_palette() -> Palette {
    Palette {
        background: color!(0x00, 0x00, 0x00),
        text: color!(0xff, 0xff, 0xff),
        primary: color!(0xa4, 0x96, 0xff),
        success: color!(0x35, 0xe0, 0x77),
        warning: color!(0xff, 0xd2, 0x0a),
        danger: color!(0xff, 0x5c, 0x50),
    }
}

fn high_contrast_light_palette() -> Palette {
    Palette {
        background: color!(0xff, 0xff, 0xff),
        text: color!(0x00, 0x00, 0x00),
        primary: color!(0x37, 0x24, 0xa8),
        success: color!(0x13, 0x70, 0x34),
        warning: color!(0x8f, 0x4b, 0x00),
        danger: color!(0xb8, 0x00, 0x12),
    }
}

fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .map(|o| {
                String::from_utf8_lossy(&o.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
            })
            .unwrap_or(true)
    }
    #[cfg(not(target_os = "macos"))]
    {
        true
    }
}

/// Muted variant of the theme's text color, for secondary copy and the
/// interim transcript segment.
pub fn muted_color(theme: &Theme) -> iced::Color {
    let base = theme.extended_palette().background.base.text;
    iced::Color { a: 0.55, ..base }
}

/// Card background slightly separated from the window background.
pub fn surface_color(theme: &Theme) -> iced::Color {
    let palette = theme.extended_palette();
    palette.background.weak.color
}
