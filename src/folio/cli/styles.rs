//! Styles for the folio CLI.
//!
//! Templates only ever name semantic styles (`selected`, `tag-active`,
//! `time`). The light and dark palettes below decide what those look like, so
//! switching theme never touches a template.
//!
//! Which palette is used follows the saved theme preference, falling back to
//! the terminal's light/dark mode as reported by `dark-light`.

use console::Style;
use folio::theme::ThemeMode;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const HEADER: &str = "header";
    pub const TITLE: &str = "title";
    pub const TIME: &str = "time";
    pub const LINK: &str = "link";
    pub const SELECTED: &str = "selected";
    pub const TAG: &str = "tag";
    pub const TAG_ACTIVE: &str = "tag-active";
    pub const CARD_KIND: &str = "card-kind";
    pub const STEP: &str = "step";
    pub const CONFIG_KEY: &str = "config-key";
}

/// A named set of styles. Unknown names render unstyled with a marker so a
/// typo in a template shows up in the output.
#[derive(Clone)]
pub struct Palette {
    styles: HashMap<&'static str, Style>,
}

const MISSING_STYLE_INDICATOR: &str = "(!?)";

impl Palette {
    fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    #[cfg(test)]
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }
}

pub static LIGHT: Lazy<Palette> = Lazy::new(build_light_palette);
pub static DARK: Lazy<Palette> = Lazy::new(build_dark_palette);

pub fn palette_for(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}

pub fn system_prefers_dark() -> bool {
    matches!(dark_light::detect(), dark_light::Mode::Dark)
}

/// Nearest index in the 256-color palette.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

fn build_light_palette() -> Palette {
    let regular = Style::new().black();
    let muted = Style::new().color256(rgb_to_ansi256((115, 115, 115)));
    let accent = Style::new().color256(rgb_to_ansi256((0, 95, 175)));

    Palette::new()
        .add(names::REGULAR, regular.clone())
        .add(names::MUTED, muted.clone())
        .add(names::HEADER, regular.clone().bold().underlined())
        .add(names::TITLE, regular.bold())
        .add(names::TIME, muted.clone().italic())
        .add(names::LINK, accent.clone().underlined())
        .add(names::SELECTED, accent.clone().bold())
        .add(names::TAG, muted)
        .add(
            names::TAG_ACTIVE,
            Style::new()
                .white()
                .on_color256(rgb_to_ansi256((0, 95, 175))),
        )
        .add(names::CARD_KIND, accent.clone().italic())
        .add(names::STEP, Style::new().color256(rgb_to_ansi256((196, 140, 0))).bold())
        .add(names::CONFIG_KEY, accent)
}

fn build_dark_palette() -> Palette {
    let regular = Style::new().white();
    let muted = Style::new().color256(rgb_to_ansi256((180, 180, 180)));
    let accent = Style::new().color256(rgb_to_ansi256((95, 175, 255)));

    Palette::new()
        .add(names::REGULAR, regular.clone())
        .add(names::MUTED, muted.clone())
        .add(names::HEADER, regular.clone().bold().underlined())
        .add(names::TITLE, regular.bold())
        .add(names::TIME, muted.clone().italic())
        .add(names::LINK, accent.clone().underlined())
        .add(names::SELECTED, accent.clone().bold())
        .add(names::TAG, muted)
        .add(
            names::TAG_ACTIVE,
            Style::new()
                .black()
                .on_color256(rgb_to_ansi256((95, 175, 255))),
        )
        .add(names::CARD_KIND, accent.clone().italic())
        .add(names::STEP, Style::new().color256(rgb_to_ansi256((255, 214, 10))).bold())
        .add(names::CONFIG_KEY, accent)
}
