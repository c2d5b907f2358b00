use eframe::egui::{self, RichText};
use egui::{
    epaint::Shadow,
    style::{Selection, WidgetVisuals, Widgets},
    Color32, Stroke, Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: Option<ThemeDetails>,
    light: Option<ThemeDetails>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::goal()
    }
}

impl Theme {
    pub fn goal() -> Self {
        Theme { dark: Some(ThemeDetails::goal_night()), light: Some(ThemeDetails::goal_day()) }
    }

    fn dark(&self) -> Option<&ThemeDetails> {
        self.dark.as_ref()
    }

    fn light(&self) -> Option<&ThemeDetails> {
        self.light.as_ref()
    }

    pub fn heading(&self, content: &str) -> RichText {
        RichText::new(content).color(self.dark().unwrap().accent).strong()
    }

    pub fn bold(&self, content: &str) -> RichText {
        RichText::new(content).color(self.dark().unwrap().foreground).strong()
    }

    pub fn muted(&self, content: &str) -> RichText {
        RichText::new(content).color(self.dark().unwrap().comment)
    }

    pub fn accent(&self) -> Color32 {
        self.dark().unwrap().accent
    }

    pub fn red(&self) -> Color32 {
        self.dark().unwrap().red
    }

    pub fn green(&self) -> Color32 {
        self.dark().unwrap().green
    }

    pub fn comment(&self) -> Color32 {
        self.dark().unwrap().comment
    }

    pub fn card_face(&self) -> Color32 {
        self.dark().unwrap().background_light
    }

    pub fn card_edge(&self) -> Color32 {
        self.dark().unwrap().background_lighter
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    accent: Color32,
    red: Color32,
    green: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    // Navy palette lifted from the training portal's brand colors.
    fn goal_night() -> Self {
        Self {
            background: Color32::from_rgb(0x0b, 0x12, 0x21),
            foreground: Color32::from_rgb(0xf8, 0xfa, 0xfc),
            selection: Color32::from_rgb(0x1d, 0x4e, 0xd8),
            comment: Color32::from_rgb(0x94, 0xa3, 0xb8),
            accent: Color32::from_rgb(0x3b, 0x82, 0xf6),
            red: Color32::from_rgb(0xf8, 0x71, 0x71),
            green: Color32::from_rgb(0x34, 0xd3, 0x99),
            background_darker: Color32::from_rgb(0x06, 0x09, 0x12),
            background_dark: Color32::from_rgb(0x0f, 0x17, 0x2a),
            background_light: Color32::from_rgb(0x1e, 0x29, 0x3b),
            background_lighter: Color32::from_rgb(0x33, 0x41, 0x55),
        }
    }

    fn goal_day() -> Self {
        Self {
            background: Color32::from_rgb(0xf1, 0xf5, 0xf9),
            foreground: Color32::from_rgb(0x0f, 0x17, 0x2a),
            selection: Color32::from_rgb(0xbf, 0xdb, 0xfe),
            comment: Color32::from_rgb(0x64, 0x74, 0x8b),
            accent: Color32::from_rgb(0x25, 0x63, 0xeb),
            red: Color32::from_rgb(0xdc, 0x26, 0x26),
            green: Color32::from_rgb(0x05, 0x96, 0x69),
            background_darker: Color32::from_rgb(0xe2, 0xe8, 0xf0),
            background_dark: Color32::from_rgb(0xe8, 0xee, 0xf5),
            background_light: Color32::from_rgb(0xff, 0xff, 0xff),
            background_lighter: Color32::from_rgb(0xf8, 0xfa, 0xfc),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    if let Some(dark) = theme.dark() {
        set_theme_variant(ctx, dark, true);
    }

    if let Some(light) = theme.light() {
        set_theme_variant(ctx, light, false);
    }
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.background,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_dark,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.background_light,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_dark,
                        ..default.widgets.inactive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.accent, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_light,
                    bg_stroke: Stroke { color: theme.accent, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: theme.background_dark,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.accent, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.accent,
            faint_bg_color: match is_dark {
                true => theme.background_darker,
                false => theme.background_light,
            },
            extreme_bg_color: theme.background_darker,
            code_bg_color: theme.background_dark,
            error_fg_color: theme.red,
            warn_fg_color: theme.accent,
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
            panel_fill: theme.background,
            popup_shadow: Shadow { color: theme.background_dark, ..default.popup_shadow },
            ..default
        },
    );
}
