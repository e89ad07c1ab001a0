use ratatui::style::Color;
use ratatui::style::Style;

use crate::notification::NotificationKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    SolarizedDark,
}

impl Theme {
    pub fn next(&self) -> Theme {
        match self {
            Theme::Dark => Theme::SolarizedDark,
            Theme::SolarizedDark => Theme::Dark,
        }
    }

    pub fn scheme(&self) -> Scheme {
        match self {
            Theme::SolarizedDark => Scheme {
                notification_success: Style::default()
                    .fg(Solarized::Base03.to_color())
                    .bg(Solarized::Green.to_color()),
                notification_error: Style::default()
                    .fg(Solarized::Base3.to_color())
                    .bg(Solarized::Red.to_color()),
                notification_warning: Style::default()
                    .fg(Solarized::Base03.to_color())
                    .bg(Solarized::Yellow.to_color()),
                notification_info: Style::default()
                    .fg(Solarized::Base03.to_color())
                    .bg(Solarized::Cyan.to_color()),
                panel_border: Style::default().fg(Solarized::Base01.to_color()),
                panel_text: Style::default().fg(Solarized::Base1.to_color()),
                panel_empty: Style::default().fg(Solarized::Base00.to_color()),
                widget_active: Style::default()
                    .fg(Solarized::Base02.to_color())
                    .bg(Solarized::Green.to_color()),
                widget_inactive: Style::default()
                    .fg(Solarized::Base1.to_color())
                    .bg(Solarized::Base03.to_color()),
                widget_command: Style::default()
                    .fg(Solarized::Base1.to_color())
                    .bg(Solarized::Base02.to_color()),
            },
            Theme::Dark => Scheme {
                notification_success: Style::default().fg(Color::White).bg(Color::Green),
                notification_error: Style::default().fg(Color::White).bg(Color::Red),
                notification_warning: Style::default().fg(Color::Black).bg(Color::Yellow),
                notification_info: Style::default().fg(Color::White).bg(Color::Cyan),

                panel_border: Style::default().fg(Color::DarkGray),
                panel_text: Style::default().fg(Color::White),
                panel_empty: Style::default().fg(Color::DarkGray),

                widget_active: Style::default().fg(Color::Black).bg(Color::Green),
                widget_inactive: Style::default().fg(Color::Black).bg(Color::Yellow),
                widget_command: Style::default().bg(Color::Blue),
            },
        }
    }
}

pub struct Scheme {
    pub notification_success: Style,
    pub notification_error: Style,
    pub notification_warning: Style,
    pub notification_info: Style,

    pub panel_border: Style,
    pub panel_text: Style,
    pub panel_empty: Style,

    pub widget_active: Style,
    pub widget_inactive: Style,
    pub widget_command: Style,
}

impl Scheme {
    pub fn notification(&self, kind: NotificationKind) -> Style {
        match kind {
            NotificationKind::Success => self.notification_success,
            NotificationKind::Error => self.notification_error,
            NotificationKind::Warning => self.notification_warning,
            NotificationKind::Info => self.notification_info,
        }
    }
}

pub enum Solarized {
    Base03,
    Base02,
    Base01,
    Base00,
    Base1,
    Base3,
    Yellow,
    Red,
    Cyan,
    Green,
}

impl Solarized {
    fn to_color(&self) -> Color {
        match self {
            Solarized::Base03 => Color::Rgb(0, 43, 54),
            Solarized::Base02 => Color::Rgb(7, 54, 66),
            Solarized::Base01 => Color::Rgb(88, 110, 117),
            Solarized::Base00 => Color::Rgb(101, 123, 131),
            Solarized::Base1 => Color::Rgb(147, 161, 161),
            Solarized::Base3 => Color::Rgb(253, 246, 227),
            Solarized::Yellow => Color::Rgb(181, 137, 0),
            Solarized::Red => Color::Rgb(220, 50, 47),
            Solarized::Cyan => Color::Rgb(42, 161, 152),
            Solarized::Green => Color::Rgb(133, 153, 0),
        }
    }
}
