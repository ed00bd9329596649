use iced::widget::{Button, Container, Row, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::messages::Message;

const ERROR_BG: Color = Color::from_rgb(0.55, 0.13, 0.16);
const TEXT_PRIMARY: Color = Color::WHITE;
const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn bar_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(ERROR_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 8.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 6.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

/// Non-blocking error bar shown over a still-valid screen. The caller
/// schedules the auto-dismiss timer; the button dismisses it early.
pub fn view(message: &str) -> Element<'_, Message> {
    Container::new(
        Row::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(Text::new("⚠️").font(EMOJI_FONT).size(16))
            .push(Text::new(message).size(14).style(TEXT_PRIMARY))
            .push(Space::new(Length::Fill, Length::Fixed(0.0)))
            .push(
                Button::new(Text::new("✕").size(14))
                    .style(iced::theme::Button::Text)
                    .on_press(Message::DismissError { timer_seq: None })
                    .padding(4),
            ),
    )
    .padding(12)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(bar_appearance)))
    .into()
}
