use iced::widget::{Button, Column, Container, Row, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::account::detail_route;
use crate::client::models::messages::Message;

const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

/// Destination of the per-account navigation reference. Detail content is
/// outside the overview's scope; this screen shows the constructed route and
/// offers a way back.
pub fn view(account_id: &str) -> Element<'_, Message> {
    let back_button = Button::new(
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new("←").size(18))
            .push(Text::new("Back").font(BOLD_FONT).size(14)),
    )
    .style(iced::theme::Button::Secondary)
    .on_press(Message::BackToOverview)
    .padding(12);

    let content = Column::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .push(
            Text::new(format!("Account {}", account_id))
                .font(BOLD_FONT)
                .size(24)
                .style(TEXT_PRIMARY),
        )
        .push(
            Text::new(detail_route(account_id))
                .size(14)
                .style(TEXT_SECONDARY),
        );

    let layout = Column::new()
        .push(Container::new(back_button).padding([20, 24]))
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x()
                .center_y(),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
