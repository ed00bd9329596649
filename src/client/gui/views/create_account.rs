use iced::widget::{text_input, Button, Column, Container, Row, Text};
use iced::{Color, Element, Font, Length};
use iced_aw::Card;

use crate::client::models::messages::Message;
use crate::client::models::overview::AccountOverview;

const TEXT_SECONDARY: Color = Color::from_rgb(0.45, 0.45, 0.5);
const ERROR_TEXT: Color = Color::from_rgb(0.8, 0.2, 0.25);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Creation form hosted by the modal over the onboarding panel. On success
/// the overview closes the dialog and refreshes the list.
pub fn view(state: &AccountOverview) -> Element<Message> {
    let mut body = Column::new()
        .spacing(16)
        .push(
            Text::new("Give your first account a name.")
                .size(14)
                .style(TEXT_SECONDARY),
        )
        .push(
            text_input("Account name", &state.new_account_name)
                .on_input(Message::NewAccountNameChanged)
                .on_submit(Message::SubmitCreateAccount)
                .padding(10),
        );
    if let Some(error) = &state.create_error {
        body = body.push(Text::new(error.clone()).size(14).style(ERROR_TEXT));
    }

    let cancel = Button::new(Text::new("Cancel").size(14))
        .style(iced::theme::Button::Secondary)
        .on_press(Message::CloseCreateAccountDialog)
        .padding(10);

    let submit_label = if state.create_in_flight {
        "Creating..."
    } else {
        "Create Account"
    };
    let mut submit = Button::new(Text::new(submit_label).font(BOLD_FONT).size(14))
        .style(iced::theme::Button::Primary)
        .padding(10);
    if !state.create_in_flight {
        submit = submit.on_press(Message::SubmitCreateAccount);
    }

    let foot = Row::new()
        .spacing(12)
        .push(Container::new(cancel).width(Length::Fill))
        .push(submit);

    Card::new(
        Text::new("Create Your First Account").font(BOLD_FONT).size(18),
        body,
    )
    .foot(foot)
    .max_width(400.0)
    .on_close(Message::CloseCreateAccountDialog)
    .into()
}
