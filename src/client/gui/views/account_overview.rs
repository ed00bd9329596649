use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};
use iced_aw::Modal;

use crate::client::gui::views::create_account;
use crate::client::gui::widgets::snackbar;
use crate::client::models::account::Account;
use crate::client::models::messages::Message;
use crate::client::models::overview::{AccountOverview, Presentation};

// Modern color palette consistent with other views
const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18);
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const ROW_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
const ERROR_TEXT: Color = Color::from_rgb(0.95, 0.45, 0.45);

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");
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

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn account_row_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(ROW_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.2, 0.2, 0.3),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 6.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        },
    }
}

/// Render the overview. The screen is chosen by the state machine's pure
/// projection; the transient error bar overlays whichever screen is up, and
/// the create-account dialog is a modal over the onboarding panel.
pub fn view(state: &AccountOverview) -> Element<Message> {
    let (content, dialog_open): (Element<Message>, bool) = match state.presentation() {
        Presentation::Loading => (loading(), false),
        Presentation::FullPageError { message } => (full_page_error(message), false),
        Presentation::Onboarding { dialog_open } => (onboarding(), dialog_open),
        Presentation::AccountList { accounts } => (account_list(accounts), false),
    };

    let mut layout = Column::new().push(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill),
    );
    if let Some(message) = state.transient_error() {
        layout = layout.push(Container::new(snackbar::view(message)).padding([12, 24]));
    }

    let underlay = Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)));

    let dialog = dialog_open.then(|| create_account::view(state));
    Modal::new(underlay, dialog)
        .backdrop(Message::CloseCreateAccountDialog)
        .on_esc(Message::CloseCreateAccountDialog)
        .into()
}

fn loading<'a>() -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(16)
            .align_items(Alignment::Center)
            .push(Text::new("⏳").font(EMOJI_FONT).size(32).style(TEXT_SECONDARY))
            .push(
                Text::new("Loading accounts...")
                    .font(BOLD_FONT)
                    .size(16)
                    .style(TEXT_SECONDARY),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x()
    .center_y()
    .into()
}

fn full_page_error(message: &str) -> Element<'_, Message> {
    Container::new(
        Column::new()
            .spacing(16)
            .align_items(Alignment::Center)
            .push(Text::new("⚠️").font(EMOJI_FONT).size(48))
            .push(
                Text::new(format!("Error: {}", message))
                    .font(BOLD_FONT)
                    .size(20)
                    .style(ERROR_TEXT),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x()
    .center_y()
    .into()
}

fn onboarding<'a>() -> Element<'a, Message> {
    let panel = Container::new(
        Column::new()
            .spacing(16)
            .align_items(Alignment::Center)
            .push(
                Text::new("Welcome to FinTrust!")
                    .font(BOLD_FONT)
                    .size(28)
                    .style(TEXT_PRIMARY),
            )
            .push(
                Text::new("You currently have no accounts.")
                    .size(16)
                    .style(TEXT_SECONDARY),
            )
            .push(Space::new(Length::Fill, Length::Fixed(8.0)))
            .push(
                Button::new(
                    Container::new(
                        Row::new()
                            .spacing(8)
                            .align_items(Alignment::Center)
                            .push(Text::new("➕").font(EMOJI_FONT).size(16))
                            .push(
                                Text::new("Create Your First Account")
                                    .font(BOLD_FONT)
                                    .size(14),
                            ),
                    )
                    .width(Length::Fill)
                    .center_x(),
                )
                .style(iced::theme::Button::Primary)
                .on_press(Message::OpenCreateAccountDialog)
                .padding(12)
                .width(Length::Fixed(240.0)),
            ),
    )
    .padding(40)
    .max_width(600.0)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
}

fn account_list(accounts: &[Account]) -> Element<'_, Message> {
    let header = Container::new(
        Text::new("Accounts Overview")
            .font(BOLD_FONT)
            .size(24)
            .style(TEXT_PRIMARY),
    )
    .padding([20, 24])
    .width(Length::Fill);

    let mut rows = Column::new().spacing(12);
    for account in accounts {
        let row = Button::new(
            Container::new(
                Row::new()
                    .spacing(16)
                    .align_items(Alignment::Center)
                    .push(Text::new("👤").font(EMOJI_FONT).size(24))
                    .push(
                        Column::new()
                            .spacing(4)
                            .push(
                                Text::new(format!("Account {}: {}", account.id, account.name))
                                    .font(BOLD_FONT)
                                    .size(16)
                                    .style(TEXT_PRIMARY),
                            )
                            .push(
                                Text::new(format!("Balance: {}", account.balance))
                                    .size(14)
                                    .style(TEXT_SECONDARY),
                            ),
                    ),
            )
            .padding(16)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(
                account_row_appearance,
            ))),
        )
        .style(iced::theme::Button::Text)
        .on_press(Message::OpenAccountDetail(account.id.clone()))
        .padding(0)
        .width(Length::Fill);

        rows = rows.push(row);
    }

    Column::new()
        .push(header)
        .push(
            Container::new(
                Scrollable::new(rows)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .padding([0, 24]),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
