use crate::{component::text, theme, widget::*};
use iced::{Alignment, Length};

pub fn success<'a, T: 'a + Clone>(message: String, on_close: T) -> Container<'a, T> {
    Container::new(
        Row::new()
            .push(Container::new(text::p1_bold(message)).width(Length::Fill))
            .push(dismiss(on_close))
            .align_y(Alignment::Center)
            .spacing(10),
    )
    .padding(15)
    .style(theme::notification::success)
    .width(Length::Fill)
}

pub fn error<'a, T: 'a + Clone>(title: String, reason: String, on_close: T) -> Container<'a, T> {
    Container::new(
        Row::new()
            .push(
                Container::new(
                    Column::new()
                        .push(text::p1_bold(title))
                        .push(text::p2_regular(reason))
                        .spacing(5),
                )
                .width(Length::Fill),
            )
            .push(dismiss(on_close))
            .align_y(Alignment::Center)
            .spacing(10),
    )
    .padding(15)
    .style(theme::notification::error)
    .width(Length::Fill)
}

fn dismiss<'a, T: 'a + Clone>(on_close: T) -> Button<'a, T> {
    Button::new(text::p2_regular("Dismiss"))
        .style(theme::button::transparent)
        .on_press(on_close)
}
