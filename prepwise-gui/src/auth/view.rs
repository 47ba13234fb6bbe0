use iced::{Alignment, Length};

use prepwise_ui::{
    color,
    component::{button, card, form, text::*},
    image, theme,
    widget::*,
};

use super::message::{Route, ViewMessage};
use super::schema::{Field, Mode};
use super::AuthForm;

#[derive(Debug, Clone, Copy)]
enum InputKind {
    Text,
    Email,
    Password,
}

pub fn auth_form(form: &AuthForm) -> Element<ViewMessage> {
    let mode = form.mode();
    let submitting = form.is_submitting();
    let fields = form.fields();

    let (title, description, action) = match mode {
        Mode::SignIn => (
            "Welcome back",
            "Sign in to practice job interviews with AI",
            "Sign In",
        ),
        Mode::SignUp => (
            "Create your account",
            "Get started with PrepWise today",
            "Create Account",
        ),
    };

    let header = Column::new()
        .push(
            Row::new()
                .push(image::prepwise_logotype().width(Length::Fixed(40.0)))
                .push(h3("PrepWise"))
                .spacing(10)
                .align_y(Alignment::Center),
        )
        .push(h4_bold(title))
        .push(p2_regular(description).style(theme::text::secondary))
        .spacing(10)
        .align_x(Alignment::Center);

    let mut inputs = Column::new().spacing(20);
    if mode == Mode::SignUp {
        inputs = inputs.push(field(
            "Full Name",
            "John Doe",
            &fields.name,
            form.field_error(Field::Name),
            InputKind::Text,
            Field::Name,
        ));
    }
    inputs = inputs
        .push(field(
            "Email Address",
            "your@email.com",
            &fields.email,
            form.field_error(Field::Email),
            InputKind::Email,
            Field::Email,
        ))
        .push(field(
            "Password",
            "••••••••",
            &fields.password,
            form.field_error(Field::Password),
            InputKind::Password,
            Field::Password,
        ));

    let submit = button::primary(None, action)
        .width(Length::Fill)
        .on_press_maybe(if submitting {
            None
        } else {
            Some(ViewMessage::Submit)
        });

    let mut content = Column::new()
        .push(header)
        .push(inputs)
        .push(submit)
        .push(footer(mode))
        .spacing(30)
        .align_x(Alignment::Center)
        .max_width(440);

    if mode == Mode::SignUp {
        content = content.push(
            caption("By creating an account, you agree to our Terms and Privacy Policy.")
                .style(theme::text::secondary),
        );
    }

    Container::new(card::simple(content))
        .padding(50)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn field<'a>(
    label: &'static str,
    placeholder: &'static str,
    value: &form::Value<String>,
    warning: Option<&'a str>,
    kind: InputKind,
    target: Field,
) -> Column<'a, ViewMessage> {
    let on_change = move |v| ViewMessage::FieldEdited(target, v);
    let mut input = match kind {
        // Email inputs never carry meaningful whitespace.
        InputKind::Email => form::Form::new_trimmed(placeholder, value, on_change),
        InputKind::Text | InputKind::Password => form::Form::new(placeholder, value, on_change),
    };
    input = input.maybe_warning(warning).size(P1_SIZE).padding(10);
    if matches!(kind, InputKind::Password) {
        input = input.secure();
    }
    Column::new()
        .push(p2_medium(label))
        .push(input)
        .spacing(5)
        .width(Length::Fill)
}

fn footer<'a>(mode: Mode) -> Row<'a, ViewMessage> {
    let (prompt, link, route) = match mode {
        Mode::SignIn => ("Don't have an account?", "Sign up", Route::SignUp),
        Mode::SignUp => ("Already have an account?", "Sign in", Route::SignIn),
    };
    Row::new()
        .push(p2_regular(prompt).style(theme::text::secondary))
        .push(
            Button::new(p2_regular(link).color(color::INDIGO))
                .style(theme::button::transparent)
                .on_press(ViewMessage::GoTo(route)),
        )
        .spacing(5)
        .align_y(Alignment::Center)
}
