use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub transparent: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub success: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::NIGHT,
            },
            text: Text {
                primary: color::WHITE,
                secondary: color::GREY_2,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::INDIGO,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::INDIGO_DARK,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::INDIGO_DARK,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::SLATE,
                        text: color::GREY_3,
                        border: color::GREY_4.into(),
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::SLATE,
                        text: color::WHITE,
                        border: color::GREY_4.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_4,
                        text: color::WHITE,
                        border: color::GREY_4.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREY_4,
                        text: color::WHITE,
                        border: color::GREY_4.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::SLATE,
                        text: color::GREY_3,
                        border: color::GREY_4.into(),
                    }),
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_2,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_3,
                        border: None,
                    }),
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::SLATE,
                    text: None,
                    border: Some(color::GREY_4),
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::GREEN,
                    text: color::BLACK.into(),
                    border: None,
                },
                error: ContainerPalette {
                    background: color::RED,
                    text: color::WHITE.into(),
                    border: None,
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::NIGHT,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::INDIGO,
                        border: Some(color::GREY_4),
                    },
                    disabled: TextInputPalette {
                        background: color::SLATE,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::GREY_2,
                        selection: color::INDIGO,
                        border: Some(color::GREY_4),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::NIGHT,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::INDIGO,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::SLATE,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::GREY_2,
                        selection: color::INDIGO,
                        border: Some(color::RED),
                    },
                },
            },
        }
    }
}
