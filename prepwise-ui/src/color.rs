use iced::Color;

pub const BLACK: Color = iced::Color::BLACK;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const WHITE: Color = iced::Color::WHITE;

/// Window background.
pub const NIGHT: Color = Color::from_rgb(
    0x11 as f32 / 255.0,
    0x18 as f32 / 255.0,
    0x27 as f32 / 255.0,
);

/// Card and input background.
pub const SLATE: Color = Color::from_rgb(
    0x1F as f32 / 255.0,
    0x29 as f32 / 255.0,
    0x37 as f32 / 255.0,
);

pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x8A as f32 / 255.0,
    0x93 as f32 / 255.0,
    0xA3 as f32 / 255.0,
);
pub const GREY_4: Color = Color::from_rgb(
    0x42 as f32 / 255.0,
    0x4C as f32 / 255.0,
    0x5E as f32 / 255.0,
);

pub const GREEN: Color = Color::from_rgb(
    0x10 as f32 / 255.0,
    0xB9 as f32 / 255.0,
    0x81 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4E as f32 / 255.0,
    0x1B as f32 / 255.0,
);

pub const INDIGO: Color = Color::from_rgb(
    0x63 as f32 / 255.0,
    0x66 as f32 / 255.0,
    0xF1 as f32 / 255.0,
);
pub const INDIGO_DARK: Color = Color::from_rgb(
    0x4F as f32 / 255.0,
    0x46 as f32 / 255.0,
    0xE5 as f32 / 255.0,
);
