use crate::widget::Svg;
use iced::widget::svg::Handle;

const PREPWISE_LOGOTYPE: &[u8] = include_bytes!("../static/logos/prepwise-logotype.svg");

pub fn prepwise_logotype() -> Svg<'static> {
    let h = Handle::from_memory(PREPWISE_LOGOTYPE);
    Svg::new(h)
}
