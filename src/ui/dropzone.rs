/// Image drop/click target
///
/// Shows the loaded scene once there is one, otherwise the localized upload
/// placeholder. The border highlights while a drag hovers the window, and a
/// click anywhere on the zone opens the native file picker.

use iced::widget::{column, container, image, mouse_area, text};
use iced::{Alignment, Element, Length, Theme};

use crate::app::Message;
use crate::locale::LocaleText;
use crate::picture::LoadedImage;

pub fn dropzone<'a>(
    picture: Option<&'a LoadedImage>,
    locale: &'static LocaleText,
    dragging: bool,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match picture {
        Some(loaded) => image(loaded.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => column![
            text(locale.upload_placeholder).size(15),
            text(locale.safety_note).size(11).style(text::secondary),
        ]
        .spacing(10)
        .align_x(Alignment::Center)
        .into(),
    };

    let zone = container(content)
        .width(Length::Fill)
        .height(Length::Fixed(320.0))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(12)
        .style(move |theme: &Theme| zone_style(theme, dragging));

    mouse_area(zone).on_press(Message::PickImage).into()
}

fn zone_style(theme: &Theme, dragging: bool) -> container::Style {
    let palette = theme.extended_palette();
    let mut style = container::bordered_box(theme);
    if dragging {
        style.border.color = palette.primary.strong.color;
        style.border.width = 2.0;
        style.background = Some(palette.primary.weak.color.into());
    }
    style
}
