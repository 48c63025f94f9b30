//! Iced view of the style controls.

use iced::widget::{Space, button, column, container, pick_list, row, text};
use iced::{Alignment, Border, Color, Element, Font, Length};
use iced_aw::ColorPicker;
use iced_font_awesome::fa_icon_solid;

use super::{Message, StyleControls, Visibility};
use crate::i18n::Translations;
use crate::theme::{StyleField, ThemeName};

const LABEL_WIDTH: f32 = 140.0;
const SWATCH_SIZE: f32 = 24.0;

pub(super) fn view<'a>(
    controls: &'a StyleControls,
    translations: &Translations,
) -> Element<'a, Message> {
    let theme_row = row![
        text(translations.theme_label()).size(14).width(LABEL_WIDTH),
        pick_list(ThemeName::ALL, Some(controls.theme), Message::ThemeSelected)
            .text_size(14)
            .width(Length::Fill),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    if controls.visibility == Visibility::Hidden {
        return column![theme_row].width(Length::Fill).into();
    }

    let mut rows = column![text(translations.style_heading()).size(14)].spacing(8);
    for field in StyleField::ALL {
        rows = rows.push(color_row(controls, field, translations));
    }

    let reset = button(
        row![fa_icon_solid("rotate-left").size(12.0), text(translations.reset_label()).size(13)]
            .spacing(6)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Reset)
    .padding([4, 10])
    .style(button::secondary);

    rows = rows.push(row![Space::new().width(Length::Fill), reset]);

    column![theme_row, container(rows).padding(12).style(container::bordered_box)]
        .spacing(8)
        .width(Length::Fill)
        .into()
}

/// One labelled swatch. Clicking the swatch opens the color picker.
fn color_row<'a>(
    controls: &'a StyleControls,
    field: StyleField,
    translations: &Translations,
) -> Element<'a, Message> {
    let value = controls.fields.get(field);
    let color = value.to_color();

    let swatch = button(Space::new().width(SWATCH_SIZE).height(SWATCH_SIZE))
        .on_press(Message::OpenPicker(field))
        .padding(0)
        .style(move |_, _| button::Style {
            background: Some(color.into()),
            border: Border {
                color: Color::from_rgb(0.75, 0.75, 0.75),
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        });

    let picker = ColorPicker::new(
        controls.open_picker == Some(field),
        color,
        swatch,
        Message::ClosePicker,
        move |picked| Message::FieldChanged(field, picked),
    );

    row![
        text(translations.field_label(field)).size(14).width(LABEL_WIDTH),
        picker,
        text(value.as_str().to_uppercase()).size(12).font(Font::MONOSPACE),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}
