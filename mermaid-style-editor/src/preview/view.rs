//! Iced view of the preview pane.

use iced::widget::{Space, Tooltip, button, column, container, row, svg, text, tooltip};
use iced::{Alignment, Background, Color, Element, Length};
use iced_font_awesome::fa_icon_solid;

use super::{DisplayMode, Message, Preview, PreviewOutput};
use crate::i18n::Translations;

const ERROR_COLOR: Color = Color::from_rgb(0.94, 0.27, 0.27);

pub(super) fn view<'a>(
    preview: &'a Preview,
    translations: &Translations,
) -> Element<'a, Message> {
    let icon = match preview.display_mode {
        DisplayMode::Light => "moon",
        DisplayMode::Dark => "sun",
    };

    let toggle = Tooltip::new(
        button(fa_icon_solid(icon).size(13.0))
            .on_press(Message::ToggleDisplayMode)
            .padding([4, 8])
            .style(button::secondary),
        text(translations.toggle_tooltip()),
        tooltip::Position::Bottom,
    )
    .style(container::rounded_box);

    let title_bar = row![
        text(translations.preview_title()).size(14),
        Space::new().width(Length::Fill),
        toggle,
    ]
    .align_y(Alignment::Center);

    let content: Element<'a, Message> = match (&preview.output, &preview.handle) {
        (PreviewOutput::Rendered(_), Some(handle)) => {
            svg(handle.clone()).width(Length::Fill).height(Length::Shrink).into()
        }
        (PreviewOutput::Failed, _) => text(translations.render_error())
            .size(14)
            .style(|_| text::Style { color: Some(ERROR_COLOR) })
            .into(),
        _ => Space::new().into(),
    };

    let background = preview.display_mode.background();
    let display = container(content)
        .padding(16)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .clip(true)
        .style(move |_| container::Style {
            background: Some(Background::Color(background)),
            border: iced::Border { radius: 8.0.into(), ..Default::default() },
            ..Default::default()
        });

    column![title_bar, display]
        .spacing(8)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
