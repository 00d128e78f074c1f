/// The page renderer: what each surface of the spread shows
///
/// The pure half of this module maps `BookState` + `Album` into small
/// descriptor enums; the widget half turns those descriptors into iced
/// elements. Keeping the mapping separate from the widgets is what lets the
/// tests pin down exactly which content belongs on which page.

use iced::alignment;
use iced::gradient;
use iced::widget::{button, column, container, image, row, stack, text, Space};
use iced::{
    Alignment, Background, Border, Color, ContentFit, Element, Gradient, Length, Padding, Radians,
    Shadow, Theme, Vector,
};
use std::time::Instant;

use crate::state::album::{Album, Memory};
use crate::state::book::BookState;
use crate::ui;
use crate::Message;

/// What the left (already turned) page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum LeftPage<'a> {
    /// Nothing revealed yet
    Cover,
    /// The memory revealed by the latest completed flip
    Memory { memory: &'a Memory, index: usize },
}

/// What the right (still to turn) page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum RightPage<'a> {
    /// First sight of the book
    Greeting { heading: &'a str, subtext: &'a str },
    /// Between memories
    Hint(&'a str),
    /// Every memory revealed; terminal and non-interactive
    Closing { heading: &'a str, message: &'a str },
}

/// Left surface: the cover until the first flip, then always the most
/// recently revealed memory.
pub fn left_page<'a>(book: &BookState, album: &'a Album) -> LeftPage<'a> {
    if book.page() == 0 {
        LeftPage::Cover
    } else {
        let index = book.page() - 1;
        LeftPage::Memory {
            memory: &album.memories[index],
            index,
        }
    }
}

/// Right surface: greeting, then the flip hint, then the closing message.
pub fn right_page<'a>(book: &BookState, album: &'a Album) -> RightPage<'a> {
    if book.page() == 0 {
        RightPage::Greeting {
            heading: &album.greeting_heading,
            subtext: &album.greeting_subtext,
        }
    } else if book.page() < book.memory_count() {
        RightPage::Hint(&album.hint)
    } else {
        RightPage::Closing {
            heading: &album.closing_heading,
            message: &album.closing_message,
        }
    }
}

/// Opacity for the right-page text. The closing message is terminal and
/// never fades; everything else follows the book's fade.
pub fn right_text_opacity(book: &BookState, now: Instant) -> f32 {
    if book.all_revealed() {
        1.0
    } else {
        book.text_opacity(now)
    }
}

/// Build the left page widget.
pub fn left_page_view<'a>(
    page: &LeftPage<'a>,
    photo: Option<&image::Handle>,
) -> Element<'a, Message> {
    match *page {
        LeftPage::Cover => container(text("Cover").size(16).color(ui::GREY_FAINT))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
        LeftPage::Memory { memory, .. } => {
            let photo_layer: Element<'a, Message> = match photo {
                Some(handle) => image(handle.clone())
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into(),
                // Still loading (or failed): keep the page warm so the caption stays legible
                None => container(Space::new(Length::Fill, Length::Fill))
                    .style(placeholder_style)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into(),
            };

            let caption = container(text(memory.caption.as_str()).size(15).color(Color::WHITE))
                .width(Length::Fill)
                .padding(Padding {
                    top: 48.0,
                    right: 24.0,
                    bottom: 24.0,
                    left: 24.0,
                })
                .style(caption_scrim_style);

            stack![
                photo_layer,
                container(caption)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_y(alignment::Vertical::Bottom),
            ]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
        }
    }
}

/// Build the right page's textual content at the given fade opacity.
pub fn right_page_view<'a>(page: &RightPage<'a>, opacity: f32) -> Element<'a, Message> {
    match *page {
        RightPage::Greeting { heading, subtext } => container(
            column![
                text(heading)
                    .size(44)
                    .color(ui::faded(ui::ROSE, opacity))
                    .align_x(alignment::Horizontal::Center),
                text(subtext)
                    .size(16)
                    .color(ui::faded(ui::GREY_TEXT, opacity))
                    .align_x(alignment::Horizontal::Center),
            ]
            .spacing(16)
            .align_x(Alignment::Center),
        )
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into(),

        RightPage::Hint(hint) => container(
            text(hint)
                .size(14)
                .color(ui::faded(ui::GREY_MUTED, opacity)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(24)
        .into(),

        RightPage::Closing { heading, message } => container(
            column![
                text(heading).size(28).color(ui::EMERALD),
                text(message)
                    .size(16)
                    .color(ui::GREY_TEXT)
                    .align_x(alignment::Horizontal::Center),
            ]
            .spacing(10)
            .align_x(Alignment::Center),
        )
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into(),
    }
}

/// The advance control: a pill button that only accepts presses while the
/// book can actually turn.
pub fn advance_button<'a>(enabled: bool) -> Element<'a, Message> {
    let label = row![
        text("Next").size(14),
        text("➜").size(14).shaping(text::Shaping::Advanced),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    button(label)
        .padding(Padding {
            top: 10.0,
            right: 18.0,
            bottom: 10.0,
            left: 18.0,
        })
        .style(advance_button_style)
        .on_press_maybe(enabled.then_some(Message::AdvanceRequested))
        .into()
}

fn advance_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Disabled => Color {
            r: 0.82,
            g: 0.835,
            b: 0.858,
            a: 1.0,
        },
        button::Status::Hovered | button::Status::Pressed => ui::ROSE_DARK,
        button::Status::Active => ui::ROSE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color { a: 0.3, ..Color::BLACK },
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
    }
}

/// Darkening gradient behind the caption so white text stays readable over
/// any photo.
fn caption_scrim_style(_theme: &Theme) -> container::Style {
    let scrim = gradient::Linear::new(Radians(0.0))
        .add_stop(0.0, Color { a: 0.6, ..Color::BLACK })
        .add_stop(1.0, Color { a: 0.0, ..Color::BLACK });

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(scrim))),
        ..container::Style::default()
    }
}

/// Soft wash standing in for a photo that has not loaded.
fn placeholder_style(_theme: &Theme) -> container::Style {
    let wash = gradient::Linear::new(Radians(3.0 * std::f32::consts::FRAC_PI_4))
        .add_stop(
            0.0,
            Color {
                r: 0.996,
                g: 0.894,
                b: 0.904,
                a: 1.0,
            },
        )
        .add_stop(
            1.0,
            Color {
                r: 0.953,
                g: 0.91,
                b: 0.996,
                a: 1.0,
            },
        );

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(wash))),
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// A built-in album and a book advanced through `page` full flip cycles.
    fn open_book_at(page: usize) -> (BookState, Album) {
        let album = Album::builtin();
        let mut book = BookState::new(album.memory_count());
        let mut now = Instant::now();
        for _ in 0..page {
            book.request_advance(now);
            now += Duration::from_millis(16);
            book.frame_tick(now);
            book.complete_flip();
        }
        (book, album)
    }

    #[test]
    fn test_cover_before_any_flip() {
        let (book, album) = open_book_at(0);
        assert_eq!(left_page(&book, &album), LeftPage::Cover);
        assert!(matches!(
            right_page(&book, &album),
            RightPage::Greeting { .. }
        ));
    }

    #[test]
    fn test_first_memory_after_one_flip() {
        let (book, album) = open_book_at(1);
        match left_page(&book, &album) {
            LeftPage::Memory { memory, index } => {
                assert_eq!(index, 0);
                assert_eq!(memory, &album.memories[0]);
            }
            other => panic!("expected the first memory, got {:?}", other),
        }
        assert_eq!(
            right_page(&book, &album),
            RightPage::Hint(album.hint.as_str())
        );
    }

    #[test]
    fn test_closing_after_last_flip() {
        let (book, album) = open_book_at(3);
        assert!(matches!(
            left_page(&book, &album),
            LeftPage::Memory { index: 2, .. }
        ));
        assert!(matches!(
            right_page(&book, &album),
            RightPage::Closing { .. }
        ));
    }

    #[test]
    fn test_closing_text_never_fades() {
        let (mut book, _album) = open_book_at(3);
        let now = Instant::now();

        // Even a stray advance cannot dim the terminal page
        book.request_advance(now);
        assert_eq!(
            right_text_opacity(&book, now + Duration::from_millis(350)),
            1.0
        );
    }

    #[test]
    fn test_greeting_fades_on_request() {
        let (mut book, _album) = open_book_at(0);
        let now = Instant::now();
        assert_eq!(right_text_opacity(&book, now), 1.0);

        book.request_advance(now);
        assert_eq!(
            right_text_opacity(&book, now + Duration::from_millis(700)),
            0.0
        );
    }
}
