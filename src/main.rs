use iced::widget::{canvas, column, container, row, stack, text, Space};
use iced::{alignment, gradient, theme, window};
use iced::{
    Alignment, Background, Border, Color, Element, Gradient, Length, Radians, Shadow, Size,
    Subscription, Task, Theme, Vector,
};
use std::time::Instant;

mod animation;
mod media;
mod state;
mod ui;

use state::album::Album;
use state::book::BookState;

/// Width of the open spread in logical pixels.
const BOOK_WIDTH: f32 = 960.0;
/// Height of the open spread.
const BOOK_HEIGHT: f32 = 560.0;

/// Main application state
struct FlipBook {
    /// The fixed content: memories plus page text
    album: Album,
    /// The page-turn state machine
    book: BookState,
    /// Decoded photo handles, one slot per memory; `None` until loaded
    photos: Vec<Option<iced::widget::image::Handle>>,
    /// Instant of the most recent render frame; drives angle and fade sampling
    now: Instant,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Reader pressed the advance control
    AdvanceRequested,
    /// The host delivered a render frame while a turn is in flight
    AnimationTick(Instant),
    /// A background photo load finished
    PhotoLoaded {
        index: usize,
        result: Result<iced::widget::image::Handle, String>,
    },
}

impl FlipBook {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let album = Album::load_or_default();
        let book = BookState::new(album.memory_count());

        println!("📖 Flip book ready: {} memories to reveal", album.memory_count());

        let photos = vec![None; album.memory_count()];
        let loads: Vec<Task<Message>> = album
            .memories
            .iter()
            .enumerate()
            .map(|(index, memory)| {
                Task::perform(
                    media::loader::load_image(memory.image.clone()),
                    move |result| Message::PhotoLoaded { index, result },
                )
            })
            .collect();

        (
            FlipBook {
                album,
                book,
                photos,
                now: Instant::now(),
            },
            Task::batch(loads),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AdvanceRequested => {
                if self.book.can_advance() {
                    println!(
                        "📖 Turning to page {} of {}",
                        self.book.page() + 1,
                        self.book.memory_count()
                    );
                }
                self.book.request_advance(Instant::now());
                Task::none()
            }
            Message::AnimationTick(now) => {
                self.now = now;
                self.book.frame_tick(now);

                if self.book.flip_transition_done(now) {
                    self.book.complete_flip();
                    if self.book.all_revealed() {
                        println!("✅ Every memory revealed");
                    }
                }

                Task::none()
            }
            Message::PhotoLoaded { index, result } => {
                match result {
                    Ok(handle) => self.photos[index] = Some(handle),
                    Err(e) => eprintln!(
                        "⚠️  Photo {} unavailable, keeping the placeholder: {}",
                        index + 1,
                        e
                    ),
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let left = ui::page::left_page(&self.book, &self.album);
        let right = ui::page::right_page(&self.book, &self.album);
        let opacity = ui::page::right_text_opacity(&self.book, self.now);

        let photo = match left {
            ui::page::LeftPage::Memory { index, .. } => self.photos[index].as_ref(),
            ui::page::LeftPage::Cover => None,
        };

        let left_el = ui::page::left_page_view(&left, photo);
        let right_el = ui::page::right_page_view(&right, opacity);

        // Advance control rides the bottom-right corner of the right page
        let right_half = stack![
            right_el,
            container(ui::page::advance_button(self.book.can_advance()))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(16),
        ]
        .width(Length::Fill)
        .height(Length::Fill);

        let pages = row![
            container(left_el)
                .width(Length::FillPortion(1))
                .height(Length::Fill)
                .style(page_style),
            container(right_half)
                .width(Length::FillPortion(1))
                .height(Length::Fill)
                .style(page_style),
        ];

        let mut spread = stack![
            pages,
            // Hairline shadow down the spine
            container(
                container(Space::new(Length::Fixed(1.0), Length::Fill)).style(spine_style)
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill),
        ]
        .width(Length::Fill)
        .height(Length::Fill);

        if self.book.in_transition() {
            let overlay = ui::flip::FlipOverlay {
                angle: self.book.flip_angle(self.now),
                front: right,
                front_opacity: opacity,
            };
            spread = spread.push(canvas(overlay).width(Length::Fill).height(Length::Fill));
        }

        let book = container(spread)
            .width(Length::Fixed(BOOK_WIDTH))
            .height(Length::Fixed(BOOK_HEIGHT))
            .style(book_style)
            .clip(true);

        let content = column![
            text("Tap the arrow to flip").size(16).color(ui::GREY_TEXT),
            book,
            text("Drop an album.json in your config directory to make the book your own")
                .size(12)
                .color(ui::GREY_MUTED),
        ]
        .spacing(20)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(backdrop_style)
            .into()
    }

    /// Drive the animation only while a page turn is in flight.
    fn subscription(&self) -> Subscription<Message> {
        if self.book.in_transition() {
            window::frames().map(Message::AnimationTick)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::custom(
            "FlipBook".to_string(),
            theme::Palette {
                background: Color {
                    r: 1.0,
                    g: 0.945,
                    b: 0.949,
                    a: 1.0,
                },
                text: Color {
                    r: 0.122,
                    g: 0.161,
                    b: 0.216,
                    a: 1.0,
                },
                primary: ui::ROSE,
                success: ui::EMERALD,
                danger: Color {
                    r: 0.863,
                    g: 0.149,
                    b: 0.149,
                    a: 1.0,
                },
            },
        )
    }
}

fn main() -> iced::Result {
    iced::application("Flip Book", FlipBook::update, FlipBook::view)
        .subscription(FlipBook::subscription)
        .theme(FlipBook::theme)
        .window_size(Size::new(1080.0, 760.0))
        .centered()
        .run_with(FlipBook::new)
}

/// Warm diagonal wash behind the book.
fn backdrop_style(_theme: &Theme) -> container::Style {
    let wash = gradient::Linear::new(Radians(3.0 * std::f32::consts::FRAC_PI_4))
        .add_stop(
            0.0,
            Color {
                r: 1.0,
                g: 0.945,
                b: 0.949,
                a: 1.0,
            },
        )
        .add_stop(
            0.5,
            Color {
                r: 0.992,
                g: 0.949,
                b: 0.973,
                a: 1.0,
            },
        )
        .add_stop(
            1.0,
            Color {
                r: 0.98,
                g: 0.961,
                b: 1.0,
                a: 1.0,
            },
        );

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(wash))),
        ..container::Style::default()
    }
}

/// The book itself: a soft white slab with rounded corners and a drop shadow.
fn book_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.8, ..Color::WHITE })),
        border: Border {
            color: Color { a: 0.4, ..Color::WHITE },
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: Color { a: 0.25, ..Color::BLACK },
            offset: Vector::new(0.0, 18.0),
            blur_radius: 36.0,
        },
        ..container::Style::default()
    }
}

/// Each page is plain paper.
fn page_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        ..container::Style::default()
    }
}

/// Hairline shadow along the spine.
fn spine_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.05, ..Color::BLACK })),
        ..container::Style::default()
    }
}
