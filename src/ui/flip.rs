/// The turning page overlay
///
/// No stock widget rotates, so the page turn is drawn on a canvas spanning
/// the whole spread. The rotation around the spine projects to a simple
/// horizontal foreshortening: the page keeps its height while its width
/// shrinks by cos(angle), crossing the spine at 90 degrees and sweeping over
/// the left half as the back face.

use iced::alignment;
use iced::gradient;
use iced::mouse::Cursor;
use iced::widget::canvas::{self, Path, Program};
use iced::widget::text;
use iced::{Color, Gradient, Point, Radians, Rectangle, Renderer, Size, Theme};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::ui;
use crate::ui::page::RightPage;
use crate::Message;

/// Widest a front-face text line may run, matching the static page padding.
const FACE_TEXT_WIDTH: f32 = 430.0;

/// The rotating page, redrawn every frame while a turn is in flight.
pub struct FlipOverlay<'a> {
    /// Rotation around the spine in degrees: 0 at rest, 180 fully turned
    pub angle: f32,
    /// Content of the page before it turns; mirrors the static right page
    pub front: RightPage<'a>,
    /// Fade opacity applied to the front face text
    pub front_opacity: f32,
}

impl<'a> Program<Message> for FlipOverlay<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let spine_x = frame.width() / 2.0;
        let half_width = frame.width() / 2.0;
        let height = frame.height();

        let fold = self.angle.to_radians().cos();
        if fold >= 0.0 {
            self.draw_front(&mut frame, spine_x, half_width * fold, height);
        } else {
            draw_back(&mut frame, spine_x, half_width * -fold, height);
        }

        draw_spine_shadow(&mut frame, spine_x, height, self.angle);

        vec![frame.into_geometry()]
    }
}

impl<'a> FlipOverlay<'a> {
    /// The paper side still facing the reader, foreshortened to `width`.
    fn draw_front(&self, frame: &mut canvas::Frame, spine_x: f32, width: f32, height: f32) {
        if width <= f32::EPSILON {
            return;
        }

        frame.fill_rectangle(Point::new(spine_x, 0.0), Size::new(width, height), Color::WHITE);

        // Text positions are laid out in page fractions and mapped through
        // the same foreshortening as the page itself
        match self.front {
            RightPage::Greeting { heading, subtext } => {
                let mut y = height * 0.36;
                for line in wrap_lines(heading, 44.0, FACE_TEXT_WIDTH) {
                    self.face_text(frame, line, spine_x + width * 0.5, y, 44.0, ui::ROSE);
                    y += 50.0;
                }
                y += 10.0;
                for line in wrap_lines(subtext, 16.0, FACE_TEXT_WIDTH) {
                    self.face_text(frame, line, spine_x + width * 0.5, y, 16.0, ui::GREY_TEXT);
                    y += 22.0;
                }
            }
            RightPage::Hint(hint) => {
                self.face_text(
                    frame,
                    hint.to_string(),
                    spine_x + width * 0.5,
                    height - 32.0,
                    14.0,
                    ui::GREY_MUTED,
                );
            }
            RightPage::Closing { heading, message } => {
                self.face_text(
                    frame,
                    heading.to_string(),
                    spine_x + width * 0.5,
                    height * 0.45,
                    28.0,
                    ui::EMERALD,
                );
                self.face_text(
                    frame,
                    message.to_string(),
                    spine_x + width * 0.5,
                    height * 0.45 + 38.0,
                    16.0,
                    ui::GREY_TEXT,
                );
            }
        }
    }

    fn face_text(
        &self,
        frame: &mut canvas::Frame,
        content: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    ) {
        frame.fill_text(canvas::Text {
            content,
            position: Point::new(x, y),
            color: ui::faded(color, self.front_opacity),
            size: size.into(),
            horizontal_alignment: alignment::Horizontal::Center,
            vertical_alignment: alignment::Vertical::Center,
            shaping: text::Shaping::Advanced,
            ..canvas::Text::default()
        });
    }
}

/// The paper back of the page, visible once the turn passes the vertical and
/// sweeping over the left half of the spread.
fn draw_back(frame: &mut canvas::Frame, spine_x: f32, width: f32, height: f32) {
    if width <= f32::EPSILON {
        return;
    }

    let left = spine_x - width;

    // Diagonal white-to-grey wash so the back reads as paper, not a hole
    let wash = gradient::Linear::new(Radians(3.0 * FRAC_PI_4))
        .add_stop(0.0, Color::WHITE)
        .add_stop(
            1.0,
            Color {
                r: 0.976,
                g: 0.98,
                b: 0.984,
                a: 1.0,
            },
        );
    frame.fill_rectangle(
        Point::new(left, 0.0),
        Size::new(width, height),
        canvas::Fill::from(Gradient::Linear(wash)),
    );

    // Faint interleaved dot lattice for paper texture
    let dot = Color { a: 0.03, ..Color::BLACK };
    let step = 12.0;
    let mut row = 0u32;
    let mut y = step / 2.0;
    while y < height {
        let offset = if row % 2 == 0 { step / 2.0 } else { step };
        let mut x = left + offset;
        while x < spine_x {
            frame.fill(&Path::circle(Point::new(x, y), 1.0), dot);
            x += step;
        }
        y += step / 2.0;
        row += 1;
    }
}

/// Depth cue along the rotation edge while the page is mid-flight.
fn draw_spine_shadow(frame: &mut canvas::Frame, spine_x: f32, height: f32, angle: f32) {
    if angle <= 0.0 || angle >= 180.0 {
        return;
    }

    let shadow = gradient::Linear::new(Radians(FRAC_PI_2))
        .add_stop(0.0, Color { a: 0.18, ..Color::BLACK })
        .add_stop(0.5, Color { a: 0.06, ..Color::BLACK })
        .add_stop(1.0, Color::TRANSPARENT);
    frame.fill_rectangle(
        Point::new(spine_x, 0.0),
        Size::new(24.0, height),
        canvas::Fill::from(Gradient::Linear(shadow)),
    );
}

/// `fill_text` does no wrapping, so long lines are split by estimated glyph
/// width. Close enough for centered display text.
fn wrap_lines(content: &str, size: f32, max_width: f32) -> Vec<String> {
    let glyph = size * 0.52;
    let max_chars = (max_width / glyph).max(1.0) as usize;

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if !current.is_empty()
            && current.chars().count() + 1 + word.chars().count() > max_chars
        {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_stays_on_one_line() {
        let lines = wrap_lines("All done!", 28.0, 430.0);
        assert_eq!(lines, vec!["All done!".to_string()]);
    }

    #[test]
    fn test_long_heading_wraps_without_losing_words() {
        let text = "Flip the page to begin your little love story.";
        let lines = wrap_lines(text, 44.0, 430.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_empty_text_produces_no_lines() {
        assert!(wrap_lines("", 16.0, 430.0).is_empty());
    }
}
