/// Book rendering module
///
/// This module turns `BookState` into what the reader actually sees:
/// - Surface descriptors and the static page widgets (page.rs)
/// - The rotating page overlay drawn on a canvas (flip.rs)

pub mod flip;
pub mod page;

use iced::Color;

/// Rose accent for the greeting headline and the advance button.
pub const ROSE: Color = Color {
    r: 0.883,
    g: 0.113,
    b: 0.282,
    a: 1.0,
};

/// Deeper rose for button hover.
pub const ROSE_DARK: Color = Color {
    r: 0.745,
    g: 0.07,
    b: 0.235,
    a: 1.0,
};

/// Green accent for the closing heading.
pub const EMERALD: Color = Color {
    r: 0.02,
    g: 0.588,
    b: 0.412,
    a: 1.0,
};

/// Body text grey.
pub const GREY_TEXT: Color = Color {
    r: 0.294,
    g: 0.333,
    b: 0.388,
    a: 1.0,
};

/// Muted grey for hints.
pub const GREY_MUTED: Color = Color {
    r: 0.42,
    g: 0.447,
    b: 0.502,
    a: 1.0,
};

/// Faint grey for the cover marker.
pub const GREY_FAINT: Color = Color {
    r: 0.612,
    g: 0.639,
    b: 0.686,
    a: 1.0,
};

/// Apply a fade to a color by scaling its alpha.
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}
