/// The page-turn state machine
///
/// `BookState` tracks how many pages have been revealed and whether a turn is
/// currently in flight. All mutation happens through three operations:
/// - `request_advance` - the reader asked for the next page
/// - `frame_tick` - the host delivered a render frame
/// - `complete_flip` - the rotation's visual transition finished
///
/// Anything illegal (turning mid-flight, turning past the last memory, a
/// stray completion signal) is a silent no-op, mirroring the disabled state
/// of the advance control.

use std::time::Instant;

use crate::animation;

/// Where the book is within a page turn.
///
/// `Fading` covers the window between the reader's request and the start of
/// the rotation: the text fade has begun but the page has not moved yet.
/// Keeping it a separate variant (rather than a second boolean) means a
/// rotation can only ever start from an in-progress fade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlipPhase {
    /// No turn in flight
    Idle,
    /// Fade started; rotation begins on the next frame
    Fading { since: Instant },
    /// Page rotating; `fade_since` keeps the text fade continuous across the hand-off
    Flipping { fade_since: Instant, since: Instant },
}

/// The mutable presentation state of the book.
#[derive(Debug, Clone, PartialEq)]
pub struct BookState {
    /// Completed flips so far; always within `0..=memory_count`
    page: usize,
    memory_count: usize,
    phase: FlipPhase,
}

impl BookState {
    /// A freshly opened book: cover up, nothing in flight.
    pub fn new(memory_count: usize) -> Self {
        Self {
            page: 0,
            memory_count,
            phase: FlipPhase::Idle,
        }
    }

    /// Ask for the next page.
    ///
    /// Ignored while a turn is already in flight or once every memory is
    /// revealed. Otherwise the text fade starts now and the rotation is
    /// deferred to the next `frame_tick`, so the fade's onset gets a frame on
    /// screen before the page starts moving.
    pub fn request_advance(&mut self, now: Instant) {
        if self.phase == FlipPhase::Idle && self.page < self.memory_count {
            self.phase = FlipPhase::Fading { since: now };
        }
    }

    /// A render frame arrived. Promotes a pending fade into the actual
    /// rotation; in any other phase the tick carries no state change.
    pub fn frame_tick(&mut self, now: Instant) {
        if let FlipPhase::Fading { since } = self.phase {
            self.phase = FlipPhase::Flipping {
                fade_since: since,
                since: now,
            };
        }
    }

    /// The rotation's visual transition finished: commit the page turn and
    /// return the book to rest. A duplicate signal finds the book `Idle` and
    /// changes nothing.
    pub fn complete_flip(&mut self) {
        if let FlipPhase::Flipping { .. } = self.phase {
            self.page = (self.page + 1).min(self.memory_count);
            self.phase = FlipPhase::Idle;
        }
    }

    /// Whether the rotation started at least a full flip duration ago. The
    /// shell polls this each frame and fires `complete_flip` once it trips.
    pub fn flip_transition_done(&self, now: Instant) -> bool {
        match self.phase {
            FlipPhase::Flipping { since, .. } => {
                now.duration_since(since) >= animation::FLIP_DURATION
            }
            _ => false,
        }
    }

    /// Completed flips so far.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn memory_count(&self) -> usize {
        self.memory_count
    }

    /// True from the advance request until the flip completes.
    pub fn is_fading(&self) -> bool {
        self.phase != FlipPhase::Idle
    }

    /// True only while the page is rotating.
    pub fn is_flipping(&self) -> bool {
        matches!(self.phase, FlipPhase::Flipping { .. })
    }

    /// A turn is in flight (fading or flipping).
    pub fn in_transition(&self) -> bool {
        self.phase != FlipPhase::Idle
    }

    /// Whether the advance control should accept a press.
    pub fn can_advance(&self) -> bool {
        self.phase == FlipPhase::Idle && self.page < self.memory_count
    }

    /// Every memory has been revealed.
    pub fn all_revealed(&self) -> bool {
        self.page == self.memory_count
    }

    /// Rotation of the overlay around the spine, in degrees (0..=180).
    pub fn flip_angle(&self, now: Instant) -> f32 {
        match self.phase {
            FlipPhase::Flipping { since, .. } => {
                180.0 * animation::flip_progress(now.duration_since(since))
            }
            _ => 0.0,
        }
    }

    /// Opacity of the right-page text: fades to 0 while a turn is in flight,
    /// 1 at rest.
    pub fn text_opacity(&self, now: Instant) -> f32 {
        match self.phase {
            FlipPhase::Idle => 1.0,
            FlipPhase::Fading { since } | FlipPhase::Flipping { fade_since: since, .. } => {
                1.0 - animation::fade_progress(now.duration_since(since))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Run one well-formed advance cycle and return the tick instant used.
    fn advance_cycle(book: &mut BookState, start: Instant) -> Instant {
        book.request_advance(start);
        let tick = start + Duration::from_millis(16);
        book.frame_tick(tick);
        book.complete_flip();
        tick
    }

    #[test]
    fn test_full_cycle_turns_one_page() {
        let mut book = BookState::new(3);
        let start = Instant::now();

        book.request_advance(start);
        assert!(book.is_fading());
        assert!(!book.is_flipping());

        book.frame_tick(start + Duration::from_millis(16));
        assert!(book.is_flipping());
        assert!(book.is_fading());

        book.complete_flip();
        assert_eq!(book.page(), 1);
        assert!(!book.is_flipping());
        assert!(!book.is_fading());
    }

    #[test]
    fn test_advance_past_the_end_is_ignored() {
        let mut book = BookState::new(3);
        let mut now = Instant::now();
        for _ in 0..3 {
            now = advance_cycle(&mut book, now);
        }
        assert!(book.all_revealed());

        let before = book.clone();
        book.request_advance(now);
        assert_eq!(book, before);
        assert!(!book.can_advance());
    }

    #[test]
    fn test_advance_mid_flight_is_ignored() {
        // Two rapid requests must produce exactly one page turn
        let mut book = BookState::new(3);
        let start = Instant::now();

        book.request_advance(start);
        book.frame_tick(start + Duration::from_millis(16));
        let mid_flight = book.clone();

        book.request_advance(start + Duration::from_millis(100));
        assert_eq!(book, mid_flight);

        book.complete_flip();
        assert_eq!(book.page(), 1);
    }

    #[test]
    fn test_advance_while_fading_is_ignored() {
        let mut book = BookState::new(3);
        let start = Instant::now();
        book.request_advance(start);

        let before = book.clone();
        book.request_advance(start + Duration::from_millis(5));
        assert_eq!(book, before);
    }

    #[test]
    fn test_duplicate_completion_is_ignored() {
        let mut book = BookState::new(3);
        advance_cycle(&mut book, Instant::now());
        assert_eq!(book.page(), 1);

        book.complete_flip();
        assert_eq!(book.page(), 1);
        assert!(!book.is_flipping());
    }

    #[test]
    fn test_stray_completion_at_rest_is_ignored() {
        let mut book = BookState::new(3);
        book.complete_flip();
        assert_eq!(book.page(), 0);
    }

    #[test]
    fn test_page_never_exceeds_memory_count() {
        let mut book = BookState::new(3);
        let mut now = Instant::now();
        for _ in 0..10 {
            now = advance_cycle(&mut book, now);
            assert!(book.page() <= book.memory_count());
        }
        assert_eq!(book.page(), 3);
    }

    #[test]
    fn test_completion_signal_timing() {
        let mut book = BookState::new(3);
        let start = Instant::now();
        book.request_advance(start);
        assert!(!book.flip_transition_done(start));

        let rotation_start = start + Duration::from_millis(16);
        book.frame_tick(rotation_start);
        assert!(!book.flip_transition_done(rotation_start + Duration::from_millis(600)));
        assert!(book.flip_transition_done(rotation_start + Duration::from_millis(1200)));
    }

    #[test]
    fn test_flip_angle_sweeps_to_180() {
        let mut book = BookState::new(3);
        let start = Instant::now();
        book.request_advance(start);
        assert_eq!(book.flip_angle(start), 0.0);

        let rotation_start = start + Duration::from_millis(16);
        book.frame_tick(rotation_start);
        assert_eq!(book.flip_angle(rotation_start), 0.0);

        let mid = book.flip_angle(rotation_start + Duration::from_millis(600));
        assert!(mid > 0.0 && mid < 180.0);
        assert_eq!(
            book.flip_angle(rotation_start + Duration::from_millis(1200)),
            180.0
        );
    }

    #[test]
    fn test_text_opacity_follows_the_fade() {
        let mut book = BookState::new(3);
        let start = Instant::now();
        assert_eq!(book.text_opacity(start), 1.0);

        book.request_advance(start);
        assert!(book.text_opacity(start + Duration::from_millis(350)) < 0.6);
        assert_eq!(book.text_opacity(start + Duration::from_millis(700)), 0.0);

        // The fade stays continuous across the fade -> flip hand-off
        book.frame_tick(start + Duration::from_millis(16));
        assert_eq!(book.text_opacity(start + Duration::from_millis(700)), 0.0);

        book.complete_flip();
        assert_eq!(book.text_opacity(start + Duration::from_millis(701)), 1.0);
    }
}
