//! Slide position and auto-play state for the testimonials carousel.
//!
//! `Rotator` knows nothing about timers or the DOM; the component drives
//! [`Rotator::advance`] from an interval and calls the navigation methods from
//! click handlers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotator {
    len: usize,
    index: usize,
    auto_play: bool,
}

impl Default for Rotator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Rotator {
    /// A rotator over `len` slides, starting on the first one with auto-play on.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            auto_play: true,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_play
    }

    /// Whether an auto-advance timer should currently be armed.
    pub fn wants_timer(&self) -> bool {
        self.auto_play && self.len > 0
    }

    /// Horizontal shift of the slide track, in percent of the container width.
    pub fn offset_percent(&self) -> usize {
        self.index * 100
    }

    /// Replaces the slide count. An index that no longer fits goes back to 0.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }

    /// Timer tick. Does nothing once the user has taken over.
    pub fn advance(&mut self) -> bool {
        if !self.wants_timer() {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    pub fn next(&mut self) {
        self.auto_play = false;
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        self.auto_play = false;
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jumps to `index`; out-of-range targets leave the position alone.
    pub fn go_to(&mut self, index: usize) {
        self.auto_play = false;
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_back_to_start_after_len_steps() {
        for len in 1..=7 {
            for start in 0..len {
                let mut rotator = Rotator::new(len);
                rotator.go_to(start);
                for _ in 0..len {
                    rotator.next();
                }
                assert_eq!(rotator.index(), start, "len {len}, start {start}");
            }
        }
    }

    #[test]
    fn prev_from_zero_lands_on_last() {
        for len in 1..=7 {
            let mut rotator = Rotator::new(len);
            rotator.prev();
            assert_eq!(rotator.index(), len - 1);
        }
    }

    #[test]
    fn single_slide_stays_put() {
        let mut rotator = Rotator::new(1);
        assert!(rotator.advance());
        assert_eq!(rotator.index(), 0);
        rotator.next();
        rotator.prev();
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn empty_rotator_never_moves_or_arms() {
        let mut rotator = Rotator::new(0);
        assert!(!rotator.wants_timer());
        assert!(!rotator.advance());
        rotator.next();
        rotator.prev();
        rotator.go_to(3);
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn manual_navigation_disables_auto_play_for_good() {
        let actions: [fn(&mut Rotator); 3] = [Rotator::next, Rotator::prev, |r| r.go_to(1)];
        for action in actions {
            let mut rotator = Rotator::new(3);
            assert!(rotator.is_auto_playing());
            action(&mut rotator);
            assert!(!rotator.is_auto_playing());

            rotator.set_len(5);
            let before = rotator.index();
            assert!(!rotator.advance());
            assert_eq!(rotator.index(), before);
            assert!(!rotator.is_auto_playing());
        }
    }

    #[test]
    fn timer_ticks_advance_while_auto_playing() {
        let mut rotator = Rotator::new(3);
        assert!(rotator.wants_timer());
        rotator.advance();
        rotator.advance();
        assert_eq!(rotator.index(), 2);
        rotator.advance();
        assert_eq!(rotator.index(), 0);
        assert!(rotator.is_auto_playing());
    }

    #[test]
    fn go_to_ignores_out_of_range_targets() {
        let mut rotator = Rotator::new(3);
        rotator.go_to(1);
        rotator.go_to(3);
        assert_eq!(rotator.index(), 1);
    }

    #[test]
    fn shrinking_the_list_resets_a_stale_index() {
        let mut rotator = Rotator::new(4);
        rotator.go_to(3);
        rotator.set_len(2);
        assert_eq!(rotator.index(), 0);
        rotator.go_to(1);
        rotator.set_len(5);
        assert_eq!(rotator.index(), 1);
        assert_eq!(rotator.offset_percent(), 100);
    }
}
