//! Spinner shown while a page is loading.
//!
//! Based on the snake spinner pattern - a bouncing gradient bar.

use crossterm::style::Color;

/// Accent colour the snake is drawn in; the tail fades towards black.
const ACCENT: (u8, u8, u8) = (94, 129, 244);

/// Configuration for the spinner.
#[derive(Clone, Debug)]
pub struct Spinner {
    /// Width of the track in characters.
    track_width: u16,
    /// Length of the snake/bar.
    snake_len: u16,
    /// Pause frames at right end.
    right_pause: usize,
    /// Pause frames at left end.
    left_pause: usize,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            track_width: 8,
            snake_len: 6,
            right_pause: 1,
            left_pause: 20,
        }
    }
}

impl Spinner {
    /// Frame duration in milliseconds.
    pub const FRAME_MS: u64 = 60;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn track_width(&self) -> u16 {
        self.track_width
    }

    /// Number of frames in one full cycle.
    pub fn frame_count(&self) -> usize {
        let pass = (self.track_width + self.snake_len - 1) as usize;
        2 * pass + self.right_pause + self.left_pause
    }

    /// The cells of frame `tick` (wrapping), left to right.
    pub fn frame(&self, tick: usize) -> Vec<(char, Color)> {
        let pass = (self.track_width + self.snake_len - 1) as usize;
        let mut index = tick % self.frame_count().max(1);

        if index < pass {
            return self.snake_frame(index as i32, true);
        }
        index -= pass;
        if index < self.right_pause {
            return self.empty_frame();
        }
        index -= self.right_pause;
        if index < pass {
            return self.snake_frame((pass - 1 - index) as i32, false);
        }
        self.empty_frame()
    }

    fn empty_frame(&self) -> Vec<(char, Color)> {
        vec![('⬝', shade(0.5)); self.track_width as usize]
    }

    fn snake_frame(&self, head_pos: i32, moving_right: bool) -> Vec<(char, Color)> {
        let snake_len = self.snake_len as i32;
        let snake_start = head_pos - snake_len + 1;

        (0..self.track_width as i32)
            .map(|i| {
                if i >= snake_start && i <= head_pos {
                    let snake_idx = i - snake_start;
                    let t = snake_idx as f32 / (snake_len - 1).max(1) as f32;
                    let t = if moving_right { t } else { 1.0 - t };
                    // Tail is dim (t=0), head is bright (t=1).
                    ('■', shade(0.4 * (1.0 - t)))
                } else {
                    ('⬝', shade(0.5))
                }
            })
            .collect()
    }
}

fn shade(darken: f32) -> Color {
    let scale = |c: u8| (c as f32 * (1.0 - darken)).round() as u8;
    Color::Rgb {
        r: scale(ACCENT.0),
        g: scale(ACCENT.1),
        b: scale(ACCENT.2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_width_matches_track() {
        let spinner = Spinner::new();
        for tick in 0..spinner.frame_count() {
            assert_eq!(spinner.frame(tick).len(), spinner.track_width() as usize);
        }
    }

    #[test]
    fn test_first_frame_shows_head_only() {
        let spinner = Spinner::new();
        let frame = spinner.frame(0);
        assert_eq!(frame[0].0, '■');
        assert!(frame[1..].iter().all(|(c, _)| *c == '⬝'));
    }

    #[test]
    fn test_frames_wrap() {
        let spinner = Spinner::new();
        assert_eq!(spinner.frame(3), spinner.frame(3 + spinner.frame_count()));
    }

    #[test]
    fn test_head_is_brightest() {
        let spinner = Spinner::new();
        let frame = spinner.frame(7);
        assert_eq!(frame[7].1, shade(0.0));
    }
}
