use crate::consts;
use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

/// Receiver for score updates
pub(crate) trait ScoreSink {
    fn set_displayed_score(&mut self, value: u32);
}

/// The score bar shown above the playing field
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct ScoreBoard {
    displayed: u32,
}

impl ScoreBoard {
    pub(crate) fn displayed(&self) -> u32 {
        self.displayed
    }
}

impl ScoreSink for ScoreBoard {
    fn set_displayed_score(&mut self, value: u32) {
        self.displayed = value;
    }
}

impl Widget for &ScoreBoard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::styled(format!(" Score: {}", self.displayed()), consts::SCORE_BAR_STYLE)
            .render(area, buf);
    }
}
