/// Vertical scroll position of the panel view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute limits after a render; the offset is clamped into range
    pub fn update_bounds(&mut self, content_lines: u32, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as u32)
            .min(u16::MAX as u32) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Half a viewport down
    pub fn page_down(&mut self) {
        self.scroll_down((self.viewport_height / 2).max(1));
    }

    /// Half a viewport up
    pub fn page_up(&mut self) {
        self.scroll_up((self.viewport_height / 2).max(1));
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled(content: u32, viewport: u16) -> ScrollState {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(content, viewport);
        scroll
    }

    #[test]
    fn test_content_shorter_than_viewport_cannot_scroll() {
        let mut scroll = scrolled(5, 20);
        scroll.scroll_down(3);
        assert_eq!(scroll.max_offset, 0);
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_scroll_down_and_up_are_clamped() {
        let mut scroll = scrolled(100, 20);

        scroll.scroll_down(500);
        assert_eq!(scroll.offset, 80);

        scroll.scroll_up(500);
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_shrinking_content_clamps_offset() {
        let mut scroll = scrolled(100, 20);
        scroll.jump_to_bottom();

        scroll.update_bounds(30, 20);
        assert_eq!(scroll.offset, 10);
    }

    #[test]
    fn test_huge_content_saturates() {
        let scroll = scrolled(70_000, 10);
        assert_eq!(scroll.max_offset, u16::MAX);
    }

    #[test]
    fn test_paging_moves_half_a_viewport() {
        let mut scroll = scrolled(100, 20);

        scroll.page_down();
        scroll.page_down();
        assert_eq!(scroll.offset, 20);

        scroll.page_up();
        assert_eq!(scroll.offset, 10);
    }

    #[test]
    fn test_paging_tiny_viewport_still_moves() {
        let mut scroll = scrolled(10, 1);
        scroll.page_down();
        assert_eq!(scroll.offset, 1);
    }

    #[test]
    fn test_jump_to_top() {
        let mut scroll = scrolled(100, 20);
        scroll.scroll_down(42);
        scroll.jump_to_top();
        assert_eq!(scroll.offset, 0);
    }
}
