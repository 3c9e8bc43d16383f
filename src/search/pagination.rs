//! Page arithmetic and the page indicator control.
//!
//! The indicator lays out items like a classic web paginator with no
//! boundary pages and one sibling on each side of the current page:
//!
//! ```text
//! «  ‹  1 2 3 4 …  ›  »        page 1 of 10
//! «  ‹  … 4 5 6 …  ›  »        page 5 of 10
//! «  ‹  … 7 8 9 10  ›  »       page 10 of 10
//! ```
//!
//! An ellipsis can be opened into a "jump to page" prompt.

/// Dogs per search page.
pub const PAGE_SIZE: usize = 12;

/// Pages needed for `total` results. Zero when there are no results.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// Clamp a 1-based page into `[1, max(1, page_count(total))]`.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, page_count(total).max(1))
}

/// Offset of the first result on 1-based `page`.
pub fn offset(page: usize) -> usize {
    page.saturating_sub(1) * PAGE_SIZE
}

/// One slot of the page indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    First,
    Previous,
    Page(usize),
    StartEllipsis,
    EndEllipsis,
    Next,
    Last,
}

impl PageItem {
    /// Page this item navigates to, or `None` when disabled or current.
    pub fn target(&self, page: usize, count: usize) -> Option<usize> {
        let target = match *self {
            PageItem::First => 1,
            PageItem::Previous => page.checked_sub(1)?,
            PageItem::Page(n) => n,
            PageItem::Next => page + 1,
            PageItem::Last => count,
            PageItem::StartEllipsis | PageItem::EndEllipsis => return None,
        };
        (target >= 1 && target <= count && target != page).then_some(target)
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageItem::StartEllipsis | PageItem::EndEllipsis)
    }
}

const BOUNDARY_COUNT: i64 = 0;
const SIBLING_COUNT: i64 = 1;

/// Indicator items for `page` of `count` pages.
pub fn page_items(page: usize, count: usize) -> Vec<PageItem> {
    let page = page as i64;
    let count = count as i64;

    let siblings_start = (page - SIBLING_COUNT)
        .min(count - BOUNDARY_COUNT - SIBLING_COUNT * 2 - 1)
        .max(BOUNDARY_COUNT + 2);
    let siblings_end = (page + SIBLING_COUNT)
        .max(BOUNDARY_COUNT + SIBLING_COUNT * 2 + 2)
        .min(count - BOUNDARY_COUNT - 1);

    let mut items = vec![PageItem::First, PageItem::Previous];

    for n in 1..=BOUNDARY_COUNT.min(count) {
        items.push(PageItem::Page(n as usize));
    }

    if siblings_start > BOUNDARY_COUNT + 2 {
        items.push(PageItem::StartEllipsis);
    } else if BOUNDARY_COUNT + 1 < count - BOUNDARY_COUNT {
        items.push(PageItem::Page((BOUNDARY_COUNT + 1) as usize));
    }

    for n in siblings_start..=siblings_end {
        items.push(PageItem::Page(n as usize));
    }

    if siblings_end < count - BOUNDARY_COUNT - 1 {
        items.push(PageItem::EndEllipsis);
    } else if count - BOUNDARY_COUNT > BOUNDARY_COUNT {
        items.push(PageItem::Page((count - BOUNDARY_COUNT) as usize));
    }

    for n in (count - BOUNDARY_COUNT + 1).max(BOUNDARY_COUNT + 1)..=count {
        items.push(PageItem::Page(n as usize));
    }

    items.push(PageItem::Next);
    items.push(PageItem::Last);
    items
}

/// Which ellipsis a jump prompt replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpSide {
    Start,
    End,
}

/// Open "jump to page" prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpPrompt {
    pub side: JumpSide,
    /// Digits typed so far
    pub input: String,
}

/// Interactive page indicator.
///
/// Every method that can change the page returns the new page instead of
/// applying it; the owner decides whether to navigate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageIndicator {
    page: usize,
    count: usize,
    jump: Option<JumpPrompt>,
}

impl PageIndicator {
    pub fn new(page: usize, count: usize) -> Self {
        Self {
            page,
            count,
            jump: None,
        }
    }

    /// Follow the owner's page and page count.
    pub fn sync(&mut self, page: usize, count: usize) {
        if page != self.page || count != self.count {
            self.page = page;
            self.count = count;
            self.jump = None;
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn items(&self) -> Vec<PageItem> {
        page_items(self.page, self.count)
    }

    pub fn jump(&self) -> Option<&JumpPrompt> {
        self.jump.as_ref()
    }

    /// Page `delta` steps away, if it exists.
    pub fn step(&self, delta: i64) -> Option<usize> {
        let target = self.page as i64 + delta;
        if target < 1 {
            return None;
        }
        self.valid_target(target as usize)
    }

    pub fn first(&self) -> Option<usize> {
        PageItem::First.target(self.page, self.count)
    }

    pub fn last(&self) -> Option<usize> {
        PageItem::Last.target(self.page, self.count)
    }

    /// Open the jump prompt at an ellipsis, preferring the trailing one.
    ///
    /// Returns `false` when no ellipsis is shown.
    pub fn open_jump(&mut self) -> bool {
        let items = self.items();
        let side = if items.contains(&PageItem::EndEllipsis) {
            JumpSide::End
        } else if items.contains(&PageItem::StartEllipsis) {
            JumpSide::Start
        } else {
            return false;
        };
        self.jump = Some(JumpPrompt {
            side,
            input: String::new(),
        });
        true
    }

    /// Type into the prompt. Anything but ASCII digits is ignored.
    pub fn push_char(&mut self, c: char) {
        if let Some(jump) = self.jump.as_mut() {
            if c.is_ascii_digit() && jump.input.len() < 9 {
                jump.input.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(jump) = self.jump.as_mut() {
            jump.input.pop();
        }
    }

    /// Close the prompt, returning the entered page when it is valid and new.
    pub fn submit(&mut self) -> Option<usize> {
        let jump = self.jump.take()?;
        let target: usize = jump.input.parse().ok()?;
        self.valid_target(target)
    }

    pub fn cancel(&mut self) {
        self.jump = None;
    }

    fn valid_target(&self, target: usize) -> Option<usize> {
        (target >= 1 && target <= self.count && target != self.page).then_some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::*;

    #[test]
    fn test_page_count_and_clamp() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(12), 1);
        assert_eq!(page_count(30), 3);
        assert_eq!(clamp_page(5, 30), 3);
        assert_eq!(clamp_page(0, 30), 1);
        assert_eq!(clamp_page(4, 0), 1);
        assert_eq!(offset(1), 0);
        assert_eq!(offset(3), 24);
    }

    #[test]
    fn test_items_middle_page() {
        assert_eq!(
            page_items(5, 10),
            vec![First, Previous, StartEllipsis, Page(4), Page(5), Page(6), EndEllipsis, Next, Last]
        );
    }

    #[test]
    fn test_items_edges() {
        assert_eq!(
            page_items(1, 10),
            vec![First, Previous, Page(1), Page(2), Page(3), Page(4), EndEllipsis, Next, Last]
        );
        assert_eq!(
            page_items(10, 10),
            vec![First, Previous, StartEllipsis, Page(7), Page(8), Page(9), Page(10), Next, Last]
        );
    }

    #[test]
    fn test_items_small_counts() {
        assert_eq!(
            page_items(1, 3),
            vec![First, Previous, Page(1), Page(2), Page(3), Next, Last]
        );
        assert_eq!(page_items(1, 1), vec![First, Previous, Page(1), Next, Last]);
        assert_eq!(page_items(1, 0), vec![First, Previous, Next, Last]);
    }

    #[test]
    fn test_item_targets() {
        assert_eq!(Previous.target(1, 5), None);
        assert_eq!(First.target(1, 5), None);
        assert_eq!(Next.target(1, 5), Some(2));
        assert_eq!(Last.target(5, 5), None);
        assert_eq!(Page(3).target(3, 5), None);
        assert_eq!(EndEllipsis.target(1, 5), None);
    }

    #[test]
    fn test_step() {
        let indicator = PageIndicator::new(2, 3);
        assert_eq!(indicator.step(1), Some(3));
        assert_eq!(indicator.step(-1), Some(1));
        assert_eq!(indicator.step(2), None);
        assert_eq!(indicator.step(-2), None);
    }

    #[test]
    fn test_jump_prompt_validates_input() {
        let mut indicator = PageIndicator::new(1, 10);
        assert!(indicator.open_jump());
        assert_eq!(indicator.jump().map(|j| j.side), Some(JumpSide::End));

        indicator.push_char('7');
        indicator.push_char('x');
        assert_eq!(indicator.jump().map(|j| j.input.as_str()), Some("7"));
        assert_eq!(indicator.submit(), Some(7));
        assert!(indicator.jump().is_none());

        indicator.open_jump();
        indicator.push_char('4');
        indicator.push_char('2');
        assert_eq!(indicator.submit(), None);

        indicator.open_jump();
        indicator.push_char('1');
        assert_eq!(indicator.submit(), None, "same page is not a change");
    }

    #[test]
    fn test_jump_requires_ellipsis() {
        let mut indicator = PageIndicator::new(1, 3);
        assert!(!indicator.open_jump());

        let mut indicator = PageIndicator::new(10, 10);
        assert!(indicator.open_jump());
        assert_eq!(indicator.jump().map(|j| j.side), Some(JumpSide::Start));
        indicator.cancel();
        assert!(indicator.jump().is_none());
    }

    #[test]
    fn test_sync_closes_prompt_on_change() {
        let mut indicator = PageIndicator::new(1, 10);
        indicator.open_jump();
        indicator.sync(1, 10);
        assert!(indicator.jump().is_some());
        indicator.sync(2, 10);
        assert!(indicator.jump().is_none());
    }
}
