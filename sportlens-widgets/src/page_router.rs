//! # PageRouter - Home / Predict navigation
//!
//! Tracks which page is visible and a back stack. The shell asks the router
//! where to go and then toggles page visibility from the returned list.

use makepad_widgets::LiveId;

#[derive(Clone, Debug)]
pub struct PageRouter {
    current_page: LiveId,
    /// Back stack; the last entry is always `current_page`
    history: Vec<LiveId>,
    pages: Vec<LiveId>,
}

impl PageRouter {
    /// Router starting on `initial_page`; `initial_page` is registered if missing
    pub fn new(initial_page: LiveId, pages: Vec<LiveId>) -> Self {
        let mut router = Self {
            current_page: initial_page,
            history: vec![initial_page],
            pages,
        };
        router.register_page(initial_page);
        router
    }

    pub fn register_page(&mut self, page_id: LiveId) {
        if !self.pages.contains(&page_id) {
            self.pages.push(page_id);
        }
    }

    /// Navigate to `page_id`. If it is already on the back stack, everything
    /// above it is dropped.
    ///
    /// Returns the pages to hide, or `None` if nothing changes (unknown page or
    /// already there).
    pub fn navigate_to(&mut self, page_id: LiveId) -> Option<Vec<LiveId>> {
        if !self.pages.contains(&page_id) {
            log::warn!("PageRouter: unknown page {:?}", page_id);
            return None;
        }
        if self.current_page == page_id {
            return None;
        }

        // Revisiting a page unwinds the back stack to it
        match self.history.iter().position(|&p| p == page_id) {
            Some(index) => self.history.truncate(index + 1),
            None => self.history.push(page_id),
        }
        self.current_page = page_id;
        Some(self.pages_to_hide())
    }

    /// Go back one page. Returns the page now shown and the pages to hide.
    pub fn navigate_back(&mut self) -> Option<(LiveId, Vec<LiveId>)> {
        if self.history.len() <= 1 {
            return None;
        }
        self.history.pop();
        self.current_page = *self.history.last()?;
        Some((self.current_page, self.pages_to_hide()))
    }

    /// Every registered page except the current one
    pub fn pages_to_hide(&self) -> Vec<LiveId> {
        self.pages
            .iter()
            .filter(|&&p| p != self.current_page)
            .copied()
            .collect()
    }

    pub fn current_page(&self) -> LiveId {
        self.current_page
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }
}

impl Default for PageRouter {
    fn default() -> Self {
        Self::new(LiveId(0), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(name: &str) -> LiveId {
        LiveId::from_str_with_lut(name).unwrap()
    }

    #[test]
    fn test_home_to_predict_and_back() {
        let home = page("home_page");
        let predict = page("predict_page");
        let mut router = PageRouter::new(home, vec![predict]);

        assert_eq!(router.current_page(), home);
        assert!(!router.can_go_back());
        assert_eq!(router.pages_to_hide(), vec![predict]);

        let hidden = router.navigate_to(predict).unwrap();
        assert_eq!(router.current_page(), predict);
        assert_eq!(hidden, vec![home]);
        assert!(router.can_go_back());

        let (shown, hidden) = router.navigate_back().unwrap();
        assert_eq!(shown, home);
        assert_eq!(hidden, vec![predict]);
        assert!(router.navigate_back().is_none());
    }

    #[test]
    fn test_toggling_pages_keeps_history_bounded() {
        let home = page("home_page");
        let predict = page("predict_page");
        let mut router = PageRouter::new(home, vec![predict]);

        for _ in 0..10 {
            router.navigate_to(predict).unwrap();
            router.navigate_to(home).unwrap();
        }

        assert_eq!(router.current_page(), home);
        assert!(!router.can_go_back());
        assert!(router.navigate_back().is_none());

        router.navigate_to(predict).unwrap();
        let (shown, _) = router.navigate_back().unwrap();
        assert_eq!(shown, home);
    }

    #[test]
    fn test_noop_navigation() {
        let home = page("home_page");
        let mut router = PageRouter::new(home, vec![home]);

        assert!(router.navigate_to(home).is_none());
        assert!(router.navigate_to(page("nowhere")).is_none());
        assert_eq!(router.current_page(), home);
        assert!(!router.can_go_back());
    }
}
