use std::rc::Rc;

use yew::prelude::*;

/// The two use-case showcases. A closed set; the section can only ever
/// display one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UseCaseTab {
    Creators,
    Engineers,
}

/// Transient view state owned by the landing page. Everything here is reset
/// on reload; nothing is persisted anywhere.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView {
    pub is_scrolled: bool,
    pub mobile_menu_open: bool,
    pub active_tab: UseCaseTab,
    pub active_faq: Option<usize>,
}

impl Default for PageView {
    fn default() -> Self {
        Self {
            is_scrolled: false,
            mobile_menu_open: false,
            active_tab: UseCaseTab::Creators,
            active_faq: None,
        }
    }
}

pub enum PageAction {
    SetScrolled(bool),
    ToggleMobileMenu,
    /// Dispatched by every mobile nav link: selecting a destination always
    /// closes the menu.
    CloseMobileMenu,
    SelectTab(UseCaseTab),
    /// Same index collapses; a different index opens that entry and closes
    /// whichever one was open. At most one entry is ever expanded.
    ToggleFaq(usize),
}

impl PageView {
    fn apply(&self, action: PageAction) -> Self {
        let mut next = self.clone();
        match action {
            PageAction::SetScrolled(past) => next.is_scrolled = past,
            PageAction::ToggleMobileMenu => next.mobile_menu_open = !self.mobile_menu_open,
            PageAction::CloseMobileMenu => next.mobile_menu_open = false,
            PageAction::SelectTab(tab) => next.active_tab = tab,
            PageAction::ToggleFaq(index) => {
                next.active_faq = if self.active_faq == Some(index) {
                    None
                } else {
                    Some(index)
                };
            }
        }
        next
    }
}

impl Reducible for PageView {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: PageAction) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_accordion_keeps_one_entry_open() {
        let view = PageView::default()
            .apply(PageAction::ToggleFaq(2))
            .apply(PageAction::ToggleFaq(0));
        assert_eq!(view.active_faq, Some(0));
    }

    #[test]
    fn faq_toggle_twice_collapses() {
        let view = PageView::default()
            .apply(PageAction::ToggleFaq(0))
            .apply(PageAction::ToggleFaq(0));
        assert_eq!(view.active_faq, None);
    }

    #[test]
    fn tab_selection_swaps_active_block() {
        let view = PageView::default().apply(PageAction::SelectTab(UseCaseTab::Engineers));
        assert_eq!(view.active_tab, UseCaseTab::Engineers);

        let view = view.apply(PageAction::SelectTab(UseCaseTab::Creators));
        assert_eq!(view.active_tab, UseCaseTab::Creators);
    }

    #[test]
    fn nav_link_closes_open_mobile_menu() {
        let view = PageView::default().apply(PageAction::ToggleMobileMenu);
        assert!(view.mobile_menu_open);

        let view = view.apply(PageAction::CloseMobileMenu);
        assert!(!view.mobile_menu_open);
    }

    #[test]
    fn close_menu_is_idempotent() {
        let view = PageView::default()
            .apply(PageAction::CloseMobileMenu)
            .apply(PageAction::CloseMobileMenu);
        assert!(!view.mobile_menu_open);
    }

    #[test]
    fn scrolled_flag_tracks_sampler() {
        let view = PageView::default().apply(PageAction::SetScrolled(true));
        assert!(view.is_scrolled);

        let view = view.apply(PageAction::SetScrolled(false));
        assert!(!view.is_scrolled);
    }
}
