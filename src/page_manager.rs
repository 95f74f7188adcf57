//! Page table and navigation
//!
//! Pages are registered callables: an optional init hook run when the
//! page becomes active, and a draw hook run every cycle while it is.
//! Both report `false` when they could not run (hook unbound, page
//! inactive) so a mis-configured page is detectable without faulting the
//! poll loop.

use alloc::boxed::Box;

use thiserror_no_std::Error;

pub type PageId = u8;

/// Maximum number of registered pages.
pub const MAX_PAGES: usize = 8;

type PageHook = Box<dyn FnMut()>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UiError {
    #[error("page table is full")]
    PageTableFull,
    #[error("page {0} is already registered")]
    DuplicatePage(PageId),
    #[error("page {0} is not registered")]
    UnknownPage(PageId),
}

/// One screenful of UI: an identifier, an active flag and two hooks.
pub struct Page {
    id: PageId,
    active: bool,
    init_hook: Option<PageHook>,
    draw_hook: Option<PageHook>,
}

impl Page {
    pub fn new(id: PageId) -> Self {
        Self {
            id,
            active: false,
            init_hook: None,
            draw_hook: None,
        }
    }

    pub fn on_init(mut self, hook: impl FnMut() + 'static) -> Self {
        self.init_hook = Some(Box::new(hook));
        self
    }

    pub fn on_draw(mut self, hook: impl FnMut() + 'static) -> Self {
        self.draw_hook = Some(Box::new(hook));
        self
    }

    pub fn set_init_hook(&mut self, hook: impl FnMut() + 'static) {
        self.init_hook = Some(Box::new(hook));
    }

    pub fn set_draw_hook(&mut self, hook: impl FnMut() + 'static) {
        self.draw_hook = Some(Box::new(hook));
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self) {
        self.active = true;
    }

    pub fn set_inactive(&mut self) {
        self.active = false;
    }

    /// Runs the init hook. `false` when none is bound.
    pub fn init(&mut self) -> bool {
        match &mut self.init_hook {
            Some(hook) => {
                hook();
                true
            }
            None => false,
        }
    }

    /// Runs the draw hook. `false` when the page is inactive or no hook
    /// is bound.
    pub fn draw(&mut self) -> bool {
        if !self.active {
            return false;
        }
        match &mut self.draw_hook {
            Some(hook) => {
                hook();
                true
            }
            None => false,
        }
    }
}

/// Owns the page table and drives navigation.
pub struct PageManager {
    pages: heapless::Vec<Page, MAX_PAGES>,
    current: Option<PageId>,
    previous: Option<PageId>,
}

impl PageManager {
    pub fn new() -> Self {
        Self {
            pages: heapless::Vec::new(),
            current: None,
            previous: None,
        }
    }

    pub fn register(&mut self, page: Page) -> Result<(), UiError> {
        if self.pages.iter().any(|p| p.id == page.id) {
            return Err(UiError::DuplicatePage(page.id));
        }
        self.pages.push(page).map_err(|_| UiError::PageTableFull)
    }

    /// Deactivates the current page, then activates and re-inits the
    /// target.
    pub fn navigate_to(&mut self, id: PageId) -> Result<(), UiError> {
        if !self.pages.iter().any(|p| p.id == id) {
            return Err(UiError::UnknownPage(id));
        }

        if let Some(current) = self.current
            && let Some(page) = self.page_mut(current)
        {
            page.set_inactive();
        }

        log::debug!("page switch: {:?} -> {}", self.current, id);
        self.previous = self.current;
        self.current = Some(id);

        if let Some(page) = self.page_mut(id) {
            page.set_active();
            page.init();
        }
        Ok(())
    }

    /// Returns to the previously active page, if there is one.
    pub fn go_back(&mut self) -> bool {
        match self.previous {
            Some(prev) => self.navigate_to(prev).is_ok(),
            None => false,
        }
    }

    pub fn current_page(&self) -> Option<PageId> {
        self.current
    }

    pub fn previous_page(&self) -> Option<PageId> {
        self.previous
    }

    pub fn page_mut(&mut self, id: PageId) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id == id)
    }

    /// Draws the active page. `false` when no page is active or its draw
    /// hook is unbound.
    pub fn draw_current(&mut self) -> bool {
        match self.current {
            Some(id) => self.page_mut(id).map(|page| page.draw()).unwrap_or(false),
            None => false,
        }
    }
}

impl Default for PageManager {
    fn default() -> Self {
        Self::new()
    }
}
