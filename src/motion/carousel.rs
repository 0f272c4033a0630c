use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use crate::schedule::TaskScope;

use super::{wrap_offset, MotionError};

/// Ticket for a manual-navigation cooldown. Only the most recent one can
/// resume autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooldown(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    hovered: bool,
    cooldown: Option<Cooldown>,
    issued: u64,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, MotionError> {
        if len == 0 {
            return Err(MotionError::Empty);
        }
        Ok(Self {
            index: 0,
            len,
            hovered: false,
            cooldown: None,
            issued: 0,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    pub fn is_playing(&self) -> bool {
        !self.hovered && self.cooldown.is_none()
    }

    /// Timer-driven advance. Returns whether the index moved.
    pub fn tick(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.index = wrap_offset(self.index, self.len, true);
        true
    }

    pub fn next(&mut self) -> Cooldown {
        self.index = wrap_offset(self.index, self.len, true);
        self.start_cooldown()
    }

    pub fn prev(&mut self) -> Cooldown {
        self.index = wrap_offset(self.index, self.len, false);
        self.start_cooldown()
    }

    pub fn jump(&mut self, index: usize) -> Option<Cooldown> {
        if index >= self.len {
            return None;
        }
        self.index = index;
        Some(self.start_cooldown())
    }

    fn start_cooldown(&mut self) -> Cooldown {
        self.issued += 1;
        let cooldown = Cooldown(self.issued);
        self.cooldown = Some(cooldown);
        cooldown
    }

    /// Ends `cooldown` if it is still the active one.
    pub fn cooldown_expired(&mut self, cooldown: Cooldown) -> bool {
        if self.cooldown == Some(cooldown) {
            self.cooldown = None;
            true
        } else {
            false
        }
    }

    pub fn hover_enter(&mut self) {
        self.hovered = true;
    }

    pub fn hover_leave(&mut self) {
        self.hovered = false;
    }
}

/// Wires a [`Carousel`] to timers: autoplay ticks every `interval` while
/// playing, and manual navigation pauses it for `cooldown`.
#[derive(Clone)]
pub struct CarouselDriver {
    state: Rc<RefCell<Carousel>>,
    scope: TaskScope,
    interval: Duration,
    cooldown: Duration,
    epoch: Rc<Cell<u64>>,
    render: Rc<dyn Fn(usize)>,
}

impl CarouselDriver {
    pub fn start(
        scope: &TaskScope,
        carousel: Carousel,
        interval: Duration,
        cooldown: Duration,
        render: impl Fn(usize) + 'static,
    ) -> Self {
        let driver = Self {
            state: Rc::new(RefCell::new(carousel)),
            scope: scope.clone(),
            interval,
            cooldown,
            epoch: Rc::new(Cell::new(0)),
            render: Rc::new(render),
        };
        driver.render();
        driver.arm_autoplay();
        driver
    }

    pub fn index(&self) -> usize {
        self.state.borrow().index()
    }

    pub fn is_playing(&self) -> bool {
        self.state.borrow().is_playing()
    }

    pub fn next(&self) {
        let cooldown = self.state.borrow_mut().next();
        self.after_manual(cooldown);
    }

    pub fn prev(&self) {
        let cooldown = self.state.borrow_mut().prev();
        self.after_manual(cooldown);
    }

    pub fn jump(&self, index: usize) {
        let cooldown = self.state.borrow_mut().jump(index);
        match cooldown {
            Some(cooldown) => self.after_manual(cooldown),
            None => log::warn!("ignoring jump to slide {index}"),
        }
    }

    pub fn hover_enter(&self) {
        self.state.borrow_mut().hover_enter();
        self.arm_autoplay();
    }

    pub fn hover_leave(&self) {
        self.state.borrow_mut().hover_leave();
        self.arm_autoplay();
    }

    fn render(&self) {
        let index = self.index();
        (self.render)(index);
    }

    fn after_manual(&self, cooldown: Cooldown) {
        self.render();
        self.arm_autoplay();

        let driver = self.clone();
        self.scope.spawn_after(self.cooldown, move || {
            if driver.state.borrow_mut().cooldown_expired(cooldown) {
                driver.arm_autoplay();
            }
        });
    }

    /// Drops any running tick chain and, when playing, starts a fresh one.
    fn arm_autoplay(&self) {
        let epoch = self.epoch.get() + 1;
        self.epoch.set(epoch);
        if !self.is_playing() {
            return;
        }
        let driver = self.clone();
        self.scope.spawn_after(self.interval, move || {
            if driver.epoch.get() != epoch {
                return;
            }
            if driver.state.borrow_mut().tick() {
                driver.render();
            }
            driver.arm_autoplay();
        });
    }
}
