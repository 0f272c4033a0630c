use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
    time::Duration,
};

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::{
    content::CONFIG,
    motion::{Bounds, SectionGeometry, SectionId},
    schedule::{Scheduler, TaskHandle, TaskScope},
};

/// Browser timeouts via `setTimeout`.
#[derive(Default)]
pub struct BrowserScheduler {
    next_id: Cell<u64>,
    live: Rc<RefCell<HashMap<u64, TimeoutHandle>>>,
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<TaskHandle> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let live = self.live.clone();
        let handle = set_timeout_with_handle(
            move || {
                live.borrow_mut().remove(&id);
                task();
            },
            delay,
        )
        .map_err(|e| log::error!("couldn't set timeout: {e:?}"))
        .ok()?;
        self.live.borrow_mut().insert(id, handle);
        Some(TaskHandle(id))
    }

    fn cancel(&self, handle: TaskHandle) {
        if let Some(timeout) = self.live.borrow_mut().remove(&handle.0) {
            timeout.clear();
        }
    }
}

/// A task scope tied to the current component; cancelled on cleanup.
pub fn use_task_scope() -> StoredValue<TaskScope, LocalStorage> {
    let scope = StoredValue::new_local(TaskScope::new(Rc::new(BrowserScheduler::default())));
    on_cleanup(move || {
        scope.try_with_value(TaskScope::cancel);
    });
    scope
}

/// Section positions read from the live document.
pub struct DocumentGeometry;

impl SectionGeometry for DocumentGeometry {
    fn bounds(&self, section: SectionId) -> Option<Bounds> {
        let rect = document()
            .get_element_by_id(section.as_str())?
            .get_bounding_client_rect();
        Some(Bounds {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }
}

pub fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or_default()
}

pub fn smooth_scroll_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Scrolls so `section` sits just below the fixed header.
pub fn scroll_to_section(section: SectionId) {
    let Some(bounds) = DocumentGeometry.bounds(section) else {
        log::warn!("no element for section {section}");
        return;
    };
    let target = CONFIG.scroll().scroll_target(bounds.top, scroll_offset());
    log::debug!("scrolling to {section} at {target}");
    smooth_scroll_to(target);
}
