use std::{rc::Rc, time::Duration};

use crate::schedule::TaskScope;

use super::{wrap_offset, MotionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTimings {
    pub type_delay: Duration,
    pub hold_delay: Duration,
    pub delete_delay: Duration,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(150),
            hold_delay: Duration::from_millis(2000),
            delete_delay: Duration::from_millis(100),
        }
    }
}

/// Role-label rotation for the hero banner.
///
/// Each call to [`Typewriter::step`] performs one timed transition; the delay
/// to wait before the next step is given by [`Typewriter::delay`].
#[derive(Debug, Clone)]
pub struct Typewriter {
    labels: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    phase: Phase,
    timings: TypewriterTimings,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(
        labels: &[S],
        timings: TypewriterTimings,
    ) -> Result<Self, MotionError> {
        if labels.is_empty() {
            return Err(MotionError::Empty);
        }
        Ok(Self {
            labels: labels.iter().map(|l| l.as_ref().chars().collect()).collect(),
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            timings,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of characters of the current label on screen.
    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn text(&self) -> String {
        self.current().iter().take(self.shown).collect()
    }

    fn current(&self) -> &[char] {
        &self.labels[self.index]
    }

    pub fn delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.timings.type_delay,
            Phase::Holding => self.timings.hold_delay,
            Phase::Deleting => self.timings.delete_delay,
        }
    }

    pub fn step(&mut self) {
        let len = self.current().len();
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = wrap_offset(self.index, self.labels.len(), true);
                    self.phase = Phase::Typing;
                }
            }
        }
    }

    /// Steps needed to type, hold, and delete the label at `index`.
    pub fn cycle_len(&self, index: usize) -> usize {
        let len = self.labels[index % self.labels.len()].len();
        // typing steps, one hold step, deleting steps (at least one)
        len.max(1) + 1 + len.max(1)
    }
}

/// Runs the typewriter for as long as `scope` is alive, handing every new
/// state to `render`.
pub fn run(scope: &TaskScope, typewriter: Typewriter, render: impl Fn(&Typewriter) + 'static) {
    render(&typewriter);
    schedule_step(scope.clone(), typewriter, Rc::new(render));
}

fn schedule_step(scope: TaskScope, mut typewriter: Typewriter, render: Rc<dyn Fn(&Typewriter)>) {
    let delay = typewriter.delay();
    let next_scope = scope.clone();
    scope.spawn_after(delay, move || {
        typewriter.step();
        render(&typewriter);
        schedule_step(next_scope, typewriter, render);
    });
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::schedule::ManualScheduler;

    const ROLES: [&str; 4] = ["Developer", "Designer", "Digital Marketer", "ECE Student"];

    fn typewriter() -> Typewriter {
        Typewriter::new(&ROLES, TypewriterTimings::default()).unwrap()
    }

    fn run_cycle(t: &mut Typewriter) {
        let steps = t.cycle_len(t.index());
        for _ in 0..steps {
            t.step();
        }
    }

    #[test]
    fn test_empty_labels_rejected() {
        let labels: [&str; 0] = [];
        assert_eq!(
            Typewriter::new(&labels, TypewriterTimings::default()).unwrap_err(),
            MotionError::Empty
        );
    }

    #[test]
    fn test_types_holds_deletes() {
        let mut t = Typewriter::new(&["Hey"], TypewriterTimings::default()).unwrap();
        assert_eq!(t.text(), "");
        assert_eq!(t.delay(), Duration::from_millis(150));

        t.step();
        assert_eq!(t.text(), "H");
        t.step();
        t.step();
        assert_eq!(t.text(), "Hey");
        assert_eq!(t.phase(), Phase::Holding);
        assert_eq!(t.delay(), Duration::from_millis(2000));

        t.step();
        assert_eq!(t.phase(), Phase::Deleting);
        assert_eq!(t.text(), "Hey");
        assert_eq!(t.delay(), Duration::from_millis(100));

        t.step();
        assert_eq!(t.text(), "He");
        t.step();
        t.step();
        assert_eq!(t.text(), "");
        assert_eq!(t.phase(), Phase::Typing);
        assert_eq!(t.index(), 0);
    }

    #[test]
    fn test_index_after_k_cycles() {
        let mut t = typewriter();
        for k in 1..=11 {
            run_cycle(&mut t);
            assert_eq!(t.index(), k % ROLES.len());
            assert_eq!(t.shown(), 0);
            assert_eq!(t.phase(), Phase::Typing);
        }
    }

    #[test]
    fn test_shown_is_bounded_and_monotonic_per_phase() {
        let mut t = typewriter();
        for _ in 0..500 {
            let before = (t.phase(), t.index(), t.shown());
            t.step();
            let len = ROLES[t.index()].chars().count();
            assert!(t.shown() <= len);
            match before {
                (Phase::Typing, i, shown) if i == t.index() => assert!(t.shown() >= shown),
                (Phase::Deleting, i, shown) if i == t.index() => assert!(t.shown() <= shown),
                (Phase::Holding, _, shown) => assert_eq!(t.shown(), shown),
                _ => {}
            }
        }
    }

    #[test]
    fn test_multibyte_labels() {
        let mut t = Typewriter::new(&["héllo"], TypewriterTimings::default()).unwrap();
        t.step();
        t.step();
        assert_eq!(t.text(), "hé");
    }

    #[test]
    fn test_empty_label_goes_straight_to_hold() {
        let mut t = Typewriter::new(&["", "ab"], TypewriterTimings::default()).unwrap();
        t.step();
        assert_eq!(t.phase(), Phase::Holding);
        t.step();
        t.step();
        assert_eq!(t.index(), 1);
        assert_eq!(t.phase(), Phase::Typing);
    }

    #[test]
    fn test_run_renders_on_schedule() {
        let scheduler = ManualScheduler::new();
        let scope = TaskScope::new(scheduler.clone());
        let frames = Rc::new(RefCell::new(Vec::new()));
        let log = frames.clone();
        run(
            &scope,
            Typewriter::new(&["ab"], TypewriterTimings::default()).unwrap(),
            move |t| log.borrow_mut().push(t.text()),
        );

        assert_eq!(*frames.borrow(), vec![""]);
        scheduler.advance_ms(149);
        assert_eq!(frames.borrow().len(), 1);
        scheduler.advance_ms(1);
        assert_eq!(frames.borrow().last().unwrap(), "a");
        scheduler.advance_ms(150);
        assert_eq!(frames.borrow().last().unwrap(), "ab");
        // held for two seconds, then deleted
        scheduler.advance_ms(1_999);
        assert_eq!(frames.borrow().len(), 3);
        scheduler.advance_ms(1 + 100);
        assert_eq!(frames.borrow().last().unwrap(), "a");
    }

    #[test]
    fn test_unmount_after_full_cycle_stops_rendering() {
        let scheduler = ManualScheduler::new();
        let scope = TaskScope::new(scheduler.clone());
        let state = Rc::new(RefCell::new(None::<(usize, String)>));
        let sink = state.clone();
        run(&scope, typewriter(), move |t| {
            *sink.borrow_mut() = Some((t.index(), t.text()));
        });

        // "Developer": 9 chars typed, hold, 9 chars deleted
        scheduler.advance_ms(9 * 150 + 2000 + 9 * 100);
        assert_eq!(*state.borrow(), Some((1, String::new())));

        scope.cancel();
        let frozen = state.borrow().clone();
        scheduler.advance_ms(60_000);
        assert_eq!(*state.borrow(), frozen);
        assert_eq!(scheduler.queued(), 0);
    }
}
