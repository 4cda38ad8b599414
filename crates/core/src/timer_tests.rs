use super::*;
use crate::effect::EventKind;
use std::cell::RefCell;
use std::rc::Rc;

const STEP: Duration = Duration::from_millis(20);

/// Timer plus the `remaining` values of every tick it published
fn setup() -> (Timer, Rc<RefCell<Vec<Duration>>>) {
    let bus = EventBus::new();
    let ticks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&ticks);
    bus.subscribe(EventKind::TimerTick, "test", move |event| {
        if let Event::TimerTick { remaining } = event {
            sink.borrow_mut().push(*remaining);
        }
        Ok(())
    });
    (Timer::new(bus), ticks)
}

#[test]
fn timer_starts_idle() {
    let (timer, ticks) = setup();
    assert_eq!(timer.state(), TimerState::Idle);

    timer.tick(STEP);
    assert!(ticks.borrow().is_empty());
}

#[test]
fn tick_publishes_remaining_time() {
    let (timer, ticks) = setup();
    timer.start(Duration::from_secs(1));

    timer.tick(Duration::from_millis(250));
    timer.tick(Duration::from_millis(250));

    assert_eq!(
        *ticks.borrow(),
        vec![Duration::from_millis(750), Duration::from_millis(500)]
    );
    assert_eq!(timer.state(), TimerState::Running);
}

#[test]
fn five_seconds_of_ticks_reach_zero_and_idle() {
    let (timer, ticks) = setup();
    timer.start(Duration::from_secs(5));

    for _ in 0..250 {
        timer.tick(STEP);
    }

    assert_eq!(ticks.borrow().len(), 250);
    assert_eq!(ticks.borrow().last(), Some(&Duration::ZERO));
    assert_eq!(timer.state(), TimerState::Idle);

    timer.tick(STEP);
    assert_eq!(ticks.borrow().len(), 250);
}

#[test]
fn overshooting_step_clamps_to_zero() {
    let (timer, ticks) = setup();
    timer.start(Duration::from_millis(30));

    timer.tick(Duration::from_secs(1));

    assert_eq!(*ticks.borrow(), vec![Duration::ZERO]);
    assert_eq!(timer.remaining(), Duration::ZERO);
    assert!(!timer.is_running());
}

#[test]
fn zero_target_finishes_on_first_tick() {
    let (timer, ticks) = setup();
    timer.start(Duration::ZERO);
    timer.tick(STEP);
    assert_eq!(*ticks.borrow(), vec![Duration::ZERO]);
    assert_eq!(timer.state(), TimerState::Idle);
}

#[test]
fn stop_halts_countdown_immediately() {
    let (timer, ticks) = setup();
    timer.start(Duration::from_secs(5));
    timer.tick(STEP);
    timer.stop();
    timer.tick(STEP);

    assert_eq!(ticks.borrow().len(), 1);
    assert_eq!(timer.state(), TimerState::Idle);
    assert_eq!(timer.elapsed(), STEP);
}

#[test]
fn restart_resets_elapsed() {
    let (timer, ticks) = setup();
    timer.start(Duration::from_secs(1));
    timer.tick(Duration::from_millis(900));

    timer.start(Duration::from_secs(2));
    assert_eq!(timer.elapsed(), Duration::ZERO);
    timer.tick(Duration::from_millis(500));

    assert_eq!(ticks.borrow().last(), Some(&Duration::from_millis(1500)));
}

#[test]
fn handler_may_stop_timer_during_tick() {
    let bus = EventBus::new();
    let timer = Rc::new(Timer::new(bus.clone()));
    let inner = Rc::clone(&timer);
    bus.subscribe(EventKind::TimerTick, "stopper", move |_| {
        inner.stop();
        Ok(())
    });

    timer.start(Duration::from_secs(3));
    timer.tick(STEP);

    assert_eq!(timer.state(), TimerState::Idle);
}

use proptest::prelude::*;

proptest! {
    #[test]
    fn remaining_stays_within_bounds(
        target_ms in 0u64..10_000,
        steps in proptest::collection::vec(0u64..2_000, 1..50)
    ) {
        let (timer, ticks) = setup();
        let target = Duration::from_millis(target_ms);
        timer.start(target);

        for step in steps {
            timer.tick(Duration::from_millis(step));
            prop_assert!(timer.remaining() <= target);
        }

        for remaining in ticks.borrow().iter() {
            prop_assert!(*remaining <= target);
        }
        // Once zero is published the timer is idle and publishes nothing more
        let zeros = ticks.borrow().iter().filter(|r| r.is_zero()).count();
        prop_assert!(zeros <= 1);
    }
}
