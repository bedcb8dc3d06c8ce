mod common;

use common::spy_controller;
use glassbar::ui::{SelectionError, SelectionEvent, VisualState};

#[test]
fn every_valid_tap_selects_and_emits_once() {
    for count in [1, 3, 5] {
        for index in 0..count {
            let (mut controller, spy) = spy_controller(count);
            controller.on_user_tap(index);

            assert_eq!(controller.selected(), Some(index));
            assert_eq!(controller.take_events(), vec![SelectionEvent::Changed { index }]);
            assert_eq!(spy.last_active(), Some(index));
            let recorded = spy.0.lock();
            let last = recorded.frames.last().expect("frame");
            assert_eq!(last.active_count(), 1);
        }
    }
}

#[test]
fn every_valid_host_set_selects_without_events() {
    for index in 0..3usize {
        let (mut controller, spy) = spy_controller(3);
        controller.on_host_set_selection(index as i64).expect("valid");

        assert_eq!(controller.selected(), Some(index));
        assert!(controller.take_events().is_empty());
        assert_eq!(spy.last_active(), Some(index));
        assert_eq!(spy.impact_count(), 0);
    }
}

#[test]
fn invalid_host_set_keeps_state() {
    let (mut controller, spy) = spy_controller(3);
    controller.on_user_tap(1);
    let _ = controller.take_events();
    let frames_before = spy.frame_count();

    for bad in [-5, -1, 3, 4, 1_000] {
        let err = controller.on_host_set_selection(bad).expect_err("invalid");
        assert_eq!(
            err,
            SelectionError::InvalidArgument {
                index: bad,
                item_count: 3
            }
        );
    }

    assert_eq!(controller.selected(), Some(1));
    assert!(controller.take_events().is_empty());
    assert_eq!(spy.frame_count(), frames_before);
}

#[test]
fn double_tap_emits_twice() {
    let (mut controller, spy) = spy_controller(3);
    controller.on_user_tap(2);
    controller.on_user_tap(2);

    assert_eq!(controller.selected(), Some(2));
    assert_eq!(
        controller.take_events(),
        vec![
            SelectionEvent::Changed { index: 2 },
            SelectionEvent::Changed { index: 2 }
        ]
    );
    assert_eq!(spy.impact_count(), 2);
}

#[test]
fn last_writer_wins_across_sources() {
    let (mut controller, _spy) = spy_controller(4);
    let script: [(bool, usize); 7] = [
        (true, 0),
        (false, 3),
        (true, 1),
        (true, 2),
        (false, 0),
        (false, 1),
        (true, 3),
    ];

    for (is_tap, index) in script {
        if is_tap {
            controller.on_user_tap(index);
        } else {
            controller.on_host_set_selection(index as i64).expect("valid");
        }
        assert_eq!(controller.selected(), Some(index));
    }

    let taps: Vec<usize> = controller
        .take_events()
        .into_iter()
        .map(|SelectionEvent::Changed { index }| index)
        .collect();
    assert_eq!(taps, vec![0, 1, 2, 3]);
}

#[test]
fn transition_is_one_frame() {
    let (mut controller, spy) = spy_controller(3);
    controller.on_user_tap(1);
    controller.on_host_set_selection(2).expect("valid");

    let recorded = spy.0.lock();
    // initial paint, tap, host push
    assert_eq!(recorded.frames.len(), 3);
    let after = &recorded.frames[2];
    assert_eq!(after.items[1].state, VisualState::Default);
    assert_eq!(after.items[2].state, VisualState::Active);
    assert!(recorded.frames.iter().all(|frame| frame.active_count() <= 1));
}

#[test]
fn reference_scenario() {
    let (mut controller, spy) = spy_controller(3);
    assert_eq!(spy.last_active(), None);

    controller.on_user_tap(1);
    assert_eq!(controller.selected(), Some(1));
    assert_eq!(controller.take_events(), vec![SelectionEvent::Changed { index: 1 }]);
    assert_eq!(spy.last_active(), Some(1));

    controller.on_host_set_selection(2).expect("valid");
    assert_eq!(controller.selected(), Some(2));
    assert!(controller.take_events().is_empty());
    assert_eq!(spy.last_active(), Some(2));

    assert!(matches!(
        controller.on_host_set_selection(5),
        Err(SelectionError::InvalidArgument { index: 5, .. })
    ));
    assert_eq!(controller.selected(), Some(2));
    assert_eq!(spy.last_active(), Some(2));
}
