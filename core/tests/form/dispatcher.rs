// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use evform_core::{Action, Dispatcher, EventEditor};

use crate::common::{assert_instant, existing_event, test_config};

#[test]
fn actions_are_applied_in_order() {
    let editor = Rc::new(RefCell::new(EventEditor::new(
        Some(existing_event(1, "Meetup")),
        &test_config("UTC"),
    )));
    let submitted = Rc::new(RefCell::new(Vec::new()));

    let mut dispatcher = Dispatcher::new();
    let sink = submitted.clone();
    EventEditor::register_to(editor.clone(), &mut dispatcher, move |payload| {
        sink.borrow_mut().push(payload);
    });

    let actions = [
        Action::set_field("startsAt", "2024-03-01T18:00").unwrap(),
        Action::ChangeTimezone("Europe/Paris".to_string()),
        Action::set_field("name", "Meetup in Paris").unwrap(),
        Action::Submit,
    ];
    for action in &actions {
        dispatcher.dispatch(action).unwrap();
    }

    let submitted = submitted.borrow();
    assert_eq!(submitted.len(), 1);
    let event = submitted[0].event();
    assert_eq!(event.name, "Meetup in Paris");
    assert_eq!(event.timezone, "Europe/Paris");
    // 18:00 in Paris, UTC+1 in March.
    assert_instant(event.starts_at, "2024-03-01T17:00:00Z");
    assert_eq!(editor.borrow().store().draft().name, "Meetup in Paris");
}

#[test]
fn rejected_action_surfaces_error() {
    let editor = Rc::new(RefCell::new(EventEditor::new(
        Some(existing_event(1, "Meetup")),
        &test_config("UTC"),
    )));
    let mut dispatcher = Dispatcher::new();
    EventEditor::register_to(editor.clone(), &mut dispatcher, |_| {});

    let before = editor.borrow().store().state().clone();
    assert!(
        dispatcher
            .dispatch(&Action::ChangeTimezone("Nowhere/Land".to_string()))
            .is_err()
    );
    assert_eq!(editor.borrow().store().state(), &before);
}
