use std::{cell::RefCell, rc::Rc};

use jiff::civil::{date, DateTime};
use ulid::Ulid;

use super::*;
use crate::{models::ResourceType, params::CreateAppointment, store::StoreEvent};

fn planner_with_room(range: DateRange) -> (Planner, Resource) {
    let mut planner = Planner::new(range);
    let room = Resource::new("Room A", ResourceType::Room);
    planner.resources_mut().create(room.clone()).unwrap();
    (planner, room)
}

fn book(planner: &mut Planner, resource: &Resource, start: DateTime, end: DateTime) -> Appointment {
    let appointment = Appointment::new(CreateAppointment {
        title: "Review".to_string(),
        start,
        end,
        resource_id: resource.id,
        ..Default::default()
    })
    .unwrap();
    planner.appointments_mut().create(appointment.clone()).unwrap();
    appointment
}

#[test]
fn test_drop_moves_appointment_between_resources() {
    let (mut planner, room) = planner_with_room(DateRange::today(date(2024, 1, 1).at(0, 0, 0, 0)));
    let person = Resource::new("Ada", ResourceType::Person);
    planner.resources_mut().create(person.clone()).unwrap();
    let review = book(
        &mut planner,
        &room,
        date(2024, 1, 1).at(9, 0, 0, 0),
        date(2024, 1, 1).at(10, 0, 0, 0),
    );

    let outcome = planner
        .handle_drag(DragEvent::Drop {
            source: DragSource {
                appointment_id: review.id,
                resource_id: room.id,
                slot: 9,
            },
            target: DropTarget {
                resource_id: person.id,
                slot: 13,
            },
        })
        .unwrap();

    assert_eq!(outcome, Outcome::Applied);
    let moved = planner.appointments().get(review.id).unwrap();
    assert_eq!(moved.resource_id, person.id);
    assert_eq!(moved.start, date(2024, 1, 1).at(13, 0, 0, 0));
    assert_eq!(moved.end, date(2024, 1, 1).at(14, 0, 0, 0));

    let grid = planner.grid();
    assert_eq!(grid.cell(person.id, 13).map(<[_]>::len), Some(1));
    assert_eq!(grid.cell(room.id, 9).map(<[_]>::len), Some(0));
}

#[test]
fn test_year_view_drop_resets_duration() {
    let range = DateRange::around(ViewMode::Year, date(2024, 1, 1)).unwrap();
    let (mut planner, room) = planner_with_room(range);
    let review = book(
        &mut planner,
        &room,
        date(2024, 3, 4).at(9, 0, 0, 0),
        date(2024, 3, 4).at(17, 0, 0, 0),
    );

    let source = DragSource {
        appointment_id: review.id,
        resource_id: room.id,
        slot: 2,
    };
    let target = DropTarget {
        resource_id: room.id,
        slot: 5,
    };
    planner.move_appointment(source, target).unwrap();

    let moved = planner.appointments().get(review.id).unwrap();
    assert_eq!(moved.start, date(2024, 6, 4).at(9, 0, 0, 0));
    assert_eq!(moved.end, date(2024, 7, 4).at(9, 0, 0, 0));
}

#[test]
fn test_drop_with_unknown_ids_is_abandoned() {
    let (mut planner, room) = planner_with_room(DateRange::today(date(2024, 1, 1).at(0, 0, 0, 0)));
    let review = book(
        &mut planner,
        &room,
        date(2024, 1, 1).at(9, 0, 0, 0),
        date(2024, 1, 1).at(10, 0, 0, 0),
    );
    let before = planner.snapshot();

    let unknown_resource = planner
        .move_appointment(
            DragSource {
                appointment_id: review.id,
                resource_id: room.id,
                slot: 9,
            },
            DropTarget {
                resource_id: Ulid::new(),
                slot: 12,
            },
        )
        .unwrap();
    let unknown_appointment = planner
        .move_appointment(
            DragSource {
                appointment_id: Ulid::new(),
                resource_id: room.id,
                slot: 9,
            },
            DropTarget {
                resource_id: room.id,
                slot: 12,
            },
        )
        .unwrap();

    assert_eq!(unknown_resource, Outcome::NotFound);
    assert_eq!(unknown_appointment, Outcome::NotFound);
    assert_eq!(planner.snapshot(), before);
}

#[test]
fn test_hover_events_do_not_touch_data() {
    let (mut planner, room) = planner_with_room(DateRange::today(date(2024, 1, 1).at(0, 0, 0, 0)));
    let review = book(
        &mut planner,
        &room,
        date(2024, 1, 1).at(9, 0, 0, 0),
        date(2024, 1, 1).at(10, 0, 0, 0),
    );
    let before = planner.snapshot();
    let source = DragSource {
        appointment_id: review.id,
        resource_id: room.id,
        slot: 9,
    };
    let first = DropTarget {
        resource_id: room.id,
        slot: 10,
    };
    let second = DropTarget {
        resource_id: room.id,
        slot: 11,
    };

    planner.handle_drag(DragEvent::Start(source)).unwrap();
    planner.handle_drag(DragEvent::Enter(first)).unwrap();
    planner.handle_drag(DragEvent::Enter(second)).unwrap();
    // A late leave from the first cell must not clear the second highlight
    planner.handle_drag(DragEvent::Leave(first)).unwrap();

    assert_eq!(planner.dragging(), Some(source));
    assert_eq!(planner.hovered(), Some(second));
    assert_eq!(planner.snapshot(), before);

    planner.handle_drag(DragEvent::Leave(second)).unwrap();
    assert_eq!(planner.hovered(), None);
}

#[test]
fn test_drop_notifies_appointment_subscribers() {
    let (mut planner, room) = planner_with_room(DateRange::today(date(2024, 1, 1).at(0, 0, 0, 0)));
    let review = book(
        &mut planner,
        &room,
        date(2024, 1, 1).at(9, 0, 0, 0),
        date(2024, 1, 1).at(10, 0, 0, 0),
    );
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    planner
        .appointments_mut()
        .subscribe(move |event: &StoreEvent<Appointment>| sink.borrow_mut().push(event.clone()));

    let source = DragSource {
        appointment_id: review.id,
        resource_id: room.id,
        slot: 9,
    };
    let target = DropTarget {
        resource_id: room.id,
        slot: 8,
    };
    planner.handle_drag(DragEvent::Drop { source, target }).unwrap();

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    match &events[0] {
        StoreEvent::Updated(updated) => {
            assert_eq!(updated.start, date(2024, 1, 1).at(8, 0, 0, 0));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn test_removing_resource_keeps_its_appointments() {
    let (mut planner, room) = planner_with_room(DateRange::today(date(2024, 1, 1).at(0, 0, 0, 0)));
    let review = book(
        &mut planner,
        &room,
        date(2024, 1, 1).at(9, 0, 0, 0),
        date(2024, 1, 1).at(10, 0, 0, 0),
    );

    assert_eq!(planner.resources_mut().remove(room.id), Outcome::Applied);

    assert_eq!(planner.appointments().list(), vec![review]);
    assert_eq!(planner.grid().placed(), 0);
}

#[test]
fn test_window_navigation_updates_labels() {
    let range = DateRange::around(ViewMode::Month, date(2024, 1, 10)).unwrap();
    let mut planner = Planner::new(range);
    assert_eq!(planner.labels()[0], "1st week of Jan");

    planner.next_window().unwrap();
    assert_eq!(planner.labels()[0], "1st week of Feb");

    planner.previous_window().unwrap();
    planner.previous_window().unwrap();
    assert_eq!(planner.labels()[0], "1st week of Dec");
    assert_eq!(planner.mode(), ViewMode::Month);
}
