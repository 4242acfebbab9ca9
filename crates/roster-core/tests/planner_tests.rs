mod common;

use std::collections::BTreeSet;

use common::{appointment, room};
use jiff::{
    civil::{date, DateTime},
    ToSpan,
};
use roster_core::{
    belongs_in_slot, compute_new_dates, labels_for_view,
    params::CreateAppointment,
    Appointment, DateRange, DragEvent, DragSource, DropTarget, Outcome, Planner, ViewMode,
};

/// Every hour from `range.from` through `range.to`.
fn hourly_starts(range: &DateRange) -> Vec<DateTime> {
    range
        .from
        .series(1.hour())
        .take_while(|t| *t <= range.to)
        .collect()
}

fn reachable_slots(range: &DateRange) -> BTreeSet<usize> {
    let mode = range.mode();
    let labels = labels_for_view(mode, range);
    let resource = room("Room A");
    let mut slots = BTreeSet::new();
    for start in hourly_starts(range) {
        let booking = appointment(&resource, "Probe", start, start);
        // Probe beyond the label axis too, so stray placements are caught
        for slot in 0..labels.len() + 8 {
            if belongs_in_slot(&booking, slot, range, mode) {
                slots.insert(slot);
            }
        }
    }
    slots
}

#[test]
fn test_label_count_matches_reachable_slots() {
    let anchor = date(2024, 2, 14);
    for mode in [ViewMode::Day, ViewMode::Week, ViewMode::Month, ViewMode::Year] {
        let range = DateRange::around(mode, anchor).expect("window");
        let labels = labels_for_view(mode, &range);
        let expected: BTreeSet<usize> = (0..labels.len()).collect();
        assert_eq!(reachable_slots(&range), expected, "{mode} view");
    }
}

#[test]
fn test_paged_windows_keep_labels_and_slots_aligned() {
    let resource = room("Room A");
    let late_march = appointment(
        &resource,
        "Quarter close",
        date(2024, 3, 30).at(9, 0, 0, 0),
        date(2024, 3, 30).at(11, 0, 0, 0),
    );
    let mut planner = Planner::new(DateRange::around(ViewMode::Month, date(2024, 2, 10)).unwrap());
    planner.resources_mut().create(resource.clone()).unwrap();
    planner.appointments_mut().create(late_march).unwrap();

    let march = planner.next_window().unwrap();
    let expected: BTreeSet<usize> = (0..planner.labels().len()).collect();
    assert_eq!(reachable_slots(&march), expected);
    // Saturday the 30th closes the 5th week of March
    assert_eq!(planner.grid().cell(resource.id, 4).map(<[_]>::len), Some(1));

    let december = DateRange::around(ViewMode::Month, date(2023, 12, 1)).unwrap();
    let year_2023 = DateRange::around(ViewMode::Year, date(2023, 1, 1)).unwrap();
    for window in [december, year_2023] {
        let paged = window.next().unwrap();
        let labels = labels_for_view(paged.mode(), &paged);
        let expected: BTreeSet<usize> = (0..labels.len()).collect();
        assert_eq!(reachable_slots(&paged), expected, "after {}", window.from);
    }
}

#[test]
fn test_range_gate_rejects_outside_starts_in_every_mode() {
    let anchor = date(2024, 5, 15);
    let resource = room("Room A");
    for mode in [ViewMode::Day, ViewMode::Week, ViewMode::Month, ViewMode::Year] {
        let range = DateRange::around(mode, anchor).expect("window");
        let outside = [
            range.from.checked_sub(1.nanosecond()).unwrap(),
            range.from.checked_sub(1.year()).unwrap(),
            range.to.checked_add(1.nanosecond()).unwrap(),
            range.to.checked_add(3.days()).unwrap(),
        ];
        for start in outside {
            let booking = appointment(&resource, "Outside", start, start);
            for slot in 0..32 {
                assert!(
                    !belongs_in_slot(&booking, slot, &range, mode),
                    "{mode} placed {start} in slot {slot}"
                );
            }
        }
    }
}

#[test]
fn test_day_view_scenario() {
    let range = DateRange::new(
        date(2024, 1, 1).at(0, 0, 0, 0),
        Some(date(2024, 1, 1).at(23, 59, 0, 0)),
    )
    .unwrap();
    let resource = room("Room A");
    let booking = appointment(
        &resource,
        "Afternoon",
        date(2024, 1, 1).at(14, 0, 0, 0),
        date(2024, 1, 1).at(17, 0, 0, 0),
    );

    let placed: Vec<usize> = (0..24)
        .filter(|slot| belongs_in_slot(&booking, *slot, &range, ViewMode::Day))
        .collect();
    assert_eq!(placed, vec![14]);
}

#[test]
fn test_year_view_drag_scenario() {
    let start = date(2024, 3, 12).at(10, 0, 0, 0);
    let end = date(2024, 3, 14).at(10, 0, 0, 0);

    let moved = compute_new_dates(ViewMode::Year, 5, 2, start, end).unwrap();

    assert_eq!(moved.start.month(), 6);
    assert_eq!(moved.start, date(2024, 6, 12).at(10, 0, 0, 0));
    assert_eq!(moved.end, moved.start.checked_add(1.month()).unwrap());
}

#[test]
fn test_creation_validation_scenarios() {
    let t = date(2024, 1, 1).at(9, 0, 0, 0);
    let t2 = date(2024, 1, 2).at(9, 0, 0, 0);

    let err = Appointment::new(CreateAppointment {
        title: String::new(),
        start: t,
        end: t,
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(
        err.validation_errors().and_then(|e| e.message_for("title")),
        Some("Title is required")
    );

    let err = Appointment::new(CreateAppointment {
        title: "X".to_string(),
        start: t2,
        end: t,
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(
        err.validation_errors().and_then(|e| e.message_for("end")),
        Some("End date must be after start date")
    );
}

#[test]
fn test_full_drag_sequence_in_week_view() {
    let range = DateRange::around(ViewMode::Week, date(2024, 1, 3)).unwrap();
    let mut planner = Planner::new(range);
    let room_a = room("Room A");
    let room_b = room("Room B");
    planner.resources_mut().create(room_a.clone()).unwrap();
    planner.resources_mut().create(room_b.clone()).unwrap();
    let booking = appointment(
        &room_a,
        "Workshop",
        date(2024, 1, 1).at(13, 0, 0, 0),
        date(2024, 1, 1).at(16, 0, 0, 0),
    );
    planner.appointments_mut().create(booking.clone()).unwrap();

    // Monday is column 1 of a Sunday-started week
    assert_eq!(planner.grid().cell(room_a.id, 1).map(<[_]>::len), Some(1));

    let source = DragSource {
        appointment_id: booking.id,
        resource_id: room_a.id,
        slot: 1,
    };
    let thursday_b = DropTarget {
        resource_id: room_b.id,
        slot: 4,
    };
    let events = [
        DragEvent::Start(source),
        DragEvent::Enter(DropTarget {
            resource_id: room_a.id,
            slot: 2,
        }),
        DragEvent::Leave(DropTarget {
            resource_id: room_a.id,
            slot: 2,
        }),
        DragEvent::Enter(thursday_b),
        DragEvent::Drop {
            source,
            target: thursday_b,
        },
    ];
    let outcomes: Vec<Outcome> = events
        .into_iter()
        .map(|event| planner.handle_drag(event).unwrap())
        .collect();

    assert_eq!(outcomes.last(), Some(&Outcome::Applied));
    assert_eq!(planner.dragging(), None);
    assert_eq!(planner.hovered(), None);

    let moved = planner.appointments().get(booking.id).unwrap();
    assert_eq!(moved.resource_id, room_b.id);
    assert_eq!(moved.start, date(2024, 1, 4).at(13, 0, 0, 0));
    assert_eq!(moved.end, date(2024, 1, 4).at(16, 0, 0, 0));
    assert_eq!(planner.grid().cell(room_b.id, 4).map(<[_]>::len), Some(1));
}

#[test]
fn test_removing_resource_does_not_cascade() {
    let mut planner = Planner::new(DateRange::today(date(2024, 1, 1).at(0, 0, 0, 0)));
    let resource = room("Room A");
    planner.resources_mut().create(resource.clone()).unwrap();
    let booking = appointment(
        &resource,
        "Orphaned",
        date(2024, 1, 1).at(9, 0, 0, 0),
        date(2024, 1, 1).at(10, 0, 0, 0),
    );
    planner.appointments_mut().create(booking.clone()).unwrap();

    assert_eq!(planner.resources_mut().remove(resource.id), Outcome::Applied);

    assert_eq!(planner.appointments().list(), vec![booking]);
}
