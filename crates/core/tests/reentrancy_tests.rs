use evtree_core::{EventObject, Handler, Settings, StopScope};
use std::sync::{Arc, Barrier};
use std::thread;

mod common;
use common::CallLog;

fn events_with(scope: StopScope) -> Arc<EventObject<(), ()>> {
    let settings = Settings::default().with_stop_scope(scope);
    Arc::new(EventObject::with_settings(settings).unwrap())
}

/// Outer handler emits a nested event, then stops; a later outer handler
/// must not run in either scope since the stop comes after the nested emit.
#[test]
fn test_stop_after_nested_emit() {
    for scope in [StopScope::Emission, StopScope::Shared] {
        let events = events_with(scope);
        let log = CallLog::new();

        let nester = {
            let events = Arc::clone(&events);
            let log = log.clone();
            Handler::new(move |_, _: &()| {
                log.push("outer:first");
                events.emit("inner", &()).unwrap();
                events.stop();
            })
        };
        events.connect("outer", &nester).unwrap();
        events.connect("outer", &log.handler("outer:second")).unwrap();
        events.connect("inner", &log.handler("inner")).unwrap();

        let emission = events.emit("outer", &()).unwrap();
        assert!(emission.stopped, "scope {scope}");
        assert_eq!(log.entries(), vec!["outer:first", "inner"], "scope {scope}");
    }
}

/// Stop is raised before a nested emission starts.
#[test]
fn test_nested_emit_after_stop_depends_on_scope() {
    let run = |scope: StopScope| {
        let events = events_with(scope);
        let log = CallLog::new();

        let nester = {
            let events = Arc::clone(&events);
            let log = log.clone();
            Handler::new(move |_, _: &()| {
                log.push("outer:first");
                events.stop();
                events.emit("inner", &()).unwrap();
            })
        };
        events.connect("outer", &nester).unwrap();
        events.connect("outer", &log.handler("outer:second")).unwrap();
        events.connect("inner", &log.handler("inner")).unwrap();

        let emission = events.emit("outer", &()).unwrap();
        (emission.stopped, log.entries())
    };

    // each emission keeps its own flag
    let (stopped, entries) = run(StopScope::Emission);
    assert!(stopped);
    assert_eq!(entries, vec!["outer:first", "inner"]);

    // the nested emission resets the shared flag, so the outer pass continues
    let (stopped, entries) = run(StopScope::Shared);
    assert!(!stopped);
    assert_eq!(entries, vec!["outer:first", "inner", "outer:second"]);
}

#[test]
fn test_stop_inside_nested_emit_does_not_leak_out() {
    let events = events_with(StopScope::Emission);
    let log = CallLog::new();

    let inner_stopper = {
        let events = Arc::clone(&events);
        let log = log.clone();
        Handler::new(move |_, _: &()| {
            log.push("inner");
            events.stop();
        })
    };
    let nester = {
        let events = Arc::clone(&events);
        Handler::new(move |_, _: &()| {
            let inner = events.emit("inner", &()).unwrap();
            assert!(inner.stopped);
        })
    };
    events.connect("inner", &inner_stopper).unwrap();
    events.connect("inner", &log.handler("inner:second")).unwrap();
    events.connect("outer", &nester).unwrap();
    events.connect("outer", &log.handler("outer:second")).unwrap();

    let emission = events.emit("outer", &()).unwrap();
    assert!(!emission.stopped);
    assert_eq!(log.entries(), vec!["inner", "outer:second"]);
}

#[test]
fn test_handler_may_block_later_handler() {
    let events: Arc<EventObject<(), ()>> = Arc::new(EventObject::new());
    let log = CallLog::new();
    let later = log.handler("later");

    let blocker = {
        let events = Arc::clone(&events);
        let later = later.clone();
        Handler::new(move |_, _: &()| events.block("a:b", &later).unwrap())
    };
    events.connect("a", &blocker).unwrap();
    events.connect("a:b", &later).unwrap();

    let emission = events.emit("a:b", &()).unwrap();
    assert_eq!(emission.handlers_invoked, 1);
    assert!(log.entries().is_empty());
}

#[test]
fn test_handler_connected_during_emission_waits_for_next() {
    let events: Arc<EventObject<(), ()>> = Arc::new(EventObject::new());
    let log = CallLog::new();
    let late = log.handler("late");

    let connector = {
        let events = Arc::clone(&events);
        let late = late.clone();
        Handler::new(move |_, _: &()| events.connect("a", &late).unwrap())
    };
    events.connect("a", &connector).unwrap();

    events.emit("a", &()).unwrap();
    assert!(log.entries().is_empty());
    events.emit("a", &()).unwrap();
    assert_eq!(log.entries(), vec!["late"]);
}

#[test]
fn test_clear_during_emission_suppresses_remaining_handlers() {
    let events: Arc<EventObject<(), ()>> = Arc::new(EventObject::new());
    let log = CallLog::new();
    let clearer = {
        let events = Arc::clone(&events);
        Handler::new(move |_, _: &()| events.clear())
    };
    events.connect("a", &clearer).unwrap();
    events.connect("a", &log.handler("after")).unwrap();
    events.add_post_hook("a", &log.hook("post")).unwrap();

    events.emit("a", &()).unwrap();
    assert_eq!(log.entries(), vec!["post"]);
    assert_eq!(events.node_count(), 0);
}

#[test]
fn test_emit_from_many_threads() {
    let events: Arc<EventObject<(), ()>> = Arc::new(EventObject::new());
    let log = CallLog::new();
    events.connect("work", &log.handler("root")).unwrap();

    let workers: Vec<_> = (0..4)
        .map(|i| {
            let events = Arc::clone(&events);
            let log = log.clone();
            thread::spawn(move || {
                let path = format!("work:{i}");
                events.connect(&path, &log.handler(&path)).unwrap();
                events.emit(&path, &()).unwrap();
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let entries = log.entries();
    assert_eq!(entries.len(), 8);
    assert_eq!(entries.iter().filter(|e| *e == "root").count(), 4);
    assert_eq!(events.node_count(), 5);
}

#[test]
fn test_stop_is_isolated_between_concurrent_emissions() {
    let events: Arc<EventObject<(), ()>> = Arc::new(EventObject::new());
    let log = CallLog::new();
    let started = Arc::new(Barrier::new(2));
    let stop_raised = Arc::new(Barrier::new(2));

    let waiter = |stops: bool| {
        let events = Arc::clone(&events);
        let started = Arc::clone(&started);
        let stop_raised = Arc::clone(&stop_raised);
        Handler::new(move |_, _: &()| {
            started.wait();
            if stops {
                events.stop();
            }
            stop_raised.wait();
        })
    };
    events.connect("a", &waiter(true)).unwrap();
    events.connect("a", &log.handler("a_second")).unwrap();
    events.connect("b", &waiter(false)).unwrap();
    events.connect("b", &log.handler("b_second")).unwrap();

    let spawn_emit = |event: &'static str| {
        let events = Arc::clone(&events);
        thread::spawn(move || events.emit(event, &()).unwrap())
    };
    let a = spawn_emit("a");
    let b = spawn_emit("b");
    let a = a.join().unwrap();
    let b = b.join().unwrap();

    assert!(a.stopped);
    assert_eq!(a.handlers_invoked, 1);
    assert!(!b.stopped);
    assert_eq!(b.handlers_invoked, 2);
    assert_eq!(log.entries(), vec!["b_second"]);
}
