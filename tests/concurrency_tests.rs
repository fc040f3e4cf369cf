//! Concurrent dispatch against a shared machine.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use turnstile::{event_enum, DispatchError, State, StateMachine, StateTransition};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
struct Step(usize);

impl State for Step {
    fn name(&self) -> &str {
        "Step"
    }
}

event_enum! {
    enum Move {
        Forward,
        Back,
    }
}

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

/// Machine over Step(0)..=Step(limit) where Forward moves one step up.
fn counter(limit: usize) -> Arc<StateMachine<Step, Move>> {
    let machine = Arc::new(StateMachine::named("counter", Step(0)));
    for i in 0..limit {
        machine.add_handler(Step(i), Move::Forward, move || Step(i + 1));
    }
    machine
}

#[test]
fn concurrent_dispatch_loses_no_transition() {
    let total = THREADS * PER_THREAD;
    let machine = counter(total);
    let records = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&records);
    machine.on_transition(move |t: &StateTransition<Step, Move>| sink.lock().push(t.clone()));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let machine = Arc::clone(&machine);
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    machine.dispatch(Move::Forward).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(machine.current_state(), Step(total));
    assert_eq!(machine.transitions(), total as u64);

    // Observers see one gapless chain: each record starts where the last ended.
    let records = records.lock();
    assert_eq!(records.len(), total);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.sequence, i as u64 + 1);
        assert_eq!(record.from, Step(i));
        assert_eq!(record.to, Step(i + 1));
    }
}

#[test]
fn final_state_is_independent_of_interleaving() {
    const RING: usize = 7;
    let machine = Arc::new(StateMachine::new(Step(0)));
    for i in 0..RING {
        machine
            .add_handler(Step(i), Move::Forward, move || Step((i + 1) % RING))
            .add_handler(Step(i), Move::Back, move || Step((i + RING - 1) % RING));
    }

    let handles: Vec<_> = (0..THREADS)
        .map(|n| {
            let machine = Arc::clone(&machine);
            // Even threads mostly go forward, odd threads mostly go back.
            let (forward, back) = if n % 2 == 0 { (31, 11) } else { (5, 17) };
            thread::spawn(move || {
                for i in 0..forward.max(back) {
                    if i < forward {
                        machine.dispatch(Move::Forward).unwrap();
                    }
                    if i < back {
                        machine.dispatch(Move::Back).unwrap();
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let forward = (THREADS / 2) * (31 + 5);
    let back = (THREADS / 2) * (11 + 17);
    let expected = (forward + RING * back - back) % RING;
    assert_eq!(machine.current_state(), Step(expected));
    assert_eq!(machine.transitions(), (forward + back) as u64);
}

#[test]
fn handlers_never_run_concurrently() {
    let machine = Arc::new(StateMachine::new(Step(0)));
    let running = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));
    {
        let running = Arc::clone(&running);
        let peak = Arc::clone(&peak);
        machine.add_handler(Step(0), Move::Forward, move || {
            let now = running.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            thread::sleep(Duration::from_micros(200));
            running.fetch_sub(1, Ordering::SeqCst);
            Step(0)
        });
    }

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let machine = Arc::clone(&machine);
            thread::spawn(move || {
                for _ in 0..20 {
                    machine.dispatch(Move::Forward).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(peak.load(Ordering::SeqCst), 1);
    assert_eq!(machine.transitions(), (THREADS * 20) as u64);
}

#[test]
fn registration_while_dispatching() {
    let total = 200;
    let half = total / 2;
    let machine = counter(half);

    let registrar = {
        let machine = Arc::clone(&machine);
        thread::spawn(move || {
            for i in half..total {
                machine.add_handler(Step(i), Move::Forward, move || Step(i + 1));
                thread::yield_now();
            }
        })
    };

    let dispatcher = {
        let machine = Arc::clone(&machine);
        thread::spawn(move || {
            let mut committed = 0;
            while committed < total {
                match machine.dispatch(Move::Forward) {
                    Ok(_) => committed += 1,
                    Err(DispatchError::NoHandlersForState { .. }) => thread::yield_now(),
                    Err(err) => panic!("unexpected dispatch error: {err}"),
                }
            }
        })
    };

    registrar.join().unwrap();
    dispatcher.join().unwrap();

    assert_eq!(machine.current_state(), Step(total));
    assert_eq!(machine.transitions(), total as u64);
}
