use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn timers_without_hydrate_never_run() {
    let ran = Rc::new(Cell::new(0));

    let slot = TimerSlot::default();
    let r = Rc::clone(&ran);
    slot.schedule(0, move || r.set(r.get() + 1));
    slot.cancel();

    let set = TimerSet::default();
    for delay in [0, 100, 200] {
        let r = Rc::clone(&ran);
        set.push(delay, move || r.set(r.get() + 1));
    }
    set.cancel_all();

    let r = Rc::clone(&ran);
    every(10, move || r.set(r.get() + 1));

    assert_eq!(ran.get(), 0);
}
