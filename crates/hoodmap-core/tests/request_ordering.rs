//! Out-of-order responses for a view that is opened, closed and reopened
//! before its first load resolves.

use std::cell::RefCell;
use std::rc::Rc;

use hoodmap_core::request::RequestTracker;
use tokio::sync::oneshot;

/// A view that loads on open and renders whatever the tracker lets through.
#[derive(Default)]
struct View {
    tracker: RequestTracker,
    applied: Vec<&'static str>,
}

async fn load(view: Rc<RefCell<View>>, response: oneshot::Receiver<&'static str>) {
    let token = view.borrow_mut().tracker.begin();
    let Ok(data) = response.await else {
        return;
    };
    let mut view = view.borrow_mut();
    if view.tracker.finish(token) {
        view.applied.push(data);
    }
}

async fn run(first_resolves_first: bool) -> Vec<&'static str> {
    let view = Rc::new(RefCell::new(View::default()));
    let (tx1, rx1) = oneshot::channel();
    let (tx2, rx2) = oneshot::channel();

    let first = load(view.clone(), rx1);
    let second = async {
        // Let the first load register before the view closes and reopens.
        tokio::task::yield_now().await;
        view.borrow_mut().tracker.invalidate();
        load(view.clone(), rx2).await;
    };
    let responder = async move {
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        if first_resolves_first {
            let _ = tx1.send("first");
            tokio::task::yield_now().await;
            let _ = tx2.send("second");
        } else {
            let _ = tx2.send("second");
            tokio::task::yield_now().await;
            let _ = tx1.send("first");
        }
    };

    tokio::join!(first, second, responder);
    let applied = view.borrow().applied.clone();
    applied
}

#[tokio::test]
async fn only_the_latest_load_applies_when_it_resolves_last() {
    assert_eq!(run(true).await, vec!["second"]);
}

#[tokio::test]
async fn only_the_latest_load_applies_when_it_resolves_first() {
    assert_eq!(run(false).await, vec!["second"]);
}

#[tokio::test]
async fn closing_without_reopening_drops_the_response() {
    let view = Rc::new(RefCell::new(View::default()));
    let (tx, rx) = oneshot::channel();

    let pending = load(view.clone(), rx);
    let close = async {
        tokio::task::yield_now().await;
        view.borrow_mut().tracker.invalidate();
        let _ = tx.send("late");
    };
    tokio::join!(pending, close);

    assert!(view.borrow().applied.is_empty());
    assert!(!view.borrow().tracker.is_pending());
}
