//! Ordered fallback execution
//!
//! Despite the name this is not a concurrent race: thunks run strictly one
//! after another, each awaited to completion, and the first result that
//! satisfies the predicate stops the chain. Later thunks are never invoked.

use std::future::Future;

/// Run `thunks` in order until one resolves to a value accepted by `predicate`
///
/// Returns the index of the accepted thunk, or `None` when every thunk was
/// tried (or the list was empty). Side effects of the thunks are the only
/// other observable outcome.
pub async fn interrupt<T, I, F, Fut, P>(thunks: I, predicate: P) -> Option<usize>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
    P: Fn(&T) -> bool,
{
    for (index, thunk) in thunks.into_iter().enumerate() {
        let value = thunk().await;
        if predicate(&value) {
            return Some(index);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{ready, FutureExt, LocalBoxFuture};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_stops_at_first_success() {
        let invoked = RefCell::new(Vec::new());
        let thunk = |i: usize, ok: bool| {
            let invoked = &invoked;
            move || {
                invoked.borrow_mut().push(i);
                ready(ok)
            }
        };

        let winner = block_on(interrupt(
            vec![thunk(0, false), thunk(1, true), thunk(2, true)],
            |ok| *ok,
        ));

        assert_eq!(winner, Some(1));
        assert_eq!(*invoked.borrow(), vec![0, 1]);
    }

    #[test]
    fn test_tries_everything_when_nothing_succeeds() {
        let invoked = RefCell::new(0);
        let thunk = || {
            *invoked.borrow_mut() += 1;
            ready(false)
        };

        let winner = block_on(interrupt(vec![thunk, thunk, thunk], |ok| *ok));

        assert_eq!(winner, None);
        assert_eq!(*invoked.borrow(), 3);
    }

    #[test]
    fn test_empty_list() {
        let thunks: Vec<fn() -> futures::future::Ready<bool>> = Vec::new();
        assert_eq!(block_on(interrupt(thunks, |ok| *ok)), None);
    }

    #[test]
    fn test_sequential_not_concurrent() {
        // Each thunk records start and end; a concurrent race would interleave
        let log = Rc::new(RefCell::new(Vec::new()));
        let make = |name: &'static str| {
            let log = log.clone();
            move || -> LocalBoxFuture<'static, bool> {
                let log = log.clone();
                log.borrow_mut().push(format!("{} start", name));
                async move {
                    futures::future::lazy(|_| ()).await;
                    log.borrow_mut().push(format!("{} end", name));
                    false
                }
                .boxed_local()
            }
        };

        block_on(interrupt(vec![make("a"), make("b")], |ok| *ok));

        assert_eq!(
            *log.borrow(),
            vec!["a start", "a end", "b start", "b end"]
        );
    }
}
