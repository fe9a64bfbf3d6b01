#![cfg(feature = "effect")]
//! Unit tests for the Thunk deferred computation.
//!
//! The interesting properties here are about *when* things run: every
//! combinator must stay lazy, re-running must re-execute (no
//! memoization), composed thunks must run left to right, and the
//! single eager operation (`fold_left`) must run exactly once.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use thunkful::effect::Thunk;
use thunkful::typeclass::{Applicative, Apply, Extend, Foldable, Functor, Monad};

/// A thunk that records each invocation in a shared journal.
fn journaled(journal: &Rc<RefCell<Vec<&'static str>>>, name: &'static str, value: i32) -> Thunk<i32> {
    let journal = journal.clone();
    Thunk::new(move || {
        journal.borrow_mut().push(name);
        value
    })
}

// =============================================================================
// Construction and invocation
// =============================================================================

mod invocation {
    use super::*;

    #[test]
    fn of_yields_the_value_on_every_run() {
        let constant = Thunk::of("steady");
        assert_eq!(constant.run(), "steady");
        assert_eq!(constant.run(), "steady");
    }

    #[test]
    fn nothing_runs_before_run_is_called() {
        let touched = Rc::new(Cell::new(false));
        let tracked = touched.clone();
        let _pipeline = Thunk::new(move || {
            tracked.set(true);
            1
        })
        .fmap(|n| n + 1)
        .flat_map(|n| Thunk::of(n * 2));

        assert!(!touched.get());
    }

    #[test]
    fn each_run_re_executes_the_closure() {
        let count = Rc::new(Cell::new(0));
        let tracked = count.clone();
        let counting = Thunk::new(move || {
            tracked.set(tracked.get() + 1);
            tracked.get()
        });

        // No caching: successive runs see successive values.
        assert_eq!(counting.run(), 1);
        assert_eq!(counting.run(), 2);
        assert_eq!(counting.run(), 3);
    }

    #[test]
    fn clones_share_the_underlying_closure() {
        let count = Rc::new(Cell::new(0));
        let tracked = count.clone();
        let original = Thunk::new(move || {
            tracked.set(tracked.get() + 1);
            tracked.get()
        });
        let copy = original.clone();

        assert_eq!(original.run(), 1);
        assert_eq!(copy.run(), 2);
    }
}

// =============================================================================
// Combinators
// =============================================================================

mod combinators {
    use super::*;

    #[test]
    fn fmap_transforms_the_produced_value() {
        let doubled = Thunk::of(21).fmap(|n| n * 2);
        assert_eq!(doubled.run(), 42);
    }

    #[test]
    fn flat_map_runs_the_continuation_inside_the_outer_run() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let inner = journaled(&journal, "inner", 2);
        let chained = journaled(&journal, "outer", 1).flat_map(move |n| {
            let inner = inner.clone();
            inner.fmap(move |m| n + m)
        });

        assert_eq!(journal.borrow().len(), 0);
        assert_eq!(chained.run(), 3);
        assert_eq!(*journal.borrow(), vec!["outer", "inner"]);
    }

    #[test]
    fn map2_runs_left_then_right() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let combined = journaled(&journal, "left", 1).map2(journaled(&journal, "right", 2), |a, b| {
            a * 10 + b
        });

        assert_eq!(combined.run(), 12);
        assert_eq!(*journal.borrow(), vec!["left", "right"]);
    }

    #[test]
    fn apply_runs_the_function_thunk_first() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let order = journal.clone();
        let function: Thunk<fn(i32) -> i32> = Thunk::new(move || {
            order.borrow_mut().push("function");
            (|n| n + 1) as fn(i32) -> i32
        });

        let applied = function.apply(journaled(&journal, "argument", 41));
        assert_eq!(applied.run(), 42);
        assert_eq!(*journal.borrow(), vec!["function", "argument"]);
    }

    #[test]
    fn pure_behaves_like_of() {
        let lifted: Thunk<i32> = <Thunk<()>>::pure(7);
        assert_eq!(lifted.run(), 7);
    }

    #[test]
    fn flatten_container_collapses_nesting() {
        let nested: Thunk<Thunk<i32>> = Thunk::of(Thunk::of(5));
        assert_eq!(nested.flatten_container().run(), 5);
    }
}

// =============================================================================
// Extend, fold, traverse, catch
// =============================================================================

mod remaining_surface {
    use super::*;

    #[test]
    fn extend_hands_the_whole_thunk_to_the_function() {
        let base = Thunk::of(10);
        // Run the received computation twice: extend exposes the
        // computation itself, not just its value.
        let doubled_run = base.extend(|whole: Thunk<i32>| whole.run() + whole.run());
        assert_eq!(doubled_run.run(), 20);
    }

    #[test]
    fn extend_stays_lazy() {
        let touched = Rc::new(Cell::new(false));
        let tracked = touched.clone();
        let base = Thunk::new(move || {
            tracked.set(true);
            1
        });
        let _extended = base.extend(|whole: Thunk<i32>| whole.run());
        assert!(!touched.get());
    }

    #[test]
    fn fold_left_is_eager_and_runs_exactly_once() {
        let count = Rc::new(Cell::new(0));
        let tracked = count.clone();
        let counting = Thunk::new(move || {
            tracked.set(tracked.get() + 1);
            5
        });

        let folded = counting.fold_left(100, |seed, value| seed + value);
        assert_eq!(folded, 105);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn traverse_pushes_the_wrapping_outward() {
        let reject_zero = |n: i32| if n == 0 { None } else { Some(n) };

        assert!(Thunk::of(0).traverse(reject_zero).is_none());

        let wrapped = Thunk::of(3).traverse(reject_zero);
        assert_eq!(wrapped.map(|thunk| thunk.run()), Some(3));
    }

    #[test]
    fn traverse_is_eager() {
        let count = Rc::new(Cell::new(0));
        let tracked = count.clone();
        let counting = Thunk::new(move || {
            tracked.set(tracked.get() + 1);
            1
        });

        let _wrapped = counting.traverse(Some);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn catch_recovers_from_a_panicking_closure() {
        let fragile: Thunk<i32> = Thunk::new(|| panic!("exploded"));
        let recovered = fragile.catch(|message| {
            assert_eq!(message, "exploded");
            -1
        });
        assert_eq!(recovered.run(), -1);
    }

    #[test]
    fn catch_passes_successful_runs_through() {
        let sturdy = Thunk::of(9).catch(|_| -1);
        assert_eq!(sturdy.run(), 9);
    }
}
