#![cfg(feature = "effect")]
//! Tests for the generic derivation utilities applied to effects.
//!
//! The derivations (`combine_with`, `sequence_tuple*`,
//! `sequence_struct!`) only speak the `Apply` contract, so the same
//! call shapes are exercised here against `Fallible` - where execution
//! order and the every-thunk-runs guarantee are observable - and, for
//! generic evidence, against `Either`.

use std::cell::RefCell;
use std::rc::Rc;

use thunkful::control::Either;
use thunkful::effect::Fallible;
use thunkful::typeclass::{
    combine_with, sequence_tuple2, sequence_tuple3, sequence_tuple4, sequence_tuple5,
};
use thunkful::sequence_struct;

type Journal = Rc<RefCell<Vec<&'static str>>>;

fn succeeding(journal: &Journal, name: &'static str, value: i32) -> Fallible<String, i32> {
    let journal = journal.clone();
    Fallible::new(move || {
        journal.borrow_mut().push(name);
        Either::Right(value)
    })
}

fn failing(journal: &Journal, name: &'static str, error: &'static str) -> Fallible<String, i32> {
    let journal = journal.clone();
    Fallible::new(move || {
        journal.borrow_mut().push(name);
        Either::Left(error.to_string())
    })
}

// =============================================================================
// Applicative-derived semigroup
// =============================================================================

mod derived_semigroup {
    use super::*;

    #[test]
    fn combine_with_merges_left_then_right() {
        let journal = Journal::default();
        let merged = combine_with(
            succeeding(&journal, "left", 40),
            succeeding(&journal, "right", 2),
            |a, b| a + b,
        );

        assert_eq!(merged.run(), Either::Right(42));
        assert_eq!(*journal.borrow(), vec!["left", "right"]);
    }

    #[test]
    fn combine_with_runs_both_and_keeps_the_left_failure() {
        let journal = Journal::default();
        let merged = combine_with(
            failing(&journal, "left", "first"),
            failing(&journal, "right", "second"),
            |a, b| a + b,
        );

        assert_eq!(merged.run(), Either::Left("first".to_string()));
        assert_eq!(*journal.borrow(), vec!["left", "right"]);
    }

    #[test]
    fn combine_with_works_for_plain_eithers() {
        let merged = combine_with(
            Either::<String, i32>::Right(1),
            Either::Right(2),
            |a, b| a + b,
        );
        assert_eq!(merged, Either::Right(3));
    }
}

// =============================================================================
// Tuple sequencing
// =============================================================================

mod tuple_sequencing {
    use super::*;

    #[test]
    fn all_successes_produce_the_tuple() {
        let journal = Journal::default();
        let sequenced = sequence_tuple3(
            succeeding(&journal, "first", 1),
            succeeding(&journal, "second", 2),
            succeeding(&journal, "third", 3),
        );

        assert_eq!(sequenced.run(), Either::Right((1, 2, 3)));
        assert_eq!(*journal.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn heterogeneous_value_types_are_preserved() {
        let first: Fallible<String, i32> = Fallible::right(1);
        let second: Fallible<String, &str> = Fallible::right("two");
        let third: Fallible<String, f64> = Fallible::right(3.0);

        let sequenced = sequence_tuple3(first, second, third);
        assert_eq!(sequenced.run(), Either::Right((1, "two", 3.0)));
    }

    #[test]
    fn a_failure_at_any_position_wins_while_every_thunk_runs() {
        for failing_position in 0..3 {
            let journal = Journal::default();
            let effect_at = |position: usize, name: &'static str, value: i32| {
                if position == failing_position {
                    failing(&journal, name, "boom")
                } else {
                    succeeding(&journal, name, value)
                }
            };

            let sequenced = sequence_tuple3(
                effect_at(0, "first", 1),
                effect_at(1, "second", 2),
                effect_at(2, "third", 3),
            );

            assert_eq!(sequenced.run(), Either::Left("boom".to_string()));
            // Every position's thunk still ran, in index order.
            assert_eq!(*journal.borrow(), vec!["first", "second", "third"]);
        }
    }

    #[test]
    fn the_earliest_failure_in_index_order_decides() {
        let journal = Journal::default();
        let sequenced = sequence_tuple4(
            succeeding(&journal, "first", 1),
            failing(&journal, "second", "early"),
            failing(&journal, "third", "late"),
            succeeding(&journal, "fourth", 4),
        );

        assert_eq!(sequenced.run(), Either::Left("early".to_string()));
        assert_eq!(journal.borrow().len(), 4);
    }

    #[test]
    fn pairs_and_quintuples_sequence_too() {
        let journal = Journal::default();
        let pair = sequence_tuple2(
            succeeding(&journal, "first", 1),
            succeeding(&journal, "second", 2),
        );
        assert_eq!(pair.run(), Either::Right((1, 2)));

        let quintuple = sequence_tuple5(
            succeeding(&journal, "a", 1),
            succeeding(&journal, "b", 2),
            succeeding(&journal, "c", 3),
            succeeding(&journal, "d", 4),
            succeeding(&journal, "e", 5),
        );
        assert_eq!(quintuple.run(), Either::Right((1, 2, 3, 4, 5)));
    }

    #[test]
    fn sequencing_is_generic_over_the_instance() {
        let sequenced = sequence_tuple3(
            Either::<String, i32>::Right(1),
            Either::<String, &str>::Right("two"),
            Either::<String, bool>::Right(true),
        );
        assert_eq!(sequenced, Either::Right((1, "two", true)));

        let failed = sequence_tuple3(
            Either::<String, i32>::Right(1),
            Either::<String, &str>::Left("missing".to_string()),
            Either::<String, bool>::Right(true),
        );
        assert_eq!(failed, Either::Left("missing".to_string()));
    }
}

// =============================================================================
// Struct sequencing
// =============================================================================

mod struct_sequencing {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Connection {
        host: String,
        port: u16,
        retries: u8,
    }

    fn host_effect(journal: &Journal, host: &'static str) -> Fallible<String, String> {
        let journal = journal.clone();
        Fallible::new(move || {
            journal.borrow_mut().push("host");
            Either::Right(host.to_string())
        })
    }

    fn port_effect(journal: &Journal, port: Option<u16>) -> Fallible<String, u16> {
        let journal = journal.clone();
        Fallible::new(move || {
            journal.borrow_mut().push("port");
            port.map_or_else(|| Either::Left("no port".to_string()), Either::Right)
        })
    }

    fn retries_effect(journal: &Journal, retries: u8) -> Fallible<String, u8> {
        let journal = journal.clone();
        Fallible::new(move || {
            journal.borrow_mut().push("retries");
            Either::Right(retries)
        })
    }

    #[test]
    fn fields_are_combined_in_written_order() {
        let journal = Journal::default();
        let connection = sequence_struct!(Connection {
            host: host_effect(&journal, "db.internal"),
            port: port_effect(&journal, Some(5432)),
            retries: retries_effect(&journal, 3),
        });

        assert_eq!(
            connection.run(),
            Either::Right(Connection {
                host: "db.internal".to_string(),
                port: 5432,
                retries: 3,
            })
        );
        assert_eq!(*journal.borrow(), vec!["host", "port", "retries"]);
    }

    #[test]
    fn a_failing_field_decides_the_struct_while_all_fields_run() {
        let journal = Journal::default();
        let connection = sequence_struct!(Connection {
            host: host_effect(&journal, "db.internal"),
            port: port_effect(&journal, None),
            retries: retries_effect(&journal, 3),
        });

        assert_eq!(connection.run(), Either::Left("no port".to_string()));
        assert_eq!(*journal.borrow(), vec!["host", "port", "retries"]);
    }

    #[test]
    fn a_single_field_struct_just_maps() {
        #[derive(Debug, PartialEq)]
        struct Wrapper {
            value: i32,
        }

        let journal = Journal::default();
        let wrapped = sequence_struct!(Wrapper {
            value: succeeding(&journal, "value", 9),
        });
        assert_eq!(wrapped.run(), Either::Right(Wrapper { value: 9 }));
    }
}
