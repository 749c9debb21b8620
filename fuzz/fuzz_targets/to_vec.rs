#![no_main]

use libfuzzer_sys::fuzz_target;

use iterate::prelude::*;
use iterate::producer::{from_slice, from_vec, TestProducer};

fuzz_target!(|data: (Vec<u8>, TestProducer<u8, i16>)| {
    let (items, mut source) = data;

    assert_eq!(to_vec(from_slice(&items)), Ok(items.clone()));
    assert_eq!(from_vec(items.clone()).to_vec(), Ok(items));

    let expected_items = source.remaining().to_vec();
    let expected_last = source.last().clone();

    match to_vec(source.by_ref()) {
        Ok(collected) => {
            assert_eq!(expected_last, Ok(()));
            assert_eq!(collected, expected_items);
        }
        Err(CollectError { items, reason }) => {
            assert_eq!(expected_last, Err(reason));
            assert_eq!(items, expected_items);
        }
    }

    assert_eq!(source.pulls(), expected_items.len() + 1);
});
