#![no_main]

use libfuzzer_sys::fuzz_target;

use crossbeam_channel::unbounded;

use iterate::prelude::*;
use iterate::producer::{from_channel, TestProducer};

fuzz_target!(|source: TestProducer<u16, u8>| {
    let expected_items = source.remaining().to_vec();
    let expected_last = source.last().clone();

    let (tx, rx) = unbounded();
    let res = to_channel(source, &tx);
    drop(tx);

    match expected_last {
        Ok(()) => assert_eq!(res, Ok(())),
        Err(err) => assert_eq!(res, Err(PumpError::Producer(err))),
    }
    assert_eq!(to_vec(from_channel(rx)), Ok(expected_items));
});
