#![no_main]

use libfuzzer_sys::fuzz_target;

use iterate::prelude::*;
use iterate::producer::{transform, TestProducer, TestProducerBuilder};

fn step(x: u8) -> u32 {
    u32::from(x) * 7 + 1
}

fn fold(y: u32, acc: &u32) -> u32 {
    acc.wrapping_mul(31).wrapping_add(y)
}

/// An unpulled copy of `p`.
fn rebuild(p: &TestProducer<u8, i16>) -> TestProducer<u8, i16> {
    TestProducerBuilder::new(p.remaining().to_vec(), p.last().clone()).build()
}

fuzz_target!(|data: (TestProducer<u8, i16>, Option<u8>)| {
    let (source, reject) = data;
    let copy = rebuild(&source);

    let check = |x: u8| match reject {
        Some(rejected) if rejected == x => Err(-1),
        _ => Ok(()),
    };

    let separate = reduce(
        transform(source, |x| check(x).map(|()| step(x))),
        0u32,
        |y, acc| Ok::<_, i16>(fold(y, acc)),
    );
    let fused = reduce(copy, 0u32, |x, acc| {
        check(x)?;
        Ok::<_, i16>(fold(step(x), acc))
    });

    assert_eq!(separate, fused);
});
