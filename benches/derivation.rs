// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate criterion;

use criterion::Criterion;
use rand_core::{OsRng, RngCore};

extern crate hdkd;
use hdkd::{HdNode, BITCOIN};

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = OsRng;

    let mut seed = [0u8; 64];
    rng.fill_bytes(&mut seed);

    c.bench_function("Master node from seed", |bench| {
        bench.iter(|| HdNode::from_seed(&seed, &BITCOIN))
    });

    c.bench_function("Derive normal child", |bench| {
        let master = HdNode::from_seed(&seed, &BITCOIN).unwrap();
        bench.iter(|| master.derive_child(0, false, &BITCOIN))
    });

    c.bench_function("Derive hardened child", |bench| {
        let master = HdNode::from_seed(&seed, &BITCOIN).unwrap();
        bench.iter(|| master.derive_child(0, true, &BITCOIN))
    });

    c.bench_function("Derive normal child from neutered node", |bench| {
        let neutered = HdNode::from_seed(&seed, &BITCOIN).unwrap().neuter().unwrap();
        bench.iter(|| neutered.derive_child(0, false, &BITCOIN))
    });

    c.bench_function("Derive five-step path", |bench| {
        let master = HdNode::from_seed(&seed, &BITCOIN).unwrap();
        bench.iter(|| master.derive_path("m/44'/0'/0'/0/0", &BITCOIN))
    });

    c.bench_function("Encode private extended key", |bench| {
        let master = HdNode::from_seed(&seed, &BITCOIN).unwrap();
        bench.iter(|| master.encode_private(&BITCOIN))
    });

    c.bench_function("Decode private extended key", |bench| {
        let encoded = HdNode::from_seed(&seed, &BITCOIN)
            .unwrap()
            .encode_private(&BITCOIN)
            .unwrap();
        bench.iter(|| HdNode::decode(&encoded, &BITCOIN))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark);
criterion_main!(benches);
