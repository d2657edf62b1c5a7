#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate byteorder;
extern crate gk_quantile;

use byteorder::{BigEndian, ReadBytesExt};
use std::io::Cursor;

#[derive(Debug, Clone, Copy)]
pub struct Xorshift {
    seed: u64,
}

impl Xorshift {
    pub fn new(seed: u64) -> Xorshift {
        Xorshift { seed }
    }

    pub fn next_val(&mut self) -> u32 {
        // implementation inspired by
        // https://github.com/astocko/xorshift/blob/master/src/splitmix64.rs
        use std::num::Wrapping as w;

        let mut z = w(self.seed) + w(0x9E37_79B9_7F4A_7C15_u64);
        let nxt_seed = z.0;
        z = (z ^ (z >> 30)) * w(0xBF58_476D_1CE4_E5B9_u64);
        z = (z ^ (z >> 27)) * w(0x94D0_49BB_1331_11EB_u64);
        self.seed = nxt_seed;
        u32::from((z ^ (z >> 31)).0 as u16)
    }
}

fuzz_target!(|data: &[u8]| {
    let mut cursor = Cursor::new(data);

    // unbounded, Summary::new rejects anything outside (0, 0.5)
    let epsilon: f64 = if let Ok(res) = cursor.read_f64::<BigEndian>() {
        res
    } else {
        return;
    };
    // bounded 2**14
    let upper_bound: u32 = if let Ok(res) = cursor.read_u32::<BigEndian>() {
        res % 16_384
    } else {
        return;
    };
    // unbounded
    let seed: u64 = if let Ok(res) = cursor.read_u64::<BigEndian>() {
        res
    } else {
        return;
    };

    let mut summary = match gk_quantile::Summary::<u32>::new(epsilon) {
        Ok(summary) => summary,
        Err(_) => return,
    };

    let mut xshft = Xorshift::new(seed);
    for _ in 0..(upper_bound as usize) {
        let val = xshft.next_val();
        summary.insert(val);
    }

    let n = summary.n();
    let range = (summary.epsilon() * n as f64) as usize;
    let mut rank = 1;
    while rank <= n {
        let (_, low_bound) = summary.query(rank).expect("rank in [1, n] must answer");
        assert!(rank <= low_bound + range);
        assert!(low_bound <= rank + range);
        rank += 1 + n / 16;
    }
});
