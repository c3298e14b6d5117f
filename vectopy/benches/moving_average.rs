use std::time::Instant;

use vectopy::prelude::*;

const SIZE: usize = 1_000_000;
const WINDOW: isize = 50;

fn main() {
    println!("Benchmarking `moving_average`");
    println!("Size {SIZE}");
    println!("Window {WINDOW}");
    println!();

    let mut rng = RandomState::default();

    loop {
        let prices = rng.uniform(SIZE, 90.0, 110.0).unwrap();

        let start = Instant::now();
        let _ = prices.moving_average(WINDOW).unwrap();
        let ma_dur = start.elapsed();

        let start = Instant::now();
        let _ = prices.cumulative_sum().unwrap();
        let cumsum_dur = start.elapsed();

        let start = Instant::now();
        let _ = prices.diff().unwrap();
        let diff_dur = start.elapsed();

        println!("moving_average={ma_dur:?}, cumulative_sum={cumsum_dur:?} diff={diff_dur:?}");
    }
}
