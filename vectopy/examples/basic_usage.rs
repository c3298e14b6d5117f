//! A tour of vectopy. Run with `RUST_LOG=info` to see benchmark events.

use vectopy::prelude::*;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let a = array([1, 2, 3])?;
    let b = array([4.0, 5.0, 6.0])?;
    println!("a = {a}");
    println!("b = {b}");
    println!("a + b = {}", a.try_add(&b)?);
    println!("a * 2 = {}", a.try_mul(2)?);
    println!("a / 2 = {}", a.try_div(2)?);
    println!("a . b = {}", a.dot(&b)?);

    if let Err(e) = a.try_add(&array([1, 2])?) {
        println!("mismatched shapes: {e}");
    }

    println!();
    println!("{}", explain(&a));

    let prices = array([100, 105, 110, 115, 120, 125])?;
    println!("prices          = {prices}");
    println!("moving avg (3)  = {}", prices.moving_average(3)?);
    println!("diff            = {}", prices.diff()?);
    println!("cumulative sum  = {}", prices.cumulative_sum()?);
    println!("shift(2)        = {}", prices.shift(2));
    println!("minmax scaled   = {}", prices.minmax_scale()?);
    println!();
    print!("{}", visualize(&prices));

    let mut rng = RandomState::seed_from_u64(0);
    let noise = rng.normal(1_000, 0.0, 1.0)?;
    println!();
    println!(
        "noise: mean={:.4} std={:.4} median={}",
        noise.mean()?,
        noise.std()?,
        noise.median()?
    );

    let timed = benchmark("normalize", &noise, VectoPyArray::normalize);
    println!("{timed}");
    let z = timed.result?;
    println!("normalized std = {:.4}", z.std()?);

    let votes = array([2, 2, 3, 2, 4, 2, 2])?;
    println!("majority of {votes} is {}", votes.majority_element()?);
    println!("mode of {votes} is {:?}", votes.mode()?);
    Ok(())
}
