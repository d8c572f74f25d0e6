//! Monte Carlo estimate of the average shadow of the unit cube.
//!
//! Drives a seeded sampler stream with a synthetic clock and prints the
//! running-mean readout as samples accumulate. The mean converges to
//! S/4 = 1.5 by Cauchy's formula.

use std::cell::RefCell;
use std::rc::Rc;

use umbra::{ConvexBody, SamplerStream};

fn main() {
    tracing_subscriber::fmt().init();

    println!("=== Average Shadow: Unit Cube ===\n");

    let mut stream = SamplerStream::builder(ConvexBody::unit_cube())
        .interval_ms(50.0)
        .seed(7)
        .build();

    println!(
        "body surface area S = {}, Cauchy target S/4 = {}\n",
        stream.reference_area(),
        stream.target()
    );
    println!("      n     A_proj      mean       S/4      error");
    println!("──────────────────────────────────────────────────");

    let delivered = Rc::new(RefCell::new(0u64));
    let counter = Rc::clone(&delivered);
    stream.subscribe(move |s| {
        *counter.borrow_mut() += 1;
        if s.seq % 200 == 0 {
            println!(
                "{:7}   {:8.4}  {:8.4}  {:8.4}  {:+8.4}",
                s.seq,
                s.area.unwrap_or(f64::NAN),
                s.mean,
                s.target,
                s.error()
            );
        }
        Ok(())
    });

    let interval = stream.interval_ms();
    let mut now = 0.0;
    stream.tick(now);
    while stream.sample_count() < 2000 {
        now += interval;
        stream.tick(now);
    }

    println!("\n=== Summary ===");
    println!("samples delivered: {}", delivered.borrow());
    println!(
        "final mean {:.6} vs target {:.6} (gap {:+.6}, std dev {:.4})",
        stream.running_mean(),
        stream.target(),
        stream.running_mean() - stream.target(),
        stream.stats().std_dev()
    );
}
