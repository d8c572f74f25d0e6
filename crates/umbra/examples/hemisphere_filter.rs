//! Filtered sampling with history recording.
//!
//! Installs the facing filter the plane widget uses (accept directions
//! with u · Y > -0.2), records every accepted sample, and summarizes the
//! recorded run.

use std::cell::RefCell;
use std::rc::Rc;

use umbra::{filters, ConvexBody, SampleRecorder, SamplerStream, Vec3};

fn main() {
    tracing_subscriber::fmt().init();

    println!("=== Filtered Sampling: u · Y > -0.2 ===\n");

    let mut stream = SamplerStream::builder(ConvexBody::unit_cube())
        .interval_ms(50.0)
        .seed(42)
        .filter(filters::facing(Vec3::y(), -0.2))
        .build();

    let recorder = Rc::new(RefCell::new(SampleRecorder::new()));
    let sink = Rc::clone(&recorder);
    stream.subscribe(move |s| {
        sink.borrow_mut().record(s);
        Ok(())
    });

    let interval = stream.interval_ms();
    let mut now = 0.0;
    stream.tick(now);
    while stream.sample_count() < 1000 {
        now += interval;
        stream.tick(now);
    }

    let recorder = recorder.borrow();
    let stats = recorder.stats();
    println!("samples recorded: {}", stats.nsamples);
    println!(
        "final mean: {:.4} (S/4 = {:.4}, gap {:+.4})",
        stats.final_mean, stats.target, stats.target_gap
    );

    let above = recorder
        .direction_history
        .iter()
        .filter(|d| d[1] > -0.2)
        .count();
    println!("directions passing the filter: {}/{}", above, recorder.len());

    match recorder.to_json() {
        Ok(json) => println!("json export: {} bytes", json.len()),
        Err(err) => eprintln!("json export failed: {err}"),
    }
}
