use perfect_time::{PerfectTime, PerfectTimeError, TimePrecision};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn timed<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed().as_secs_f64())
}

fn main() -> Result<(), PerfectTimeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (now_string, t0) = timed(PerfectTime::now_string);
    let (now, t1) = timed(PerfectTime::now);
    let (zero, t2) = timed(|| PerfectTime::new(0, TimePrecision::Seconds));
    let (one, t3) = timed(|| PerfectTime::new(1, TimePrecision::Seconds));
    let (minus_one, t4) = timed(|| PerfectTime::new(-1, TimePrecision::Seconds));
    let (float, t5) = timed(|| PerfectTime::new(-123456789.01234567_f64, TimePrecision::Seconds));
    let (long, t6) = timed(|| {
        PerfectTime::new(
            "-012345678911234567892123456789.012345678911234567892123456789",
            TimePrecision::Seconds,
        )
    });

    println!("Current time to string: {now_string} (took {t0}s)");
    println!("          Current time: {now} (took {t1}s)");
    println!("             Zero time:          {} (took {t2}s)", zero?);
    println!("              One time:          {} (took {t3}s)", one?);
    println!("     Negative one time:         {} (took {t4}s)", minus_one?);
    println!("  Manual time (double): {} (took {t5}s)", float?);
    println!("  Manual time (string): {} (took {t6}s)", long?);
    println!();
    for unit in TimePrecision::ALL {
        println!("{:>12}: {}", unit.name(), now.as_unit(unit));
    }
    Ok(())
}
