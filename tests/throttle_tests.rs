use instant::Instant;
use std::time::Duration;
use vecviz_viewport::FrameThrottle;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn fires_immediately_then_waits_out_the_interval() {
    let mut throttle = FrameThrottle::new(ms(100));
    let t0 = Instant::now();
    assert!(throttle.ready(t0), "first call must fire");
    assert!(!throttle.ready(t0), "same instant must not fire twice");
    assert!(!throttle.ready(t0 + ms(50)));
    assert!(throttle.ready(t0 + ms(100)), "interval elapsed");
    assert!(!throttle.ready(t0 + ms(150)), "clock restarts at each firing");
    assert!(throttle.ready(t0 + ms(200)));
}

#[test]
fn from_hz_limits_firings_per_second() {
    let mut throttle = FrameThrottle::from_hz(10.0);
    let t0 = Instant::now();
    let mut fired = 0;
    // simulate a 60 fps loop for one second
    for frame in 0..60 {
        if throttle.ready(t0 + ms(frame * 1000 / 60)) {
            fired += 1;
        }
    }
    assert!(
        (9..=11).contains(&fired),
        "10 Hz throttle fired {fired} times in a simulated second"
    );
}

#[test]
fn non_positive_rate_never_blocks() {
    let mut throttle = FrameThrottle::from_hz(0.0);
    let t0 = Instant::now();
    for _ in 0..5 {
        assert!(throttle.ready(t0));
    }
}

#[test]
fn reset_reopens_the_gate() {
    let mut throttle = FrameThrottle::new(ms(1000));
    let t0 = Instant::now();
    assert!(throttle.ready(t0));
    assert!(!throttle.ready(t0 + ms(1)));
    throttle.reset();
    assert!(throttle.ready(t0 + ms(2)), "reset must reopen the gate");
}

#[test]
fn time_going_backwards_does_not_fire_early() {
    let mut throttle = FrameThrottle::new(ms(100));
    let t0 = Instant::now() + ms(500);
    assert!(throttle.ready(t0));
    // an earlier instant saturates to zero elapsed
    assert!(!throttle.ready(t0 - ms(200)));
    assert!(throttle.ready(t0 + ms(100)));
}
