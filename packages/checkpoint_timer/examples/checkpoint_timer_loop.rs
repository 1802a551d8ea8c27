//! Profiles the sections of a loop and prints a table every few seconds.
//!
//! Each iteration sleeps 50 ms in code that is not measured, then 100 ms in `code1`
//! and 200 ms in `code2`.

use std::thread;
use std::time::Duration;

use checkpoint_timer::Profiler;

const ITERATIONS: usize = 40;
const REPORT_PERIOD_SECONDS: u32 = 5;

fn main() {
    let mut profiler = Profiler::new();

    for _ in 0..ITERATIONS {
        // Code that does not need to be measured.
        thread::sleep(Duration::from_millis(50));
        profiler.mark(None);

        thread::sleep(Duration::from_millis(100));
        profiler.mark(Some("code1"));

        thread::sleep(Duration::from_millis(200));
        profiler.mark(Some("code2"));

        profiler.periodic_dump(REPORT_PERIOD_SECONDS);
    }

    // Whatever was recorded since the last periodic table.
    profiler.dump();
}
