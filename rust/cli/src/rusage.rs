use std::io;
use std::mem::MaybeUninit;
use std::time::Duration;

/// A point-in-time snapshot of this process's resource usage, taken with
/// `getrusage(RUSAGE_SELF)`. Purely observational.
#[derive(Clone, Copy, Debug)]
pub struct ResourceUsage {
    pub user_time: Duration,
    pub system_time: Duration,
    /// Peak resident set size. Kilobytes on Linux.
    pub max_rss: i64,
}

impl ResourceUsage {
    pub fn snapshot() -> io::Result<ResourceUsage> {
        let mut usage = MaybeUninit::<libc::rusage>::zeroed();
        // SAFETY: getrusage either fills the struct and returns 0, or fails
        // and we bail before reading it.
        let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
        if rc != 0 {
            return Err(io::Error::last_os_error());
        }
        let usage = unsafe { usage.assume_init() };
        Ok(ResourceUsage {
            user_time: timeval_to_duration(usage.ru_utime),
            system_time: timeval_to_duration(usage.ru_stime),
            max_rss: usage.ru_maxrss as i64,
        })
    }

    pub fn print_report(&self, label: &str) {
        println!("{label}");
        println!(
            "User time: {}.{:06} seconds",
            self.user_time.as_secs(),
            self.user_time.subsec_micros()
        );
        println!(
            "System time: {}.{:06} seconds",
            self.system_time.as_secs(),
            self.system_time.subsec_micros()
        );
        println!("Maximum resident set size: {} kilobytes", self.max_rss);
    }
}

fn timeval_to_duration(tv: libc::timeval) -> Duration {
    Duration::new(tv.tv_sec.max(0) as u64, tv.tv_usec.max(0) as u32 * 1_000)
}
