//! Reading the wall clock, which is the one thing this library needs the
//! operating system for.

#[cfg(target_os = "redox")]
extern crate syscall as redox_syscall;


/// Seconds since the Unix epoch and the nanosecond into that second,
/// according to the system’s real-time clock.
///
/// A clock that can’t be read gives the epoch itself.
pub(crate) fn wall_clock() -> (i64, i32) {
    match read_clock() {
        Some(now) => now,
        None      => {
            warn!("the system clock could not be read; using the Unix epoch");
            (0, 0)
        },
    }
}


#[cfg(all(unix, not(target_os = "macos"), not(target_os = "ios"), not(target_os = "redox")))]
fn read_clock() -> Option<(i64, i32)> {
    let mut ts = libc::timespec { tv_sec: 0, tv_nsec: 0 };

    // SAFETY: `ts` is a valid, writable timespec for the whole call.
    let status = unsafe { libc::clock_gettime(libc::CLOCK_REALTIME, &mut ts) };
    if status == 0 { Some((ts.tv_sec as i64, ts.tv_nsec as i32)) } else { None }
}


#[cfg(any(target_os = "macos", target_os = "ios"))]
extern {
    fn gettimeofday(tp: *mut libc::timeval, tzp: *mut libc::timezone) -> libc::c_int;
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
fn read_clock() -> Option<(i64, i32)> {
    let mut tv = libc::timeval { tv_sec: 0, tv_usec: 0 };

    // SAFETY: `tv` is writable, and a null zone pointer is allowed.
    let status = unsafe { gettimeofday(&mut tv, std::ptr::null_mut()) };
    if status == 0 { Some((tv.tv_sec as i64, tv.tv_usec as i32 * 1000)) } else { None }
}


#[cfg(target_os = "redox")]
fn read_clock() -> Option<(i64, i32)> {
    let mut ts = redox_syscall::TimeSpec::default();
    redox_syscall::clock_gettime(redox_syscall::CLOCK_REALTIME, &mut ts).ok()?;
    Some((ts.tv_sec, ts.tv_nsec))
}


/// Windows counts hundreds of nanoseconds from 1601.
#[cfg(windows)]
mod filetime {
    use winapi::shared::minwindef::FILETIME;

    const TICKS_PER_SECOND: i64 = 10_000_000;
    const TICKS_BEFORE_UNIX_EPOCH: i64 = 11_644_473_600 * TICKS_PER_SECOND;

    pub(super) fn to_unix(ft: &FILETIME) -> (i64, i32) {
        let ticks = ((u64::from(ft.dwHighDateTime) << 32) | u64::from(ft.dwLowDateTime)) as i64;
        let since_epoch = ticks - TICKS_BEFORE_UNIX_EPOCH;

        (since_epoch.div_euclid(TICKS_PER_SECOND), (since_epoch.rem_euclid(TICKS_PER_SECOND) * 100) as i32)
    }
}

#[cfg(windows)]
fn read_clock() -> Option<(i64, i32)> {
    use winapi::shared::minwindef::FILETIME;
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;

    let mut ft = FILETIME { dwLowDateTime: 0, dwHighDateTime: 0 };

    // SAFETY: `ft` is a valid, writable FILETIME; the call cannot fail.
    unsafe { GetSystemTimeAsFileTime(&mut ft) };
    Some(filetime::to_unix(&ft))
}
