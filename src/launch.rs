//! Launch-context detection: was this process double-clicked?
//!
//! A console program started from Explorer gets a brand-new console that
//! only it and the console host are attached to. One started from a
//! terminal shares the console with the shell (and whatever launched it).
//! Counting the attached processes tells the two apart.
//!
//! Never fails: a failed query or a platform without one reads as
//! "not standalone", which means no pause.

/// Number of console processes that marks a standalone launch.
const STANDALONE_PROCESS_COUNT: u32 = 2;

/// Decides whether the process should pause before exiting.
pub trait LaunchContextDetector {
    /// Returns true when the process appears to own its console window.
    fn launched_standalone(&self) -> bool;
}

/// Detector backed by the console process list.
///
/// Always returns false on platforms without a console process query.
pub struct ConsoleLaunchDetector;

impl LaunchContextDetector for ConsoleLaunchDetector {
    fn launched_standalone(&self) -> bool {
        let count = console_process_count();
        let standalone = is_standalone(count);
        log::debug!("console process count {count:?}, standalone launch: {standalone}");
        standalone
    }
}

/// Applies the process-count heuristic. `None` means the query was
/// unavailable or failed.
pub fn is_standalone(count: Option<u32>) -> bool {
    count == Some(STANDALONE_PROCESS_COUNT)
}

/// Queries how many processes are attached to the current console.
#[cfg(windows)]
fn console_process_count() -> Option<u32> {
    use windows_sys::Win32::System::Console::GetConsoleProcessList;

    // The buffer may be smaller than the list: the call still returns the
    // total count, it just doesn't fill in the ids.
    let mut ids = [0u32; 1];
    // SAFETY: `ids` is valid for writes of `ids.len()` u32 values, which is
    // the length passed to the call.
    let count = unsafe { GetConsoleProcessList(ids.as_mut_ptr(), ids.len() as u32) };
    // 0 signals failure (e.g. no console attached).
    (count != 0).then_some(count)
}

#[cfg(not(windows))]
fn console_process_count() -> Option<u32> {
    None
}

#[cfg(test)]
#[path = "launch_tests.rs"]
mod tests;
