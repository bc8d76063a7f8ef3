use std::io;

#[cfg(unix)]
use crate::config;

#[cfg(unix)]
extern "C" fn handle_termination(_signum: libc::c_int) {
    // Only async-signal-safe calls are allowed here. Every file handle is
    // scoped to a single processing iteration, so exiting releases
    // everything the process still holds.
    unsafe { libc::_exit(config::EXIT_INTERRUPTED) }
}

/// Register SIGINT/SIGTERM handlers, once at process start.
#[cfg(unix)]
pub fn install_handlers() -> io::Result<()> {
    let handler = handle_termination as extern "C" fn(libc::c_int);
    for signal in [libc::SIGINT, libc::SIGTERM] {
        let ret = unsafe { libc::signal(signal, handler as libc::sighandler_t) };
        if ret == libc::SIG_ERR {
            return Err(io::Error::last_os_error());
        }
    }
    Ok(())
}

/// No-op on non-Unix systems
#[cfg(not(unix))]
pub fn install_handlers() -> io::Result<()> {
    Ok(())
}
