use anyhow::{anyhow, Result};

/// Installs a SIGINT handler that ends the run gracefully: rows already
/// flushed stay on disk, a cancellation notice is printed and the
/// process exits 0. Restricted to async-signal-safe calls.
pub fn install_handler() -> Result<()> {
    unsafe {
        let mut action: libc::sigaction = std::mem::zeroed();
        let handler: extern "C" fn(libc::c_int) = handle_sigint;
        action.sa_sigaction = handler as usize;
        libc::sigemptyset(&mut action.sa_mask);

        if libc::sigaction(libc::SIGINT, &action, std::ptr::null_mut()) != 0 {
            return Err(anyhow!("failed to install SIGINT handler"));
        }
    }

    Ok(())
}

extern "C" fn handle_sigint(_signal: libc::c_int) {
    const MESSAGE: &[u8] = b"\n\nOperation cancelled by user. Exiting gracefully.\n";

    unsafe {
        libc::write(
            libc::STDOUT_FILENO,
            MESSAGE.as_ptr() as *const libc::c_void,
            MESSAGE.len(),
        );
        libc::_exit(0);
    }
}
