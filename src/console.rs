/// Switch the console input and output code pages before any other I/O.
///
/// Failure is logged and otherwise ignored.
#[cfg(windows)]
pub fn apply_code_page(code_page: Option<u32>) {
    use winapi::um::wincon::{SetConsoleCP, SetConsoleOutputCP};

    let Some(cp) = code_page else {
        return;
    };
    // SAFETY: both calls only take a code page identifier and report failure
    // through their return value.
    let ok = unsafe { SetConsoleCP(cp) != 0 && SetConsoleOutputCP(cp) != 0 };
    if ok {
        log::info!("Console code page set to {cp}");
    } else {
        log::warn!("Failed to set console code page {cp}");
    }
}

#[cfg(not(windows))]
pub fn apply_code_page(code_page: Option<u32>) {
    if let Some(cp) = code_page {
        log::debug!("Console code page {cp} ignored on this platform");
    }
}
