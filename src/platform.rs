//! Process-wide console setup, run once before anything is printed.

#[cfg(windows)]
const CP_UTF8: u32 = 65001;

/// Switch the Windows console to UTF-8 output. No-op elsewhere.
#[cfg(windows)]
pub fn init() {
    use windows::Win32::System::Console::SetConsoleOutputCP;

    // On failure the console keeps its previous code page.
    let _ = unsafe { SetConsoleOutputCP(CP_UTF8) };
}

#[cfg(not(windows))]
pub fn init() {}
