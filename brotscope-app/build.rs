// Embed the Windows executable icon when building on Windows.
// Place icon.ico next to Cargo.toml; without it the build proceeds iconless.

fn main() {
    #[cfg(target_os = "windows")]
    {
        let icon_path = std::path::Path::new("icon.ico");
        if icon_path.exists() {
            let mut res = winres::WindowsResource::new();
            res.set_icon("icon.ico");
            if let Err(e) = res.compile() {
                panic!(
                    "Failed to embed icon from icon.ico: {e}. \
                     A resource compiler (rc.exe) must be on PATH."
                );
            }
        }
    }
}
