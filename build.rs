fn main() {
    // Embed Windows version metadata
    #[cfg(target_os = "windows")]
    {
        let res = winres::WindowsResource::new();
        res.compile().unwrap();
    }
}
