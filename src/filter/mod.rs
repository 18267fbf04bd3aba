pub mod denylist;

/// Returns true if a reconstructed path ends in an obvious static-asset
/// extension and is therefore not worth reporting as a URL template.
pub fn is_asset_path(path: &str) -> bool {
    let lower = path.to_lowercase();
    for ext in [
        ".css", ".map", ".png", ".jpg", ".jpeg", ".gif", ".svg", ".ico", ".webp",
        ".woff", ".woff2", ".ttf", ".eot", ".mp4", ".webm",
    ] {
        if lower.ends_with(ext) {
            return true;
        }
    }
    false
}
