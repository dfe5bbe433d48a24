//! Path helpers shared by the output naming and loader builders

/// Clean a path by removing `.`, `..` and empty components
pub fn clean_path(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => continue,
            ".." => {
                parts.pop();
            }
            _ => parts.push(part),
        }
    }

    if path.starts_with('/') {
        format!("/{}", parts.join("/"))
    } else {
        parts.join("/")
    }
}

/// Convert platform separators to forward slashes
pub fn to_slash(path: &str) -> String {
    path.replace('\\', "/")
}

/// Drop the last extension of the final path segment, if any
///
/// Dot files such as `.hidden` keep their name.
pub fn strip_extension(path: &str) -> &str {
    let file_start = path.rfind('/').map_or(0, |idx| idx + 1);
    match path[file_start..].rfind('.') {
        Some(0) | None => path,
        Some(dot) => &path[..file_start + dot],
    }
}

/// Number of directory levels in a forward-slash path
pub fn path_depth(path: &str) -> usize {
    path.matches('/').count()
}
