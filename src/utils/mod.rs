/// Append the compiled-artifact extension unless it is already there.
pub fn ensure_amx_extension(name: &str) -> String {
    let name = name.trim();
    if name.to_ascii_lowercase().ends_with(".amx") {
        name.to_string()
    } else {
        format!("{}.amx", name)
    }
}

/// File name portion of a server download path,
/// e.g. "/download/script.amx" -> "script.amx"
pub fn artifact_name_from_link(link: &str) -> String {
    link.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or("compiled.amx")
        .to_string()
}

/// Sanitize filename to remove invalid characters
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            _ => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}
