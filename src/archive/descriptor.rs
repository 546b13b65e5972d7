// Tue Aug 04 2026 - Alex

// Fixed descriptor convention: entries under this directory name the
// service(s) their own base name implements, one service per line.
pub const DESCRIPTOR_DIR: &str = "meta-inf/services/";

pub fn is_descriptor_path(entry_name: &str) -> bool {
    let lower = entry_name.to_lowercase();
    lower.starts_with(DESCRIPTOR_DIR)
}

pub fn names_service(content: &str, service_name: &str) -> bool {
    content.lines().any(|line| {
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.eq_ignore_ascii_case(service_name)
    })
}

pub fn implementation_name(entry_name: &str) -> &str {
    match entry_name.rfind('/') {
        Some(index) => &entry_name[index + 1..],
        None => entry_name,
    }
}
