//! Frontend Models
//!
//! View data for dropped files and the event log.

use web_sys::FileList;

/// A dropped file, as listed in the UI (contents are never read)
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl DroppedFile {
    pub fn from_list(list: &FileList) -> Vec<DroppedFile> {
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(|f| DroppedFile {
                name: f.name(),
                size: f.size() as u64,
                mime: f.type_(),
            })
            .collect()
    }

    pub fn size_label(&self) -> String {
        format_size(self.size)
    }
}

/// Human-readable byte count
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// One line of the event log
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: u32,
    pub kind: &'static str,
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn test_size_label() {
        let file = DroppedFile {
            name: "notes.md".to_string(),
            size: 2048,
            mime: "text/markdown".to_string(),
        };
        assert_eq!(file.size_label(), "2.0 KB");
    }
}
