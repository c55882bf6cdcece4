//! Terminal and file input helpers.

use std::io::BufRead;
use std::time::Duration;

/// Reads one trimmed line. `None` on EOF or a read error.
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Reads a UTF-8 text file, dropping a leading byte order mark.
pub fn read_text(path: &str) -> Result<String, String> {
    let mut content = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

fn strip_utf8_bom(s: &mut String) {
    if s.starts_with('\u{feff}') {
        s.drain(..'\u{feff}'.len_utf8());
    }
}

/// Blocks for a continuation delay. Zero returns immediately.
pub fn pause(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_trimmed_lines_until_eof() {
        let mut input = Cursor::new("  call \nq\n");
        assert_eq!(read_stdin_line(&mut input), Some("call".to_string()));
        assert_eq!(read_stdin_line(&mut input), Some("q".to_string()));
        assert_eq!(read_stdin_line(&mut input), None);
    }

    #[test]
    fn bom_is_stripped() {
        let mut s = "\u{feff}seed = 1".to_string();
        strip_utf8_bom(&mut s);
        assert_eq!(s, "seed = 1");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_text("definitely/not/here.toml").unwrap_err();
        assert!(err.starts_with("definitely/not/here.toml"));
    }
}
