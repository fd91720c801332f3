//! Reads the log kept by the external document viewer to find out where the
//! reader stopped. The viewer writes one `<absolute path> <page>` line per
//! document; paths may contain spaces, the page is the last field.

use crate::ui::messages::warning;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

const LINE_PATTERN: &str = r"^(.+) (\d+)\s*$";

/// End page of `book` according to the viewer log, converted from the
/// viewer's numbering with `page_num_diff`. Any problem is reported as a
/// warning and yields `None`.
pub fn end_page_from_log(viewer_log: &Path, book: &Path, page_num_diff: i64) -> Option<i64> {
    if !viewer_log.exists() {
        warning(format!(
            "{} does not exist, check the viewer program",
            viewer_log.display()
        ));
        return None;
    }

    let content = match fs::read_to_string(viewer_log) {
        Ok(c) => c,
        Err(e) => {
            warning(format!("Cannot read {}: {}", viewer_log.display(), e));
            return None;
        }
    };

    let book = canonical(book);
    match find_page(&content, &book) {
        Some(page) => Some(page - page_num_diff + 1),
        None => {
            warning("Failed to determine the end page, you need to complete it manually");
            None
        }
    }
}

/// Raw viewer page recorded for `book`, if any line matches it.
pub fn find_page(content: &str, book: &Path) -> Option<i64> {
    let re = Regex::new(LINE_PATTERN).ok()?;

    content.lines().find_map(|line| {
        let caps = re.captures(line)?;
        if Path::new(&caps[1]) == book {
            caps[2].parse().ok()
        } else {
            None
        }
    })
}

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
