use anyhow::{anyhow, Context, Result};
use std::fs;
use std::panic;
use std::path::Path;

/// Pulls plain text out of a document. An empty string means "could not
/// read it" and excludes the document from the corpus.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, path: &Path) -> String;
}

/// PDFs go through `pdf-extract`; every other file is read as (lossy) UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTextExtractor;

impl TextExtractor for FileTextExtractor {
    fn extract_text(&self, path: &Path) -> String {
        let is_pdf = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        let res = if is_pdf { extract_pdf(path) } else { read_plain(path) };
        match res {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not extract text");
                String::new()
            }
        }
    }
}

fn read_plain(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn extract_pdf(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    // pdf-extract panics on some malformed files
    let out = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes))
        .map_err(|_| anyhow!("pdf parser panicked"))?;
    out.map_err(|e| anyhow!("pdf parse error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_plain_text() {
        let mut f = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(f, "hello world").unwrap();
        assert_eq!(FileTextExtractor.extract_text(f.path()), "hello world");
    }

    #[test]
    fn unreadable_file_is_empty() {
        assert_eq!(FileTextExtractor.extract_text(Path::new("/no/such/file.txt")), "");
    }

    #[test]
    fn corrupt_pdf_is_empty() {
        let mut f = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        f.write_all(b"this is not a pdf").unwrap();
        assert_eq!(FileTextExtractor.extract_text(f.path()), "");
    }
}
