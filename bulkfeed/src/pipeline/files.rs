//! Filesystem helpers for the import pipeline.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncReadExt;

use crate::error::{FeedError, FeedResult};

/// Creates a directory and its parents when missing.
pub async fn ensure_dir(path: &Path) -> FeedResult<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|err| FeedError::io(format!("create dir {}", path.display()), err))
}

/// Moves a file into `dst_dir` by rename, appending a unix-timestamp suffix
/// when a file with the same name is already there.
pub async fn move_file(src: &Path, dst_dir: &Path) -> FeedResult<PathBuf> {
    let base = src
        .file_name()
        .ok_or_else(|| {
            FeedError::io(
                format!("move {}: no file name", src.display()),
                std::io::Error::from(std::io::ErrorKind::InvalidInput),
            )
        })?
        .to_owned();

    let mut dst = dst_dir.join(&base);
    if fs::try_exists(&dst).await.unwrap_or(false) {
        let base = base.to_string_lossy();
        let (stem, ext) = match base.rfind('.') {
            Some(idx) => (&base[..idx], &base[idx..]),
            None => (base.as_ref(), ""),
        };
        let ts = chrono::Local::now().timestamp();
        dst = dst_dir.join(format!("{stem}_{ts}{ext}"));
    }

    fs::rename(src, &dst)
        .await
        .map_err(|err| FeedError::io(format!("move {} -> {}", src.display(), dst.display()), err))?;
    Ok(dst)
}

/// Counts the lines of a file. A trailing line without a newline counts.
pub async fn count_lines(path: &Path) -> FeedResult<i64> {
    let mut file = fs::File::open(path)
        .await
        .map_err(|err| FeedError::io(format!("open {}", path.display()), err))?;

    let mut buf = vec![0u8; 64 * 1024];
    let mut lines = 0i64;
    let mut last_byte = b'\n';

    loop {
        let n = file
            .read(&mut buf)
            .await
            .map_err(|err| FeedError::io(format!("read {}", path.display()), err))?;
        if n == 0 {
            break;
        }
        lines += buf[..n].iter().filter(|b| **b == b'\n').count() as i64;
        last_byte = buf[n - 1];
    }

    if last_byte != b'\n' {
        lines += 1;
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn counts_lines_with_and_without_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.txt");

        fs::write(&path, "a\nb\nc\n").await.unwrap();
        assert_eq!(count_lines(&path).await.unwrap(), 3);

        fs::write(&path, "a\nb\nc").await.unwrap();
        assert_eq!(count_lines(&path).await.unwrap(), 3);

        fs::write(&path, "").await.unwrap();
        assert_eq!(count_lines(&path).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn move_file_appends_suffix_on_collision() {
        let dir = TempDir::new().unwrap();
        let src_dir = dir.path().join("in");
        let dst_dir = dir.path().join("done");
        ensure_dir(&src_dir).await.unwrap();
        ensure_dir(&dst_dir).await.unwrap();

        let first = src_dir.join("feed.txt");
        fs::write(&first, "1").await.unwrap();
        let moved = move_file(&first, &dst_dir).await.unwrap();
        assert_eq!(moved, dst_dir.join("feed.txt"));

        let second = src_dir.join("feed.txt");
        fs::write(&second, "2").await.unwrap();
        let moved = move_file(&second, &dst_dir).await.unwrap();
        assert_ne!(moved, dst_dir.join("feed.txt"));
        assert!(moved.to_string_lossy().ends_with(".txt"));
    }
}
