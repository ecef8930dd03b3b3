//! Temp-file-and-rename writes inside a capability directory.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replace `path` inside `dir` with `contents` so readers see either the old
/// document or the new one, never a partial write.
///
/// `path` must be a single file name relative to `dir`.
pub(super) fn write_atomic(dir: &Dir, path: &Utf8Path, contents: &str) -> io::Result<()> {
    let mut components = path.components();
    let (Some(Utf8Component::Normal(file_name)), None) = (components.next(), components.next())
    else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{path}' is not a plain file name"),
        ));
    };

    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let tmp_name = format!(".{file_name}.{}.{counter}.tmp", std::process::id());

    if let Err(err) = write_temp(dir, &tmp_name, contents) {
        discard(dir, &tmp_name);
        return Err(err);
    }
    if let Err(err) = replace(dir, &tmp_name, file_name) {
        discard(dir, &tmp_name);
        return Err(err);
    }

    // Directory sync is best effort; the rename already happened.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
    Ok(())
}

fn write_temp(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn replace(dir: &Dir, tmp_name: &str, file_name: &str) -> io::Result<()> {
    match dir.remove_file(file_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, file_name)
}

#[cfg(not(windows))]
fn replace(dir: &Dir, tmp_name: &str, file_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, file_name)
}

fn discard(dir: &Dir, tmp_name: &str) {
    drop(dir.remove_file(tmp_name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use cap_std::ambient_authority;
    use rstest::rstest;

    fn temp_dir() -> (tempfile::TempDir, Dir) {
        let temp = tempfile::tempdir().expect("create temp dir");
        let dir = Dir::open_ambient_dir(temp.path(), ambient_authority()).expect("open temp dir");
        (temp, dir)
    }

    #[rstest]
    fn replaces_existing_contents() {
        let (_temp, dir) = temp_dir();
        let path = Utf8Path::new("store.json");

        write_atomic(&dir, path, "first").expect("first write");
        write_atomic(&dir, path, "second").expect("second write");

        assert_eq!(dir.read_to_string(path).expect("read back"), "second");
    }

    #[rstest]
    fn leaves_no_temp_files_behind() {
        let (_temp, dir) = temp_dir();
        write_atomic(&dir, Utf8Path::new("store.json"), "{}").expect("write");

        let names: Vec<String> = dir
            .entries()
            .expect("list dir")
            .map(|entry| {
                entry
                    .expect("entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(names, vec!["store.json".to_owned()]);
    }

    #[rstest]
    #[case("nested/store.json")]
    #[case("../store.json")]
    #[case("")]
    fn rejects_paths_that_are_not_plain_names(#[case] path: &str) {
        let (_temp, dir) = temp_dir();
        let err = write_atomic(&dir, Utf8Path::new(path), "{}").expect_err("rejected");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
