use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn create_image_fixture(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    File::create(&path).unwrap().write_all(data).unwrap();
    path
}

/// Two recognized images (lower- and upper-case extension) plus two files
/// the scanner must ignore.
pub fn create_mixed_directory(dir: &Path) {
    create_image_fixture(dir, "photo.png", b"png bytes");
    create_image_fixture(dir, "PHOTO2.PNG", b"more png bytes");
    create_image_fixture(dir, "anim.gif", b"gif bytes");
    create_image_fixture(dir, "notes.txt", b"not an image");
}

/// Marks `file`'s current content as already compressed in the ledger at
/// `ledger_path`.
pub fn record_in_ledger(ledger_path: &Path, file: &Path) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    runtime.block_on(async {
        img_shrink::Ledger::new(ledger_path)
            .record(file)
            .await
            .unwrap();
    });
}
