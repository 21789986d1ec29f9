use img_shrink::ledger::{hash_file, Ledger};
use img_shrink::scan::is_image_file;
use proptest::prelude::*;
use std::fs;
use std::future::Future;
use std::path::Path;
use tempfile::TempDir;

fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #[test]
    fn recorded_bytes_are_always_recognized(
        data in proptest::collection::vec(any::<u8>(), 0..512)
    ) {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("img.png");
        fs::write(&file, &data).unwrap();

        let ledger = Ledger::new(temp.path().join(".tinify.db"));
        let recognized = block_on(async {
            ledger.record(&file).await.unwrap();
            ledger.contains(&file).await.unwrap()
        });

        prop_assert!(recognized);
    }

    #[test]
    fn changing_any_byte_invalidates_the_record(
        data in proptest::collection::vec(any::<u8>(), 1..256),
        flip in any::<prop::sample::Index>()
    ) {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("img.png");
        fs::write(&file, &data).unwrap();

        let ledger = Ledger::new(temp.path().join(".tinify.db"));
        let mut mutated = data.clone();
        mutated[flip.index(data.len())] ^= 0xff;

        let recognized = block_on(async {
            ledger.record(&file).await.unwrap();
            fs::write(&file, &mutated).unwrap();
            ledger.contains(&file).await.unwrap()
        });

        prop_assert!(!recognized);
    }

    #[test]
    fn digest_depends_only_on_content(
        data in proptest::collection::vec(any::<u8>(), 0..512)
    ) {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("a.png");
        let second = temp.path().join("nested");
        fs::create_dir(&second).unwrap();
        let second = second.join("b.webp");
        fs::write(&first, &data).unwrap();
        fs::write(&second, &data).unwrap();

        let (left, right) = block_on(async {
            (hash_file(&first).await.unwrap(), hash_file(&second).await.unwrap())
        });

        prop_assert_eq!(left, right);
    }

    #[test]
    fn is_image_file_recognizes_extensions(
        extension in prop::sample::select(&["png", "jpg", "jpeg", "webp", "avif", "gif", "bmp", "txt", "pdf"])
    ) {
        let filename = format!("test.{}", extension);
        let expected = matches!(extension, "png" | "jpg" | "jpeg" | "webp" | "avif");

        prop_assert_eq!(is_image_file(Path::new(&filename)), expected);
    }
}
