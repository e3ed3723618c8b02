use image::{ImageFormat, RgbImage};
use laporan_core::{
    parse, resolve_zip_path, ArchiveEntry, BindError, DisplaySize, DocumentationBinder,
    MemoryArchive, WorkGroup, ZipArchiveSource,
};
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    RgbImage::new(width, height)
        .write_to(&mut bytes, ImageFormat::Png)
        .unwrap();
    bytes.into_inner()
}

fn write_zip(path: &Path, entries: &[(&str, Vec<u8>)]) {
    let file = std::fs::File::create(path).unwrap();
    let mut writer = ZipWriter::new(file);
    for (name, bytes) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(bytes).unwrap();
    }
    writer.finish().unwrap();
}

#[test]
fn bind_classifies_images_and_skips_other_files() {
    let root = tempfile::tempdir().unwrap();
    let binder = DocumentationBinder::prepare(root.path().join("extracted")).unwrap();
    let mut archive = MemoryArchive::new(vec![
        ArchiveEntry::new("wide.png", png_bytes(8, 4)),
        ArchiveEntry::new("notes.txt", b"bukan gambar".to_vec()),
        ArchiveEntry::new("tall.png", png_bytes(3, 6)),
    ]);

    let images = binder.bind("Sipil Jalan", &mut archive).unwrap();

    assert_eq!(images.len(), 2);
    assert_eq!(images[0].display, DisplaySize::Landscape);
    assert_eq!((images[0].width, images[0].height), (8, 4));
    assert_eq!(images[1].display, DisplaySize::Portrait);
    assert!(images[0].path.ends_with("wide.png"));
    assert!(images.iter().all(|image| image.path.exists()));
    assert!(images
        .iter()
        .all(|image| image.path.starts_with(binder.extraction_root())));
}

#[test]
fn groups_with_same_name_never_share_files() {
    let root = tempfile::tempdir().unwrap();
    let binder = DocumentationBinder::prepare(root.path().join("extracted")).unwrap();
    let mut first = WorkGroup::new("Sipil", vec!["Galian.".to_string()]);
    let mut second = WorkGroup::new("Sipil", vec!["Urugan.".to_string()]);

    let attached_first = binder
        .bind_group(
            &mut first,
            &mut MemoryArchive::new(vec![ArchiveEntry::new("foto.png", png_bytes(4, 4))]),
        )
        .unwrap();
    let attached_second = binder
        .bind_group(
            &mut second,
            &mut MemoryArchive::new(vec![ArchiveEntry::new("foto.png", png_bytes(6, 2))]),
        )
        .unwrap();

    assert_eq!((attached_first, attached_second), (1, 1));
    assert_ne!(first.documentation[0].path, second.documentation[0].path);
    assert_eq!(first.documentation[0].display, DisplaySize::Portrait);
    assert_eq!(second.documentation[0].display, DisplaySize::Landscape);
    assert_eq!(first.tasks, vec!["Galian.".to_string()]);
}

#[test]
fn zip_archives_bind_to_parsed_groups() {
    let dir = tempfile::tempdir().unwrap();
    let zip_path = dir.path().join("sipil.zip");
    write_zip(
        &zip_path,
        &[
            ("lapangan/pagi.png", png_bytes(10, 5)),
            ("readme.md", b"# foto".to_vec()),
        ],
    );

    let mut groups = parse(
        "1. Group Sipil Jalan = Adapun pekerjaan yang dikerjakan adalah = (A). Pengecoran jalan",
    );
    let binder = DocumentationBinder::prepare(dir.path().join("extracted")).unwrap();
    let mut source = ZipArchiveSource::open(&zip_path).unwrap();

    let attached = binder.bind_group(&mut groups[0], &mut source).unwrap();

    assert_eq!(attached, 1);
    assert_eq!(groups[0].documentation[0].display, DisplaySize::Landscape);
    assert!(groups[0].documentation[0].path.ends_with("lapangan/pagi.png"));
    assert_eq!(groups[0].tasks, vec!["Pengecoran jalan.".to_string()]);
}

#[test]
fn prepare_clears_stale_extractions() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("extracted");
    std::fs::create_dir_all(root.join("old")).unwrap();
    std::fs::write(root.join("old").join("stale.png"), b"x").unwrap();

    let binder = DocumentationBinder::prepare(&root).unwrap();

    assert!(binder.extraction_root().exists());
    assert_eq!(std::fs::read_dir(&root).unwrap().count(), 0);
}

#[test]
fn missing_and_corrupt_archives_are_errors() {
    let dir = tempfile::tempdir().unwrap();

    let missing = ZipArchiveSource::open(dir.path().join(resolve_zip_path("tidak-ada")));
    assert!(matches!(missing, Err(BindError::MissingArchive(_))));

    let corrupt_path = dir.path().join("rusak.zip");
    std::fs::write(&corrupt_path, [b'x'; 128]).unwrap();
    let corrupt = ZipArchiveSource::open(&corrupt_path);
    assert!(matches!(
        corrupt,
        Err(BindError::Archive(_)) | Err(BindError::Io(_))
    ));
}

#[test]
fn unreadable_zip_entries_are_skipped_not_fatal() {
    let payload = b"RUSAK-RUSAK-RUSAK-RUSAK".to_vec();
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer.start_file("good.png", stored).unwrap();
    writer.write_all(&png_bytes(8, 4)).unwrap();
    writer.start_file("bad.bin", stored).unwrap();
    writer.write_all(&payload).unwrap();
    let mut bytes = writer.finish().unwrap().into_inner();

    // Flip one stored byte so the entry fails its checksum on read.
    let offset = bytes
        .windows(payload.len())
        .position(|window| window == payload.as_slice())
        .unwrap();
    bytes[offset] ^= 0xFF;

    let dir = tempfile::tempdir().unwrap();
    let zip_path = dir.path().join("campur.zip");
    std::fs::write(&zip_path, &bytes).unwrap();
    let binder = DocumentationBinder::prepare(dir.path().join("extracted")).unwrap();
    let mut source = ZipArchiveSource::open(&zip_path).unwrap();

    let images = binder.bind("Sipil", &mut source).unwrap();

    assert_eq!(images.len(), 1);
    assert_eq!(images[0].display, DisplaySize::Landscape);
    assert_eq!((images[0].width, images[0].height), (8, 4));
    assert!(images[0].path.ends_with("good.png"));
}
