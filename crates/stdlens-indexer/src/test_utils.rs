//! Test utilities for stdlens-indexer

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// One entry of a fixture jar. `contents: None` makes a directory entry.
pub struct JarEntry<'a> {
    pub path: &'a str,
    pub contents: Option<&'a [u8]>,
}

impl<'a> JarEntry<'a> {
    pub fn file(path: &'a str, contents: &'a [u8]) -> Self {
        JarEntry {
            path,
            contents: Some(contents),
        }
    }

    pub fn dir(path: &'a str) -> Self {
        JarEntry {
            path,
            contents: None,
        }
    }
}

/// Write a jar named `file_name` under `dir` and return its path.
pub fn write_jar(dir: &Path, file_name: &str, entries: &[JarEntry<'_>]) -> PathBuf {
    let path = dir.join(file_name);
    let file = File::create(&path).unwrap();
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        match entry.contents {
            Some(bytes) => {
                writer.start_file(entry.path, options).unwrap();
                writer.write_all(bytes).unwrap();
            }
            None => {
                writer.add_directory(entry.path, options).unwrap();
            }
        }
    }

    writer.finish().unwrap();
    path
}

/// A small stand-in for the Kotlin stdlib: compiled classes plus one source.
pub fn write_sample_stdlib(dir: &Path) -> PathBuf {
    write_jar(
        dir,
        "kotlin-stdlib-1.8.22.jar",
        &[
            JarEntry::dir("META-INF/"),
            JarEntry::file("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0\n"),
            JarEntry::dir("kotlin/"),
            JarEntry::file("kotlin/Pair.class", b"\xCA\xFE\xBA\xBE"),
            JarEntry::file("kotlin/Triple.class", b"\xCA\xFE\xBA\xBE"),
            JarEntry::dir("kotlin/collections/"),
            JarEntry::file("kotlin/collections/List.class", b"\xCA\xFE\xBA\xBE"),
            JarEntry::file("kotlin/collections/Map.class", b"\xCA\xFE\xBA\xBE"),
            JarEntry::file("kotlin/collections/CollectionsKt.class", b"\xCA\xFE\xBA\xBE"),
            JarEntry::file("kotlin/collections/CollectionsKt__CollectionsKt.class", b"\xCA\xFE\xBA\xBE"),
            JarEntry::file("kotlin/collections/Map$Entry.class", b"\xCA\xFE\xBA\xBE"),
            JarEntry::dir("kotlin/text/"),
            JarEntry::file("kotlin/text/Regex.class", b"\xCA\xFE\xBA\xBE"),
        ],
    )
}

/// The matching sources jar: `.kt` files for some of the classes above.
pub fn write_sample_sources(dir: &Path) -> PathBuf {
    write_jar(
        dir,
        "kotlin-stdlib-1.8.22-sources.jar",
        &[
            JarEntry::dir("kotlin/"),
            JarEntry::file(
                "kotlin/Tuples.kt",
                b"package kotlin\n\npublic data class Pair<out A, out B>(val first: A, val second: B)\n",
            ),
            JarEntry::file(
                "kotlin/collections/Collections.kt",
                b"package kotlin.collections\n\npublic fun <T> listOf(): List<T> = emptyList()\n",
            ),
            JarEntry::file(
                "kotlin/text/Regex.kt",
                b"package kotlin.text\n\npublic expect class Regex\n",
            ),
        ],
    )
}

/// Overwrite the declared uncompressed size of every entry in a jar, in both
/// the local headers and the central directory. The data is left alone.
pub fn patch_uncompressed_size(path: &Path, size: u32) {
    let mut bytes = std::fs::read(path).unwrap();
    let size = size.to_le_bytes();
    // (signature, offset of the uncompressed-size field)
    for (signature, offset) in [(b"PK\x03\x04", 22), (b"PK\x01\x02", 24)] {
        let starts: Vec<usize> = bytes
            .windows(4)
            .enumerate()
            .filter(|(_, w)| *w == signature)
            .map(|(i, _)| i)
            .collect();
        for start in starts {
            bytes[start + offset..start + offset + 4].copy_from_slice(&size);
        }
    }
    std::fs::write(path, bytes).unwrap();
}
