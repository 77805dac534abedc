//! Archive extractor for sources artifacts: jar/zip and (gzip-compressed) tar

use crate::interfaces::{ArchiveError, ArchiveExtractor};
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct SourcesArchiveExtractor;

impl SourcesArchiveExtractor {
    pub fn new() -> Self {
        Self
    }

    fn unpack_tar<R: Read>(reader: R, destination: &Path) -> Result<(), ArchiveError> {
        let mut archive = tar::Archive::new(reader);
        archive.set_overwrite(true);
        archive.unpack(destination)?;
        Ok(())
    }

    fn unpack_zip(archive: &Path, destination: &Path) -> Result<(), ArchiveError> {
        let mut archive = zip::ZipArchive::new(File::open(archive)?).map_err(zip_error)?;

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index).map_err(zip_error)?;
            let Some(relative) = entry.enclosed_name() else {
                warn!("Skipping archive entry with unsafe path {:?}", entry.name());
                continue;
            };
            let target = destination.join(relative);

            if entry.is_dir() {
                fs::create_dir_all(&target)?;
                continue;
            }
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            // truncates what a previous run left behind
            let mut output = File::create(&target)?;
            io::copy(&mut entry, &mut output)?;
        }

        Ok(())
    }
}

fn zip_error(err: zip::result::ZipError) -> ArchiveError {
    ArchiveError::Io(io::Error::other(err))
}

impl ArchiveExtractor for SourcesArchiveExtractor {
    fn extract(&self, archive: &Path, destination: &Path) -> Result<(), ArchiveError> {
        let file_name = archive
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        debug!("Extracting {:?} into {:?}", archive, destination);

        if file_name.ends_with(".jar") || file_name.ends_with(".zip") {
            Self::unpack_zip(archive, destination)
        } else if file_name.ends_with(".tar.gz") || file_name.ends_with(".tgz") {
            let file = File::open(archive)?;
            Self::unpack_tar(GzDecoder::new(file), destination)
        } else if file_name.ends_with(".tar") {
            let file = File::open(archive)?;
            Self::unpack_tar(file, destination)
        } else {
            Err(ArchiveError::UnsupportedArchiveType {
                path: archive.to_path_buf(),
            })
        }
    }
}
