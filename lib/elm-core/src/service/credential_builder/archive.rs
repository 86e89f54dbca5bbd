use std::collections::BTreeMap;
use std::io::{self, Cursor, Read, Seek, Write};

use zip::write::SimpleFileOptions;

use crate::service::error::ServiceError;

fn add_to_zip<T: Write + Seek>(
    name: &str,
    content: &mut impl Read,
    archive: &mut zip::ZipWriter<T>,
) -> Result<(), ServiceError> {
    archive
        .start_file(name, SimpleFileOptions::default())
        .map_err(|err| ServiceError::Other(format!("Failed to create {name} in zip: {err}")))?;

    io::copy(content, archive)
        .map_err(|err| ServiceError::Other(format!("Failed to write {name} to zip: {err}")))?;

    Ok(())
}

/// One entry per file, written in key order
pub(super) fn create_zip<T: Write + Seek>(
    files: &BTreeMap<String, String>,
    zip_file: T,
) -> Result<T, ServiceError> {
    let mut archive = zip::ZipWriter::new(zip_file);

    for (name, content) in files {
        add_to_zip(name, &mut Cursor::new(content.as_bytes()), &mut archive)?;
    }

    archive
        .finish()
        .map_err(|err| ServiceError::Other(format!("Failed to finish zipping: {err}")))
}
