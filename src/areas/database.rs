use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::io::Read;
use std::path::Path;

/// Read-only loose object store.
///
/// Objects live at `<objects-root>/<first-2-chars>/<remaining-chars>` as
/// zlib-compressed text blobs.
#[derive(Debug, new)]
pub struct Database {
    /// Path to the objects directory (typically `.git/objects`)
    path: Box<Path>,
}

impl Database {
    /// Load and decode the object named by `object_id`.
    ///
    /// Returns `Ok(None)` when no object file exists at the derived
    /// location, so callers decide whether a missing object is fatal.
    /// NUL separator bytes between header and body are stripped, leaving
    /// a single text stream for line-based parsing.
    pub fn try_load_text(&self, object_id: &ObjectId) -> anyhow::Result<Option<String>> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            return Ok(None);
        }

        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        let object_content = Self::decompress(object_content.into())?;
        let object_content = String::from_utf8(object_content.to_vec()).context(format!(
            "Object {} does not decode as text",
            object_id.as_ref()
        ))?;

        Ok(Some(object_content.replace('\0', "")))
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }
}
