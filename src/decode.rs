//! Image decoding seam.
//!
//! Path resolution and decoding are kept apart: themes compute paths, and
//! an [`ImageDecoder`] turns a path into a bitmap. The bundled
//! [`FileImageDecoder`] uses the `image` crate.

use std::path::Path;

use crate::error::DecodeError;

/// Loads decoded images from disk.
pub trait ImageDecoder {
    /// Decoded image type.
    type Image;

    /// Decodes the image at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ImageDecodeFailed`] if the file is missing or
    /// cannot be decoded.
    fn decode(&self, path: &Path) -> Result<Self::Image, DecodeError>;
}

/// Decoder backed by [`image::open`].
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageDecoder;

#[cfg(feature = "image")]
impl ImageDecoder for FileImageDecoder {
    type Image = image::DynamicImage;

    fn decode(&self, path: &Path) -> Result<Self::Image, DecodeError> {
        image::open(path).map_err(|err| DecodeError::ImageDecodeFailed {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}
