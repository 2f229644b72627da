use crate::codec::{Codec, InitializedCodec};
use crate::error::{BridgeError, Result, Stage};
use crate::host::PixelSink;
use pixels::{ChannelLayout, PixelBuffer};
use std::path::Path;

/// Full-resolution image pulled out of a PAA file, ready for the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedImage {
    pub width: u32,
    pub height: u32,
    pub has_alpha: bool,
    /// RGBA when `has_alpha`, RGB otherwise.
    pub pixels: PixelBuffer,
}

impl ImportedImage {
    pub fn layout(&self) -> ChannelLayout {
        self.pixels.layout()
    }
}

pub struct ImportBridge<'c, C> {
    codec: &'c InitializedCodec<C>,
}

impl<'c, C: Codec> ImportBridge<'c, C> {
    pub fn new(codec: &'c InitializedCodec<C>) -> Self {
        Self { codec }
    }

    /// Decodes `path` and keeps only the base level.
    ///
    /// Alpha is dropped when the file declares no transparency, so the editor
    /// gets an RGB image; otherwise the RGBA bytes pass through untouched.
    pub fn decode(&self, path: &Path) -> Result<ImportedImage> {
        log::debug!("Decoding PAA {:?}", path);
        let chain = self.codec.decode(path).map_err(BridgeError::Import)?;

        let has_alpha = chain.has_transparency();
        let levels = chain.len();
        let base = chain
            .into_base()
            .map_err(BridgeError::chain(Stage::Codec))?;
        let (width, height) = (base.width(), base.height());
        log::debug!(
            "Decoded {}x{} base level ({} levels, transparency: {})",
            width,
            height,
            levels,
            has_alpha
        );

        let pixels = pixels::to_layout(base.into_data(), ChannelLayout::from_has_alpha(has_alpha))
            .map_err(BridgeError::pixels(Stage::Normalize))?;

        Ok(ImportedImage {
            width,
            height,
            has_alpha,
            pixels,
        })
    }

    /// Decodes `path` and materialises it in the editor.
    ///
    /// If the host fails after the image was created, the image is discarded
    /// before the error is returned, so a failed import leaves nothing behind.
    pub fn import<S: PixelSink>(&self, path: &Path, sink: &mut S) -> Result<S::Handle> {
        let image = self.decode(path)?;
        let name = path.to_string_lossy();

        let handle = sink
            .create(&name, image.width, image.height, image.layout())
            .map_err(BridgeError::HostWrite)?;

        if let Err(err) = sink.write(&handle, image.pixels) {
            log::warn!("Discarding partially imported image {:?}: {}", path, err);
            sink.discard(handle);
            return Err(BridgeError::HostWrite(err));
        }

        log::info!(
            "Imported {:?} ({}x{}, alpha: {})",
            path,
            image.width,
            image.height,
            image.has_alpha
        );
        Ok(handle)
    }
}
