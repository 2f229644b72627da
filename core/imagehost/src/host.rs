use crate::document::{Document, Layer};
use crate::error::{HostError, Result};
use crate::source::LayerSource;
use image::{DynamicImage, RgbImage, RgbaImage};
use paa_bridge::{HostWriteError, PixelSink};
use pixels::{ChannelLayout, PixelBuffer};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(usize);

impl ImageId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Open documents, addressed by [`ImageId`]. Deleted slots are never reused.
#[derive(Debug, Default)]
pub struct ImageHost {
    documents: Vec<Option<Document>>,
}

impl ImageHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, document: Document) -> ImageId {
        self.documents.push(Some(document));
        ImageId(self.documents.len() - 1)
    }

    pub fn document(&self, id: ImageId) -> Option<&Document> {
        self.documents.get(id.0).and_then(Option::as_ref)
    }

    pub fn delete(&mut self, id: ImageId) -> Option<Document> {
        self.documents.get_mut(id.0).and_then(Option::take)
    }

    /// Number of documents still open.
    pub fn len(&self) -> usize {
        self.documents.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Loads any format `image` understands as a single-layer document.
    pub fn open(&mut self, path: &Path) -> Result<ImageId> {
        let image = image::open(path)?;
        let layer = Layer {
            name: path.to_string_lossy().into_owned(),
            image,
        };
        let id = self.insert(Document::from_layer(layer));
        log::debug!("Opened {:?} as image {}", path, id.0);
        Ok(id)
    }

    /// Saves the top layer; the format follows the file extension.
    pub fn save(&self, id: ImageId, path: &Path) -> Result<()> {
        let layer = self.top_layer(id)?;
        layer.image.save(path)?;
        Ok(())
    }

    /// The drawable an export reads from: the top layer of `id`.
    pub fn export_source(&self, id: ImageId) -> Result<LayerSource<'_>> {
        Ok(LayerSource::new(self.top_layer(id)?))
    }

    fn top_layer(&self, id: ImageId) -> Result<&Layer> {
        self.document(id)
            .ok_or(HostError::UnknownImage(id.0))?
            .top_layer()
            .ok_or(HostError::NoLayers(id.0))
    }
}

fn to_dynamic(pixels: PixelBuffer) -> Option<DynamicImage> {
    let (width, height) = (pixels.width(), pixels.height());
    match pixels.layout() {
        ChannelLayout::Rgb => {
            RgbImage::from_raw(width, height, pixels.into_bytes()).map(DynamicImage::ImageRgb8)
        }
        ChannelLayout::Rgba => {
            RgbaImage::from_raw(width, height, pixels.into_bytes()).map(DynamicImage::ImageRgba8)
        }
    }
}

impl PixelSink for ImageHost {
    type Handle = ImageId;

    fn create(
        &mut self,
        name: &str,
        width: u32,
        height: u32,
        layout: ChannelLayout,
    ) -> std::result::Result<ImageId, HostWriteError> {
        let mut document = Document::new(width, height);
        if !document.insert_layer(Layer::blank(name, width, height, layout), 0) {
            return Err(HostWriteError::new("Error creating layer"));
        }
        let id = self.insert(document);
        log::debug!("Created {}x{} {:?} image {} for {}", width, height, layout, id.0, name);
        Ok(id)
    }

    fn write(
        &mut self,
        handle: &ImageId,
        pixels: PixelBuffer,
    ) -> std::result::Result<(), HostWriteError> {
        let document = self
            .documents
            .get_mut(handle.0)
            .and_then(Option::as_mut)
            .ok_or_else(|| HostWriteError::new(format!("Unknown image: {}", handle.0)))?;
        let layer = document
            .layers_mut()
            .first_mut()
            .ok_or_else(|| HostWriteError::new("Image has no layer to write to"))?;

        if layer.has_alpha() != pixels.layout().has_alpha()
            || (layer.width(), layer.height()) != (pixels.width(), pixels.height())
        {
            return Err(HostWriteError::new(format!(
                "Buffer {}x{} {:?} does not fit layer {}x{}",
                pixels.width(),
                pixels.height(),
                pixels.layout(),
                layer.width(),
                layer.height()
            )));
        }

        layer.image = to_dynamic(pixels)
            .ok_or_else(|| HostWriteError::new("Buffer size does not match layer size"))?;
        Ok(())
    }

    fn discard(&mut self, handle: ImageId) {
        if self.delete(handle).is_some() {
            log::debug!("Discarded image {}", handle.0);
        }
    }
}
