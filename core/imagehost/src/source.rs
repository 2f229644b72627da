use crate::document::Layer;
use image::DynamicImage;
use paa_bridge::PixelSource;
use pixels::ChannelLayout;

/// Reads a layer as 8-bit RGB or RGBA, converting from whatever the layer
/// stores (grayscale, 16-bit, float).
pub struct LayerSource<'a> {
    layer: &'a Layer,
}

impl<'a> LayerSource<'a> {
    pub fn new(layer: &'a Layer) -> Self {
        Self { layer }
    }
}

impl PixelSource for LayerSource<'_> {
    fn width(&self) -> u32 {
        self.layer.width()
    }

    fn height(&self) -> u32 {
        self.layer.height()
    }

    fn channel_count(&self) -> u32 {
        if self.layer.has_alpha() { 4 } else { 3 }
    }

    fn read(&mut self, width: u32, height: u32, layout: ChannelLayout) -> Vec<u8> {
        let image = &self.layer.image;
        let region: DynamicImage;
        let image = if (width, height) == (image.width(), image.height()) {
            image
        } else {
            region = image.crop_imm(0, 0, width, height);
            &region
        };
        match layout {
            ChannelLayout::Rgb => image.to_rgb8().into_raw(),
            ChannelLayout::Rgba => image.to_rgba8().into_raw(),
        }
    }
}
