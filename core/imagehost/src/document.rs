use image::{DynamicImage, GenericImageView};
use pixels::ChannelLayout;

#[derive(Debug, Clone)]
pub struct Layer {
    pub name: String,
    pub image: DynamicImage,
}

impl Layer {
    /// A blank 8-bit layer, black and (for RGBA) fully transparent.
    pub fn blank(name: &str, width: u32, height: u32, layout: ChannelLayout) -> Self {
        let image = match layout {
            ChannelLayout::Rgb => DynamicImage::new_rgb8(width, height),
            ChannelLayout::Rgba => DynamicImage::new_rgba8(width, height),
        };
        Self {
            name: name.to_string(),
            image,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    width: u32,
    height: u32,
    layers: Vec<Layer>,
}

impl Document {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            layers: Vec::new(),
        }
    }

    pub fn from_layer(layer: Layer) -> Self {
        let (width, height) = layer.image.dimensions();
        Self {
            width,
            height,
            layers: vec![layer],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Inserts at `position` (0 is the top of the stack).
    pub fn insert_layer(&mut self, layer: Layer, position: usize) -> bool {
        if position > self.layers.len() || self.width == 0 || self.height == 0 {
            return false;
        }
        self.layers.insert(position, layer);
        true
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    pub fn top_layer(&self) -> Option<&Layer> {
        self.layers.first()
    }
}
