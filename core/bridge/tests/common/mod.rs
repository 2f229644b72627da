#![allow(dead_code)]

use byteorder::{LE, ReadBytesExt, WriteBytesExt};
use mipmap::{MipmapChain, MipmapLevel};
use paa_bridge::{Codec, CodecError, HostWriteError, PixelSink, PixelSource};
use pixels::{ChannelLayout, PixelBuffer};
use std::cell::{Cell, RefCell};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn solid_chain(width: u32, height: u32, pixel: [u8; 4], has_transparency: bool) -> MipmapChain {
    let data = pixel.repeat((width * height) as usize);
    let level = MipmapLevel::from_rgba(width, height, data).unwrap();
    MipmapChain::new(vec![level], has_transparency)
}

/// Codec double that counts every call and returns canned results.
#[derive(Default)]
pub struct SpyCodec {
    pub decoded: Option<MipmapChain>,
    pub encode_failure: Option<String>,
    pub init_calls: Cell<usize>,
    pub decode_calls: Cell<usize>,
    pub mipmap_calls: Cell<usize>,
    pub encode_calls: Cell<usize>,
    pub encoded: RefCell<Vec<(PathBuf, MipmapChain)>>,
}

impl SpyCodec {
    pub fn decoding(chain: MipmapChain) -> Self {
        Self {
            decoded: Some(chain),
            ..Default::default()
        }
    }

    pub fn failing_encode(message: &str) -> Self {
        Self {
            encode_failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    /// Pipeline calls, excluding `initialize`.
    pub fn invocations(&self) -> usize {
        self.decode_calls.get() + self.mipmap_calls.get() + self.encode_calls.get()
    }
}

impl Codec for SpyCodec {
    fn initialize(&self) -> Result<(), CodecError> {
        self.init_calls.set(self.init_calls.get() + 1);
        Ok(())
    }

    fn decode(&self, _path: &Path) -> Result<MipmapChain, CodecError> {
        self.decode_calls.set(self.decode_calls.get() + 1);
        self.decoded
            .clone()
            .ok_or_else(|| CodecError::new("Unknown PAA type: [00, 00]"))
    }

    fn calculate_mipmaps_and_tags(&self, chain: MipmapChain) -> Result<MipmapChain, CodecError> {
        self.mipmap_calls.set(self.mipmap_calls.get() + 1);
        Ok(chain)
    }

    fn encode(&self, path: &Path, chain: &MipmapChain) -> Result<(), CodecError> {
        self.encode_calls.set(self.encode_calls.get() + 1);
        if let Some(message) = &self.encode_failure {
            let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, message.clone());
            return Err(CodecError::from(io));
        }
        self.encoded
            .borrow_mut()
            .push((path.to_path_buf(), chain.clone()));
        Ok(())
    }
}

/// Stores chains in a trivial little-endian container and builds smaller
/// levels with a 2x2 box filter.
pub struct FileCodec;

const FILE_MAGIC: u32 = 0x4D50_4954;

fn downsample(level: &MipmapLevel) -> MipmapLevel {
    let (w, h) = (level.width(), level.height());
    let (nw, nh) = ((w / 2).max(1), (h / 2).max(1));
    let src = level.data().as_bytes();
    let mut out = Vec::with_capacity((nw * nh * 4) as usize);
    for y in 0..nh {
        for x in 0..nw {
            for c in 0..4 {
                let mut sum = 0u32;
                let mut count = 0u32;
                for (sx, sy) in [(2 * x, 2 * y), (2 * x + 1, 2 * y), (2 * x, 2 * y + 1), (2 * x + 1, 2 * y + 1)] {
                    if sx < w && sy < h {
                        sum += src[((sy * w + sx) * 4 + c) as usize] as u32;
                        count += 1;
                    }
                }
                out.push((sum / count) as u8);
            }
        }
    }
    MipmapLevel::from_rgba(nw, nh, out).unwrap()
}

impl Codec for FileCodec {
    fn decode(&self, path: &Path) -> Result<MipmapChain, CodecError> {
        let mut reader = BufReader::new(File::open(path)?);
        if reader.read_u32::<LE>()? != FILE_MAGIC {
            return Err(CodecError::new("Invalid magic"));
        }
        let has_transparency = reader.read_u8()? != 0;
        let count = reader.read_u32::<LE>()?;
        let mut levels = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let width = reader.read_u32::<LE>()?;
            let height = reader.read_u32::<LE>()?;
            let len = reader.read_u32::<LE>()?;
            let mut data = vec![0u8; len as usize];
            reader.read_exact(&mut data)?;
            let level = MipmapLevel::from_rgba(width, height, data)
                .map_err(|e| CodecError::with_source("Malformed mipmap", e))?;
            levels.push(level);
        }
        Ok(MipmapChain::new(levels, has_transparency))
    }

    fn calculate_mipmaps_and_tags(&self, mut chain: MipmapChain) -> Result<MipmapChain, CodecError> {
        let mut last = chain
            .levels()
            .last()
            .cloned()
            .ok_or_else(|| CodecError::new("No base level"))?;
        while last.width() > 1 || last.height() > 1 {
            last = downsample(&last);
            chain.push(last.clone());
        }
        Ok(chain)
    }

    fn encode(&self, path: &Path, chain: &MipmapChain) -> Result<(), CodecError> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_u32::<LE>(FILE_MAGIC)?;
        writer.write_u8(chain.has_transparency() as u8)?;
        writer.write_u32::<LE>(chain.len() as u32)?;
        for level in chain.levels() {
            writer.write_u32::<LE>(level.width())?;
            writer.write_u32::<LE>(level.height())?;
            writer.write_u32::<LE>(level.data_length() as u32)?;
            writer.write_all(level.data().as_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Drawable double that records how often its pixels were read.
pub struct SpySource {
    pub width: u32,
    pub height: u32,
    pub channels: u32,
    pub data: Vec<u8>,
    pub reads: usize,
}

impl SpySource {
    pub fn solid(width: u32, height: u32, pixel: &[u8]) -> Self {
        Self {
            width,
            height,
            channels: pixel.len() as u32,
            data: pixel.repeat((width * height) as usize),
            reads: 0,
        }
    }
}

impl PixelSource for SpySource {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn channel_count(&self) -> u32 {
        self.channels
    }

    fn read(&mut self, _width: u32, _height: u32, _layout: ChannelLayout) -> Vec<u8> {
        self.reads += 1;
        self.data.clone()
    }
}

#[derive(Debug)]
pub struct HostImage {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub layout: ChannelLayout,
    pub pixels: Option<PixelBuffer>,
}

/// Host double keeping images in a slot vector; `None` marks a discarded image.
#[derive(Default)]
pub struct RecordingSink {
    pub images: Vec<Option<HostImage>>,
    pub fail_create: bool,
    pub fail_write: bool,
    pub discarded: Vec<usize>,
}

impl RecordingSink {
    pub fn live_images(&self) -> usize {
        self.images.iter().flatten().count()
    }
}

impl PixelSink for RecordingSink {
    type Handle = usize;

    fn create(
        &mut self,
        name: &str,
        width: u32,
        height: u32,
        layout: ChannelLayout,
    ) -> Result<usize, HostWriteError> {
        if self.fail_create {
            return Err(HostWriteError::new("Could not create image"));
        }
        self.images.push(Some(HostImage {
            name: name.to_string(),
            width,
            height,
            layout,
            pixels: None,
        }));
        Ok(self.images.len() - 1)
    }

    fn write(&mut self, handle: &usize, pixels: PixelBuffer) -> Result<(), HostWriteError> {
        if self.fail_write {
            return Err(HostWriteError::new("Error creating layer"));
        }
        let image = self.images[*handle]
            .as_mut()
            .ok_or_else(|| HostWriteError::new("Image was discarded"))?;
        image.pixels = Some(pixels);
        Ok(())
    }

    fn discard(&mut self, handle: usize) {
        self.images[handle] = None;
        self.discarded.push(handle);
    }
}
