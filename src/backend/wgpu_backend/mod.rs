//! wgpu backend payloads
//!
//! Uses the plain descriptor types wgpu re-exports from wgpu-types. No adapter
//! or device is needed.

mod caps;
mod texture;

pub use caps::WgpuCaps;
pub use texture::WgpuTexture;

use super::sealed::{BackendSpec, Sealed, SpecSlot};
use super::{BackendApi, NativeTextureInfo, TextureFormat, TextureUsage};
use crate::texture_info::TextureInfo;

/// wgpu payload stored inside a [`TextureInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WgpuTextureSpec {
    pub format: wgpu::TextureFormat,
    /// Format views are created with. Equal to `format` unless reinterpreted.
    pub view_format: wgpu::TextureFormat,
    pub usage: wgpu::TextureUsages,
    pub aspect: wgpu::TextureAspect,
    pub dimension: wgpu::TextureDimension,
}

/// Native texture info of the wgpu backend.
///
/// wgpu has no protected memory, so these descriptors are never protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WgpuTextureInfo {
    pub sample_count: u32,
    pub level_count: u32,
    pub format: wgpu::TextureFormat,
    pub view_format: wgpu::TextureFormat,
    pub usage: wgpu::TextureUsages,
    pub aspect: wgpu::TextureAspect,
    pub dimension: wgpu::TextureDimension,
}

impl WgpuTextureInfo {
    /// Single-sampled 2D info viewing all aspects in the storage format.
    pub fn new(format: wgpu::TextureFormat, usage: wgpu::TextureUsages) -> Self {
        Self {
            sample_count: 1,
            level_count: 0,
            format,
            view_format: format,
            usage,
            aspect: wgpu::TextureAspect::All,
            dimension: wgpu::TextureDimension::D2,
        }
    }

    pub fn with_sample_count(mut self, count: u32) -> Self {
        self.sample_count = count;
        self
    }

    pub fn with_level_count(mut self, count: u32) -> Self {
        self.level_count = count;
        self
    }

    pub fn with_view_format(mut self, view_format: wgpu::TextureFormat) -> Self {
        self.view_format = view_format;
        self
    }
}

impl Sealed for WgpuTextureInfo {}

impl SpecSlot for WgpuTextureSpec {
    fn into_backend_spec(self) -> BackendSpec {
        BackendSpec::Wgpu(self)
    }

    fn select(spec: &BackendSpec) -> Option<&Self> {
        match spec {
            BackendSpec::Wgpu(spec) => Some(spec),
            _ => None,
        }
    }
}

impl NativeTextureInfo for WgpuTextureInfo {
    type Spec = WgpuTextureSpec;

    const BACKEND: BackendApi = BackendApi::Wgpu;

    fn sample_count(&self) -> u32 {
        self.sample_count
    }

    fn level_count(&self) -> u32 {
        self.level_count
    }

    fn to_spec(&self) -> WgpuTextureSpec {
        WgpuTextureSpec {
            format: self.format,
            view_format: self.view_format,
            usage: self.usage,
            aspect: self.aspect,
            dimension: self.dimension,
        }
    }

    fn from_spec(spec: &WgpuTextureSpec, sample_count: u32, level_count: u32) -> Self {
        Self {
            sample_count,
            level_count,
            format: spec.format,
            view_format: spec.view_format,
            usage: spec.usage,
            aspect: spec.aspect,
            dimension: spec.dimension,
        }
    }
}

impl From<WgpuTextureInfo> for TextureInfo {
    fn from(info: WgpuTextureInfo) -> Self {
        TextureInfo::from_native(&info)
    }
}

impl TextureInfo {
    pub fn wgpu_texture_info(&self) -> Option<WgpuTextureInfo> {
        self.backend_texture_info()
    }
}

pub fn convert_texture_format(format: TextureFormat) -> wgpu::TextureFormat {
    match format {
        TextureFormat::R8Unorm => wgpu::TextureFormat::R8Unorm,
        TextureFormat::R8Snorm => wgpu::TextureFormat::R8Snorm,
        TextureFormat::R8Uint => wgpu::TextureFormat::R8Uint,
        TextureFormat::R8Sint => wgpu::TextureFormat::R8Sint,
        TextureFormat::R16Unorm => wgpu::TextureFormat::R16Unorm,
        TextureFormat::R16Float => wgpu::TextureFormat::R16Float,
        TextureFormat::Rg8Unorm => wgpu::TextureFormat::Rg8Unorm,
        TextureFormat::R32Float => wgpu::TextureFormat::R32Float,
        TextureFormat::R32Uint => wgpu::TextureFormat::R32Uint,
        TextureFormat::Rg16Float => wgpu::TextureFormat::Rg16Float,
        TextureFormat::Rgba8Unorm => wgpu::TextureFormat::Rgba8Unorm,
        TextureFormat::Rgba8UnormSrgb => wgpu::TextureFormat::Rgba8UnormSrgb,
        TextureFormat::Bgra8Unorm => wgpu::TextureFormat::Bgra8Unorm,
        TextureFormat::Bgra8UnormSrgb => wgpu::TextureFormat::Bgra8UnormSrgb,
        TextureFormat::Rgba16Float => wgpu::TextureFormat::Rgba16Float,
        TextureFormat::Rg32Float => wgpu::TextureFormat::Rg32Float,
        TextureFormat::Rgba32Float => wgpu::TextureFormat::Rgba32Float,
        TextureFormat::Depth16Unorm => wgpu::TextureFormat::Depth16Unorm,
        TextureFormat::Depth24Plus => wgpu::TextureFormat::Depth24Plus,
        TextureFormat::Depth24PlusStencil8 => wgpu::TextureFormat::Depth24PlusStencil8,
        TextureFormat::Depth32Float => wgpu::TextureFormat::Depth32Float,
        TextureFormat::Depth32FloatStencil8 => wgpu::TextureFormat::Depth32FloatStencil8,
    }
}

/// Convert a wgpu format back, or `None` for formats without a counterpart.
pub fn texture_format_from_wgpu(format: wgpu::TextureFormat) -> Option<TextureFormat> {
    let format = match format {
        wgpu::TextureFormat::R8Unorm => TextureFormat::R8Unorm,
        wgpu::TextureFormat::R8Snorm => TextureFormat::R8Snorm,
        wgpu::TextureFormat::R8Uint => TextureFormat::R8Uint,
        wgpu::TextureFormat::R8Sint => TextureFormat::R8Sint,
        wgpu::TextureFormat::R16Unorm => TextureFormat::R16Unorm,
        wgpu::TextureFormat::R16Float => TextureFormat::R16Float,
        wgpu::TextureFormat::Rg8Unorm => TextureFormat::Rg8Unorm,
        wgpu::TextureFormat::R32Float => TextureFormat::R32Float,
        wgpu::TextureFormat::R32Uint => TextureFormat::R32Uint,
        wgpu::TextureFormat::Rg16Float => TextureFormat::Rg16Float,
        wgpu::TextureFormat::Rgba8Unorm => TextureFormat::Rgba8Unorm,
        wgpu::TextureFormat::Rgba8UnormSrgb => TextureFormat::Rgba8UnormSrgb,
        wgpu::TextureFormat::Bgra8Unorm => TextureFormat::Bgra8Unorm,
        wgpu::TextureFormat::Bgra8UnormSrgb => TextureFormat::Bgra8UnormSrgb,
        wgpu::TextureFormat::Rgba16Float => TextureFormat::Rgba16Float,
        wgpu::TextureFormat::Rg32Float => TextureFormat::Rg32Float,
        wgpu::TextureFormat::Rgba32Float => TextureFormat::Rgba32Float,
        wgpu::TextureFormat::Depth16Unorm => TextureFormat::Depth16Unorm,
        wgpu::TextureFormat::Depth24Plus => TextureFormat::Depth24Plus,
        wgpu::TextureFormat::Depth24PlusStencil8 => TextureFormat::Depth24PlusStencil8,
        wgpu::TextureFormat::Depth32Float => TextureFormat::Depth32Float,
        wgpu::TextureFormat::Depth32FloatStencil8 => TextureFormat::Depth32FloatStencil8,
        _ => return None,
    };
    Some(format)
}

pub fn convert_texture_usage(usage: TextureUsage) -> wgpu::TextureUsages {
    let mut result = wgpu::TextureUsages::empty();
    if usage.contains(TextureUsage::COPY_SRC) {
        result |= wgpu::TextureUsages::COPY_SRC;
    }
    if usage.contains(TextureUsage::COPY_DST) {
        result |= wgpu::TextureUsages::COPY_DST;
    }
    if usage.contains(TextureUsage::TEXTURE_BINDING) {
        result |= wgpu::TextureUsages::TEXTURE_BINDING;
    }
    if usage.contains(TextureUsage::STORAGE_BINDING) {
        result |= wgpu::TextureUsages::STORAGE_BINDING;
    }
    if usage.contains(TextureUsage::RENDER_ATTACHMENT) {
        result |= wgpu::TextureUsages::RENDER_ATTACHMENT;
    }
    result
}

static_assertions::assert_impl_all!(WgpuTextureInfo: Copy, Send, Sync);
