//! Metal backend payloads.
//!
//! Metal objects are not touched here. Pixel formats, usages and storage modes are
//! kept as the raw values of `MTLPixelFormat`, `MTLTextureUsage` and
//! `MTLStorageMode`, so this backend builds on every platform.

mod caps;
mod texture;

pub use caps::MtlCaps;
pub use texture::{MtlTexture, MtlTextureDescriptor, MtlTextureType};

use bitflags::bitflags;

use super::sealed::{BackendSpec, Sealed, SpecSlot};
use super::{BackendApi, NativeTextureInfo, TextureFormat};
use crate::texture_info::TextureInfo;

/// Raw `MTLPixelFormat` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MtlPixelFormat(pub u64);

impl MtlPixelFormat {
    pub const INVALID: Self = Self(0);
    pub const R8_UNORM: Self = Self(10);
    pub const R8_SNORM: Self = Self(12);
    pub const R8_UINT: Self = Self(13);
    pub const R8_SINT: Self = Self(14);
    pub const R16_UNORM: Self = Self(20);
    pub const R16_FLOAT: Self = Self(25);
    pub const RG8_UNORM: Self = Self(30);
    pub const R32_UINT: Self = Self(53);
    pub const R32_FLOAT: Self = Self(55);
    pub const RG16_FLOAT: Self = Self(65);
    pub const RGBA8_UNORM: Self = Self(70);
    pub const RGBA8_UNORM_SRGB: Self = Self(71);
    pub const BGRA8_UNORM: Self = Self(80);
    pub const BGRA8_UNORM_SRGB: Self = Self(81);
    pub const RG32_FLOAT: Self = Self(105);
    pub const RGBA16_FLOAT: Self = Self(115);
    pub const RGBA32_FLOAT: Self = Self(125);
    pub const DEPTH16_UNORM: Self = Self(250);
    pub const DEPTH32_FLOAT: Self = Self(252);
    pub const STENCIL8: Self = Self(253);
    pub const DEPTH24_UNORM_STENCIL8: Self = Self(255);
    pub const DEPTH32_FLOAT_STENCIL8: Self = Self(260);
}

bitflags! {
    /// `MTLTextureUsage` flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MtlTextureUsage: u64 {
        const SHADER_READ = 0x0001;
        const SHADER_WRITE = 0x0002;
        const RENDER_TARGET = 0x0004;
        const PIXEL_FORMAT_VIEW = 0x0010;
    }
}

impl Default for MtlTextureUsage {
    fn default() -> Self {
        Self::empty()
    }
}

/// `MTLStorageMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u64)]
pub enum MtlStorageMode {
    #[default]
    Shared = 0,
    Managed = 1,
    Private = 2,
    /// Tile memory only; the contents never reach system memory.
    Memoryless = 3,
}

/// Metal payload stored inside a [`TextureInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MtlTextureSpec {
    pub format: MtlPixelFormat,
    pub usage: MtlTextureUsage,
    pub storage_mode: MtlStorageMode,
    /// Set for drawable textures that may only be used as render targets.
    pub framebuffer_only: bool,
}

/// Native texture info of the Metal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MtlTextureInfo {
    pub sample_count: u32,
    pub level_count: u32,
    pub format: MtlPixelFormat,
    pub usage: MtlTextureUsage,
    pub storage_mode: MtlStorageMode,
    pub framebuffer_only: bool,
}

impl MtlTextureInfo {
    /// Private-storage 2D info for a backend-neutral format.
    pub fn new(format: TextureFormat, usage: MtlTextureUsage) -> Self {
        Self {
            format: convert_texture_format(format),
            usage,
            storage_mode: MtlStorageMode::Private,
            ..Default::default()
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
}

impl Default for MtlTextureInfo {
    fn default() -> Self {
        Self {
            sample_count: 1,
            level_count: 0,
            format: MtlPixelFormat::INVALID,
            usage: MtlTextureUsage::empty(),
            storage_mode: MtlStorageMode::Shared,
            framebuffer_only: false,
        }
    }
}

impl Sealed for MtlTextureInfo {}

impl SpecSlot for MtlTextureSpec {
    fn into_backend_spec(self) -> BackendSpec {
        BackendSpec::Metal(self)
    }

    fn select(spec: &BackendSpec) -> Option<&Self> {
        match spec {
            BackendSpec::Metal(spec) => Some(spec),
            _ => None,
        }
    }
}

impl NativeTextureInfo for MtlTextureInfo {
    type Spec = MtlTextureSpec;

    const BACKEND: BackendApi = BackendApi::Metal;

    fn sample_count(&self) -> u32 {
        self.sample_count
    }

    fn level_count(&self) -> u32 {
        self.level_count
    }

    fn to_spec(&self) -> MtlTextureSpec {
        MtlTextureSpec {
            format: self.format,
            usage: self.usage,
            storage_mode: self.storage_mode,
            framebuffer_only: self.framebuffer_only,
        }
    }

    fn from_spec(spec: &MtlTextureSpec, sample_count: u32, level_count: u32) -> Self {
        Self {
            sample_count,
            level_count,
            format: spec.format,
            usage: spec.usage,
            storage_mode: spec.storage_mode,
            framebuffer_only: spec.framebuffer_only,
        }
    }
}

impl From<MtlTextureInfo> for TextureInfo {
    fn from(info: MtlTextureInfo) -> Self {
        TextureInfo::from_native(&info)
    }
}

impl TextureInfo {
    pub fn mtl_texture_info(&self) -> Option<MtlTextureInfo> {
        self.backend_texture_info()
    }
}

/// Convert TextureFormat to a Metal pixel format.
pub fn convert_texture_format(format: TextureFormat) -> MtlPixelFormat {
    match format {
        // 8-bit formats
        TextureFormat::R8Unorm => MtlPixelFormat::R8_UNORM,
        TextureFormat::R8Snorm => MtlPixelFormat::R8_SNORM,
        TextureFormat::R8Uint => MtlPixelFormat::R8_UINT,
        TextureFormat::R8Sint => MtlPixelFormat::R8_SINT,

        // 16-bit formats
        TextureFormat::R16Unorm => MtlPixelFormat::R16_UNORM,
        TextureFormat::R16Float => MtlPixelFormat::R16_FLOAT,
        TextureFormat::Rg8Unorm => MtlPixelFormat::RG8_UNORM,

        // 32-bit formats
        TextureFormat::R32Float => MtlPixelFormat::R32_FLOAT,
        TextureFormat::R32Uint => MtlPixelFormat::R32_UINT,
        TextureFormat::Rg16Float => MtlPixelFormat::RG16_FLOAT,
        TextureFormat::Rgba8Unorm => MtlPixelFormat::RGBA8_UNORM,
        TextureFormat::Rgba8UnormSrgb => MtlPixelFormat::RGBA8_UNORM_SRGB,
        TextureFormat::Bgra8Unorm => MtlPixelFormat::BGRA8_UNORM,
        TextureFormat::Bgra8UnormSrgb => MtlPixelFormat::BGRA8_UNORM_SRGB,

        // 64-bit formats
        TextureFormat::Rgba16Float => MtlPixelFormat::RGBA16_FLOAT,
        TextureFormat::Rg32Float => MtlPixelFormat::RG32_FLOAT,

        // 128-bit formats
        TextureFormat::Rgba32Float => MtlPixelFormat::RGBA32_FLOAT,

        // Depth/stencil formats
        TextureFormat::Depth16Unorm => MtlPixelFormat::DEPTH16_UNORM,
        TextureFormat::Depth24Plus => MtlPixelFormat::DEPTH32_FLOAT, // Apple GPUs lack D24
        TextureFormat::Depth24PlusStencil8 => MtlPixelFormat::DEPTH32_FLOAT_STENCIL8,
        TextureFormat::Depth32Float => MtlPixelFormat::DEPTH32_FLOAT,
        TextureFormat::Depth32FloatStencil8 => MtlPixelFormat::DEPTH32_FLOAT_STENCIL8,
    }
}

/// Convert a Metal pixel format back to TextureFormat, if it has a counterpart.
pub fn texture_format_from_mtl(format: MtlPixelFormat) -> Option<TextureFormat> {
    let format = match format {
        MtlPixelFormat::R8_UNORM => TextureFormat::R8Unorm,
        MtlPixelFormat::R8_SNORM => TextureFormat::R8Snorm,
        MtlPixelFormat::R8_UINT => TextureFormat::R8Uint,
        MtlPixelFormat::R8_SINT => TextureFormat::R8Sint,
        MtlPixelFormat::R16_UNORM => TextureFormat::R16Unorm,
        MtlPixelFormat::R16_FLOAT => TextureFormat::R16Float,
        MtlPixelFormat::RG8_UNORM => TextureFormat::Rg8Unorm,
        MtlPixelFormat::R32_FLOAT => TextureFormat::R32Float,
        MtlPixelFormat::R32_UINT => TextureFormat::R32Uint,
        MtlPixelFormat::RG16_FLOAT => TextureFormat::Rg16Float,
        MtlPixelFormat::RGBA8_UNORM => TextureFormat::Rgba8Unorm,
        MtlPixelFormat::RGBA8_UNORM_SRGB => TextureFormat::Rgba8UnormSrgb,
        MtlPixelFormat::BGRA8_UNORM => TextureFormat::Bgra8Unorm,
        MtlPixelFormat::BGRA8_UNORM_SRGB => TextureFormat::Bgra8UnormSrgb,
        MtlPixelFormat::RGBA16_FLOAT => TextureFormat::Rgba16Float,
        MtlPixelFormat::RG32_FLOAT => TextureFormat::Rg32Float,
        MtlPixelFormat::RGBA32_FLOAT => TextureFormat::Rgba32Float,
        MtlPixelFormat::DEPTH16_UNORM => TextureFormat::Depth16Unorm,
        MtlPixelFormat::DEPTH32_FLOAT => TextureFormat::Depth32Float,
        MtlPixelFormat::DEPTH24_UNORM_STENCIL8 => TextureFormat::Depth24PlusStencil8,
        MtlPixelFormat::DEPTH32_FLOAT_STENCIL8 => TextureFormat::Depth32FloatStencil8,
        _ => return None,
    };
    Some(format)
}

static_assertions::assert_impl_all!(MtlTextureInfo: Copy, Send, Sync);
