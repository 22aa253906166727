//! Vulkan backend payloads using ash
//!
//! Only ash's plain Vulkan types are used here; no instance or device is created.

mod caps;
mod texture;

pub use caps::VulkanCaps;
pub use texture::VulkanTexture;

use ash::vk;

use super::sealed::{BackendSpec, Sealed, SpecSlot};
use super::{BackendApi, NativeTextureInfo, Protected, TextureFormat, TextureUsage};
use crate::texture_info::TextureInfo;

/// Vulkan payload stored inside a [`TextureInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VulkanTextureSpec {
    pub flags: vk::ImageCreateFlags,
    pub format: vk::Format,
    pub image_tiling: vk::ImageTiling,
    pub image_usage_flags: vk::ImageUsageFlags,
    pub sharing_mode: vk::SharingMode,
    pub aspect_mask: vk::ImageAspectFlags,
}

impl Default for VulkanTextureSpec {
    fn default() -> Self {
        Self {
            flags: vk::ImageCreateFlags::empty(),
            format: vk::Format::UNDEFINED,
            image_tiling: vk::ImageTiling::OPTIMAL,
            image_usage_flags: vk::ImageUsageFlags::empty(),
            sharing_mode: vk::SharingMode::EXCLUSIVE,
            aspect_mask: vk::ImageAspectFlags::COLOR,
        }
    }
}

/// Native texture info of the Vulkan backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VulkanTextureInfo {
    pub sample_count: u32,
    pub level_count: u32,
    /// `PROTECTED` here marks the descriptor as protected.
    pub flags: vk::ImageCreateFlags,
    pub format: vk::Format,
    pub image_tiling: vk::ImageTiling,
    pub image_usage_flags: vk::ImageUsageFlags,
    pub sharing_mode: vk::SharingMode,
    pub aspect_mask: vk::ImageAspectFlags,
}

impl VulkanTextureInfo {
    /// Optimal-tiling, exclusive info for a backend-neutral format and usage.
    pub fn new(format: TextureFormat, usage: TextureUsage) -> Self {
        Self {
            format: convert_texture_format(format),
            image_usage_flags: convert_texture_usage(usage, format),
            aspect_mask: aspect_mask_for(format),
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

    pub fn with_protected(mut self, protected: Protected) -> Self {
        if protected.is_yes() {
            self.flags |= vk::ImageCreateFlags::PROTECTED;
        } else {
            self.flags &= !vk::ImageCreateFlags::PROTECTED;
        }
        self
    }
}

impl Default for VulkanTextureInfo {
    fn default() -> Self {
        Self::from_spec(&VulkanTextureSpec::default(), 1, 0)
    }
}

impl Sealed for VulkanTextureInfo {}

impl SpecSlot for VulkanTextureSpec {
    fn into_backend_spec(self) -> BackendSpec {
        BackendSpec::Vulkan(self)
    }

    fn select(spec: &BackendSpec) -> Option<&Self> {
        match spec {
            BackendSpec::Vulkan(spec) => Some(spec),
            _ => None,
        }
    }
}

impl NativeTextureInfo for VulkanTextureInfo {
    type Spec = VulkanTextureSpec;

    const BACKEND: BackendApi = BackendApi::Vulkan;

    fn sample_count(&self) -> u32 {
        self.sample_count
    }

    fn level_count(&self) -> u32 {
        self.level_count
    }

    fn protected(&self) -> Protected {
        self.flags.contains(vk::ImageCreateFlags::PROTECTED).into()
    }

    fn to_spec(&self) -> VulkanTextureSpec {
        VulkanTextureSpec {
            flags: self.flags,
            format: self.format,
            image_tiling: self.image_tiling,
            image_usage_flags: self.image_usage_flags,
            sharing_mode: self.sharing_mode,
            aspect_mask: self.aspect_mask,
        }
    }

    fn from_spec(spec: &VulkanTextureSpec, sample_count: u32, level_count: u32) -> Self {
        Self {
            sample_count,
            level_count,
            flags: spec.flags,
            format: spec.format,
            image_tiling: spec.image_tiling,
            image_usage_flags: spec.image_usage_flags,
            sharing_mode: spec.sharing_mode,
            aspect_mask: spec.aspect_mask,
        }
    }
}

impl From<VulkanTextureInfo> for TextureInfo {
    fn from(info: VulkanTextureInfo) -> Self {
        TextureInfo::from_native(&info)
    }
}

impl TextureInfo {
    pub fn vulkan_texture_info(&self) -> Option<VulkanTextureInfo> {
        self.backend_texture_info()
    }
}

/// Convert TextureFormat to Vulkan format.
pub fn convert_texture_format(format: TextureFormat) -> vk::Format {
    match format {
        // 8-bit formats
        TextureFormat::R8Unorm => vk::Format::R8_UNORM,
        TextureFormat::R8Snorm => vk::Format::R8_SNORM,
        TextureFormat::R8Uint => vk::Format::R8_UINT,
        TextureFormat::R8Sint => vk::Format::R8_SINT,

        // 16-bit formats
        TextureFormat::R16Unorm => vk::Format::R16_UNORM,
        TextureFormat::R16Float => vk::Format::R16_SFLOAT,
        TextureFormat::Rg8Unorm => vk::Format::R8G8_UNORM,

        // 32-bit formats
        TextureFormat::R32Float => vk::Format::R32_SFLOAT,
        TextureFormat::R32Uint => vk::Format::R32_UINT,
        TextureFormat::Rg16Float => vk::Format::R16G16_SFLOAT,
        TextureFormat::Rgba8Unorm => vk::Format::R8G8B8A8_UNORM,
        TextureFormat::Rgba8UnormSrgb => vk::Format::R8G8B8A8_SRGB,
        TextureFormat::Bgra8Unorm => vk::Format::B8G8R8A8_UNORM,
        TextureFormat::Bgra8UnormSrgb => vk::Format::B8G8R8A8_SRGB,

        // 64-bit formats
        TextureFormat::Rgba16Float => vk::Format::R16G16B16A16_SFLOAT,
        TextureFormat::Rg32Float => vk::Format::R32G32_SFLOAT,

        // 128-bit formats
        TextureFormat::Rgba32Float => vk::Format::R32G32B32A32_SFLOAT,

        // Depth/stencil formats
        TextureFormat::Depth16Unorm => vk::Format::D16_UNORM,
        TextureFormat::Depth24Plus => vk::Format::D32_SFLOAT, // no portable D24 without stencil
        TextureFormat::Depth24PlusStencil8 => vk::Format::D24_UNORM_S8_UINT,
        TextureFormat::Depth32Float => vk::Format::D32_SFLOAT,
        TextureFormat::Depth32FloatStencil8 => vk::Format::D32_SFLOAT_S8_UINT,
    }
}

/// Convert a Vulkan format back to TextureFormat, if it has a counterpart.
pub fn texture_format_from_vk(format: vk::Format) -> Option<TextureFormat> {
    let format = match format {
        vk::Format::R8_UNORM => TextureFormat::R8Unorm,
        vk::Format::R8_SNORM => TextureFormat::R8Snorm,
        vk::Format::R8_UINT => TextureFormat::R8Uint,
        vk::Format::R8_SINT => TextureFormat::R8Sint,
        vk::Format::R16_UNORM => TextureFormat::R16Unorm,
        vk::Format::R16_SFLOAT => TextureFormat::R16Float,
        vk::Format::R8G8_UNORM => TextureFormat::Rg8Unorm,
        vk::Format::R32_SFLOAT => TextureFormat::R32Float,
        vk::Format::R32_UINT => TextureFormat::R32Uint,
        vk::Format::R16G16_SFLOAT => TextureFormat::Rg16Float,
        vk::Format::R8G8B8A8_UNORM => TextureFormat::Rgba8Unorm,
        vk::Format::R8G8B8A8_SRGB => TextureFormat::Rgba8UnormSrgb,
        vk::Format::B8G8R8A8_UNORM => TextureFormat::Bgra8Unorm,
        vk::Format::B8G8R8A8_SRGB => TextureFormat::Bgra8UnormSrgb,
        vk::Format::R16G16B16A16_SFLOAT => TextureFormat::Rgba16Float,
        vk::Format::R32G32_SFLOAT => TextureFormat::Rg32Float,
        vk::Format::R32G32B32A32_SFLOAT => TextureFormat::Rgba32Float,
        vk::Format::D16_UNORM => TextureFormat::Depth16Unorm,
        vk::Format::D24_UNORM_S8_UINT => TextureFormat::Depth24PlusStencil8,
        vk::Format::D32_SFLOAT => TextureFormat::Depth32Float,
        vk::Format::D32_SFLOAT_S8_UINT => TextureFormat::Depth32FloatStencil8,
        _ => return None,
    };
    Some(format)
}

/// Convert TextureUsage flags to Vulkan image usage flags.
///
/// The format is needed to determine whether RENDER_ATTACHMENT should map to
/// COLOR_ATTACHMENT or DEPTH_STENCIL_ATTACHMENT.
pub fn convert_texture_usage(usage: TextureUsage, format: TextureFormat) -> vk::ImageUsageFlags {
    let mut result = vk::ImageUsageFlags::empty();

    if usage.contains(TextureUsage::COPY_SRC) {
        result |= vk::ImageUsageFlags::TRANSFER_SRC;
    }
    if usage.contains(TextureUsage::COPY_DST) {
        result |= vk::ImageUsageFlags::TRANSFER_DST;
    }
    if usage.contains(TextureUsage::TEXTURE_BINDING) {
        result |= vk::ImageUsageFlags::SAMPLED;
    }
    if usage.contains(TextureUsage::STORAGE_BINDING) {
        result |= vk::ImageUsageFlags::STORAGE;
    }
    if usage.contains(TextureUsage::RENDER_ATTACHMENT) {
        if format.is_depth_stencil() {
            result |= vk::ImageUsageFlags::DEPTH_STENCIL_ATTACHMENT;
        } else {
            result |= vk::ImageUsageFlags::COLOR_ATTACHMENT;
        }
    }

    result
}

/// Image aspects covered by a format.
pub fn aspect_mask_for(format: TextureFormat) -> vk::ImageAspectFlags {
    if format.has_stencil() {
        vk::ImageAspectFlags::DEPTH | vk::ImageAspectFlags::STENCIL
    } else if format.is_depth_stencil() {
        vk::ImageAspectFlags::DEPTH
    } else {
        vk::ImageAspectFlags::COLOR
    }
}

static_assertions::assert_impl_all!(VulkanTextureInfo: Copy, Send, Sync);
