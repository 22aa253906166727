//! Common utilities for texture descriptor integration tests.
//!
//! Every helper takes a test-side [`Backend`] and returns `None` when that
//! backend is not compiled into this build, so parameterised tests can skip it.

#![allow(dead_code)]

use texture_info::{
    BackendApi, BackendResult, Extent3d, MockCaps, MockTextureInfo, NativeTextureInfo, Protected,
    TextureFormat, TextureInfo, TextureUsage,
};

#[cfg(feature = "metal-backend")]
use texture_info::{MtlCaps, MtlTexture, MtlTextureInfo, MtlTextureUsage};
#[cfg(feature = "vulkan-backend")]
use texture_info::{VulkanCaps, VulkanTexture, VulkanTextureInfo};
#[cfg(feature = "wgpu-backend")]
use texture_info::{WgpuCaps, WgpuTexture, WgpuTextureInfo};

/// Install a test logger. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Backend Enumeration
// ============================================================================

/// Backends a descriptor can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Mock,
    Metal,
    Vulkan,
    Wgpu,
}

impl Backend {
    pub const ALL: [Backend; 4] = [
        Backend::Mock,
        Backend::Metal,
        Backend::Vulkan,
        Backend::Wgpu,
    ];

    /// Check if this backend is compiled into this build.
    pub fn is_available(&self) -> bool {
        match self {
            Backend::Mock => true,
            Backend::Metal => cfg!(feature = "metal-backend"),
            Backend::Vulkan => cfg!(feature = "vulkan-backend"),
            Backend::Wgpu => cfg!(feature = "wgpu-backend"),
        }
    }

    pub fn api(&self) -> Option<BackendApi> {
        match self {
            Backend::Mock => Some(BackendApi::Mock),
            #[cfg(feature = "metal-backend")]
            Backend::Metal => Some(BackendApi::Metal),
            #[cfg(feature = "vulkan-backend")]
            Backend::Vulkan => Some(BackendApi::Vulkan),
            #[cfg(feature = "wgpu-backend")]
            Backend::Wgpu => Some(BackendApi::Wgpu),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    /// Other available backends.
    pub fn others(&self) -> impl Iterator<Item = Backend> + '_ {
        Self::ALL
            .into_iter()
            .filter(move |other| other != self && other.is_available())
    }

    /// A render target descriptor with the given counts.
    pub fn texture_info(&self, samples: u32, levels: u32) -> Option<TextureInfo> {
        match self {
            Backend::Mock => Some(mock_target(samples, levels).into()),
            #[cfg(feature = "metal-backend")]
            Backend::Metal => Some(metal_target(samples, levels).into()),
            #[cfg(feature = "vulkan-backend")]
            Backend::Vulkan => Some(vulkan_target(samples, levels).into()),
            #[cfg(feature = "wgpu-backend")]
            Backend::Wgpu => Some(wgpu_target(samples, levels).into()),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    /// Whether a render target built with the given counts survives a round trip
    /// through [`TextureInfo`] back into this backend's native info.
    pub fn round_trips(&self, samples: u32, levels: u32) -> Option<bool> {
        match self {
            Backend::Mock => Some(round_trip(mock_target(samples, levels), mock_sentinel())),
            #[cfg(feature = "metal-backend")]
            Backend::Metal => Some(round_trip(metal_target(samples, levels), metal_sentinel())),
            #[cfg(feature = "vulkan-backend")]
            Backend::Vulkan => Some(round_trip(
                vulkan_target(samples, levels),
                vulkan_sentinel(),
            )),
            #[cfg(feature = "wgpu-backend")]
            Backend::Wgpu => Some(round_trip(wgpu_target(samples, levels), wgpu_sentinel())),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    /// Try to extract this backend's native info from `info`.
    ///
    /// Panics if a failed extraction modified the output.
    pub fn extracts(&self, info: &TextureInfo) -> Option<bool> {
        match self {
            Backend::Mock => Some(extract(info, mock_sentinel())),
            #[cfg(feature = "metal-backend")]
            Backend::Metal => Some(extract(info, metal_sentinel())),
            #[cfg(feature = "vulkan-backend")]
            Backend::Vulkan => Some(extract(info, vulkan_sentinel())),
            #[cfg(feature = "wgpu-backend")]
            Backend::Wgpu => Some(extract(info, wgpu_sentinel())),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    /// Validate `info` with this backend's caps.
    pub fn check(&self, info: &TextureInfo) -> Option<BackendResult<()>> {
        match self {
            Backend::Mock => Some(MockCaps::default().check_texture_info(info)),
            #[cfg(feature = "metal-backend")]
            Backend::Metal => Some(MtlCaps::default().check_texture_info(info)),
            #[cfg(feature = "vulkan-backend")]
            Backend::Vulkan => Some(VulkanCaps::default().check_texture_info(info)),
            #[cfg(feature = "wgpu-backend")]
            Backend::Wgpu => Some(WgpuCaps::default().check_texture_info(info)),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    /// Whether this backend's caps report `info` as renderable.
    pub fn is_renderable(&self, info: &TextureInfo) -> Option<bool> {
        match self {
            Backend::Mock => Some(MockCaps::default().is_renderable(info)),
            #[cfg(feature = "metal-backend")]
            Backend::Metal => Some(MtlCaps::default().is_renderable(info)),
            #[cfg(feature = "vulkan-backend")]
            Backend::Vulkan => Some(VulkanCaps::default().is_renderable(info)),
            #[cfg(feature = "wgpu-backend")]
            Backend::Wgpu => Some(WgpuCaps::default().is_renderable(info)),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    /// Plan a texture with this backend. The mock backend has no texture plans.
    pub fn plan(&self, info: TextureInfo, size: Extent3d) -> Option<BackendResult<()>> {
        match self {
            #[cfg(feature = "metal-backend")]
            Backend::Metal => Some(MtlTexture::new(info, size).map(|_| ())),
            #[cfg(feature = "vulkan-backend")]
            Backend::Vulkan => Some(VulkanTexture::new(info, size).map(|_| ())),
            #[cfg(feature = "wgpu-backend")]
            Backend::Wgpu => Some(WgpuTexture::new(info, size).map(|_| ())),
            _ => None,
        }
    }
}

fn round_trip<I: NativeTextureInfo + PartialEq>(native: I, sentinel: I) -> bool {
    let info = TextureInfo::from_native(&native);
    let mut out = sentinel;
    info.get_backend_texture_info(&mut out) && out == native
}

fn extract<I: NativeTextureInfo + PartialEq + std::fmt::Debug>(
    info: &TextureInfo,
    sentinel: I,
) -> bool {
    let mut out = sentinel;
    let found = info.get_backend_texture_info(&mut out);
    if !found {
        assert_eq!(out, sentinel, "failed extraction modified the output");
    }
    found
}

// ============================================================================
// Native Descriptors
// ============================================================================

fn mock_target(samples: u32, levels: u32) -> MockTextureInfo {
    MockTextureInfo {
        sample_count: samples,
        level_count: levels,
        format: TextureFormat::Bgra8Unorm,
        usage: TextureUsage::RENDER_ATTACHMENT | TextureUsage::TEXTURE_BINDING,
        protected: Protected::No,
    }
}

fn mock_sentinel() -> MockTextureInfo {
    MockTextureInfo {
        sample_count: 99,
        level_count: 99,
        format: TextureFormat::R8Uint,
        usage: TextureUsage::COPY_SRC,
        protected: Protected::Yes,
    }
}

#[cfg(feature = "metal-backend")]
fn metal_target(samples: u32, levels: u32) -> MtlTextureInfo {
    MtlTextureInfo::new(
        TextureFormat::Bgra8Unorm,
        MtlTextureUsage::RENDER_TARGET | MtlTextureUsage::SHADER_READ,
    )
    .with_sample_count(samples)
    .with_level_count(levels)
}

#[cfg(feature = "metal-backend")]
fn metal_sentinel() -> MtlTextureInfo {
    MtlTextureInfo::new(TextureFormat::R8Uint, MtlTextureUsage::SHADER_WRITE)
        .with_sample_count(99)
        .with_level_count(99)
}

#[cfg(feature = "vulkan-backend")]
fn vulkan_target(samples: u32, levels: u32) -> VulkanTextureInfo {
    VulkanTextureInfo::new(
        TextureFormat::Bgra8Unorm,
        TextureUsage::RENDER_ATTACHMENT | TextureUsage::TEXTURE_BINDING,
    )
    .with_sample_count(samples)
    .with_level_count(levels)
}

#[cfg(feature = "vulkan-backend")]
fn vulkan_sentinel() -> VulkanTextureInfo {
    VulkanTextureInfo::new(TextureFormat::R8Uint, TextureUsage::COPY_SRC)
        .with_sample_count(99)
        .with_level_count(99)
        .with_protected(Protected::Yes)
}

#[cfg(feature = "wgpu-backend")]
fn wgpu_target(samples: u32, levels: u32) -> WgpuTextureInfo {
    WgpuTextureInfo::new(
        wgpu::TextureFormat::Bgra8Unorm,
        wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
    )
    .with_sample_count(samples)
    .with_level_count(levels)
}

#[cfg(feature = "wgpu-backend")]
fn wgpu_sentinel() -> WgpuTextureInfo {
    WgpuTextureInfo::new(wgpu::TextureFormat::R8Uint, wgpu::TextureUsages::COPY_SRC)
        .with_sample_count(99)
        .with_level_count(99)
}
