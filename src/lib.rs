//! Texture Info - backend-agnostic GPU texture descriptors
//!
//! [`TextureInfo`] describes a GPU texture (sample count, mip levels, protection and
//! a backend-specific payload) without tying generic code to any graphics API.
//!
//! # Backends
//! - **Mock**: always compiled, used for tests and as the default/empty backend
//! - **Metal**: raw `MTLPixelFormat`/usage/storage values (`metal-backend` feature)
//! - **Vulkan**: ash types (`vulkan-backend` feature)
//! - **wgpu**: wgpu-types (`wgpu-backend` feature)
//!
//! # Features
//! - Cheap `Copy`/`Eq`/`Hash` descriptors suitable as cache keys
//! - Per-backend conversion from and back to native texture info structs
//! - Raw backend payload access kept inside the crate, per backend caps and texture types
//! - Capability checks driven by [`CapsConfig`]

pub mod backend;
pub mod texture_info;

pub use backend::{
    BackendApi, BackendError, BackendResult, Extent3d, MockCaps, MockTextureInfo,
    MockTextureSpec, NativeTextureInfo, Protected, TextureFormat, TextureUsage,
};
pub use texture_info::TextureInfo;

#[cfg(feature = "metal-backend")]
pub use backend::metal::{
    MtlCaps, MtlPixelFormat, MtlStorageMode, MtlTexture, MtlTextureDescriptor, MtlTextureInfo,
    MtlTextureSpec, MtlTextureType, MtlTextureUsage,
};
#[cfg(feature = "vulkan-backend")]
pub use backend::vulkan::{VulkanCaps, VulkanTexture, VulkanTextureInfo, VulkanTextureSpec};
#[cfg(feature = "wgpu-backend")]
pub use backend::wgpu_backend::{WgpuCaps, WgpuTexture, WgpuTextureInfo, WgpuTextureSpec};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version and the backends compiled into this build.
pub fn init() {
    let backends: Vec<&str> = BackendApi::available().iter().map(|b| b.name()).collect();
    log::info!(
        "Texture Info v{} initialized (backends: {})",
        VERSION,
        backends.join(", ")
    );
}

/// Limits applied by the backend caps types when validating a [`TextureInfo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapsConfig {
    /// Largest MSAA sample count accepted (must be a power of two)
    pub max_sample_count: u32,
    /// Largest mip level count accepted
    pub max_mip_levels: u32,
    /// Whether textures may live in protected memory
    pub supports_protected: bool,
}

impl CapsConfig {
    /// Set the maximum sample count.
    pub fn with_max_sample_count(mut self, count: u32) -> Self {
        self.max_sample_count = count;
        self
    }

    /// Set the maximum mip level count.
    pub fn with_max_mip_levels(mut self, levels: u32) -> Self {
        self.max_mip_levels = levels;
        self
    }

    /// Allow or forbid protected textures.
    pub fn with_protected_support(mut self, supported: bool) -> Self {
        self.supports_protected = supported;
        self
    }
}

impl Default for CapsConfig {
    fn default() -> Self {
        Self {
            max_sample_count: 8,
            // 16384px on the longest edge
            max_mip_levels: 15,
            supports_protected: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_init_does_not_panic() {
        init();
    }

    #[test]
    fn test_caps_config_builders() {
        let config = CapsConfig::default()
            .with_max_sample_count(4)
            .with_max_mip_levels(10)
            .with_protected_support(true);
        assert_eq!(config.max_sample_count, 4);
        assert_eq!(config.max_mip_levels, 10);
        assert!(config.supports_protected);
    }

    #[test]
    fn test_default_texture_info_is_invalid() {
        let info = TextureInfo::default();
        assert!(!info.is_valid());
        assert_eq!(info.backend(), BackendApi::Mock);
    }
}
