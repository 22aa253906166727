//! Backend abstraction layer
//!
//! Provides the closed set of backends a [`TextureInfo`] can be bound to, the
//! shared types every backend understands, and one module per backend holding
//! its native payload types, caps and texture plans.
//!
//! # Available Backends
//!
//! - `mock` (always compiled): no-op backend for tests and the default descriptor
//! - `metal-backend`: Metal payloads as raw `MTLPixelFormat`/usage/storage values
//! - `vulkan-backend`: Vulkan payloads using ash types
//! - `wgpu-backend`: wgpu payloads using wgpu-types

pub mod mock;
pub mod traits;
pub mod types;

#[cfg(feature = "metal-backend")]
pub mod metal;

#[cfg(feature = "vulkan-backend")]
pub mod vulkan;

#[cfg(feature = "wgpu-backend")]
pub mod wgpu_backend;

pub use mock::{MockCaps, MockTextureInfo, MockTextureSpec};
pub use traits::*;
pub use types::*;

use std::fmt;

use crate::texture_info::TextureInfo;
use crate::CapsConfig;

/// Graphics API a [`TextureInfo`] is bound to.
///
/// Variants exist only for the backends enabled at build time, so matches stay
/// exhaustive per build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendApi {
    /// Mock backend, also reported by invalid descriptors
    #[default]
    Mock,
    /// Apple Metal
    #[cfg(feature = "metal-backend")]
    Metal,
    /// Vulkan via ash
    #[cfg(feature = "vulkan-backend")]
    Vulkan,
    /// wgpu (WebGPU)
    #[cfg(feature = "wgpu-backend")]
    Wgpu,
}

impl BackendApi {
    /// Human readable backend name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mock => "Mock",
            #[cfg(feature = "metal-backend")]
            Self::Metal => "Metal",
            #[cfg(feature = "vulkan-backend")]
            Self::Vulkan => "Vulkan",
            #[cfg(feature = "wgpu-backend")]
            Self::Wgpu => "wgpu",
        }
    }

    /// Every backend compiled into this build, mock first.
    pub fn available() -> &'static [BackendApi] {
        &[
            Self::Mock,
            #[cfg(feature = "metal-backend")]
            Self::Metal,
            #[cfg(feature = "vulkan-backend")]
            Self::Vulkan,
            #[cfg(feature = "wgpu-backend")]
            Self::Wgpu,
        ]
    }
}

impl fmt::Display for BackendApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a texture resides in protected (secure) memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Protected {
    #[default]
    No,
    Yes,
}

impl Protected {
    pub fn is_yes(&self) -> bool {
        *self == Self::Yes
    }
}

impl From<bool> for Protected {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Check if a real GPU backend is compiled in.
pub fn has_gpu_backend() -> bool {
    cfg!(any(
        feature = "metal-backend",
        feature = "vulkan-backend",
        feature = "wgpu-backend"
    ))
}

/// Machinery that keeps the backend payload slot closed to code outside this crate.
pub(crate) mod sealed {
    pub trait Sealed {}

    /// Storage for the active backend payload of a [`crate::TextureInfo`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum BackendSpec {
        Mock(super::MockTextureSpec),
        #[cfg(feature = "metal-backend")]
        Metal(super::metal::MtlTextureSpec),
        #[cfg(feature = "vulkan-backend")]
        Vulkan(super::vulkan::VulkanTextureSpec),
        #[cfg(feature = "wgpu-backend")]
        Wgpu(super::wgpu_backend::WgpuTextureSpec),
    }

    impl BackendSpec {
        pub fn backend(&self) -> super::BackendApi {
            match self {
                Self::Mock(_) => super::BackendApi::Mock,
                #[cfg(feature = "metal-backend")]
                Self::Metal(_) => super::BackendApi::Metal,
                #[cfg(feature = "vulkan-backend")]
                Self::Vulkan(_) => super::BackendApi::Vulkan,
                #[cfg(feature = "wgpu-backend")]
                Self::Wgpu(_) => super::BackendApi::Wgpu,
            }
        }
    }

    /// Maps a backend spec type onto its variant of [`BackendSpec`].
    pub trait SpecSlot: Sized {
        fn into_backend_spec(self) -> BackendSpec;
        fn select(spec: &BackendSpec) -> Option<&Self>;
    }
}

/// Validation shared by every caps type. Format checks are left to the backend.
pub(crate) fn check_common(
    info: &TextureInfo,
    backend: BackendApi,
    config: &CapsConfig,
) -> BackendResult<()> {
    if !info.is_valid() {
        return Err(BackendError::InvalidTextureInfo);
    }
    if info.backend() != backend {
        return Err(BackendError::BackendMismatch {
            expected: backend,
            found: info.backend(),
        });
    }

    let samples = info.num_samples();
    check_sample_count(samples, config.max_sample_count)?;

    let levels = info.num_mip_levels();
    if levels > config.max_mip_levels {
        return Err(BackendError::TooManyMipLevels {
            count: levels,
            max: config.max_mip_levels,
        });
    }
    if samples > 1 && levels > 1 {
        return Err(BackendError::MultisampledMipmaps);
    }

    if info.is_protected().is_yes() && !config.supports_protected {
        return Err(BackendError::ProtectedNotSupported);
    }

    Ok(())
}

/// Largest sample count a native API can express (`VK_SAMPLE_COUNT_64_BIT`).
pub(crate) const MAX_NATIVE_SAMPLE_COUNT: u32 = 64;

fn check_sample_count(samples: u32, max: u32) -> BackendResult<()> {
    if samples == 0 || !samples.is_power_of_two() || samples > max {
        return Err(BackendError::UnsupportedSampleCount {
            count: samples,
            max,
        });
    }
    Ok(())
}

/// Validation shared by every texture plan, once the backend spec is known.
///
/// Rejects descriptors no native API could create at `size`, independent of
/// any [`CapsConfig`].
pub(crate) fn check_plan(info: &TextureInfo, size: Extent3d) -> BackendResult<()> {
    let samples = info.num_samples();
    check_sample_count(samples, MAX_NATIVE_SAMPLE_COUNT)?;

    let levels = info.num_mip_levels();
    let max_levels = size.max_mip_levels();
    if levels > max_levels {
        return Err(BackendError::TooManyMipLevels {
            count: levels,
            max: max_levels,
        });
    }

    if samples > 1 {
        if levels > 1 {
            return Err(BackendError::MultisampledMipmaps);
        }
        if size.depth > 1 {
            return Err(BackendError::UnsupportedUsage(
                "multisampled textures must be 2D".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_default_is_mock() {
        assert_eq!(BackendApi::default(), BackendApi::Mock);
        assert_eq!(BackendApi::available()[0], BackendApi::Mock);
    }

    #[test]
    fn test_backend_display() {
        assert_eq!(BackendApi::Mock.to_string(), "Mock");
        #[cfg(feature = "vulkan-backend")]
        assert_eq!(BackendApi::Vulkan.to_string(), "Vulkan");
    }

    #[test]
    fn test_available_backends_are_unique() {
        let available = BackendApi::available();
        for (i, a) in available.iter().enumerate() {
            for b in &available[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(available.len() > 1, has_gpu_backend());
    }

    #[test]
    fn test_protected_from_bool() {
        assert_eq!(Protected::from(true), Protected::Yes);
        assert_eq!(Protected::from(false), Protected::No);
        assert!(!Protected::default().is_yes());
    }

    #[test]
    fn test_check_common_rejects_invalid() {
        let config = CapsConfig::default();
        assert_eq!(
            check_common(&TextureInfo::default(), BackendApi::Mock, &config),
            Err(BackendError::InvalidTextureInfo)
        );
    }

    #[test]
    fn test_check_common_sample_counts() {
        let config = CapsConfig::default();
        let make = |samples| {
            TextureInfo::from(MockTextureInfo {
                sample_count: samples,
                level_count: 1,
                ..Default::default()
            })
        };

        assert!(check_common(&make(1), BackendApi::Mock, &config).is_ok());
        assert!(check_common(&make(4), BackendApi::Mock, &config).is_ok());
        assert_eq!(
            check_common(&make(3), BackendApi::Mock, &config),
            Err(BackendError::UnsupportedSampleCount { count: 3, max: 8 })
        );
        assert_eq!(
            check_common(&make(16), BackendApi::Mock, &config),
            Err(BackendError::UnsupportedSampleCount { count: 16, max: 8 })
        );
    }

    #[test]
    fn test_check_common_multisampled_mipmaps() {
        let info = TextureInfo::from(MockTextureInfo {
            sample_count: 4,
            level_count: 3,
            ..Default::default()
        });
        assert_eq!(
            check_common(&info, BackendApi::Mock, &CapsConfig::default()),
            Err(BackendError::MultisampledMipmaps)
        );
    }

    #[test]
    fn test_check_plan_sample_counts() {
        let make = |samples| {
            TextureInfo::from(MockTextureInfo {
                sample_count: samples,
                level_count: 1,
                ..Default::default()
            })
        };
        let size = Extent3d::new_2d(16, 16);

        assert!(check_plan(&make(1), size).is_ok());
        assert!(check_plan(&make(64), size).is_ok());
        assert_eq!(
            check_plan(&make(3), size),
            Err(BackendError::UnsupportedSampleCount { count: 3, max: 64 })
        );
        assert_eq!(
            check_plan(&make(128), size),
            Err(BackendError::UnsupportedSampleCount { count: 128, max: 64 })
        );
    }

    #[test]
    fn test_check_plan_levels_fit_size() {
        let info = TextureInfo::from(MockTextureInfo {
            level_count: 3,
            ..Default::default()
        });
        assert!(check_plan(&info, Extent3d::new_2d(4, 4)).is_ok());
        assert_eq!(
            check_plan(&info, Extent3d::new_2d(2, 2)),
            Err(BackendError::TooManyMipLevels { count: 3, max: 2 })
        );
    }

    #[test]
    fn test_check_plan_multisampled_shapes() {
        let info = TextureInfo::from(MockTextureInfo {
            sample_count: 4,
            level_count: 1,
            ..Default::default()
        });
        assert!(check_plan(&info, Extent3d::new_2d(8, 8)).is_ok());
        assert!(matches!(
            check_plan(&info, Extent3d::new_3d(8, 8, 2)),
            Err(BackendError::UnsupportedUsage(_))
        ));

        let mipmapped = TextureInfo::from(MockTextureInfo {
            sample_count: 4,
            level_count: 2,
            ..Default::default()
        });
        assert_eq!(
            check_plan(&mipmapped, Extent3d::new_2d(8, 8)),
            Err(BackendError::MultisampledMipmaps)
        );
    }

    #[test]
    fn test_check_common_protected() {
        let info = TextureInfo::from(MockTextureInfo {
            protected: Protected::Yes,
            ..Default::default()
        });
        let config = CapsConfig::default();
        assert_eq!(
            check_common(&info, BackendApi::Mock, &config),
            Err(BackendError::ProtectedNotSupported)
        );
        let config = config.with_protected_support(true);
        assert!(check_common(&info, BackendApi::Mock, &config).is_ok());
    }
}
