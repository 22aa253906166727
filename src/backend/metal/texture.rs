//! Metal texture plans.
//!
//! An [`MtlTexture`] pairs a Metal [`TextureInfo`] with a size and produces the
//! values an `MTLTextureDescriptor` needs. No Metal object is created.

use super::{MtlPixelFormat, MtlStorageMode, MtlTextureSpec, MtlTextureUsage};
use crate::backend::sealed::Sealed;
use crate::backend::{
    check_plan, BackendApi, BackendError, BackendResult, BackendSpecAccess, Extent3d,
};
use crate::texture_info::TextureInfo;

/// `MTLTextureType` subset used for texture plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MtlTextureType {
    Type2D,
    Type2DMultisample,
    Type3D,
}

/// Field values for an `MTLTextureDescriptor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MtlTextureDescriptor {
    pub texture_type: MtlTextureType,
    pub pixel_format: MtlPixelFormat,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub mipmap_level_count: u32,
    pub sample_count: u32,
    pub usage: MtlTextureUsage,
    pub storage_mode: MtlStorageMode,
}

/// A Metal texture plan.
#[derive(Debug, Clone)]
pub struct MtlTexture {
    info: TextureInfo,
    size: Extent3d,
}

impl MtlTexture {
    /// Plan a texture of `size` described by a Metal `info`.
    ///
    /// Multisampled plans must be a single 2D slice with one level.
    pub fn new(info: TextureInfo, size: Extent3d) -> BackendResult<Self> {
        if size.is_empty() {
            return Err(BackendError::InvalidDimensions(size));
        }
        let texture = Self { info, size };
        texture.spec()?;
        check_plan(&info, size)?;
        log::trace!(
            "MtlTexture: planned {}x{}x{} texture {}",
            size.width,
            size.height,
            size.depth,
            info
        );
        Ok(texture)
    }

    pub fn info(&self) -> &TextureInfo {
        &self.info
    }

    pub fn size(&self) -> Extent3d {
        self.size
    }

    /// Build the `MTLTextureDescriptor` values for this plan.
    pub fn descriptor(&self) -> BackendResult<MtlTextureDescriptor> {
        let spec = self.spec()?;
        let sample_count = self.info.num_samples();

        let texture_type = if self.size.depth > 1 {
            MtlTextureType::Type3D
        } else if sample_count > 1 {
            MtlTextureType::Type2DMultisample
        } else {
            MtlTextureType::Type2D
        };

        Ok(MtlTextureDescriptor {
            texture_type,
            pixel_format: spec.format,
            width: self.size.width,
            height: self.size.height,
            depth: self.size.depth,
            mipmap_level_count: self.info.num_mip_levels().max(1),
            sample_count,
            usage: spec.usage,
            storage_mode: spec.storage_mode,
        })
    }

    fn spec(&self) -> BackendResult<&MtlTextureSpec> {
        if !self.info.is_valid() {
            return Err(BackendError::InvalidTextureInfo);
        }
        self.info
            .backend_spec(self)
            .ok_or(BackendError::BackendMismatch {
                expected: BackendApi::Metal,
                found: self.info.backend(),
            })
    }
}

impl Sealed for MtlTexture {}

impl BackendSpecAccess for MtlTexture {
    type Spec = MtlTextureSpec;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::metal::MtlTextureInfo;
    use crate::backend::{MockTextureInfo, TextureFormat};

    #[test]
    fn test_descriptor_2d() {
        let info = TextureInfo::from(
            MtlTextureInfo::new(TextureFormat::Rgba8Unorm, MtlTextureUsage::SHADER_READ)
                .with_level_count(0),
        );
        let texture = MtlTexture::new(info, Extent3d::new_2d(64, 32)).unwrap();
        let desc = texture.descriptor().unwrap();

        assert_eq!(desc.texture_type, MtlTextureType::Type2D);
        assert_eq!(desc.pixel_format, MtlPixelFormat::RGBA8_UNORM);
        assert_eq!((desc.width, desc.height, desc.depth), (64, 32, 1));
        assert_eq!(desc.mipmap_level_count, 1);
        assert_eq!(desc.storage_mode, MtlStorageMode::Private);
    }

    #[test]
    fn test_descriptor_multisample() {
        let info = TextureInfo::from(
            MtlTextureInfo::new(TextureFormat::Bgra8Unorm, MtlTextureUsage::RENDER_TARGET)
                .with_sample_count(4)
                .with_level_count(1),
        );
        let desc = MtlTexture::new(info, Extent3d::new_2d(8, 8))
            .unwrap()
            .descriptor()
            .unwrap();
        assert_eq!(desc.texture_type, MtlTextureType::Type2DMultisample);
        assert_eq!(desc.sample_count, 4);
    }

    #[test]
    fn test_rejects_multisampled_3d() {
        let info = TextureInfo::from(
            MtlTextureInfo::new(TextureFormat::Rgba8Unorm, MtlTextureUsage::RENDER_TARGET)
                .with_sample_count(4),
        );
        assert!(matches!(
            MtlTexture::new(info, Extent3d::new_3d(8, 8, 2)),
            Err(BackendError::UnsupportedUsage(_))
        ));
    }

    #[test]
    fn test_rejects_levels_beyond_size() {
        let info = TextureInfo::from(
            MtlTextureInfo::new(TextureFormat::Rgba8Unorm, MtlTextureUsage::SHADER_READ)
                .with_level_count(20),
        );
        assert_eq!(
            MtlTexture::new(info, Extent3d::new_2d(4, 4)).unwrap_err(),
            BackendError::TooManyMipLevels { count: 20, max: 3 }
        );
        assert!(MtlTexture::new(info, Extent3d::new_2d(1 << 19, 1)).is_ok());
    }

    #[test]
    fn test_rejects_wrong_backend_and_empty_size() {
        let mock = TextureInfo::from(MockTextureInfo::default());
        assert!(matches!(
            MtlTexture::new(mock, Extent3d::new_2d(4, 4)),
            Err(BackendError::BackendMismatch { .. })
        ));
        assert!(matches!(
            MtlTexture::new(TextureInfo::default(), Extent3d::new_2d(4, 4)),
            Err(BackendError::InvalidTextureInfo)
        ));

        let metal = TextureInfo::from(MtlTextureInfo::default());
        assert!(matches!(
            MtlTexture::new(metal, Extent3d::new_2d(0, 4)),
            Err(BackendError::InvalidDimensions(_))
        ));
    }
}
