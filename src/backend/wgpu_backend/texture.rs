//! wgpu texture plans.

use super::WgpuTextureSpec;
use crate::backend::sealed::Sealed;
use crate::backend::{
    check_plan, BackendApi, BackendError, BackendResult, BackendSpecAccess, Extent3d,
};
use crate::texture_info::TextureInfo;

/// A wgpu texture plan: a wgpu [`TextureInfo`] plus a size.
#[derive(Debug, Clone)]
pub struct WgpuTexture {
    info: TextureInfo,
    size: Extent3d,
}

impl WgpuTexture {
    /// Plan a texture of `size`. 1D textures must be a single row.
    ///
    /// Multisampled plans must be a single 2D layer.
    pub fn new(info: TextureInfo, size: Extent3d) -> BackendResult<Self> {
        if size.is_empty() {
            return Err(BackendError::InvalidDimensions(size));
        }
        let texture = Self { info, size };
        let spec = texture.spec()?;
        if spec.dimension == wgpu::TextureDimension::D1 && (size.height > 1 || size.depth > 1) {
            return Err(BackendError::InvalidDimensions(size));
        }
        check_plan(&info, size)?;
        log::trace!(
            "WgpuTexture: planned {}x{}x{} texture {}",
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

    /// Build the `wgpu::TextureDescriptor` for this plan.
    ///
    /// For 2D textures a depth above one becomes the array layer count.
    pub fn descriptor<'a>(
        &'a self,
        label: Option<&'a str>,
    ) -> BackendResult<wgpu::TextureDescriptor<'a>> {
        let spec = self.spec()?;
        let view_formats: &[wgpu::TextureFormat] = if spec.view_format == spec.format {
            &[]
        } else {
            std::slice::from_ref(&spec.view_format)
        };

        Ok(wgpu::TextureDescriptor {
            label,
            size: wgpu::Extent3d {
                width: self.size.width,
                height: self.size.height,
                depth_or_array_layers: self.size.depth,
            },
            mip_level_count: self.info.num_mip_levels().max(1),
            sample_count: self.info.num_samples(),
            dimension: spec.dimension,
            format: spec.format,
            usage: spec.usage,
            view_formats,
        })
    }

    fn spec(&self) -> BackendResult<&WgpuTextureSpec> {
        if !self.info.is_valid() {
            return Err(BackendError::InvalidTextureInfo);
        }
        self.info
            .backend_spec(self)
            .ok_or(BackendError::BackendMismatch {
                expected: BackendApi::Wgpu,
                found: self.info.backend(),
            })
    }
}

impl Sealed for WgpuTexture {}

impl BackendSpecAccess for WgpuTexture {
    type Spec = WgpuTextureSpec;
}
