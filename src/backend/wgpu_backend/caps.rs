//! wgpu capability queries.

use super::{texture_format_from_wgpu, WgpuTextureSpec};
use crate::backend::sealed::Sealed;
use crate::backend::{check_common, BackendApi, BackendError, BackendResult, BackendSpecAccess};
use crate::texture_info::TextureInfo;
use crate::CapsConfig;

/// Answers which wgpu texture descriptors can be sampled or rendered to.
#[derive(Debug, Clone, Default)]
pub struct WgpuCaps {
    config: CapsConfig,
}

impl WgpuCaps {
    pub fn new(config: CapsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CapsConfig {
        &self.config
    }

    pub fn is_format_supported(&self, format: wgpu::TextureFormat) -> bool {
        texture_format_from_wgpu(format).is_some()
    }

    pub fn is_texturable(&self, info: &TextureInfo) -> bool {
        self.checked_spec(info)
            .is_some_and(|spec| spec.usage.contains(wgpu::TextureUsages::TEXTURE_BINDING))
    }

    /// Returns true if the texture can be a render attachment. Only 2D textures can.
    pub fn is_renderable(&self, info: &TextureInfo) -> bool {
        self.checked_spec(info).is_some_and(|spec| {
            spec.usage.contains(wgpu::TextureUsages::RENDER_ATTACHMENT)
                && spec.dimension == wgpu::TextureDimension::D2
        })
    }

    /// Validate a descriptor against wgpu and the configured limits.
    pub fn check_texture_info(&self, info: &TextureInfo) -> BackendResult<()> {
        check_common(info, BackendApi::Wgpu, &self.config)?;
        let spec = info
            .backend_spec(self)
            .ok_or(BackendError::InvalidTextureInfo)?;

        let Some(format) = texture_format_from_wgpu(spec.format) else {
            return Err(BackendError::UnsupportedFormat(format!("{:?}", spec.format)));
        };

        // Views may only toggle the sRGB suffix.
        if spec.view_format.remove_srgb_suffix() != spec.format.remove_srgb_suffix() {
            return Err(BackendError::UnsupportedFormat(format!(
                "{:?} viewed as {:?}",
                spec.format, spec.view_format
            )));
        }

        let aspect_ok = match spec.aspect {
            wgpu::TextureAspect::All => true,
            wgpu::TextureAspect::DepthOnly => format.is_depth_stencil(),
            wgpu::TextureAspect::StencilOnly => format.has_stencil(),
            _ => false,
        };
        if !aspect_ok {
            return Err(BackendError::UnsupportedUsage(format!(
                "aspect {:?} of {:?}",
                spec.aspect, spec.format
            )));
        }

        if info.num_samples() > 1 && spec.dimension != wgpu::TextureDimension::D2 {
            return Err(BackendError::UnsupportedUsage(
                "multisampled textures must be 2D".to_string(),
            ));
        }
        Ok(())
    }

    fn checked_spec<'a>(&self, info: &'a TextureInfo) -> Option<&'a WgpuTextureSpec> {
        if let Err(err) = self.check_texture_info(info) {
            log::debug!("WgpuCaps: rejecting {}: {}", info, err);
            return None;
        }
        info.backend_spec(self)
    }
}

impl Sealed for WgpuCaps {}

impl BackendSpecAccess for WgpuCaps {
    type Spec = WgpuTextureSpec;
}
