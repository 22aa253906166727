//! Metal capability queries.

use super::{texture_format_from_mtl, MtlPixelFormat, MtlStorageMode, MtlTextureSpec, MtlTextureUsage};
use crate::backend::sealed::Sealed;
use crate::backend::{check_common, BackendApi, BackendError, BackendResult, BackendSpecAccess};
use crate::texture_info::TextureInfo;
use crate::CapsConfig;

/// Answers which Metal texture descriptors can be sampled or rendered to.
#[derive(Debug, Clone, Default)]
pub struct MtlCaps {
    config: CapsConfig,
}

impl MtlCaps {
    pub fn new(config: CapsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CapsConfig {
        &self.config
    }

    pub fn is_format_supported(&self, format: MtlPixelFormat) -> bool {
        texture_format_from_mtl(format).is_some()
    }

    /// Returns true if the texture can be sampled in a shader.
    ///
    /// Framebuffer-only and memoryless textures never can.
    pub fn is_texturable(&self, info: &TextureInfo) -> bool {
        self.checked_spec(info).is_some_and(|spec| {
            spec.usage.contains(MtlTextureUsage::SHADER_READ)
                && !spec.framebuffer_only
                && spec.storage_mode != MtlStorageMode::Memoryless
        })
    }

    /// Returns true if the texture can be used as a render target.
    pub fn is_renderable(&self, info: &TextureInfo) -> bool {
        self.checked_spec(info)
            .is_some_and(|spec| spec.usage.contains(MtlTextureUsage::RENDER_TARGET))
    }

    /// Validate a descriptor against Metal and the configured limits.
    pub fn check_texture_info(&self, info: &TextureInfo) -> BackendResult<()> {
        check_common(info, BackendApi::Metal, &self.config)?;
        let spec = info
            .backend_spec(self)
            .ok_or(BackendError::InvalidTextureInfo)?;

        if !self.is_format_supported(spec.format) {
            return Err(BackendError::UnsupportedFormat(format!("{:?}", spec.format)));
        }
        if spec.storage_mode == MtlStorageMode::Memoryless
            && !spec.usage.contains(MtlTextureUsage::RENDER_TARGET)
        {
            return Err(BackendError::UnsupportedUsage(
                "memoryless textures must be render targets".to_string(),
            ));
        }
        Ok(())
    }

    fn checked_spec<'a>(&self, info: &'a TextureInfo) -> Option<&'a MtlTextureSpec> {
        if let Err(err) = self.check_texture_info(info) {
            log::debug!("MtlCaps: rejecting {}: {}", info, err);
            return None;
        }
        info.backend_spec(self)
    }
}

impl Sealed for MtlCaps {}

impl BackendSpecAccess for MtlCaps {
    type Spec = MtlTextureSpec;
}
