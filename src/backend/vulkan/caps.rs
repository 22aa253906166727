//! Vulkan capability queries.

use ash::vk;

use super::{texture_format_from_vk, VulkanTextureSpec};
use crate::backend::sealed::Sealed;
use crate::backend::{check_common, BackendApi, BackendError, BackendResult, BackendSpecAccess};
use crate::texture_info::TextureInfo;
use crate::CapsConfig;

/// Answers which Vulkan image descriptors can be sampled or rendered to.
#[derive(Debug, Clone, Default)]
pub struct VulkanCaps {
    config: CapsConfig,
}

impl VulkanCaps {
    pub fn new(config: CapsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CapsConfig {
        &self.config
    }

    pub fn is_format_supported(&self, format: vk::Format) -> bool {
        texture_format_from_vk(format).is_some()
    }

    pub fn is_texturable(&self, info: &TextureInfo) -> bool {
        self.checked_spec(info)
            .is_some_and(|spec| spec.image_usage_flags.contains(vk::ImageUsageFlags::SAMPLED))
    }

    /// Returns true if the image can be a color or depth/stencil attachment.
    ///
    /// Linear tiling is never renderable.
    pub fn is_renderable(&self, info: &TextureInfo) -> bool {
        self.checked_spec(info).is_some_and(|spec| {
            spec.image_tiling == vk::ImageTiling::OPTIMAL
                && spec.image_usage_flags.intersects(
                    vk::ImageUsageFlags::COLOR_ATTACHMENT
                        | vk::ImageUsageFlags::DEPTH_STENCIL_ATTACHMENT,
                )
        })
    }

    /// Validate a descriptor against Vulkan and the configured limits.
    pub fn check_texture_info(&self, info: &TextureInfo) -> BackendResult<()> {
        check_common(info, BackendApi::Vulkan, &self.config)?;
        let spec = info
            .backend_spec(self)
            .ok_or(BackendError::InvalidTextureInfo)?;

        let Some(format) = texture_format_from_vk(spec.format) else {
            return Err(BackendError::UnsupportedFormat(format!("{:?}", spec.format)));
        };

        let color_aspect = spec.aspect_mask.contains(vk::ImageAspectFlags::COLOR);
        if format.is_depth_stencil() == color_aspect {
            return Err(BackendError::UnsupportedUsage(format!(
                "aspect mask {:?} does not match {:?}",
                spec.aspect_mask, spec.format
            )));
        }
        if spec.sharing_mode == vk::SharingMode::CONCURRENT {
            // Texture plans carry no queue family list.
            return Err(BackendError::UnsupportedUsage(
                "concurrent sharing mode".to_string(),
            ));
        }
        Ok(())
    }

    fn checked_spec<'a>(&self, info: &'a TextureInfo) -> Option<&'a VulkanTextureSpec> {
        if let Err(err) = self.check_texture_info(info) {
            log::debug!("VulkanCaps: rejecting {}: {}", info, err);
            return None;
        }
        info.backend_spec(self)
    }
}

impl Sealed for VulkanCaps {}

impl BackendSpecAccess for VulkanCaps {
    type Spec = VulkanTextureSpec;
}
