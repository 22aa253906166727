//! Vulkan texture plans.

use ash::vk;

use super::VulkanTextureSpec;
use crate::backend::sealed::Sealed;
use crate::backend::{
    check_plan, BackendApi, BackendError, BackendResult, BackendSpecAccess, Extent3d,
};
use crate::texture_info::TextureInfo;

/// A Vulkan image plan: a Vulkan [`TextureInfo`] plus a size.
#[derive(Debug, Clone)]
pub struct VulkanTexture {
    info: TextureInfo,
    size: Extent3d,
}

impl VulkanTexture {
    /// Plan an image of `size`. The sample count must map onto one
    /// `VkSampleCountFlagBits` bit.
    pub fn new(info: TextureInfo, size: Extent3d) -> BackendResult<Self> {
        if size.is_empty() {
            return Err(BackendError::InvalidDimensions(size));
        }
        let texture = Self { info, size };
        texture.spec()?;
        check_plan(&info, size)?;
        log::trace!(
            "VulkanTexture: planned {}x{}x{} image {}",
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

    /// Build the `VkImageCreateInfo` for this plan.
    ///
    /// The result holds no queue family indices, so it borrows nothing.
    pub fn image_create_info(&self) -> BackendResult<vk::ImageCreateInfo<'static>> {
        let spec = self.spec()?;

        let image_type = if self.size.depth > 1 {
            vk::ImageType::TYPE_3D
        } else {
            vk::ImageType::TYPE_2D
        };

        Ok(vk::ImageCreateInfo::default()
            .flags(spec.flags)
            .image_type(image_type)
            .format(spec.format)
            .extent(vk::Extent3D {
                width: self.size.width,
                height: self.size.height,
                depth: self.size.depth,
            })
            .mip_levels(self.info.num_mip_levels().max(1))
            .array_layers(1)
            .samples(vk::SampleCountFlags::from_raw(self.info.num_samples()))
            .tiling(spec.image_tiling)
            .usage(spec.image_usage_flags)
            .sharing_mode(spec.sharing_mode)
            .initial_layout(vk::ImageLayout::UNDEFINED))
    }

    /// Subresource range covering every level of the image.
    pub fn subresource_range(&self) -> BackendResult<vk::ImageSubresourceRange> {
        let spec = self.spec()?;
        Ok(vk::ImageSubresourceRange {
            aspect_mask: spec.aspect_mask,
            base_mip_level: 0,
            level_count: self.info.num_mip_levels().max(1),
            base_array_layer: 0,
            layer_count: 1,
        })
    }

    fn spec(&self) -> BackendResult<&VulkanTextureSpec> {
        if !self.info.is_valid() {
            return Err(BackendError::InvalidTextureInfo);
        }
        self.info
            .backend_spec(self)
            .ok_or(BackendError::BackendMismatch {
                expected: BackendApi::Vulkan,
                found: self.info.backend(),
            })
    }
}

impl Sealed for VulkanTexture {}

impl BackendSpecAccess for VulkanTexture {
    type Spec = VulkanTextureSpec;
}
