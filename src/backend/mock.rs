//! Mock backend for testing and development.
//!
//! The mock backend has no native API behind it. Its payload is the
//! backend-neutral [`TextureFormat`] and [`TextureUsage`], which makes it the
//! backend of choice for exercising descriptor-driven code without a GPU.

use super::sealed::{BackendSpec, Sealed, SpecSlot};
use super::{
    check_common, BackendApi, BackendResult, BackendSpecAccess, NativeTextureInfo, Protected,
    TextureFormat, TextureUsage,
};
use crate::texture_info::TextureInfo;
use crate::CapsConfig;

/// Mock payload stored inside a [`TextureInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MockTextureSpec {
    pub format: TextureFormat,
    pub usage: TextureUsage,
    pub protected: Protected,
}

/// Native texture info of the mock backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MockTextureInfo {
    pub sample_count: u32,
    pub level_count: u32,
    pub format: TextureFormat,
    pub usage: TextureUsage,
    /// Mock info carries its own protection flag, mirroring Vulkan's create flags.
    pub protected: Protected,
}

impl Default for MockTextureInfo {
    fn default() -> Self {
        Self {
            sample_count: 1,
            level_count: 0,
            format: TextureFormat::default(),
            usage: TextureUsage::empty(),
            protected: Protected::No,
        }
    }
}

impl Sealed for MockTextureInfo {}

impl SpecSlot for MockTextureSpec {
    fn into_backend_spec(self) -> BackendSpec {
        BackendSpec::Mock(self)
    }

    fn select(spec: &BackendSpec) -> Option<&Self> {
        match spec {
            BackendSpec::Mock(spec) => Some(spec),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }
}

impl NativeTextureInfo for MockTextureInfo {
    type Spec = MockTextureSpec;

    const BACKEND: BackendApi = BackendApi::Mock;

    fn sample_count(&self) -> u32 {
        self.sample_count
    }

    fn level_count(&self) -> u32 {
        self.level_count
    }

    fn protected(&self) -> Protected {
        self.protected
    }

    fn to_spec(&self) -> MockTextureSpec {
        MockTextureSpec {
            format: self.format,
            usage: self.usage,
            protected: self.protected,
        }
    }

    fn from_spec(spec: &MockTextureSpec, sample_count: u32, level_count: u32) -> Self {
        Self {
            sample_count,
            level_count,
            format: spec.format,
            usage: spec.usage,
            protected: spec.protected,
        }
    }
}

impl From<MockTextureInfo> for TextureInfo {
    fn from(info: MockTextureInfo) -> Self {
        TextureInfo::from_native(&info)
    }
}

impl TextureInfo {
    pub fn mock_texture_info(&self) -> Option<MockTextureInfo> {
        self.backend_texture_info()
    }
}

/// Capability queries for the mock backend. Every format is supported.
#[derive(Debug, Clone, Default)]
pub struct MockCaps {
    config: CapsConfig,
}

impl MockCaps {
    pub fn new(config: CapsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CapsConfig {
        &self.config
    }

    pub fn is_format_supported(&self, _format: TextureFormat) -> bool {
        true
    }

    /// Returns true if the texture can be sampled in a shader.
    pub fn is_texturable(&self, info: &TextureInfo) -> bool {
        self.backend_spec_checked(info)
            .is_some_and(|spec| spec.usage.contains(TextureUsage::TEXTURE_BINDING))
    }

    /// Returns true if the texture can be used as a render attachment.
    pub fn is_renderable(&self, info: &TextureInfo) -> bool {
        self.backend_spec_checked(info)
            .is_some_and(|spec| spec.usage.contains(TextureUsage::RENDER_ATTACHMENT))
    }

    /// Validate a descriptor against this backend and its limits.
    pub fn check_texture_info(&self, info: &TextureInfo) -> BackendResult<()> {
        check_common(info, BackendApi::Mock, &self.config)
    }

    fn backend_spec_checked<'a>(&self, info: &'a TextureInfo) -> Option<&'a MockTextureSpec> {
        if let Err(err) = self.check_texture_info(info) {
            log::debug!("MockCaps: rejecting {}: {}", info, err);
            return None;
        }
        info.backend_spec(self)
    }
}

impl Sealed for MockCaps {}

impl BackendSpecAccess for MockCaps {
    type Spec = MockTextureSpec;
}

static_assertions::assert_impl_all!(MockTextureInfo: Copy, Send, Sync);
