//! Backend-agnostic texture descriptor.
//!
//! A [`TextureInfo`] is either empty (the default, not bound to any backend) or
//! holds exactly one backend's spec next to the sample count, mip level count and
//! protection flag every backend shares. Generic code only sees the shared
//! fields; the backend payload goes back out through
//! [`TextureInfo::backend_texture_info`]. Raw spec access is crate-private and
//! reserved for each backend's own caps and texture types.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::backend::sealed::{BackendSpec, SpecSlot};
use crate::backend::{BackendApi, BackendSpecAccess, NativeTextureInfo, Protected};

/// Metadata describing a GPU texture for one of the compiled-in backends.
///
/// ```
/// use texture_info::{BackendApi, MockTextureInfo, TextureInfo};
///
/// let info = TextureInfo::from(MockTextureInfo::default());
/// assert_eq!(info.backend(), BackendApi::Mock);
/// assert_eq!(info.mock_texture_info(), Some(MockTextureInfo::default()));
/// ```
///
/// The raw backend spec stays out of reach, even with a caps type in hand:
///
/// ```compile_fail
/// use texture_info::{CapsConfig, MockCaps, MockTextureInfo, TextureInfo};
///
/// let info = TextureInfo::from(MockTextureInfo::default());
/// let caps = MockCaps::new(CapsConfig::default());
/// let _spec = info.backend_spec(&caps);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextureInfo {
    // The backend tag and validity are both derived from this slot.
    spec: Option<BackendSpec>,
    sample_count: u32,
    level_count: u32,
    protected: Protected,
}

impl TextureInfo {
    /// Create an empty descriptor not bound to any backend.
    pub fn new() -> Self {
        Self {
            spec: None,
            sample_count: 1,
            level_count: 0,
            protected: Protected::No,
        }
    }

    /// Bind a descriptor to the backend of `info`.
    ///
    /// The native struct must describe at least one sample.
    pub fn from_native<I: NativeTextureInfo>(info: &I) -> Self {
        debug_assert!(info.sample_count() >= 1, "sample count must be at least 1");
        let spec = info.to_spec().into_backend_spec();
        debug_assert_eq!(spec.backend(), I::BACKEND);
        Self {
            spec: Some(spec),
            sample_count: info.sample_count(),
            level_count: info.level_count(),
            protected: info.protected(),
        }
    }

    /// Returns true once the descriptor is bound to a concrete backend.
    pub fn is_valid(&self) -> bool {
        self.spec.is_some()
    }

    /// Backend of the stored spec, [`BackendApi::Mock`] when invalid.
    pub fn backend(&self) -> BackendApi {
        self.spec
            .as_ref()
            .map_or(BackendApi::default(), BackendSpec::backend)
    }

    /// MSAA sample count, 1 when invalid.
    pub fn num_samples(&self) -> u32 {
        self.sample_count
    }

    /// Mip level count, 0 when invalid.
    pub fn num_mip_levels(&self) -> u32 {
        self.level_count
    }

    /// Whether the texture lives in protected memory, [`Protected::No`] when invalid.
    pub fn is_protected(&self) -> Protected {
        self.protected
    }

    /// Rebuild the native texture info of backend `I`.
    ///
    /// Returns `None` when the descriptor is invalid or bound to another backend.
    pub fn backend_texture_info<I: NativeTextureInfo>(&self) -> Option<I> {
        let spec = self.spec.as_ref().and_then(<I::Spec as SpecSlot>::select)?;
        Some(I::from_spec(spec, self.sample_count, self.level_count))
    }

    /// Write the native texture info of backend `I` into `info`.
    ///
    /// Returns false and leaves `info` untouched when the descriptor is invalid or
    /// bound to another backend.
    pub fn get_backend_texture_info<I: NativeTextureInfo>(&self, info: &mut I) -> bool {
        match self.backend_texture_info::<I>() {
            Some(native) => {
                *info = native;
                true
            }
            None => false,
        }
    }

    /// Borrow the raw backend spec.
    ///
    /// Crate-private; the accessor bound limits each backend's caps and texture
    /// types to their own spec.
    pub(crate) fn backend_spec<A: BackendSpecAccess>(&self, _accessor: &A) -> Option<&A::Spec> {
        self.spec.as_ref().and_then(<A::Spec as SpecSlot>::select)
    }
}

impl Default for TextureInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TextureInfo {
    fn eq(&self, other: &Self) -> bool {
        match (&self.spec, &other.spec) {
            (None, None) => true,
            // Different backends land in different variants and never compare equal.
            (Some(a), Some(b)) => {
                a == b
                    && self.sample_count == other.sample_count
                    && self.level_count == other.level_count
                    && self.protected == other.protected
            }
            _ => false,
        }
    }
}

impl Eq for TextureInfo {}

impl Hash for TextureInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.spec.hash(state);
        if self.spec.is_some() {
            self.sample_count.hash(state);
            self.level_count.hash(state);
            self.protected.hash(state);
        }
    }
}

impl fmt::Display for TextureInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.spec {
            None => write!(f, "TextureInfo(invalid)"),
            Some(spec) => write!(
                f,
                "TextureInfo(backend={}, samples={}, levels={}, protected={:?}, spec={:?})",
                spec.backend(),
                self.sample_count,
                self.level_count,
                self.protected,
                spec
            ),
        }
    }
}

static_assertions::assert_impl_all!(TextureInfo: Copy, Send, Sync, Eq, Hash);
