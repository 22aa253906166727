//! Core backend abstraction traits
//!
//! These traits define what every backend must provide to plug its native texture
//! info into [`TextureInfo`](crate::TextureInfo), and who may read the stored payload back.

use std::fmt;
use std::hash::Hash;

use thiserror::Error;

use super::sealed::{Sealed, SpecSlot};
use super::types::Extent3d;
use super::{BackendApi, Protected};

/// Backend error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Texture info is not bound to a backend")]
    InvalidTextureInfo,
    #[error("Backend mismatch: expected {expected}, found {found}")]
    BackendMismatch {
        expected: BackendApi,
        found: BackendApi,
    },
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Unsupported sample count {count} (max {max})")]
    UnsupportedSampleCount { count: u32, max: u32 },
    #[error("Too many mip levels: {count} (max {max})")]
    TooManyMipLevels { count: u32, max: u32 },
    #[error("Multisampled textures cannot have mip levels")]
    MultisampledMipmaps,
    #[error("Protected textures are not supported")]
    ProtectedNotSupported,
    #[error("Invalid texture dimensions: {0:?}")]
    InvalidDimensions(Extent3d),
    #[error("Unsupported usage: {0}")]
    UnsupportedUsage(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

/// A backend's native texture info struct.
///
/// Implemented once per backend. Converting into a [`TextureInfo`](crate::TextureInfo) splits the
/// struct into the shared sample/level counts and the backend spec; extracting
/// reassembles it.
pub trait NativeTextureInfo: Sealed + Copy {
    /// Backend-specific part stored inside the descriptor
    type Spec: SpecSlot + Copy + Eq + Hash + fmt::Debug;

    /// Backend this info belongs to
    const BACKEND: BackendApi;

    fn sample_count(&self) -> u32;

    fn level_count(&self) -> u32;

    /// Protection carried by the native struct. Backends without a protection
    /// flag of their own report [`Protected::No`].
    fn protected(&self) -> Protected {
        Protected::No
    }

    /// Split off the backend spec.
    fn to_spec(&self) -> Self::Spec;

    /// Rebuild the native struct from a spec plus the shared counts.
    fn from_spec(spec: &Self::Spec, sample_count: u32, level_count: u32) -> Self;
}

/// Grants raw read access to a backend's spec stored in a [`TextureInfo`](crate::TextureInfo).
///
/// Implemented only by each backend's own caps and texture types.
pub(crate) trait BackendSpecAccess: Sealed {
    type Spec: SpecSlot;
}
