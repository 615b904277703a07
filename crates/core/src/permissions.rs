//! Permission Model
//!
//! The five runtime permissions this application requests, as a closed
//! enum rather than free-form strings, plus the caller-owned grant
//! state passed through the collection flow.

use std::fmt;

use serde::{Serialize, Serializer};

/// The closed set of permissions the application requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionKind {
    Contacts,
    Location,
    Camera,
    Storage,
    Microphone,
}

impl PermissionKind {
    /// Every known permission, in request order.
    pub const ALL: [PermissionKind; 5] = [
        PermissionKind::Contacts,
        PermissionKind::Location,
        PermissionKind::Camera,
        PermissionKind::Storage,
        PermissionKind::Microphone,
    ];

    /// Full Android permission name (e.g. "android.permission.READ_CONTACTS")
    pub fn android_name(&self) -> &'static str {
        match self {
            PermissionKind::Contacts => "android.permission.READ_CONTACTS",
            PermissionKind::Location => "android.permission.ACCESS_FINE_LOCATION",
            PermissionKind::Camera => "android.permission.CAMERA",
            PermissionKind::Storage => "android.permission.READ_EXTERNAL_STORAGE",
            PermissionKind::Microphone => "android.permission.RECORD_AUDIO",
        }
    }

    /// Short name without the android.permission prefix
    pub fn short_name(&self) -> &'static str {
        self.android_name()
            .strip_prefix("android.permission.")
            .unwrap_or_else(|| self.android_name())
    }

    /// Parse a permission identifier. Accepts both the full and the
    /// short form; unknown identifiers yield `None`.
    pub fn from_android_name(name: &str) -> Option<Self> {
        let short = name.strip_prefix("android.permission.").unwrap_or(name);
        match short {
            "READ_CONTACTS" => Some(PermissionKind::Contacts),
            "ACCESS_FINE_LOCATION" => Some(PermissionKind::Location),
            "CAMERA" => Some(PermissionKind::Camera),
            "READ_EXTERNAL_STORAGE" => Some(PermissionKind::Storage),
            "RECORD_AUDIO" => Some(PermissionKind::Microphone),
            _ => None,
        }
    }

    /// Human-readable name for UI surfaces
    pub fn display_name(&self) -> &'static str {
        match self {
            PermissionKind::Contacts => "Contacts",
            PermissionKind::Location => "Location",
            PermissionKind::Camera => "Camera",
            PermissionKind::Storage => "Storage",
            PermissionKind::Microphone => "Microphone",
        }
    }

    /// Whether a grant of this permission leads to a persisted fact.
    /// Camera and microphone gate real-time capability only.
    pub fn collects_data(&self) -> bool {
        !matches!(self, PermissionKind::Camera | PermissionKind::Microphone)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

// Records carry the short name, matching the on-disk format.
impl Serialize for PermissionKind {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.short_name())
    }
}

/// Grant state for all known permissions, owned by the caller and
/// passed explicitly into the collection flow. Everything starts
/// denied; an entry flips only on an explicit result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantSet {
    granted: [bool; PermissionKind::ALL.len()],
}

impl GrantSet {
    /// Create a grant set with every permission denied
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a permission request
    pub fn set(&mut self, kind: PermissionKind, granted: bool) {
        self.granted[kind.index()] = granted;
    }

    /// Whether the user has granted this permission
    pub fn is_granted(&self, kind: PermissionKind) -> bool {
        self.granted[kind.index()]
    }

    /// Iterate over the currently granted permissions, in request order
    pub fn granted(&self) -> impl Iterator<Item = PermissionKind> + '_ {
        PermissionKind::ALL
            .into_iter()
            .filter(|kind| self.is_granted(*kind))
    }
}
