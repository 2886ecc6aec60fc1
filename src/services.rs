//! Service Catalog
//!
//! The four consulting offerings and their static descriptors, used by the
//! navigation panel, the home grid, and the storage key families.

use serde::{Deserialize, Serialize};

/// One of the four independent consulting offerings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Icon,
    Aicut,
    Staging,
    Poster,
}

impl ServiceKind {
    /// All services, in panel display order
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::Icon,
        ServiceKind::Aicut,
        ServiceKind::Staging,
        ServiceKind::Poster,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Icon => "icon",
            ServiceKind::Aicut => "aicut",
            ServiceKind::Staging => "staging",
            ServiceKind::Poster => "poster",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "icon" => Some(ServiceKind::Icon),
            "aicut" => Some(ServiceKind::Aicut),
            "staging" => Some(ServiceKind::Staging),
            "poster" => Some(ServiceKind::Poster),
            _ => None,
        }
    }

    pub fn descriptor(&self) -> &'static ServiceDescriptor {
        &SERVICES[*self as usize]
    }

    pub fn label(&self) -> &'static str {
        self.descriptor().label
    }
}

/// Static metadata for one service entry
pub struct ServiceDescriptor {
    pub kind: ServiceKind,
    pub label: &'static str,
    pub desc: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
    /// Summary record key, also the pre-namespacing storage key
    pub legacy_key: &'static str,
}

/// Fixed 4-entry service table, indexed by `ServiceKind as usize`
pub static SERVICES: [ServiceDescriptor; 4] = [
    ServiceDescriptor {
        kind: ServiceKind::Icon,
        label: "Brand Icon",
        desc: "Logo and profile icon direction",
        icon: "◆",
        path: "/promotion/icon/interview",
        legacy_key: "promo_icon_v1",
    },
    ServiceDescriptor {
        kind: ServiceKind::Aicut,
        label: "AI Cut Model",
        desc: "Virtual model product cuts",
        icon: "▣",
        path: "/promotion/aicut/interview",
        legacy_key: "promo_aicut_v1",
    },
    ServiceDescriptor {
        kind: ServiceKind::Staging,
        label: "Staging Cut",
        desc: "Styled product scene shots",
        icon: "▤",
        path: "/promotion/staging/interview",
        legacy_key: "promo_staging_v1",
    },
    ServiceDescriptor {
        kind: ServiceKind::Poster,
        label: "Promo Poster",
        desc: "Campaign poster and copy",
        icon: "▥",
        path: "/promotion/poster/interview",
        legacy_key: "promo_poster_v1",
    },
];
