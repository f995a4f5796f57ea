// common/src/resolver.rs
use serde::Serialize;

use crate::errors::PortalError;
use crate::models::catalog::{AppModule, Destination, Special, TIA_LOCAL_LAUNCH_ID, TIA_VNC_URL};
use crate::models::factory::{unit_path, vm_base_url};
use crate::models::session::Session;

/// Notices shown to the user for intentionally unavailable tiles.
pub const NOTICE_NOT_OPEN: &str = "该功能暂未开放，敬请期待！";
pub const NOTICE_TIA_LOCAL_RESERVED: &str = "博图软件本地路径打开功能已预留，等待配置具体路径";
pub const NOTICE_VC_NOT_INSTALLED: &str = "本地未安装VC软件";

/// What the presentation layer should do with a selected tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ResolvedAction {
    /// Open the URL in a new window.
    OpenUrl { url: String },
    /// Show the digital factory unit chooser.
    #[serde(rename = "factory_chooser")]
    OpenFactoryChooser,
    /// The tile needs a session the user does not have.
    RequiresLogin,
    /// Feature intentionally disabled; show the notice as-is.
    Unavailable { message: String },
}

impl ResolvedAction {
    fn open(url: impl Into<String>) -> Self {
        Self::OpenUrl { url: url.into() }
    }

    fn unavailable(message: &str) -> Self {
        Self::Unavailable {
            message: message.to_string(),
        }
    }
}

/// Resolve a tile selection against the current session.
///
/// Identity-based specials win over the generic destination rule,
/// which in turn only needs a session for the two sentinel
/// destinations. Fixed links open whether or not anyone is logged in.
pub fn resolve(module: &AppModule, session: Option<&Session>) -> ResolvedAction {
    if module.destination == Destination::Disabled {
        return ResolvedAction::unavailable(NOTICE_NOT_OPEN);
    }

    match module.special {
        Some(Special::DigitalFactory) => return ResolvedAction::OpenFactoryChooser,
        Some(Special::TiaPortal) => {
            // The reserved account gets a local install launch, which is
            // not wired up yet; everyone else goes through VNC.
            let reserved = session
                .map(|s| s.student_id == TIA_LOCAL_LAUNCH_ID)
                .unwrap_or(false);
            return if reserved {
                ResolvedAction::unavailable(NOTICE_TIA_LOCAL_RESERVED)
            } else {
                ResolvedAction::open(TIA_VNC_URL)
            };
        }
        Some(Special::VcSoftware) => {
            return ResolvedAction::unavailable(NOTICE_VC_NOT_INSTALLED);
        }
        None => {}
    }

    match module.destination {
        Destination::Url(url) => ResolvedAction::open(url),
        Destination::EdgeServer => match session {
            Some(s) => ResolvedAction::open(s.edge_server_url.clone()),
            None => ResolvedAction::RequiresLogin,
        },
        Destination::Dify => match session {
            Some(s) => ResolvedAction::open(s.dify_url.clone()),
            None => ResolvedAction::RequiresLogin,
        },
        Destination::Disabled => ResolvedAction::unavailable(NOTICE_NOT_OPEN),
    }
}

/// Resolve a factory unit to its full URL for the session's VM.
pub fn resolve_factory_unit(
    unit: &str,
    session: Option<&Session>,
) -> Result<String, PortalError> {
    let session = session.ok_or(PortalError::NotLoggedIn)?;
    let base_url = vm_base_url(&session.vm_number)?;
    let path = unit_path(unit).ok_or_else(|| PortalError::UnknownUnit(unit.to_string()))?;
    Ok(format!("{}{}", base_url, path))
}
