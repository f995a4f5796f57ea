// common/src/models/catalog.rs
use serde::Serialize;

/// Where a tile points. Sentinel destinations resolve against the
/// current session instead of carrying a literal URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Fixed external link, no login required.
    Url(&'static str),
    /// Resolve to the session's edge server URL.
    EdgeServer,
    /// Resolve to the session's Dify URL.
    Dify,
    /// Tile is present but intentionally not open yet.
    Disabled,
}

/// Identity-based handling that overrides the generic destination
/// rule entirely for a handful of tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Special {
    /// Opens the factory-unit chooser instead of any URL.
    DigitalFactory,
    /// TIA Portal: local launch for the reserved account, VNC otherwise.
    TiaPortal,
    /// Visual Components: no local install available.
    VcSoftware,
}

/// One entry of the portal's tile catalog.
#[derive(Debug, Clone, Copy)]
pub struct AppModule {
    pub name: &'static str,
    pub icon: &'static str,
    pub destination: Destination,
    pub special: Option<Special>,
}

/// Remote desktop endpoint used when TIA Portal is not launched locally.
pub const TIA_VNC_URL: &str = "http://39.104.80.221:25007/vnc.html";

/// Account whose TIA Portal tile launches a local install instead of VNC.
pub const TIA_LOCAL_LAUNCH_ID: &str = "adminkm";

/// The fixed tile catalog, in display order.
const APP_MODULES: &[AppModule] = &[
    AppModule {
        name: "数字教材",
        icon: "📚",
        destination: Destination::Url(
            "https://etextbookpro.hep.com.cn/web/book/1307261328892624896",
        ),
        special: None,
    },
    AppModule {
        name: "IoT 平台",
        icon: "🌐",
        destination: Destination::Url("http://leapiot.hzzc-tech.cn/#/preview"),
        special: None,
    },
    AppModule {
        name: "IMS 平台",
        icon: "🏭",
        destination: Destination::Url("http://leaplab.hzzc-tech.cn/platform/#/leapIMS"),
        special: None,
    },
    AppModule {
        name: "博图软件",
        icon: "🔧",
        destination: Destination::Url(TIA_VNC_URL),
        special: Some(Special::TiaPortal),
    },
    AppModule {
        name: "VC 软件",
        icon: "🎮",
        destination: Destination::Url(TIA_VNC_URL),
        special: Some(Special::VcSoftware),
    },
    AppModule {
        name: "边缘服务器",
        icon: "⚡",
        destination: Destination::EdgeServer,
        special: None,
    },
    AppModule {
        name: "数字化工厂",
        icon: "🏗️",
        destination: Destination::Url("http://linux-server:8080/digital-factory"),
        special: Some(Special::DigitalFactory),
    },
    AppModule {
        name: "Dify",
        icon: "🤖",
        destination: Destination::Dify,
        special: None,
    },
    AppModule {
        name: "智能教学 AI",
        icon: "🧠",
        destination: Destination::Url("https://chat.cyberedu.tech/"),
        special: None,
    },
];

pub fn app_modules() -> &'static [AppModule] {
    APP_MODULES
}

/// Find a catalog entry by its display name.
pub fn find_module(name: &str) -> Option<&'static AppModule> {
    APP_MODULES.iter().find(|m| m.name == name)
}

/// What the presentation layer needs to render a tile.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleSummary {
    pub name: &'static str,
    pub icon: &'static str,
}

impl From<&AppModule> for ModuleSummary {
    fn from(module: &AppModule) -> Self {
        Self {
            name: module.name,
            icon: module.icon,
        }
    }
}
