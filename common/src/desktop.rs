// common/src/desktop.rs

/// Protocol URLs registered by the local desktop installs.
pub const TIA_PROTOCOL_URL: &str = "tia://open";
pub const VC_PROTOCOL_URL: &str = "vc://open";

pub const NOTICE_TIA_LAUNCH_FAILED: &str = "博途启动失败！请检查注册表配置";
pub const NOTICE_VC_LAUNCH_FAILED: &str = "Visual Components启动失败！请检查注册表配置";

/// Environment capability for the desktop-launch tiles.
///
/// The core never touches the host environment directly; whoever owns
/// the window (the browser shell, or a test fake) implements this.
pub trait Desktop {
    /// Ask the OS to open a custom-scheme URL. Fails when no handler
    /// is registered for the scheme.
    fn invoke_protocol(&self, url: &str) -> Result<(), String>;

    /// Best-effort window minimize/blur; has no failure mode worth
    /// reporting.
    fn minimize_window(&self);
}

/// Outcome of a fire-and-forget launch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Launched,
    /// Handler invocation failed; show this notice to the user.
    Failed { message: String },
}

fn launch(desktop: &dyn Desktop, protocol_url: &str, failure_notice: &str) -> LaunchOutcome {
    let outcome = match desktop.invoke_protocol(protocol_url) {
        Ok(()) => LaunchOutcome::Launched,
        Err(e) => {
            tracing::error!("Protocol launch failed for {}: {}", protocol_url, e);
            LaunchOutcome::Failed {
                message: failure_notice.to_string(),
            }
        }
    };
    // The window is minimized whether or not the handler fired.
    desktop.minimize_window();
    outcome
}

/// Launch TIA Portal V16 through its registered protocol handler.
pub fn launch_tia_portal(desktop: &dyn Desktop) -> LaunchOutcome {
    launch(desktop, TIA_PROTOCOL_URL, NOTICE_TIA_LAUNCH_FAILED)
}

/// Launch Visual Components 4.9 through its registered protocol handler.
pub fn launch_visual_components(desktop: &dyn Desktop) -> LaunchOutcome {
    launch(desktop, VC_PROTOCOL_URL, NOTICE_VC_LAUNCH_FAILED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeDesktop {
        fail: bool,
        invoked: RefCell<Vec<String>>,
        minimized: RefCell<u32>,
    }

    impl FakeDesktop {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                invoked: RefCell::new(Vec::new()),
                minimized: RefCell::new(0),
            }
        }
    }

    impl Desktop for FakeDesktop {
        fn invoke_protocol(&self, url: &str) -> Result<(), String> {
            self.invoked.borrow_mut().push(url.to_string());
            if self.fail {
                Err("no handler registered".to_string())
            } else {
                Ok(())
            }
        }

        fn minimize_window(&self) {
            *self.minimized.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_tia_launch_success_minimizes_window() {
        let desktop = FakeDesktop::new(false);
        assert_eq!(launch_tia_portal(&desktop), LaunchOutcome::Launched);
        assert_eq!(desktop.invoked.borrow().as_slice(), ["tia://open"]);
        assert_eq!(*desktop.minimized.borrow(), 1);
    }

    #[test]
    fn test_failed_launch_still_minimizes_window() {
        let desktop = FakeDesktop::new(true);
        let outcome = launch_visual_components(&desktop);
        assert_eq!(
            outcome,
            LaunchOutcome::Failed {
                message: NOTICE_VC_LAUNCH_FAILED.to_string()
            }
        );
        assert_eq!(desktop.invoked.borrow().as_slice(), ["vc://open"]);
        // Minimize is attempted regardless of handler outcome.
        assert_eq!(*desktop.minimized.borrow(), 1);
    }
}
