//! Handing a compose URL to the desktop's default browser

use crate::error::{Error, Result};
use crate::utils::url::{is_web_url, parse_url};
use std::process::Command;
use tracing::{debug, info};

/// Desktop platforms with distinct URL openers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Unix,
}

impl Platform {
    /// Platform this binary was built for
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Command line that opens a URL with the platform's default handler
///
/// The URL is always a single argument handed straight to the opener. On
/// Windows that rules out `cmd /C start`, where `&` splits the command line.
pub fn opener_command_for(platform: Platform, url: &str) -> (String, Vec<String>) {
    match platform {
        Platform::MacOs => ("open".to_string(), vec![url.to_string()]),
        Platform::Windows => (
            "rundll32".to_string(),
            vec!["url.dll,FileProtocolHandler".to_string(), url.to_string()],
        ),
        Platform::Unix => ("xdg-open".to_string(), vec![url.to_string()]),
    }
}

/// Command line that opens a URL on the current platform
pub fn opener_command(url: &str) -> (String, Vec<String>) {
    opener_command_for(Platform::current(), url)
}

/// Check that a URL is something a browser can be pointed at
pub fn validate_launch_target(url: &str) -> Result<()> {
    let parsed = parse_url(url)?;
    if !is_web_url(&parsed) {
        return Err(Error::Launch(format!("Refusing to open non-web URL: {}", url)));
    }
    Ok(())
}

/// Open a compose URL in the default browser and wait for the opener to exit
pub fn open_url(url: &str) -> Result<()> {
    validate_launch_target(url)?;

    let (program, args) = opener_command(url);
    debug!("Launching {} {:?}", program, args);

    let status = Command::new(&program).args(&args).status()?;

    if !status.success() {
        return Err(Error::Launch(format!("{} exited with {}", program, status)));
    }

    info!("🌐 Opened compose window via {}", program);
    Ok(())
}
