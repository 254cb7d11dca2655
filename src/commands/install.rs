//! Install command handler

use std::path::Path;

use anyhow::{bail, Result};

use devcli_demo::cli::InstallArgs;
use devcli_demo::reference::install::{
    find_method, InstallMethod, INSTALL_METHODS, PLATFORMS, POST_INSTALL, REQUIREMENTS,
};
use devcli_demo::tui::current_theme;

use super::{load_config, print_footer, stdout_is_tty, styled};

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &InstallArgs, config_path: Option<&Path>) -> Result<()> {
    load_config(config_path)?;

    if let Some(id) = args.method.as_deref() {
        let Some(method) = find_method(id) else {
            let ids: Vec<_> = INSTALL_METHODS.iter().map(|m| m.id).collect();
            bail!("Unknown install method '{}'. Available: {}", id, ids.join(", "));
        };
        print!("{}", format_method(method, stdout_is_tty()));
        return Ok(());
    }

    print!("{}", format_install_page(stdout_is_tty()));
    print_footer();
    Ok(())
}

pub fn format_method(method: &InstallMethod, colored: bool) -> String {
    let theme = current_theme();
    let mut out = format!(
        "{}\n{}\n",
        styled(colored, method.name, |t| theme.accent_text(t)),
        styled(colored, method.description, |t| theme.secondary_text(t))
    );
    for line in method.command.lines() {
        out.push_str(&format!("  {}\n", styled(colored, line, |t| theme.primary_text(t))));
    }
    out
}

/// Every install method, then post-install steps, platforms and requirements.
pub fn format_install_page(colored: bool) -> String {
    let theme = current_theme();
    let mut out = String::from("Install DevCLI\n\n");

    for method in INSTALL_METHODS {
        out.push_str(&format_method(method, colored));
        out.push('\n');
    }

    out.push_str("Post-Installation\n");
    for (i, step) in POST_INSTALL.iter().enumerate() {
        out.push_str(&format!("  {}. {}: {}\n", i + 1, step.title, step.command));
    }

    out.push_str("\nPlatform Support\n");
    for platform in PLATFORMS {
        let status = platform.status.as_str();
        out.push_str(&format!(
            "  {:<8} {:<24} {}\n",
            platform.name,
            platform.archs.join(", "),
            styled(colored, status, |t| theme.success_text(t))
        ));
    }

    out.push_str("\nSystem Requirements\n");
    for req in REQUIREMENTS {
        out.push_str(&format!("  {:<11} {}\n", req.label, req.value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_lists_each_command_line() {
        let text = format_method(find_method("manual").unwrap(), false);
        assert!(text.contains("Manual Download"));
        assert!(text.contains("  # Download from GitHub releases\n"));
        assert!(text.contains("  # https://github.com/devcli/devcli/releases\n"));
    }

    #[test]
    fn page_covers_all_sections() {
        let text = format_install_page(false);
        assert!(text.contains("brew install devcli"));
        assert!(text.contains("1. Verify installation: devcli --version"));
        assert!(text.contains("FreeBSD"));
        assert!(text.contains("beta"));
        assert!(text.contains("64 MB RAM minimum"));
    }
}
