//! Render failure kinds

use thiserror::Error;

/// Configuration mistakes surfaced while rendering a widget.
///
/// Both variants are developer/configuration errors, not transient
/// conditions: callers should let them propagate through the page-render
/// pipeline rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Neither base editor asset is readable under the web root
    #[error("Redactor is not installed: neither redactor.js nor redactor.css is readable (check redactor_dir)")]
    NotInstalled,
    /// Plugins requested by a field but absent from the configured allow-list
    #[error("plugins not in the configured allow-list: {}", .0.join(", "))]
    MissingPlugins(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_plugins_message_names_offenders() {
        let err = RenderError::MissingPlugins(vec!["clips".to_string(), "fontsize".to_string()]);
        let message = err.to_string();
        assert!(message.contains("clips, fontsize"));
    }

    #[test]
    fn test_not_installed_message_points_at_config() {
        assert!(RenderError::NotInstalled.to_string().contains("redactor_dir"));
    }
}
