//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Print diagnostic lines and status.
    #[default]
    Normal,
    /// Print errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows messages other than errors.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_hides_status() {
        assert!(OutputMode::Normal.shows_status());
        assert!(!OutputMode::Quiet.shows_status());
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
