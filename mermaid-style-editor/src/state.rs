use crate::theme::{StyleFields, ThemeName, ThemeVariables, theme_variables};

/// The three inputs of a render, owned by the page container.
///
/// Setters report whether the value actually changed so the caller knows
/// when a new render is due.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioState {
    source: String,
    theme: ThemeName,
    variables: ThemeVariables,
}

impl Default for StudioState {
    fn default() -> Self {
        let theme = ThemeName::default();
        Self {
            source: String::new(),
            theme,
            variables: theme_variables(theme, &StyleFields::default()),
        }
    }
}

impl StudioState {
    /// The diagram source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    /// Renderer variables derived from the style controls.
    #[must_use]
    pub fn variables(&self) -> &ThemeVariables {
        &self.variables
    }

    pub fn set_source(&mut self, source: String) -> bool {
        replace(&mut self.source, source)
    }

    pub fn set_theme(&mut self, theme: ThemeName) -> bool {
        replace(&mut self.theme, theme)
    }

    pub fn set_variables(&mut self, variables: ThemeVariables) -> bool {
        replace(&mut self.variables, variables)
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = StudioState::default();
        assert_eq!(state.source(), "");
        assert_eq!(state.theme(), ThemeName::Default);
        assert_eq!(state.variables().len(), 19);
        assert_eq!(state.variables().get("mainBkg"), Some("#ffffff"));
    }

    #[test]
    fn test_setters_report_changes() {
        let mut state = StudioState::default();

        assert!(state.set_source(String::from("graph TD")));
        assert!(!state.set_source(String::from("graph TD")));

        assert!(state.set_theme(ThemeName::Dark));
        assert!(!state.set_theme(ThemeName::Dark));

        assert!(state.set_variables(ThemeVariables::default()));
        assert!(!state.set_variables(ThemeVariables::default()));
        assert!(state.variables().is_empty());
    }
}
