#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Generator,
    Output,
    HowItWorks,
    Faq,
}

impl Section {
    pub const NAVIGABLE: [Section; 3] = [Section::Generator, Section::HowItWorks, Section::Faq];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Generator => "#generator",
            Section::Output => "#output",
            Section::HowItWorks => "#how-it-works",
            Section::Faq => "#faq",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Generator => "Generator",
            Section::Output => "Results",
            Section::HowItWorks => "How it works",
            Section::Faq => "FAQ",
        }
    }

    pub fn from_anchor(href: &str) -> Option<Self> {
        [
            Section::Generator,
            Section::Output,
            Section::HowItWorks,
            Section::Faq,
        ]
        .into_iter()
        .find(|section| section.anchor() == href)
    }
}

#[derive(Debug, Default)]
pub struct AnchorNavigator {
    pending: Option<Section>,
}

impl AnchorNavigator {
    /// Handles an in-page link. Returns `false` when the link is not
    /// intercepted: the bare `#` placeholder or an unknown target.
    pub fn navigate(&mut self, href: &str) -> bool {
        if href == "#" {
            return false;
        }
        match Section::from_anchor(href) {
            Some(section) => {
                self.pending = Some(section);
                true
            }
            None => {
                tracing::debug!(href, "ignoring link to unknown section");
                false
            }
        }
    }

    /// Consumes the pending scroll if it targets `section`.
    pub fn take_for(&mut self, section: Section) -> bool {
        if self.pending == Some(section) {
            self.pending = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_hash_is_not_intercepted() {
        let mut nav = AnchorNavigator::default();
        assert!(!nav.navigate("#"));
        assert!(Section::NAVIGABLE.iter().all(|s| !nav.take_for(*s)));
    }

    #[test]
    fn unknown_target_is_not_intercepted() {
        let mut nav = AnchorNavigator::default();
        assert!(!nav.navigate("#pricing"));
        assert!(!nav.take_for(Section::Output));
        assert!(Section::NAVIGABLE.iter().all(|s| !nav.take_for(*s)));
    }

    #[test]
    fn known_anchor_scrolls_once_to_its_section() {
        let mut nav = AnchorNavigator::default();
        assert!(nav.navigate("#faq"));
        assert!(!nav.take_for(Section::Generator));
        assert!(nav.take_for(Section::Faq));
        assert!(!nav.take_for(Section::Faq));
    }
}
