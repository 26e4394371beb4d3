#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        question: "What is a headcanon?",
        answer: "A headcanon is a detail about a character that a fan believes or enjoys \
                 imagining, even though the official story never confirms it.",
    },
    FaqItem {
        question: "Do I have to pick a fandom?",
        answer: "No. The fandom is optional; it only nudges the generator toward details \
                 that fit that universe. Type your own if it is not in the list.",
    },
    FaqItem {
        question: "What do the tones change?",
        answer: "Wholesome, funny, dark and emotional each draw from their own style of \
                 headcanon. Random mixes all of them.",
    },
    FaqItem {
        question: "Can I get different results for the same character?",
        answer: "Yes. Use Regenerate to ask again with exactly the same character, fandom \
                 and tone.",
    },
    FaqItem {
        question: "Can I share what I generated?",
        answer: "Copy places every headcanon on your clipboard as a bulleted list ready to \
                 paste anywhere.",
    },
];

/// Accordion where at most one item is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqAccordion {
    len: usize,
    open: Option<usize>,
}

impl FaqAccordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Expanded state as announced to assistive technology.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

impl Default for FaqAccordion {
    fn default() -> Self {
        Self::new(FAQ_ITEMS.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_item_closes_the_other() {
        let mut faq = FaqAccordion::new(3);
        faq.toggle(0);
        faq.toggle(2);
        assert!(faq.is_expanded(2));
        assert!(!faq.is_expanded(0));
        assert_eq!((0..3).filter(|i| faq.is_expanded(*i)).count(), 1);
    }

    #[test]
    fn reactivating_open_item_collapses_everything() {
        let mut faq = FaqAccordion::new(3);
        faq.toggle(1);
        faq.toggle(1);
        assert!((0..3).all(|i| !faq.is_expanded(i)));
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut faq = FaqAccordion::new(2);
        faq.toggle(1);
        faq.toggle(5);
        assert!(faq.is_expanded(1));
        assert_eq!((0..2).filter(|i| faq.is_expanded(*i)).count(), 1);
    }
}
