//! FAQ accordion: a list of question/answer pairs with at most one open.

use crate::highlight::escape_html;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

impl FaqItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Disclosure {
    items: Vec<FaqItem>,
    open: Option<usize>,
}

impl Disclosure {
    /// All items start closed
    pub fn new(items: Vec<FaqItem>) -> Self {
        Self { items, open: None }
    }

    /// Open `index`, or close it if it is already open.
    ///
    /// Opening an item closes whichever one was open before.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.items.len() {
            tracing::debug!(index, len = self.items.len(), "ignoring toggle outside item range");
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn items(&self) -> &[FaqItem] {
        &self.items
    }

    pub fn render(&self) -> String {
        let mut out = String::from("<div class=\"faq\">\n");
        for (index, item) in self.items.iter().enumerate() {
            let open = self.is_open(index);
            out.push_str(&format!(
                "<div class=\"faq-item{}\"><button aria-expanded=\"{open}\">{}</button><p>{}</p></div>\n",
                if open { " is-open" } else { "" },
                escape_html(&item.question),
                escape_html(&item.answer)
            ));
        }
        out.push_str("</div>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq() -> Disclosure {
        Disclosure::new(vec![
            FaqItem::new("What is x0?", "A payments protocol."),
            FaqItem::new("Fees?", "Low."),
            FaqItem::new("Chains?", "Several."),
        ])
    }

    #[test]
    fn test_starts_closed() {
        let faq = faq();
        assert_eq!(faq.open_index(), None);
        assert!(!faq.is_open(0));
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut faq = faq();
        faq.toggle(1);
        assert!(faq.is_open(1));
        faq.toggle(1);
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn test_opening_another_closes_previous() {
        let mut faq = faq();
        faq.toggle(0);
        faq.toggle(2);
        assert!(!faq.is_open(0));
        assert_eq!(faq.open_index(), Some(2));
    }

    #[test]
    fn test_out_of_range_toggle_is_ignored() {
        let mut faq = faq();
        faq.toggle(0);
        faq.toggle(7);
        assert_eq!(faq.open_index(), Some(0));
    }

    #[test]
    fn test_render_marks_open_item_and_escapes() {
        let mut faq = Disclosure::new(vec![
            FaqItem::new("Is <b> safe?", "Yes & no."),
            FaqItem::new("Other", "Answer"),
        ]);
        faq.toggle(0);

        let html = faq.render();
        assert!(html.contains(
            "<div class=\"faq-item is-open\"><button aria-expanded=\"true\">Is &lt;b&gt; safe?</button><p>Yes &amp; no.</p></div>"
        ));
        assert!(html.contains("<div class=\"faq-item\"><button aria-expanded=\"false\">Other</button>"));
    }
}
