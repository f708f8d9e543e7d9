//! Top navigation bar with a collapsible mobile menu.

use crate::highlight::escape_html;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    fn render(&self) -> String {
        format!(
            "<a href=\"{}\">{}</a>",
            escape_html(&self.href),
            escape_html(&self.label)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Navbar {
    pub brand: String,
    pub links: Vec<NavLink>,
    pub actions: Vec<NavLink>,
    #[serde(skip)]
    mobile_menu_open: bool,
}

impl Navbar {
    pub fn new(brand: impl Into<String>, links: Vec<NavLink>, actions: Vec<NavLink>) -> Self {
        Self {
            brand: brand.into(),
            links,
            actions,
            mobile_menu_open: false,
        }
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn render(&self) -> String {
        let mut out = String::from("<nav class=\"navbar\">\n");

        let links: String = self.links.iter().map(NavLink::render).collect();
        out.push_str(&format!("<div class=\"nav-links\">{links}</div>\n"));
        out.push_str(&format!(
            "<div class=\"nav-brand\"><a href=\"/\">{}</a></div>\n",
            escape_html(&self.brand)
        ));
        let actions: String = self.actions.iter().map(NavLink::render).collect();
        out.push_str(&format!(
            "<div class=\"nav-actions\">{actions}<button class=\"menu-toggle\" aria-expanded=\"{}\">Menu</button></div>\n",
            self.mobile_menu_open
        ));

        // The mobile menu lists the section links plus the first action (docs).
        if self.mobile_menu_open {
            let mobile: String = self
                .links
                .iter()
                .chain(self.actions.first())
                .map(NavLink::render)
                .collect();
            out.push_str(&format!("<div class=\"mobile-menu\">{mobile}</div>\n"));
        }

        out.push_str("</nav>\n");
        out
    }
}

impl Default for Navbar {
    fn default() -> Self {
        Self::new(
            "x0",
            vec![
                NavLink::new("Ecosystem", "#features"),
                NavLink::new("How it Works", "#comparison"),
                NavLink::new("Whitepaper", "/whitepaper"),
            ],
            vec![
                NavLink::new("Docs", "https://docs.x0protocol.dev"),
                NavLink::new("GitHub", "https://github.com/x0-protocol"),
            ],
        )
    }
}
