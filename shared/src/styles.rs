//! Theme-derived style slots for the subscription table.
//!
//! Styles are computed once per theme with [`compute_styles`]. The result maps
//! each semantic slot to a class name plus the CSS rules behind it; the app
//! shell injects [`StyleMap::to_css`] once and components only use class names.

use std::collections::BTreeMap;

use crate::{Breakpoint, Theme};

const CLASS_PREFIX: &str = "SubscriptionTable";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleSlot {
    TableWrapper,
    BlackBackground,
    ContentWrapper,
    DBlock,
    DNone,
}

impl StyleSlot {
    pub const ALL: [StyleSlot; 5] = [
        StyleSlot::TableWrapper,
        StyleSlot::BlackBackground,
        StyleSlot::ContentWrapper,
        StyleSlot::DBlock,
        StyleSlot::DNone,
    ];

    pub fn key(self) -> &'static str {
        match self {
            StyleSlot::TableWrapper => "tableWrapper",
            StyleSlot::BlackBackground => "blackBackground",
            StyleSlot::ContentWrapper => "contentWrapper",
            StyleSlot::DBlock => "dBlock",
            StyleSlot::DNone => "dNone",
        }
    }
}

type Declarations = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub class_name: String,
    pub declarations: Declarations,
    /// Media query -> declarations applied inside it
    pub media: Vec<(String, Declarations)>,
}

impl StyleRule {
    fn new(slot: StyleSlot) -> Self {
        Self {
            class_name: format!("{}-{}", CLASS_PREFIX, slot.key()),
            declarations: Vec::new(),
            media: Vec::new(),
        }
    }

    fn with(mut self, property: &str, value: impl Into<String>) -> Self {
        self.declarations.push((property.to_string(), value.into()));
        self
    }

    fn with_media(mut self, query: String, property: &str, value: impl Into<String>) -> Self {
        self.media.push((query, vec![(property.to_string(), value.into())]));
        self
    }

    fn write_css(&self, out: &mut String) {
        write_block(out, &self.class_name, &self.declarations);
        for (query, declarations) in &self.media {
            out.push_str(query);
            out.push_str(" {\n  ");
            write_block(out, &self.class_name, declarations);
            out.push_str("}\n");
        }
    }
}

fn write_block(out: &mut String, class_name: &str, declarations: &Declarations) {
    out.push('.');
    out.push_str(class_name);
    out.push_str(" {");
    for (property, value) in declarations {
        out.push_str(&format!(" {}: {};", property, value));
    }
    out.push_str(" }\n");
}

/// Class names and CSS for every [`StyleSlot`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyleMap {
    rules: BTreeMap<StyleSlot, StyleRule>,
}

impl StyleMap {
    pub fn class(&self, slot: StyleSlot) -> &str {
        self.rules
            .get(&slot)
            .map(|rule| rule.class_name.as_str())
            .unwrap_or_default()
    }

    pub fn rule(&self, slot: StyleSlot) -> Option<&StyleRule> {
        self.rules.get(&slot)
    }

    /// Stylesheet text for all slots, in slot order.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for rule in self.rules.values() {
            rule.write_css(&mut css);
        }
        css
    }
}

pub fn compute_styles(theme: &Theme) -> StyleMap {
    let rules = [
        StyleRule::new(StyleSlot::TableWrapper).with("overflow-x", "auto"),
        StyleRule::new(StyleSlot::BlackBackground)
            .with("background-color", theme.palette.primary.main.as_str()),
        StyleRule::new(StyleSlot::ContentWrapper)
            .with("padding", theme.spacing(3))
            .with_media(theme.breakpoints.down(Breakpoint::Xs), "padding", theme.spacing(2)),
        StyleRule::new(StyleSlot::DBlock).with("display", "block !important"),
        StyleRule::new(StyleSlot::DNone).with("display", "none !important"),
    ];

    let rules = StyleSlot::ALL.into_iter().zip(rules).collect();
    StyleMap { rules }
}
